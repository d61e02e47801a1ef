use super::{mask_spans, remove_spans, GRADLE_DESCRIPTOR, GRADLE_KOTLIN_DESCRIPTOR};
use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use crate::extension_removal::domain::{Dependency, DependencyKey};
use crate::ports::outbound::DescriptorRepository;
use crate::shared::error::ExtensionError;
use crate::shared::Result;
use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// `<configuration> 'g:a[:v]'` or `<configuration>("g:a[:v]")`, with an
/// optional trailing line comment
static DEPENDENCY_LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*(?:implementation|api|compileOnly|runtimeOnly|testImplementation|testCompileOnly|testRuntimeOnly|annotationProcessor|compile|testCompile|runtime|testRuntime)\s*(?:\(\s*)?['"]([^'"]+)['"]\s*\)?\s*(?://.*)?$"#,
    )
    .expect("dependency line pattern is valid")
});

/// Block comments, with strings and line comments consumed first so a `/*`
/// inside them does not open a comment
static BLOCK_COMMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)'[^'\n]*'|"[^"\n]*"|//[^\n]*|(/\*.*?(?:\*/|\z))"#)
        .expect("block comment pattern is valid")
});

/// GradleDescriptor adapter for `build.gradle` and `build.gradle.kts`
///
/// Dependencies are read line by line. Platform imports and buildscript
/// `classpath` entries are not project dependencies and are never touched.
pub struct GradleDescriptor {
    reader: FileSystemReader,
    writer: FileSystemWriter,
}

impl GradleDescriptor {
    pub fn new() -> Self {
        Self {
            reader: FileSystemReader::new(),
            writer: FileSystemWriter::new(),
        }
    }

    /// Declared dependencies with the span of their whole line
    ///
    /// Lines inside `/* ... */` comments are blanked before matching.
    fn scan(content: &str) -> Vec<(Dependency, Range<usize>)> {
        let comments: Vec<Range<usize>> = BLOCK_COMMENT_PATTERN
            .captures_iter(content)
            .filter_map(|captures| captures.get(1).map(|m| m.range()))
            .collect();
        let masked = mask_spans(content, &comments);

        let mut declared = Vec::new();
        let mut offset = 0;

        for line in masked.split_inclusive('\n') {
            let span = offset..offset + line.len();
            offset = span.end;

            let Some(captures) = DEPENDENCY_LINE_PATTERN.captures(line.trim_end()) else {
                continue;
            };
            if let Some(dependency) = captures.get(1).and_then(|m| parse_notation(m.as_str())) {
                declared.push((dependency, span));
            }
        }

        declared
    }
}

impl Default for GradleDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorRepository for GradleDescriptor {
    fn descriptor_path(&self, project_path: &Path) -> PathBuf {
        let groovy = project_path.join(GRADLE_DESCRIPTOR);
        let kotlin = project_path.join(GRADLE_KOTLIN_DESCRIPTOR);
        if !groovy.exists() && kotlin.exists() {
            kotlin
        } else {
            groovy
        }
    }

    fn read_dependencies(&self, project_path: &Path) -> Result<Vec<Dependency>> {
        let content = self
            .reader
            .read_descriptor(&self.descriptor_path(project_path))?;

        Ok(Self::scan(&content)
            .into_iter()
            .map(|(dependency, _)| dependency)
            .collect())
    }

    fn write_dependencies(&self, project_path: &Path, dependencies: &[Dependency]) -> Result<()> {
        let path = self.descriptor_path(project_path);
        let content = self.reader.read_descriptor(&path)?;
        let declared = Self::scan(&content);

        let kept: HashSet<DependencyKey> = dependencies.iter().map(Dependency::key).collect();
        let declared_keys: HashSet<DependencyKey> =
            declared.iter().map(|(dependency, _)| dependency.key()).collect();
        if let Some(unknown) = kept.iter().find(|key| !declared_keys.contains(*key)) {
            return Err(ExtensionError::DescriptorWriteError {
                path,
                details: format!("{} is not declared in the descriptor", unknown),
            }
            .into());
        }

        let removed_spans = declared
            .into_iter()
            .filter(|(dependency, _)| !kept.contains(&dependency.key()))
            .map(|(_, span)| span)
            .collect();

        self.writer
            .write_atomically(&path, &remove_spans(&content, removed_spans))
    }
}

/// Parses `group:artifact[:version[:classifier]]` dependency notation
fn parse_notation(notation: &str) -> Option<Dependency> {
    let parts: Vec<&str> = notation.split(':').map(str::trim).collect();
    if !(2..=4).contains(&parts.len()) || parts.iter().any(|part| part.is_empty()) {
        return None;
    }

    let version = parts.get(2).map(|v| v.to_string());
    Dependency::new(parts[0], parts[1], version).ok()
}
