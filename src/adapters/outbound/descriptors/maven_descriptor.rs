use super::{line_span, mask_spans, remove_spans, MAVEN_DESCRIPTOR};
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

/// Sections whose `<dependency>` blocks are not project dependencies
const IGNORED_SECTIONS: [&str; 3] = ["dependencyManagement", "plugins", "profiles"];

static IGNORED_SECTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    IGNORED_SECTIONS
        .iter()
        .map(|name| {
            Regex::new(&format!(r"(?s)<{0}\b[^>]*>.*?</{0}\s*>", name))
                .expect("section pattern is valid")
        })
        .collect()
});

static COMMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));

static DEPENDENCY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<dependency\b[^>]*>(.*?)</dependency\s*>")
        .expect("dependency pattern is valid")
});

static EXCLUSIONS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<exclusions\b[^>]*>.*?</exclusions\s*>").expect("exclusions pattern is valid")
});

/// A `<dependency>` block and where it sits in the pom
struct DeclaredDependency {
    dependency: Dependency,
    span: Range<usize>,
}

/// MavenDescriptor adapter for `pom.xml` files
///
/// Only the `<dependency>` blocks of the project's own `<dependencies>`
/// are considered; managed dependencies, plugin dependencies and profile
/// dependencies are left alone. Rewrites remove whole blocks and keep
/// every other byte of the file.
pub struct MavenDescriptor {
    reader: FileSystemReader,
    writer: FileSystemWriter,
}

impl MavenDescriptor {
    pub fn new() -> Self {
        Self {
            reader: FileSystemReader::new(),
            writer: FileSystemWriter::new(),
        }
    }

    /// Scans the pom with comments blanked out, so spans index `content`
    fn scan(&self, path: &Path, content: &str) -> Result<Vec<DeclaredDependency>> {
        let comments: Vec<Range<usize>> = COMMENT_PATTERN
            .find_iter(content)
            .map(|m| m.range())
            .collect();
        let masked = mask_spans(content, &comments);

        let ignored: Vec<Range<usize>> = IGNORED_SECTION_PATTERNS
            .iter()
            .flat_map(|pattern| pattern.find_iter(&masked).map(|m| m.range()))
            .collect();

        let mut declared = Vec::new();
        for captures in DEPENDENCY_PATTERN.captures_iter(&masked) {
            let (Some(block), Some(body)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            if ignored
                .iter()
                .any(|range| range.start <= block.start() && block.end() <= range.end)
            {
                continue;
            }

            let dependency = parse_block(body.as_str()).map_err(|reason| {
                ExtensionError::DescriptorReadError {
                    path: path.to_path_buf(),
                    details: format!("{} at line {}", reason, line_number(content, block.start())),
                }
            })?;

            declared.push(DeclaredDependency {
                dependency,
                span: block.range(),
            });
        }

        Ok(declared)
    }
}

impl Default for MavenDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorRepository for MavenDescriptor {
    fn descriptor_path(&self, project_path: &Path) -> PathBuf {
        project_path.join(MAVEN_DESCRIPTOR)
    }

    fn read_dependencies(&self, project_path: &Path) -> Result<Vec<Dependency>> {
        let path = self.descriptor_path(project_path);
        let content = self.reader.read_descriptor(&path)?;

        Ok(self
            .scan(&path, &content)?
            .into_iter()
            .map(|declared| declared.dependency)
            .collect())
    }

    fn write_dependencies(&self, project_path: &Path, dependencies: &[Dependency]) -> Result<()> {
        let path = self.descriptor_path(project_path);
        let content = self.reader.read_descriptor(&path)?;
        let declared = self.scan(&path, &content)?;

        let kept: HashSet<DependencyKey> = dependencies.iter().map(Dependency::key).collect();
        let declared_keys: HashSet<DependencyKey> =
            declared.iter().map(|d| d.dependency.key()).collect();
        if let Some(unknown) = kept.iter().find(|key| !declared_keys.contains(*key)) {
            return Err(ExtensionError::DescriptorWriteError {
                path,
                details: format!("{} is not declared in the descriptor", unknown),
            }
            .into());
        }

        let removed_spans = declared
            .iter()
            .filter(|d| !kept.contains(&d.dependency.key()))
            .map(|d| line_span(&content, d.span.clone()))
            .collect();

        self.writer
            .write_atomically(&path, &remove_spans(&content, removed_spans))
    }
}

fn parse_block(body: &str) -> std::result::Result<Dependency, String> {
    let body = EXCLUSIONS_PATTERN.replace_all(body, "");

    let artifact = element_text(&body, "artifactId")
        .ok_or_else(|| "<dependency> without <artifactId>".to_string())?;
    let group = element_text(&body, "groupId").unwrap_or_default();
    let version = element_text(&body, "version");

    Dependency::new(group, artifact, version).map_err(|e| e.to_string())
}

fn element_text(body: &str, element: &str) -> Option<String> {
    let open = format!("<{}>", element);
    let close = format!("</{}>", element);
    let start = body.find(&open)? + open.len();
    let end = start + body[start..].find(&close)?;
    Some(body[start..end].trim().to_string())
}

fn line_number(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const POM: &str = r#"<?xml version="1.0"?>
<project>
  <modelVersion>4.0.0</modelVersion>
  <dependencyManagement>
    <dependencies>
      <dependency>
        <groupId>io.quarkus</groupId>
        <artifactId>quarkus-bom</artifactId>
        <version>${quarkus.platform.version}</version>
        <type>pom</type>
        <scope>import</scope>
      </dependency>
    </dependencies>
  </dependencyManagement>
  <dependencies>
    <dependency>
      <groupId>io.quarkus</groupId>
      <artifactId>quarkus-resteasy</artifactId>
    </dependency>
    <!--
    <dependency>
      <groupId>io.quarkus</groupId>
      <artifactId>quarkus-commented-out</artifactId>
    </dependency>
    -->
    <dependency>
      <groupId>io.quarkus</groupId>
      <artifactId>quarkus-agroal</artifactId>
      <exclusions>
        <exclusion>
          <groupId>org.example</groupId>
          <artifactId>excluded</artifactId>
        </exclusion>
      </exclusions>
    </dependency>
    <dependency>
      <groupId>commons-io</groupId>
      <artifactId>commons-io</artifactId>
      <version>2.6</version>
    </dependency>
  </dependencies>
  <build>
    <plugins>
      <plugin>
        <artifactId>maven-surefire-plugin</artifactId>
        <dependencies>
          <dependency>
            <groupId>org.example</groupId>
            <artifactId>plugin-only</artifactId>
          </dependency>
        </dependencies>
      </plugin>
    </plugins>
  </build>
</project>
"#;

    fn project_with(content: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pom.xml"), content).unwrap();
        temp_dir
    }

    #[test]
    fn test_read_dependencies_skips_managed_plugin_and_commented_blocks() {
        let project = project_with(POM);

        let dependencies = MavenDescriptor::new()
            .read_dependencies(project.path())
            .unwrap();

        let coordinates: Vec<String> = dependencies.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            coordinates,
            vec![
                "io.quarkus:quarkus-resteasy",
                "io.quarkus:quarkus-agroal",
                "commons-io:commons-io:2.6"
            ]
        );
    }

    #[test]
    fn test_write_dependencies_keeps_comment_with_bare_dependency_tag() {
        let pom = r#"<project>
  <dependencies>
    <!-- add a <dependency> per extension -->
    <dependency>
      <groupId>io.quarkus</groupId>
      <artifactId>quarkus-agroal</artifactId>
    </dependency>
    <dependency>
      <groupId>io.quarkus</groupId>
      <artifactId>quarkus-arc</artifactId>
    </dependency>
  </dependencies>
</project>
"#;
        let project = project_with(pom);
        let descriptor = MavenDescriptor::new();
        let arc = Dependency::new("io.quarkus", "quarkus-arc", None).unwrap();

        descriptor
            .write_dependencies(project.path(), &[arc.clone()])
            .unwrap();

        let written = fs::read_to_string(project.path().join("pom.xml")).unwrap();
        assert!(written.contains("    <!-- add a <dependency> per extension -->\n    <dependency>"));
        assert!(!written.contains("quarkus-agroal"));
        assert_eq!(descriptor.read_dependencies(project.path()).unwrap(), vec![arc]);
    }

    #[test]
    fn test_read_dependencies_ignores_commented_elements_inside_block() {
        let project = project_with(
            "<project>\n<dependencies>\n<dependency>\n<groupId>io.quarkus</groupId>\n<!-- <artifactId>old-name</artifactId> <version>0.1</version> -->\n<artifactId>quarkus-arc</artifactId>\n</dependency>\n</dependencies>\n</project>\n",
        );

        let dependencies = MavenDescriptor::new()
            .read_dependencies(project.path())
            .unwrap();

        let coordinates: Vec<String> = dependencies.iter().map(|d| d.to_string()).collect();
        assert_eq!(coordinates, vec!["io.quarkus:quarkus-arc"]);
    }

    #[test]
    fn test_read_dependencies_missing_pom() {
        let temp_dir = TempDir::new().unwrap();

        let err = MavenDescriptor::new()
            .read_dependencies(temp_dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("No build descriptor found"));
    }

    #[test]
    fn test_read_dependencies_block_without_artifact_id() {
        let project = project_with(
            "<project>\n<dependencies>\n<dependency>\n<groupId>g</groupId>\n</dependency>\n</dependencies>\n</project>\n",
        );

        let err = MavenDescriptor::new()
            .read_dependencies(project.path())
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to read build descriptor"));
        assert!(message.contains("without <artifactId> at line 3"));
    }

    #[test]
    fn test_write_dependencies_removes_whole_blocks_only() {
        let project = project_with(POM);
        let descriptor = MavenDescriptor::new();
        let remaining: Vec<Dependency> = descriptor
            .read_dependencies(project.path())
            .unwrap()
            .into_iter()
            .filter(|d| d.artifact() != "quarkus-agroal")
            .collect();

        descriptor
            .write_dependencies(project.path(), &remaining)
            .unwrap();

        let written = fs::read_to_string(project.path().join("pom.xml")).unwrap();
        assert!(!written.contains("quarkus-agroal"));
        assert!(!written.contains("<artifactId>excluded</artifactId>"));
        assert!(written.contains("quarkus-bom"));
        assert!(written.contains("quarkus-commented-out"));
        assert!(written.contains("plugin-only"));
        assert!(written.contains(
            "      <artifactId>quarkus-resteasy</artifactId>\n    </dependency>\n    <!--"
        ));
        assert!(written.contains(
            "    -->\n    <dependency>\n      <groupId>commons-io</groupId>"
        ));
        assert_eq!(descriptor.read_dependencies(project.path()).unwrap(), remaining);
    }

    #[test]
    fn test_write_dependencies_keeps_file_when_nothing_removed() {
        let project = project_with(POM);
        let descriptor = MavenDescriptor::new();
        let all = descriptor.read_dependencies(project.path()).unwrap();

        descriptor.write_dependencies(project.path(), &all).unwrap();

        let written = fs::read_to_string(project.path().join("pom.xml")).unwrap();
        assert_eq!(written, POM);
    }

    #[test]
    fn test_write_dependencies_rejects_undeclared_dependency() {
        let project = project_with(POM);
        let stranger = Dependency::new("org.example", "stranger", None).unwrap();

        let err = MavenDescriptor::new()
            .write_dependencies(project.path(), &[stranger])
            .unwrap_err();
        assert!(err.to_string().contains("org.example:stranger is not declared"));
        assert_eq!(
            fs::read_to_string(project.path().join("pom.xml")).unwrap(),
            POM
        );
    }

    #[test]
    fn test_descriptor_path() {
        let path = MavenDescriptor::new().descriptor_path(Path::new("/project"));
        assert_eq!(path, PathBuf::from("/project/pom.xml"));
    }
}
