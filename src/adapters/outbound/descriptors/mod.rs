/// Build descriptor adapters for Maven and Gradle projects
mod gradle_descriptor;
mod maven_descriptor;

pub use gradle_descriptor::GradleDescriptor;
pub use maven_descriptor::MavenDescriptor;

use crate::shared::error::ExtensionError;
use crate::shared::Result;
use std::ops::Range;
use std::path::Path;

pub const MAVEN_DESCRIPTOR: &str = "pom.xml";
pub const GRADLE_DESCRIPTOR: &str = "build.gradle";
pub const GRADLE_KOTLIN_DESCRIPTOR: &str = "build.gradle.kts";

/// Build tool family owning a project's descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTool {
    Maven,
    Gradle,
}

impl std::str::FromStr for BuildTool {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "maven" | "mvn" => Ok(BuildTool::Maven),
            "gradle" => Ok(BuildTool::Gradle),
            _ => Err(format!(
                "Invalid build tool: {}. Please specify 'maven' or 'gradle'",
                s
            )),
        }
    }
}

impl std::fmt::Display for BuildTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildTool::Maven => write!(f, "maven"),
            BuildTool::Gradle => write!(f, "gradle"),
        }
    }
}

impl BuildTool {
    /// Detects the build tool from the descriptors present in a project
    ///
    /// `pom.xml` wins over Gradle build files when both exist.
    ///
    /// # Errors
    /// Returns `DescriptorNotFound` when no known descriptor exists
    pub fn detect(project_path: &Path) -> Result<Self> {
        if project_path.join(MAVEN_DESCRIPTOR).is_file() {
            return Ok(BuildTool::Maven);
        }
        if project_path.join(GRADLE_DESCRIPTOR).is_file()
            || project_path.join(GRADLE_KOTLIN_DESCRIPTOR).is_file()
        {
            return Ok(BuildTool::Gradle);
        }

        Err(ExtensionError::DescriptorNotFound {
            path: project_path.to_path_buf(),
            suggestion: format!(
                "Neither {}, {} nor {} exists in \"{}\".\n   \
                 Please run in the root directory of the project, or specify the correct path with the --path option.",
                MAVEN_DESCRIPTOR,
                GRADLE_DESCRIPTOR,
                GRADLE_KOTLIN_DESCRIPTOR,
                project_path.display()
            ),
        }
        .into())
    }
}

/// Widens a span to the full lines it occupies when nothing else shares them
fn line_span(content: &str, span: Range<usize>) -> Range<usize> {
    let line_start = content[..span.start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = content[span.end..]
        .find('\n')
        .map_or(content.len(), |i| span.end + i + 1);

    let before_is_blank = content[line_start..span.start].trim().is_empty();
    let after_is_blank = content[span.end..line_end].trim().is_empty();

    if before_is_blank && after_is_blank {
        line_start..line_end
    } else {
        span
    }
}

/// Removes non-overlapping spans from `content`, keeping every other byte
fn remove_spans(content: &str, mut spans: Vec<Range<usize>>) -> String {
    spans.sort_by_key(|span| span.start);

    let mut result = String::with_capacity(content.len());
    let mut position = 0;
    for span in spans {
        if span.start < position {
            continue;
        }
        result.push_str(&content[position..span.start]);
        position = span.end;
    }
    result.push_str(&content[position..]);
    result
}

/// Blanks out `spans` with spaces, keeping newlines and byte offsets
///
/// Scanning the masked text yields spans that are valid in `content`.
fn mask_spans(content: &str, spans: &[Range<usize>]) -> String {
    let mut masked = String::with_capacity(content.len());
    for (offset, c) in content.char_indices() {
        if c != '\n' && spans.iter().any(|span| span.contains(&offset)) {
            masked.extend(std::iter::repeat(' ').take(c.len_utf8()));
        } else {
            masked.push(c);
        }
    }
    masked
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::str::FromStr;
    use tempfile::TempDir;

    #[test]
    fn test_build_tool_from_str() {
        assert_eq!(BuildTool::from_str("maven").unwrap(), BuildTool::Maven);
        assert_eq!(BuildTool::from_str("MVN").unwrap(), BuildTool::Maven);
        assert_eq!(BuildTool::from_str("Gradle").unwrap(), BuildTool::Gradle);
    }

    #[test]
    fn test_build_tool_from_str_invalid() {
        let err = BuildTool::from_str("ant").unwrap_err();
        assert!(err.contains("Invalid build tool: ant"));
    }

    #[test]
    fn test_build_tool_display() {
        assert_eq!(BuildTool::Maven.to_string(), "maven");
        assert_eq!(BuildTool::Gradle.to_string(), "gradle");
    }

    #[test]
    fn test_detect_maven_wins_over_gradle() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pom.xml"), "<project/>").unwrap();
        fs::write(temp_dir.path().join("build.gradle"), "").unwrap();

        assert_eq!(BuildTool::detect(temp_dir.path()).unwrap(), BuildTool::Maven);
    }

    #[test]
    fn test_detect_gradle_kotlin() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("build.gradle.kts"), "").unwrap();

        assert_eq!(BuildTool::detect(temp_dir.path()).unwrap(), BuildTool::Gradle);
    }

    #[test]
    fn test_detect_nothing() {
        let temp_dir = TempDir::new().unwrap();

        let err = BuildTool::detect(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("No build descriptor found"));
    }

    #[test]
    fn test_line_span_widens_to_whole_line() {
        let content = "a\n    <dependency/>\nb\n";
        let start = content.find('<').unwrap();
        let span = line_span(content, start..start + "<dependency/>".len());
        assert_eq!(&content[span], "    <dependency/>\n");
    }

    #[test]
    fn test_line_span_keeps_shared_line() {
        let content = "<a/><dependency/><b/>";
        let span = line_span(content, 4..17);
        assert_eq!(span, 4..17);
    }

    #[test]
    fn test_remove_spans_out_of_order() {
        let content = "0123456789";
        assert_eq!(remove_spans(content, vec![6..8, 1..3]), "034589");
    }

    #[test]
    fn test_mask_spans_keeps_offsets_and_newlines() {
        let content = "a<!-- é\n -->b";
        let masked = mask_spans(content, &[1..content.len() - 1]);
        assert_eq!(masked.len(), content.len());
        assert_eq!(masked, format!("a{}\n{}b", " ".repeat(7), " ".repeat(4)));
    }
}
