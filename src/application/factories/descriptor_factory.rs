use crate::adapters::outbound::descriptors::{BuildTool, GradleDescriptor, MavenDescriptor};
use crate::ports::outbound::DescriptorRepository;
use crate::shared::Result;
use std::path::Path;

/// Factory for creating descriptor repositories
///
/// Picks the adapter for an explicitly requested build tool, or detects it
/// from the files present in the project directory.
pub struct DescriptorFactory;

impl DescriptorFactory {
    /// Creates the descriptor repository for a build tool
    pub fn create(build_tool: BuildTool) -> Box<dyn DescriptorRepository> {
        match build_tool {
            BuildTool::Maven => Box::new(MavenDescriptor::new()),
            BuildTool::Gradle => Box::new(GradleDescriptor::new()),
        }
    }

    /// Resolves the build tool (explicit or detected) and creates its repository
    ///
    /// # Errors
    /// Returns `DescriptorNotFound` when no build tool is given and none can
    /// be detected
    pub fn for_project(
        project_path: &Path,
        build_tool: Option<BuildTool>,
    ) -> Result<(BuildTool, Box<dyn DescriptorRepository>)> {
        let build_tool = match build_tool {
            Some(build_tool) => build_tool,
            None => BuildTool::detect(project_path)?,
        };
        Ok((build_tool, Self::create(build_tool)))
    }
}
