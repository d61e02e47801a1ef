use crate::application::dto::{RemovalRequest, RemovalResponse};
use crate::extension_removal::domain::{Dependency, MatchOptions, MatchResult};
use crate::extension_removal::services::{RemovalEngine, RemovalPlan};
use crate::ports::inbound::ExtensionRemovalPort;
use crate::ports::outbound::{DescriptorRepository, ProgressReporter};
use crate::shared::Result;

/// RemoveExtensionsUseCase - Core use case for extension removal
///
/// Reads the descriptor, resolves the whole batch, and writes the descriptor
/// back only when its dependency list actually changes.
///
/// # Type Parameters
/// * `DR` - DescriptorRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct RemoveExtensionsUseCase<DR, PR> {
    descriptor_repository: DR,
    progress_reporter: PR,
    engine: RemovalEngine,
}

impl<DR, PR> RemoveExtensionsUseCase<DR, PR>
where
    DR: DescriptorRepository,
    PR: ProgressReporter,
{
    /// Creates a new RemoveExtensionsUseCase with injected dependencies
    pub fn new(descriptor_repository: DR, progress_reporter: PR, options: MatchOptions) -> Self {
        Self {
            descriptor_repository,
            progress_reporter,
            engine: RemovalEngine::new(options),
        }
    }

    /// Executes the removal
    ///
    /// # Returns
    /// RemovalResponse with the outcome; unmatched queries are part of the
    /// outcome, not an error
    ///
    /// # Errors
    /// Returns an error if the descriptor cannot be read or written. Nothing
    /// is written when reading fails.
    pub fn execute(&self, request: RemovalRequest) -> Result<RemovalResponse> {
        let descriptor_path = self
            .descriptor_repository
            .descriptor_path(&request.project_path);

        // Step 1: Read the current on-disk dependency list
        let current = self.read_and_report_dependencies(&request)?;

        // Step 2: Resolve the batch against the snapshot or the fresh read
        let installed = request.installed_snapshot.as_deref().unwrap_or(&current);
        let plan = self.engine.plan(installed, &request.queries);
        self.report_resolutions(&plan);

        // Step 3: Apply to what is on disk now
        let (remaining, changed) = plan.apply(&current);
        let dropped = current.len() - remaining.len();

        // Step 4: Persist only a real change
        if changed && !request.dry_run {
            self.write_and_report(&request, &remaining, current.len())?;
        } else if changed {
            self.progress_reporter.report(&format!(
                "🔎 Dry run: {} would drop {} dependency(ies); file left untouched",
                descriptor_path.display(),
                dropped
            ));
        }

        let outcome = plan.into_outcome(dropped);
        self.report_summary(outcome.success(), changed);

        Ok(RemovalResponse::new(outcome, descriptor_path, request.dry_run))
    }

    fn read_and_report_dependencies(&self, request: &RemovalRequest) -> Result<Vec<Dependency>> {
        self.progress_reporter.report(&format!(
            "📖 Loading build descriptor: {}",
            self.descriptor_repository
                .descriptor_path(&request.project_path)
                .display()
        ));

        let dependencies = self
            .descriptor_repository
            .read_dependencies(&request.project_path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} declared dependency(ies)",
            dependencies.len()
        ));

        Ok(dependencies)
    }

    fn report_resolutions(&self, plan: &RemovalPlan) {
        if plan.skipped_blank() > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Ignored {} blank extension name(s)",
                plan.skipped_blank()
            ));
        }

        for resolution in plan.resolutions() {
            self.report_resolution(resolution);
        }
    }

    fn report_resolution(&self, resolution: &MatchResult) {
        let query = resolution.query();
        if query.is_malformed_coordinate() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: '{}' is not a valid group:artifact[:version] coordinate",
                query
            ));
        } else if resolution.is_unmatched() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No dependency matches '{}'",
                query
            ));
        } else {
            self.progress_reporter.report(&format!(
                "🔍 '{}' matched {} dependency(ies)",
                query,
                resolution.matches().len()
            ));
        }
    }

    fn write_and_report(
        &self,
        request: &RemovalRequest,
        remaining: &[Dependency],
        before: usize,
    ) -> Result<()> {
        self.descriptor_repository
            .write_dependencies(&request.project_path, remaining)?;

        self.progress_reporter.report(&format!(
            "💾 Removed {} dependency(ies) from {}",
            before - remaining.len(),
            self.descriptor_repository
                .descriptor_path(&request.project_path)
                .display()
        ));
        Ok(())
    }

    fn report_summary(&self, success: bool, changed: bool) {
        let message = match (success, changed) {
            (true, true) => "✅ Extension removal complete",
            (true, false) => "✅ Nothing to remove: build descriptor already up to date",
            (false, true) => "⚠️  Extension removal completed with unmatched queries",
            (false, false) => "❌ No extension was removed",
        };
        self.progress_reporter.report_completion(message);
    }
}

impl<DR, PR> ExtensionRemovalPort for RemoveExtensionsUseCase<DR, PR>
where
    DR: DescriptorRepository,
    PR: ProgressReporter,
{
    fn remove_extensions(&self, request: RemovalRequest) -> Result<RemovalResponse> {
        self.execute(request)
    }
}
