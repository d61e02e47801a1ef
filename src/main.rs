mod adapters;
mod application;
mod cli;
mod config;
mod extension_removal;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::StdoutPresenter;
use application::dto::{OutputFormat, RemovalRequest};
use application::factories::{DescriptorFactory, FormatterFactory};
use application::use_cases::RemoveExtensionsUseCase;
use cli::Args;
use config::ConfigFile;
use extension_removal::domain::MatchOptions;
use ports::inbound::ExtensionRemovalPort;
use ports::outbound::{OutputPresenter, ProgressReporter};
use shared::error::{ExitCode, ExtensionError};
use shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            e.print()?;
            return Ok(if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            });
        }
    };

    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    // Load configuration (explicit path or auto-discovery)
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(&project_path)?.unwrap_or_default(),
    };

    // CLI flags win over config values
    let options = build_match_options(&args, &config)?;
    let format = args
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default();
    let build_tool = args.build_tool.or_else(|| config.build_tool());

    // Create adapters (Dependency Injection)
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    let (build_tool, descriptor_repository) =
        DescriptorFactory::for_project(&project_path, build_tool)?;
    progress_reporter.report(&format!("🔧 Build tool: {}", build_tool));

    // Create use case with injected dependencies
    let use_case = RemoveExtensionsUseCase::new(descriptor_repository, progress_reporter, options);

    // Execute use case through the inbound port
    let request = RemovalRequest::new(project_path, args.extensions).with_dry_run(args.dry_run);
    let response = use_case.remove_extensions(request)?;

    // Format and present the report
    let colored = format == OutputFormat::Text
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();
    let formatter = FormatterFactory::create(format, colored);
    let presenter = StdoutPresenter::new();
    presenter.present(&formatter.format(&response)?)?;

    if response.success() {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::UnmatchedQueries)
    }
}

/// Merges matching settings: defaults, then config file, then CLI flags
fn build_match_options(args: &Args, config: &ConfigFile) -> Result<MatchOptions> {
    let mut options = MatchOptions::default();

    if let Some(separators) = config.separator_chars() {
        options = options.with_separators(separators)?;
    }

    if let Some(prefix) = args.prefix.clone().or_else(|| config.prefix.clone()) {
        options = options.with_prefix(Some(prefix))?;
    }

    Ok(options)
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ExtensionError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| ExtensionError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(ExtensionError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ExtensionError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
