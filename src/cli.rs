use clap::Parser;

use crate::adapters::outbound::descriptors::BuildTool;
use crate::application::dto::OutputFormat;

/// Remove extensions from Maven and Gradle projects
#[derive(Parser, Debug)]
#[command(name = "ext-remove")]
#[command(version = "0.1.0")]
#[command(
    about = "Remove extensions from Maven and Gradle projects by name, coordinate or glob pattern",
    long_about = None
)]
pub struct Args {
    /// Extensions to remove: short names ("agroal"), coordinates
    /// ("group:artifact[:version]") or globs ("smallrye-*").
    /// Comma-separated lists are accepted: agroal,arc
    #[arg(required = true, value_name = "EXTENSIONS", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Build tool: maven or gradle (detected from the project when omitted)
    #[arg(short, long)]
    pub build_tool: Option<BuildTool>,

    /// Output format: text or json (defaults to text)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Organizational prefix token dropped before matching short names
    /// (defaults to "quarkus"; an empty value disables it)
    #[arg(long, value_name = "TOKEN")]
    pub prefix: Option<String>,

    /// Resolve and report, but leave the build descriptor untouched
    #[arg(long)]
    pub dry_run: bool,

    /// Path to a config file (defaults to ext-remove.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Only print warnings and errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parses process arguments, leaving help, version and usage errors to the caller
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
