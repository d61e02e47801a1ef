use crate::application::dto::RemovalResponse;
use crate::extension_removal::domain::{Dependency, MatchResult, Query};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    descriptor: String,
    queries: Vec<QueryReport<'a>>,
    removed: &'a [Dependency],
    unmatched: Vec<&'a Query>,
    dropped: usize,
    changed: bool,
    success: bool,
    dry_run: bool,
    #[serde(skip_serializing_if = "is_zero")]
    skipped_blank: usize,
}

#[derive(Debug, Serialize)]
struct QueryReport<'a> {
    query: &'a Query,
    status: QueryStatus,
    matches: &'a [Dependency],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum QueryStatus {
    Removed,
    Ambiguous,
    NotFound,
    InvalidSyntax,
}

impl QueryStatus {
    fn of(resolution: &MatchResult) -> Self {
        if resolution.query().is_malformed_coordinate() {
            QueryStatus::InvalidSyntax
        } else if resolution.is_unmatched() {
            QueryStatus::NotFound
        } else if resolution.is_ambiguous() {
            QueryStatus::Ambiguous
        } else {
            QueryStatus::Removed
        }
    }
}

fn is_zero(value: &usize) -> bool {
    *value == 0
}

/// JsonReportFormatter adapter for machine-readable removal reports
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, response: &RemovalResponse) -> Result<String> {
        let outcome = &response.outcome;
        let report = Report {
            descriptor: response.descriptor_path.display().to_string(),
            queries: outcome
                .resolutions()
                .iter()
                .map(|resolution| QueryReport {
                    query: resolution.query(),
                    status: QueryStatus::of(resolution),
                    matches: resolution.matches(),
                })
                .collect(),
            removed: outcome.removed(),
            unmatched: outcome.unmatched_queries(),
            dropped: outcome.dropped(),
            changed: outcome.changed(),
            success: outcome.success(),
            dry_run: response.dry_run,
            skipped_blank: outcome.skipped_blank(),
        };

        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}
