use crate::application::dto::RemovalResponse;
use crate::extension_removal::domain::MatchResult;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::{OwoColorize, Style};

/// TextReportFormatter adapter for human-readable removal reports
///
/// One line per query (removed, ambiguous, not found, invalid), followed by
/// a short summary. Colors are only emitted when enabled.
pub struct TextReportFormatter {
    colored: bool,
}

impl TextReportFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_resolution(&self, resolution: &MatchResult, verb: &str, output: &mut String) {
        let query = resolution.query();

        if query.is_malformed_coordinate() {
            output.push_str(&self.paint(
                &format!(
                    "❌ '{}' is not a valid group:artifact[:version] coordinate\n",
                    query
                ),
                Style::new().red(),
            ));
        } else if resolution.is_unmatched() {
            output.push_str(&self.paint(
                &format!(
                    "❌ Cannot find a dependency matching '{}', maybe a typo?\n",
                    query
                ),
                Style::new().red(),
            ));
        } else if resolution.is_ambiguous() {
            output.push_str(&self.paint(
                &format!(
                    "✅ {} {} dependencies matching '{}':\n",
                    verb,
                    resolution.matches().len(),
                    query
                ),
                Style::new().green(),
            ));
            for dependency in resolution.matches() {
                output.push_str(&format!("   - {}\n", dependency));
            }
        } else {
            for dependency in resolution.matches() {
                output.push_str(&self.paint(
                    &format!("✅ {} {} ('{}')\n", verb, dependency, query),
                    Style::new().green(),
                ));
            }
        }
    }

    fn format_summary(&self, response: &RemovalResponse, output: &mut String) {
        let outcome = &response.outcome;
        let descriptor = response.descriptor_path.display();

        output.push('\n');
        let summary = match (outcome.changed(), response.dry_run) {
            (true, true) => self.paint(
                &format!(
                    "🔎 Dry run: {} dependency(ies) would be removed from {}\n",
                    outcome.dropped(),
                    descriptor
                ),
                Style::new().yellow(),
            ),
            (true, false) => format!(
                "📦 Removed {} dependency(ies) from {}\n",
                outcome.dropped(),
                descriptor
            ),
            (false, _) => format!("📦 No changes to {}\n", descriptor),
        };
        output.push_str(&summary);

        let unmatched: Vec<String> = outcome
            .unmatched_queries()
            .iter()
            .map(|query| format!("'{}'", query))
            .collect();
        if !unmatched.is_empty() {
            output.push_str(&self.paint(
                &format!("⚠️  Unmatched: {}\n", unmatched.join(", ")),
                Style::new().yellow(),
            ));
        }
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, response: &RemovalResponse) -> Result<String> {
        let mut output = String::new();

        // Selected dependencies no longer declared on disk are not a change
        let verb = match (response.dry_run, response.outcome.changed()) {
            (true, _) => "Would remove",
            (false, true) => "Removed",
            (false, false) => "Already removed",
        };
        for resolution in response.outcome.resolutions() {
            self.format_resolution(resolution, verb, &mut output);
        }
        self.format_summary(response, &mut output);

        Ok(output)
    }
}
