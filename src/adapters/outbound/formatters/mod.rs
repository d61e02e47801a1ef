/// Formatter adapters for the removal report output formats
mod json_report_formatter;
mod text_report_formatter;

pub use json_report_formatter::JsonReportFormatter;
pub use text_report_formatter::TextReportFormatter;
