//! Console output formatter for run summaries

use colored::Colorize;
use newsdesk_application::RunSummary;
use newsdesk_domain::ModelPreferenceList;

/// Formats run results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Header printed before processing starts
    pub fn format_header(models: &ModelPreferenceList) -> String {
        let line = "=".repeat(60);
        format!(
            "{}\n{:^60}\n{}\n{} {}\n",
            line.cyan(),
            "Newsdesk".bold(),
            line.cyan(),
            "Models:".cyan().bold(),
            models
        )
    }

    /// Human-readable summary of a run
    pub fn format_summary(summary: &RunSummary) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "\n{} Generated {} new news items.\n",
            "Done.".green().bold(),
            summary.generated
        ));
        output.push_str(&format!(
            "  {} {}\n",
            "Posts found:".dimmed(),
            summary.discovered
        ));
        output.push_str(&format!(
            "  {} {}\n",
            "Already processed:".dimmed(),
            summary.already_processed
        ));
        if summary.exhausted > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                "All models failed:".yellow(),
                summary.exhausted
            ));
        }
        if summary.errored > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                "Unreadable/unwritable:".red(),
                summary.errored
            ));
        }
        output
    }

    /// Format as JSON
    pub fn format_json(summary: &RunSummary) -> String {
        serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> RunSummary {
        RunSummary {
            discovered: 5,
            already_processed: 2,
            generated: 2,
            exhausted: 1,
            errored: 0,
        }
    }

    #[test]
    fn test_summary_reports_new_count() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_summary(&summary());
        assert!(text.contains("Generated 2 new news items."));
        assert!(text.contains("All models failed: 1"));
        assert!(!text.contains("Unreadable"));
    }

    #[test]
    fn test_json_contains_all_counters() {
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&summary())).unwrap();
        assert_eq!(value["discovered"], 5);
        assert_eq!(value["generated"], 2);
        assert_eq!(value["errored"], 0);
    }

    #[test]
    fn test_header_lists_models() {
        colored::control::set_override(false);
        let header = ConsoleFormatter::format_header(&ModelPreferenceList::default());
        assert!(header.contains("gemini-3-pro-preview -> gemini-2.5-pro"));
    }
}
