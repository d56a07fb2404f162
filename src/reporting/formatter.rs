use crate::models::AggregateResult;
use crate::utils::formatting::{format_percent, format_seconds};
use super::rows::ReportRow;

const COLUMNS: [&str; 8] = [
    "Iteration",
    "Datestamp",
    "Approach",
    "Total Runs",
    "Successful Attacks",
    "Unsuccessful Attacks",
    "Total Time Taken (s)",
    "Average Time per Run (s)",
];

pub fn format_report_markdown(rows: &[ReportRow], generated_at: &str) -> String {
    let mut out = String::new();
    out.push_str("# Simulation Report\n\n");
    out.push_str(&format!(
        "- Generated: {}\n- Build: {} ({})\n\n",
        generated_at,
        option_env!("GIT_HASH").unwrap_or("dev"),
        option_env!("BUILD_TIMESTAMP").unwrap_or("unknown")
    ));

    if rows.is_empty() {
        out.push_str("No configurations were run.\n");
        return out;
    }

    out.push_str(&format!("| {} |\n", COLUMNS.join(" | ")));
    out.push_str(&format!("|{}\n", "---|".repeat(COLUMNS.len())));
    for row in rows {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
            row.iteration,
            row.datestamp,
            row.approach,
            row.total_runs,
            row.successes,
            row.failures,
            row.total_time,
            row.average_time,
        ));
    }
    out
}

/// Plain-text batch summary for console output.
pub fn format_summary(title: &str, result: &AggregateResult) -> String {
    let rule = "=".repeat(38);
    format!(
        "{rule}\n{title}\n{rule}\nTotal Runs: {}\nSuccessful Attacks: {} ({})\nUnsuccessful Attacks: {}\nTotal Time Taken: {}\nAverage Time per Run: {}\n",
        result.total_runs,
        result.successes,
        format_percent(result.success_rate()),
        result.failures,
        format_seconds(result.total_time_secs),
        format_seconds(result.average_time_secs),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Policy;

    #[test]
    fn test_markdown_table_has_header_and_rows() {
        let rows = vec![
            ReportRow::new(0, "2026-10-16 09:00:00", Policy::Seeded, None),
            ReportRow::new(0, "2026-10-16 09:00:00", Policy::Exhaustive, None),
        ];
        let md = format_report_markdown(&rows, "2026-10-16T09:00:00Z");
        assert!(md.contains("| Iteration | Datestamp | Approach |"));
        assert!(md.contains("| 0 | 2026-10-16 09:00:00 | Approach 1 (Manual Attack) | N/A |"));
        assert_eq!(md.lines().filter(|l| l.starts_with("| 0 |")).count(), 2);
    }

    #[test]
    fn test_markdown_empty() {
        let md = format_report_markdown(&[], "now");
        assert!(md.contains("No configurations were run."));
    }

    #[test]
    fn test_summary_lists_report_fields() {
        let result = AggregateResult::from_records(0, &[]);
        let text = format_summary("Approach 1 Experiment Summary", &result);
        assert!(text.contains("Total Runs: 0"));
        assert!(text.contains("Successful Attacks: 0 (0.0%)"));
        assert!(text.contains("Average Time per Run: 0.0000s"));
    }
}
