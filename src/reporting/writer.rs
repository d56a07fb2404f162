use std::path::{Path, PathBuf};
use chrono::Utc;
use crate::errors::SimError;
use super::formatter::format_report_markdown;
use super::rows::ReportRow;
use tracing::info;

pub const REPORT_STEM: &str = "simulation_report";

#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub markdown: PathBuf,
}

/// Write sweep rows as JSON and as a Markdown table into `dir`.
pub async fn write_report(dir: &Path, rows: &[ReportRow]) -> Result<ReportPaths, SimError> {
    tokio::fs::create_dir_all(dir).await?;

    let paths = ReportPaths {
        json: dir.join(format!("{}.json", REPORT_STEM)),
        markdown: dir.join(format!("{}.md", REPORT_STEM)),
    };

    let json = serde_json::to_string_pretty(rows)?;
    tokio::fs::write(&paths.json, &json).await?;

    let markdown = format_report_markdown(rows, &Utc::now().to_rfc3339());
    tokio::fs::write(&paths.markdown, &markdown).await?;

    info!(rows = rows.len(), path = %paths.json.display(), "Simulation report saved");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Policy;

    #[tokio::test]
    async fn test_write_report_creates_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let reports = dir.path().join("reports");
        let rows = vec![ReportRow::new(1, "2026-10-16 09:00:00", Policy::Seeded, None)];

        let paths = write_report(&reports, &rows).await.unwrap();
        let parsed: Vec<ReportRow> =
            serde_json::from_str(&std::fs::read_to_string(&paths.json).unwrap()).unwrap();
        assert_eq!(parsed, rows);
        assert!(std::fs::read_to_string(&paths.markdown).unwrap().contains("N/A"));
    }
}
