//! Report files: pretty JSON or CSV, picked by extension

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// On-disk report encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Csv,
}

impl ReportFormat {
    /// `.csv` (any case) selects CSV; everything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ReportFormat::Csv,
            _ => ReportFormat::Json,
        }
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Write any serializable value as pretty JSON
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}

/// Write flat rows as CSV with a header line
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a report in the format implied by `path`: the flat rows as CSV,
/// or the whole report as JSON
pub fn write_report<R, T>(path: &Path, report: &R, rows: &[T]) -> Result<ReportFormat>
where
    R: Serialize + ?Sized,
    T: Serialize,
{
    let format = ReportFormat::from_path(path);
    match format {
        ReportFormat::Csv => write_csv(path, rows)?,
        ReportFormat::Json => write_json(path, report)?,
    }
    tracing::info!(path = %path.display(), rows = rows.len(), ?format, "report_written");
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[derive(Serialize)]
    struct Row {
        graph: &'static str,
        shortest: Option<u64>,
        mean_ms: f64,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                graph: "a",
                shortest: Some(3),
                mean_ms: 0.5,
            },
            Row {
                graph: "b",
                shortest: None,
                mean_ms: 1.25,
            },
        ]
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ReportFormat::from_path(Path::new("out.csv")), ReportFormat::Csv);
        assert_eq!(ReportFormat::from_path(Path::new("OUT.CSV")), ReportFormat::Csv);
        assert_eq!(ReportFormat::from_path(Path::new("out.json")), ReportFormat::Json);
        assert_eq!(ReportFormat::from_path(Path::new("out")), ReportFormat::Json);
    }

    #[test]
    fn test_write_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("bench.csv");
        let rows = rows();
        assert_eq!(write_report(&path, &rows, &rows).unwrap(), ReportFormat::Csv);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["graph,shortest,mean_ms", "a,3,0.5", "b,,1.25"]);
    }

    #[test]
    fn test_write_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bench.json");
        let rows = rows();
        let report = serde_json::json!({ "rows": &rows, "total": 2 });
        assert_eq!(write_report(&path, &report, &rows).unwrap(), ReportFormat::Json);

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["rows"][0]["graph"], "a");
        assert!(value["rows"][1]["shortest"].is_null());
    }
}
