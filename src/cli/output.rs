//! Output formatting utilities

use crate::application::{RetagReport, RetaggedRecord};

/// Progress line for one record
pub fn format_record_line(record: &RetaggedRecord, dry_run: bool) -> String {
    let marker = if dry_run { "DRY" } else { "OK" };
    format!(
        "[{}] {} -> {}",
        marker,
        record.source.display(),
        record.destination.display()
    )
}

/// Closing summary for a finished run, printed to stderr
pub fn format_summary(report: &RetagReport) -> String {
    let count = report.records.len();
    if report.dry_run {
        format!(
            "Dry run: {} record(s) would be written to {}.",
            count,
            report.output_dir.display()
        )
    } else {
        format!(
            "Retagged {} record(s) into {}.",
            count,
            report.output_dir.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record() -> RetaggedRecord {
        RetaggedRecord {
            source: PathBuf::from("/w/2/v3.0.0/info.json"),
            destination: PathBuf::from("/w/output/2019.4.300x2.json"),
            version: "2019.4.300x2".to_string(),
        }
    }

    #[test]
    fn test_format_record_line() {
        assert_eq!(
            format_record_line(&record(), false),
            "[OK] /w/2/v3.0.0/info.json -> /w/output/2019.4.300x2.json"
        );
        assert!(format_record_line(&record(), true).starts_with("[DRY] "));
    }

    #[test]
    fn test_format_summary() {
        let mut report = RetagReport {
            output_dir: PathBuf::from("/w/output"),
            dry_run: false,
            records: vec![record()],
        };
        assert_eq!(format_summary(&report), "Retagged 1 record(s) into /w/output.");

        report.dry_run = true;
        assert_eq!(
            format_summary(&report),
            "Dry run: 1 record(s) would be written to /w/output."
        );
    }
}
