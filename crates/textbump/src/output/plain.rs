use std::fmt::Write;

use super::{BumpReport, ReportFormatter};

pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    fn format_header(output: &mut String, report: &BumpReport<'_>) {
        let _ = writeln!(
            output,
            "Bumping {} -> {}\n",
            report.current_version, report.new_version
        );
    }

    fn format_diffs(output: &mut String, report: &BumpReport<'_>) {
        for change in report.changes {
            output.push_str(change.change_diff());
            if !output.ends_with('\n') {
                output.push('\n');
            }
        }
    }
}

impl ReportFormatter for PlainTextFormatter {
    fn format_dry_run(&self, report: &BumpReport<'_>) -> String {
        let mut output = String::new();
        Self::format_header(&mut output, report);
        Self::format_diffs(&mut output, report);
        let _ = writeln!(
            output,
            "\nDry run - {} file(s) would change, nothing was written.",
            report.changes.len()
        );
        output
    }

    fn format_applied(&self, report: &BumpReport<'_>, config_updated: bool) -> String {
        let mut output = String::new();
        Self::format_header(&mut output, report);
        Self::format_diffs(&mut output, report);
        let _ = writeln!(output, "\nUpdated {} file(s).", report.changes.len());
        if config_updated {
            let _ = writeln!(output, "Recorded current_version = {}", report.new_version);
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use semver::Version;

    use super::*;

    #[test]
    fn dry_run_without_changes_reports_zero_files() {
        let current = Version::new(1, 0, 0);
        let new = Version::new(1, 1, 0);
        let report = BumpReport {
            current_version: &current,
            new_version: &new,
            changes: &[],
        };

        let output = PlainTextFormatter.format_dry_run(&report);

        assert!(output.starts_with("Bumping 1.0.0 -> 1.1.0\n"));
        assert!(output.contains("0 file(s) would change"));
    }

    #[test]
    fn applied_mentions_config_update_only_when_written() {
        let current = Version::new(1, 0, 0);
        let new = Version::new(2, 0, 0);
        let report = BumpReport {
            current_version: &current,
            new_version: &new,
            changes: &[],
        };

        let with = PlainTextFormatter.format_applied(&report, true);
        let without = PlainTextFormatter.format_applied(&report, false);

        assert!(with.contains("Recorded current_version = 2.0.0"));
        assert!(!without.contains("Recorded current_version"));
    }
}
