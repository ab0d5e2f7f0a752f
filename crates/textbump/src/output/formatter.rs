use semver::Version;
use textbump_files::PlannedChange;

pub(crate) struct BumpReport<'a> {
    pub current_version: &'a Version,
    pub new_version: &'a Version,
    pub changes: &'a [PlannedChange],
}

pub(crate) trait ReportFormatter {
    fn format_dry_run(&self, report: &BumpReport<'_>) -> String;
    fn format_applied(&self, report: &BumpReport<'_>, config_updated: bool) -> String;
}
