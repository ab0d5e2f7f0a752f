mod formatter;
mod plain;

pub(crate) use formatter::{BumpReport, ReportFormatter};
pub(crate) use plain::PlainTextFormatter;
