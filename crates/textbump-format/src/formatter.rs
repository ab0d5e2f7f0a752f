use std::fmt::Write;

use chrono::{Local, NaiveDate, NaiveTime};
use semver::Version;

use crate::error::{FormatError, TemplateSyntaxError};
use crate::keys;
use crate::template::{Align, Padding, Segment, Segments};

/// What a formatted pattern is going to be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatContext {
    /// Text that must already exist in a file.
    Search,
    /// Text written in place of the search text.
    Replace,
}

enum Value {
    Number(u64),
    Text(String),
    Date(NaiveDate),
}

/// Expands format patterns against a current version, a new version and a
/// reference date.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    current_version: Version,
    new_version: Version,
    today: NaiveDate,
}

impl TextFormatter {
    /// Creates a formatter. `today` falls back to the local calendar date.
    #[must_use]
    pub fn new(current_version: Version, new_version: Version, today: Option<NaiveDate>) -> Self {
        Self {
            current_version,
            new_version,
            today: today.unwrap_or_else(|| Local::now().date_naive()),
        }
    }

    /// Expands every placeholder in `template`.
    ///
    /// Pre-release and build placeholders expand to an empty string when the
    /// version has none.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Key` if the template references a name outside
    /// [`keys::ALL_KEYS`], and `FormatError::Pattern` if the brace syntax or a
    /// format spec is malformed.
    pub fn format(&self, template: &str, context: FormatContext) -> Result<String, FormatError> {
        let pattern_error = |reason| FormatError::Pattern {
            template: template.to_string(),
            reason,
        };

        let mut output = String::with_capacity(template.len());

        for segment in Segments::new(template) {
            match segment.map_err(pattern_error)? {
                Segment::Literal(text) => output.push_str(text),
                Segment::Field(field) => {
                    let value =
                        self.resolve(field.name, context)
                            .ok_or_else(|| FormatError::Key {
                                template: template.to_string(),
                                key: field.name.to_string(),
                                valid_keys: keys::ALL_KEYS,
                            })?;
                    render(&value, field.spec, &mut output).map_err(pattern_error)?;
                }
            }
        }

        Ok(output)
    }

    fn resolve(&self, key: &str, context: FormatContext) -> Option<Value> {
        match context {
            // Both contexts currently resolve every key the same way.
            FormatContext::Search | FormatContext::Replace => self.resolve_literal(key),
        }
    }

    fn resolve_literal(&self, key: &str) -> Option<Value> {
        let current = &self.current_version;
        let new = &self.new_version;

        let value = match key {
            keys::CURRENT_VERSION => Value::Text(current.to_string()),
            keys::CURRENT_MAJOR => Value::Number(current.major),
            keys::CURRENT_MINOR => Value::Number(current.minor),
            keys::CURRENT_PATCH => Value::Number(current.patch),
            keys::CURRENT_PRERELEASE => Value::Text(current.pre.as_str().to_string()),
            keys::CURRENT_BUILD => Value::Text(current.build.as_str().to_string()),
            keys::NEW_VERSION => Value::Text(new.to_string()),
            keys::NEW_MAJOR => Value::Number(new.major),
            keys::NEW_MINOR => Value::Number(new.minor),
            keys::NEW_PATCH => Value::Number(new.patch),
            keys::NEW_PRERELEASE => Value::Text(new.pre.as_str().to_string()),
            keys::NEW_BUILD => Value::Text(new.build.as_str().to_string()),
            keys::TODAY => Value::Date(self.today),
            _ => return None,
        };

        Some(value)
    }
}

fn render(value: &Value, spec: &str, output: &mut String) -> Result<(), TemplateSyntaxError> {
    match value {
        Value::Date(date) if spec.is_empty() => {
            output.push_str(&date.format("%Y-%m-%d").to_string());
        }
        // Time fields render as midnight; chrono reports unknown specifiers
        // as a fmt::Error.
        Value::Date(date) => {
            let midnight = date.and_time(NaiveTime::default());
            write!(output, "{}", midnight.format(spec)).map_err(|_| {
                TemplateSyntaxError::InvalidDateFormat {
                    spec: spec.to_string(),
                }
            })?;
        }
        Value::Number(n) if spec.is_empty() => output.push_str(&n.to_string()),
        Value::Number(n) => {
            Padding::parse(spec, 'd')?.apply(&n.to_string(), Align::Right, output);
        }
        Value::Text(text) if spec.is_empty() => output.push_str(text),
        Value::Text(text) => Padding::parse(spec, 's')?.apply(text, Align::Left, output),
    }

    Ok(())
}
