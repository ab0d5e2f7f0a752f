use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown key '{key}' in format pattern '{template}' (valid keys: {})", valid_keys.join(", "))]
    Key {
        template: String,
        key: String,
        valid_keys: &'static [&'static str],
    },

    #[error("invalid format pattern '{template}'")]
    Pattern {
        template: String,
        #[source]
        reason: TemplateSyntaxError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateSyntaxError {
    #[error("single '}}' encountered in format pattern")]
    UnmatchedClose,

    #[error("expected '}}' before end of pattern")]
    Unterminated,

    #[error("placeholders must be named, found '{{}}'")]
    EmptyField,

    #[error("unexpected '{{' in field name")]
    NestedOpen,

    #[error("conversion specifier in '{field}' is not supported")]
    Conversion { field: String },

    #[error("invalid format spec '{spec}'")]
    InvalidSpec { spec: String },

    #[error("invalid date format '{spec}'")]
    InvalidDateFormat { spec: String },
}
