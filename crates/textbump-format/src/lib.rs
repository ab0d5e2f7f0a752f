mod error;
mod formatter;
pub mod keys;
mod template;

pub use error::{FormatError, TemplateSyntaxError};
pub use formatter::{FormatContext, TextFormatter};
