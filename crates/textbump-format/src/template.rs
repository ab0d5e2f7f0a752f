//! Tokenizer for brace-delimited format patterns.
//!
//! `{name}` and `{name:spec}` are fields, `{{` and `}}` are literal braces.
//! Everything else is copied through unchanged.

use crate::error::TemplateSyntaxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Literal(&'a str),
    Field(Field<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Field<'a> {
    pub name: &'a str,
    pub spec: &'a str,
}

impl<'a> Field<'a> {
    fn parse(body: &'a str) -> Result<Self, TemplateSyntaxError> {
        if body.contains('{') {
            return Err(TemplateSyntaxError::NestedOpen);
        }

        let (name, spec) = body.split_once(':').unwrap_or((body, ""));

        if name.contains('!') {
            return Err(TemplateSyntaxError::Conversion {
                field: body.to_string(),
            });
        }
        if name.is_empty() {
            return Err(TemplateSyntaxError::EmptyField);
        }

        Ok(Self { name, spec })
    }
}

/// Yields segments left to right and stops after the first syntax error.
pub(crate) struct Segments<'a> {
    rest: &'a str,
    failed: bool,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(template: &'a str) -> Self {
        Self {
            rest: template,
            failed: false,
        }
    }

    fn next_segment(&mut self) -> Result<Segment<'a>, TemplateSyntaxError> {
        let rest = self.rest;

        let Some(pos) = rest.find(['{', '}']) else {
            self.rest = "";
            return Ok(Segment::Literal(rest));
        };

        if pos > 0 {
            self.rest = &rest[pos..];
            return Ok(Segment::Literal(&rest[..pos]));
        }

        let bytes = rest.as_bytes();
        match (bytes[0], bytes.get(1)) {
            (b'{', Some(b'{')) => {
                self.rest = &rest[2..];
                Ok(Segment::Literal("{"))
            }
            (b'}', Some(b'}')) => {
                self.rest = &rest[2..];
                Ok(Segment::Literal("}"))
            }
            (b'}', _) => Err(TemplateSyntaxError::UnmatchedClose),
            _ => {
                let Some(end) = rest[1..].find('}') else {
                    return Err(TemplateSyntaxError::Unterminated);
                };
                let body = &rest[1..=end];
                self.rest = &rest[end + 2..];
                Field::parse(body).map(Segment::Field)
            }
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Result<Segment<'a>, TemplateSyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.rest.is_empty() {
            return None;
        }

        let segment = self.next_segment();
        self.failed = segment.is_err();
        Some(segment)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Left),
            '>' => Some(Self::Right),
            '^' => Some(Self::Center),
            _ => None,
        }
    }
}

/// Parsed `[[fill]align][0][width][type]` spec, where `type` may only be the
/// presentation type of the value being formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Padding {
    pub fill: char,
    pub align: Option<Align>,
    pub width: usize,
}

impl Padding {
    pub(crate) fn parse(full_spec: &str, presentation: char) -> Result<Self, TemplateSyntaxError> {
        let invalid = || TemplateSyntaxError::InvalidSpec {
            spec: full_spec.to_string(),
        };
        let spec = full_spec.strip_suffix(presentation).unwrap_or(full_spec);

        let mut chars = spec.chars();
        let first = chars.next();
        let second = chars.next();

        let (mut fill, align, rest) = match (first, second.and_then(Align::from_char)) {
            (Some(fill), Some(align)) => {
                let skip = fill.len_utf8() + 1;
                (Some(fill), Some(align), &spec[skip..])
            }
            _ => match first.and_then(Align::from_char) {
                Some(align) => (None, Some(align), &spec[1..]),
                None => (None, None, spec),
            },
        };

        let rest = match rest.strip_prefix('0') {
            Some(stripped) => {
                fill.get_or_insert('0');
                stripped
            }
            None => rest,
        };

        let width = if rest.is_empty() {
            0
        } else {
            rest.parse::<usize>().map_err(|_| invalid())?
        };

        Ok(Self {
            fill: fill.unwrap_or(' '),
            align,
            width,
        })
    }

    pub(crate) fn apply(&self, text: &str, default_align: Align, output: &mut String) {
        let len = text.chars().count();
        let pad = self.width.saturating_sub(len);
        let (left, right) = match self.align.unwrap_or(default_align) {
            Align::Left => (0, pad),
            Align::Right => (pad, 0),
            Align::Center => (pad / 2, pad - pad / 2),
        };

        output.extend(std::iter::repeat_n(self.fill, left));
        output.push_str(text);
        output.extend(std::iter::repeat_n(self.fill, right));
    }
}
