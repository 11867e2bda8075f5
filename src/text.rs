//! Text form `[(left, top) (right, bottom)]`.

use std::fmt;
use std::str::FromStr;

use crate::{DRect, Error, FormatOptions, Result};

/// Honors a formatter precision such as `{:.2}` by writing every bound with it.
impl fmt::Display for DRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            let options = FormatOptions::default().with_precision(precision);
            return write!(f, "{}", self.display_with(options));
        }
        write!(
            f,
            "[({}, {}) ({}, {})]",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// [`fmt::Display`] adapter returned by [`DRect::display_with`].
#[derive(Debug, Copy, Clone)]
pub struct DisplayWith {
    rect: DRect,
    options: FormatOptions,
}

impl fmt::Display for DisplayWith {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let DRect {
            left,
            top,
            right,
            bottom,
        } = self.rect;
        match self.options.precision {
            Some(p) => write!(f, "[({left:.p$}, {top:.p$}) ({right:.p$}, {bottom:.p$})]"),
            None => fmt::Display::fmt(&self.rect, f),
        }
    }
}

impl DRect {
    pub fn display_with(&self, options: FormatOptions) -> DisplayWith {
        DisplayWith {
            rect: *self,
            options,
        }
    }

    /// Parses one rectangle from the start of `text` and returns it together
    /// with the unconsumed remainder.
    ///
    /// The punctuation must match byte-for-byte, including its single spaces.
    /// Whitespace is only skipped directly before a number; none is allowed
    /// before the opening bracket or between a number and the punctuation
    /// that follows it.
    pub fn parse_prefix(text: &str) -> Result<(DRect, &str)> {
        parse_prefix(text)
            .inspect_err(|err| log::debug!("rejected rectangle text {text:?}: {err}"))
    }
}

impl FromStr for DRect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (rect, rest) = DRect::parse_prefix(s)?;
        if !rest.is_empty() {
            log::debug!("rejected rectangle text {s:?}: trailing {rest:?}");
            return Err(Error::TrailingText(rest.to_owned()));
        }
        Ok(rect)
    }
}

struct Cursor<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.text[self.offset..]
    }

    fn expect(&mut self, literal: &'static str) -> Result<()> {
        if !self.rest().starts_with(literal) {
            return Err(Error::UnexpectedText {
                expected: literal,
                offset: self.offset,
            });
        }
        self.offset += literal.len();
        Ok(())
    }

    fn number(&mut self) -> Result<f64> {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        let end = trimmed
            .find(|c: char| c == ',' || c == ')')
            .unwrap_or(trimmed.len());
        let token = &trimmed[..end];
        let value = token.parse::<f64>().map_err(|source| Error::InvalidNumber {
            text: token.to_owned(),
            source,
        })?;
        self.offset += rest.len() - trimmed.len() + end;
        Ok(value)
    }
}

fn parse_prefix(text: &str) -> Result<(DRect, &str)> {
    let mut cursor = Cursor { text, offset: 0 };
    cursor.expect("[(")?;
    let left = cursor.number()?;
    cursor.expect(", ")?;
    let top = cursor.number()?;
    cursor.expect(") (")?;
    let right = cursor.number()?;
    cursor.expect(", ")?;
    let bottom = cursor.number()?;
    cursor.expect(")]")?;
    Ok((DRect::new(left, top, right, bottom), cursor.rest()))
}
