/// Options controlling the text form produced by [`crate::DRect::display_with`].
///
/// The default writes every bound with the shortest representation that
/// parses back to the same value.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub precision: Option<usize>,
}

impl FormatOptions {
    /// Writes every bound with exactly `precision` digits after the decimal point.
    /// Output produced this way is generally not lossless.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_shortest(mut self) -> Self {
        self.precision = None;
        self
    }
}
