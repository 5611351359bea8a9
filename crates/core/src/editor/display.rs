//! Display rendering of editor values

use core::fmt::{self, Write};

/// Capacity of rendered display text
pub const DISPLAY_LEN: usize = 24;

/// Rendered display text
pub type DisplayText = heapless::String<DISPLAY_LEN>;

/// Placeholder for a string-mode value outside the display table
pub const OUT_OF_RANGE_TEXT: &str = "No value";

/// Placeholder for a slot whose mode cannot be rendered
pub const NO_SUCH_TYPE_TEXT: &str = "No such type";

/// Successful render result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    /// The value was rendered
    Value,
    /// String-mode value had no display entry; placeholder written
    OutOfRange {
        /// Integer value that missed the table
        index: i32,
        /// Entries in the display table
        count: usize,
    },
}

/// Render failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// Descriptor mode has no rendering; placeholder written
    NoSuchType,
    /// Output buffer too small
    Truncated,
}

impl DisplayError {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayError::NoSuchType => "NoSuchType",
            DisplayError::Truncated => "Truncated",
        }
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::NoSuchType => write!(f, "no such limit type"),
            DisplayError::Truncated => write!(f, "display buffer too small"),
        }
    }
}

impl From<fmt::Error> for DisplayError {
    fn from(_: fmt::Error) -> Self {
        DisplayError::Truncated
    }
}

/// Write an integer rendering of `value`
pub(super) fn write_int<W: Write>(out: &mut W, value: f32) -> Result<Rendered, DisplayError> {
    write!(out, "{}", value as i32)?;
    Ok(Rendered::Value)
}

/// Write a two-decimal fixed-point rendering of `value`
pub(super) fn write_fixed<W: Write>(out: &mut W, value: f32) -> Result<Rendered, DisplayError> {
    write!(out, "{:.2}", value)?;
    Ok(Rendered::Value)
}

/// Write the display table entry addressed by `value`
pub(super) fn write_label<W: Write>(
    out: &mut W,
    value: f32,
    labels: &[&str],
) -> Result<Rendered, DisplayError> {
    let index = value as i32;
    match usize::try_from(index).ok().and_then(|i| labels.get(i)) {
        Some(label) if value >= 0.0 => {
            out.write_str(label)?;
            Ok(Rendered::Value)
        }
        _ => {
            out.write_str(OUT_OF_RANGE_TEXT)?;
            Ok(Rendered::OutOfRange {
                index,
                count: labels.len(),
            })
        }
    }
}
