//! Cell value capability trait and implementations.
//!
//! This module defines [`Cell`], the capability a value type must provide to be
//! laid out in a table: deterministic fixed-precision text rendering plus a
//! well-defined default representation. The default representation is what the
//! renderer substitutes in place when a formatted value overflows its column
//! (numeric zero for numbers, the empty string for text).
//!
//! Implementations are provided for the common numeric primitives and for
//! strings. Integer and string rendering ignore the precision argument; only
//! floating-point values carry fixed decimal places.

/// Capability required of values rendered into table cells.
///
/// A cell value must be formattable at a fixed decimal precision and
/// default-constructible, so the renderer can fall back to the type's default
/// rendering when the real value does not fit its column.
///
/// # Examples
///
/// ```
/// use tablizer::Cell;
///
/// assert_eq!(1.5_f64.format_cell(3), "1.500");
/// assert_eq!(42_i32.format_cell(8), "42");
/// assert_eq!(<f64 as Cell>::default_cell(2), "0.00");
/// assert_eq!(<&str as Cell>::default_cell(2), "");
/// ```
pub trait Cell: Default {
    /// Renders the value as fixed-precision text.
    ///
    /// `precision` is the number of digits after the decimal point for
    /// floating-point values; non-fractional types ignore it.
    fn format_cell(&self, precision: usize) -> String;

    /// Renders the type's default value, used as the in-cell substitute when
    /// the real value overflows its column.
    fn default_cell(precision: usize) -> String
    where
        Self: Sized,
    {
        Self::default().format_cell(precision)
    }
}

macro_rules! impl_cell_for_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Cell for $ty {
                fn format_cell(&self, _precision: usize) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_cell_for_integer!(i32, i64, u32, u64, usize);

impl Cell for f32 {
    fn format_cell(&self, precision: usize) -> String {
        format!("{self:.precision$}")
    }
}

impl Cell for f64 {
    fn format_cell(&self, precision: usize) -> String {
        format!("{self:.precision$}")
    }
}

impl Cell for String {
    fn format_cell(&self, _precision: usize) -> String {
        self.clone()
    }
}

impl Cell for &str {
    fn format_cell(&self, _precision: usize) -> String {
        (*self).to_string()
    }
}
