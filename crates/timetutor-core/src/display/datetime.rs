//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around `Date` that formats it in long form, e.g.
/// `Sunday, 18 October 2026`.
pub struct LongDate<'a>(pub &'a Date);

impl<'a> fmt::Display for LongDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%A, %-d %B %Y"))
    }
}
