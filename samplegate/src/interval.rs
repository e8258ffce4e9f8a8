use core::fmt;
use core::ops::{Range, RangeInclusive};

/// An immutable interval over `f64` values. Each endpoint may be included or
/// excluded, and either endpoint may be infinite. Infinite endpoints are never
/// included.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Interval {
    pub(crate) lower: f64,
    pub(crate) lower_included: bool,
    pub(crate) upper: f64,
    pub(crate) upper_included: bool,
}

impl Interval {
    pub fn new(lower: f64, lower_included: bool, upper: f64, upper_included: bool) -> Self {
        Self {
            lower,
            lower_included: lower_included && lower.is_finite(),
            upper,
            upper_included: upper_included && upper.is_finite(),
        }
    }

    /// `[lower, upper]`
    pub fn closed(lower: f64, upper: f64) -> Self {
        Self::new(lower, true, upper, true)
    }

    /// `(lower, upper)`
    pub fn open(lower: f64, upper: f64) -> Self {
        Self::new(lower, false, upper, false)
    }

    /// `[lower, upper)`
    pub fn closed_open(lower: f64, upper: f64) -> Self {
        Self::new(lower, true, upper, false)
    }

    /// `(lower, upper]`
    pub fn open_closed(lower: f64, upper: f64) -> Self {
        Self::new(lower, false, upper, true)
    }

    /// `[lower, inf)`
    pub fn at_least(lower: f64) -> Self {
        Self::new(lower, true, f64::INFINITY, false)
    }

    /// `(lower, inf)`
    pub fn greater_than(lower: f64) -> Self {
        Self::new(lower, false, f64::INFINITY, false)
    }

    /// `(-inf, upper]`
    pub fn at_most(upper: f64) -> Self {
        Self::new(f64::NEG_INFINITY, false, upper, true)
    }

    /// `(-inf, upper)`
    pub fn less_than(upper: f64) -> Self {
        Self::new(f64::NEG_INFINITY, false, upper, false)
    }

    /// `[value, value]`
    pub fn point(value: f64) -> Self {
        Self::closed(value, value)
    }

    /// Every finite and infinite value, but not NaN.
    pub fn all() -> Self {
        Self::new(f64::NEG_INFINITY, false, f64::INFINITY, false)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn lower_included(&self) -> bool {
        self.lower_included
    }

    pub fn upper_included(&self) -> bool {
        self.upper_included
    }

    /// Returns true if the interval holds exactly one value.
    pub fn is_point(&self) -> bool {
        self.lower == self.upper && self.lower_included && self.upper_included
    }

    /// Returns true if no value can be contained in the interval.
    pub fn is_empty(&self) -> bool {
        if self.lower.is_nan() || self.upper.is_nan() || self.lower > self.upper {
            return true;
        }

        self.lower == self.upper && !self.is_point()
    }

    /// Tests whether `value` falls within the interval. NaN is never
    /// contained.
    pub fn contains(&self, value: f64) -> bool {
        let above_lower = if self.lower_included {
            value >= self.lower
        } else {
            value > self.lower
        };

        let below_upper = if self.upper_included {
            value <= self.upper
        } else {
            value < self.upper
        };

        // comparisons against NaN are always false, so NaN falls through here
        above_lower && below_upper
    }
}

impl From<RangeInclusive<f64>> for Interval {
    fn from(range: RangeInclusive<f64>) -> Self {
        let (lower, upper) = range.into_inner();
        Self::closed(lower, upper)
    }
}

impl From<Range<f64>> for Interval {
    fn from(range: Range<f64>) -> Self {
        Self::closed_open(range.start, range.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.lower_included { '[' } else { '(' };
        let close = if self.upper_included { ']' } else { ')' };
        write!(f, "{open}{}, {}{close}", self.lower, self.upper)
    }
}
