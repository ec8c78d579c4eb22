// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # The Colored Range Value Type
//!
//! A [`ColoredRange`] is an immutable value: an inclusive integer interval,
//! a positive step, a reference to the shared bound-math strategy for its
//! element type, and a default color whose complement is derived on demand.
//!
//! All validation happens in the constructors and is reported through
//! [`InvalidRangeError`]; every accessor on a constructed value is total.

use crate::color::{ColorPair, RedBlackColor, RedGreenColor};
use crate::math::{BoundMath, RangeBound};
use duotone_core::math::interval::ClosedInterval;
use duotone_core::num::constants::{PlusOne, Zero};

/// The error type for colored-range construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRangeError<B, L> {
    /// The start bound is greater than the end bound.
    EmptyRange {
        /// The offending start bound.
        start: B,
        /// The offending end bound.
        end: B,
    },
    /// The step is zero or negative.
    NonPositiveStep {
        /// The offending step.
        step: L,
    },
    /// `end + step` does not fit the bound type, so the range length cannot
    /// be computed.
    BoundOverflow {
        /// The end bound.
        end: B,
        /// The step.
        step: L,
    },
    /// The bound math disagrees with the supplied step.
    InconsistentMath,
}

impl<B, L> std::fmt::Display for InvalidRangeError<B, L>
where
    B: std::fmt::Display,
    L: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidRangeError::EmptyRange { start, end } => {
                write!(f, "Empty range: start {} is greater than end {}", start, end)
            }
            InvalidRangeError::NonPositiveStep { step } => {
                write!(f, "Step {} must be positive", step)
            }
            InvalidRangeError::BoundOverflow { end, step } => {
                write!(
                    f,
                    "Range end {} plus step {} overflows the bound type",
                    end, step
                )
            }
            InvalidRangeError::InconsistentMath => {
                write!(f, "Bound math is inconsistent with the supplied step")
            }
        }
    }
}

impl<B, L> std::error::Error for InvalidRangeError<B, L>
where
    B: std::fmt::Debug + std::fmt::Display,
    L: std::fmt::Debug + std::fmt::Display,
{
}

/// An immutable two-colored range.
///
/// The value pairs an inclusive interval with a step, the shared bound-math
/// strategy for its element type, and a default color. The second color is
/// never stored: [`ColoredRange::other_color`] computes the complement, so
/// the two colors cannot be equal.
///
/// # Examples
///
/// ```rust
/// # use duotone_range::color::RedGreenColor;
/// # use duotone_range::range::RedGreenI32Range;
///
/// let range = RedGreenI32Range::new(1, 2).unwrap();
/// assert_eq!(range.span().start(), 1);
/// assert_eq!(range.span().end(), 2);
/// assert_eq!(range.step(), 1);
/// assert_eq!(range.default_color(), RedGreenColor::Red);
/// assert_eq!(range.other_color(), RedGreenColor::Green);
/// assert_eq!(range.length(), 2);
/// ```
#[derive(Clone, Copy)]
pub struct ColoredRange<B, C>
where
    B: RangeBound,
    C: ColorPair,
{
    span: ClosedInterval<B>,
    step: B::Length,
    math: &'static dyn BoundMath<B, B::Length>,
    default_color: C,
    length: B::Length,
}

impl<B, C> ColoredRange<B, C>
where
    B: RangeBound,
    C: ColorPair,
{
    /// Creates a new colored range over `[start, end]` with a step of 1 and
    /// the default color of the color set.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidRangeError`] if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use duotone_range::range::RedGreenI32Range;
    ///
    /// assert!(RedGreenI32Range::new(1, 2).is_ok());
    /// assert!(RedGreenI32Range::new(1, 1).is_ok());
    /// assert!(RedGreenI32Range::new(1, 0).is_err());
    /// ```
    pub fn new(start: B, end: B) -> Result<Self, InvalidRangeError<B, B::Length>> {
        Self::from_parts(start, end, B::Length::PLUS_ONE, C::DEFAULT)
    }

    /// Creates a new colored range with an explicit step and the default
    /// color of the color set.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidRangeError`] if `start > end`, if `step <= 0`,
    /// or if `end + step` overflows the bound type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use duotone_range::range::RedGreenI32Range;
    ///
    /// let range = RedGreenI32Range::with_step(1, 5, 2).unwrap();
    /// assert_eq!(range.step(), 2);
    /// assert!(RedGreenI32Range::with_step(1, 5, 0).is_err());
    /// ```
    pub fn with_step(
        start: B,
        end: B,
        step: B::Length,
    ) -> Result<Self, InvalidRangeError<B, B::Length>> {
        Self::from_parts(start, end, step, C::DEFAULT)
    }

    /// Creates a new colored range with a step of 1 and an explicit default
    /// color.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use duotone_range::color::RedGreenColor;
    /// # use duotone_range::range::RedGreenI32Range;
    ///
    /// let range = RedGreenI32Range::with_default_color(1, 2, RedGreenColor::Green).unwrap();
    /// assert_eq!(range.default_color(), RedGreenColor::Green);
    /// assert_eq!(range.other_color(), RedGreenColor::Red);
    /// ```
    pub fn with_default_color(
        start: B,
        end: B,
        default_color: C,
    ) -> Result<Self, InvalidRangeError<B, B::Length>> {
        Self::from_parts(start, end, B::Length::PLUS_ONE, default_color)
    }

    /// Creates a new colored range from all of its parts, resolving the
    /// bound math through the element type's shared strategy.
    pub fn from_parts(
        start: B,
        end: B,
        step: B::Length,
        default_color: C,
    ) -> Result<Self, InvalidRangeError<B, B::Length>> {
        Self::with_math(start, end, step, default_color, B::shared_math())
    }

    /// Creates a new colored range with an explicit bound-math strategy.
    ///
    /// Ranges built through the other constructors share the process-wide
    /// strategy of their element type; this constructor exists for element
    /// types carrying a custom strategy. The strategy must still be a
    /// `static`, it is referenced for the lifetime of the value.
    ///
    /// # Errors
    ///
    /// Validation runs in order and reports the first violation:
    /// `start > end`, then `step <= 0`, then `end + step` overflow, then a
    /// strategy whose length arithmetic disagrees with `step`.
    pub fn with_math(
        start: B,
        end: B,
        step: B::Length,
        default_color: C,
        math: &'static dyn BoundMath<B, B::Length>,
    ) -> Result<Self, InvalidRangeError<B, B::Length>> {
        let span = match ClosedInterval::try_new(start, end) {
            Some(span) => span,
            None => return Err(InvalidRangeError::EmptyRange { start, end }),
        };

        if step <= B::Length::ZERO {
            return Err(InvalidRangeError::NonPositiveStep { step });
        }

        let end_exclusive = match math.checked_add(end, step) {
            Some(end_exclusive) => end_exclusive,
            None => return Err(InvalidRangeError::BoundOverflow { end, step }),
        };

        if math.length_between(start, math.add(start, step)) != step {
            return Err(InvalidRangeError::InconsistentMath);
        }

        let length = math.length_between(start, end_exclusive);

        Ok(Self {
            span,
            step,
            math,
            default_color,
            length,
        })
    }

    /// Returns the inclusive interval of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use duotone_range::range::RedGreenI32Range;
    ///
    /// let range = RedGreenI32Range::new(3, 7).unwrap();
    /// assert_eq!(range.span().start(), 3);
    /// assert_eq!(range.span().end(), 7);
    /// ```
    #[inline]
    pub fn span(&self) -> ClosedInterval<B> {
        self.span
    }

    /// Returns the step of the range.
    #[inline]
    pub fn step(&self) -> B::Length {
        self.step
    }

    /// Returns the bound-math strategy of the range.
    ///
    /// The handle is identity-stable: all ranges over the same element type
    /// constructed without an explicit strategy share one `static` instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use duotone_range::range::RedGreenI32Range;
    ///
    /// let a = RedGreenI32Range::new(1, 2).unwrap();
    /// let b = RedGreenI32Range::new(5, 9).unwrap();
    /// assert!(std::ptr::addr_eq(a.math(), b.math()));
    /// ```
    #[inline]
    pub fn math(&self) -> &'static dyn BoundMath<B, B::Length> {
        self.math
    }

    /// Returns the default color of the range.
    #[inline]
    pub fn default_color(&self) -> C {
        self.default_color
    }

    /// Returns the other color of the range, always the complement of
    /// [`ColoredRange::default_color`].
    #[inline]
    pub fn other_color(&self) -> C {
        self.default_color.complement()
    }

    /// Returns the length of the range in length units.
    ///
    /// The length is measured as `end - start + step`, so a range of `[1, 2]`
    /// with the default step has length 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use duotone_range::range::RedGreenI32Range;
    ///
    /// let range = RedGreenI32Range::new(1, 2).unwrap();
    /// assert_eq!(range.length(), 2);
    /// ```
    #[inline]
    pub fn length(&self) -> B::Length {
        self.length
    }
}

impl<B, C> std::fmt::Debug for ColoredRange<B, C>
where
    B: RangeBound,
    C: ColorPair,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColoredRange")
            .field("span", &self.span)
            .field("step", &self.step)
            .field("default_color", &self.default_color)
            .field("length", &self.length)
            .finish()
    }
}

impl<B, C> std::fmt::Display for ColoredRange<B, C>
where
    B: RangeBound,
    C: ColorPair,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} step {} ({}/{})",
            self.span,
            self.step,
            self.default_color,
            self.other_color()
        )
    }
}

impl<B, C> PartialEq for ColoredRange<B, C>
where
    B: RangeBound,
    C: ColorPair,
{
    fn eq(&self, other: &Self) -> bool {
        self.span == other.span
            && self.step == other.step
            && self.default_color == other.default_color
            && std::ptr::addr_eq(self.math, other.math)
    }
}

impl<B, C> Eq for ColoredRange<B, C>
where
    B: RangeBound,
    C: ColorPair,
{
}

/// A red/green colored range over `i32` bounds.
pub type RedGreenI32Range = ColoredRange<i32, RedGreenColor>;

/// A red/green colored range over `i64` bounds.
pub type RedGreenI64Range = ColoredRange<i64, RedGreenColor>;

/// A red/black colored range over `i32` bounds.
pub type RedBlackI32Range = ColoredRange<i32, RedBlackColor>;

/// A red/black colored range over `i64` bounds.
pub type RedBlackI64Range = ColoredRange<i64, RedBlackColor>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::I32_BOUND_MATH;

    struct BrokenMath;

    impl BoundMath<i32, i32> for BrokenMath {
        fn add(&self, bound: i32, _length: i32) -> i32 {
            bound
        }

        fn checked_add(&self, bound: i32, _length: i32) -> Option<i32> {
            Some(bound)
        }

        fn subtract(&self, bound: i32, _length: i32) -> i32 {
            bound
        }

        fn checked_sub(&self, bound: i32, _length: i32) -> Option<i32> {
            Some(bound)
        }

        fn length_between(&self, _start: i32, _end_exclusive: i32) -> i32 {
            0
        }
    }

    static BROKEN_MATH: BrokenMath = BrokenMath;

    #[test]
    fn test_basic_properties() {
        let range = RedGreenI32Range::new(1, 2).unwrap();
        assert_eq!(range.span(), ClosedInterval::new(1, 2));
        assert_eq!(range.step(), 1);
        assert!(std::ptr::addr_eq(range.math(), &I32_BOUND_MATH));
        assert_eq!(range.default_color(), RedGreenColor::Red);
        assert_eq!(range.other_color(), RedGreenColor::Green);
        assert_eq!(range.length(), 2);
    }

    #[test]
    fn test_accessor_round_trip() {
        let range =
            RedGreenI32Range::from_parts(-4, 10, 2, RedGreenColor::Green).unwrap();
        assert_eq!(range.span().start(), -4);
        assert_eq!(range.span().end(), 10);
        assert_eq!(range.step(), 2);
        assert_eq!(range.default_color(), RedGreenColor::Green);
        assert_eq!(range.other_color(), RedGreenColor::Red);
    }

    #[test]
    fn test_default_colors() {
        let range = RedGreenI32Range::new(1, 1).unwrap();
        assert_eq!(range.default_color(), RedGreenColor::Red);
        assert_eq!(range.other_color(), RedGreenColor::Green);

        let range =
            RedGreenI32Range::with_default_color(1, 1, RedGreenColor::Red).unwrap();
        assert_eq!(range.default_color(), RedGreenColor::Red);
        assert_eq!(range.other_color(), RedGreenColor::Green);

        let range =
            RedGreenI32Range::with_default_color(1, 1, RedGreenColor::Green).unwrap();
        assert_eq!(range.default_color(), RedGreenColor::Green);
        assert_eq!(range.other_color(), RedGreenColor::Red);
    }

    #[test]
    fn test_colors_always_complementary() {
        for color in [RedGreenColor::Red, RedGreenColor::Green] {
            let range = RedGreenI64Range::with_default_color(1, 6, color).unwrap();
            assert_ne!(range.default_color(), range.other_color());
            assert_eq!(range.other_color(), range.default_color().complement());
        }
    }

    #[test]
    fn test_red_black_range() {
        let range = RedBlackI32Range::new(1, 2).unwrap();
        assert_eq!(range.default_color(), RedBlackColor::Red);
        assert_eq!(range.other_color(), RedBlackColor::Black);
    }

    #[test]
    fn test_math_identity_across_instances() {
        let a = RedGreenI32Range::new(1, 2).unwrap();
        let b = RedGreenI32Range::new(100, 200).unwrap();
        let c = RedBlackI32Range::new(1, 2).unwrap();
        assert!(std::ptr::addr_eq(a.math(), b.math()));
        assert!(std::ptr::addr_eq(a.math(), c.math()));
        assert!(std::ptr::addr_eq(a.math(), <i32 as RangeBound>::shared_math()));
    }

    #[test]
    fn test_length() {
        // The literal scenario: [1, 2] with step 1 has length 2.
        assert_eq!(RedGreenI32Range::new(1, 2).unwrap().length(), 2);
        assert_eq!(RedGreenI32Range::new(1, 1).unwrap().length(), 1);
        assert_eq!(RedGreenI64Range::new(-3, 3).unwrap().length(), 7);
        // Length is measured in length units, end - start + step.
        assert_eq!(RedGreenI32Range::with_step(1, 5, 2).unwrap().length(), 6);
    }

    #[test]
    fn test_empty_range_rejected() {
        assert!(RedGreenI32Range::new(1, 6).is_ok());
        assert!(RedGreenI32Range::new(1, 1).is_ok());
        assert_eq!(
            RedGreenI32Range::new(1, 0).unwrap_err(),
            InvalidRangeError::EmptyRange { start: 1, end: 0 }
        );
    }

    #[test]
    fn test_non_positive_step_rejected() {
        assert_eq!(
            RedGreenI32Range::with_step(1, 2, 0).unwrap_err(),
            InvalidRangeError::NonPositiveStep { step: 0 }
        );
        assert_eq!(
            RedGreenI32Range::with_step(1, 2, -1).unwrap_err(),
            InvalidRangeError::NonPositiveStep { step: -1 }
        );
        // A step larger than the interval itself is legal.
        assert!(RedGreenI32Range::with_step(1, 2, 5).is_ok());
    }

    #[test]
    fn test_bound_overflow_rejected() {
        assert_eq!(
            RedGreenI32Range::new(0, i32::MAX).unwrap_err(),
            InvalidRangeError::BoundOverflow {
                end: i32::MAX,
                step: 1
            }
        );
        // One below the top still fits.
        let range = RedGreenI32Range::new(i32::MAX - 1, i32::MAX - 1).unwrap();
        assert_eq!(range.length(), 1);
    }

    #[test]
    fn test_inconsistent_math_rejected() {
        let result =
            RedGreenI32Range::with_math(1, 5, 1, RedGreenColor::Red, &BROKEN_MATH);
        assert_eq!(result.unwrap_err(), InvalidRangeError::InconsistentMath);
    }

    #[test]
    fn test_validation_order() {
        // An empty range wins over a bad step.
        assert_eq!(
            RedGreenI32Range::with_step(1, 0, 0).unwrap_err(),
            InvalidRangeError::EmptyRange { start: 1, end: 0 }
        );
        // A bad step wins over a broken strategy.
        let result =
            RedGreenI32Range::with_math(1, 5, 0, RedGreenColor::Red, &BROKEN_MATH);
        assert_eq!(result.unwrap_err(), InvalidRangeError::NonPositiveStep { step: 0 });
    }

    #[test]
    fn test_equality() {
        let a = RedGreenI32Range::new(1, 2).unwrap();
        let b = RedGreenI32Range::new(1, 2).unwrap();
        let c = RedGreenI32Range::with_step(1, 2, 2).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        // Copy semantics: the original stays usable.
        let copied = a;
        assert_eq!(copied, a);
    }

    #[test]
    fn test_display() {
        let range = RedGreenI32Range::new(1, 2).unwrap();
        assert_eq!(format!("{}", range), "[1, 2] step 1 (Red/Green)");
    }

    #[test]
    fn test_debug() {
        let range = RedGreenI32Range::new(1, 2).unwrap();
        let rendered = format!("{:?}", range);
        assert!(rendered.contains("span"));
        assert!(rendered.contains("default_color"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", InvalidRangeError::<i32, i32>::EmptyRange { start: 1, end: 0 }),
            "Empty range: start 1 is greater than end 0"
        );
        assert_eq!(
            format!("{}", InvalidRangeError::<i32, i32>::NonPositiveStep { step: 0 }),
            "Step 0 must be positive"
        );
        assert_eq!(
            format!(
                "{}",
                InvalidRangeError::<i32, i32>::BoundOverflow {
                    end: i32::MAX,
                    step: 1
                }
            ),
            format!(
                "Range end {} plus step 1 overflows the bound type",
                i32::MAX
            )
        );
        assert_eq!(
            format!("{}", InvalidRangeError::<i32, i32>::InconsistentMath),
            "Bound math is inconsistent with the supplied step"
        );
    }
}
