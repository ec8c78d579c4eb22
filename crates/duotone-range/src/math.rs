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

//! # Bound Arithmetic Strategies
//!
//! A colored range does not compute with its bounds directly; it delegates
//! to a [`BoundMath`] strategy appropriate to the element type. Strategies
//! are stateless and shared: every range over the same element type reads
//! the same `static` instance, so strategy handles are identity-stable
//! across independently constructed ranges.
//!
//! The [`RangeBound`] trait is the registry mapping an element type to its
//! shared strategy. It is implemented for `i32` and `i64`; custom element
//! types can participate by implementing it and pointing `shared_math` at
//! their own `static` strategy.

use duotone_core::num::{
    constants::{PlusOne, Zero},
    ops::checked_arithmetic::{CheckedAddVal, CheckedSubVal},
};
use num_traits::PrimInt;
use std::fmt::{Debug, Display};

/// Arithmetic over range bounds and lengths.
///
/// `B` is the bound type and `L` the length type between two bounds. For
/// integer bounds the two coincide, but the split keeps the strategy usable
/// for element types whose distances are measured in a different unit.
///
/// Implementations must be stateless: the library shares one instance per
/// element type across the whole process.
pub trait BoundMath<B, L>: Send + Sync {
    /// Returns `bound + length`.
    fn add(&self, bound: B, length: L) -> B;

    /// Returns `bound + length`, or `None` if the result does not fit `B`.
    fn checked_add(&self, bound: B, length: L) -> Option<B>;

    /// Returns `bound - length`.
    fn subtract(&self, bound: B, length: L) -> B;

    /// Returns `bound - length`, or `None` if the result does not fit `B`.
    fn checked_sub(&self, bound: B, length: L) -> Option<B>;

    /// Returns `end_exclusive - start`.
    fn length_between(&self, start: B, end_exclusive: B) -> L;
}

/// Bound math for `i32` ranges.
///
/// Stateless; use the shared [`I32_BOUND_MATH`] instance instead of
/// constructing your own, so strategy handles stay identity-stable.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct I32BoundMath;

impl BoundMath<i32, i32> for I32BoundMath {
    #[inline(always)]
    fn add(&self, bound: i32, length: i32) -> i32 {
        bound + length
    }

    #[inline(always)]
    fn checked_add(&self, bound: i32, length: i32) -> Option<i32> {
        bound.checked_add_val(length)
    }

    #[inline(always)]
    fn subtract(&self, bound: i32, length: i32) -> i32 {
        bound - length
    }

    #[inline(always)]
    fn checked_sub(&self, bound: i32, length: i32) -> Option<i32> {
        bound.checked_sub_val(length)
    }

    #[inline(always)]
    fn length_between(&self, start: i32, end_exclusive: i32) -> i32 {
        end_exclusive - start
    }
}

/// The process-wide shared instance of [`I32BoundMath`].
pub static I32_BOUND_MATH: I32BoundMath = I32BoundMath;

/// Bound math for `i64` ranges.
///
/// Stateless; use the shared [`I64_BOUND_MATH`] instance instead of
/// constructing your own, so strategy handles stay identity-stable.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct I64BoundMath;

impl BoundMath<i64, i64> for I64BoundMath {
    #[inline(always)]
    fn add(&self, bound: i64, length: i64) -> i64 {
        bound + length
    }

    #[inline(always)]
    fn checked_add(&self, bound: i64, length: i64) -> Option<i64> {
        bound.checked_add_val(length)
    }

    #[inline(always)]
    fn subtract(&self, bound: i64, length: i64) -> i64 {
        bound - length
    }

    #[inline(always)]
    fn checked_sub(&self, bound: i64, length: i64) -> Option<i64> {
        bound.checked_sub_val(length)
    }

    #[inline(always)]
    fn length_between(&self, start: i64, end_exclusive: i64) -> i64 {
        end_exclusive - start
    }
}

/// The process-wide shared instance of [`I64BoundMath`].
pub static I64_BOUND_MATH: I64BoundMath = I64BoundMath;

/// An element type usable as a colored-range bound.
///
/// This trait is the registry from element kind to shared bound math: a
/// range never owns its strategy, it holds the `&'static` handle returned
/// by [`RangeBound::shared_math`] for its element type.
///
/// # Examples
///
/// ```rust
/// # use duotone_range::math::RangeBound;
/// let a = <i32 as RangeBound>::shared_math();
/// let b = <i32 as RangeBound>::shared_math();
/// assert!(std::ptr::addr_eq(a, b));
/// ```
pub trait RangeBound: PrimInt + Debug + Display + Send + Sync + 'static {
    /// The length type between two bounds of this element type.
    type Length: PrimInt + PlusOne + Zero + Debug + Display + Send + Sync + 'static;

    /// Returns the shared bound-math strategy for this element type.
    ///
    /// The returned reference is identity-stable: every call, from every
    /// range, yields the same `static` instance.
    fn shared_math() -> &'static dyn BoundMath<Self, Self::Length>;
}

impl RangeBound for i32 {
    type Length = i32;

    #[inline]
    fn shared_math() -> &'static dyn BoundMath<i32, i32> {
        &I32_BOUND_MATH
    }
}

impl RangeBound for i64 {
    type Length = i64;

    #[inline]
    fn shared_math() -> &'static dyn BoundMath<i64, i64> {
        &I64_BOUND_MATH
    }
}
