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

//! # Color Sets
//!
//! The colors a range is tagged with form a closed two-element set with a
//! total complement. Modeling the pair through [`ColorPair::complement`]
//! rather than as two independent fields makes an equal default/other pair
//! unrepresentable: the other color is always derived, never stored.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A closed two-element color set.
///
/// Implementors provide the fixed default color of a freshly constructed
/// range and a total, involutive complement mapping each element of the set
/// to the other one.
///
/// # Examples
///
/// ```rust
/// # use duotone_range::color::{ColorPair, RedGreenColor};
/// assert_eq!(RedGreenColor::DEFAULT, RedGreenColor::Red);
/// assert_eq!(RedGreenColor::Red.complement(), RedGreenColor::Green);
/// assert_eq!(RedGreenColor::Green.complement().complement(), RedGreenColor::Green);
/// ```
pub trait ColorPair: Copy + Eq + Hash + Debug + Display + 'static {
    /// The color a freshly constructed range is tagged with unless
    /// configured otherwise.
    const DEFAULT: Self;

    /// Returns the other element of the set.
    #[must_use]
    fn complement(self) -> Self;
}

/// Color set for red/green ranges.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum RedGreenColor {
    Red,
    Green,
}

impl ColorPair for RedGreenColor {
    const DEFAULT: Self = RedGreenColor::Red;

    #[inline]
    fn complement(self) -> Self {
        match self {
            RedGreenColor::Red => RedGreenColor::Green,
            RedGreenColor::Green => RedGreenColor::Red,
        }
    }
}

impl Display for RedGreenColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RedGreenColor::Red => write!(f, "Red"),
            RedGreenColor::Green => write!(f, "Green"),
        }
    }
}

/// Color set for red/black ranges.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum RedBlackColor {
    Red,
    Black,
}

impl ColorPair for RedBlackColor {
    const DEFAULT: Self = RedBlackColor::Red;

    #[inline]
    fn complement(self) -> Self {
        match self {
            RedBlackColor::Red => RedBlackColor::Black,
            RedBlackColor::Black => RedBlackColor::Red,
        }
    }
}

impl Display for RedBlackColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RedBlackColor::Red => write!(f, "Red"),
            RedBlackColor::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_green_complement() {
        assert_eq!(RedGreenColor::Red.complement(), RedGreenColor::Green);
        assert_eq!(RedGreenColor::Green.complement(), RedGreenColor::Red);
    }

    #[test]
    fn test_red_black_complement() {
        assert_eq!(RedBlackColor::Red.complement(), RedBlackColor::Black);
        assert_eq!(RedBlackColor::Black.complement(), RedBlackColor::Red);
    }

    #[test]
    fn test_complement_is_involutive() {
        for color in [RedGreenColor::Red, RedGreenColor::Green] {
            assert_ne!(color.complement(), color);
            assert_eq!(color.complement().complement(), color);
        }
        for color in [RedBlackColor::Red, RedBlackColor::Black] {
            assert_ne!(color.complement(), color);
            assert_eq!(color.complement().complement(), color);
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(RedGreenColor::DEFAULT, RedGreenColor::Red);
        assert_eq!(RedBlackColor::DEFAULT, RedBlackColor::Red);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", RedGreenColor::Red), "Red");
        assert_eq!(format!("{}", RedGreenColor::Green), "Green");
        assert_eq!(format!("{}", RedBlackColor::Black), "Black");
    }
}
