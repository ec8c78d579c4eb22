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

//! # Duotone Range
//!
//! **The two-colored range value type.**
//!
//! A colored range is an immutable value pairing an inclusive integer
//! interval with a step size, a shared bound-arithmetic strategy, and a
//! complementary pair of colors. External consumers use the colors to
//! distinguish two classes of positions inside the interval; this crate
//! only guarantees the value's shape and its accessor contract.
//!
//! ## Architecture
//!
//! * **`math`**: The `BoundMath` strategy trait and the process-wide shared
//!   strategy singletons, resolved per element type through `RangeBound`.
//! * **`color`**: Closed two-element color sets with a total complement
//!   (`RedGreenColor`, `RedBlackColor`).
//! * **`range`**: The `ColoredRange` value type, its constructors,
//!   validation, and `InvalidRangeError`.
//!
//! ## Design Philosophy
//!
//! 1.  **Immutability**: A range is fully determined at construction and is
//!     `Copy`; there are no mutating operations.
//! 2.  **Structural invariants**: The second color is always computed as the
//!     complement of the first, so an equal pair is unrepresentable.
//! 3.  **Fail-Fast**: All validation happens eagerly in the constructors;
//!     every accessor on a constructed value is total.

pub mod color;
pub mod math;
pub mod range;
