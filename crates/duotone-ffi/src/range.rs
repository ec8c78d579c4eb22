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

//! # Foreign Function Interface (FFI) for Colored Ranges
//!
//! This module provides a C-compatible API for constructing and inspecting
//! red/green colored ranges over `i64` bounds.
//!
//! ## Usage Lifecycle
//!
//! 1.  **Instantiation**: Create a range using `duotone_range_new`,
//!     `duotone_range_with_step`, or `duotone_range_with_default_color`.
//!     The constructors return `NULL` when the parameters are rejected by
//!     construction validation (reversed bounds, non-positive step,
//!     overflowing `end + step`).
//! 2.  **Inspection**: Read the value through the accessor functions.
//! 3.  **Cleanup**: Explicitly free the range using `duotone_range_free`
//!     when it is no longer needed.
//!
//! ## Safety
//!
//! This module uses `unsafe` code to interact with raw pointers. Callers
//! **must** ensure:
//!
//! * **Pointer Validity**: Handles must be allocated by this library.
//! * **No Use After Free**: After `duotone_range_free`, the handle must not
//!   be used again.
//! * **Null Pointers**: Passing `NULL` to an accessor will result in a panic.
//!
//! ## Exported API
//!
//! ### Lifecycle
//! * `duotone_range_new`
//! * `duotone_range_with_step`
//! * `duotone_range_with_default_color`
//! * `duotone_range_free`
//!
//! ### Inspection
//! * `duotone_range_start`
//! * `duotone_range_end`
//! * `duotone_range_step`
//! * `duotone_range_length`
//! * `duotone_range_default_color`
//! * `duotone_range_other_color`
//!
//! ### Data Structures
//! * `FfiRangeColor`

use duotone_range::color::RedGreenColor;
use duotone_range::range::RedGreenI64Range;

/// A C-compatible representation of the red/green color set.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiRangeColor {
    /// The red color, the default of a freshly constructed range.
    Red = 0,
    /// The green color.
    Green = 1,
}

impl From<RedGreenColor> for FfiRangeColor {
    #[inline]
    fn from(color: RedGreenColor) -> Self {
        match color {
            RedGreenColor::Red => FfiRangeColor::Red,
            RedGreenColor::Green => FfiRangeColor::Green,
        }
    }
}

impl From<FfiRangeColor> for RedGreenColor {
    #[inline]
    fn from(color: FfiRangeColor) -> Self {
        match color {
            FfiRangeColor::Red => RedGreenColor::Red,
            FfiRangeColor::Green => RedGreenColor::Green,
        }
    }
}

impl std::fmt::Display for FfiRangeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FfiRangeColor::Red => write!(f, "Red"),
            FfiRangeColor::Green => write!(f, "Green"),
        }
    }
}

/// Creates a new colored range over `[start, end]` with a step of 1 and the
/// red default color.
///
/// Returns `NULL` if the parameters are rejected by construction validation.
#[no_mangle]
pub extern "C" fn duotone_range_new(start: i64, end: i64) -> *mut RedGreenI64Range {
    match RedGreenI64Range::new(start, end) {
        Ok(range) => Box::into_raw(Box::new(range)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Creates a new colored range with an explicit step and the red default
/// color.
///
/// Returns `NULL` if the parameters are rejected by construction validation.
#[no_mangle]
pub extern "C" fn duotone_range_with_step(
    start: i64,
    end: i64,
    step: i64,
) -> *mut RedGreenI64Range {
    match RedGreenI64Range::with_step(start, end, step) {
        Ok(range) => Box::into_raw(Box::new(range)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Creates a new colored range with a step of 1 and an explicit default
/// color.
///
/// Returns `NULL` if the parameters are rejected by construction validation.
#[no_mangle]
pub extern "C" fn duotone_range_with_default_color(
    start: i64,
    end: i64,
    default_color: FfiRangeColor,
) -> *mut RedGreenI64Range {
    match RedGreenI64Range::with_default_color(start, end, default_color.into()) {
        Ok(range) => Box::into_raw(Box::new(range)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Frees the memory allocated for a colored range.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by one of the `duotone_range_*` constructors.
#[no_mangle]
pub unsafe extern "C" fn duotone_range_free(ptr: *mut RedGreenI64Range) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Returns the inclusive start bound of the range.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by one of the `duotone_range_*` constructors.
#[no_mangle]
pub unsafe extern "C" fn duotone_range_start(ptr: *const RedGreenI64Range) -> i64 {
    assert!(
        !ptr.is_null(),
        "called `duotone_range_start` with null pointer"
    );
    let range = &*ptr;
    range.span().start()
}

/// Returns the inclusive end bound of the range.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by one of the `duotone_range_*` constructors.
#[no_mangle]
pub unsafe extern "C" fn duotone_range_end(ptr: *const RedGreenI64Range) -> i64 {
    assert!(
        !ptr.is_null(),
        "called `duotone_range_end` with null pointer"
    );
    let range = &*ptr;
    range.span().end()
}

/// Returns the step of the range.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by one of the `duotone_range_*` constructors.
#[no_mangle]
pub unsafe extern "C" fn duotone_range_step(ptr: *const RedGreenI64Range) -> i64 {
    assert!(
        !ptr.is_null(),
        "called `duotone_range_step` with null pointer"
    );
    let range = &*ptr;
    range.step()
}

/// Returns the length of the range in length units.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by one of the `duotone_range_*` constructors.
#[no_mangle]
pub unsafe extern "C" fn duotone_range_length(ptr: *const RedGreenI64Range) -> i64 {
    assert!(
        !ptr.is_null(),
        "called `duotone_range_length` with null pointer"
    );
    let range = &*ptr;
    range.length()
}

/// Returns the default color of the range.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by one of the `duotone_range_*` constructors.
#[no_mangle]
pub unsafe extern "C" fn duotone_range_default_color(
    ptr: *const RedGreenI64Range,
) -> FfiRangeColor {
    assert!(
        !ptr.is_null(),
        "called `duotone_range_default_color` with null pointer"
    );
    let range = &*ptr;
    range.default_color().into()
}

/// Returns the other color of the range, the complement of the default.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by one of the `duotone_range_*` constructors.
#[no_mangle]
pub unsafe extern "C" fn duotone_range_other_color(
    ptr: *const RedGreenI64Range,
) -> FfiRangeColor {
    assert!(
        !ptr.is_null(),
        "called `duotone_range_other_color` with null pointer"
    );
    let range = &*ptr;
    range.other_color().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_read_free_round_trip() {
        unsafe {
            let range = duotone_range_new(1, 2);
            assert!(!range.is_null());
            assert_eq!(duotone_range_start(range), 1);
            assert_eq!(duotone_range_end(range), 2);
            assert_eq!(duotone_range_step(range), 1);
            assert_eq!(duotone_range_length(range), 2);
            assert_eq!(duotone_range_default_color(range), FfiRangeColor::Red);
            assert_eq!(duotone_range_other_color(range), FfiRangeColor::Green);
            duotone_range_free(range);
        }
    }

    #[test]
    fn test_with_step() {
        unsafe {
            let range = duotone_range_with_step(1, 5, 2);
            assert!(!range.is_null());
            assert_eq!(duotone_range_step(range), 2);
            assert_eq!(duotone_range_length(range), 6);
            duotone_range_free(range);
        }
    }

    #[test]
    fn test_with_default_color() {
        unsafe {
            let range = duotone_range_with_default_color(1, 2, FfiRangeColor::Green);
            assert!(!range.is_null());
            assert_eq!(duotone_range_default_color(range), FfiRangeColor::Green);
            assert_eq!(duotone_range_other_color(range), FfiRangeColor::Red);
            duotone_range_free(range);
        }
    }

    #[test]
    fn test_invalid_parameters_yield_null() {
        let reversed = duotone_range_new(2, 1);
        assert!(reversed.is_null());

        let bad_step = duotone_range_with_step(1, 2, 0);
        assert!(bad_step.is_null());

        let overflowing = duotone_range_with_step(0, i64::MAX, 1);
        assert!(overflowing.is_null());
    }

    #[test]
    fn test_free_null_is_noop() {
        unsafe {
            duotone_range_free(std::ptr::null_mut());
        }
    }

    #[test]
    fn test_color_conversions() {
        assert_eq!(FfiRangeColor::from(RedGreenColor::Red), FfiRangeColor::Red);
        assert_eq!(
            FfiRangeColor::from(RedGreenColor::Green),
            FfiRangeColor::Green
        );
        assert_eq!(RedGreenColor::from(FfiRangeColor::Red), RedGreenColor::Red);
        assert_eq!(
            RedGreenColor::from(FfiRangeColor::Green),
            RedGreenColor::Green
        );
    }
}
