//! Byte search in NUL-terminated sequences that preserves the mutability of
//! its input.
//!
//! C's `strchr` accepts `const char *` but hands back a plain `char *`, so
//! const-correct callers cast the result at every call site. Rust references
//! already carry that distinction in the type: [`find`] borrows its haystack
//! shared and returns a shared reference, [`find_mut`] borrows it uniquely
//! and returns a unique one. Which of the two applies is decided by the
//! caller's argument type at compile time; both run the identical scan.
//!
//! The scan itself follows `strchr` semantics: it stops at the first NUL
//! byte, and searching for `0` finds the terminator. The one departure is
//! that a slice with no NUL in it is not undefined behavior here; the slice
//! length bounds the scan, so in-slice matches are still found and the
//! terminator simply never is.
//!
//! ```
//! let mut buf = *b"hello\0";
//! assert_eq!(bytechr::find(&buf, b'l'), Some(&b'l'));
//! assert_eq!(bytechr::position(&buf, b'l'), Some(2));
//! if let Some(hit) = bytechr::find_mut(&mut buf, b'h') {
//!     *hit = b'j';
//! }
//! assert_eq!(&buf, b"jello\0");
//! ```

use std::ffi::CStr;

mod scan;

pub use scan::position;

/// Returns a shared reference to the first occurrence of `c` in `s`, scanning
/// at most through the first NUL byte. Searching for `0` returns a reference
/// to the terminator itself.
///
/// The result borrows `s` shared, so writing through it is a compile error:
///
/// ```compile_fail
/// let buf = *b"hello\0";
/// let hit = bytechr::find(&buf, b'l').unwrap();
/// *hit = b'L';
/// ```
pub fn find(s: &[u8], c: u8) -> Option<&u8> {
    let ix = position(s, c)?;
    Some(&s[ix])
}

/// Returns a mutable reference to the first occurrence of `c` in `s`. Search
/// semantics are identical to [`find`]; only the borrow differs.
///
/// ```
/// let mut buf = *b"hello\0";
/// *bytechr::find_mut(&mut buf, b'l').unwrap() = b'L';
/// assert_eq!(&buf, b"heLlo\0");
/// ```
pub fn find_mut(s: &mut [u8], c: u8) -> Option<&mut u8> {
    let ix = position(s, c)?;
    Some(&mut s[ix])
}

/// [`find`] for inputs whose termination is statically guaranteed. The scan
/// covers the terminator, so `find_cstr(s, 0)` finds it.
pub fn find_cstr(s: &CStr, c: u8) -> Option<&u8> {
    find(s.to_bytes_with_nul(), c)
}
