//! Implementation of the terminator-bounded byte scan.
//!
//! This is a tiny wrapper on top of `memchr2` from the `memchr` crate: a
//! single pass looks for the needle and the NUL terminator at once, so
//! whichever comes first decides the outcome. Searching for 0 falls out for
//! free, because then the first hit _is_ the terminator.
use memchr::memchr2;

/// Returns the index of the first occurrence of `c` in `s`, scanning at most
/// through the first NUL byte. Searching for `0` yields the terminator's own
/// index. When `s` contains no NUL, the slice length bounds the scan instead.
pub fn position(s: &[u8], c: u8) -> Option<usize> {
    let ix = memchr2(c, 0, s)?;
    if s[ix] == c {
        Some(ix)
    } else {
        // Hit the terminator first: everything past it is out of bounds.
        None
    }
}
