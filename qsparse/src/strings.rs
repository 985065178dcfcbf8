// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use memchr::memchr;

/// Split `data` at the first occurrence of `delim`.
///
/// The delimiter itself is not part of either returned slice.
/// Returns `None`, if `delim` does not occur in `data`.
pub fn split_delim(data: &[u8], delim: u8) -> Option<(&[u8], &[u8])> {
    memchr(delim, data).map(|p| (&data[..p], &data[p + 1..]))
}

/// Split `s` at the first occurrence of the ASCII character `delim`.
pub fn split_delim_str(s: &str, delim: u8) -> Option<(&str, &str)> {
    debug_assert!(delim.is_ascii());
    // Splitting at an ASCII byte always lands on a char boundary.
    memchr(delim, s.as_bytes()).map(|p| (&s[..p], &s[p + 1..]))
}


// vim: ts=4 sw=4 expandtab
