// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Percent-decoding failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A `%` at byte offset `pos` is not followed by two hex digits.
    MalformedEscape { pos: usize },
    /// The decoded bytes are not valid UTF-8.
    InvalidUtf8,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::MalformedEscape { pos } => {
                write!(f, "URI malformed: Invalid percent escape at offset {pos}.")
            }
            Self::InvalidUtf8 => write!(f, "URI malformed: Decoded data is not valid UTF-8."),
        }
    }
}

impl std::error::Error for DecodeError {}


// vim: ts=4 sw=4 expandtab
