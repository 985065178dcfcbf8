// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![forbid(unsafe_code)]

mod decode;
mod errors;
mod query;
mod strings;

pub use decode::{decode_uri_component, decode_uri_component_opt};
pub use errors::DecodeError;
pub use query::{MissingValue, Query, parse_qs, parse_qs_compat};
pub use strings::{split_delim, split_delim_str};

// vim: ts=4 sw=4 expandtab
