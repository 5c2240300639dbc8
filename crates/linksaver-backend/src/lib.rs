// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Link Saver backend — the native capabilities behind the UI: validating a
// candidate link by fetching the page it points at, and (in debug builds)
// generating sample links for manual testing.

pub mod validator;

#[cfg(debug_assertions)]
pub mod sample;

pub use validator::{LinkValidator, WebpageValidator, validate_offline};
