// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Record and value plumbing for the karta chart geometry engine.
//!
//! This crate provides the data side of the engine:
//! - **Records** are ordered field-name → value mappings with no structural
//!   guarantees beyond what the caller's axis/series configuration declares.
//!   Field access goes through a tagged [`FieldValue`], never dynamic typing.
//! - **Coercion** extracts a finite `f64` from an arbitrary field value,
//!   recovering locally (substitute `0`) and reporting through an explicit
//!   [`Diagnostics`] sink instead of logging.
//! - **Formatting** renders numbers for display (`1.2M`, `12.5K`, `1,234.5`).
//!
//! Everything is pure and deterministic: identical inputs always produce
//! identical outputs, and the diagnostics sink is the only observable side
//! channel.

#![no_std]

extern crate alloc;

mod coerce;
mod diag;
mod record;

pub use coerce::{coerce_number, coerce_values, format_field, format_number};
pub use diag::{Diagnostic, DiagnosticCode, Diagnostics};
pub use record::{Dataset, FieldValue, Record};
