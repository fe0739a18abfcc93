// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An explicit diagnostics sink.
//!
//! The engine never logs. Operations that can observe malformed input take a
//! `&mut Diagnostics` and report into it; the caller decides what (if
//! anything) to do with the entries. This keeps every computation pure and
//! testable without capturing global output.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// What kind of problem a diagnostic describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCode {
    /// A field value could not be coerced to a finite number; `0` was
    /// substituted.
    CoercionFailure,
    /// A stacked sum came out non-finite; the layout pass was aborted.
    NonFiniteStackSum,
}

/// A single reported problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Problem category.
    pub code: DiagnosticCode,
    /// The field key (or bar key) the problem was observed on.
    pub key: String,
    /// A rendering of the offending value, including its type where relevant.
    pub value: String,
}

/// An accumulating list of [`Diagnostic`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn report(
        &mut self,
        code: DiagnosticCode,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.entries.push(Diagnostic {
            code,
            key: key.into(),
            value: value.into(),
        });
    }

    /// Returns the accumulated entries in report order.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Takes the accumulated entries, leaving the sink empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        core::mem::take(&mut self.entries)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn report_accumulates_in_order() {
        let mut diags = Diagnostics::new();
        assert!(diags.is_empty());
        diags.report(DiagnosticCode::CoercionFailure, "a", "text \"x\"");
        diags.report(DiagnosticCode::NonFiniteStackSum, "b", "NaN");
        assert_eq!(diags.len(), 2);
        assert_eq!(diags.entries()[0].key, "a");
        assert_eq!(diags.entries()[1].code, DiagnosticCode::NonFiniteStackSum);

        let taken = diags.take();
        assert_eq!(taken.len(), 2);
        assert!(diags.is_empty());
    }
}
