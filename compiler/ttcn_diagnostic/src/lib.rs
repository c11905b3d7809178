//! Diagnostic system for the TTCN-3 front end.
//!
//! - Error codes for searchability
//! - A message saying what went wrong
//! - A primary span saying where, resolved to `file:line:column`
//! - Optional secondary labels for context
//!
//! Diagnostics are collected in a [`DiagnosticQueue`] while parsing and
//! handed to callers as [`ParseErrors`], sorted by position.

mod diagnostic;
mod error_code;
mod errors;
pub mod queue;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ParseErrors;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
