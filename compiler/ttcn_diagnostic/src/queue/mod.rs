//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Deduplication of same-line syntax errors
//! - Sorting by source position on flush

use ttcn_ir::Span;

use crate::{Diagnostic, ErrorCode};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before stopping (0 = unlimited).
    pub error_limit: usize,
    /// Keep only the first syntax error reported on a line.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    /// Report everything. Tests and tools that want the full picture rely on
    /// this.
    fn default() -> Self {
        Self::unlimited()
    }
}

impl DiagnosticConfig {
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }

    /// One syntax error per line, at most ten in total. Suited for terminal
    /// output.
    pub fn compact() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    /// Global offset of the primary span, for sorting.
    offset: u32,
    /// 1-based line, for deduplication.
    line: u32,
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// ```text
/// let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::compact());
/// queue.add(diagnostic, line);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
    error_count: usize,
    /// Last line with a syntax error (for dedup).
    last_syntax_line: Option<u32>,
    /// Set once the "too many errors" diagnostic has been queued.
    truncated: bool,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic located on `line`.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic, line: u32) -> bool {
        let is_error = diag.is_error();
        let span = diag.primary_span().unwrap_or(Span::DUMMY);

        if self.limit_reached() {
            if is_error && !self.truncated {
                self.truncated = true;
                let note = too_many_errors(self.config.error_limit, span)
                    .with_position(diag.position.clone());
                self.diagnostics.push(QueuedDiagnostic {
                    diagnostic: note,
                    offset: span.start,
                    line,
                });
            }
            return false;
        }

        if self.config.deduplicate && self.is_duplicate(&diag, line) {
            return false;
        }

        if is_error {
            if diag.code.is_parser_error() {
                self.last_syntax_line = Some(line);
            }
            self.error_count += 1;
        }

        self.diagnostics.push(QueuedDiagnostic {
            diagnostic: diag,
            offset: span.start,
            line,
        });
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Sort diagnostics by position and return them, clearing the queue.
    ///
    /// The sort is stable, so diagnostics at the same offset keep the order
    /// they were reported in.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| w[0].offset <= w[1].offset);
        if !already_sorted {
            self.diagnostics.sort_by_key(|d| d.offset);
        }

        let result = self.diagnostics.drain(..).map(|d| d.diagnostic).collect();
        self.error_count = 0;
        self.last_syntax_line = None;
        self.truncated = false;
        result
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().map(|d| &d.diagnostic)
    }

    fn is_duplicate(&self, diag: &Diagnostic, line: u32) -> bool {
        diag.is_error() && diag.code.is_parser_error() && self.last_syntax_line == Some(line)
    }
}

/// Create a "too many errors" diagnostic.
#[cold]
pub fn too_many_errors(limit: usize, span: Span) -> Diagnostic {
    Diagnostic::note(ErrorCode::E9002)
        .with_message(format!("too many errors (limit is {limit})"))
        .with_label(span, "error limit reached here")
}

#[cfg(test)]
mod tests;
