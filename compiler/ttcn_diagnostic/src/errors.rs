//! The error value returned by parse entry points.

use thiserror::Error;

use crate::Diagnostic;

/// Every diagnostic produced while parsing one input, sorted by position.
///
/// Displays as the first error, followed by a count of the rest.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{}", summarize(.diagnostics))]
pub struct ParseErrors {
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseErrors {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        ParseErrors { diagnostics }
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn first(&self) -> Option<&Diagnostic> {
        self.diagnostics.first()
    }
}

impl IntoIterator for ParseErrors {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

fn summarize(diagnostics: &[Diagnostic]) -> String {
    match diagnostics {
        [] => "no errors".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more errors)", rest.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_summarizes_remaining_errors() {
        let one = Diagnostic::error(ErrorCode::E1002).with_message("expected expression");
        let two = Diagnostic::error(ErrorCode::E1014).with_message("missing semicolon");

        let errs = ParseErrors::new(vec![one.clone()]);
        assert_eq!(errs.to_string(), "error[E1002]: expected expression");

        let errs = ParseErrors::new(vec![one, two.clone(), two]);
        assert_eq!(
            errs.to_string(),
            "error[E1002]: expected expression (and 2 more errors)"
        );
        assert_eq!(errs.len(), 3);
    }

    #[test]
    fn is_a_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        let errs = ParseErrors::new(Vec::new());
        assert_error(&errs);
        assert!(errs.is_empty());
    }
}
