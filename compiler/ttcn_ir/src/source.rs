//! Position tracking shared across compilation units.
//!
//! A [`FileSet`] hands every registered source file a disjoint range of
//! global offsets. Tokens and syntax nodes only carry those offsets; the file
//! set resolves them back to `file:line:column` when a diagnostic is shown.
//!
//! Registration takes a write lock, lookups a read lock, so one file set can
//! be shared by parsers running on different threads.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::span::{Pos, SpanError};

/// A resolved source position.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    pub file: String,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column, counted in bytes.
    pub column: u32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file.is_empty() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "{}:{}:{}", self.file, self.line, self.column)
        }
    }
}

/// A source file registered in a [`FileSet`].
#[derive(Debug, Eq, PartialEq)]
pub struct SourceFile {
    name: String,
    base: Pos,
    size: u32,
    /// Local byte offsets of every line start. Always begins with `0`.
    line_starts: Vec<u32>,
}

impl SourceFile {
    fn new(name: String, base: Pos, size: u32, src: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            src.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .filter_map(|(i, _)| u32::try_from(i + 1).ok()),
        );
        SourceFile {
            name,
            base,
            size,
            line_starts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Global offset of the first byte of this file.
    pub fn base(&self) -> Pos {
        self.base
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Check whether a global offset belongs to this file.
    ///
    /// The offset one past the last byte belongs to the file, so that the
    /// end-of-file token resolves to a valid position.
    pub fn contains(&self, pos: Pos) -> bool {
        pos >= self.base && pos <= self.base.saturating_add(self.size)
    }

    /// 1-based line of a global offset inside this file.
    pub fn line(&self, pos: Pos) -> u32 {
        let local = pos.saturating_sub(self.base);
        let idx = self.line_starts.partition_point(|&start| start <= local);
        u32::try_from(idx).unwrap_or(u32::MAX).max(1)
    }

    /// Resolve a global offset inside this file.
    pub fn position(&self, pos: Pos) -> Position {
        let local = pos.saturating_sub(self.base);
        let line = self.line(pos);
        let line_start = self.line_starts[(line - 1) as usize];
        Position {
            file: self.name.clone(),
            line,
            column: local - line_start + 1,
        }
    }
}

/// Registry of source files with globally unique offsets.
#[derive(Debug)]
pub struct FileSet {
    inner: RwLock<FileSetInner>,
}

#[derive(Debug)]
struct FileSetInner {
    files: Vec<Arc<SourceFile>>,
    next_base: Pos,
}

impl Default for FileSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSet {
    pub fn new() -> Self {
        FileSet {
            inner: RwLock::new(FileSetInner {
                files: Vec::new(),
                // Offset 0 means "no position".
                next_base: 1,
            }),
        }
    }

    /// Register a file and reserve its offset range.
    ///
    /// Fails once the `u32` offset space is used up; earlier files keep
    /// their ranges.
    pub fn add_file(
        &self,
        name: impl Into<String>,
        src: &str,
    ) -> Result<Arc<SourceFile>, SpanError> {
        let too_large = || SpanError::FileTooLarge(src.len());
        let size = u32::try_from(src.len()).map_err(|_| too_large())?;
        let mut inner = self.inner.write();
        let base = inner.next_base;
        // One extra offset so that EOF positions never collide with the next file.
        let next_base = base
            .checked_add(size)
            .and_then(|end| end.checked_add(1))
            .ok_or_else(too_large)?;
        let file = Arc::new(SourceFile::new(name.into(), base, size, src));
        inner.next_base = next_base;
        inner.files.push(Arc::clone(&file));
        Ok(file)
    }

    /// Find the file that owns a global offset.
    pub fn file(&self, pos: Pos) -> Option<Arc<SourceFile>> {
        let inner = self.inner.read();
        let idx = inner.files.partition_point(|f| f.base <= pos);
        let file = inner.files.get(idx.checked_sub(1)?)?;
        file.contains(pos).then(|| Arc::clone(file))
    }

    /// Resolve a global offset to `file:line:column`.
    pub fn position(&self, pos: Pos) -> Option<Position> {
        self.file(pos).map(|f| f.position(pos))
    }

    pub fn len(&self) -> usize {
        self.inner.read().files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
