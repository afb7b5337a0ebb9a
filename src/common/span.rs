use derive_more::{Constructor, Display};
use getset::CopyGetters;

/// Half-open byte-offset range `[start, end)` into the source buffer.
#[derive(Constructor, CopyGetters, Display, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[getset(get_copy = "pub")]
#[display("[{start}, {end})")]
pub struct Span {
    start: usize,
    end: usize,
}
impl Span {
    pub fn slice<'a>(&self, src: &'a [u8]) -> &'a [u8] {
        &src[self.start..self.end]
    }
}

/// 1-based.
#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
#[display("{line}:{col}")]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

/// Maps byte offsets onto line/column positions, for diagnostics only.
/// Columns count bytes, not chars.
#[derive(Debug)]
pub struct LineIndex {
    /// Byte offset at which each line begins. The first entry is always `0`.
    line_starts: Vec<usize>,
}
impl LineIndex {
    pub fn new(src: &[u8]) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                src.iter()
                    .enumerate()
                    .filter(|(_, b)| **b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect();
        Self { line_starts }
    }

    pub fn line_col(&self, offset: usize) -> LineCol {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        LineCol {
            line: line_idx + 1,
            col: offset - self.line_starts[line_idx] + 1,
        }
    }
}
