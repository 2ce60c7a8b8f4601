//! Codepoint traversal over UTF-8 text
//!
//! Rust strings are UTF-8, so a character's position in the string is a
//! byte offset. `char_indices` yields exactly that: for `"你好"` the second
//! character starts at byte 3, not at index 1.

use std::fmt;
use std::io::{self, Write};

/// Text walked by [`text_traversal`]; mixes 3-byte CJK with ASCII
pub const SAMPLE_TEXT: &str = "你好, 世界";

/// A character together with the byte offset where it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codepoint {
    /// Offset of the first UTF-8 byte
    pub offset: usize,
    /// The scalar value
    pub ch: char,
}

impl Codepoint {
    /// Numeric scalar value
    pub fn scalar(&self) -> u32 {
        u32::from(self.ch)
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position: {}, Character: {} (Unicode: U+{:04X})",
            self.offset,
            self.ch,
            self.scalar()
        )
    }
}

/// Iterate the codepoints of `text` with their byte offsets
pub fn codepoints(text: &str) -> impl Iterator<Item = Codepoint> + '_ {
    text.char_indices().map(|(offset, ch)| Codepoint { offset, ch })
}

/// One line per codepoint of [`SAMPLE_TEXT`]
pub fn text_traversal<W: Write>(out: &mut W) -> io::Result<usize> {
    let mut lines = 0;
    for codepoint in codepoints(SAMPLE_TEXT) {
        writeln!(out, "{codepoint}")?;
        lines += 1;
    }
    Ok(lines)
}
