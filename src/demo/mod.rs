//! Catalogue of loop demonstrations
//!
//! Every demonstration is a self-contained block: it builds its own data,
//! walks it with one loop construct, writes one line per step and drops
//! everything on return. Nothing is shared between blocks.

mod collections;
mod counting;
mod text;

pub use collections::{
    collect_squares, map_traversal, sequence_traversal, set_traversal, zip_traversal,
    CAPITALS, FRUITS,
};
pub use counting::{
    completion_loop, condition_loop, counted_loop, filtered_loop, infinite_loop, nested_loops,
    range_bounds, stepped_range, CONDITION_BOUND, COUNTED_BOUND, FILTERED_LAST, INFINITE_BOUND,
};
pub use text::{codepoints, text_traversal, Codepoint, SAMPLE_TEXT};

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::TourError;

/// One demonstration block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    /// `for i in 0..5`
    Counted,
    /// `while j < 3`
    Condition,
    /// `loop` with an explicit `break`
    Infinite,
    /// Enumerating a `Vec`
    Sequence,
    /// Walking a `HashMap` (unordered)
    Map,
    /// `char_indices` over a UTF-8 string
    Text,
    /// `continue` past even numbers
    Continue,
    /// `for j in 2..5`
    RangeBounds,
    /// `step_by(2)`
    SteppedRange,
    /// Collecting a loop into a `Vec`
    Collect,
    /// Loop inside a loop
    Nested,
    /// Walking a `HashSet` (unordered)
    Set,
    /// Detecting that a loop ran to completion
    Completion,
    /// `zip` over two sequences
    Zip,
}

impl Demo {
    /// The seven blocks of the default tour, in order
    pub const CORE: [Demo; 7] = [
        Demo::Counted,
        Demo::Condition,
        Demo::Infinite,
        Demo::Sequence,
        Demo::Map,
        Demo::Text,
        Demo::Continue,
    ];

    /// Blocks appended by `--extended`, in order
    pub const EXTENDED: [Demo; 7] = [
        Demo::RangeBounds,
        Demo::SteppedRange,
        Demo::Collect,
        Demo::Nested,
        Demo::Set,
        Demo::Completion,
        Demo::Zip,
    ];

    /// Every block, core first
    pub fn all() -> impl Iterator<Item = Demo> {
        Self::CORE.into_iter().chain(Self::EXTENDED)
    }

    /// Stable kebab-case name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Demo::Counted => "counted",
            Demo::Condition => "condition",
            Demo::Infinite => "infinite",
            Demo::Sequence => "sequence",
            Demo::Map => "map",
            Demo::Text => "text",
            Demo::Continue => "continue",
            Demo::RangeBounds => "range-bounds",
            Demo::SteppedRange => "stepped-range",
            Demo::Collect => "collect",
            Demo::Nested => "nested",
            Demo::Set => "set",
            Demo::Completion => "completion",
            Demo::Zip => "zip",
        }
    }

    /// Header line printed before the block
    pub fn header(self) -> &'static str {
        match self {
            Demo::Counted => "Basic counted loop:",
            Demo::Condition => "Condition-only loop:",
            Demo::Infinite => "Infinite loop with break:",
            Demo::Sequence => "Iterating a sequence:",
            Demo::Map => "Iterating a map:",
            Demo::Text => "Iterating a string:",
            Demo::Continue => "Skipping iterations with continue:",
            Demo::RangeBounds => "Range with start and end:",
            Demo::SteppedRange => "Range with a step:",
            Demo::Collect => "Building a collection from a loop:",
            Demo::Nested => "Nested loops:",
            Demo::Set => "Iterating a set:",
            Demo::Completion => "Loop with a completion check:",
            Demo::Zip => "Zipping two sequences:",
        }
    }

    /// Whether the block's line order is unspecified
    pub fn is_unordered(self) -> bool {
        matches!(self, Demo::Map | Demo::Set)
    }

    /// Write the block body (without header) and return the number of lines
    pub fn run<W: Write>(self, out: &mut W) -> io::Result<usize> {
        match self {
            Demo::Counted => counted_loop(out),
            Demo::Condition => condition_loop(out),
            Demo::Infinite => infinite_loop(out),
            Demo::Sequence => sequence_traversal(out),
            Demo::Map => map_traversal(out),
            Demo::Text => text_traversal(out),
            Demo::Continue => filtered_loop(out),
            Demo::RangeBounds => range_bounds(out),
            Demo::SteppedRange => stepped_range(out),
            Demo::Collect => collect_squares(out),
            Demo::Nested => nested_loops(out),
            Demo::Set => set_traversal(out),
            Demo::Completion => completion_loop(out),
            Demo::Zip => zip_traversal(out),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Demo::all()
            .find(|demo| demo.name() == wanted)
            .ok_or_else(|| TourError::UnknownDemo(s.to_string()))
    }
}
