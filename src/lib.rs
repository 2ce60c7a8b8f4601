//! # looptour
//!
//! A guided tour of Rust's loop and iteration constructs. Each stop on the
//! tour is an independent block that builds a small value, walks it with
//! one construct and prints what it sees.
//!
//! ## Default tour
//!
//! 1. **Counted loop**: `for i in 0..5`
//! 2. **Condition-only loop**: `while j < 3`
//! 3. **Infinite loop**: `loop` left through `break` once `k >= 2`
//! 4. **Sequence**: `Vec` with `enumerate`
//! 5. **Map**: `HashMap` (unordered)
//! 6. **String**: `char_indices`, byte offsets plus `U+XXXX`
//! 7. **Continue**: odd numbers of `1..=5`
//!
//! `TourConfig::extended()` appends seven more blocks (ranges with start and
//! step, `collect`, nested loops, `HashSet`, completion checks and `zip`).
//!
//! ## Usage Example
//!
//! ```
//! use looptour::{Demonstrator, TourConfig};
//!
//! let mut out = Vec::<u8>::new();
//! let report = Demonstrator::new(TourConfig::standard()).run(&mut out)?;
//! assert_eq!(report.blocks.len(), 7);
//! # Ok::<(), looptour::TourError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod demo;

pub use demo::{Codepoint, Demo};

use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, info, trace};

/// Errors that can occur while running a tour
#[derive(Error, Debug)]
pub enum TourError {
    /// Writing to the output sink failed
    #[error("failed to write tour output: {0}")]
    Output(#[from] io::Error),

    /// A demo name did not match the catalogue
    #[error("unknown demo '{0}' (try --list)")]
    UnknownDemo(String),

    /// Nothing was selected to run
    #[error("tour selection is empty")]
    EmptySelection,
}

/// Which blocks to run, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourConfig {
    /// Blocks in execution order
    pub demos: Vec<Demo>,
}

impl TourConfig {
    /// The seven core blocks
    pub fn standard() -> Self {
        Self {
            demos: Demo::CORE.to_vec(),
        }
    }

    /// Core blocks followed by the supplementary ones
    pub fn extended() -> Self {
        Self {
            demos: Demo::all().collect(),
        }
    }

    /// An explicit selection; duplicates run twice
    pub fn only(demos: impl IntoIterator<Item = Demo>) -> Self {
        Self {
            demos: demos.into_iter().collect(),
        }
    }

    /// Reject configurations that would print nothing
    pub fn validate(&self) -> Result<(), TourError> {
        if self.demos.is_empty() {
            return Err(TourError::EmptySelection);
        }
        Ok(())
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Lines written per block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockReport {
    /// Which block ran
    pub demo: Demo,
    /// Body lines, excluding header and separator
    pub lines: usize,
}

/// Summary of a finished tour
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourReport {
    /// One entry per executed block, in order
    pub blocks: Vec<BlockReport>,
}

impl TourReport {
    /// Body lines across all blocks
    pub fn body_lines(&self) -> usize {
        self.blocks.iter().map(|b| b.lines).sum()
    }

    /// Every line written, including headers and separators
    pub fn total_lines(&self) -> usize {
        let separators = self.blocks.len().saturating_sub(1);
        self.body_lines() + self.blocks.len() + separators
    }
}

/// Runs the configured blocks against an output sink
#[derive(Debug, Clone)]
pub struct Demonstrator {
    config: TourConfig,
}

impl Demonstrator {
    /// Create a demonstrator for `config`
    pub fn new(config: TourConfig) -> Self {
        Self { config }
    }

    /// Configured blocks
    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    /// Run every block in order
    ///
    /// Each block is preceded by its header and, for all but the first, a
    /// blank line. The sink is flushed before returning.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<TourReport, TourError> {
        self.config.validate()?;

        let mut report = TourReport::default();
        for (position, &demo) in self.config.demos.iter().enumerate() {
            debug!(block = %demo, position, "starting block");
            if position > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", demo.header())?;

            let lines = demo.run(out)?;
            trace!(block = %demo, lines, "block finished");
            report.blocks.push(BlockReport { demo, lines });
        }
        out.flush()?;

        info!(
            blocks = report.blocks.len(),
            lines = report.total_lines(),
            "tour complete"
        );
        Ok(report)
    }
}
