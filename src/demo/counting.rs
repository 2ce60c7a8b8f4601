//! Counter-driven loops: `for` over ranges, `while`, `loop`/`break`, `continue`

use std::io::{self, Write};

/// Exclusive upper bound of the counted loop
pub const COUNTED_BOUND: u32 = 5;

/// Threshold of the condition-only loop
pub const CONDITION_BOUND: u32 = 3;

/// Counter value at which the infinite loop breaks
pub const INFINITE_BOUND: u32 = 2;

/// Inclusive upper bound of the parity-filtered loop
pub const FILTERED_LAST: u32 = 5;

/// `for i in 0..5`
pub fn counted_loop<W: Write>(out: &mut W) -> io::Result<usize> {
    count_up(out, COUNTED_BOUND)
}

pub(crate) fn count_up<W: Write>(out: &mut W, bound: u32) -> io::Result<usize> {
    let mut lines = 0;
    for i in 0..bound {
        writeln!(out, "i = {i}")?;
        lines += 1;
    }
    Ok(lines)
}

/// `while j < 3`, with the counter advanced by hand
pub fn condition_loop<W: Write>(out: &mut W) -> io::Result<usize> {
    count_while(out, CONDITION_BOUND)
}

pub(crate) fn count_while<W: Write>(out: &mut W, bound: u32) -> io::Result<usize> {
    let mut j = 0;
    while j < bound {
        writeln!(out, "j = {j}")?;
        j += 1;
    }
    Ok(j as usize)
}

/// Unconditional `loop`; the exit check runs after the increment
pub fn infinite_loop<W: Write>(out: &mut W) -> io::Result<usize> {
    count_until_break(out, INFINITE_BOUND)
}

pub(crate) fn count_until_break<W: Write>(out: &mut W, bound: u32) -> io::Result<usize> {
    let mut k = 0;
    loop {
        writeln!(out, "k = {k}")?;
        k += 1;
        if k >= bound {
            break;
        }
    }
    Ok(k as usize)
}

/// `for num in 1..=5`, skipping even numbers with `continue`
pub fn filtered_loop<W: Write>(out: &mut W) -> io::Result<usize> {
    odd_numbers_through(out, FILTERED_LAST)
}

pub(crate) fn odd_numbers_through<W: Write>(out: &mut W, last: u32) -> io::Result<usize> {
    let mut lines = 0;
    for num in 1..=last {
        if num % 2 == 0 {
            continue;
        }
        writeln!(out, "Odd: {num}")?;
        lines += 1;
    }
    Ok(lines)
}

/// `for j in 2..5`
pub fn range_bounds<W: Write>(out: &mut W) -> io::Result<usize> {
    let mut lines = 0;
    for j in 2..5 {
        writeln!(out, "j = {j}")?;
        lines += 1;
    }
    Ok(lines)
}

/// `(0..10).step_by(2)`
pub fn stepped_range<W: Write>(out: &mut W) -> io::Result<usize> {
    let mut lines = 0;
    for k in (0..10).step_by(2) {
        writeln!(out, "k = {k}")?;
        lines += 1;
    }
    Ok(lines)
}

/// Multiplication table for 1..4, with a rule after each row
pub fn nested_loops<W: Write>(out: &mut W) -> io::Result<usize> {
    let mut lines = 0;
    for i in 1..4 {
        for j in 1..4 {
            writeln!(out, "{i} * {j} = {}", i * j)?;
            lines += 1;
        }
        writeln!(out, "---")?;
        lines += 1;
    }
    Ok(lines)
}

/// A `for` loop whose completion is reported only if it never hit `break`
pub fn completion_loop<W: Write>(out: &mut W) -> io::Result<usize> {
    run_to_completion(out, None)
}

/// Walk `0..3`, breaking out early when `stop_at` is reached
///
/// The completion line is written only when the loop ran through every
/// value. [`completion_loop`] passes `None`, so the tour always shows the
/// normal exit; `Some(x)` takes the `break` path instead.
pub(crate) fn run_to_completion<W: Write>(
    out: &mut W,
    stop_at: Option<u32>,
) -> io::Result<usize> {
    let mut lines = 0;
    let finished = 'walk: {
        for x in 0..3 {
            if Some(x) == stop_at {
                break 'walk false;
            }
            writeln!(out, "x = {x}")?;
            lines += 1;
        }
        true
    };
    if finished {
        writeln!(out, "Loop finished normally")?;
        lines += 1;
    }
    Ok(lines)
}
