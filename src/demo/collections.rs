//! Collection traversal: `Vec`, `HashMap`, `HashSet`, `zip`, `collect`

use std::collections::{HashMap, HashSet};
use std::io::{self, Write};

use tracing::trace;

/// Elements of the sequence walked by [`sequence_traversal`]
pub const FRUITS: [&str; 3] = ["apple", "banana", "orange"];

/// Pairs loaded into the map walked by [`map_traversal`]
pub const CAPITALS: [(&str, &str); 3] = [
    ("China", "Beijing"),
    ("Japan", "Tokyo"),
    ("France", "Paris"),
];

/// Enumerate a `Vec` in construction order
pub fn sequence_traversal<W: Write>(out: &mut W) -> io::Result<usize> {
    let fruits: Vec<&str> = FRUITS.to_vec();
    for (index, value) in fruits.iter().enumerate() {
        writeln!(out, "Index: {index}, Value: {value}")?;
    }
    Ok(fruits.len())
}

/// Walk a `HashMap`
///
/// The visiting order is whatever the hasher produces and changes between
/// runs. Callers must compare the output as a set.
pub fn map_traversal<W: Write>(out: &mut W) -> io::Result<usize> {
    let capitals: HashMap<&str, &str> = CAPITALS.into_iter().collect();
    for (country, capital) in &capitals {
        writeln!(out, "Country: {country}, Capital: {capital}")?;
    }
    Ok(capitals.len())
}

/// Walk a `HashSet` built from a list with duplicates
pub fn set_traversal<W: Write>(out: &mut W) -> io::Result<usize> {
    let unique: HashSet<u32> = [1, 3, 5, 3, 2, 1].into_iter().collect();
    trace!(distinct = unique.len(), "built set");
    for n in &unique {
        writeln!(out, "Unique number: {n}")?;
    }
    Ok(unique.len())
}

/// Square `1..=5` and collect the results before printing them
pub fn collect_squares<W: Write>(out: &mut W) -> io::Result<usize> {
    let squares: Vec<u32> = (1..=5).map(|x| x * x).collect();
    writeln!(out, "Squares: {squares:?}")?;
    Ok(1)
}

/// Walk two sequences in lockstep
pub fn zip_traversal<W: Write>(out: &mut W) -> io::Result<usize> {
    let names = ["Alice", "Bob", "Charlie"];
    let ages = [25, 30, 35];
    let mut lines = 0;
    for (name, age) in names.iter().zip(ages) {
        writeln!(out, "{name} is {age} years old")?;
        lines += 1;
    }
    Ok(lines)
}
