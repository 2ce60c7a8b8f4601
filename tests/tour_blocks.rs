//! Per-block checks against the full default tour

#[path = "common/mod.rs"]
mod common;
use common::{run_tour, split_blocks, Block};

use std::collections::HashSet;

use looptour::demo::{CAPITALS, FRUITS, SAMPLE_TEXT};
use looptour::{Demo, TourConfig};

fn standard_blocks() -> Vec<Block> {
    let blocks = split_blocks(&run_tour(TourConfig::standard()));
    assert_eq!(blocks.len(), 7, "default tour has seven blocks");
    blocks
}

fn values_after(body: &[String], prefix: &str) -> Vec<u32> {
    body.iter()
        .map(|line| {
            line.strip_prefix(prefix)
                .unwrap_or_else(|| panic!("line {line:?} lacks prefix {prefix:?}"))
                .parse()
                .expect("numeric value")
        })
        .collect()
}

#[test]
fn headers_follow_catalogue_order() {
    let headers: Vec<String> = standard_blocks().into_iter().map(|b| b.header).collect();
    let expected: Vec<&str> = Demo::CORE.iter().map(|d| d.header()).collect();
    assert_eq!(headers, expected);
}

#[test]
fn counters_stay_within_their_bounds() {
    let blocks = standard_blocks();
    assert_eq!(values_after(&blocks[0].body, "i = "), [0, 1, 2, 3, 4]);
    assert_eq!(values_after(&blocks[1].body, "j = "), [0, 1, 2]);
    assert_eq!(values_after(&blocks[2].body, "k = "), [0, 1]);
    assert_eq!(values_after(&blocks[6].body, "Odd: "), [1, 3, 5]);
}

#[test]
fn sequence_block_lists_positions_in_order() {
    let blocks = standard_blocks();
    let expected: Vec<String> = FRUITS
        .iter()
        .enumerate()
        .map(|(i, v)| format!("Index: {i}, Value: {v}"))
        .collect();
    assert_eq!(blocks[3].body, expected);
}

#[test]
fn map_block_covers_every_pair_in_any_order() {
    let blocks = standard_blocks();
    let body = &blocks[4].body;
    assert_eq!(body.len(), CAPITALS.len());

    let seen: HashSet<(String, String)> = body
        .iter()
        .map(|line| {
            let rest = line.strip_prefix("Country: ").expect("country prefix");
            let (country, capital) = rest.split_once(", Capital: ").expect("capital field");
            (country.to_string(), capital.to_string())
        })
        .collect();
    let expected: HashSet<(String, String)> = CAPITALS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(seen, expected);
}

#[test]
fn text_block_reports_byte_offsets() {
    let blocks = standard_blocks();
    let offsets: Vec<usize> = blocks[5]
        .body
        .iter()
        .map(|line| {
            let rest = line.strip_prefix("Position: ").expect("position prefix");
            let (offset, _) = rest.split_once(',').expect("offset field");
            offset.parse().expect("numeric offset")
        })
        .collect();

    assert!(offsets.windows(2).all(|w| w[0] < w[1]), "offsets increase");
    let expected: Vec<usize> = SAMPLE_TEXT.char_indices().map(|(i, _)| i).collect();
    assert_eq!(offsets, expected);
    // Multi-byte characters push offsets past the codepoint ordinal.
    assert_ne!(offsets, (0..offsets.len()).collect::<Vec<_>>());
}

#[test]
fn extended_tour_appends_supplementary_blocks() {
    let blocks = split_blocks(&run_tour(TourConfig::extended()));
    assert_eq!(blocks.len(), 14);

    let headers: Vec<&str> = blocks[7..].iter().map(|b| b.header.as_str()).collect();
    let expected: Vec<&str> = Demo::EXTENDED.iter().map(|d| d.header()).collect();
    assert_eq!(headers, expected);

    let zip = &blocks[13].body;
    assert_eq!(zip[2], "Charlie is 35 years old");
}
