#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use looptour::{Demo, Demonstrator, TourConfig};

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("LOOPTOUR_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set LOOPTOUR_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}

/// Run a tour into memory and return the text
pub fn run_tour(config: TourConfig) -> String {
    let mut out = Vec::new();
    Demonstrator::new(config)
        .run(&mut out)
        .expect("in-memory tour succeeds");
    String::from_utf8(out).expect("tour output is UTF-8")
}

/// A header followed by its body lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub header: String,
    pub body: Vec<String>,
}

/// Split tour output on blank separator lines
pub fn split_blocks(text: &str) -> Vec<Block> {
    text.split("\n\n")
        .map(|chunk| {
            let mut lines = chunk.lines().map(str::to_owned);
            let header = lines.next().expect("block has a header");
            Block {
                header,
                body: lines.collect(),
            }
        })
        .collect()
}

/// Sort the bodies of blocks whose order is unspecified so the text compares stably
pub fn canonicalize(text: &str) -> String {
    let unordered: Vec<&str> = Demo::all()
        .filter(|d| d.is_unordered())
        .map(|d| d.header())
        .collect();

    let blocks: Vec<String> = split_blocks(text)
        .into_iter()
        .map(|mut block| {
            if unordered.contains(&block.header.as_str()) {
                block.body.sort();
            }
            let mut lines = vec![block.header];
            lines.extend(block.body);
            lines.join("\n")
        })
        .collect();
    format!("{}\n", blocks.join("\n\n"))
}
