#[path = "common/mod.rs"]
mod common;
use common::{assert_snapshot, canonicalize, run_tour};
use looptour::TourConfig;

#[test]
fn standard_tour_matches_golden() {
    let actual = run_tour(TourConfig::standard());
    assert_snapshot("tour/standard.txt", &canonicalize(&actual));
}
