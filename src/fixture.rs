//! Hailstone records baked into the binary.

use crate::hail::{Hailstone, ParseHailstoneError};

/// The three hailstones from the puzzle input the stone is solved against.
pub const PUZZLE_INPUT: &[&str] = &[
    "200027938836082 135313515251542 37945458137479 133 259 506",
    "285259862606823 407476720802151 448972585175416 12 -120 -241",
    "329601664688534 370686722303193 178908568819244 -133 -222 168",
];

/// The worked example of the puzzle text.
pub const EXAMPLE_INPUT: &[&str] = &[
    "19, 13, 30 @ -2,  1, -2",
    "18, 19, 22 @ -1, -1, -2",
    "20, 25, 34 @ -2, -2, -4",
    "12, 31, 28 @ -1, -2, -1",
    "20, 19, 15 @  1, -5, -3",
];

pub fn parse_all(records: &[&str]) -> Result<Vec<Hailstone>, ParseHailstoneError> {
    records.iter().map(|record| record.parse()).collect()
}
