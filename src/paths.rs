//! Crossings of hailstone paths when the z axis is ignored.

use crate::hail::Hailstone;
use itertools::Itertools;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use std::ops::RangeInclusive;

/// Test area of the puzzle on both x and y.
pub const PUZZLE_AREA: RangeInclusive<i64> = 200_000_000_000_000..=400_000_000_000_000;

/// Where the paths of `a` and `b` cross on the xy plane, if they cross at or after t = 0 for
/// both. The hailstones do not need to be there at the same time.
pub fn future_crossing(a: &Hailstone, b: &Hailstone) -> Option<(BigRational, BigRational)> {
    let big = |v: i64| BigInt::from(v);

    let (pax, pay) = (big(a.position.x), big(a.position.y));
    let (vax, vay) = (big(a.velocity.x), big(a.velocity.y));
    let (dx, dy) = (big(b.position.x) - &pax, big(b.position.y) - &pay);
    let (vbx, vby) = (big(b.velocity.x), big(b.velocity.y));

    let det = &vax * &vby - &vay * &vbx;
    if det.is_zero() {
        // parallel, either never meeting or the same line which the puzzle input does not have
        return None;
    }

    let ta = BigRational::new(&dx * &vby - &dy * &vbx, det.clone());
    let tb = BigRational::new(&dx * &vay - &dy * &vax, det);

    if ta.is_negative() || tb.is_negative() {
        return None;
    }

    let x = BigRational::from_integer(pax) + BigRational::from_integer(vax) * &ta;
    let y = BigRational::from_integer(pay) + BigRational::from_integer(vay) * &ta;
    Some((x, y))
}

/// Number of unordered pairs whose future paths cross inside `area` on both x and y.
pub fn crossings_within(hailstones: &[Hailstone], area: RangeInclusive<i64>) -> usize {
    let lo = BigRational::from_integer((*area.start()).into());
    let hi = BigRational::from_integer((*area.end()).into());
    let inside = |v: &BigRational| &lo <= v && v <= &hi;

    hailstones
        .iter()
        .tuple_combinations()
        .filter_map(|(a, b)| {
            let crossing = future_crossing(a, b);
            tracing::trace!(%a, %b, ?crossing, "paths");
            crossing
        })
        .filter(|(x, y)| inside(x) && inside(y))
        .count()
}
