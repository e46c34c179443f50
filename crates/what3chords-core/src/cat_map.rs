//! Arnold's cat map on the unit square.
//!
//! `(x, y) -> ((2x + y) mod 1, (x + y) mod 1)`. Chaotic and area-preserving;
//! used only to scatter neighbouring grid cells. There is no inverse here.

/// A point in `[0, 1) x [0, 1)`.
pub type UnitPoint = (f64, f64);

/// One application of the map.
#[inline]
pub fn cat_step((x, y): UnitPoint) -> UnitPoint {
    ((2.0 * x + y).rem_euclid(1.0), (x + y).rem_euclid(1.0))
}

/// Apply the map `iterations` times.
///
/// The input is first reduced onto the unit torus, so the result lies in
/// the unit square even for `iterations == 0` (points already inside are
/// returned unchanged).
pub fn shuffle((x, y): UnitPoint, iterations: u32) -> UnitPoint {
    let start = (x.rem_euclid(1.0), y.rem_euclid(1.0));
    (0..iterations).fold(start, |point, _| cat_step(point))
}
