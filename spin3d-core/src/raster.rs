//! Flat-color scanline triangle fill
//!
//! A triangle is filled row by row. The x coordinate of each of its three
//! edges is linearly interpolated per scanline; the two short edges are
//! joined into a single "composite" edge running from the top vertex to the
//! bottom one, and the long edge is the "direct" edge. A single comparison at
//! mid-height decides which of the two is the left boundary.
//!
//! Rows and spans are clipped to the surface before any pixel is touched, so
//! the work per triangle is bounded by the surface size however far off
//! screen its vertices land.
//!
//! This is exact for convex screen-space triangles. If the two edges cross,
//! rows where the left bound passes the right bound are left empty.

use std::mem::swap;

use crate::color::ColorIndex;
use crate::projection::ScreenPoint;
use crate::surface::Surface;

/// Linearly interpolate `d` over the integer range `i0..=i1`.
///
/// Yields `i1 - i0 + 1` values from `d0` to `d1`, or the single value `d0`
/// when `i0 == i1`. An inverted range yields nothing.
pub fn interpolate(i0: i32, d0: f64, i1: i32, d1: f64) -> Vec<f64> {
    let mut values = Vec::new();
    interpolate_into(i0, d0, i1, d1, &mut values);
    values
}

/// Like [`interpolate`], but replaces the contents of `out` so its
/// allocation can be reused.
pub fn interpolate_into(i0: i32, d0: f64, i1: i32, d1: f64, out: &mut Vec<f64>) {
    out.clear();
    let edge = Edge::new(i0, d0, i1, d1);
    edge.extend_rows(edge.i0, edge.i1, out);
}

/// One triangle edge: `d` runs from `d0` at row `i0` to `d1` at row `i1`.
///
/// Row arithmetic is done in `i64` so saturated screen coordinates cannot
/// overflow.
#[derive(Debug, Clone, Copy)]
struct Edge {
    i0: i64,
    d0: f64,
    i1: i64,
    d1: f64,
}

impl Edge {
    fn new(i0: i32, d0: f64, i1: i32, d1: f64) -> Self {
        Self {
            i0: i64::from(i0),
            d0,
            i1: i64::from(i1),
            d1,
        }
    }

    fn between(a: ScreenPoint, b: ScreenPoint) -> Self {
        Self::new(a.y, f64::from(a.x), b.y, f64::from(b.x))
    }

    /// Value at row `i`. A zero-height edge is `d0` everywhere.
    fn at(&self, i: i64) -> f64 {
        if self.i0 == self.i1 {
            return self.d0;
        }
        // Scaling before dividing keeps both endpoints exact.
        let steps = (self.i1 - self.i0) as f64;
        self.d0 + (self.d1 - self.d0) * (i - self.i0) as f64 / steps
    }

    /// Append the values for rows `lo..=hi` that the edge spans.
    fn extend_rows(&self, lo: i64, hi: i64, out: &mut Vec<f64>) {
        let (lo, hi) = (lo.max(self.i0), hi.min(self.i1));
        if lo <= hi {
            out.extend((lo..=hi).map(|i| self.at(i)));
        }
    }
}

/// Scanline triangle filler.
///
/// Keeps its per-triangle edge buffers between calls, so steady-state
/// filling does not allocate.
#[derive(Debug, Default)]
pub struct Rasterizer {
    composite: Vec<f64>,
    direct: Vec<f64>,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the triangle `p0 p1 p2` with `color`.
    ///
    /// Returns the number of pixels written. Only rows and columns inside
    /// `surface` are visited.
    pub fn fill_triangle<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        mut p0: ScreenPoint,
        mut p1: ScreenPoint,
        mut p2: ScreenPoint,
        color: ColorIndex,
    ) -> usize {
        // Sort top to bottom
        if p1.y < p0.y {
            swap(&mut p0, &mut p1);
        }
        if p2.y < p0.y {
            swap(&mut p0, &mut p2);
        }
        if p2.y < p1.y {
            swap(&mut p1, &mut p2);
        }

        let top_mid = Edge::between(p0, p1);
        let mid_bottom = Edge::between(p1, p2);
        let top_bottom = Edge::between(p0, p2);
        // The middle vertex ends one edge and starts the other.
        let split = i64::from(p1.y);
        let composite_at = |y: i64| {
            if y < split {
                top_mid.at(y)
            } else {
                mid_bottom.at(y)
            }
        };

        let (top, bottom) = (i64::from(p0.y), i64::from(p2.y));
        let mid = top + (bottom - top + 1) / 2;
        let direct_left = direct_is_left(
            (top_bottom.at(mid), composite_at(mid)),
            (top_bottom.at(top), composite_at(top)),
        );

        let max_x = clip_extent(surface.width());
        let max_y = clip_extent(surface.height());
        let (y_lo, y_hi) = (top.max(0), bottom.min(max_y));
        if y_lo > y_hi || max_x < 0 {
            return 0;
        }

        self.composite.clear();
        self.direct.clear();
        top_mid.extend_rows(y_lo, y_hi.min(split - 1), &mut self.composite);
        mid_bottom.extend_rows(y_lo.max(split), y_hi, &mut self.composite);
        top_bottom.extend_rows(y_lo, y_hi, &mut self.direct);
        debug_assert_eq!(self.composite.len(), self.direct.len());

        let (left, right) = if direct_left {
            (&self.direct, &self.composite)
        } else {
            (&self.composite, &self.direct)
        };

        let mut written = 0;
        for (y, (&xl, &xr)) in (y_lo..=y_hi).zip(left.iter().zip(right)) {
            // Columns from x_left, truncated, up to the last integer <= x_right
            let xl = xl.trunc().max(0.0);
            let xr = xr.floor().min(max_x as f64);
            if xl > xr {
                continue;
            }
            // Both bounds lie in 0..=max_x, which fits i32.
            let (xl, xr, y) = (xl as i32, xr as i32, y as i32);
            for x in xl..=xr {
                surface.set_pixel(x, y, color);
            }
            written += (xr - xl + 1) as usize;
        }
        written
    }
}

/// Largest usable coordinate along a surface axis of `len` pixels, or -1 for
/// an empty axis.
fn clip_extent(len: u32) -> i64 {
    (i64::from(len) - 1).min(i64::from(i32::MAX))
}

/// Whether the direct edge is the left boundary.
///
/// Each sample is `(direct, composite)`. The mid-height row decides; in a
/// two-row triangle that row is the bottom vertex, where both edges meet, so
/// the top row decides instead.
fn direct_is_left(mid: (f64, f64), top: (f64, f64)) -> bool {
    let ((direct, composite), (direct_top, composite_top)) = (mid, top);
    if direct != composite {
        direct < composite
    } else {
        direct_top < composite_top
    }
}
