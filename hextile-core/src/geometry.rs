//! Unit hexagon geometry: outer vertices, internal hubs, and per-edge wedges
//!
//! Vertex and edge labelling (vertex 0 at top-left, proceeding clockwise):
//!
//! ```text
//!             0 1             0
//! Vertices:  5 * 2   Edges: 5   1
//!             4 3           4   2
//!                             3
//! ```

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Number of edges on a tile
pub const EDGE_COUNT: usize = 6;

/// Edge direction indices
/// Index: 0=N, 1=NE, 2=SE, 3=S, 4=SW, 5=NW
pub const N: usize = 0;
pub const NE: usize = 1;
pub const SE: usize = 2;
pub const S: usize = 3;
pub const SW: usize = 4;
pub const NW: usize = 5;

/// 2D point in unit-hexagon coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Directed segment between two points
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub a: Point,
    pub b: Point,
}

impl Edge {
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f64 {
        let dx = self.b.x - self.a.x;
        let dy = self.b.y - self.a.y;
        dx.hypot(dy)
    }
}

lazy_static! {
    /// Half-height of the unit hexagon (distance from center to a flat edge)
    pub static ref UNIT_HEX_HEIGHT: f64 = 3.0_f64.sqrt() / 2.0;

    /// Outer vertices of a hexagon inscribed in the unit circle, ordered so
    /// that vertices 0 and 1 bound the north edge
    pub static ref VERTICES: [Point; EDGE_COUNT] = {
        let mut vertices = [Point::new(0.0, 0.0); EDGE_COUNT];
        for (i, v) in vertices.iter_mut().enumerate() {
            let angle = (i + 4) as f64 * PI / 3.0;
            *v = Point::new(angle.cos(), -angle.sin());
        }
        vertices
    };

    /// The two internal hub points the wedges fan out from, left then right
    pub static ref INTERNAL_VERTICES: [Point; 2] = {
        let h = *UNIT_HEX_HEIGHT;
        [Point::new(-h / 4.0, 0.0), Point::new(h / 4.0, 0.0)]
    };
}

/// Point ids used by the wedge tables: 0..5 are outer vertices, 6 and 7 the
/// left and right hubs
pub(crate) const HUB_LEFT: u8 = 6;
pub(crate) const HUB_RIGHT: u8 = 7;

/// Wedge boundaries in point-id form, one per edge direction, wound
/// clockwise. N and S are quads touching both hubs; the four diagonal
/// wedges are triangles touching one hub, so that wedges at adjacent edge
/// indices always share exactly one hex vertex and one hub.
pub(crate) const WEDGE_IDS: [&[u8]; EDGE_COUNT] = [
    &[0, 1, HUB_RIGHT, HUB_LEFT], // N
    &[1, 2, HUB_RIGHT],           // NE
    &[2, 3, HUB_RIGHT],           // SE
    &[3, 4, HUB_LEFT, HUB_RIGHT], // S
    &[4, 5, HUB_LEFT],            // SW
    &[5, 0, HUB_LEFT],            // NW
];

/// Resolve a wedge-table point id to its coordinates
pub(crate) fn point_at(id: u8) -> Point {
    match id {
        HUB_LEFT => INTERNAL_VERTICES[0],
        HUB_RIGHT => INTERNAL_VERTICES[1],
        i => VERTICES[i as usize % EDGE_COUNT],
    }
}

/// Outer vertex `i` of the unit hexagon
pub fn vertex(i: usize) -> Point {
    VERTICES[i % EDGE_COUNT]
}

/// The hexagon edge from vertex `i` to vertex `(i + 1) % 6`
pub fn edge_segment(i: usize) -> Edge {
    Edge::new(vertex(i), vertex(i + 1))
}

/// Boundary of the wedge covering edge `i`, from the edge endpoints in to
/// the hub(s) near the center
pub fn wedge_polygon(i: usize) -> Vec<Point> {
    WEDGE_IDS[i % EDGE_COUNT].iter().map(|&id| point_at(id)).collect()
}
