//! Labelled boundary polygons and wedge fusion

use crate::geometry::{point_at, Point, EDGE_COUNT, WEDGE_IDS};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A renderable shape: one label plus the ordered boundary that depicts it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polygon<T> {
    pub label: T,
    pub points: Vec<Point>,
}

impl<T> Polygon<T> {
    pub fn new(label: T, points: Vec<Point>) -> Self {
        Self { label, points }
    }

    /// Enclosed area by the shoelace formula
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for (i, p) in self.points.iter().enumerate() {
            let q = self.points[(i + 1) % self.points.len()];
            twice += p.x * q.y - q.x * p.y;
        }
        twice.abs() / 2.0
    }

    /// Directed boundary segments, including the closing one
    pub fn segments(&self) -> Vec<(Point, Point)> {
        (0..self.points.len())
            .map(|i| (self.points[i], self.points[(i + 1) % self.points.len()]))
            .collect()
    }
}

fn undirected(a: u8, b: u8) -> (u8, u8) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Fuse the wedges of one circularly-contiguous run of edge indices into a
/// single polygon.
///
/// Works in point-id space so seam detection is exact: every directed
/// boundary segment of every wedge in the run is collected, segments whose
/// point pair occurs twice are interior seams and get dropped, and the
/// survivors (which all wind clockwise) chain into one closed loop.
pub(crate) fn merge_run<T: Clone>(label: &T, run: &[usize]) -> Polygon<T> {
    let mut segments: Vec<(u8, u8)> = Vec::new();
    for &edge in run {
        let ids = WEDGE_IDS[edge % EDGE_COUNT];
        for (k, &id) in ids.iter().enumerate() {
            segments.push((id, ids[(k + 1) % ids.len()]));
        }
    }

    let mut occurrences: FxHashMap<(u8, u8), u32> = FxHashMap::default();
    for &(a, b) in &segments {
        *occurrences.entry(undirected(a, b)).or_insert(0) += 1;
    }

    let mut next: FxHashMap<u8, u8> = FxHashMap::default();
    let mut start = None;
    for &(a, b) in &segments {
        if occurrences[&undirected(a, b)] == 1 {
            if start.is_none() {
                start = Some(a);
            }
            next.insert(a, b);
        }
    }

    let mut points = Vec::with_capacity(next.len());
    if let Some(first) = start {
        let mut id = first;
        loop {
            points.push(point_at(id));
            match next.get(&id) {
                Some(&succ) if succ != first => id = succ,
                _ => break,
            }
        }
    }
    Polygon::new(label.clone(), points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{vertex, wedge_polygon, N, NE, NW};

    const EPS: f64 = 1e-12;

    #[test]
    fn test_area_of_unit_square() {
        let square = Polygon::new(
            "sq",
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ],
        );
        assert!((square.area() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_degenerate_polygon_has_zero_area() {
        let line = Polygon::new(0, vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert!(line.area().abs() < EPS);
    }

    #[test]
    fn test_single_wedge_run_is_unchanged() {
        for i in 0..EDGE_COUNT {
            let merged = merge_run(&"x", &[i]);
            assert_eq!(merged.points, wedge_polygon(i));
        }
    }

    #[test]
    fn test_two_adjacent_wedges_fuse_along_their_seam() {
        let merged = merge_run(&"x", &[N, NE]);
        // quad + triangle lose one shared spoke: five boundary points
        assert_eq!(merged.points.len(), 5);
        // outer arc runs over vertices 0, 1, 2 before turning inward
        assert_eq!(merged.points[0], vertex(0));
        assert_eq!(merged.points[1], vertex(1));
        assert_eq!(merged.points[2], vertex(2));
        let separate = wedge_polygon(N).len() + wedge_polygon(NE).len();
        assert!(merged.points.len() < separate);
        let area = wedge_area(N) + wedge_area(NE);
        assert!((merged.area() - area).abs() < EPS);
    }

    #[test]
    fn test_wrapping_run_fuses_across_index_zero() {
        let merged = merge_run(&"x", &[NW, N]);
        assert_eq!(merged.points.len(), 5);
        let area = wedge_area(NW) + wedge_area(N);
        assert!((merged.area() - area).abs() < EPS);
    }

    #[test]
    fn test_wedges_tile_the_hexagon() {
        let total: f64 = (0..EDGE_COUNT).map(wedge_area).sum();
        let hexagon = 3.0 * 3.0_f64.sqrt() / 2.0;
        assert!((total - hexagon).abs() < EPS);
    }

    #[test]
    fn test_full_ring_collapses_to_hexagon_outline() {
        let merged = merge_run(&"x", &[0, 1, 2, 3, 4, 5]);
        let outline: Vec<Point> = (0..EDGE_COUNT).map(vertex).collect();
        assert_eq!(merged.points, outline);
    }

    fn wedge_area(i: usize) -> f64 {
        Polygon::new((), wedge_polygon(i)).area()
    }
}
