//! Hextile Core - single-hex edge labelling geometry
//!
//! This crate computes the polygons that depict a hex tile whose six edges
//! each carry an arbitrary state:
//! - Unit hexagon geometry table (outer vertices, hubs, per-edge wedges)
//! - Labelled polygons and wedge fusion along shared seams
//! - Tile state and the grouping/merging decomposition

pub mod geometry;
pub mod polygon;
pub mod tile;

// Re-exports for convenient access
pub use geometry::{edge_segment, vertex, wedge_polygon, Edge, Point, EDGE_COUNT, N, NE, NW, S, SE, SW};
pub use polygon::Polygon;
pub use tile::{Tile, TileError};
