//! Hextile SVG - drawable documents for tile decompositions
//!
//! This crate is the rendering side of hextile:
//! - One filled `<polygon>` element per labelled polygon
//! - Bare hexagon outline documents
//! - Saving documents to disk

use hextile_core::geometry::UNIT_HEX_HEIGHT;
use hextile_core::{vertex, Point, Polygon, Tile, EDGE_COUNT};
use std::hash::Hash;
use std::path::Path;

/// Rendering configuration
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Viewport pixels per unit-hexagon coordinate unit
    pub scale: f64,
    /// Padding around the hexagon, in pixels
    pub margin: f64,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 100.0,
            margin: 4.0,
            stroke: "#333333".to_string(),
            stroke_width: 1.0,
        }
    }
}

impl SvgConfig {
    fn width(&self) -> f64 {
        2.0 * self.scale + 2.0 * self.margin
    }

    fn height(&self) -> f64 {
        2.0 * *UNIT_HEX_HEIGHT * self.scale + 2.0 * self.margin
    }

    /// Map unit-hexagon coordinates to viewport pixels. SVG y grows
    /// downward, so y is flipped to keep the north edge at the top.
    fn project(&self, p: Point) -> (f64, f64) {
        (
            self.margin + (p.x + 1.0) * self.scale,
            self.margin + (*UNIT_HEX_HEIGHT - p.y) * self.scale,
        )
    }

    fn points_attribute(&self, points: &[Point]) -> String {
        points
            .iter()
            .map(|&p| {
                let (x, y) = self.project(p);
                format!("{:.2},{:.2}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Render one `<svg>` document with a filled `<polygon>` element per
/// labelled polygon, fill resolved from the label
pub fn render_document<T, F>(config: &SvgConfig, polygons: &[Polygon<T>], fill: F) -> String
where
    F: Fn(&T) -> String,
{
    let mut svg = document_open(config);
    for polygon in polygons {
        svg += &format!(
            r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            config.points_attribute(&polygon.points),
            fill(&polygon.label),
            config.stroke,
            config.stroke_width,
        );
    }
    svg += "</svg>";
    svg
}

/// Decompose a tile into labelled polygons and render them
pub fn render_tile<T, F>(config: &SvgConfig, tile: &Tile<T>, fill: F) -> String
where
    T: Clone + Eq + Hash,
    F: Fn(&T) -> String,
{
    let polygons = tile.polygons();
    tracing::debug!("rendering tile as {} polygons", polygons.len());
    render_document(config, &polygons, fill)
}

/// Render the bare unit-hexagon outline
pub fn outline_document(config: &SvgConfig) -> String {
    let outline: Vec<Point> = (0..EDGE_COUNT).map(vertex).collect();
    format!(
        r#"{}<polygon points="{}" fill="none" stroke="{}" stroke-width="{}"/></svg>"#,
        document_open(config),
        config.points_attribute(&outline),
        config.stroke,
        config.stroke_width,
    )
}

/// Write a rendered document to disk
pub fn save(document: &str, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, document)?;
    tracing::debug!("wrote svg to {}", path.display());
    Ok(())
}

fn document_open(config: &SvgConfig) -> String {
    format!(
        r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">"#,
        w = config.width(),
        h = config.height(),
    )
}
