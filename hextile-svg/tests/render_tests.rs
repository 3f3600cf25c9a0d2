//! Integration tests for the full pipeline: tile labelling, polygon
//! decomposition, and SVG document rendering

use hextile_core::{Tile, EDGE_COUNT};
use hextile_svg::{outline_document, render_tile, save, SvgConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter("debug").try_init();
}

fn fill(label: &&str) -> String {
    match *label {
        "water" => "#3366cc".to_string(),
        "grass" => "#33aa33".to_string(),
        other => format!("url(#{})", other),
    }
}

#[test]
fn test_merged_tile_renders_one_element_per_output_polygon() {
    init_tracing();
    // water wraps around the north point: one merged polygon, grass another
    let tile = Tile::new(vec!["water", "water", "grass", "grass", "water", "water"]).unwrap();
    assert_eq!(tile.polygons().len(), 2);

    let document = render_tile(&SvgConfig::default(), &tile, fill);
    assert_eq!(document.matches("<polygon").count(), 2);
    assert!(document.contains("fill=\"#3366cc\""));
    assert!(document.contains("fill=\"#33aa33\""));
    assert!(document.starts_with("<svg version=\"1.1\""));
    assert!(document.ends_with("</svg>"));
}

#[test]
fn test_distinct_labels_render_six_elements() {
    init_tracing();
    let tile = Tile::new(vec!["a", "b", "c", "d", "e", "f"]).unwrap();
    let document = render_tile(&SvgConfig::default(), &tile, fill);
    assert_eq!(document.matches("<polygon").count(), EDGE_COUNT);
}

#[test]
fn test_uniform_tile_renders_like_the_outline() {
    init_tracing();
    let tile = Tile::uniform("water");
    let document = render_tile(&SvgConfig::default(), &tile, fill);
    assert_eq!(document.matches("<polygon").count(), 1);

    // same six outer vertices as the plain outline document
    let outline = outline_document(&SvgConfig::default());
    let points_of = |doc: &str| {
        doc.split("points=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .map(str::to_string)
    };
    assert_eq!(points_of(&document), points_of(&outline));
}

#[test]
fn test_save_writes_the_document() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tile.svg");

    let document = render_tile(&SvgConfig::default(), &Tile::uniform("water"), fill);
    save(&document, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, document);
}
