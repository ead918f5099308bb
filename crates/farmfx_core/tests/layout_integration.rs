//! Integration tests for garden layouts on disk
//!
//! These tests verify the shipped layout and the save/load cycle feed a
//! garden lightning can target.

use std::path::PathBuf;

use farmfx_core::{FrameContext, GardenLayout, LayoutLoadError, SimState};

fn shipped_layout_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../scenes/garden.ron")
}

#[test]
fn test_shipped_layout_loads() {
    let layout = GardenLayout::load(shipped_layout_path()).expect("Shipped layout should parse");
    assert_eq!(layout.name, "Kitchen Garden");
    assert_eq!(layout.box_len, Some(200.0));
    assert_eq!(layout.plants.len(), 12);

    // Plants sit on the ground plane of the default canvas
    let ground = FrameContext::new(1280.0, 720.0).ground_y();
    for plant in &layout.plants {
        assert_eq!(plant.position[1], ground, "{} is off the ground", plant.name);
    }
}

#[test]
fn test_shipped_layout_plants_inside_plot() {
    let layout = GardenLayout::load(shipped_layout_path()).expect("Shipped layout should parse");
    let box_len = layout.box_len.unwrap_or(200.0);
    for plant in &layout.plants {
        assert!(plant.position[0].abs() <= box_len);
        assert!(plant.position[2].abs() <= box_len);
    }
}

#[test]
fn test_save_then_load_into_sim() {
    let path = std::env::temp_dir().join(format!("farmfx_layout_{}.ron", std::process::id()));
    let mut layout = GardenLayout::grid(2, 3, 50.0, 144.0);
    layout.name = "Saved Plot".to_string();
    layout.save(&path).expect("Layout should save");

    let loaded = GardenLayout::load(&path).expect("Saved layout should load");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.name, "Saved Plot");
    let sim = SimState::new().with_garden(loaded.to_garden());
    assert_eq!(sim.garden.len(), 6);

    // Nearest plant to the origin of a centered 2x3 grid is in the middle column
    let (key, distance) = sim.garden.nearest_xz(0.0, 0.0).expect("Garden is not empty");
    let plant = sim.garden.get(key).expect("Key came from this garden");
    assert_eq!(plant.position.x, 0.0);
    assert_eq!(distance, 25.0);
}

#[test]
fn test_missing_layout_is_io_error() {
    let result = GardenLayout::load("no/such/layout.ron");
    assert!(matches!(result, Err(LayoutLoadError::Io(_))));
}

#[test]
fn test_bad_layout_is_parse_error() {
    let path = std::env::temp_dir().join(format!("farmfx_bad_{}.ron", std::process::id()));
    std::fs::write(&path, "GardenLayout(name: ").expect("Temp file should write");
    let result = GardenLayout::load(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(result, Err(LayoutLoadError::Parse(_))));
}
