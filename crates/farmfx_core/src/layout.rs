//! Garden layout files
//!
//! Layouts are RON files listing the plants of a garden plot and the plot
//! size. They seed the [`SimState`](crate::SimState) garden at startup.

use serde::{Serialize, Deserialize};
use std::fs;
use std::io;
use std::path::Path;

use farmfx_math::Vec3;

use crate::garden::{Garden, Plant};

/// A plant entry in a layout file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantTemplate {
    pub name: String,
    /// Position [x, y, z] in scene units
    pub position: [f32; 3],
}

impl PlantTemplate {
    pub fn new(name: impl Into<String>, position: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// A serializable garden plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenLayout {
    /// Layout name (for display/debugging)
    pub name: String,
    /// Farmland half size; overrides the configured value when present
    #[serde(default)]
    pub box_len: Option<f32>,
    /// Plants in this plot
    pub plants: Vec<PlantTemplate>,
}

impl GardenLayout {
    /// Create an empty layout
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            box_len: None,
            plants: Vec::new(),
        }
    }

    /// A `rows` x `cols` grid of plants centered on the origin at ground level `y`
    pub fn grid(rows: usize, cols: usize, spacing: f32, y: f32) -> Self {
        let mut layout = Self::new(format!("grid {}x{}", rows, cols));
        let x0 = -(cols.saturating_sub(1) as f32) * spacing / 2.0;
        let z0 = -(rows.saturating_sub(1) as f32) * spacing / 2.0;
        for row in 0..rows {
            for col in 0..cols {
                layout.plants.push(PlantTemplate::new(
                    format!("plant {}-{}", row, col),
                    [x0 + col as f32 * spacing, y, z0 + row as f32 * spacing],
                ));
            }
        }
        layout
    }

    /// Load a layout from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LayoutLoadError> {
        let contents = fs::read_to_string(path)?;
        let layout = ron::from_str(&contents)?;
        Ok(layout)
    }

    /// Save a layout to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), LayoutSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Plant every template into a new garden
    pub fn to_garden(&self) -> Garden {
        let mut garden = Garden::new();
        for template in &self.plants {
            garden.add(Plant::new(template.name.clone(), Vec3::from(template.position)));
        }
        garden
    }
}

/// Error loading a layout
#[derive(Debug)]
pub enum LayoutLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for LayoutLoadError {
    fn from(e: io::Error) -> Self {
        LayoutLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for LayoutLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        LayoutLoadError::Parse(e)
    }
}

impl std::fmt::Display for LayoutLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutLoadError::Io(e) => write!(f, "IO error: {}", e),
            LayoutLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for LayoutLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutLoadError::Io(e) => Some(e),
            LayoutLoadError::Parse(_) => None,
        }
    }
}

/// Error saving a layout
#[derive(Debug)]
pub enum LayoutSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for LayoutSaveError {
    fn from(e: io::Error) -> Self {
        LayoutSaveError::Io(e)
    }
}

impl From<ron::Error> for LayoutSaveError {
    fn from(e: ron::Error) -> Self {
        LayoutSaveError::Serialize(e)
    }
}

impl std::fmt::Display for LayoutSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutSaveError::Io(e) => write!(f, "IO error: {}", e),
            LayoutSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for LayoutSaveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_centered() {
        let layout = GardenLayout::grid(2, 3, 50.0, 140.0);
        assert_eq!(layout.plants.len(), 6);
        assert_eq!(layout.plants[0].position, [-50.0, 140.0, -25.0]);
        assert_eq!(layout.plants[5].position, [50.0, 140.0, 25.0]);
    }

    #[test]
    fn test_empty_grid() {
        assert!(GardenLayout::grid(0, 4, 10.0, 0.0).plants.is_empty());
    }

    #[test]
    fn test_parse_ron() {
        let src = r#"
            GardenLayout(
                name: "tiny",
                box_len: Some(150.0),
                plants: [
                    PlantTemplate(name: "carrot", position: (10.0, 140.0, -20.0)),
                ],
            )
        "#;
        let layout: GardenLayout = ron::from_str(src).unwrap();
        assert_eq!(layout.box_len, Some(150.0));
        let garden = layout.to_garden();
        assert_eq!(garden.len(), 1);
        let (_, plant) = garden.iter().next().unwrap();
        assert_eq!(plant.name, "carrot");
        assert_eq!(plant.position, Vec3::new(10.0, 140.0, -20.0));
    }

    #[test]
    fn test_missing_box_len_defaults_to_none() {
        let layout: GardenLayout = ron::from_str(r#"(name: "x", plants: [])"#).unwrap();
        assert_eq!(layout.box_len, None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GardenLayout::load("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, LayoutLoadError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join("farmfx_layout_test.ron");
        let layout = GardenLayout::grid(1, 2, 30.0, 100.0);
        layout.save(&path).unwrap();
        let loaded = GardenLayout::load(&path).unwrap();
        assert_eq!(loaded, layout);
        let _ = std::fs::remove_file(&path);
    }
}
