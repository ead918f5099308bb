//! Garden plants and lightning targeting

use farmfx_math::Vec3;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key for a plant in the garden
    pub struct PlantKey;
}

/// Strikes closer than this scorch the plant
pub const SCORCH_RADIUS: f32 = 30.0;

/// A plant growing in the garden
#[derive(Clone, Debug, PartialEq)]
pub struct Plant {
    /// Display name
    pub name: String,
    /// Position in scene units (ground level at positive Y)
    pub position: Vec3,
    /// Number of lightning strikes this plant has received
    pub strike_count: u32,
    /// Ground distance from the most recent strike
    pub last_strike_distance: Option<f32>,
    /// Set once a close strike has burned the plant
    pub scorched: bool,
}

impl Plant {
    /// Create a healthy plant
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
            strike_count: 0,
            last_strike_distance: None,
            scorched: false,
        }
    }

    /// React to a lightning strike `distance` units away (XZ plane)
    pub fn struck_by_lightning(&mut self, distance: f32) {
        self.strike_count += 1;
        self.last_strike_distance = Some(distance);
        if distance <= SCORCH_RADIUS {
            self.scorched = true;
        }
    }
}

/// The set of plants lightning can hit
#[derive(Default)]
pub struct Garden {
    plants: SlotMap<PlantKey, Plant>,
}

impl Garden {
    /// Create an empty garden
    pub fn new() -> Self {
        Self {
            plants: SlotMap::with_key(),
        }
    }

    /// Plant something, returning its key
    pub fn add(&mut self, plant: Plant) -> PlantKey {
        self.plants.insert(plant)
    }

    /// Remove a plant
    pub fn remove(&mut self, key: PlantKey) -> Option<Plant> {
        self.plants.remove(key)
    }

    pub fn get(&self, key: PlantKey) -> Option<&Plant> {
        self.plants.get(key)
    }

    pub fn get_mut(&mut self, key: PlantKey) -> Option<&mut Plant> {
        self.plants.get_mut(key)
    }

    /// Iterate over all plants with their keys
    pub fn iter(&self) -> impl Iterator<Item = (PlantKey, &Plant)> {
        self.plants.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Nearest plant to `(x, z)` by ground distance
    ///
    /// Ties keep the plant visited first. Returns `None` for an empty garden.
    pub fn nearest_xz(&self, x: f32, z: f32) -> Option<(PlantKey, f32)> {
        let point = Vec3::new(x, 0.0, z);
        let mut best: Option<(PlantKey, f32)> = None;
        for (key, plant) in self.plants.iter() {
            let d = point.distance_xz(plant.position);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((key, d)),
            }
        }
        best
    }
}
