//! Shared simulation state read by the effects

use crate::effectors::{EffectorFlags, DEVICE_COUNT};
use crate::garden::Garden;

/// The simulation store the effects read every frame
///
/// Effects never own this: the driver passes it in, and only lightning
/// writes back into it (through the struck plant).
pub struct SimState {
    /// Frame scale factor; 1.0 is normal speed, 0.0 freezes all motion
    pub sim_speed: f32,
    /// Half size of the farmland plot, in scene units
    pub box_len: f32,
    /// Devices currently switched on
    pub effectors: EffectorFlags,
    /// Plants lightning can strike
    pub garden: Garden,
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimState {
    pub fn new() -> Self {
        Self {
            sim_speed: 1.0,
            box_len: 200.0,
            effectors: EffectorFlags::empty(),
            garden: Garden::new(),
        }
    }

    /// Builder: set simulation speed (negative values clamp to 0)
    pub fn with_sim_speed(mut self, speed: f32) -> Self {
        self.sim_speed = speed.max(0.0);
        self
    }

    /// Builder: set the farmland half size
    pub fn with_box_len(mut self, box_len: f32) -> Self {
        self.box_len = box_len;
        self
    }

    /// Builder: replace the garden
    pub fn with_garden(mut self, garden: Garden) -> Self {
        self.garden = garden;
        self
    }

    /// Builder: set devices from the simulation's device array
    pub fn with_devices(mut self, states: &[bool]) -> Self {
        self.effectors = EffectorFlags::from_device_states(states);
        self
    }

    /// Whether device `index` is on; unknown devices read as off
    pub fn device(&self, index: usize) -> bool {
        EffectorFlags::for_device(index)
            .map(|flag| self.effectors.contains(flag))
            .unwrap_or(false)
    }

    /// Switch device `index` on or off; unknown indices are ignored
    pub fn set_device(&mut self, index: usize, on: bool) {
        if let Some(flag) = EffectorFlags::for_device(index) {
            self.effectors.set(flag, on);
        } else {
            log::warn!("Ignoring unknown device index {} (have {})", index, DEVICE_COUNT);
        }
    }

    /// Flip device `index`, returning its new state
    pub fn toggle_device(&mut self, index: usize) -> bool {
        let on = !self.device(index);
        self.set_device(index, on);
        self.device(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let sim = SimState::default();
        assert_eq!(sim.sim_speed, 1.0);
        assert!(sim.effectors.is_empty());
        assert!(sim.garden.is_empty());
    }

    #[test]
    fn test_toggle_device() {
        let mut sim = SimState::new();
        assert!(sim.toggle_device(2));
        assert!(sim.effectors.contains(EffectorFlags::SOIL_MOISTURE));
        assert!(!sim.toggle_device(2));
        assert!(sim.effectors.is_empty());
    }

    #[test]
    fn test_unknown_device_ignored() {
        let mut sim = SimState::new();
        sim.set_device(9, true);
        assert!(sim.effectors.is_empty());
        assert!(!sim.device(9));
        assert!(!sim.toggle_device(9));
    }

    #[test]
    fn test_negative_speed_clamps() {
        let sim = SimState::new().with_sim_speed(-2.0);
        assert_eq!(sim.sim_speed, 0.0);
    }

    #[test]
    fn test_with_devices() {
        let sim = SimState::new().with_devices(&[true, false, false, true]);
        assert!(sim.device(0));
        assert!(sim.device(3));
        assert!(!sim.device(1));
    }
}
