//! Farm device on/off flags

use bitflags::bitflags;

bitflags! {
    /// Which farm devices are switched on
    ///
    /// Bit positions follow the simulation's device array: lamp, heater,
    /// watering (soil moisture), dehumidifier.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct EffectorFlags: u8 {
        /// Grow lamp (device 0)
        const LIGHT = 1 << 0;
        /// Heater (device 1)
        const TEMPERATURE = 1 << 1;
        /// Watering can (device 2)
        const SOIL_MOISTURE = 1 << 2;
        /// Dehumidifier (device 3)
        const HUMIDITY = 1 << 3;
    }
}

/// Number of devices the simulation exposes
pub const DEVICE_COUNT: usize = 4;

impl EffectorFlags {
    /// Flag for a device index, if the index names a device
    pub fn for_device(index: usize) -> Option<Self> {
        if index < DEVICE_COUNT {
            Self::from_bits(1 << index)
        } else {
            None
        }
    }

    /// Build flags from the simulation's device array
    ///
    /// Missing entries count as off; entries past the fourth are ignored.
    pub fn from_device_states(states: &[bool]) -> Self {
        states
            .iter()
            .take(DEVICE_COUNT)
            .enumerate()
            .filter(|(_, on)| **on)
            .fold(Self::empty(), |acc, (i, _)| acc | Self::from_bits_truncate(1 << i))
    }

    /// Device array view of the flags
    pub fn to_device_states(self) -> [bool; DEVICE_COUNT] {
        let mut out = [false; DEVICE_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.bits() & (1 << i) != 0;
        }
        out
    }
}
