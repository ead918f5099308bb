//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like Exit, SetWeather, etc.
//! Camera keys (arrows, PageUp/PageDown) are NOT mapped here - they go directly to OrbitController.

use farmfx_core::WeatherState;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not camera motion)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Reset camera to starting position (R key)
    ResetCamera,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Flip a simulated device on or off (1-4)
    ToggleDevice(usize),
    /// Switch the weather (C/Y/N/T/V)
    SetWeather(WeatherState),
    /// Double the simulation speed (=)
    SpeedUp,
    /// Halve the simulation speed (-)
    SlowDown,
    /// Freeze or resume the effects (P key)
    TogglePause,
}

/// Maps raw input events to semantic actions
///
/// Camera keys are NOT mapped here - they go directly to the
/// OrbitController. This mapper handles "special" keys only.
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for camera keys
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::ResetCamera),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Digit1 => Some(InputAction::ToggleDevice(0)),
            KeyCode::Digit2 => Some(InputAction::ToggleDevice(1)),
            KeyCode::Digit3 => Some(InputAction::ToggleDevice(2)),
            KeyCode::Digit4 => Some(InputAction::ToggleDevice(3)),
            KeyCode::KeyC => Some(InputAction::SetWeather(WeatherState::Clear)),
            KeyCode::KeyY => Some(InputAction::SetWeather(WeatherState::Sunny)),
            KeyCode::KeyN => Some(InputAction::SetWeather(WeatherState::Rainy)),
            KeyCode::KeyT => Some(InputAction::SetWeather(WeatherState::Storm)),
            KeyCode::KeyV => Some(InputAction::SetWeather(WeatherState::Flood)),
            KeyCode::Equal | KeyCode::NumpadAdd => Some(InputAction::SpeedUp),
            KeyCode::Minus | KeyCode::NumpadSubtract => Some(InputAction::SlowDown),
            KeyCode::KeyP => Some(InputAction::TogglePause),
            _ => None, // Camera keys handled by controller
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_camera_keys_not_mapped() {
        for key in [KeyCode::ArrowLeft, KeyCode::ArrowUp, KeyCode::PageUp, KeyCode::PageDown] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released);
        assert_eq!(action, None);
    }

    #[test]
    fn test_device_keys() {
        let keys = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4];
        for (i, key) in keys.into_iter().enumerate() {
            assert_eq!(
                InputMapper::map_keyboard(key, ElementState::Pressed),
                Some(InputAction::ToggleDevice(i))
            );
        }
    }

    #[test]
    fn test_weather_keys() {
        let expected = [
            (KeyCode::KeyC, WeatherState::Clear),
            (KeyCode::KeyY, WeatherState::Sunny),
            (KeyCode::KeyN, WeatherState::Rainy),
            (KeyCode::KeyT, WeatherState::Storm),
            (KeyCode::KeyV, WeatherState::Flood),
        ];
        for (key, weather) in expected {
            assert_eq!(
                InputMapper::map_keyboard(key, ElementState::Pressed),
                Some(InputAction::SetWeather(weather))
            );
        }
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyR, ElementState::Pressed),
            Some(InputAction::ResetCamera)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed),
            Some(InputAction::ToggleFullscreen)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Equal, ElementState::Pressed),
            Some(InputAction::SpeedUp)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Minus, ElementState::Pressed),
            Some(InputAction::SlowDown)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyP, ElementState::Pressed),
            Some(InputAction::TogglePause)
        );
    }
}
