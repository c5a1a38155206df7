//! Device identity configuration.
//!
//! Defaults match the Sense HAT on Raspberry Pi OS. Each value can be
//! overridden from the environment, which helps with other boards and with
//! emulated devices:
//!
//! - `STETRIS_JOYSTICK_NAME`: input device name to look for
//! - `STETRIS_FB_ID`: framebuffer driver id to look for
//! - `STETRIS_INPUT_PREFIX`: input node path without the number
//! - `STETRIS_FB_PREFIX`: framebuffer node path without the number

use std::env;

pub const DEFAULT_JOYSTICK_NAME: &str = "Raspberry Pi Sense HAT Joystick";
pub const DEFAULT_FRAMEBUFFER_ID: &str = "RPi-Sense FB";
pub const DEFAULT_INPUT_PREFIX: &str = "/dev/input/event";
pub const DEFAULT_FRAMEBUFFER_PREFIX: &str = "/dev/fb";

/// Which device nodes to scan and what to match them against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    pub joystick_name: String,
    pub framebuffer_id: String,
    pub input_prefix: String,
    pub framebuffer_prefix: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            joystick_name: DEFAULT_JOYSTICK_NAME.to_string(),
            framebuffer_id: DEFAULT_FRAMEBUFFER_ID.to_string(),
            input_prefix: DEFAULT_INPUT_PREFIX.to_string(),
            framebuffer_prefix: DEFAULT_FRAMEBUFFER_PREFIX.to_string(),
        }
    }
}

impl DeviceConfig {
    /// Create from environment variables, falling back to the defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create from any variable lookup. Unset or blank values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str, default: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            joystick_name: get("STETRIS_JOYSTICK_NAME", DEFAULT_JOYSTICK_NAME),
            framebuffer_id: get("STETRIS_FB_ID", DEFAULT_FRAMEBUFFER_ID),
            input_prefix: get("STETRIS_INPUT_PREFIX", DEFAULT_INPUT_PREFIX),
            framebuffer_prefix: get("STETRIS_FB_PREFIX", DEFAULT_FRAMEBUFFER_PREFIX),
        }
    }
}
