//! Sense HAT device layer.
//!
//! Finds the joystick among `/dev/input/event*` and the LED matrix among
//! `/dev/fb*` by name, then exposes them as a [`engine::KeySource`] and a
//! [`engine::FrameSink`] for the main loop.
//!
//! Device names are compared as prefixes: comparison stops at the end of the
//! shorter name, so a configured "RPi-Sense" also finds "RPi-Sense FB".

pub mod config;
pub mod discovery;
pub mod error;
pub mod framebuffer;
pub mod joystick;
pub mod sense_hat;

pub use sense_stetris_core as core;
pub use sense_stetris_engine as engine;
pub use sense_stetris_input as input;
pub use sense_stetris_types as types;

pub use config::DeviceConfig;
pub use discovery::{names_match, scan, DeviceKind, MAX_DEVICE_NODES};
pub use error::DeviceError;
pub use framebuffer::{write_pixels, Framebuffer, FRAME_BYTES};
pub use joystick::Joystick;
pub use sense_hat::SenseHat;
