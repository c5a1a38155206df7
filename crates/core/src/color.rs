//! Tile color model - hue cycling for newly placed tiles
//!
//! Every spawned tile gets the next color of a fixed 31-step hue cycle.
//! Each channel follows a triangle wave over the cycle, phase shifted so that
//! the three channels peak at different hues. This is not color science; it
//! only needs to make neighbouring tiles look different on the LED matrix.

use crate::types::{Rgb565, BLUE_MAX, HUE_CYCLE, HUE_STEP, RED_MAX};

/// Hue phase offset of the red channel.
pub const RED_PHASE: u8 = 0;

/// Hue phase offset of the green channel.
pub const GREEN_PHASE: u8 = 10;

/// Hue phase offset of the blue channel.
pub const BLUE_PHASE: u8 = 21;

/// Triangle-wave channel value for `hue` shifted by `offset`.
///
/// The value is `max` at the start of the cycle, falls to zero towards the
/// middle and climbs back to `max` at the end. Results are clamped to
/// `0..=max`.
pub fn channel_from_hue(hue: u8, offset: u8, hue_max: u8, max: u8) -> u8 {
    let scale = i32::from(max / hue_max);
    let max = i32::from(max);
    let h = i32::from((u16::from(hue) + u16::from(offset)) % u16::from(hue_max));

    let value = if h < i32::from(hue_max / 2) {
        max - 2 * scale * h
    } else {
        2 * scale * h - max
    };

    value.clamp(0, max) as u8
}

/// Running hue counter, always in `0..HUE_CYCLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HueCycle {
    next: u8,
}

impl HueCycle {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// The hue the next call to [`HueCycle::next_color`] will use.
    pub fn peek(&self) -> u8 {
        self.next
    }

    /// Color for the current hue, then advance the counter.
    pub fn next_color(&mut self) -> Rgb565 {
        let color = color_for_hue(self.next);
        self.next = (self.next + HUE_STEP) % HUE_CYCLE;
        color
    }
}

/// Map a hue to a 5/6/5 color.
///
/// Green is computed on the 5-bit scale and doubled into its 6-bit range.
pub fn color_for_hue(hue: u8) -> Rgb565 {
    Rgb565::new(
        channel_from_hue(hue, RED_PHASE, HUE_CYCLE, RED_MAX),
        channel_from_hue(hue, GREEN_PHASE, HUE_CYCLE, RED_MAX) * 2,
        channel_from_hue(hue, BLUE_PHASE, HUE_CYCLE, BLUE_MAX),
    )
}
