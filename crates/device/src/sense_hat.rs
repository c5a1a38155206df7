use log::info;

use crate::config::DeviceConfig;
use crate::error::DeviceError;
use crate::framebuffer::Framebuffer;
use crate::joystick::Joystick;

/// Both halves of the Sense HAT, opened together.
///
/// Dropping it closes the joystick and unmaps the framebuffer.
#[derive(Debug)]
pub struct SenseHat {
    pub joystick: Joystick,
    pub framebuffer: Framebuffer,
}

impl SenseHat {
    /// Find and open the joystick, then the framebuffer. Either one missing
    /// is an error and nothing stays open.
    pub fn open(config: &DeviceConfig) -> Result<Self, DeviceError> {
        let joystick = Joystick::discover(&config.input_prefix, &config.joystick_name)?;
        let framebuffer =
            Framebuffer::discover(&config.framebuffer_prefix, &config.framebuffer_id)?;
        info!(
            "sense hat ready: joystick {}, framebuffer {}",
            joystick.path().display(),
            framebuffer.path().display()
        );
        Ok(Self {
            joystick,
            framebuffer,
        })
    }

    /// Borrow the input and output halves at the same time.
    pub fn parts_mut(&mut self) -> (&mut Joystick, &mut Framebuffer) {
        (&mut self.joystick, &mut self.framebuffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::DeviceKind;

    #[test]
    fn open_reports_the_missing_joystick_first() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeviceConfig {
            input_prefix: format!("{}/event", dir.path().display()),
            framebuffer_prefix: format!("{}/fb", dir.path().display()),
            ..DeviceConfig::default()
        };
        let err = SenseHat::open(&config).unwrap_err();
        assert!(matches!(
            err,
            DeviceError::NotFound {
                kind: DeviceKind::Joystick,
                ..
            }
        ));
        assert!(err.to_string().contains("Raspberry Pi Sense HAT Joystick"));
    }
}
