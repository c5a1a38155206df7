use thiserror::Error;

use crate::discovery::DeviceKind;

/// Startup failures of the device layer. All of them are fatal.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("no {kind} matching {wanted:?} among {probed} device nodes")]
    NotFound {
        kind: DeviceKind,
        wanted: String,
        probed: u32,
    },

    #[error("failed to map framebuffer {path}")]
    Map {
        path: String,
        #[source]
        source: nix::Error,
    },
}
