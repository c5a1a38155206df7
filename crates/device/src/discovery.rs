//! Bounded device node scanning.
//!
//! Both the joystick and the framebuffer are found the same way: try node 0,
//! 1, 2 ... up to [`MAX_DEVICE_NODES`], ask each one for its identification
//! string, and take the first that matches. Nodes that cannot be opened or
//! queried are skipped. Running out of nodes is a [`DeviceError::NotFound`].

use std::fmt;
use std::io;
use std::path::PathBuf;

use log::{debug, info};

use crate::error::DeviceError;

/// Number of device nodes tried per device kind.
pub const MAX_DEVICE_NODES: u32 = 32;

/// Which device a scan is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Joystick,
    Framebuffer,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Joystick => f.write_str("joystick"),
            DeviceKind::Framebuffer => f.write_str("framebuffer"),
        }
    }
}

/// An opened candidate node and the identification string it reported.
#[derive(Debug)]
pub struct Probed<H> {
    pub handle: H,
    pub ident: Vec<u8>,
}

/// Path of candidate `index`, e.g. `/dev/fb` + `1`.
pub fn node_path(prefix: &str, index: u32) -> PathBuf {
    PathBuf::from(format!("{prefix}{index}"))
}

/// The bytes before the first NUL, or all of them.
pub fn trim_nul(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    &bytes[..end]
}

/// Compare two identification strings up to the end of the shorter one.
///
/// Comparison stops at the first NUL or the end of either side, so this is a
/// prefix match in both directions: "RPi-Sense" matches "RPi-Sense FB" and the
/// other way round. An empty string matches anything.
pub fn names_match(probed: &[u8], wanted: &[u8]) -> bool {
    probed
        .iter()
        .zip(wanted)
        .take_while(|&(&a, &b)| a != 0 && b != 0)
        .all(|(a, b)| a == b)
}

/// Probe candidates `0..MAX_DEVICE_NODES` in order and return the first whose
/// identification matches `wanted`, together with its index.
///
/// Handles of candidates that do not match are dropped, closing them.
pub fn scan<H>(
    kind: DeviceKind,
    wanted: &str,
    mut probe: impl FnMut(u32) -> io::Result<Probed<H>>,
) -> Result<(u32, H), DeviceError> {
    for index in 0..MAX_DEVICE_NODES {
        let probed = match probe(index) {
            Ok(probed) => probed,
            Err(err) => {
                debug!("{kind} candidate {index} skipped: {err}");
                continue;
            }
        };

        let ident = trim_nul(&probed.ident);
        debug!(
            "{kind} candidate {index}: {:?}",
            String::from_utf8_lossy(ident)
        );
        if names_match(ident, wanted.as_bytes()) {
            info!(
                "{kind} found at candidate {index}: {:?}",
                String::from_utf8_lossy(ident)
            );
            return Ok((index, probed.handle));
        }
    }

    Err(DeviceError::NotFound {
        kind,
        wanted: wanted.to_string(),
        probed: MAX_DEVICE_NODES,
    })
}
