//! Sense HAT joystick over evdev.

use std::fs::File;
use std::io::{self, Read};
use std::mem;
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};
use std::ptr;

use log::{info, trace};
use nix::libc::input_event;
use nix::poll::{poll, PollFd, PollFlags};

use crate::discovery::{node_path, scan, DeviceKind, Probed};
use crate::error::DeviceError;
use crate::input::{key_from_event_code, DoubleInputFilter};
use crate::engine::KeySource;
use crate::types::Key;

/// How long one poll waits for a pending event, in milliseconds.
const POLL_TIMEOUT_MS: i32 = 1;

/// Longest device name read back from `EVIOCGNAME`.
const NAME_LEN: usize = 256;

const EVENT_SIZE: usize = mem::size_of::<input_event>();

nix::ioctl_read_buf!(eviocgname, b'E', 0x06, u8);

/// Name the kernel reports for an input device.
fn device_name(file: &File) -> io::Result<Vec<u8>> {
    let mut name = [0u8; NAME_LEN];
    // SAFETY: the buffer outlives the call and its length is passed along.
    unsafe { eviocgname(file.as_raw_fd(), &mut name) }?;
    Ok(name.to_vec())
}

/// Open handle to the joystick event node.
///
/// Each [`Joystick::poll_key`] drains everything that is pending and keeps
/// the last recognized key, then passes it through a [`DoubleInputFilter`].
#[derive(Debug)]
pub struct Joystick {
    file: File,
    path: PathBuf,
    filter: DoubleInputFilter,
}

impl Joystick {
    /// Scan `<prefix>0` .. `<prefix>31` for an input device named `name`.
    pub fn discover(prefix: &str, name: &str) -> Result<Self, DeviceError> {
        let (index, file) = scan(DeviceKind::Joystick, name, |i| {
            let file = File::open(node_path(prefix, i))?;
            let ident = device_name(&file)?;
            Ok(Probed {
                handle: file,
                ident,
            })
        })?;

        let path = node_path(prefix, index);
        info!("joystick opened at {}", path.display());
        Ok(Self::from_file(file, path))
    }

    /// Wrap an already opened event stream.
    pub fn from_file(file: File, path: impl Into<PathBuf>) -> Self {
        Self {
            file,
            path: path.into(),
            filter: DoubleInputFilter::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn has_pending(&self) -> bool {
        let mut fds = [PollFd::new(&self.file, PollFlags::POLLIN)];
        matches!(poll(&mut fds, POLL_TIMEOUT_MS), Ok(n) if n > 0)
    }

    fn read_event(&mut self) -> io::Result<input_event> {
        let mut buf = [0u8; EVENT_SIZE];
        self.file.read_exact(&mut buf)?;
        // SAFETY: `input_event` is plain old data and `buf` holds exactly one.
        Ok(unsafe { ptr::read_unaligned(buf.as_ptr().cast::<input_event>()) })
    }

    /// Read every pending event and return the last recognized key, before
    /// duplicate filtering.
    fn drain(&mut self) -> Option<Key> {
        let mut key = None;
        while self.has_pending() {
            match self.read_event() {
                Ok(event) => {
                    if let Some(k) = key_from_event_code(event.code) {
                        key = Some(k);
                    }
                }
                Err(err) => {
                    trace!("joystick read stopped: {err}");
                    break;
                }
            }
        }
        key
    }
}

impl KeySource for Joystick {
    fn poll_key(&mut self) -> Option<Key> {
        let key = self.drain();
        self.filter.filter(key)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Seek, SeekFrom, Write};

    use super::*;
    use crate::input::map::{KEY_DOWN, KEY_ENTER, KEY_LEFT, KEY_UP};

    fn event(code: u16, value: i32) -> [u8; EVENT_SIZE] {
        // SAFETY: all-zero bytes are a valid `input_event`.
        let mut ev: input_event = unsafe { mem::zeroed() };
        ev.type_ = 1;
        ev.code = code;
        ev.value = value;
        let mut buf = [0u8; EVENT_SIZE];
        // SAFETY: `buf` is exactly the size of one event.
        unsafe { ptr::write_unaligned(buf.as_mut_ptr().cast::<input_event>(), ev) };
        buf
    }

    fn joystick_with(events: &[[u8; EVENT_SIZE]]) -> Joystick {
        let mut file = tempfile::tempfile().unwrap();
        for ev in events {
            file.write_all(ev).unwrap();
        }
        file.seek(SeekFrom::Start(0)).unwrap();
        Joystick::from_file(file, "/dev/input/event-test")
    }

    #[test]
    fn drain_keeps_last_recognized_key() {
        let mut js = joystick_with(&[event(KEY_UP, 1), event(KEY_LEFT, 1), event(0, 0)]);
        assert_eq!(js.drain(), Some(Key::Left));
        assert_eq!(js.drain(), None);
    }

    #[test]
    fn unrecognized_codes_are_ignored() {
        let mut js = joystick_with(&[event(30, 1), event(0, 0)]);
        assert_eq!(js.drain(), None);
    }

    #[test]
    fn poll_key_suppresses_first_detection() {
        let mut js = joystick_with(&[event(KEY_DOWN, 1)]);
        assert_eq!(js.poll_key(), None);

        let mut file = js.file.try_clone().unwrap();
        let pos = file.stream_position().unwrap();
        file.write_all(&event(KEY_DOWN, 0)).unwrap();
        file.seek(SeekFrom::Start(pos)).unwrap();
        assert_eq!(js.poll_key(), Some(Key::Down));
    }

    #[test]
    fn release_events_count_as_presses() {
        let mut js = joystick_with(&[event(KEY_ENTER, 0)]);
        assert_eq!(js.drain(), Some(Key::Enter));
    }

    #[test]
    fn truncated_event_ends_the_drain() {
        let full = event(KEY_UP, 1);
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(&full).unwrap();
        file.write_all(&full[..EVENT_SIZE / 2]).unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();
        let mut js = Joystick::from_file(file, "partial");
        assert_eq!(js.drain(), Some(Key::Up));
        assert_eq!(js.path(), Path::new("partial"));
    }

    #[test]
    fn discover_fails_without_devices() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = format!("{}/event", dir.path().display());
        let err = Joystick::discover(&prefix, "Raspberry Pi Sense HAT Joystick").unwrap_err();
        assert!(matches!(
            err,
            DeviceError::NotFound {
                kind: DeviceKind::Joystick,
                ..
            }
        ));
    }
}
