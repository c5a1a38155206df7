//! Sense HAT LED matrix over fbdev.
//!
//! The matrix is an 8x8 framebuffer of RGB565 pixels. It is mapped once at
//! startup; after that every frame is a plain copy into the mapping and the
//! driver picks it up from there.

use std::fs::{File, OpenOptions};
use std::io;
use std::num::NonZeroUsize;
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};
use std::ptr::NonNull;
use std::slice;

use anyhow::Result;
use log::{debug, info, warn};
use nix::sys::mman::{mmap, munmap, MapFlags, ProtFlags};

use crate::core::GameState;
use crate::discovery::{node_path, scan, DeviceKind, Probed};
use crate::engine::FrameSink;
use crate::error::DeviceError;
use crate::types::{Rgb565, GRID_CELLS};

/// Bytes mapped from the device: one `u16` per LED.
pub const FRAME_BYTES: usize = 2 * GRID_CELLS;

const FRAME_LEN: NonZeroUsize = match NonZeroUsize::new(FRAME_BYTES) {
    Some(len) => len,
    None => panic!("empty frame"),
};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FbBitfield {
    pub offset: u32,
    pub length: u32,
    pub msb_right: u32,
}

/// `struct fb_fix_screeninfo`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FbFixScreeninfo {
    pub id: [u8; 16],
    pub smem_start: std::ffi::c_ulong,
    pub smem_len: u32,
    pub type_: u32,
    pub type_aux: u32,
    pub visual: u32,
    pub xpanstep: u16,
    pub ypanstep: u16,
    pub ywrapstep: u16,
    pub line_length: u32,
    pub mmio_start: std::ffi::c_ulong,
    pub mmio_len: u32,
    pub accel: u32,
    pub capabilities: u16,
    pub reserved: [u16; 2],
}

/// `struct fb_var_screeninfo`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FbVarScreeninfo {
    pub xres: u32,
    pub yres: u32,
    pub xres_virtual: u32,
    pub yres_virtual: u32,
    pub xoffset: u32,
    pub yoffset: u32,
    pub bits_per_pixel: u32,
    pub grayscale: u32,
    pub red: FbBitfield,
    pub green: FbBitfield,
    pub blue: FbBitfield,
    pub transp: FbBitfield,
    pub nonstd: u32,
    pub activate: u32,
    pub height: u32,
    pub width: u32,
    pub accel_flags: u32,
    pub pixclock: u32,
    pub left_margin: u32,
    pub right_margin: u32,
    pub upper_margin: u32,
    pub lower_margin: u32,
    pub hsync_len: u32,
    pub vsync_len: u32,
    pub sync: u32,
    pub vmode: u32,
    pub rotate: u32,
    pub colorspace: u32,
    pub reserved: [u32; 4],
}

nix::ioctl_read_bad!(fbioget_vscreeninfo, 0x4600, FbVarScreeninfo);
nix::ioctl_read_bad!(fbioget_fscreeninfo, 0x4602, FbFixScreeninfo);

fn fix_info(file: &File) -> io::Result<FbFixScreeninfo> {
    let mut info = FbFixScreeninfo::default();
    // SAFETY: `info` has the kernel's layout and lives across the call.
    unsafe { fbioget_fscreeninfo(file.as_raw_fd(), &mut info) }?;
    Ok(info)
}

fn var_info(file: &File) -> io::Result<FbVarScreeninfo> {
    let mut info = FbVarScreeninfo::default();
    // SAFETY: as above.
    unsafe { fbioget_vscreeninfo(file.as_raw_fd(), &mut info) }?;
    Ok(info)
}

/// Shared mapping of the first [`FRAME_BYTES`] of a file. Unmapped on drop.
#[derive(Debug)]
struct PixelMap {
    ptr: NonNull<u16>,
}

impl PixelMap {
    fn new(file: &File) -> nix::Result<Self> {
        // SAFETY: a fresh shared mapping aliases no Rust memory. It stays
        // valid after `file` is closed.
        let addr = unsafe {
            mmap(
                None,
                FRAME_LEN,
                ProtFlags::PROT_READ | ProtFlags::PROT_WRITE,
                MapFlags::MAP_SHARED,
                Some(file),
                0,
            )
        }?;
        let ptr = NonNull::new(addr.cast::<u16>()).ok_or(nix::Error::EINVAL)?;
        Ok(Self { ptr })
    }

    fn pixels_mut(&mut self) -> &mut [u16] {
        // SAFETY: the mapping is page aligned, FRAME_BYTES long and only
        // reachable through `self`.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), GRID_CELLS) }
    }
}

impl Drop for PixelMap {
    fn drop(&mut self) {
        // SAFETY: `ptr` came from `mmap` with this length and is not used
        // after this point.
        if let Err(err) = unsafe { munmap(self.ptr.as_ptr().cast(), FRAME_BYTES) } {
            warn!("munmap failed: {err}");
        }
    }
}

/// Copy packed colors into `pixels` when `changed` is set.
///
/// Returns how many pixels were written.
pub fn write_pixels(pixels: &mut [u16], colors: &[Rgb565], changed: bool) -> usize {
    if !changed {
        return 0;
    }
    let mut written = 0;
    for (pixel, color) in pixels.iter_mut().zip(colors) {
        *pixel = color.pack();
        written += 1;
    }
    written
}

/// The mapped LED matrix.
#[derive(Debug)]
pub struct Framebuffer {
    map: PixelMap,
    path: PathBuf,
}

impl Framebuffer {
    /// Scan `<prefix>0` .. `<prefix>31` for a framebuffer whose driver id
    /// matches `id`, then map it.
    pub fn discover(prefix: &str, id: &str) -> Result<Self, DeviceError> {
        let (index, file) = scan(DeviceKind::Framebuffer, id, |i| {
            let file = OpenOptions::new()
                .read(true)
                .write(true)
                .open(node_path(prefix, i))?;
            let ident = fix_info(&file)?.id.to_vec();
            Ok(Probed {
                handle: file,
                ident,
            })
        })?;

        let path = node_path(prefix, index);
        match var_info(&file) {
            Ok(var) => debug!(
                "{}: {}x{} at {} bpp",
                path.display(),
                var.xres,
                var.yres,
                var.bits_per_pixel
            ),
            Err(err) => debug!("{}: no variable screen info: {err}", path.display()),
        }

        let fb = Self::map(&file, path)?;
        info!("framebuffer mapped at {}", fb.path.display());
        Ok(fb)
    }

    /// Map the first [`FRAME_BYTES`] of an opened node. `file` may be closed
    /// afterwards.
    pub fn map(file: &File, path: impl Into<PathBuf>) -> Result<Self, DeviceError> {
        let path = path.into();
        let map = PixelMap::new(file).map_err(|source| DeviceError::Map {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self { map, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write all 64 colors to the LEDs if `changed` is set.
    pub fn flush(&mut self, colors: &[Rgb565; GRID_CELLS], changed: bool) -> usize {
        write_pixels(self.map.pixels_mut(), colors, changed)
    }
}

impl FrameSink for Framebuffer {
    fn present(&mut self, game: &GameState) -> Result<()> {
        self.flush(game.playfield().colors(), true);
        Ok(())
    }
}
