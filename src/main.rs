//! Sense HAT game runner (default binary).
//!
//! Plays on the LED matrix with the joystick, mirrors the game on the console
//! and also accepts the arrow keys there. Enter, on either device, quits.

use anyhow::{Context, Result};
use log::info;

use sense_stetris::core::GameState;
use sense_stetris::device::{DeviceConfig, SenseHat};
use sense_stetris::engine::{Runner, TickPacer};
use sense_stetris::input::Keyboard;
use sense_stetris::term::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let config = DeviceConfig::from_env();
    let mut hat = SenseHat::open(&config).context("failed to initialize the Sense HAT")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut hat, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(hat: &mut SenseHat, term: &mut TerminalRenderer) -> Result<()> {
    let mut runner = Runner::new(GameState::new(), TickPacer::default());
    let mut keyboard = Keyboard::new();
    let (joystick, framebuffer) = hat.parts_mut();

    runner.present_all(&mut [&mut *term, &mut *framebuffer])?;
    runner.run(
        &mut [&mut *joystick, &mut keyboard],
        &mut [&mut *term, &mut *framebuffer],
    )?;

    info!("exiting after {} iterations", runner.iterations());
    Ok(())
}
