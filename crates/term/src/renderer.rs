//! TerminalRenderer: writes the console view to a real terminal.
//!
//! The whole picture is a dozen short lines, so every draw is a full redraw
//! from the home position.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::core::{GameSnapshot, GameState};
use crate::engine::FrameSink;
use crate::game_view::GameView;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    view: GameView,
    snapshot: GameSnapshot,
    lines: Vec<String>,
    /// Raw mode is on and must be restored.
    entered: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            view: GameView::default(),
            snapshot: GameSnapshot::default(),
            lines: Vec::new(),
            entered: false,
        }
    }

    /// Switch the terminal to unbuffered, unechoed input and clear it.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.flush()?;
        Ok(())
    }

    /// Restore the terminal. Does nothing if it was never entered or has
    /// already been restored.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw the game from the top-left corner of the terminal.
    pub fn draw(&mut self, game: &GameState) -> Result<()> {
        game.snapshot_into(&mut self.snapshot);
        self.view.render_into(&self.snapshot, &mut self.lines);

        self.out.queue(cursor::MoveTo(0, 0))?;
        for line in &self.lines {
            self.out.queue(Print(line))?;
            self.out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
            // Raw mode does not translate '\n'.
            self.out.queue(Print("\r\n"))?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> FrameSink for TerminalRenderer<W> {
    fn present(&mut self, game: &GameState) -> Result<()> {
        self.draw(game)
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Key;

    fn output(renderer: &TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8_lossy(renderer.writer()).into_owned()
    }

    #[test]
    fn draw_writes_every_line() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        renderer.draw(&GameState::new()).unwrap();

        let text = output(&renderer);
        assert!(text.contains("----------"));
        assert!(text.contains("Tiles:"));
        assert!(text.contains("Game Over"));
        assert_eq!(text.matches("\r\n").count(), 10);
    }

    #[test]
    fn present_shows_current_state() {
        let mut game = GameState::new();
        game.step(Some(Key::Up));

        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        renderer.present(&game).unwrap();

        let text = output(&renderer);
        assert!(text.contains("|   #    | Tiles:          1"));
        assert!(!text.contains("Game Over"));
    }

    #[test]
    fn exit_without_enter_is_a_no_op() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        renderer.exit().unwrap();
        assert!(renderer.writer().is_empty());
    }
}
