//! Screen: flushes frames to a real terminal.
//!
//! Owns terminal setup/teardown (raw mode, alternate screen, hidden cursor,
//! mouse capture) and redraws only the spans of each row that changed since
//! the previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Frame, Glyph, Rgb};

pub struct Screen {
    stdout: io::Stdout,
    last: Option<Frame>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.queue(EnableMouseCapture)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(DisableMouseCapture)?;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to redraw everything.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush a frame to the terminal, diffing against the previous one.
    pub fn present(&mut self, frame: &Frame) -> Result<()> {
        let full = match &self.last {
            Some(prev) => prev.width() != frame.width() || prev.height() != frame.height(),
            None => true,
        };

        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut style: Option<(Rgb, Rgb, bool)> = None;
        for y in 0..frame.height() {
            let mut x = 0;
            while x < frame.width() {
                let next = frame.get(x, y).unwrap_or_default();
                let unchanged = !full
                    && self
                        .last
                        .as_ref()
                        .and_then(|prev| prev.get(x, y))
                        .map(|prev| prev == next)
                        .unwrap_or(false);
                if unchanged {
                    x += 1;
                    continue;
                }

                // Start of a dirty span: move once, then print until clean.
                self.stdout.queue(cursor::MoveTo(x, y))?;
                while x < frame.width() {
                    let glyph = frame.get(x, y).unwrap_or_default();
                    let clean = !full
                        && self
                            .last
                            .as_ref()
                            .and_then(|prev| prev.get(x, y))
                            .map(|prev| prev == glyph)
                            .unwrap_or(false);
                    if clean {
                        break;
                    }
                    self.emit(glyph, &mut style)?;
                    x += 1;
                }
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        match &mut self.last {
            Some(prev) => prev.clone_from(frame),
            None => self.last = Some(frame.clone()),
        }
        Ok(())
    }

    fn emit(&mut self, glyph: Glyph, style: &mut Option<(Rgb, Rgb, bool)>) -> Result<()> {
        let wanted = (glyph.fg, glyph.bg, glyph.bold);
        if *style != Some(wanted) {
            self.stdout.queue(SetAttribute(Attribute::Reset))?;
            self.stdout.queue(SetForegroundColor(to_color(glyph.fg)))?;
            self.stdout.queue(SetBackgroundColor(to_color(glyph.bg)))?;
            if glyph.bold {
                self.stdout.queue(SetAttribute(Attribute::Bold))?;
            }
            *style = Some(wanted);
        }
        self.stdout.queue(Print(glyph.ch))?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(
            to_color(rgb),
            Color::Rgb {
                r: 10,
                g: 20,
                b: 30
            }
        );
    }

    // Terminal I/O itself is not unit-testable; building frames and screens
    // without entering the terminal must at least not panic.
    #[test]
    fn test_screen_construction_and_invalidate() {
        let mut screen = Screen::new();
        screen.invalidate();
        let frame = Frame::new(3, 2);
        assert_eq!(frame.get(0, 0), Some(Glyph::default()));
    }
}
