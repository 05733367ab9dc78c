//! Terminal rendering of narration events with a typewriter effect.

use std::io::{self, IsTerminal, Stdout, Write};
use std::thread;
use std::time::Duration;

use combat::{Delivery, EventSink, GameEvent, Tone};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::config::Pacing;

/// Writes events to a terminal, one character at a time
pub struct TerminalNarrator<W: Write> {
    out: W,
    pacing: Pacing,
    color: bool,
}

impl TerminalNarrator<Stdout> {
    /// Narrator on stdout, coloured when stdout is a terminal
    pub fn stdout(pacing: Pacing) -> Self {
        let out = io::stdout();
        let color = out.is_terminal();
        Self { out, pacing, color }
    }
}

impl<W: Write> TerminalNarrator<W> {
    pub fn new(out: W, pacing: Pacing) -> Self {
        Self {
            out,
            pacing,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        let text = event.to_string();
        let color = self.color.then(|| tone_color(event.tone())).flatten();

        if let Some(color) = color {
            queue!(self.out, SetForegroundColor(color))?;
        }
        match event.delivery() {
            Delivery::Typed(pause) => {
                self.type_out(&text)?;
                self.finish_line(color.is_some())?;
                self.sleep(self.pacing.pause(pause));
            }
            Delivery::Plain => {
                queue!(self.out, Print(&text))?;
                self.finish_line(color.is_some())?;
            }
            Delivery::Inline => {
                queue!(self.out, Print(&text))?;
                if color.is_some() {
                    queue!(self.out, ResetColor)?;
                }
                self.out.flush()?;
            }
        }
        Ok(())
    }

    fn type_out(&mut self, text: &str) -> io::Result<()> {
        if self.pacing.typing.is_zero() {
            queue!(self.out, Print(text))?;
            return self.out.flush();
        }
        for ch in text.chars() {
            queue!(self.out, Print(ch))?;
            self.out.flush()?;
            thread::sleep(self.pacing.typing);
        }
        Ok(())
    }

    fn finish_line(&mut self, reset: bool) -> io::Result<()> {
        if reset {
            queue!(self.out, ResetColor)?;
        }
        queue!(self.out, Print('\n'))?;
        self.out.flush()
    }

    fn sleep(&self, pause: Duration) {
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }
}

impl<W: Write> EventSink for TerminalNarrator<W> {
    fn emit(&mut self, event: GameEvent) {
        if let Err(err) = self.render(&event) {
            log::warn!("failed to write narration: {}", err);
        }
    }
}

fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Normal => None,
        Tone::Good => Some(Color::Green),
        Tone::Bad => Some(Color::Red),
        Tone::Reward => Some(Color::Yellow),
        Tone::Warning => Some(Color::DarkYellow),
    }
}
