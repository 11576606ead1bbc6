//! The keyboard as a button register.
//!
//! | key                 | bit    |
//! |---------------------|--------|
//! | Esc, q, Ctrl+C      | KEY0   |
//! | Space, Left, a      | KEY1   |
//! | Enter, Right, d     | KEY2   |
//! | x                   | KEY3   |
//! | 0–9                 | toggle SW0–SW9 |

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

use crate::input::{ButtonRegister, Buttons};

pub fn key_button(key: &KeyEvent) -> Option<Buttons> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Buttons::KEY0);
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Buttons::KEY0),
        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Char('a') => Some(Buttons::KEY1),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('d') => Some(Buttons::KEY2),
        KeyCode::Char('x') => Some(Buttons::KEY3),
        _ => None,
    }
}

fn key_switch(key: &KeyEvent) -> Option<Buttons> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            c.to_digit(10).map(Buttons::switch)
        }
        _ => None,
    }
}

/// Turns key events into a register value.
///
/// A press is latched until the next read so that a tap shorter than a
/// tick is never lost. Where the terminal reports releases the key also
/// stays held until its release arrives; elsewhere every press reads as a
/// one-read tap. Switches are levels and flip on each press of their digit.
#[derive(Clone, Debug, Default)]
pub struct Keyboard {
    latched: Buttons,
    held: Buttons,
    switches: Buttons,
    reports_releases: bool,
}

impl Keyboard {
    pub fn new(reports_releases: bool) -> Self {
        Self {
            reports_releases,
            ..Self::default()
        }
    }

    pub fn handle(&mut self, ev: &Event) {
        let Event::Key(key) = ev else {
            return;
        };
        match key.kind {
            KeyEventKind::Press => {
                if let Some(b) = key_button(key) {
                    self.latched |= b;
                    if self.reports_releases {
                        self.held |= b;
                    }
                } else if let Some(sw) = key_switch(key) {
                    self.switches.toggle(sw);
                    trace!(switches = ?self.switches, "switch toggled");
                }
            }
            KeyEventKind::Release => {
                if let Some(b) = key_button(key) {
                    self.held.remove(b);
                }
            }
            KeyEventKind::Repeat => {}
        }
    }

    /// Current register value; clears the latched presses.
    pub fn snapshot(&mut self) -> Buttons {
        let value = self.latched | self.held | self.switches;
        self.latched = Buttons::empty();
        value
    }
}

impl ButtonRegister for Keyboard {
    fn read(&mut self) -> io::Result<Buttons> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.handle(&ev);
        }
        Ok(self.snapshot())
    }
}
