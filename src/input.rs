//! Button register sampling with rising-edge detection.
//!
//! Each tick: `sample` the register, let the game query `just_pressed` and
//! `is_down`, then `commit`. A press therefore fires exactly once no
//! matter how many ticks the button stays held.

use std::collections::VecDeque;
use std::io;

use bitflags::bitflags;

bitflags! {
    /// Register layout: push buttons in the low bits, slide switches from
    /// bit 16 up.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u32 {
        const KEY0 = 1 << 0;
        const KEY1 = 1 << 1;
        const KEY2 = 1 << 2;
        const KEY3 = 1 << 3;

        const SW0 = 1 << 16;
        const SW1 = 1 << 17;
        const SW2 = 1 << 18;
        const SW3 = 1 << 19;
        const SW4 = 1 << 20;
        const SW5 = 1 << 21;
        const SW6 = 1 << 22;
        const SW7 = 1 << 23;
        const SW8 = 1 << 24;
        const SW9 = 1 << 25;
    }
}

pub const SWITCH_SHIFT: u32 = 16;
pub const SWITCH_COUNT: u32 = 10;

impl Buttons {
    /// Slide switch `n` (0-9).
    pub fn switch(n: u32) -> Buttons {
        if n < SWITCH_COUNT {
            Buttons::from_bits_retain(1 << (SWITCH_SHIFT + n))
        } else {
            Buttons::empty()
        }
    }
}

/// Source of raw button levels, read once per tick.
pub trait ButtonRegister {
    fn read(&mut self) -> io::Result<Buttons>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InputSampler {
    raw: Buttons,
    previous: Buttons,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores this tick's levels. `previous` still holds last tick's.
    pub fn sample(&mut self, raw: Buttons) {
        self.raw = raw;
    }

    /// Any bit of `mask` is down now and none of them was down last tick.
    pub fn just_pressed(&self, mask: Buttons) -> bool {
        self.raw.intersects(mask) && !self.previous.intersects(mask)
    }

    /// Some bit of `mask` went down this tick, whatever the other bits of
    /// `mask` are doing.
    pub fn any_just_pressed(&self, mask: Buttons) -> bool {
        (self.raw & !self.previous).intersects(mask)
    }

    /// Level read, no edge logic.
    pub fn is_down(&self, mask: Buttons) -> bool {
        self.raw.intersects(mask)
    }

    /// Switch levels packed as a number, SW0 in bit 0.
    pub fn switches(&self) -> u32 {
        (self.raw.bits() >> SWITCH_SHIFT) & ((1 << SWITCH_COUNT) - 1)
    }

    pub fn raw(&self) -> Buttons {
        self.raw
    }

    /// Ends the tick. Must run after every edge check for the tick.
    pub fn commit(&mut self) {
        self.previous = self.raw;
    }
}

/// Plays back a fixed sequence of register values, then reads as released.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRegister {
    frames: VecDeque<Buttons>,
}

impl ScriptedRegister {
    pub fn new(frames: impl IntoIterator<Item = Buttons>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn push(&mut self, frame: Buttons) {
        self.frames.push_back(frame);
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl ButtonRegister for ScriptedRegister {
    fn read(&mut self) -> io::Result<Buttons> {
        Ok(self.frames.pop_front().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(levels: &[u32], mask: Buttons) -> Vec<usize> {
        let mut sampler = InputSampler::new();
        let mut fired = Vec::new();
        for (i, &raw) in levels.iter().enumerate() {
            sampler.sample(Buttons::from_bits_retain(raw));
            if sampler.just_pressed(mask) {
                fired.push(i);
            }
            sampler.commit();
        }
        fired
    }

    #[test]
    fn rising_edges_only() {
        assert_eq!(edges(&[0, 1, 1, 0, 1], Buttons::KEY0), vec![1, 4]);
    }

    #[test]
    fn held_button_fires_once() {
        assert_eq!(edges(&[2, 2, 2, 2, 2, 2], Buttons::KEY1), vec![0]);
    }

    #[test]
    fn other_bits_do_not_interfere() {
        assert_eq!(edges(&[0, 4, 6, 2, 0, 2], Buttons::KEY1), vec![2, 5]);
    }

    #[test]
    fn combined_mask_needs_all_released_first() {
        // KEY1 held while KEY2 goes down: the pair is already active.
        let mask = Buttons::KEY1 | Buttons::KEY2;
        assert_eq!(edges(&[2, 6, 0, 4], mask), vec![0, 3]);
    }

    #[test]
    fn any_bit_edge_ignores_held_neighbours() {
        let mask = Buttons::KEY1 | Buttons::KEY2;
        let mut sampler = InputSampler::new();
        let mut fired = Vec::new();
        for (i, raw) in [2u32, 6, 6, 4, 6, 0].into_iter().enumerate() {
            sampler.sample(Buttons::from_bits_retain(raw));
            if sampler.any_just_pressed(mask) {
                fired.push(i);
            }
            sampler.commit();
        }
        assert_eq!(fired, vec![0, 1, 4]);
    }

    #[test]
    fn edge_survives_until_commit() {
        let mut sampler = InputSampler::new();
        sampler.sample(Buttons::KEY1);
        assert!(sampler.just_pressed(Buttons::KEY1));
        assert!(sampler.just_pressed(Buttons::KEY1));
        sampler.commit();
        sampler.sample(Buttons::KEY1);
        assert!(!sampler.just_pressed(Buttons::KEY1));
        assert!(sampler.is_down(Buttons::KEY1));
    }

    #[test]
    fn switch_levels_read_directly() {
        let mut sampler = InputSampler::new();
        sampler.sample(Buttons::SW0 | Buttons::SW2 | Buttons::KEY3);
        assert_eq!(sampler.switches(), 0b101);
        sampler.commit();
        sampler.sample(Buttons::SW0 | Buttons::SW2);
        assert_eq!(sampler.switches(), 0b101);
        assert!(sampler.is_down(Buttons::switch(2)));
        assert_eq!(Buttons::switch(10), Buttons::empty());
    }

    #[test]
    fn scripted_register_runs_dry_as_released() {
        let mut reg = ScriptedRegister::new([Buttons::KEY1]);
        assert_eq!(reg.read().unwrap(), Buttons::KEY1);
        assert_eq!(reg.read().unwrap(), Buttons::empty());
        assert_eq!(reg.remaining(), 0);
    }
}
