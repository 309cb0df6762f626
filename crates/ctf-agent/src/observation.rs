//! Per-tick input.

use ctf_core::{Cell, VisionWindow};

/// What the host tells one agent at the start of its tick.
#[derive(Copy, Clone, Debug)]
pub struct Observation<'a> {
    pub window:       &'a VisionWindow,
    /// Absolute position.
    pub position:     Cell,
    /// The host allows a shot this tick (cooldown elapsed).
    pub can_shoot:    bool,
    /// This agent carries the enemy flag.
    pub holding_flag: bool,
    pub hp:           u32,
    pub ammo:         u32,
}

impl<'a> Observation<'a> {
    /// An observation with shooting disallowed and no flag carried.
    pub fn new(window: &'a VisionWindow, position: Cell, hp: u32, ammo: u32) -> Self {
        Self {
            window,
            position,
            can_shoot:    false,
            holding_flag: false,
            hp,
            ammo,
        }
    }

    pub fn shooting(mut self, can_shoot: bool) -> Self {
        self.can_shoot = can_shoot;
        self
    }

    pub fn carrying_flag(mut self, holding_flag: bool) -> Self {
        self.holding_flag = holding_flag;
        self
    }
}
