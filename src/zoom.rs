//! Map zoom state
//!
//! The level is kept as a whole number of steps away from 1.0, so any
//! sequence of zoom-ins undone by the same number of zoom-outs lands back
//! on exactly 1.0.

/// Commands a map control button can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapCommand {
    ZoomIn,
    ZoomOut,
    Reset,
    Locate,
}

impl MapCommand {
    /// Every command, in binding order
    pub const ALL: [MapCommand; 4] = [
        MapCommand::ZoomIn,
        MapCommand::ZoomOut,
        MapCommand::Reset,
        MapCommand::Locate,
    ];
}

/// What the icon needs after a command ran
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEffect {
    /// Apply `scale(level)` to the icon
    Scale(f64),
    /// Flash the pulse class
    Pulse,
    /// Command was refused, leave the icon alone
    Unchanged,
}

/// Zoom multiplier for one map binding
#[derive(Debug, Clone, PartialEq)]
pub struct Zoom {
    steps: i32,
    step: f64,
}

impl Default for Zoom {
    fn default() -> Self {
        Self::new(0.2)
    }
}

impl Zoom {
    const EPSILON: f64 = 1e-9;

    /// Start at 1.0 with the given step size
    pub fn new(step: f64) -> Self {
        Self { steps: 0, step }
    }

    /// Current multiplier
    pub fn level(&self) -> f64 {
        if self.steps == 0 {
            1.0
        } else {
            1.0 + f64::from(self.steps) * self.step
        }
    }

    /// Lowest level from which a zoom-out is still accepted
    fn floor(&self) -> f64 {
        self.step * 2.0
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.steps += 1;
        self.level()
    }

    /// Returns `None` when the level is already at or under the floor
    pub fn zoom_out(&mut self) -> Option<f64> {
        if self.level() - self.floor() > Self::EPSILON {
            self.steps -= 1;
            Some(self.level())
        } else {
            None
        }
    }

    pub fn reset(&mut self) -> f64 {
        self.steps = 0;
        self.level()
    }

    /// Run a command against this zoom state
    pub fn apply(&mut self, command: MapCommand) -> MapEffect {
        match command {
            MapCommand::ZoomIn => MapEffect::Scale(self.zoom_in()),
            MapCommand::ZoomOut => self
                .zoom_out()
                .map(MapEffect::Scale)
                .unwrap_or(MapEffect::Unchanged),
            MapCommand::Reset => MapEffect::Scale(self.reset()),
            MapCommand::Locate => MapEffect::Pulse,
        }
    }

    /// CSS transform for the current level
    pub fn transform(&self) -> String {
        scale_transform(self.level())
    }
}

/// `scale(..)` value rounded to three decimals
pub fn scale_transform(level: f64) -> String {
    let rounded = (level * 1000.0).round() / 1000.0;
    format!("scale({})", rounded)
}
