//! A [`Traveller`] that walks a found path in world space.

use crate::geom::HexCoord;
use crate::layout::{Layout, WorldPos};

/// Distance below which a traveller counts as arrived at a waypoint.
pub const ARRIVAL_THRESHOLD: f32 = 0.01;

/// World units per second a traveller covers unless told otherwise.
pub const DEFAULT_SPEED: f32 = 25.0;

/// Moves a unit along a path, one waypoint at a time, at constant speed.
#[derive(Debug, Clone)]
pub struct Traveller {
    path: Vec<HexCoord>,
    layout: Layout,
    speed: f32,
    pos: WorldPos,
    next: usize,
    travelling: bool,
}

impl Traveller {
    /// Place a traveller on the first cell of `path`, heading for the second.
    ///
    /// Paths with fewer than two cells leave the traveller idle, and so
    /// does a speed that is not a positive finite number.
    pub fn new(path: Vec<HexCoord>, layout: Layout, speed: f32) -> Self {
        let pos = path
            .first()
            .map(|&c| layout.center(c))
            .unwrap_or_default();
        let moving = speed.is_finite() && speed > 0.0;
        if !moving {
            log::warn!("traveller speed {speed} cannot move; staying at the start");
        }
        let travelling = moving && path.len() > 1;
        Self {
            path,
            layout,
            speed,
            pos,
            next: 1,
            travelling,
        }
    }

    /// Current world position.
    #[inline]
    pub fn position(&self) -> WorldPos {
        self.pos
    }

    /// Whether the traveller still has waypoints ahead.
    #[inline]
    pub fn is_travelling(&self) -> bool {
        self.travelling
    }

    /// The waypoint currently aimed at, if any.
    pub fn target(&self) -> Option<HexCoord> {
        if self.travelling {
            self.path.get(self.next).copied()
        } else {
            None
        }
    }

    /// Advance by `dt` seconds and return the new position.
    ///
    /// A call either moves toward the current waypoint or, once within
    /// [`ARRIVAL_THRESHOLD`] of it, switches to the following one. A `dt`
    /// that is not positive leaves everything unchanged.
    pub fn advance(&mut self, dt: f32) -> WorldPos {
        if dt.is_nan() || dt <= 0.0 {
            return self.pos;
        }
        let Some(target) = self.target().map(|c| self.layout.center(c)) else {
            return self.pos;
        };
        let remaining = self.pos.distance(target);
        if remaining < ARRIVAL_THRESHOLD {
            self.next += 1;
            if self.next >= self.path.len() {
                self.travelling = false;
            }
            return self.pos;
        }
        let step = self.speed * dt;
        if step >= remaining {
            self.pos = target;
        } else {
            let k = step / remaining;
            self.pos = WorldPos::new(
                self.pos.x + (target.x - self.pos.x) * k,
                self.pos.y + (target.y - self.pos.y) * k,
            );
        }
        self.pos
    }
}
