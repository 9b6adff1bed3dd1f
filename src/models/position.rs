// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stage positions.
//!
//! Positions are stored as percentages of the stage size, measured from the
//! stage's top-left corner, so they survive window resizes unchanged.

use serde::{Deserialize, Serialize};

/// A point on the stage in percent (nominally 0.0 to 100.0 on each axis).
///
/// Values outside that range are allowed; they describe a spot in the wings
/// beyond the visible stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a new position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The exact centre of the stage.
    pub fn center() -> Self {
        Self::new(50.0, 50.0)
    }

    /// Whether the position lies on the visible stage.
    pub fn is_within_stage(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}
