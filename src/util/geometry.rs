// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides utilities for coordinate transformations between
//! screen coordinates and stage percentages.

use crate::models::Position;

/// On-screen bounding box of the stage surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl StageGeometry {
    /// Create a new bounding box.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether the box has a usable size for normalization.
    pub fn is_measurable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

/// Convert a screen point to stage percentages.
///
/// The result is not clamped; points outside the box map outside 0..100.
/// Returns `None` when the box has no area.
pub fn normalize_coordinates(
    pointer_x: f64,
    pointer_y: f64,
    stage: &StageGeometry,
) -> Option<Position> {
    if !stage.is_measurable() {
        return None;
    }
    Some(Position {
        x: (pointer_x - stage.left) / stage.width * 100.0,
        y: (pointer_y - stage.top) / stage.height * 100.0,
    })
}

/// Convert stage percentages back to a screen point.
pub fn denormalize_coordinates(position: &Position, stage: &StageGeometry) -> (f64, f64) {
    (
        stage.left + position.x / 100.0 * stage.width,
        stage.top + position.y / 100.0 * stage.height,
    )
}
