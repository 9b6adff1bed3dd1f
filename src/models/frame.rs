// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame data structures.
//!
//! A frame is one beat of the choreography: a named snapshot that maps each
//! on-stage dancer to a position. Dancers missing from the map are off stage
//! in that frame.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stable frame identifier, never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(pub u64);

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named snapshot of dancer positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub id: FrameId,
    pub name: String,
    pub positions: BTreeMap<String, Position>,
}

impl Frame {
    /// Create an empty frame with the given id and display name.
    pub fn new(id: FrameId, name: String) -> Self {
        Self {
            id,
            name,
            positions: BTreeMap::new(),
        }
    }

    /// Create a frame that starts as a copy of another frame's positions.
    pub fn seeded_from(id: FrameId, name: String, source: &Frame) -> Self {
        Self {
            id,
            name,
            positions: source.positions.clone(),
        }
    }

    /// Position of a dancer, if they are on stage in this frame.
    pub fn position_of(&self, dancer: &str) -> Option<Position> {
        self.positions.get(dancer).copied()
    }

    /// Whether the dancer has no position in this frame.
    pub fn is_off_stage(&self, dancer: &str) -> bool {
        !self.positions.contains_key(dancer)
    }

    /// Place or move a dancer.
    pub fn set_position(&mut self, dancer: &str, position: Position) {
        self.positions.insert(dancer.to_string(), position);
    }

    /// Take a dancer off stage. Returns true if they were on stage.
    pub fn clear_position(&mut self, dancer: &str) -> bool {
        self.positions.remove(dancer).is_some()
    }
}
