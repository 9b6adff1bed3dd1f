// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session state.
//!
//! The session owns the roster, the frame sequence and the current frame
//! index. It lives for as long as the application window and is never
//! written to disk.
//!
//! Mutating operations are split by concern across [`crate::roster`],
//! [`crate::frames`] and [`crate::stage`]; this module only holds the data
//! and the invariants they all rely on.

use super::frame::{Frame, FrameId};
use serde::{Deserialize, Serialize};

/// Complete choreography state for one planning session.
///
/// Invariants:
/// - `frames` is never empty.
/// - `current < frames.len()`.
/// - every key of every frame's positions is in `roster`.
/// - `next_frame_id` is greater than every frame id ever issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) roster: Vec<String>,
    pub(crate) frames: Vec<Frame>,
    pub(crate) current: usize,
    pub(crate) next_frame_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with an empty roster and a single empty frame.
    pub fn new() -> Self {
        Self {
            roster: Vec::new(),
            frames: vec![Frame::new(FrameId(1), "Frame 1".to_string())],
            current: 0,
            next_frame_id: 2,
        }
    }

    /// Dancer names in insertion order.
    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    /// Whether the roster contains the exact name.
    pub fn has_dancer(&self, name: &str) -> bool {
        self.roster.iter().any(|d| d == name)
    }

    /// Frames in playback order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Index of the current frame.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The frame currently being viewed and edited.
    pub fn current_frame(&self) -> &Frame {
        // `current` is kept in range by every mutation
        &self.frames[self.current]
    }

    pub(crate) fn current_frame_mut(&mut self) -> &mut Frame {
        &mut self.frames[self.current]
    }

    /// Index of the frame with the given id.
    pub fn frame_index(&self, id: FrameId) -> Option<usize> {
        self.frames.iter().position(|f| f.id == id)
    }

    /// Hand out a fresh frame id.
    pub(crate) fn issue_frame_id(&mut self) -> FrameId {
        let id = FrameId(self.next_frame_id);
        self.next_frame_id += 1;
        id
    }

    /// Serialize the session for trace logging.
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable: {}>", e))
    }

    /// Log the whole session at trace level.
    pub(crate) fn trace_snapshot(&self) {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Session snapshot: {}", self.snapshot_json());
        }
    }
}
