// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Read-only render data derived from the session.

use crate::models::{FrameId, Session};

/// One roster row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry<'a> {
    pub name: &'a str,
    /// No position in the current frame.
    pub off_stage: bool,
}

/// One frame list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameEntry<'a> {
    pub index: usize,
    pub id: FrameId,
    pub name: &'a str,
    pub is_current: bool,
}

impl FrameEntry<'_> {
    /// Text shown in the frame list, numbered from 1.
    pub fn label(&self) -> String {
        format!("{}. {}", self.index + 1, self.name)
    }
}

impl Session {
    /// Roster rows with their off-stage flag for the current frame.
    pub fn roster_entries(&self) -> Vec<RosterEntry<'_>> {
        let frame = self.current_frame();
        self.roster
            .iter()
            .map(|name| RosterEntry {
                name: name.as_str(),
                off_stage: frame.is_off_stage(name),
            })
            .collect()
    }

    /// Frame rows with the current one flagged.
    pub fn frame_entries(&self) -> Vec<FrameEntry<'_>> {
        self.frames
            .iter()
            .enumerate()
            .map(|(index, frame)| FrameEntry {
                index,
                id: frame.id,
                name: frame.name.as_str(),
                is_current: index == self.current,
            })
            .collect()
    }

    /// Whether frames may currently be deleted.
    pub fn can_remove_frames(&self) -> bool {
        self.frames.len() > 1
    }
}
