// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame sequence management.
//!
//! Frames are only ever appended, so sequence order is creation order. The
//! sequence always holds at least one frame and the current index always
//! points at an existing frame.

use crate::models::{Frame, FrameId, Session};

impl Session {
    /// Append a new frame seeded with the current frame's positions and make
    /// it current.
    pub fn add_frame(&mut self) -> FrameId {
        let id = self.issue_frame_id();
        let name = format!("Frame {}", self.frames.len() + 1);
        let frame = Frame::seeded_from(id, name, self.current_frame());

        self.frames.push(frame);
        self.current = self.frames.len() - 1;

        log::info!(
            "Added frame {} seeded with {} positions, total: {}",
            id,
            self.current_frame().positions.len(),
            self.frames.len()
        );
        self.trace_snapshot();
        id
    }

    /// Delete the frame with the given id.
    ///
    /// Ignored when only one frame is left or the id is unknown. The current
    /// index keeps following the frame the user was viewing; if that frame is
    /// the one removed, the frame that slid into its slot becomes current
    /// (or the new last frame, when the removed frame was last).
    pub fn remove_frame(&mut self, id: FrameId) -> bool {
        if self.frames.len() == 1 {
            log::debug!("Refusing to remove the only frame");
            return false;
        }
        let Some(idx) = self.frame_index(id) else {
            log::debug!("Ignoring removal of unknown frame {}", id);
            return false;
        };

        let viewing = self.current_frame().id;
        let removed = self.frames.remove(idx);

        self.current = if viewing == id {
            self.current.min(self.frames.len() - 1)
        } else {
            self.frame_index(viewing)
                .unwrap_or_else(|| self.current.min(self.frames.len() - 1))
        };

        log::info!(
            "Removed frame {} ({}), total: {}",
            removed.id,
            removed.name,
            self.frames.len()
        );
        self.trace_snapshot();
        true
    }

    /// Make the frame at `index` current.
    ///
    /// Out-of-range indices are clamped to the last frame.
    pub fn select_frame(&mut self, index: usize) {
        let last = self.frames.len() - 1;
        if index > last {
            log::warn!("Frame index {} out of range, clamping to {}", index, last);
        }
        let previous = self.current;
        self.current = index.min(last);
        if self.current != previous {
            log::info!("Selected frame {} ({})", self.current, self.current_frame().name);
        }
    }

    /// Step forward one frame, stopping at the last.
    pub fn select_next_frame(&mut self) -> bool {
        if self.current + 1 < self.frames.len() {
            self.select_frame(self.current + 1);
            true
        } else {
            false
        }
    }

    /// Step back one frame, stopping at the first.
    pub fn select_previous_frame(&mut self) -> bool {
        if self.current > 0 {
            self.select_frame(self.current - 1);
            true
        } else {
            false
        }
    }
}
