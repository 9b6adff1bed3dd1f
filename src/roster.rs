// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Roster management.
//!
//! Adding and removing dancers. Removal cascades into every frame so no
//! frame ever holds a position for a dancer who is not on the roster.

use crate::models::Session;

impl Session {
    /// Append a dancer to the roster.
    ///
    /// Empty names and exact duplicates are ignored. The new dancer starts
    /// off stage in every frame. Returns true if the roster changed.
    pub fn add_dancer(&mut self, name: &str) -> bool {
        if name.is_empty() {
            log::debug!("Ignoring empty dancer name");
            return false;
        }
        if self.has_dancer(name) {
            log::debug!("Ignoring duplicate dancer {:?}", name);
            return false;
        }

        self.roster.push(name.to_string());
        log::info!("Added dancer {}, total: {}", name, self.roster.len());
        self.trace_snapshot();
        true
    }

    /// Remove a dancer from the roster and from every frame.
    ///
    /// Removing an unknown name is a no-op. Returns true if the roster changed.
    pub fn remove_dancer(&mut self, name: &str) -> bool {
        let Some(idx) = self.roster.iter().position(|d| d == name) else {
            log::debug!("Ignoring removal of unknown dancer {:?}", name);
            return false;
        };

        self.roster.remove(idx);
        let cleared = self
            .frames
            .iter_mut()
            .map(|frame| frame.clear_position(name))
            .filter(|&was_on_stage| was_on_stage)
            .count();

        log::info!(
            "Removed dancer {} (cleared from {} frames), total: {}",
            name,
            cleared,
            self.roster.len()
        );
        self.trace_snapshot();
        true
    }
}
