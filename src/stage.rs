// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stage interaction.
//!
//! Drag-and-drop of dancers onto the stage. A drag can start from a roster
//! entry or from a marker already on stage; both carry the dancer's name as
//! the payload. A drop on the stage writes the normalized pointer position
//! into the current frame only, which is what keeps frames independent
//! snapshots.

use crate::models::{Position, Session};
use crate::util::geometry::{normalize_coordinates, StageGeometry};

/// Ephemeral drag state owned by the view layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageInteraction {
    /// Name of the dancer being dragged, if any.
    dragging: Option<String>,
}

impl StageInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging a dancer. Replaces any stale payload.
    pub fn drag_start(&mut self, dancer: &str) {
        log::debug!("Started dragging {}", dancer);
        self.dragging = Some(dancer.to_string());
    }

    /// The dancer currently being dragged.
    pub fn dragged(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    /// Whether a drop over the stage would be accepted right now.
    pub fn drag_over(&self) -> bool {
        self.dragging.is_some()
    }

    /// Abandon the drag without touching the session.
    pub fn cancel_drag(&mut self) {
        if let Some(dancer) = self.dragging.take() {
            log::debug!("Cancelled drag of {}", dancer);
        }
    }

    /// Where the dragged dancer would land if released at the pointer.
    pub fn preview(
        &self,
        pointer_x: f64,
        pointer_y: f64,
        stage: Option<&StageGeometry>,
    ) -> Option<Position> {
        self.dragging.as_ref()?;
        normalize_coordinates(pointer_x, pointer_y, stage?)
    }

    /// Finish the drag over the stage.
    ///
    /// The payload is consumed in every case. Nothing is written when there
    /// is no payload or the stage cannot be measured. Returns the recorded
    /// position.
    pub fn drop_on_stage(
        &mut self,
        session: &mut Session,
        pointer_x: f64,
        pointer_y: f64,
        stage: Option<&StageGeometry>,
    ) -> Option<Position> {
        let dancer = self.dragging.take()?;
        let Some(position) = stage.and_then(|s| normalize_coordinates(pointer_x, pointer_y, s))
        else {
            log::debug!("Discarding drop of {}: stage not measurable", dancer);
            return None;
        };

        session.place_dancer(&dancer, position).then_some(position)
    }
}

/// A dancer marker to draw on the stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker<'a> {
    pub dancer: &'a str,
    pub position: Position,
}

impl Marker<'_> {
    /// Short label drawn inside the marker: first three characters, upper-cased.
    pub fn label(&self) -> String {
        self.dancer.chars().take(3).collect::<String>().to_uppercase()
    }
}

impl Session {
    /// Place or move a dancer in the current frame only.
    ///
    /// Names not on the roster are ignored. Returns true if a position was
    /// written.
    pub fn place_dancer(&mut self, dancer: &str, position: Position) -> bool {
        if !self.has_dancer(dancer) {
            log::debug!("Ignoring placement of unknown dancer {:?}", dancer);
            return false;
        }

        let frame = self.current_frame_mut();
        let entering = frame.is_off_stage(dancer);
        frame.set_position(dancer, position);

        log::info!(
            "{} {} to ({:.1}, {:.1}) in {}",
            if entering { "Placed" } else { "Moved" },
            dancer,
            position.x,
            position.y,
            frame.name
        );
        if !position.is_within_stage() {
            log::debug!("{} is in the wings, outside the visible stage", dancer);
        }
        self.trace_snapshot();
        true
    }

    /// Markers for the current frame, in roster order.
    ///
    /// Only dancers with a position in the current frame get a marker.
    pub fn markers(&self) -> Vec<Marker<'_>> {
        let frame = self.current_frame();
        self.roster
            .iter()
            .filter_map(|dancer| {
                frame.position_of(dancer).map(|position| Marker {
                    dancer: dancer.as_str(),
                    position,
                })
            })
            .collect()
    }
}
