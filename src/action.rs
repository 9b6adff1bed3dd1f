// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session actions.
//!
//! Every user intent the panels can produce is an [`Action`]. The app
//! dispatches them through [`Session::apply`], so the full state machine can
//! be driven without a window.

use crate::models::{FrameId, Position, Session};

/// A state transition requested by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddDancer(String),
    RemoveDancer(String),
    AddFrame,
    RemoveFrame(FrameId),
    SelectFrame(usize),
    NextFrame,
    PreviousFrame,
    PlaceDancer { dancer: String, position: Position },
}

impl Session {
    /// Apply an action. Returns true if the session changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::AddDancer(name) => self.add_dancer(&name),
            Action::RemoveDancer(name) => self.remove_dancer(&name),
            Action::AddFrame => {
                self.add_frame();
                true
            }
            Action::RemoveFrame(id) => self.remove_frame(id),
            Action::SelectFrame(index) => {
                let before = self.current_index();
                self.select_frame(index);
                before != self.current_index()
            }
            Action::NextFrame => self.select_next_frame(),
            Action::PreviousFrame => self.select_previous_frame(),
            Action::PlaceDancer { dancer, position } => self.place_dancer(&dancer, position),
        }
    }
}

/// Pure form of [`Session::apply`]: consume a session, return the next one.
pub fn reduce(mut session: Session, action: Action) -> Session {
    session.apply(action);
    session
}
