// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It owns the session and the drag state, shows the
//! panels, and feeds the actions they return back into the session.

use crate::action::Action;
use crate::config::PlannerConfig;
use crate::models::Session;
use crate::stage::StageInteraction;
use crate::ui::{canvas, roster, timeline, toolbar};

/// Main application state.
pub struct ChoreoApp {
    /// Roster, frames and current frame
    session: Session,

    /// Dancer being dragged, if any
    interaction: StageInteraction,

    /// Text field buffer for quick-add
    new_dancer_name: String,

    config: PlannerConfig,
}

impl Default for ChoreoApp {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl ChoreoApp {
    /// Create a new planner with a fresh session.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            session: Session::new(),
            interaction: StageInteraction::new(),
            new_dancer_name: String::new(),
            config,
        }
    }

    /// The session being edited.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Apply an action to the session.
    fn dispatch(&mut self, action: Action) {
        log::debug!("Dispatching {:?}", action);
        self.session.apply(action);
    }

    /// Add the dancer typed into the text field, clearing it on success.
    fn submit_new_dancer(&mut self, name: String) {
        if self.session.add_dancer(&name) {
            self.new_dancer_name.clear();
        }
    }

    fn handle_roster(&mut self, action: roster::RosterAction) {
        match action {
            roster::RosterAction::AddDancer(name) => self.submit_new_dancer(name),
            roster::RosterAction::RemoveDancer(name) => self.dispatch(Action::RemoveDancer(name)),
            roster::RosterAction::BeginDrag(name) => self.interaction.drag_start(&name),
            roster::RosterAction::None => {}
        }
    }

    fn handle_timeline(&mut self, action: timeline::TimelineAction) {
        match action {
            timeline::TimelineAction::AddFrame => self.dispatch(Action::AddFrame),
            timeline::TimelineAction::RemoveFrame(id) => self.dispatch(Action::RemoveFrame(id)),
            timeline::TimelineAction::SelectFrame(idx) => self.dispatch(Action::SelectFrame(idx)),
            timeline::TimelineAction::None => {}
        }
    }

    fn handle_toolbar(&mut self, action: toolbar::ToolbarAction) {
        match action {
            toolbar::ToolbarAction::PreviousFrame => self.dispatch(Action::PreviousFrame),
            toolbar::ToolbarAction::NextFrame => self.dispatch(Action::NextFrame),
            toolbar::ToolbarAction::None => {}
        }
    }

    fn handle_canvas(&mut self, action: canvas::CanvasAction) {
        match action {
            canvas::CanvasAction::BeginDrag(name) => self.interaction.drag_start(&name),
            canvas::CanvasAction::Drop { x, y, stage } => {
                self.interaction
                    .drop_on_stage(&mut self.session, x, y, Some(&stage));
            }
            canvas::CanvasAction::CancelDrag => self.interaction.cancel_drag(),
            canvas::CanvasAction::None => {}
        }
    }

    /// Keyboard shortcuts: arrows step through frames, Escape cancels a drag.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.interaction.cancel_drag();
        }

        // Leave arrow keys to the text field while it has focus
        if ctx.wants_keyboard_input() {
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::ArrowDown)) {
            self.dispatch(Action::NextFrame);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::ArrowUp)) {
            self.dispatch(Action::PreviousFrame);
        }
    }
}

impl eframe::App for ChoreoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Title bar
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading(egui::RichText::new("Choreography Planner").strong());
            ui.add_space(4.0);
        });

        // Sidebar: roster on top, frames below
        let (roster_action, timeline_action) = egui::SidePanel::left("sidebar")
            .default_width(280.0)
            .show(ctx, |ui| {
                let timeline_action = egui::TopBottomPanel::bottom("frames")
                    .resizable(true)
                    .default_height(220.0)
                    .show_inside(ui, |ui| timeline::show(ui, &self.session))
                    .inner;
                let roster_action = egui::CentralPanel::default()
                    .show_inside(ui, |ui| roster::show(ui, &self.session, &mut self.new_dancer_name))
                    .inner;
                (roster_action, timeline_action)
            })
            .inner;

        self.handle_roster(roster_action);
        self.handle_timeline(timeline_action);

        self.handle_keys(ctx);

        // Stage (center)
        let (toolbar_action, canvas_action) = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let toolbar_action = toolbar::show(ui, &self.session);
                ui.separator();
                let canvas_action =
                    canvas::show(ui, &self.session, &self.interaction, &self.config.stage);
                (toolbar_action, canvas_action)
            })
            .inner;

        self.handle_toolbar(toolbar_action);
        self.handle_canvas(canvas_action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::geometry::StageGeometry;

    #[test]
    fn test_rejected_name_stays_in_field() {
        let mut app = ChoreoApp::default();
        app.new_dancer_name = "Alice".to_string();
        app.handle_roster(roster::RosterAction::AddDancer("Alice".to_string()));
        assert!(app.new_dancer_name.is_empty());

        app.new_dancer_name = "Alice".to_string();
        app.handle_roster(roster::RosterAction::AddDancer("Alice".to_string()));
        assert_eq!(app.new_dancer_name, "Alice");
        assert_eq!(app.session().roster(), ["Alice"]);
    }

    #[test]
    fn test_drag_from_roster_and_drop_on_canvas() {
        let mut app = ChoreoApp::default();
        app.handle_roster(roster::RosterAction::AddDancer("Alice".to_string()));
        app.handle_roster(roster::RosterAction::BeginDrag("Alice".to_string()));
        app.handle_canvas(canvas::CanvasAction::Drop {
            x: 110.0,
            y: 70.0,
            stage: StageGeometry::new(10.0, 20.0, 200.0, 100.0),
        });

        let position = app.session().current_frame().position_of("Alice");
        assert_eq!(position, Some(crate::models::Position::center()));
    }

    #[test]
    fn test_cancelled_drag_changes_nothing() {
        let mut app = ChoreoApp::default();
        app.handle_roster(roster::RosterAction::AddDancer("Alice".to_string()));
        app.handle_canvas(canvas::CanvasAction::BeginDrag("Alice".to_string()));
        app.handle_canvas(canvas::CanvasAction::CancelDrag);
        app.handle_canvas(canvas::CanvasAction::Drop {
            x: 110.0,
            y: 70.0,
            stage: StageGeometry::new(10.0, 20.0, 200.0, 100.0),
        });

        assert!(app.session().current_frame().is_off_stage("Alice"));
    }

    #[test]
    fn test_timeline_and_toolbar_actions() {
        let mut app = ChoreoApp::default();
        app.handle_timeline(timeline::TimelineAction::AddFrame);
        app.handle_timeline(timeline::TimelineAction::AddFrame);
        assert_eq!(app.session().current_index(), 2);

        app.handle_toolbar(toolbar::ToolbarAction::PreviousFrame);
        assert_eq!(app.session().current_index(), 1);

        let first = app.session().frames()[0].id;
        app.handle_timeline(timeline::TimelineAction::RemoveFrame(first));
        assert_eq!(app.session().frames().len(), 2);
        assert_eq!(app.session().current_frame().name, "Frame 2");

        app.handle_timeline(timeline::TimelineAction::SelectFrame(1));
        assert_eq!(app.session().current_frame().name, "Frame 3");
    }
}
