// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stage header bar.
//!
//! Shows the current frame's name, buttons to step through frames, and a
//! usage hint.

use crate::models::Session;

/// Result of header bar interaction.
pub enum ToolbarAction {
    None,
    PreviousFrame,
    NextFrame,
}

/// Display the header bar above the stage.
pub fn show(ui: &mut egui::Ui, session: &Session) -> ToolbarAction {
    let mut action = ToolbarAction::None;
    let current = session.current_index();
    let count = session.frames().len();

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.add_enabled(current > 0, egui::Button::new("◀")).clicked() {
            action = ToolbarAction::PreviousFrame;
        }
        if ui.add_enabled(current + 1 < count, egui::Button::new("▶")).clicked() {
            action = ToolbarAction::NextFrame;
        }

        ui.separator();

        ui.label(
            egui::RichText::new(session.current_frame().name.to_uppercase())
                .strong()
                .color(egui::Color32::from_rgb(30, 64, 175)),
        );
        ui.label(egui::RichText::new(format!("{} / {}", current + 1, count)).weak());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new("Drag dancers from the list or move them on the stage")
                    .italics()
                    .weak(),
            );
        });
    });

    action
}
