// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame list.
//!
//! Shows the frames in playback order with the current one highlighted,
//! and offers creating, deleting and selecting frames.

use crate::models::{FrameId, Session};

/// Result of frame list interaction.
pub enum TimelineAction {
    None,
    AddFrame,
    RemoveFrame(FrameId),
    SelectFrame(usize),
}

/// Display the frame list.
pub fn show(ui: &mut egui::Ui, session: &Session) -> TimelineAction {
    let mut action = TimelineAction::None;

    ui.horizontal(|ui| {
        ui.heading("Frames");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("+ New frame").clicked() {
                action = TimelineAction::AddFrame;
            }
        });
    });
    ui.separator();

    let removable = session.can_remove_frames();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entry in session.frame_entries() {
                ui.horizontal(|ui| {
                    let width = ui.available_width() - if removable { 28.0 } else { 0.0 };
                    let button = egui::Button::new(entry.label())
                        .selected(entry.is_current)
                        .min_size(egui::vec2(width, 0.0));
                    if ui.add(button).clicked() {
                        action = TimelineAction::SelectFrame(entry.index);
                    }

                    if removable && ui.small_button("×").on_hover_text("Delete frame").clicked() {
                        action = TimelineAction::RemoveFrame(entry.id);
                    }
                });
            }
        });

    action
}
