// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Dancer roster panel.
//!
//! Lists dancers in the order they were added, flags the ones that are off
//! stage in the current frame, and lets the user add, remove and start
//! dragging dancers onto the stage.

use crate::models::Session;

/// Result of roster panel interaction.
pub enum RosterAction {
    None,
    AddDancer(String),
    RemoveDancer(String),
    BeginDrag(String),
}

const OFF_STAGE_FG: egui::Color32 = egui::Color32::from_rgb(180, 83, 9);
const OFF_STAGE_BG: egui::Color32 = egui::Color32::from_rgb(254, 243, 199);

/// Display the roster panel.
///
/// `new_dancer_name` is the text field buffer; the caller clears it once the
/// dancer has actually been added.
pub fn show(ui: &mut egui::Ui, session: &Session, new_dancer_name: &mut String) -> RosterAction {
    let mut action = RosterAction::None;

    ui.heading("Dancers");
    ui.separator();

    ui.horizontal(|ui| {
        let input = ui.add(
            egui::TextEdit::singleline(new_dancer_name)
                .hint_text("Dancer name")
                .desired_width(ui.available_width() - 50.0),
        );

        // Enter in the field works like the Add button
        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if submitted {
            input.request_focus();
        }

        if ui.button("Add").clicked() || submitted {
            action = RosterAction::AddDancer(new_dancer_name.clone());
        }
    });

    ui.add_space(8.0);

    let entries = session.roster_entries();
    if entries.is_empty() {
        ui.label(egui::RichText::new("No dancers added yet.").italics().weak());
        return action;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entry in entries {
                let row = egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(entry.name).strong());
                        if entry.off_stage {
                            ui.label(
                                egui::RichText::new("OFF STAGE")
                                    .small()
                                    .strong()
                                    .color(OFF_STAGE_FG)
                                    .background_color(OFF_STAGE_BG),
                            );
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("×").on_hover_text("Remove dancer").clicked() {
                                action = RosterAction::RemoveDancer(entry.name.to_string());
                            }
                        });
                    });
                });

                let drag = ui
                    .interact(
                        row.response.rect,
                        ui.id().with(("roster_entry", entry.name)),
                        egui::Sense::drag(),
                    )
                    .on_hover_cursor(egui::CursorIcon::Grab);

                if drag.drag_started() {
                    action = RosterAction::BeginDrag(entry.name.to_string());
                }
            }
        });

    action
}
