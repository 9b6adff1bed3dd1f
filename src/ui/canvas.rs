// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stage canvas.
//!
//! This module draws the stage with a marker for every dancer placed in the
//! current frame, and turns pointer gestures into drag and drop actions.

use crate::config::StageConfig;
use crate::models::{Position, Session};
use crate::stage::{Marker, StageInteraction};
use crate::util::geometry::{denormalize_coordinates, StageGeometry};

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    BeginDrag(String),
    Drop { x: f64, y: f64, stage: StageGeometry },
    CancelDrag,
}

const MARKER_FILL: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
const STAGE_BORDER: egui::Color32 = egui::Color32::from_gray(200);
const GRID_DOT: egui::Color32 = egui::Color32::from_gray(225);

/// Screen rectangle of the stage as a measurable bounding box.
pub fn stage_geometry(rect: egui::Rect) -> StageGeometry {
    StageGeometry::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.width() as f64,
        rect.height() as f64,
    )
}

fn to_screen(position: &Position, stage: &StageGeometry) -> egui::Pos2 {
    let (x, y) = denormalize_coordinates(position, stage);
    egui::pos2(x as f32, y as f32)
}

/// Display the stage and handle drag and drop.
pub fn show(
    ui: &mut egui::Ui,
    session: &Session,
    interaction: &StageInteraction,
    style: &StageConfig,
) -> CanvasAction {
    let mut action = CanvasAction::None;

    let (stage_rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
    let stage = stage_geometry(stage_rect);
    let painter = ui.painter_at(stage_rect);

    let pointer = ui.input(|i| i.pointer.interact_pos());
    let over_stage = pointer.is_some_and(|p| stage_rect.contains(p));
    let accepting = interaction.drag_over() && over_stage;

    draw_stage(&painter, stage_rect, style, accepting);

    for marker in session.markers() {
        let center = to_screen(&marker.position, &stage);
        let being_moved = interaction.dragged() == Some(marker.dancer);
        draw_marker(&painter, &marker, center, style.marker_radius, being_moved);

        let hit = egui::Rect::from_center_size(center, egui::Vec2::splat(style.marker_radius * 2.0));
        let response = ui
            .interact(hit, ui.id().with(("marker", marker.dancer)), egui::Sense::drag())
            .on_hover_cursor(egui::CursorIcon::Grab)
            .on_hover_text(marker.dancer);

        if response.drag_started() {
            action = CanvasAction::BeginDrag(marker.dancer.to_string());
        }
    }

    // Ghost marker at the would-be drop position
    if let (Some(dancer), Some(p)) = (interaction.dragged(), pointer) {
        if let Some(position) = interaction.preview(p.x as f64, p.y as f64, Some(&stage)) {
            if over_stage {
                let ghost = Marker { dancer, position };
                let center = to_screen(&ghost.position, &stage);
                draw_marker(&painter, &ghost, center, style.marker_radius, true);
            }
        }
    }

    if interaction.dragged().is_some() && ui.input(|i| i.pointer.any_released()) {
        action = match pointer {
            Some(p) if over_stage => CanvasAction::Drop {
                x: p.x as f64,
                y: p.y as f64,
                stage,
            },
            _ => CanvasAction::CancelDrag,
        };
    }

    action
}

/// Draw the stage surface, grid and centre lines.
fn draw_stage(painter: &egui::Painter, rect: egui::Rect, style: &StageConfig, accepting: bool) {
    let fill = if accepting {
        egui::Color32::from_rgb(239, 246, 255)
    } else {
        egui::Color32::WHITE
    };
    painter.rect_filled(rect, 8.0, fill);

    if style.grid_spacing > 0.0 {
        let mut y = rect.min.y + style.grid_spacing / 2.0;
        while y < rect.max.y {
            let mut x = rect.min.x + style.grid_spacing / 2.0;
            while x < rect.max.x {
                painter.circle_filled(egui::pos2(x, y), 1.5, GRID_DOT);
                x += style.grid_spacing;
            }
            y += style.grid_spacing;
        }
    }

    if style.center_lines {
        let stroke = egui::Stroke::new(1.0, GRID_DOT);
        let center = rect.center();
        painter.line_segment([egui::pos2(center.x, rect.min.y), egui::pos2(center.x, rect.max.y)], stroke);
        painter.line_segment([egui::pos2(rect.min.x, center.y), egui::pos2(rect.max.x, center.y)], stroke);
    }

    painter.rect_stroke(rect, 8.0, egui::Stroke::new(4.0, STAGE_BORDER));
}

/// Draw a dancer marker.
fn draw_marker(
    painter: &egui::Painter,
    marker: &Marker<'_>,
    center: egui::Pos2,
    radius: f32,
    faded: bool,
) {
    let fill = if faded {
        MARKER_FILL.gamma_multiply(0.4)
    } else {
        MARKER_FILL
    };

    painter.circle_filled(center, radius, fill);
    painter.circle_stroke(center, radius, egui::Stroke::new(2.0, egui::Color32::WHITE));
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        marker.label(),
        egui::FontId::proportional(radius * 0.5),
        egui::Color32::WHITE,
    );
}
