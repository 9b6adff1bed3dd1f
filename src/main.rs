// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Choreography Planner
//!
//! A desktop application for planning dance formations frame by frame.

use anyhow::Result;
use choreo::app::ChoreoApp;
use choreo::config::PlannerConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = PlannerConfig::load()?;

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([config.window.min_width, config.window.min_height])
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Choreo",
        options,
        Box::new(move |_cc| Ok(Box::new(ChoreoApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
