// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Choreography planner.
//!
//! Place a roster of dancers on a stage and record where each one stands
//! across a sequence of frames. The session model ([`models::Session`]) and
//! its operations ([`roster`], [`frames`], [`stage`], [`action`]) are plain
//! state transitions with no GUI dependency; [`app`] and [`ui`] put an egui
//! front end on top.

pub mod action;
pub mod app;
pub mod config;
pub mod frames;
pub mod models;
pub mod roster;
pub mod stage;
pub mod ui;
pub mod util;
pub mod view;

pub use action::{reduce, Action};
pub use models::{Frame, FrameId, Position, Session};
pub use stage::StageInteraction;
