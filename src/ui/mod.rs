// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the choreography planner.

pub mod canvas;
pub mod roster;
pub mod timeline;
pub mod toolbar;
