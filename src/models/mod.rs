// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Choreography data model.

pub mod frame;
pub mod position;
pub mod session;

pub use frame::{Frame, FrameId};
pub use position::Position;
pub use session::Session;
