// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Property tests over random action sequences.
//!
//! Sequences mix roster edits, frame edits, selection and drops. After every
//! step the session invariants must hold.

use std::collections::HashSet;

use choreo::util::geometry::StageGeometry;
use choreo::{Action, FrameId, Position, Session, StageInteraction};
use proptest::prelude::*;

const NAMES: &[&str] = &["", "Alice", "Bob", "Carol", "alice", "Dmitri"];

/// A step in a generated session.
#[derive(Debug, Clone)]
enum Step {
    Apply(Action),
    /// Drag the named dancer and drop at the given stage percentage.
    Drop { dancer: String, x: f64, y: f64 },
    /// Remove the frame at `idx % len`.
    RemoveFrameAt(usize),
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES).prop_map(str::to_string)
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => name_strategy().prop_map(|n| Step::Apply(Action::AddDancer(n))),
        1 => name_strategy().prop_map(|n| Step::Apply(Action::RemoveDancer(n))),
        2 => Just(Step::Apply(Action::AddFrame)),
        2 => (0usize..8).prop_map(Step::RemoveFrameAt),
        1 => (0u64..12).prop_map(|id| Step::Apply(Action::RemoveFrame(FrameId(id)))),
        2 => (0usize..10).prop_map(|i| Step::Apply(Action::SelectFrame(i))),
        1 => Just(Step::Apply(Action::NextFrame)),
        1 => Just(Step::Apply(Action::PreviousFrame)),
        4 => (name_strategy(), -20.0f64..120.0, -20.0f64..120.0)
            .prop_map(|(dancer, x, y)| Step::Drop { dancer, x, y }),
    ]
}

fn stage() -> StageGeometry {
    StageGeometry::new(0.0, 0.0, 400.0, 200.0)
}

fn run(session: &mut Session, interaction: &mut StageInteraction, step: &Step) {
    match step {
        Step::Apply(action) => {
            session.apply(action.clone());
        }
        Step::Drop { dancer, x, y } => {
            interaction.drag_start(dancer);
            let s = stage();
            interaction.drop_on_stage(session, x / 100.0 * s.width, y / 100.0 * s.height, Some(&s));
        }
        Step::RemoveFrameAt(idx) => {
            let id = session.frames()[idx % session.frames().len()].id;
            session.remove_frame(id);
        }
    }
}

fn assert_invariants(session: &Session) -> Result<(), TestCaseError> {
    prop_assert!(!session.frames().is_empty());
    prop_assert!(session.current_index() < session.frames().len());

    let unique: HashSet<_> = session.roster().iter().collect();
    prop_assert_eq!(unique.len(), session.roster().len());
    prop_assert!(session.roster().iter().all(|n| !n.is_empty()));

    for frame in session.frames() {
        for dancer in frame.positions.keys() {
            prop_assert!(session.has_dancer(dancer), "dangling position for {}", dancer);
        }
    }

    let ids: HashSet<_> = session.frames().iter().map(|f| f.id).collect();
    prop_assert_eq!(ids.len(), session.frames().len());
    Ok(())
}

proptest! {
    /// Roster uniqueness, referential integrity, non-empty frames and a valid
    /// current index hold after every step.
    #[test]
    fn prop_invariants_hold(steps in prop::collection::vec(step_strategy(), 0..80)) {
        let mut session = Session::new();
        let mut interaction = StageInteraction::new();

        for step in &steps {
            run(&mut session, &mut interaction, step);
            assert_invariants(&session)?;
        }
    }

    /// Frame ids handed out over a session are never reused.
    #[test]
    fn prop_frame_ids_never_reused(steps in prop::collection::vec(step_strategy(), 0..80)) {
        let mut session = Session::new();
        let mut interaction = StageInteraction::new();
        let mut seen: Vec<FrameId> = session.frames().iter().map(|f| f.id).collect();

        for step in &steps {
            let before: HashSet<_> = session.frames().iter().map(|f| f.id).collect();
            run(&mut session, &mut interaction, step);
            for frame in session.frames() {
                if !before.contains(&frame.id) {
                    prop_assert!(!seen.contains(&frame.id));
                    seen.push(frame.id);
                }
            }
        }
    }

    /// A new frame equals the current frame at creation, and editing it
    /// afterwards leaves the source untouched.
    #[test]
    fn prop_add_frame_seeds_by_value(
        steps in prop::collection::vec(step_strategy(), 0..40),
        x in 0.0f64..100.0,
        y in 0.0f64..100.0,
    ) {
        let mut session = Session::new();
        let mut interaction = StageInteraction::new();
        for step in &steps {
            run(&mut session, &mut interaction, step);
        }
        session.add_dancer("Seed");

        let source_id = session.current_frame().id;
        let source_positions = session.current_frame().positions.clone();

        session.add_frame();
        prop_assert_eq!(&session.current_frame().positions, &source_positions);

        session.place_dancer("Seed", Position::new(x, y));
        let source_idx = session.frame_index(source_id);
        prop_assert!(source_idx.is_some());
        if let Some(idx) = source_idx {
            prop_assert_eq!(&session.frames()[idx].positions, &source_positions);
        }
    }

    /// Dropping a dancer only ever changes the current frame.
    #[test]
    fn prop_drop_isolated_to_current_frame(
        steps in prop::collection::vec(step_strategy(), 0..60),
        dancer in name_strategy(),
        x in -20.0f64..120.0,
        y in -20.0f64..120.0,
    ) {
        let mut session = Session::new();
        let mut interaction = StageInteraction::new();
        for step in &steps {
            run(&mut session, &mut interaction, step);
        }

        let current = session.current_index();
        let before = session.frames().to_vec();

        run(&mut session, &mut interaction, &Step::Drop { dancer, x, y });

        for (idx, (old, new)) in before.iter().zip(session.frames()).enumerate() {
            if idx != current {
                prop_assert_eq!(old, new);
            }
        }
    }
}
