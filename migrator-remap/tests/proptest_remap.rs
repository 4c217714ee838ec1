//! Property tests for remap rendering.
//!
//! - Rendered remap text parses back to the same replacements, in order.
//! - Rendering is deterministic.

use migrator_remap::{parse_remap, render_remap};
use migrator_types::Replacement;
use proptest::prelude::*;

fn arb_replacements() -> impl Strategy<Value = Vec<Replacement>> {
    prop::collection::vec(
        (0usize..4096, 0usize..64, "[ -~\\n\\t]{0,24}").prop_map(|(offset, remove, text)| {
            Replacement {
                offset,
                remove,
                text,
            }
        }),
        0..16,
    )
}

proptest! {
    #[test]
    fn rendered_remap_parses_back(reps in arb_replacements()) {
        let text = render_remap(Some("main.swift"), &reps).expect("render");
        let parsed: Vec<Replacement> = parse_remap(&text)
            .expect("parse")
            .into_iter()
            .map(|e| Replacement::try_from(e).expect("convert"))
            .collect();
        prop_assert_eq!(parsed, reps);
    }

    #[test]
    fn rendering_is_deterministic(reps in arb_replacements()) {
        let a = render_remap(None, &reps).expect("render");
        let b = render_remap(None, &reps).expect("render");
        prop_assert_eq!(a, b);
    }
}
