//! Property tests for the parse/format round trip.

use proptest::prelude::*;
use x12path::path::{parse, PathValue};

fn loop_id() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{4}[A-Z]{0,2}", "[A-Z]{2,3}", "[A-Z]{3}_LOOP"]
}

prop_compose! {
    fn canonical_path()(
        absolute in any::<bool>(),
        loops in prop::collection::vec(loop_id(), 0..4),
        segment in prop::option::of("[A-Z][A-Z0-9]{1,2}"),
        qualifier in prop::option::of("[A-Z0-9]{1,4}"),
        element in prop::option::of(0u32..100),
        subelement in prop::option::of(0u64..1000),
    ) -> PathValue {
        let mut builder = PathValue::builder();
        if absolute {
            builder = builder.absolute();
        }
        for id in loops.iter() {
            builder = builder.push_loop(id.clone());
        }
        if let Some(seg) = segment.clone() {
            builder = builder.segment(seg);
            if let Some(qual) = qualifier {
                builder = builder.qualifier(qual);
            }
        }
        // Bare element references are only legal without loops
        if segment.is_some() || loops.is_empty() {
            if let Some(idx) = element {
                builder = builder.element(idx);
            }
            if let Some(idx) = subelement {
                builder = builder.subelement(idx);
            }
        }
        builder.build().unwrap()
    }
}

proptest! {
    #[test]
    fn format_then_parse_gives_same_path(path in canonical_path()) {
        let text = path.format();
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(&reparsed, &path);
        prop_assert_eq!(reparsed.format(), text);
    }
}
