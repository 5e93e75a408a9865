#![no_main]

use libfuzzer_sys::fuzz_target;

use fibscroll_core::{format_term, ColorMapper, SequenceEvaluator};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First 2 bytes as a signed index, which spans the overflow boundary on both sides
    let index = i64::from(i16::from_le_bytes([data[0], data[1]]));

    let mut evaluator = SequenceEvaluator::new();
    let term = evaluator.evaluate(index);
    assert!(!term.is_nan(), "F({index}) is NaN");

    // Sign rule for negative indices: F(-n) = (-1)^(n+1) F(n)
    if index < 0 {
        let mirror = evaluator.evaluate(-index);
        let expected = if index % 2 == 0 { -mirror } else { mirror };
        assert_eq!(term, expected, "F({index})");
    }

    let text = format_term(index, term);
    assert!(!text.is_empty());

    // Should not panic
    let _ = ColorMapper::new().colors_for(index, &mut evaluator);
});
