//! Randomized wrap/unwrap round trips over many disjoint selections.

use codewrap_core::{LineBuffer, LineRange, RopeBuffer, ToggleEngine};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const POOL: &[&str] = &[
    "let value = compute()",
    "    print(value)",
    "\tassert(value > 0)",
    "if ready {",
    "}",
    "let items = [1, 2, 3]",
    "call(a, b)",
    "// note",
];

fn random_lines(rng: &mut StdRng, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{} // {i}", POOL[rng.gen_range(0..POOL.len())]))
        .collect()
}

fn random_selections(rng: &mut StdRng, line_count: usize) -> Vec<LineRange> {
    let mut selections = Vec::new();
    let mut cursor = 0;
    loop {
        cursor += rng.gen_range(0..3);
        let len = rng.gen_range(1..=4);
        if cursor + len > line_count {
            break;
        }
        selections.push(LineRange::new(cursor, cursor + len - 1));
        cursor += len;
    }
    selections.shuffle(rng);
    selections
}

#[test]
fn test_random_wrap_unwrap_is_identity() {
    let engine = ToggleEngine::default();
    let mut rng = StdRng::seed_from_u64(0x00c0_dedb);

    for _ in 0..200 {
        let line_count = rng.gen_range(1..60);
        let original = random_lines(&mut rng, line_count);
        let selections = random_selections(&mut rng, line_count);

        let mut buffer = original.clone();
        let applied = engine.toggle(&mut buffer, &selections).unwrap();
        assert_eq!(applied.wrapped, selections.len());
        assert_eq!(buffer.len(), line_count + 2 * selections.len());

        // Each selection keeps its text after moving.
        for (before, after) in selections.iter().zip(&applied.selections) {
            assert_eq!(&original[before.start..=before.end], &buffer[after.start..=after.end]);
            assert_eq!(buffer[after.start - 1], "#if DEBUG");
            assert_eq!(buffer[after.end + 1], "#endif");
        }

        let reverted = engine.toggle(&mut buffer, &applied.selections).unwrap();
        assert_eq!(reverted.unwrapped, selections.len());
        assert_eq!(buffer, original);
        assert_eq!(reverted.selections, selections);
    }
}

#[test]
fn test_rope_and_vec_buffers_agree() {
    let engine = ToggleEngine::default();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let line_count = rng.gen_range(1..40);
        let original = random_lines(&mut rng, line_count);
        let selections = random_selections(&mut rng, line_count);

        let mut lines = original.clone();
        let mut rope = RopeBuffer::from_text(&original.join("\n"));

        let from_vec = engine.toggle(&mut lines, &selections).unwrap();
        let from_rope = engine.toggle(&mut rope, &selections).unwrap();

        assert_eq!(from_vec, from_rope);
        assert_eq!(rope.line_count(), lines.len());
        assert_eq!(rope.to_text(), lines.join("\n"));
    }
}
