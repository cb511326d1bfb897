use codewrap_core::{LineRange, RopeBuffer, ToggleEngine, ToggleError, ToggleOptions};

fn main() {
    let source = "\
import Foundation

func load() {
    let data = fetch()
    print(\"loaded \\(data.count) bytes\")
    store(data)
}
";
    let mut buffer = RopeBuffer::from_text(source);
    let engine = ToggleEngine::default();

    // Wrap the print statement.
    let applied = engine
        .toggle(&mut buffer, &[LineRange::single(4)])
        .unwrap();
    assert_eq!(applied.selections, vec![LineRange::single(5)]);
    println!("{}", buffer.to_text());

    // Toggle the moved selection to remove the wrapper again.
    engine.toggle(&mut buffer, &applied.selections).unwrap();
    assert_eq!(buffer.to_text(), source);

    // With the brace guard on, selecting the opening line of a block is refused.
    let strict = ToggleEngine::default().with_options(ToggleOptions::strict());
    let err = strict
        .toggle(&mut buffer, &[LineRange::new(2, 3)])
        .unwrap_err();
    assert!(matches!(err, ToggleError::ContainsUnbalancedBrace { .. }));
    println!("{err}");
}
