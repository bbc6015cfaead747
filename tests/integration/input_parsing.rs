// tests/integration/input_parsing.rs

use simdag::dag::Precedence;
use simdag::errors::SimdagError;
use simdag::fs::mock::MockFileSystem;
use simdag::input::{load_facts, parse_facts, parse_record, InputSource};
use simdag_test_utils::builders::{record_line, FactsBuilder, SAMPLE_FACTS};

#[test]
fn record_yields_ids_at_fixed_token_positions() {
    let fact = parse_record("Step C must be finished before step A can begin.", 1).unwrap();
    assert_eq!(fact, Precedence::new("C", "A"));
}

#[test]
fn surrounding_words_are_not_checked() {
    let fact = parse_record("Job X1 should be complete before job Y2 may start.", 1).unwrap();
    assert_eq!(fact, Precedence::new("X1", "Y2"));
}

#[test]
fn facts_keep_input_order_and_skip_blank_lines() {
    let text = format!(
        "{}\n\n   \n{}\n",
        record_line("B", "C"),
        record_line("A", "B")
    );

    let facts = parse_facts(&text).unwrap();
    assert_eq!(facts, vec![Precedence::new("B", "C"), Precedence::new("A", "B")]);
}

#[test]
fn builder_text_round_trips_through_parser() {
    let builder = FactsBuilder::from_pairs(SAMPLE_FACTS);
    let facts = parse_facts(&builder.to_input()).unwrap();
    assert_eq!(facts, builder.build());
}

#[test]
fn wrong_token_count_reports_line_number() {
    let text = format!("{}\nStep A must be finished\n", record_line("C", "A"));

    match parse_facts(&text) {
        Err(SimdagError::InputFormat { line, reason }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("expected 10 tokens, found 5"));
        }
        other => panic!("Expected InputFormat error, got: {:?}", other),
    }
}

#[test]
fn too_many_tokens_is_also_malformed() {
    let line = format!("{} extra", record_line("C", "A"));
    assert!(matches!(
        parse_record(&line, 7),
        Err(SimdagError::InputFormat { line: 7, .. })
    ));
}

#[test]
fn load_facts_reads_files_through_the_filesystem() {
    let fs = MockFileSystem::new();
    fs.add_file("facts.txt", FactsBuilder::from_pairs(SAMPLE_FACTS).to_input());

    let facts = load_facts(&InputSource::from_arg("facts.txt"), &fs).unwrap();
    assert_eq!(facts.len(), SAMPLE_FACTS.len());
    assert_eq!(facts[0], Precedence::new("C", "A"));
}

#[test]
fn missing_input_file_is_an_error() {
    let fs = MockFileSystem::new();
    let result = load_facts(&InputSource::from_arg("nope.txt"), &fs);
    assert!(matches!(result, Err(SimdagError::Other(_))));
}

#[test]
fn dash_means_stdin() {
    assert_eq!(InputSource::from_arg("-"), InputSource::Stdin);
    assert_eq!(
        InputSource::from_arg("in.txt"),
        InputSource::File("in.txt".into())
    );
}
