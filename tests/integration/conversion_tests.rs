//! Conversion, detection and cycling through the public API

use case_cycle::engine::{fast_path, render};
use case_cycle::{convert, convert_full, cycle, detect, tokenize, Convention, CYCLE_ORDER};
use convert_case::{Case, Casing};

/// Inputs covering every convention plus degenerate text
const SAMPLES: &[&str] = &[
    "myVariableName",
    "MyVariableName",
    "my_variable_name",
    "MY_VARIABLE_NAME",
    "my-variable-name",
    "myvariablename",
    "foo",
    "x",
    "X",
    "Ab",
    "HTTPServer",
    "getHTTPResponse",
    "foo_bar-baz qux",
    "  spaced   out  ",
    "__private",
    "",
    "___",
    "12345",
    "foo.bar",
];

/// Word lists used for detection round trips
const WORD_LISTS: &[&[&str]] = &[
    &["my", "variable", "name"],
    &["get", "user", "by", "id"],
    &["parse", "json"],
    &["to", "string"],
    &["max", "size2"],
];

#[test]
fn test_concrete_scenarios() {
    assert_eq!(convert("myVariableName", Convention::SnakeCase), "my_variable_name");
    assert_eq!(convert("my_variable_name", Convention::PascalCase), "MyVariableName");
    assert_eq!(convert("MY_CONST", Convention::CamelCase), "myConst");

    let step = cycle("foo");
    assert_eq!(step.from, Some(Convention::LowerCase));
    assert_eq!(step.to, Convention::CamelCase);
    assert_eq!(step.output, "foO");

    assert_eq!(detect("kebab-case-example"), Some(Convention::KebabCase));
    assert_eq!(detect("UPPER_CASE"), Some(Convention::UpperCase));
}

#[test]
fn test_single_letter_fixtures() {
    // A lone uppercase letter matches the UPPER_CASE rule first
    assert_eq!(detect("X"), Some(Convention::UpperCase));
    // A lone lowercase letter matches no rule
    assert_eq!(detect("x"), None);

    let step = cycle("x");
    assert_eq!(step.from, None);
    assert_eq!(step.to, Convention::PascalCase);
    assert_eq!(step.output, "X");

    let step = cycle("X");
    assert_eq!(step.from, Some(Convention::UpperCase));
    assert_eq!(step.to, Convention::KebabCase);
    assert_eq!(step.output, "x");

    assert_eq!(convert("x", Convention::CamelCase), "x");
    assert_eq!(convert("A", Convention::CamelCase), "a");
}

#[test]
fn test_separator_normalization() {
    assert_eq!(tokenize("foo_bar-baz qux"), ["foo", "bar", "baz", "qux"]);
    assert_eq!(convert("foo_bar-baz qux", Convention::KebabCase), "foo-bar-baz-qux");
    assert_eq!(convert("foo_bar-baz qux", Convention::UpperCase), "FOO_BAR_BAZ_QUX");
}

#[test]
fn test_conversion_is_idempotent() {
    for input in SAMPLES {
        for target in CYCLE_ORDER {
            let once = convert(input, target);
            assert_eq!(
                render(&tokenize(&once), target),
                once,
                "{input:?} -> {target}"
            );
            assert_eq!(convert(&once, target), once, "{input:?} -> {target} twice");
        }
    }
}

#[test]
fn test_fast_path_is_equivalent() {
    for input in SAMPLES {
        for target in CYCLE_ORDER {
            assert_eq!(
                convert(input, target),
                convert_full(input, target),
                "{input:?} -> {target}"
            );
            if let Some(fast) = fast_path(input, target) {
                assert_eq!(fast, convert_full(input, target));
            }
        }
    }
}

#[test]
fn test_detection_round_trip() {
    for &words in WORD_LISTS {
        for target in CYCLE_ORDER {
            let rendered = render(words, target);
            assert_eq!(detect(&rendered), Some(target), "{words:?} as {target}: {rendered}");
        }
    }
}

#[test]
fn test_detection_round_trip_ambiguous_single_words() {
    // One word collapses lowercase/snake/kebab and UPPER_CASE/PascalCase
    assert_eq!(detect(&render(&["word"], Convention::SnakeCase)), Some(Convention::LowerCase));
    assert_eq!(detect(&render(&["word"], Convention::KebabCase)), Some(Convention::LowerCase));
    assert_eq!(detect(&render(&["word"], Convention::PascalCase)), Some(Convention::PascalCase));
    assert_eq!(detect(&render(&["word"], Convention::CamelCase)), Some(Convention::CamelCase));
    // No lowercase letters left after capitalizing
    assert_eq!(detect(&render(&["a"], Convention::PascalCase)), Some(Convention::UpperCase));
}

#[test]
fn test_cycle_has_period_six() {
    // Multi-letter words only; one-word and one-letter walks skip steps
    for start in ["foo", "myVariableName", "MyVariableName", "my_variable_name", "MY_VAR", "my-var"] {
        let mut text = start.to_string();
        let mut seen = Vec::new();
        for _ in 0..6 {
            let step = cycle(&text);
            seen.push(step.to);
            text = step.output;
        }

        let detected = detect(start).expect("fixture has a known convention");
        let expected: Vec<_> = (1..=6)
            .map(|i| CYCLE_ORDER[(detected.cycle_index() + i) % 6])
            .collect();
        assert_eq!(seen, expected, "{start}");
        assert_eq!(detect(&text), Some(detected), "{start} -> {text}");
    }
}

#[test]
fn test_cycle_full_walk() {
    let outputs: Vec<String> = std::iter::successors(Some(cycle("foo")), |step| {
        Some(cycle(&step.output))
    })
    .take(6)
    .map(|step| step.output)
    .collect();

    assert_eq!(outputs, ["foO", "FoO", "fo_o", "FO_O", "fo-o", "foo"]);
}

#[test]
fn test_cycle_through_lowercase_is_lossy() {
    // Word boundaries cannot survive the lowercase step
    let mut text = "myVariableName".to_string();
    for _ in 0..6 {
        text = cycle(&text).output;
    }
    assert_eq!(text, "myvariablenamE");
}

#[test]
fn test_matches_convert_case_for_multi_word_input() {
    let cases = [
        (Convention::CamelCase, Case::Camel),
        (Convention::PascalCase, Case::Pascal),
        (Convention::SnakeCase, Case::Snake),
        (Convention::KebabCase, Case::Kebab),
    ];

    for input in ["user_account_id", "user-account-id", "userAccountId", "UserAccountId"] {
        for (convention, case) in cases {
            assert_eq!(convert(input, convention), input.to_case(case), "{input} -> {convention}");
        }
    }
}

#[test]
fn test_single_letter_words_are_not_idempotent() {
    // A one-letter word after a capital loses its boundary on the next pass
    assert_eq!(convert("a b c", Convention::PascalCase), "ABC");
    assert_eq!(convert("ABC", Convention::PascalCase), "Abc");
    assert_eq!(render(&tokenize("ABC"), Convention::PascalCase), "Abc");

    assert_eq!(convert("x_y_z", Convention::CamelCase), "xYZ");
    assert_eq!(convert("xYZ", Convention::CamelCase), "xYz");
    assert_eq!(render(&tokenize("xYZ"), Convention::CamelCase), "xYz");

    // Separated conventions keep single letters intact
    assert_eq!(convert("a b c", Convention::SnakeCase), "a_b_c");
    assert_eq!(convert("a_b_c", Convention::SnakeCase), "a_b_c");
}

/// Conventions visited and final text after six cycles from `start`
fn walk_six(start: &str) -> (Vec<Convention>, String) {
    let mut text = start.to_string();
    let mut seen = Vec::new();
    for _ in 0..6 {
        let step = cycle(&text);
        seen.push(step.to);
        text = step.output;
    }
    (seen, text)
}

#[test]
fn test_cycle_single_word_pascal_skips_steps() {
    // snake_case of one word reads back as lowercase
    let (seen, text) = walk_six("Foo");
    assert_eq!(
        seen,
        [
            Convention::SnakeCase,
            Convention::CamelCase,
            Convention::PascalCase,
            Convention::SnakeCase,
            Convention::UpperCase,
            Convention::KebabCase,
        ]
    );
    assert_eq!(text, "fo-o");
    assert_eq!(detect(&text), Some(Convention::KebabCase));
}

#[test]
fn test_cycle_two_letter_words_skip_steps() {
    // PascalCase "AB" reads back as UPPER_CASE
    let (seen, text) = walk_six("a_b");
    assert_eq!(
        seen,
        [
            Convention::UpperCase,
            Convention::KebabCase,
            Convention::LowerCase,
            Convention::CamelCase,
            Convention::PascalCase,
            Convention::KebabCase,
        ]
    );
    assert_eq!(text, "ab");
    assert_eq!(detect(&text), Some(Convention::LowerCase));
}
