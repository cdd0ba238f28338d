//! End-to-end tests reading the fixture documents under `tests/features`.

use std::path::PathBuf;

use furrow::{
    Definition, Feature, KeywordTable, StepKeyword, StepsContainer, Taggable, Token, Tokenizer,
    dump, parse,
};
use rstest::{fixture, rstest};

fn fixture_source(name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "features", name]
        .iter()
        .collect();
    std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("reading {}: {err}", path.display()))
}

#[fixture]
fn table() -> KeywordTable {
    KeywordTable::builtin()
}

fn tokens(table: &KeywordTable, name: &str) -> Vec<Token> {
    Tokenizer::new(table)
        .tokenize_str(&fixture_source(name))
        .unwrap_or_else(|err| panic!("tokenizing {name}: {err}"))
}

fn features(table: &KeywordTable, name: &str) -> Vec<Feature> {
    parse(&fixture_source(name), table).unwrap_or_else(|err| panic!("parsing {name}: {err}"))
}

fn tag_names(node: &impl Taggable) -> Vec<&str> {
    node.tags().iter().map(|tag| tag.name.as_str()).collect()
}

#[rstest]
fn tokenizes_complex_document(table: KeywordTable) {
    let tokens = tokens(&table, "complex.feature");
    let actual: Vec<(&str, &str, usize)> = tokens
        .iter()
        .map(|token| (token.kind.name(), token.text.as_str(), token.line))
        .collect();
    let expected = [
        ("tag", "tag1", 2),
        ("tag", "tag2", 2),
        ("feature", "Feature Text", 3),
        (
            "feature_description",
            "In order to test multiline forms\nAs a ragel writer\nI need to check for complex combinations",
            4,
        ),
        ("background", "", 12),
        ("step", "this is a background step", 13),
        ("step", "this is another one", 14),
        ("tag", "tag3", 16),
        ("tag", "tag4", 16),
        ("scenario", "Reading a Scenario", 17),
        ("step", "there is a step", 18),
        ("step", "not another step", 19),
        ("tag", "tag3", 21),
        ("scenario", "Reading a second scenario", 22),
        ("step", "a third step with a table", 24),
        ("row", "|a|b|", 25),
        ("row", "|c|d|", 26),
        ("row", "|e|f|", 27),
        ("step", "I am still testing things", 28),
        ("row", "|g|h|", 29),
        ("row", "|e|r|", 30),
        ("row", "|k|i|", 31),
        ("row", "|n||", 32),
        ("step", "I am done testing these tables", 33),
        ("step", "I am happy", 35),
        ("scenario", "Hammerzeit", 37),
        ("step", "All work and no play", 38),
        (
            "multiline",
            "Makes Homer something something\nAnd something else",
            39,
        ),
        ("step", "crazy", 43),
    ];
    assert_eq!(actual, expected);
}

#[rstest]
fn builds_complex_document(table: KeywordTable) {
    let features = features(&table, "complex.feature");
    let [feature] = features.as_slice() else {
        panic!("expected one feature, got {}", features.len());
    };
    assert_eq!(feature.name(), "Feature Text");
    assert_eq!(tag_names(feature), ["tag1", "tag2"]);
    assert_eq!(
        feature.description.as_deref(),
        Some("In order to test multiline forms\nAs a ragel writer\nI need to check for complex combinations")
    );

    let background = feature
        .background
        .as_ref()
        .unwrap_or_else(|| panic!("background missing"));
    assert_eq!(background.steps.len(), 2);

    let summary: Vec<(&str, Vec<&str>, usize)> = feature
        .scenarios
        .iter()
        .map(|item| (item.name(), tag_names(item), item.steps().len()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Reading a Scenario", vec!["tag3", "tag4"], 2),
            ("Reading a second scenario", vec!["tag3"], 4),
            ("Hammerzeit", Vec::new(), 2),
        ]
    );

    let second = feature
        .scenarios
        .get(1)
        .unwrap_or_else(|| panic!("second scenario missing"));
    let row_counts: Vec<usize> = second.steps().iter().map(|s| s.rows().count()).collect();
    assert_eq!(row_counts, [3, 4, 0, 0]);
    let types: Vec<StepKeyword> = second.steps().iter().map(|s| s.step_type).collect();
    assert_eq!(
        types,
        [
            StepKeyword::Given,
            StepKeyword::Given,
            StepKeyword::Given,
            StepKeyword::Then
        ]
    );

    let hammerzeit = feature
        .scenarios
        .get(2)
        .and_then(|item| item.steps().first())
        .and_then(|step| step.multiline());
    assert_eq!(
        hammerzeit,
        Some("Makes Homer something something\nAnd something else")
    );
}

#[rstest]
fn dumps_complex_document(table: KeywordTable) {
    let expected = concat!(
        "Feature: Feature Text [@tag1 @tag2]\n",
        "  In order to test multiline forms\n",
        "  As a ragel writer\n",
        "  I need to check for complex combinations\n",
        "  Background:\n",
        "    Given this is a background step\n",
        "    And this is another one\n",
        "  Scenario: Reading a Scenario [@tag3 @tag4]\n",
        "    Given there is a step\n",
        "    But not another step\n",
        "  Scenario: Reading a second scenario [@tag3]\n",
        "    Given a third step with a table\n",
        "      | a | b |\n",
        "      | c | d |\n",
        "      | e | f |\n",
        "    And I am still testing things\n",
        "      | g | h |\n",
        "      | e | r |\n",
        "      | k | i |\n",
        "      | n |  |\n",
        "    And I am done testing these tables\n",
        "    Then I am happy\n",
        "  Scenario: Hammerzeit\n",
        "    Given All work and no play\n",
        "      \"\"\"\n",
        "      Makes Homer something something\n",
        "      And something else\n",
        "      \"\"\"\n",
        "    Then crazy\n",
    );
    assert_eq!(dump::render(&features(&table, "complex.feature")), expected);
}

#[rstest]
fn reads_french_document(table: KeywordTable) {
    let features = features(&table, "french.feature");
    let [feature] = features.as_slice() else {
        panic!("expected one feature, got {}", features.len());
    };
    assert_eq!(feature.keyword(), "Fonctionnalité");
    assert_eq!(feature.name(), "Lecture des fichiers");
    assert_eq!(tag_names(feature), ["lecture"]);
    assert_eq!(
        feature.description.as_deref(),
        Some("Afin de vérifier la langue\nEn tant que lecteur")
    );
    assert_eq!(
        feature.background.as_ref().map(|b| b.keyword.as_str()),
        Some("Contexte")
    );

    let outline = feature
        .scenarios
        .first()
        .and_then(|item| item.as_outline())
        .unwrap_or_else(|| panic!("outline missing"));
    assert_eq!(outline.keyword, "Plan du scénario");
    let steps: Vec<(&str, &str, StepKeyword)> = outline
        .steps
        .iter()
        .map(|s| (s.keyword.as_str(), s.name.as_str(), s.step_type))
        .collect();
    assert_eq!(
        steps,
        [
            ("Étant donné qu'", "il y a <nombre> concombres", StepKeyword::Given),
            ("Quand", "j'en mange <mange>", StepKeyword::When),
            ("Alors", "il en reste <reste>", StepKeyword::Then),
        ]
    );
    let examples = outline
        .examples
        .first()
        .unwrap_or_else(|| panic!("examples missing"));
    assert_eq!(examples.keyword, "Exemples");
    assert_eq!(examples.rows.len(), 2);
}

#[rstest]
fn splits_multiple_features(table: KeywordTable) {
    let features = features(&table, "multiple.feature");
    let summary: Vec<(&str, Vec<&str>)> = features
        .iter()
        .map(|feature| (feature.name(), tag_names(feature)))
        .collect();
    assert_eq!(
        summary,
        vec![("First", Vec::new()), ("Second", vec!["second", "tagged"])]
    );
}

#[rstest]
#[case("complex.feature")]
#[case("french.feature")]
#[case("multiple.feature")]
fn tokenizing_fixtures_is_deterministic(table: KeywordTable, #[case] name: &str) {
    assert_eq!(tokens(&table, name), tokens(&table, name));
}
