//! Tests for segmentation and tree assembly.

use super::*;
use crate::ast::{Definition, StepsContainer, Taggable};
use crate::tokenizer::Tokenizer;
use furrow_keywords::KeywordTable;
use rstest::{fixture, rstest};

fn tok(kind: TokenKind, keyword: &str, text: &str) -> Token {
    Token::new(kind, keyword, text, 0)
}

fn tag(name: &str) -> Token {
    tok(TokenKind::Tag, "@", name)
}

fn feature(name: &str) -> Token {
    tok(TokenKind::Feature, "Feature", name)
}

fn step(family: StepKeyword, text: &str) -> Token {
    tok(TokenKind::Step(family), family.as_str(), text)
}

fn tag_names(node: &impl Taggable) -> Vec<&str> {
    node.tags().iter().map(|tag| tag.name.as_str()).collect()
}

fn step_names(node: &impl StepsContainer) -> Vec<&str> {
    node.steps().iter().map(|step| step.name.as_str()).collect()
}

#[fixture]
fn table() -> KeywordTable {
    KeywordTable::builtin()
}

fn parse(table: &KeywordTable, source: &str) -> Vec<Feature> {
    match Tokenizer::new(table).tokenize_str(source) {
        Ok(tokens) => build(tokens),
        Err(err) => panic!("tokenizing {source:?} failed: {err}"),
    }
}

fn only(features: &[Feature]) -> &Feature {
    match features {
        [feature] => feature,
        other => panic!("expected one feature, got {}", other.len()),
    }
}

fn scenario_at(feature: &Feature, index: usize) -> &ScenarioItem {
    feature
        .scenarios
        .get(index)
        .unwrap_or_else(|| panic!("no scenario at {index}"))
}

#[test]
fn builds_lone_feature() {
    let features = build(vec![feature("Testing")]);
    let feature = only(&features);
    assert_eq!(feature.keyword(), "Feature");
    assert_eq!(feature.name(), "Testing");
    assert_eq!(feature.key_type(), TokenKind::Feature);
    assert!(feature.description.is_none());
    assert!(feature.background.is_none());
    assert!(feature.scenarios.is_empty());
}

#[test]
fn stream_without_feature_builds_nothing() {
    assert!(build(vec![step(StepKeyword::Given, "Testing")]).is_empty());
    assert!(build(Vec::new()).is_empty());
}

#[test]
fn finds_feature_positions() {
    let run = || {
        vec![
            feature("Testing"),
            tok(TokenKind::FeatureDescription, "", "Feature Description"),
            tok(TokenKind::Scenario, "Scenario", "Hello World"),
            step(StepKeyword::Given, "I have test"),
            step(StepKeyword::When, "I run it"),
            step(StepKeyword::Then, "I failed"),
        ]
    };
    let mut tokens = run();
    tokens.extend(run());
    assert_eq!(feature_positions(&tokens), [0, 6]);
}

#[test]
fn segments_and_bubbles_tags_forward() {
    let tokens = vec![
        tag("wip"),
        feature("Testing"),
        tok(TokenKind::Scenario, "Scenario", "Hello World"),
        step(StepKeyword::Given, "I have test"),
        tag("wip"),
        feature("Testing"),
        tok(TokenKind::FeatureDescription, "", "Feature Description"),
        tag("javascript"),
        tok(TokenKind::Scenario, "Scenario", "Hello World"),
        step(StepKeyword::Given, "I have test"),
    ];
    let segments = segment(tokens);
    let kinds: Vec<Vec<&str>> = segments
        .iter()
        .map(|run| run.iter().map(|token| token.kind.name()).collect())
        .collect();
    assert_eq!(
        kinds,
        vec![
            vec!["tag", "feature", "scenario", "step"],
            vec![
                "tag",
                "feature",
                "feature_description",
                "tag",
                "scenario",
                "step"
            ],
        ]
    );
}

#[test]
fn segment_drops_leading_non_tag_tokens() {
    let tokens = vec![
        step(StepKeyword::Given, "stray"),
        tag("kept"),
        feature("F"),
    ];
    let segments = segment(tokens);
    let texts: Vec<Vec<&str>> = segments
        .iter()
        .map(|run| run.iter().map(|token| token.text.as_str()).collect())
        .collect();
    assert_eq!(texts, vec![vec!["kept", "F"]]);
}

#[test]
fn trailing_tags_at_end_of_document_are_dropped() {
    let features = build(vec![feature("F"), tag("orphan")]);
    assert!(only(&features).tags.is_empty());
}

#[rstest]
fn single_feature_yields_one_tree(table: KeywordTable) {
    let features = parse(&table, "Feature: X\n  Scenario: s\n    Given a");
    assert_eq!(only(&features).name, "X");
}

#[rstest]
#[case(1)]
#[case(3)]
fn scenario_tags_stay_on_scenario(table: KeywordTable, #[case] count: usize) {
    let tags: Vec<String> = (0..count).map(|n| format!("@t{n}")).collect();
    let source = format!(
        "@feat\nFeature: F\n  {}\n  Scenario: S\n    Given x",
        tags.join(" ")
    );
    let features = parse(&table, &source);
    let feature = only(&features);
    let expected: Vec<String> = (0..count).map(|n| format!("t{n}")).collect();
    assert_eq!(tag_names(scenario_at(feature, 0)), expected);
    assert_eq!(tag_names(feature), ["feat"]);
}

#[rstest]
fn background_keeps_written_step_order(table: KeywordTable) {
    let source = "Feature: F\n  Background:\n    Given first\n    And second\n  Scenario: S\n    When run";
    let features = parse(&table, source);
    let feature = only(&features);
    let background = feature
        .background
        .as_ref()
        .unwrap_or_else(|| panic!("background missing"));
    assert_eq!(step_names(background), ["first", "second"]);
    let types: Vec<_> = background.steps.iter().map(|s| s.step_type).collect();
    assert_eq!(types, [StepKeyword::Given, StepKeyword::Given]);
    assert_eq!(background.steps.get(1).map(|s| s.family), Some(StepKeyword::And));
    assert_eq!(step_names(scenario_at(feature, 0)), ["run"]);
}

#[rstest]
fn tagged_second_feature_keeps_its_tag(table: KeywordTable) {
    let source = "Feature: One\n  Scenario: a\n    Given x\n@second\nFeature: Two\n  Scenario: b\n    Given y";
    let features = parse(&table, source);
    let names: Vec<_> = features.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["One", "Two"]);
    let tags: Vec<Vec<&str>> = features.iter().map(tag_names).collect();
    assert_eq!(tags, vec![Vec::<&str>::new(), vec!["second"]]);
}

#[rstest]
fn steps_only_document_is_empty(table: KeywordTable) {
    assert!(parse(&table, "Given a\nWhen b\nThen c").is_empty());
}

#[rstest]
fn attaches_table_rows_to_step(table: KeywordTable) {
    let features = parse(&table, "Feature: F\nScenario: S\nThen x\n|h1|h2|\n|v1|v2|");
    let scenario = scenario_at(only(&features), 0);
    let step = scenario
        .steps()
        .first()
        .unwrap_or_else(|| panic!("step missing"));
    let rows: Vec<&[String]> = step.rows().map(|row| row.cells.as_slice()).collect();
    assert_eq!(rows, [["h1", "h2"], ["v1", "v2"]]);
}

#[rstest]
fn attaches_multiline_to_step(table: KeywordTable) {
    let source = "Feature: F\nScenario: S\nGiven a\n\"\"\"\nline1\nline2\n\"\"\"\nThen b";
    let features = parse(&table, source);
    let scenario = scenario_at(only(&features), 0);
    let multiline: Vec<_> = scenario.steps().iter().map(Step::multiline).collect();
    assert_eq!(multiline, [Some("line1\nline2"), None]);
}

#[rstest]
fn description_belongs_to_feature(table: KeywordTable) {
    let source = "Feature: F\n  As a reader\n  I want trees\n  Scenario: S\n    Given x";
    let features = parse(&table, source);
    assert_eq!(
        only(&features).description.as_deref(),
        Some("As a reader\nI want trees")
    );
}

#[rstest]
fn outline_collects_tagged_examples(table: KeywordTable) {
    let source = concat!(
        "Feature: F\n",
        "  Scenario Outline: eating\n",
        "    Given there are <start> cucumbers\n",
        "    When I eat <eat>\n",
        "    @fast\n",
        "    Examples: few\n",
        "      | start | eat |\n",
        "      | 12    | 5   |\n",
        "    Examples: many\n",
        "      | start | eat |\n",
        "      | 20    | 15  |\n",
    );
    let features = parse(&table, source);
    let item = scenario_at(only(&features), 0);
    let outline = item
        .as_outline()
        .unwrap_or_else(|| panic!("expected an outline"));
    assert_eq!(outline.steps.len(), 2);
    assert!(outline.steps.iter().all(|step| step.rows().next().is_none()));
    let blocks: Vec<_> = outline
        .examples
        .iter()
        .map(|examples| (examples.name.as_str(), tag_names(examples), examples.rows.len()))
        .collect();
    assert_eq!(
        blocks,
        vec![("few", vec!["fast"], 2), ("many", Vec::new(), 2)]
    );
    let last_row = outline
        .examples
        .get(1)
        .and_then(|examples| examples.rows.last());
    assert_eq!(last_row, Some(&Row::from_iter(["20", "15"])));
}

#[rstest]
fn examples_under_plain_scenario_are_dropped(table: KeywordTable) {
    let source = "Feature: F\nScenario: S\nGiven x\nExamples:\n|a|\n|1|";
    let features = parse(&table, source);
    let scenario = scenario_at(only(&features), 0);
    assert_eq!(step_names(scenario), ["x"]);
    assert!(scenario.steps().iter().all(|step| step.rows().next().is_none()));
}

#[rstest]
fn scenarios_and_outlines_keep_source_order(table: KeywordTable) {
    let source = concat!(
        "Feature: F\n",
        "Scenario: one\nGiven a\n",
        "Scenario Outline: two\nGiven <b>\nExamples:\n|b|\n|1|\n",
        "Scenario: three\nGiven c\n",
    );
    let features = parse(&table, source);
    let items: Vec<_> = only(&features)
        .scenarios
        .iter()
        .map(|item| (item.name(), item.key_type()))
        .collect();
    assert_eq!(
        items,
        [
            ("one", TokenKind::Scenario),
            ("two", TokenKind::ScenarioOutline),
            ("three", TokenKind::Scenario),
        ]
    );
}

#[rstest]
fn later_background_replaces_earlier(table: KeywordTable) {
    let source = "Feature: F\nBackground: first\nGiven a\nBackground: second\nGiven b";
    let features = parse(&table, source);
    let background = only(&features).background.as_ref();
    assert_eq!(background.map(|b| b.name.as_str()), Some("second"));
}

#[rstest]
fn resolves_conjunctions_per_container(table: KeywordTable) {
    let source = "Feature: F\nScenario: a\nWhen x\nBut y\nScenario: b\nAnd z";
    let features = parse(&table, source);
    let feature = only(&features);
    let types = |index| -> Vec<StepKeyword> {
        scenario_at(feature, index)
            .steps()
            .iter()
            .map(|step| step.step_type)
            .collect()
    };
    assert_eq!(types(0), [StepKeyword::When, StepKeyword::When]);
    assert_eq!(types(1), [StepKeyword::Given]);
}

#[rstest]
fn steps_before_any_container_are_dropped(table: KeywordTable) {
    let features = parse(&table, "Feature: F\nGiven loose\n|a|\nScenario: S\nThen kept");
    let feature = only(&features);
    assert_eq!(feature.scenarios.len(), 1);
    assert_eq!(step_names(scenario_at(feature, 0)), ["kept"]);
}
