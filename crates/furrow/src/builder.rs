//! Tree builder.
//!
//! Building runs in two passes. [`segment`] cuts the flat token stream into
//! one run per feature, moving tags that trail a run onto the feature that
//! follows. Each run is then assembled by a single forward scan: tags wait in
//! a pending buffer until the next taggable node claims them, steps go to the
//! open container, and rows or multiline blocks attach to the most recent
//! step (or to the open examples table).

mod segment;

use furrow_keywords::StepKeyword;
use tracing::{debug, instrument};

use crate::ast::{
    Background, Examples, Feature, Row, Scenario, ScenarioItem, ScenarioOutline, Step,
    StepArgument, Tag,
};
use crate::token::{Token, TokenKind};

pub use segment::{feature_positions, segment};

/// Assemble `tokens` into feature trees, in source order.
///
/// A stream without a `feature` token yields an empty result.
///
/// # Examples
/// ```
/// use furrow::{Tokenizer, builder};
/// use furrow_keywords::KeywordTable;
///
/// let table = KeywordTable::builtin();
/// let tokens = Tokenizer::new(&table)
///     .tokenize_str("@wip\nFeature: Reading\n  Scenario: One\n    Given a step")
///     .unwrap();
/// let features = builder::build(tokens);
/// assert_eq!(features.len(), 1);
/// assert_eq!(features[0].name, "Reading");
/// assert_eq!(features[0].tags[0].name, "wip");
/// ```
#[must_use]
#[instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn build(tokens: Vec<Token>) -> Vec<Feature> {
    segment(tokens)
        .into_iter()
        .filter_map(|run| {
            let mut assembler = Assembler::default();
            for token in run {
                assembler.push(token);
            }
            assembler.finish()
        })
        .collect()
}

/// Container currently receiving steps.
#[derive(Debug)]
enum Open {
    Background(Background),
    Scenario(Scenario),
    Outline(ScenarioOutline),
}

impl Open {
    fn steps_mut(&mut self) -> &mut Vec<Step> {
        match self {
            Self::Background(background) => &mut background.steps,
            Self::Scenario(scenario) => &mut scenario.steps,
            Self::Outline(outline) => &mut outline.steps,
        }
    }
}

/// Where the next row token goes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum RowTarget {
    #[default]
    Step,
    Examples,
}

/// Forward-scan state for one feature run.
#[derive(Debug, Default)]
struct Assembler {
    feature: Option<Feature>,
    tags: Vec<Tag>,
    open: Option<Open>,
    rows: RowTarget,
    previous_step: Option<StepKeyword>,
}

impl Assembler {
    fn push(&mut self, token: Token) {
        match token.kind {
            TokenKind::Tag => self.tags.push(Tag::new(token.text)),
            TokenKind::Feature => {
                let tags = std::mem::take(&mut self.tags);
                self.feature = Some(Feature::new(token.keyword, token.text, tags));
            }
            TokenKind::FeatureDescription => match self.feature.as_mut() {
                Some(feature) => feature.description = Some(token.text),
                None => debug!(line = token.line, "dropping description without feature"),
            },
            TokenKind::Background => {
                let tags = std::mem::take(&mut self.tags);
                self.open_container(Open::Background(Background {
                    keyword: token.keyword,
                    name: token.text,
                    tags,
                    steps: Vec::new(),
                }));
            }
            TokenKind::Scenario => {
                let tags = std::mem::take(&mut self.tags);
                self.open_container(Open::Scenario(Scenario {
                    keyword: token.keyword,
                    name: token.text,
                    tags,
                    steps: Vec::new(),
                }));
            }
            TokenKind::ScenarioOutline => {
                let tags = std::mem::take(&mut self.tags);
                self.open_container(Open::Outline(ScenarioOutline {
                    keyword: token.keyword,
                    name: token.text,
                    tags,
                    steps: Vec::new(),
                    examples: Vec::new(),
                }));
            }
            TokenKind::Examples => self.push_examples(token),
            TokenKind::Step(family) => self.push_step(token, family),
            TokenKind::Row => self.push_row(&token),
            TokenKind::Multiline => match self.last_step() {
                Some(step) => step.arguments.push(StepArgument::Multiline(token.text)),
                None => debug!(line = token.line, "dropping multiline block without step"),
            },
        }
    }

    fn open_container(&mut self, next: Open) {
        self.close_container();
        self.open = Some(next);
        self.rows = RowTarget::Step;
        self.previous_step = None;
    }

    fn close_container(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };
        let Some(feature) = self.feature.as_mut() else {
            debug!("dropping container without feature");
            return;
        };
        match open {
            Open::Background(background) => {
                if feature.background.is_some() {
                    debug!(name = %background.name, "replacing earlier background");
                }
                feature.background = Some(background);
            }
            Open::Scenario(scenario) => feature.scenarios.push(ScenarioItem::Scenario(scenario)),
            Open::Outline(outline) => feature.scenarios.push(ScenarioItem::Outline(outline)),
        }
    }

    fn push_examples(&mut self, token: Token) {
        let tags = std::mem::take(&mut self.tags);
        let Some(Open::Outline(outline)) = self.open.as_mut() else {
            debug!(line = token.line, "dropping examples outside a scenario outline");
            self.rows = RowTarget::Examples;
            return;
        };
        outline.examples.push(Examples {
            keyword: token.keyword,
            name: token.text,
            tags,
            rows: Vec::new(),
        });
        self.rows = RowTarget::Examples;
    }

    fn push_step(&mut self, token: Token, family: StepKeyword) {
        let Some(open) = self.open.as_mut() else {
            debug!(line = token.line, "dropping step without container");
            return;
        };
        let step_type = family.resolve(&mut self.previous_step);
        open.steps_mut()
            .push(Step::new(token.keyword, token.text, family, step_type));
        self.rows = RowTarget::Step;
    }

    fn push_row(&mut self, token: &Token) {
        let row = Row::parse(&token.text);
        match self.rows {
            RowTarget::Examples => match self.open.as_mut() {
                Some(Open::Outline(outline)) => match outline.examples.last_mut() {
                    Some(examples) => examples.rows.push(row),
                    None => debug!(line = token.line, "dropping row without examples"),
                },
                _ => debug!(line = token.line, "dropping row of discarded examples"),
            },
            RowTarget::Step => match self.last_step() {
                Some(step) => step.arguments.push(StepArgument::Row(row)),
                None => debug!(line = token.line, "dropping row without step"),
            },
        }
    }

    fn last_step(&mut self) -> Option<&mut Step> {
        self.open.as_mut().and_then(|open| open.steps_mut().last_mut())
    }

    fn finish(mut self) -> Option<Feature> {
        self.close_container();
        if !self.tags.is_empty() {
            debug!(tags = self.tags.len(), "dropping tags with no following node");
        }
        self.feature
    }
}

#[cfg(test)]
mod tests;
