//! Syntax tree produced by the tree builder.
//!
//! Nodes are plain owned values. The capability traits [`Definition`],
//! [`Taggable`] and [`StepsContainer`] give polymorphic read access across
//! node kinds; [`ScenarioItem`] is the closed union stored in a feature's
//! scenario list.

use furrow_keywords::StepKeyword;

use crate::row::split_cells;
use crate::token::TokenKind;

/// Keyword, name and originating token kind shared by every node.
pub trait Definition {
    /// Literal keyword as written in the source.
    fn keyword(&self) -> &str;
    /// Payload text following the keyword.
    fn name(&self) -> &str;
    /// Token kind the node was built from.
    fn key_type(&self) -> TokenKind;
}

/// Nodes carrying tags.
pub trait Taggable {
    /// Tags in source order.
    fn tags(&self) -> &[Tag];

    /// Return `true` when a tag named `name` (without `@`) is present.
    fn has_tag(&self, name: &str) -> bool {
        self.tags().iter().any(|tag| tag.name == name)
    }
}

/// Nodes owning an ordered list of steps.
pub trait StepsContainer {
    /// Steps in source order.
    fn steps(&self) -> &[Step];
}

/// `@word` annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tag {
    /// Tag word without the `@`.
    pub name: String,
}

impl Tag {
    /// Create a tag from its bare word.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Definition for Tag {
    fn keyword(&self) -> &str {
        "@"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn key_type(&self) -> TokenKind {
        TokenKind::Tag
    }
}

/// One table line split into cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Row {
    /// Trimmed cell contents.
    pub cells: Vec<String>,
}

impl Row {
    /// Parse a `|a|b|` line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        Self {
            cells: split_cells(line),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Payload attached to a step after its line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum StepArgument {
    /// Triple-quoted block, delimiters stripped.
    Multiline(String),
    /// One data table row.
    Row(Row),
}

/// One step line with its attachments.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step {
    /// Keyword as written, including conjunctions such as `And`.
    pub keyword: String,
    /// Step text.
    pub name: String,
    /// Keyword family as written.
    pub family: StepKeyword,
    /// Family with `And`/`But` resolved against the preceding steps.
    pub step_type: StepKeyword,
    /// Multiline block and rows, in source order.
    pub arguments: Vec<StepArgument>,
}

impl Step {
    /// Create a step whose conjunctions resolve to `step_type`.
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        name: impl Into<String>,
        family: StepKeyword,
        step_type: StepKeyword,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            name: name.into(),
            family,
            step_type,
            arguments: Vec::new(),
        }
    }

    /// The attached multiline block, if any.
    #[must_use]
    pub fn multiline(&self) -> Option<&str> {
        self.arguments.iter().find_map(|argument| match argument {
            StepArgument::Multiline(text) => Some(text.as_str()),
            StepArgument::Row(_) => None,
        })
    }

    /// Attached table rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.arguments.iter().filter_map(|argument| match argument {
            StepArgument::Row(row) => Some(row),
            StepArgument::Multiline(_) => None,
        })
    }
}

impl Definition for Step {
    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn key_type(&self) -> TokenKind {
        TokenKind::Step(self.family)
    }
}

/// Examples table of a scenario outline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Examples {
    /// Keyword as written.
    pub keyword: String,
    /// Optional block name.
    pub name: String,
    /// Tags written directly above the block.
    pub tags: Vec<Tag>,
    /// Header and value rows.
    pub rows: Vec<Row>,
}

/// Background steps shared by every scenario of a feature.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Background {
    /// Keyword as written.
    pub keyword: String,
    /// Optional name.
    pub name: String,
    /// Tags in source order.
    pub tags: Vec<Tag>,
    /// Steps in source order.
    pub steps: Vec<Step>,
}

/// Concrete scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scenario {
    /// Keyword as written.
    pub keyword: String,
    /// Scenario name.
    pub name: String,
    /// Tags in source order.
    pub tags: Vec<Tag>,
    /// Steps in source order.
    pub steps: Vec<Step>,
}

/// Templated scenario paired with examples tables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioOutline {
    /// Keyword as written.
    pub keyword: String,
    /// Outline name.
    pub name: String,
    /// Tags in source order.
    pub tags: Vec<Tag>,
    /// Template steps in source order.
    pub steps: Vec<Step>,
    /// Examples blocks in source order.
    pub examples: Vec<Examples>,
}

macro_rules! impl_node {
    ($node:ty, $kind:expr) => {
        impl Definition for $node {
            fn keyword(&self) -> &str {
                &self.keyword
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn key_type(&self) -> TokenKind {
                $kind
            }
        }

        impl Taggable for $node {
            fn tags(&self) -> &[Tag] {
                &self.tags
            }
        }
    };
    ($node:ty, $kind:expr, steps) => {
        impl_node!($node, $kind);

        impl StepsContainer for $node {
            fn steps(&self) -> &[Step] {
                &self.steps
            }
        }
    };
}

impl_node!(Examples, TokenKind::Examples);
impl_node!(Background, TokenKind::Background, steps);
impl_node!(Scenario, TokenKind::Scenario, steps);
impl_node!(ScenarioOutline, TokenKind::ScenarioOutline, steps);

/// Entry of a feature's scenario list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum ScenarioItem {
    /// Concrete scenario.
    Scenario(Scenario),
    /// Scenario outline.
    Outline(ScenarioOutline),
}

impl ScenarioItem {
    /// The outline, when this entry is one.
    #[must_use]
    pub fn as_outline(&self) -> Option<&ScenarioOutline> {
        match self {
            Self::Outline(outline) => Some(outline),
            Self::Scenario(_) => None,
        }
    }

}

macro_rules! delegate {
    ($self:ident, $method:ident) => {
        match $self {
            Self::Scenario(scenario) => scenario.$method(),
            Self::Outline(outline) => outline.$method(),
        }
    };
}

impl Definition for ScenarioItem {
    fn keyword(&self) -> &str {
        delegate!(self, keyword)
    }

    fn name(&self) -> &str {
        delegate!(self, name)
    }

    fn key_type(&self) -> TokenKind {
        delegate!(self, key_type)
    }
}

impl Taggable for ScenarioItem {
    fn tags(&self) -> &[Tag] {
        delegate!(self, tags)
    }
}

impl StepsContainer for ScenarioItem {
    fn steps(&self) -> &[Step] {
        delegate!(self, steps)
    }
}

/// Top-level unit of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Feature {
    /// Keyword as written.
    pub keyword: String,
    /// Feature name.
    pub name: String,
    /// Tags in source order.
    pub tags: Vec<Tag>,
    /// Free text between the feature line and the first structural line.
    pub description: Option<String>,
    /// Shared background, if declared.
    pub background: Option<Background>,
    /// Scenarios and outlines in source order.
    pub scenarios: Vec<ScenarioItem>,
}

impl Feature {
    /// Create a feature with no children.
    #[must_use]
    pub fn new(keyword: impl Into<String>, name: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            keyword: keyword.into(),
            name: name.into(),
            tags,
            description: None,
            background: None,
            scenarios: Vec::new(),
        }
    }

    /// Every step container in source order: background first, then each
    /// scenario.
    pub fn containers(&self) -> impl Iterator<Item = &dyn StepsContainer> {
        self.background
            .iter()
            .map(|background| background as &dyn StepsContainer)
            .chain(
                self.scenarios
                    .iter()
                    .map(|item| item as &dyn StepsContainer),
            )
    }
}

impl Definition for Feature {
    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn key_type(&self) -> TokenKind {
        TokenKind::Feature
    }
}

impl Taggable for Feature {
    fn tags(&self) -> &[Tag] {
        &self.tags
    }
}
