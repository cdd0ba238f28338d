//! Indented text dump of feature trees.
//!
//! The format is stable and line-oriented so fixtures can compare it
//! verbatim: one node per line, two spaces of indentation per level, tags
//! in brackets after the node name, rows as `| a | b |` and multiline
//! blocks fenced by `"""`.

use std::fmt;

use crate::ast::{Definition, Examples, Feature, Step, StepArgument, StepsContainer, Tag, Taggable};

/// Render `features` as text, one trailing newline per line.
///
/// # Examples
/// ```
/// use furrow::{dump, parse};
/// use furrow_keywords::KeywordTable;
///
/// let table = KeywordTable::builtin();
/// let features = parse("@wip\nFeature: F\nScenario: S\nGiven x\n|a|b|", &table).unwrap();
/// assert_eq!(
///     dump::render(&features),
///     "Feature: F [@wip]\n  Scenario: S\n    Given x\n      | a | b |\n"
/// );
/// ```
#[must_use]
pub fn render(features: &[Feature]) -> String {
    Dump(features).to_string()
}

/// [`Display`](fmt::Display) adapter producing the dump format.
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a>(pub &'a [Feature]);

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feature in self.0 {
            write_feature(f, feature)?;
        }
        Ok(())
    }
}

fn write_feature(f: &mut fmt::Formatter<'_>, feature: &Feature) -> fmt::Result {
    write_heading(f, 0, feature, feature.tags())?;
    if let Some(description) = &feature.description {
        for line in description.lines() {
            writeln!(f, "  {line}")?;
        }
    }
    if let Some(background) = &feature.background {
        write_heading(f, 1, background, background.tags())?;
        write_steps(f, background)?;
    }
    for item in &feature.scenarios {
        write_heading(f, 1, item, item.tags())?;
        write_steps(f, item)?;
        if let Some(outline) = item.as_outline() {
            for examples in &outline.examples {
                write_examples(f, examples)?;
            }
        }
    }
    Ok(())
}

fn write_heading(
    f: &mut fmt::Formatter<'_>,
    depth: usize,
    node: &dyn Definition,
    tags: &[Tag],
) -> fmt::Result {
    write!(f, "{:indent$}{}:", "", node.keyword(), indent = depth * 2)?;
    if !node.name().is_empty() {
        write!(f, " {}", node.name())?;
    }
    if !tags.is_empty() {
        let names: Vec<String> = tags.iter().map(|tag| format!("@{}", tag.name)).collect();
        write!(f, " [{}]", names.join(" "))?;
    }
    writeln!(f)
}

fn write_steps(f: &mut fmt::Formatter<'_>, container: &dyn StepsContainer) -> fmt::Result {
    container
        .steps()
        .iter()
        .try_for_each(|step| write_step(f, step))
}

fn write_step(f: &mut fmt::Formatter<'_>, step: &Step) -> fmt::Result {
    writeln!(f, "    {} {}", step.keyword, step.name)?;
    for argument in &step.arguments {
        match argument {
            StepArgument::Row(row) => write_row(f, 6, &row.cells)?,
            StepArgument::Multiline(text) => {
                writeln!(f, "      \"\"\"")?;
                for line in text.lines() {
                    writeln!(f, "      {line}")?;
                }
                writeln!(f, "      \"\"\"")?;
            }
        }
    }
    Ok(())
}

fn write_examples(f: &mut fmt::Formatter<'_>, examples: &Examples) -> fmt::Result {
    write_heading(f, 2, examples, examples.tags())?;
    examples
        .rows
        .iter()
        .try_for_each(|row| write_row(f, 6, &row.cells))
}

fn write_row(f: &mut fmt::Formatter<'_>, indent: usize, cells: &[String]) -> fmt::Result {
    writeln!(f, "{:indent$}| {} |", "", cells.join(" | "))
}
