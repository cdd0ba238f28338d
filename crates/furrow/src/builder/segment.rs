//! Pass 1: cutting the token stream into per-feature runs.

use tracing::debug;

use crate::token::{Token, TokenKind};

/// Indices of every `feature` token in `tokens`.
///
/// # Examples
/// ```
/// use furrow::builder::feature_positions;
/// use furrow::{Token, TokenKind};
///
/// let tokens = [
///     Token::new(TokenKind::Tag, "@", "wip", 0),
///     Token::new(TokenKind::Feature, "Feature", "A", 1),
///     Token::new(TokenKind::Feature, "Feature", "B", 2),
/// ];
/// assert_eq!(feature_positions(&tokens), [1, 2]);
/// ```
#[must_use]
pub fn feature_positions(tokens: &[Token]) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.kind == TokenKind::Feature)
        .map(|(index, _)| index)
        .collect()
}

/// Split `tokens` into one run per feature.
///
/// Each run starts at a `feature` token and ends just before the next one.
/// Tags trailing a run belong to the feature opening the following run and
/// are moved to its front. Runs holding no feature are dropped, as are tags
/// trailing the final run.
#[must_use]
pub fn segment(tokens: Vec<Token>) -> Vec<Vec<Token>> {
    let positions = feature_positions(&tokens);
    let mut runs = Vec::with_capacity(positions.len() + 1);
    let mut rest = tokens;
    for &at in positions.iter().rev() {
        runs.push(rest.split_off(at));
    }
    runs.push(rest);
    runs.reverse();

    let mut segments = Vec::with_capacity(positions.len());
    let mut carried: Vec<Token> = Vec::new();
    for run in runs {
        let mut current = std::mem::take(&mut carried);
        current.extend(run);
        carried = split_trailing_tags(&mut current);
        if current.iter().any(|token| token.kind == TokenKind::Feature) {
            segments.push(current);
        } else if !current.is_empty() {
            debug!(tokens = current.len(), "dropping tokens outside any feature");
        }
    }
    if !carried.is_empty() {
        debug!(tags = carried.len(), "dropping tags with no following feature");
    }
    segments
}

/// Detach the run of `tag` tokens at the end of `run`.
fn split_trailing_tags(run: &mut Vec<Token>) -> Vec<Token> {
    let start = run
        .iter()
        .rposition(|token| token.kind != TokenKind::Tag)
        .map_or(0, |index| index + 1);
    run.split_off(start)
}
