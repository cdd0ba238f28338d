//! Triple-quoted block capture.
//!
//! A block opens on a line starting with `"""` or `'''` and closes on the
//! next line ending with the same delimiter. Delimiters are stripped from
//! the emitted text.

use crate::token::{Token, TokenKind};

const DELIMITERS: [&str; 2] = ["\"\"\"", "'''"];

/// Outcome of offering a line to the block state machine.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Transition {
    /// The line is not part of a block.
    Ignored,
    /// The line was absorbed into an open block.
    Consumed,
    /// The line closed the block.
    Closed(Token),
}

#[derive(Debug, Default)]
pub(super) enum Multiline {
    #[default]
    Closed,
    Open {
        delimiter: &'static str,
        line: usize,
        buffer: Vec<String>,
    },
}

impl Multiline {
    pub(super) fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Open a block if `text` starts with a delimiter.
    ///
    /// Text after the opening delimiter becomes the first content line.
    pub(super) fn open(&mut self, line: usize, text: &str) -> Transition {
        let Some((delimiter, rest)) = DELIMITERS
            .into_iter()
            .find_map(|delimiter| text.strip_prefix(delimiter).map(|rest| (delimiter, rest)))
        else {
            return Transition::Ignored;
        };
        *self = Self::Open {
            delimiter,
            line,
            buffer: Vec::new(),
        };
        let rest = rest.trim_start();
        if rest.is_empty() {
            Transition::Consumed
        } else {
            self.feed(rest)
        }
    }

    /// Append `text` to the open block, closing it on a matching delimiter.
    pub(super) fn feed(&mut self, text: &str) -> Transition {
        let Self::Open {
            delimiter,
            line,
            buffer,
        } = self
        else {
            return Transition::Ignored;
        };
        let Some(before) = text.strip_suffix(*delimiter) else {
            buffer.push(text.to_string());
            return Transition::Consumed;
        };
        let before = before.trim_end();
        if !before.is_empty() {
            buffer.push(before.to_string());
        }
        let token = Token::new(TokenKind::Multiline, "", buffer.join("\n"), *line);
        *self = Self::Closed;
        Transition::Closed(token)
    }

    /// Line index of a block left open at end of input.
    pub(super) fn unclosed_line(&self) -> Option<usize> {
        match self {
            Self::Open { line, .. } => Some(*line),
            Self::Closed => None,
        }
    }
}
