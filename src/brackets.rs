//! Structural bracket matching, used to gate the converter

use crate::{error::Error, stack::Stack};

/// One of the three supported bracket kinds
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Bracket {
    /// `(` and `)`
    Round,
    /// `[` and `]`
    Square,
    /// `{` and `}`
    Curly,
}

impl Bracket {
    /// The bracket kind opened by `c`, if it is a left bracket
    pub fn opening(c: char) -> Option<Self> {
        match c {
            '(' => Some(Bracket::Round),
            '[' => Some(Bracket::Square),
            '{' => Some(Bracket::Curly),
            _ => None,
        }
    }

    /// The bracket kind closed by `c`, if it is a right bracket
    pub fn closing(c: char) -> Option<Self> {
        match c {
            ')' => Some(Bracket::Round),
            ']' => Some(Bracket::Square),
            '}' => Some(Bracket::Curly),
            _ => None,
        }
    }

    /// The left bracket character
    pub fn open_char(self) -> char {
        match self {
            Bracket::Round => '(',
            Bracket::Square => '[',
            Bracket::Curly => '{',
        }
    }

    /// The right bracket character
    pub fn close_char(self) -> char {
        match self {
            Bracket::Round => ')',
            Bracket::Square => ']',
            Bracket::Curly => '}',
        }
    }
}

/// Check that every bracket in `s` is closed by a bracket of the same kind, in nesting order.
///
/// Characters other than brackets are ignored. The error names the first problem found and
/// its character offset within `s`.
pub fn check_brackets(s: &str) -> Result<(), Error> {
    let trimmed = s.trim_start();
    let skipped = s[..s.len() - trimmed.len()].chars().count();
    let mut open: Stack<(Bracket, usize)> = Stack::new();

    for (position, c) in trimmed.trim_end().chars().enumerate() {
        let offset = skipped + position;
        if let Some(bracket) = Bracket::opening(c) {
            open.push((bracket, offset));
        } else if let Some(bracket) = Bracket::closing(c) {
            let (expected, opened_at) = open
                .pop()
                .map_err(|_| Error::unbalanced(format_args!("unmatched {:?}", c), offset))?;
            if expected != bracket {
                return Err(Error::unbalanced(
                    format_args!(
                        "{:?} opened at offset {} closed by {:?}",
                        expected.open_char(),
                        opened_at,
                        c
                    ),
                    offset,
                ));
            }
        }
    }

    match open.pop() {
        Ok((bracket, opened_at)) => Err(Error::unbalanced(
            format_args!("unclosed {:?}", bracket.open_char()),
            opened_at,
        )),
        Err(_) => Ok(()),
    }
}

/// Whether the brackets in `s` are balanced and properly nested
pub fn bracket_matching(s: &str) -> bool {
    check_brackets(s).is_ok()
}
