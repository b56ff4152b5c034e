//! Infix to postfix conversion (shunting-yard)
//!
//! # Converting an expression
//!
//! The easiest way is the free function [`infix_to_postfix`]:
//!
//! ```
//! # use shunting::{infix_to_postfix, Error};
//! #
//! # fn main() -> Result<(), Error> {
//! let postfix = infix_to_postfix("2 * [3 + 4]")?;
//! assert_eq!("2|3|4|+*", postfix.to_string());
//! # Ok(())
//! # }
//! ```
//!
//! Every run of alphanumeric characters is an operand, `+ - * /` are binary operators, and all
//! three bracket kinds group a sub-expression. Whitespace and any other characters are skipped.
//! The brackets are checked with [`check_brackets`] before anything else, so unbalanced input
//! fails with [`Error::InvalidExpression`].
//!
//! # Configuration
//!
//! A [`Converter`] bounds the nesting depth and selects how operators of equal precedence are
//! ordered:
//!
//! ```
//! # use shunting::{Converter, Error, TieBreak};
//! #
//! # fn main() -> Result<(), Error> {
//! let converter = Converter::new().with_max_depth(8);
//! assert_eq!("8|3|-2|-", converter.convert("8 - 3 - 2")?.to_string());
//!
//! let deferred = converter.with_tie_break(TieBreak::Defer);
//! assert_eq!("8|3|2|--", deferred.convert("8 - 3 - 2")?.to_string());
//! # Ok(())
//! # }
//! ```
//!
//! [`check_brackets`]: crate::brackets::check_brackets

#[cfg(not(feature = "std"))]
use alloc::borrow::ToOwned;

use log::{debug, trace};

use crate::{
    brackets::{check_brackets, Bracket},
    error::Error,
    stack::Stack,
    token::{Operand, Operator, Postfix, Token},
};

/// How an incoming operator treats a stacked operator of the same precedence
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum TieBreak {
    /// Move the stacked operator to the output first, so that `a - b - c` means `(a - b) - c`.
    #[default]
    Reduce,
    /// Leave the stacked operator in place; only strictly higher precedence is moved out.
    ///
    /// Chains of `-` or `/` then group from the right: `a - b - c` evaluates as `a - (b - c)`.
    Defer,
}

/// An entry of the operator stack
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Pending {
    Open(Bracket),
    Operator(Operator),
}

/// Converts infix expressions to postfix
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Converter {
    max_depth: usize,
    tie_break: TieBreak,
}

impl Default for Converter {
    fn default() -> Self {
        Converter {
            max_depth: 2048,
            tie_break: TieBreak::default(),
        }
    }
}

impl Converter {
    /// Create a converter with the default settings
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Set the maximum number of brackets that may be open at once
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set how operators of equal precedence are ordered
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    fn moves_out(&self, stacked: Operator, incoming: Operator) -> bool {
        match self.tie_break {
            TieBreak::Reduce => stacked.precedence() >= incoming.precedence(),
            TieBreak::Defer => stacked.precedence() > incoming.precedence(),
        }
    }

    /// Convert `expression` to postfix
    pub fn convert(&self, expression: &str) -> Result<Postfix, Error> {
        check_brackets(expression)?;
        debug!("converting {:?}", expression);

        let mut pending: Stack<Pending> = Stack::new();
        let mut output = Postfix::new();
        let mut depth = 0;
        let mut chars = expression.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if c.is_alphanumeric() {
                let mut end = start + c.len_utf8();
                while let Some(&(next, c)) = chars.peek() {
                    if !c.is_alphanumeric() {
                        break;
                    }
                    end = next + c.len_utf8();
                    chars.next();
                }
                output.push(Token::Operand(Operand::from_checked(
                    expression[start..end].to_owned(),
                )));
            } else if let Some(bracket) = Bracket::opening(c) {
                depth += 1;
                if depth > self.max_depth {
                    return Err(Error::NestingTooDeep);
                }
                pending.push(Pending::Open(bracket));
            } else if let Some(incoming) = Operator::from_char(c) {
                while let Ok(&Pending::Operator(stacked)) = pending.peek() {
                    if !self.moves_out(stacked, incoming) {
                        break;
                    }
                    trace!("{} moves out ahead of {}", stacked, incoming);
                    output.push(stacked);
                    pending.pop()?;
                }
                pending.push(Pending::Operator(incoming));
            } else if Bracket::closing(c).is_some() {
                // The bracket check guarantees the matching opener is on the stack.
                loop {
                    match pending.pop()? {
                        Pending::Open(_) => break,
                        Pending::Operator(operator) => output.push(operator),
                    }
                }
                depth -= 1;
            }
        }

        while let Ok(entry) = pending.pop() {
            if let Pending::Operator(operator) = entry {
                output.push(operator);
            }
        }

        debug!("postfix form of {:?} is {}", expression, output);
        Ok(output)
    }
}

/// Convert `expression` to postfix with the default [`Converter`]
pub fn infix_to_postfix(expression: &str) -> Result<Postfix, Error> {
    Converter::new().convert(expression)
}
