//! A stack primitive and the arithmetic pipeline built on top of it.
//!
//! The pipeline turns an infix expression into postfix (reverse polish) form with a
//! shunting-yard converter and evaluates the result on a value stack:
//!
//! ```
//! use shunting::{infix_to_postfix, Error};
//!
//! # fn main() -> Result<(), Error> {
//! let postfix = infix_to_postfix("(1 + 3) * (5 + 51)")?;
//! assert_eq!("1|3|+5|51|+*", postfix.to_string());
//! assert_eq!(Some(224.0), postfix.evaluate()?);
//! # Ok(())
//! # }
//! ```
//!
//! Brackets are checked before conversion, so an unbalanced expression never reaches the
//! converter:
//!
//! ```
//! use shunting::{bracket_matching, infix_to_postfix, Error};
//!
//! assert!(!bracket_matching("([)]"));
//! assert!(matches!(infix_to_postfix("(1 + 2]"), Err(Error::InvalidExpression(_))));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(test), warn(missing_docs))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod brackets;
pub mod conversion;
pub mod error;
pub mod evaluation;
pub mod radix;
pub mod stack;
pub mod token;

pub use self::{
    brackets::{bracket_matching, check_brackets},
    conversion::{infix_to_postfix, Converter, TieBreak},
    error::Error,
    evaluation::{evaluate_infix, get_result_from_postfix},
    radix::divide_by_n,
    stack::Stack,
    token::{Operand, Operator, Postfix, Token, DELIMITER},
};

#[cfg(feature = "std")]
pub use self::stack::SharedStack;
