//! The error type shared by the stack and the expression pipeline

#[cfg(not(feature = "std"))]
use alloc::{
    format,
    string::{String, ToString},
};
use core::{fmt::Display, num::ParseFloatError};

use thiserror::Error;

/// An enumeration of the errors raised by the stack and the expression pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A parameter was outside of the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An element was requested from a stack without any.
    #[error("{operation} from empty stack")]
    EmptyStack {
        /// The operation that found the stack empty.
        operation: &'static str,
    },

    /// An index did not address an element of the stack.
    #[error("index {index} out of range for stack of size {size}")]
    IndexOutOfRange {
        /// The requested position, counted from the bottom.
        index: usize,
        /// The size of the stack at the time of the request.
        size: usize,
    },

    /// The brackets of an infix expression do not match up.
    #[error("invalid expression: {0}")]
    InvalidExpression(String),

    /// A division step had a zero right-hand value.
    #[error("division by zero")]
    DivisionByZero,

    /// Postfix input could not be evaluated.
    #[error("malformed postfix expression: {0}")]
    MalformedPostfix(String),

    /// Brackets were nested deeper than the converter allows.
    #[error("maximum nesting depth exceeded")]
    NestingTooDeep,
}

impl Error {
    /// Raised when a caller supplied parameter is not acceptable.
    /// The message should not be capitalized and should not end with a period.
    pub fn invalid_argument(reason: impl Display) -> Self {
        Error::InvalidArgument(reason.to_string())
    }

    pub(crate) fn empty(operation: &'static str) -> Self {
        Error::EmptyStack { operation }
    }

    pub(crate) fn unbalanced(reason: impl Display, offset: usize) -> Self {
        Error::InvalidExpression(format!("{} at offset {}", reason, offset))
    }

    /// Raised when postfix input cannot be evaluated.
    pub fn malformed(reason: impl Display) -> Self {
        Error::MalformedPostfix(reason.to_string())
    }

    pub(crate) fn unparsable_operand(operand: &str, error: ParseFloatError) -> Self {
        Error::MalformedPostfix(format!("cannot read {:?} as a number: {}", operand, error))
    }
}

#[test]
fn errors_are_sync_send() {
    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}
    is_send::<Error>();
    is_sync::<Error>();
}
