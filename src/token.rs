//! Operators and the tokens of a postfix expression

#[cfg(not(feature = "std"))]
use alloc::string::String;
use core::fmt;

use crate::error::Error;

mod postfix;

pub use self::postfix::Postfix;

/// Separates an operand from whatever follows it in the text form of a postfix expression
pub const DELIMITER: char = '|';

/// A binary arithmetic operator
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde_::Serialize, serde_::Deserialize),
    serde(crate = "serde_")
)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// The operator written as `c`, if any
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// The character this operator is written as
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Binding strength; higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    /// Whether swapping the operands leaves the result unchanged
    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Multiply)
    }

    /// Compute `lhs <op> rhs`
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, Error> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide if rhs == 0.0 => Err(Error::DivisionByZero),
            Operator::Divide => Ok(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The precedence of `c`, or 0 when `c` is not an operator
pub fn precedence(c: char) -> u8 {
    Operator::from_char(c).map_or(0, Operator::precedence)
}

/// The text of a value in a postfix expression.
///
/// An operand is never empty and never contains [`DELIMITER`], so the text form of a
/// [`Postfix`] always reads back as the same tokens.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde_::Serialize, serde_::Deserialize),
    serde(crate = "serde_", try_from = "String", into = "String")
)]
pub struct Operand(String);

impl Operand {
    /// The operand text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Callers guarantee `text` is non-empty and free of the delimiter.
    pub(crate) fn from_checked(text: String) -> Self {
        debug_assert!(!text.is_empty() && !text.contains(DELIMITER));
        Operand(text)
    }
}

impl TryFrom<String> for Operand {
    type Error = Error;

    fn try_from(text: String) -> Result<Self, Error> {
        if text.is_empty() {
            return Err(Error::invalid_argument("operand cannot be empty"));
        }
        if text.contains(DELIMITER) {
            return Err(Error::invalid_argument(format_args!(
                "operand {:?} contains the delimiter {:?}",
                text, DELIMITER
            )));
        }
        Ok(Operand(text))
    }
}

impl TryFrom<&str> for Operand {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self, Error> {
        Operand::try_from(String::from(text))
    }
}

impl From<Operand> for String {
    fn from(operand: Operand) -> Self {
        operand.0
    }
}

impl AsRef<str> for Operand {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single element of a postfix expression
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde_::Serialize, serde_::Deserialize),
    serde(crate = "serde_")
)]
pub enum Token {
    /// A value, kept as written
    Operand(Operand),
    /// An operator applied to the two values before it
    Operator(Operator),
}

impl Token {
    /// Create an operand token. The text must be non-empty and must not contain [`DELIMITER`].
    pub fn operand(text: impl Into<String>) -> Result<Self, Error> {
        Operand::try_from(text.into()).map(Token::Operand)
    }
}

impl From<Operand> for Token {
    fn from(operand: Operand) -> Self {
        Token::Operand(operand)
    }
}

impl From<Operator> for Token {
    fn from(operator: Operator) -> Self {
        Token::Operator(operator)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Operand(operand) => write!(f, "{}{}", operand, DELIMITER),
            Token::Operator(operator) => write!(f, "{}", operator),
        }
    }
}
