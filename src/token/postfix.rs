#[cfg(not(feature = "std"))]
use alloc::{borrow::ToOwned, vec::Vec};
use core::{fmt, slice, str::FromStr};

use crate::{
    error::Error,
    token::{Operand, Operator, Token, DELIMITER},
};

/// An expression in postfix order: every operator follows the two values it combines.
///
/// The text form writes each operand followed by [`DELIMITER`] and each operator as its bare
/// symbol, so `1 + 3` becomes `1|3|+`.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde_::Serialize, serde_::Deserialize),
    serde(crate = "serde_", transparent)
)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    /// Create an empty expression
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Append a token
    pub fn push(&mut self, token: impl Into<Token>) {
        self.tokens.push(token.into())
    }

    /// The tokens, in evaluation order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over the tokens in evaluation order
    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the expression has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Give up the token list
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl From<Vec<Token>> for Postfix {
    fn from(tokens: Vec<Token>) -> Self {
        Postfix { tokens }
    }
}

impl FromIterator<Token> for Postfix {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Postfix {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type IntoIter = slice::Iter<'a, Token>;
    type Item = &'a Token;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl FromStr for Postfix {
    type Err = Error;

    /// Read the delimited text form.
    ///
    /// An operand starts at an alphanumeric character and runs up to the next delimiter, so it
    /// may contain characters such as `.`; operators are single characters and anything else
    /// is skipped.
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut tokens = Vec::new();
        let mut chars = s.char_indices();

        while let Some((start, c)) = chars.next() {
            if c.is_alphanumeric() {
                let end = loop {
                    match chars.next() {
                        Some((end, DELIMITER)) => break end,
                        Some(_) => {},
                        None => {
                            return Err(Error::malformed(format_args!(
                                "operand at offset {} is not terminated by {:?}",
                                start, DELIMITER
                            )));
                        },
                    }
                };
                tokens.push(Token::Operand(Operand::from_checked(s[start..end].to_owned())));
            } else if let Some(operator) = Operator::from_char(c) {
                tokens.push(Token::Operator(operator));
            }
        }

        Ok(Postfix { tokens })
    }
}
