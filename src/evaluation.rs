//! Postfix evaluation
//!
//! Operands are read as `f64`, so all arithmetic is floating point; compare results with a
//! tolerance rather than exact equality when divisions are involved.
//!
//! ```
//! # use shunting::{get_result_from_postfix, Error};
//! #
//! # fn main() -> Result<(), Error> {
//! assert_eq!(Some(3.0), get_result_from_postfix("8|3|-2|-")?);
//! assert_eq!(None, get_result_from_postfix("")?);
//! assert_eq!(Err(Error::DivisionByZero), get_result_from_postfix("1|0|/"));
//! # Ok(())
//! # }
//! ```

use log::{debug, trace};

use crate::{
    conversion::infix_to_postfix,
    error::Error,
    stack::Stack,
    token::{Postfix, Token},
};

impl Postfix {
    /// Compute the value of the expression, or `None` for an empty one.
    ///
    /// Each operator combines the two most recent values, the earlier one on the left.
    pub fn evaluate(&self) -> Result<Option<f64>, Error> {
        debug!("evaluating {}", self);
        let mut values: Stack<f64> = Stack::with_capacity(self.len());

        for (position, token) in self.iter().enumerate() {
            match token {
                Token::Operand(operand) => {
                    let text = operand.as_str();
                    let value = text
                        .parse::<f64>()
                        .map_err(|error| Error::unparsable_operand(text, error))?;
                    values.push(value);
                },
                Token::Operator(operator) => {
                    let missing = |_| {
                        Error::malformed(format_args!(
                            "{} at token {} needs two operands",
                            operator, position
                        ))
                    };
                    let rhs = values.pop().map_err(missing)?;
                    let lhs = values.pop().map_err(missing)?;
                    let value = operator.apply(lhs, rhs)?;
                    trace!("{} {} {} = {}, stack {}", lhs, operator, rhs, value, values);
                    values.push(value);
                },
            }
        }

        match values.size() {
            0 => Ok(None),
            1 => values.pop().map(Some),
            left => Err(Error::malformed(format_args!(
                "{} values left without an operator: {}",
                left, values
            ))),
        }
    }
}

/// Evaluate the delimited text form of a postfix expression
pub fn get_result_from_postfix(expression: &str) -> Result<Option<f64>, Error> {
    expression.parse::<Postfix>()?.evaluate()
}

/// Check, convert and evaluate an infix expression
pub fn evaluate_infix(expression: &str) -> Result<Option<f64>, Error> {
    infix_to_postfix(expression)?.evaluate()
}
