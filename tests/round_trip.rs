//! Converting and then evaluating a generated expression agrees with evaluating its tree.

use proptest::prelude::*;
use shunting::{infix_to_postfix, Error, Operator};

#[derive(Clone, Debug)]
enum Expr {
    Number(u32),
    Binary(Box<Expr>, Operator, Box<Expr>),
}

impl Expr {
    fn value(&self) -> Result<f64, Error> {
        match self {
            Expr::Number(n) => Ok(f64::from(*n)),
            Expr::Binary(lhs, operator, rhs) => operator.apply(lhs.value()?, rhs.value()?),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Number(_) => u8::MAX,
            Expr::Binary(_, operator, _) => operator.precedence(),
        }
    }

    /// Write the expression with only the brackets its structure needs.
    fn write(&self, out: &mut String, brackets: &mut impl Iterator<Item = (char, char)>) {
        match self {
            Expr::Number(n) => out.push_str(&n.to_string()),
            Expr::Binary(lhs, operator, rhs) => {
                let lhs_needs = lhs.precedence() < operator.precedence();
                let rhs_needs = rhs.precedence() <= operator.precedence();
                Self::write_operand(lhs, lhs_needs, out, brackets);
                out.push(' ');
                out.push(operator.symbol());
                out.push(' ');
                Self::write_operand(rhs, rhs_needs, out, brackets);
            },
        }
    }

    fn write_operand(
        operand: &Expr,
        bracketed: bool,
        out: &mut String,
        brackets: &mut impl Iterator<Item = (char, char)>,
    ) {
        if bracketed {
            let (open, close) = brackets.next().unwrap_or(('(', ')'));
            out.push(open);
            operand.write(out, brackets);
            out.push(close);
        } else {
            operand.write(out, brackets);
        }
    }

    fn to_infix(&self) -> String {
        let mut out = String::new();
        let mut brackets = [('(', ')'), ('[', ']'), ('{', '}')].into_iter().cycle();
        self.write(&mut out, &mut brackets);
        out
    }
}

fn operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn expr() -> impl Strategy<Value = Expr> {
    let leaf = (0u32..100).prop_map(Expr::Number);
    leaf.prop_recursive(4, 24, 2, |inner| {
        (inner.clone(), operator(), inner)
            .prop_map(|(lhs, operator, rhs)| Expr::Binary(Box::new(lhs), operator, Box::new(rhs)))
    })
}

fn approx_eq(expected: f64, actual: f64) -> bool {
    if expected.is_nan() {
        return actual.is_nan();
    }
    expected == actual || (expected - actual).abs() <= 1e-9 * expected.abs().max(1.0)
}

proptest! {
    #[test]
    fn postfix_evaluation_matches_the_tree(expr in expr()) {
        let infix = expr.to_infix();
        let result = infix_to_postfix(&infix).and_then(|postfix| postfix.evaluate());

        match expr.value() {
            Ok(expected) => {
                let actual = result.expect("Evaluation should succeed").expect("Value expected");
                prop_assert!(approx_eq(expected, actual), "{} gave {} instead of {}", infix, actual, expected);
            },
            Err(error) => prop_assert_eq!(Err(error), result),
        }
    }
}
