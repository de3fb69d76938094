//! Two-operand arithmetic with an append-only history log.

mod history;

pub use history::History;

use std::fmt;
use std::str::FromStr;

use crate::error::{CrudError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
            Operator::Multiply => write!(f, "*"),
            Operator::Divide => write!(f, "/"),
        }
    }
}

impl FromStr for Operator {
    type Err = CrudError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            // `x` because an unquoted `*` gets globbed by the shell
            "*" | "x" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            _ => Err(CrudError::InvalidOperator(s.to_string())),
        }
    }
}

/// One evaluated expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub lhs: f64,
    pub op: Operator,
    pub rhs: f64,
    pub result: f64,
}

impl Calculation {
    pub fn evaluate(lhs: f64, op: Operator, rhs: f64) -> Result<Self> {
        let result = match op {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(CrudError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        Ok(Self {
            lhs,
            op,
            rhs,
            result,
        })
    }

    /// Parse and evaluate `<lhs> <op> <rhs>` given as separate words.
    pub fn parse(lhs: &str, op: &str, rhs: &str) -> Result<Self> {
        let lhs = parse_operand(lhs)?;
        let op = op.parse()?;
        let rhs = parse_operand(rhs)?;
        Self::evaluate(lhs, op, rhs)
    }
}

/// History line format: operands and result rounded to two decimals.
impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} {} {:.2} = {:.2}",
            self.lhs, self.op, self.rhs, self.result
        )
    }
}

fn parse_operand(raw: &str) -> Result<f64> {
    raw.trim()
        .parse()
        .map_err(|_| CrudError::InvalidNumber(raw.to_string()))
}
