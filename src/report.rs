use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arith::{Arithmetic, Op};

/// One evaluated operation, ready to be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub lhs: i32,
    pub op: Op,
    pub rhs: i32,
    pub result: i32,
}

impl Calculation {
    pub fn run<A>(backend: &A, op: Op, lhs: i32, rhs: i32) -> Self
    where
        A: Arithmetic + ?Sized, {
        let result = op.apply(backend, lhs, rhs);
        Self { lhs, op, rhs, result }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.lhs, self.op.symbol(), self.rhs, self.result)
    }
}

/// Output style for each printed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Renders one calculation as a single line, without the trailing newline.
pub fn render(calc: &Calculation, format: Format) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        Format::Text => Ok(calc.to_string()),
        Format::Json => Ok(serde_json::to_string(calc)?),
    }
}
