use clap::{Parser, ValueEnum};

use crate::arith::{Arithmetic, NativeMath, RustMath};
use crate::report::Format;

pub const DEFAULT_LHS: i32 = 5;
pub const DEFAULT_RHS: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Backend {
    /// Call the C library over FFI
    #[default]
    Native,
    /// Compute in Rust
    Rust,
}

impl Backend {
    pub fn arithmetic(&self) -> &'static dyn Arithmetic {
        match self {
            Backend::Native => &NativeMath,
            Backend::Rust => &RustMath,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "mathbridge")]
#[command(about = "Add and subtract two integers through a native C library")]
#[command(allow_negative_numbers = true)]
pub struct CliConfig {
    /// Left operand (defaults to 5)
    #[arg(requires = "rhs")]
    pub lhs: Option<i32>,

    /// Right operand (defaults to 4)
    pub rhs: Option<i32>,

    #[arg(long, value_enum, default_value_t = Backend::Native)]
    pub backend: Backend,

    #[arg(long, help = "Print one JSON object per line")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn operands(&self) -> (i32, i32) {
        (self.lhs.unwrap_or(DEFAULT_LHS), self.rhs.unwrap_or(DEFAULT_RHS))
    }

    pub fn format(&self) -> Format {
        if self.json { Format::Json } else { Format::Text }
    }
}
