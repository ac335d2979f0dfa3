use std::io::Write;

use anyhow::{Context, Result};
use log::debug;

use crate::arith::{add, multiply};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Sample {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub sum: i32,
    pub product: i32,
}

impl Sample {
    /// The literals the program prints on every run.
    pub const DEFAULT: Sample = Sample { x: 5, y: 10 };

    pub fn evaluate(&self) -> Outcome {
        debug!("add({}, {})", self.x, self.y);
        let sum = add(self.x, self.y);
        debug!("multiply({}, {})", self.x, self.y);
        let product = multiply(self.x, self.y);
        Outcome { sum, product }
    }
}

/// Writes the header, both inputs, then the sum and product of `sample`.
pub fn write_report<W: Write>(out: &mut W, sample: &Sample) -> Result<Outcome> {
    writeln!(out, "Debug information:").context("Failed to write header")?;
    writeln!(out, "x = {}", sample.x).context("Failed to write x")?;
    writeln!(out, "y = {}", sample.y).context("Failed to write y")?;

    let outcome = sample.evaluate();
    debug!("{sample:?} -> {outcome:?}");

    writeln!(out, "Sum = {}", outcome.sum).context("Failed to write sum")?;
    writeln!(out, "Product = {}", outcome.product).context("Failed to write product")?;
    out.flush().context("Failed to flush report")?;

    Ok(outcome)
}
