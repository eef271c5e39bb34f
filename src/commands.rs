use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

use crate::digest::PprfOutput;
use crate::domain::PprfConfig;
use crate::error::PprfError;
use crate::keygen::{ModulusSource, RsaModulusSource};
use crate::pprf::Pprf;

/// A single step of a `run` script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Evaluate(u64),
    Puncture(u64),
}

impl FromStr for Operation {
    type Err = anyhow::Error;

    /// Parses `eval:X` or `puncture:X`
    fn from_str(s: &str) -> Result<Self> {
        let Some((verb, index)) = s.split_once(':') else {
            bail!("'{s}' is not an operation, expected eval:X or puncture:X");
        };
        let index: u64 = index
            .trim()
            .parse()
            .with_context(|| format!("'{index}' is not a valid domain index"))?;
        match verb.trim() {
            "eval" | "e" => Ok(Self::Evaluate(index)),
            "puncture" | "p" => Ok(Self::Puncture(index)),
            other => bail!("Unknown operation '{other}', expected eval or puncture"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Evaluate(x) => write!(f, "eval:{x}"),
            Self::Puncture(x) => write!(f, "puncture:{x}"),
        }
    }
}

/// Result of applying one [`Operation`]
#[derive(Debug)]
pub enum Outcome {
    Evaluated(u64, PprfOutput),
    Punctured { index: u64, changed: bool },
    Failed(Operation, PprfError),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Evaluated(x, out) => write!(f, "{x}: {out}"),
            Self::Punctured { index, changed: true } => write!(f, "{index}: punctured"),
            Self::Punctured {
                index,
                changed: false,
            } => write!(f, "{index}: already punctured"),
            Self::Failed(op, err) => write!(f, "{op}: error: {err}"),
        }
    }
}

/// Build a PPRF for `config` with a freshly generated modulus
///
/// # Errors
/// Returns an error if modulus generation fails
pub fn build_pprf(config: PprfConfig) -> Result<Pprf> {
    build_pprf_with(config, &mut RsaModulusSource::new())
}

/// Build a PPRF for `config` with the modulus taken from `source`
///
/// # Errors
/// Returns an error if `source` cannot produce a modulus
pub fn build_pprf_with<S: ModulusSource + ?Sized>(
    config: PprfConfig,
    source: &mut S,
) -> Result<Pprf> {
    Pprf::with_source(config, source).with_context(|| {
        format!(
            "Failed to set up PPRF ({}, domain size {})",
            config.security(),
            *config.domain()
        )
    })
}

/// Evaluate the PPRF at every point, failing on the first error
///
/// # Errors
/// Returns an error naming the first point that is out of range or punctured
pub fn evaluate_points(prf: &Pprf, points: &[u64]) -> Result<Vec<(u64, PprfOutput)>> {
    points
        .iter()
        .map(|&x| {
            prf.evaluate(x)
                .map(|out| (x, out))
                .with_context(|| format!("Failed to evaluate point {x}"))
        })
        .collect()
}

/// Apply `ops` in order against one PPRF instance
///
/// Failed operations are reported in place and do not stop the script.
pub fn run_script(prf: &Pprf, ops: &[Operation]) -> Vec<Outcome> {
    ops.iter()
        .map(|&op| match op {
            Operation::Evaluate(x) => match prf.evaluate(x) {
                Ok(out) => Outcome::Evaluated(x, out),
                Err(e) => Outcome::Failed(op, e),
            },
            Operation::Puncture(x) => match prf.puncture(x) {
                Ok(changed) => Outcome::Punctured { index: x, changed },
                Err(e) => Outcome::Failed(op, e),
            },
        })
        .collect()
}
