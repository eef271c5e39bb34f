use clap::{Parser, Subcommand};

use crate::commands::Operation;
use crate::domain::{DomainSize, SecurityParameter};

/// Validates the modulus size (>= 2048 bits, multiple of 8)
fn validate_security(s: &str) -> Result<SecurityParameter, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    SecurityParameter::new(value).map_err(|e| e.to_string())
}

/// Validates the domain size (>= 232, multiple of 232)
fn validate_domain(s: &str) -> Result<DomainSize, String> {
    let value: u64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    DomainSize::new(value).map_err(|e| e.to_string())
}

fn parse_index(s: &str) -> Result<u64, String> {
    s.parse()
        .map_err(|_| format!("'{s}' is not a valid domain index"))
}

fn parse_operation(s: &str) -> Result<Operation, String> {
    s.parse().map_err(|e: anyhow::Error| format!("{e:#}"))
}

#[derive(Parser)]
#[command(name = "pprf")]
#[command(about = "Evaluate and puncture a puncturable PRF based on the strong RSA assumption")]
pub struct Cli {
    /// Modulus size in bits (>= 2048, multiple of 8)
    #[arg(short = 'b', long, default_value = "2048", value_parser = validate_security)]
    pub security_bits: SecurityParameter,

    /// Number of domain points (>= 232, multiple of 232)
    #[arg(short, long, default_value = "232", value_parser = validate_domain)]
    pub domain_size: DomainSize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a fresh PPRF at the given points
    Eval {
        #[arg(required = true, value_parser = parse_index)]
        points: Vec<u64>,
    },
    /// Apply a sequence of operations (eval:X, puncture:X) to one PPRF
    Run {
        #[arg(required = true, value_parser = parse_operation)]
        ops: Vec<Operation>,
    },
    /// Print the prime bound to each shard-local index
    Primes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pprf", "eval", "0"]).unwrap();
        assert_eq!(*cli.security_bits, 2048);
        assert_eq!(*cli.domain_size, 232);
        assert!(matches!(cli.command, Commands::Eval { ref points } if points == &[0]));
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(Cli::try_parse_from(["pprf", "-b", "2047", "eval", "0"]).is_err());
        assert!(Cli::try_parse_from(["pprf", "-d", "100", "eval", "0"]).is_err());
        assert!(Cli::try_parse_from(["pprf", "eval", "x"]).is_err());
    }

    #[test]
    fn test_run_operations() {
        let cli =
            Cli::try_parse_from(["pprf", "-d", "464", "run", "eval:0", "puncture:0", "eval:300"])
                .unwrap();
        let Commands::Run { ops } = cli.command else {
            panic!("expected run");
        };
        assert_eq!(
            ops,
            vec![
                Operation::Evaluate(0),
                Operation::Puncture(0),
                Operation::Evaluate(300)
            ]
        );
        assert!(Cli::try_parse_from(["pprf", "run", "drop:1"]).is_err());
    }
}
