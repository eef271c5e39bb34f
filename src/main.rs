use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use pprf::cli::{Cli, Commands};
use pprf::commands::{build_pprf, evaluate_points, run_script};
use pprf::domain::PprfConfig;
use pprf::primes::PRIME_TABLE;

fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));
    let cli = Cli::parse();
    let config = PprfConfig::new(cli.security_bits, cli.domain_size);

    match cli.command {
        Commands::Eval { points } => {
            let prf = build_pprf(config)?;
            for (x, out) in evaluate_points(&prf, &points)? {
                println!("{x}: {out}");
            }
        }
        Commands::Run { ops } => {
            let prf = build_pprf(config)?;
            for outcome in run_script(&prf, &ops) {
                println!("{outcome}");
            }
        }
        Commands::Primes => {
            for (i, p) in PRIME_TABLE.iter().enumerate() {
                println!("{i}: {p}");
            }
        }
    }

    Ok(())
}
