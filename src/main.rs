#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use bayes_search::{
    init_logging, run_session, AreaBias, LocalGrid, PlacementPolicy, SearchConfig, Termination,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum BiasArg {
    Upper,
    Midpoint,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum GridArg {
    FirstArea,
    ChosenArea,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive search from the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible searches (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(
            long,
            value_delimiter = ',',
            help = "Starting probabilities for areas 1-3 (e.g., --priors 0.2,0.5,0.3)"
        )]
        priors: Option<Vec<f64>>,
        #[arg(long, value_enum, default_value_t = BiasArg::Upper)]
        area_bias: BiasArg,
        #[arg(long, value_enum, default_value_t = GridArg::FirstArea)]
        local_grid: GridArg,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            priors,
            area_bias,
            local_grid,
        } => {
            let mut config = SearchConfig::default();
            if let Some(p) = priors {
                if p.len() != config.priors.len() {
                    return Err(anyhow::anyhow!(
                        "expected {} priors, got {}",
                        config.priors.len(),
                        p.len()
                    ));
                }
                config.priors.copy_from_slice(&p);
            }
            config.placement = PlacementPolicy {
                area_bias: match area_bias {
                    BiasArg::Upper => AreaBias::Upper,
                    BiasArg::Midpoint => AreaBias::Midpoint,
                },
                local_grid: match local_grid {
                    GridArg::FirstArea => LocalGrid::FirstArea,
                    GridArg::ChosenArea => LocalGrid::ChosenArea,
                },
            };

            if let Some(s) = seed {
                println!("Using fixed seed: {} (search will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            let summary = run_session(&config, &mut rng, &mut input, &mut output)?;
            if summary.termination == Termination::Found {
                println!("🎉 Rescue complete.");
            }
        }
    }
    Ok(())
}
