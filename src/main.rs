#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use othello::{init_logging, Console, Opening, PassPolicy, SessionOptions};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Two-player Othello on the console.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, value_parser = parse_dimension, help = "Number of rows (even, 4-26); prompt when omitted")]
    rows: Option<usize>,
    #[arg(long, value_parser = parse_dimension, help = "Number of columns (even, 4-26); prompt when omitted")]
    cols: Option<usize>,
    #[arg(long, help = "Fix RNG seed for a reproducible first-turn draw (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Only allow 'skip' when the player has no legal move")]
    strict_pass: bool,
    #[arg(long, help = "Start from an empty board instead of the four centre discs")]
    empty_start: bool,
}

#[cfg(feature = "std")]
fn parse_dimension(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    othello::validate_dimension(size).map_err(|e| e.to_string())?;
    Ok(size)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let options = SessionOptions {
        rows: cli.rows,
        cols: cli.cols,
        pass_policy: if cli.strict_pass {
            PassPolicy::WhenBlocked
        } else {
            PassPolicy::Always
        },
        opening: if cli.empty_start {
            Opening::Empty
        } else {
            Opening::Standard
        },
    };

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    let mut engine = console.setup(&options, &mut rng)?;
    console.run_game(&mut engine)?;
    Ok(())
}
