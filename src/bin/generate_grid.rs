use anyhow::bail;
use clap::Parser;
use securebox::boxes::Snapshot;
use securebox::gridgen;

#[derive(Parser)]
struct Cli {
    /// Grid height.
    #[clap(long, short = 'y', default_value_t = 10)]
    y_size: usize,
    /// Grid width.
    #[clap(long, short = 'x', default_value_t = 10)]
    x_size: usize,
    /// Seed for the scramble. Random when omitted.
    #[clap(long, short = 's')]
    seed: Option<u64>,
    #[clap(long, short = 'c', default_value_t = false)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    if args.y_size == 0 || args.x_size == 0 {
        bail!("box dimensions must be positive");
    }
    let snapshot = Snapshot {
        cells: gridgen::random::scramble(args.y_size, args.x_size, args.seed),
    };
    if args.compact {
        println!("{}", serde_json::to_string(&snapshot)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
