use clap::Parser;
use securebox::boxes::{self, LockBox};
use securebox::solver;

#[derive(Parser)]
struct Cli {
    /// Print the toggle list as compact JSON instead of `row col` lines.
    #[clap(long, short = 'c', default_value_t = false)]
    compact: bool,
    /// Also apply the toggles and print the final verdict.
    #[clap(long, short = 'a', default_value_t = false)]
    apply: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let mut bx = boxes::get_box_from_stdin()?;
    let (y, x) = (bx.y_size(), bx.x_size());
    let toggles = solver::solve_state(&bx.state(), y, x)?;

    if args.compact {
        println!("{}", serde_json::to_string(&toggles)?);
    } else {
        for &(row, col) in &toggles {
            println!("{} {}", row, col);
        }
    }

    if args.apply {
        for &(row, col) in &toggles {
            bx.toggle(row, col);
        }
        println!(
            "{}",
            if bx.is_locked() {
                "BOX: LOCKED!"
            } else {
                "BOX: OPENED!"
            }
        );
    }
    Ok(())
}
