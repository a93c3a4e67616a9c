use anyhow::bail;
use clap::Parser;
use securebox::boxes::{LockBox, SecureBox};
use securebox::render::render;
use securebox::{presets, solver};

#[derive(Parser)]
struct Cli {
    /// Grid height.
    #[clap(long, short = 'y', default_value_t = 10)]
    y_size: usize,
    /// Grid width.
    #[clap(long, short = 'x', default_value_t = 10)]
    x_size: usize,
    /// Named preset overriding -y/-x.
    #[clap(long, short = 'p')]
    preset: Option<String>,
    /// Seed for the scramble. Random when omitted.
    #[clap(long, short = 's')]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let (y, x) = match &args.preset {
        Some(name) => match presets::get_preset(name) {
            Some(p) => (p.y_size, p.x_size),
            None => bail!("unknown preset: {}", name),
        },
        None => (args.y_size, args.x_size),
    };
    if y == 0 || x == 0 {
        bail!("box dimensions must be positive");
    }

    let mut bx = SecureBox::new(y, x, args.seed);
    println!("Scrambled box:");
    println!("{}", render(&bx.state()));

    let locked = solver::open_box(&mut bx, y, x);
    println!("Solved box:");
    println!("{}", render(&bx.state()));

    if locked {
        println!("BOX: LOCKED!");
        std::process::exit(1);
    }
    println!("BOX: OPENED!");
    Ok(())
}
