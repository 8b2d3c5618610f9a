use clap::Parser;

use wheel_rs::config::WheelConfig;
use wheel_rs::wheel::Wheel;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Candidate numbers (distinct, within 1..=49 by default).
    #[arg(value_name = "INT", num_args = 0..)]
    numbers: Vec<u32>,

    /// Use the universe 1..=N instead of an explicit number list.
    #[clap(long, value_name = "INT", conflicts_with = "numbers")]
    range: Option<u32>,

    /// Minimum pairwise hits to guarantee in the reduced set.
    #[clap(long, value_name = "INT", default_value = "3")]
    min_hits: u32,

    /// Upper bound on the reduced set size.
    #[clap(long, value_name = "INT", default_value = "3000")]
    max: usize,

    /// Seed for the random source (omit for a fresh selection each run).
    #[clap(long, value_name = "INT")]
    seed: Option<u64>,

    /// Print every combination of the reduced set.
    #[clap(long)]
    full: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    let numbers: Vec<u32> = match args.range {
        Some(n) => (1..=n).collect(),
        None => args.numbers.clone(),
    };

    let config = WheelConfig {
        max_reduced_count: args.max,
        ..WheelConfig::default()
    };
    let mut wheel = match args.seed {
        Some(seed) => Wheel::with_seed(config, seed),
        None => Wheel::new(config),
    };

    wheel.set_universe(&numbers)?;
    println!("universe = {:?}", wheel.universe());

    let pool = wheel.generate(wheel.config().combination_size)?;
    println!("pool size = {}", pool.len());

    let selection = wheel.reduce(args.min_hits)?;
    println!("reduced to {} combinations", selection.len());

    if args.full {
        for (i, combo) in selection.iter().enumerate() {
            println!("combination {}: {}", i + 1, combo);
        }
    }

    let ok = wheel.validate(&selection, args.min_hits);
    println!(
        "validation ({} minimum hits per pair): {}",
        args.min_hits,
        if ok { "passed" } else { "FAILED (small-pool shortcut taken)" }
    );

    println!("All done in {:.3} s", time_total.elapsed().as_secs_f64());
    Ok(())
}
