//! Terminal frontend for the alien ruin expedition.

mod chronicle;
mod summary;
mod terminal;

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;

use ruin_engine::{Expedition, GameConfig};

use crate::terminal::{PacedOutput, StdinInput};

#[derive(Parser)]
#[command(
    name = "ruins",
    about = "Explore an alien ruin: find three artifacts, face the guardian",
    version
)]
struct Args {
    /// RNG seed for a reproducible expedition (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Milliseconds between narrated characters
    #[arg(long, default_value = "30")]
    delay_ms: u64,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Skip the opening narration
    #[arg(long)]
    skip_intro: bool,

    /// Write the expedition journal here when the game ends (.md, .txt, or .json)
    #[arg(long)]
    chronicle: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = GameConfig::default()
        .with_seed(seed)
        .with_text_delay(Duration::from_millis(args.delay_ms))
        .with_intro(!args.skip_intro);

    if args.seed.is_none() {
        println!("  {}", format!("(seed {seed})").dimmed());
    }

    let mut input = StdinInput::new();
    let mut output = PacedOutput::new(config.text_delay);
    let mut expedition = Expedition::new(config);

    let terminal = expedition
        .run(&mut input, &mut output)
        .map_err(|e| e.to_string())?;

    println!();
    println!("{}", summary::render(&expedition, terminal, !args.no_color));

    if let Some(path) = &args.chronicle {
        chronicle::write(expedition.journal(), path)?;
        println!("  Chronicle written to {}", path.display());
    }

    Ok(())
}
