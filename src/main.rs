use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use maze_crawl::Game;
use maze_crawl::engine::{Output, OutputBlock};

#[derive(Debug, Parser)]
#[command(name = "maze_crawl")]
#[command(about = "A turn-based text dungeon crawl through generated mazes", long_about = None)]
struct Args {
    /// Content catalog (TOML)
    #[arg(default_value = "content/dungeon.toml")]
    catalog: PathBuf,

    /// Seed for maze generation and battles; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the catalog's maze width
    #[arg(long)]
    width: Option<usize>,

    /// Override the catalog's maze height
    #[arg(long)]
    height: Option<usize>,
}

fn flush_output(out: Output) {
    let mut printed_anything = false;
    let mut started_events = false;

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => {
                println!("\n{}", t);
            }
            OutputBlock::Text(line) => {
                println!("{}", line);
            }
            OutputBlock::Event(ev) => {
                if !started_events {
                    if printed_anything {
                        println!(); // visual separation before first event
                    }
                    started_events = true;
                }
                println!("{}", ev);
            }
            OutputBlock::Exits(exits) => {
                println!("{}", exits);
            }
        }
        printed_anything = true;
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut catalog = maze_crawl::load_catalog_from_file(&args.catalog)
        .with_context(|| format!("failed to load catalog '{}'", args.catalog.display()))?;
    if let Some(width) = args.width {
        catalog.settings.width = width;
    }
    if let Some(height) = args.height {
        catalog.settings.height = height;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, catalog = %args.catalog.display(), "starting game");

    let mut game = Game::new(catalog, seed).context("failed to build the first level")?;
    flush_output(game.initialize()?);

    let stdin = io::stdin();

    loop {
        print!(">> ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes_read = stdin.read_line(&mut input)?;
        if bytes_read == 0 {
            println!("\nGoodbye.");
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (out, over) = game.step(input)?;
        flush_output(out);

        if over {
            break;
        }
    }

    Ok(())
}
