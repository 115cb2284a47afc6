//! CLI entry point for memory-game
//!
//! Launches the GUI by default. The `deal` subcommand prints a board
//! layout to the terminal, handy for checking a seed.

use clap::{Parser, Subcommand};
use colored::*;
use memory_game::config::GameConfig;
use memory_game::core::board::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use memory_game::ui::App;

#[derive(Parser)]
#[command(name = "memory-game")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for a reproducible deal (random when omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the game window (default)
    Play,

    /// Print a dealt board and exit
    Deal {
        /// Number of columns
        #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
        columns: usize,

        /// Number of rows
        #[arg(short, long, default_value_t = DEFAULT_ROWS)]
        rows: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut config = GameConfig::default();
            config.seed = cli.seed;
            play(config)?
        }
        Commands::Deal { columns, rows } => {
            let mut config = GameConfig::with_dimensions(columns, rows);
            config.seed = cli.seed;
            print_deal(&config)?
        }
    }

    Ok(())
}

/// Deal the board and run the GUI
fn play(config: GameConfig) -> anyhow::Result<()> {
    let app = App::new(config).map_err(|e| anyhow::anyhow!("Failed to start game: {}", e))?;
    app.run();
    Ok(())
}

/// Print the dealt colours row by row
fn print_deal(config: &GameConfig) -> anyhow::Result<()> {
    let board = config.build_board()?;

    println!(
        "{} Dealt {}x{} board ({} pairs)\n",
        "✓".green(),
        board.columns(),
        board.rows(),
        board.len() / 2
    );

    for row in 0..board.rows() {
        let line: Vec<String> = (0..board.columns())
            .filter_map(|col| board.card_at(col, row))
            .map(|card| {
                let color = card.identity_color();
                format!(
                    "{} {}",
                    "██".truecolor(color.red, color.green, color.blue),
                    color.to_hex().dimmed()
                )
            })
            .collect();

        println!("{}", line.join("  "));
    }

    Ok(())
}
