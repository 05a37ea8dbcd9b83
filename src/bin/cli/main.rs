mod app;
mod input;
mod render;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "mneme", about = "Spaced-repetition flashcards over markdown notes", version)]
struct Cli {
    /// Directory containing markdown flashcard notes
    notes_dir: PathBuf,

    /// Tag to filter cards by (default: all cards)
    deck_tag: Option<String>,

    /// Width of the content pane
    #[arg(short = 'w', long, default_value_t = 120)]
    content_width: u16,

    /// Print per-deck due counts and exit without reviewing
    #[arg(short, long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    app::run(
        &cli.notes_dir,
        cli.deck_tag.as_deref(),
        cli.summary,
        cli.content_width as usize,
    )
}
