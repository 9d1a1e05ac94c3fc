//! Last: be the one who takes the last piece.
//!
//! Main entry point for the game.

use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use last_core::{TICK_MILLIS, default_levels};
use last_tui::App;

/// Last - outlast your rival on a living board
#[derive(Parser, Debug)]
#[command(name = "last")]
#[command(author, version, about = "Last - outlast your rival on a living board", long_about = None)]
struct Args {
    /// Level to start on (1-based)
    #[arg(short = 'l', long = "level", default_value_t = 1)]
    level: usize,

    /// Seed the random generator for a reproducible game
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// List the level catalog and exit
    #[arg(long = "list-levels")]
    list_levels: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.list_levels {
        list_levels();
        return Ok(());
    }

    let level_index = args.level.saturating_sub(1);
    let mut app = App::new(level_index, args.seed)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(TICK_MILLIS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Windows terminals report both press and release.
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }
        if last_tick.elapsed() >= tick {
            app.on_tick()?;
            last_tick = Instant::now();
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn list_levels() {
    println!("Level  Total  Limit  Mode");
    for (i, level) in default_levels().iter().enumerate() {
        println!(
            "{:>5}  {:>5}  {:>5}  {}",
            i + 1,
            level.total_cells,
            level.capture_limit,
            if level.hard { "hard" } else { "easy" },
        );
    }
}
