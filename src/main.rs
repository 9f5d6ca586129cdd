use clap::Parser;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::PathBuf;
use std::sync::Mutex;
use std::{fs::OpenOptions, io::stdout};
use tracing_subscriber::filter::EnvFilter;

use space_invader::app::{App, AppOptions};
use space_invader::config::{GameConfig, GameMode};

#[derive(Parser)]
#[command(name = "space_invader")]
#[command(about = "Terminal Space Invaders for one or two players")]
struct Args {
    /// Skip the menu and start with this many players
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    players: Option<u8>,
    /// Seed for enemy spawns and behavior
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 60)]
    fps: u32,
    #[arg(long, default_value_t = 5)]
    lives: i32,
    /// Where tracing output goes; the terminal is busy drawing the game
    #[arg(long, default_value = "debug.log")]
    log_file: PathBuf,
    #[arg(long, default_value = "assets/sounds/laser.wav")]
    sound: PathBuf,
    #[arg(long)]
    mute: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&args.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let supports_keyboard_enhancement = matches!(
        crossterm::terminal::supports_keyboard_enhancement(),
        Ok(true)
    );
    tracing::info!(supports_keyboard_enhancement, "starting");

    let config = GameConfig {
        fps: args.fps,
        lives: args.lives,
        ..GameConfig::default()
    };
    let options = AppOptions {
        start_mode: args.players.map(|players| match players {
            1 => GameMode::Single,
            _ => GameMode::Two,
        }),
        seed: args.seed,
        sound_path: (!args.mute).then_some(args.sound),
        release_events: supports_keyboard_enhancement,
    };

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Release events need the enhancement flags, pushed after entering the alternate screen
    if supports_keyboard_enhancement {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = App::new(config, options).run(&mut terminal);

    // Cleanup
    if supports_keyboard_enhancement {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}
