use color_eyre::Result;
use rand::Rng;
use ratatui::{Terminal, backend::Backend, layout::Rect};
use std::path::PathBuf;

use crate::audio::AudioManager;
use crate::clock::FrameClock;
use crate::config::{GameConfig, GameMode};
use crate::game::{Game, PauseCommand};
use crate::input::{InputAction, InputManager, Pointer};
use crate::menu::{Menu, MenuChoice};
use crate::renderer::GameRenderer;
use crate::session::GameState;

/// Startup choices from the command line
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// Skip the main menu and start a run in this mode
    pub start_mode: Option<GameMode>,
    /// Fixed seed for every run; random per run otherwise
    pub seed: Option<u64>,
    pub sound_path: Option<PathBuf>,
    /// Terminal reports key releases
    pub release_events: bool,
}

enum Screen {
    MainMenu,
    Playing(Game),
}

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    screen: Screen,
    config: GameConfig,
    seed: Option<u64>,
    main_menu: Menu,
    pause_menu: Menu,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    audio_manager: AudioManager,
    clock: FrameClock,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: GameConfig, options: AppOptions) -> Self {
        let audio_manager = match &options.sound_path {
            Some(path) => AudioManager::load_or_silent(path),
            None => AudioManager::silent(),
        };
        tracing::info!(sound = audio_manager.is_enabled(), fps = config.fps, "app started");

        let mut app = Self {
            running: true,
            screen: Screen::MainMenu,
            clock: FrameClock::new(config.fps),
            config,
            seed: options.seed,
            main_menu: Menu::main(),
            pause_menu: Menu::pause(),
            input_manager: InputManager::new(options.release_events),
            renderer: GameRenderer::new(),
            audio_manager,
        };

        if let Some(mode) = options.start_mode {
            app.start_run(mode);
        }

        app
    }

    /// Run the application's main loop.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while self.running {
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            self.main_menu.layout(area);
            self.pause_menu.layout(area);

            self.input_manager.poll_events()?;
            self.update();

            terminal.draw(|frame| match &self.screen {
                Screen::MainMenu => self.renderer.render_main_menu(frame, &self.main_menu),
                Screen::Playing(game) => self.renderer.render_game(
                    frame,
                    &game.snapshot(),
                    &self.pause_menu,
                    self.clock.fps(),
                ),
            })?;

            self.clock.tick();
        }

        tracing::info!(frames = self.clock.frames(), "exiting");
        Ok(())
    }

    fn start_run(&mut self, mode: GameMode) {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        self.screen = Screen::Playing(Game::new(self.config.clone(), mode, seed));
    }

    /// Applies this frame's input to whichever screen is showing
    fn update(&mut self) {
        if self.input_manager.actions().contains(&InputAction::Quit) {
            self.running = false;
            return;
        }

        let pointer = self.input_manager.pointer();
        let Screen::Playing(game) = &mut self.screen else {
            self.update_main_menu(&pointer);
            return;
        };

        let mut input = self.input_manager.frame_input(game.mode);
        if game.state() == GameState::Paused {
            input.pause_command = match self.pause_menu.poll(&pointer) {
                Some(MenuChoice::Resume) => Some(PauseCommand::Resume),
                Some(MenuChoice::Exit) => Some(PauseCommand::Exit),
                _ => None,
            };
        }
        let events = game.tick(&input);
        self.audio_manager.play_frame(&events);

        if events.state_changed == Some(GameState::Paused) {
            self.pause_menu.hold_until_release(&pointer);
        }
        if game.session.is_over() {
            self.screen = Screen::MainMenu;
            self.main_menu.hold_until_release(&pointer);
        }
    }

    fn update_main_menu(&mut self, pointer: &Pointer) {
        let choice = self.main_menu.poll(pointer).or_else(|| {
            self.input_manager
                .actions()
                .iter()
                .find_map(|action| match action {
                    InputAction::SelectSinglePlayer => Some(MenuChoice::SinglePlayer),
                    InputAction::SelectTwoPlayers => Some(MenuChoice::TwoPlayers),
                    _ => None,
                })
        });

        match choice {
            Some(MenuChoice::SinglePlayer) => self.start_run(GameMode::Single),
            Some(MenuChoice::TwoPlayers) => self.start_run(GameMode::Two),
            Some(MenuChoice::Exit) => self.running = false,
            Some(MenuChoice::Resume) | None => {}
        }
    }
}
