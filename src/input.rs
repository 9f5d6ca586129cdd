use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

use crate::config::GameMode;
use crate::entities::PlayerControls;
use crate::game::FrameInput;

/// One-shot actions triggered by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    TogglePause,
    SelectSinglePlayer,
    SelectTwoPlayers,
    Quit,
}

/// Mouse position in terminal cells and whether the left button is down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pointer {
    pub column: u16,
    pub row: u16,
    pub pressed: bool,
}

/// Manages input polling and translates raw terminal events into game input
pub struct InputManager {
    /// WASD + Space
    left_hand: PlayerControls,
    /// Arrows + Enter
    right_hand: PlayerControls,
    oneshot_actions: Vec<InputAction>,
    pointer: Pointer,
    /// Without release events held keys are dropped after every frame
    release_events: bool,
}

impl InputManager {
    pub fn new(release_events: bool) -> Self {
        Self {
            left_hand: PlayerControls::default(),
            right_hand: PlayerControls::default(),
            oneshot_actions: Vec::new(),
            pointer: Pointer::default(),
            release_events,
        }
    }

    /// Polls every pending event without blocking. Call once per frame.
    pub fn poll_events(&mut self) -> color_eyre::Result<()> {
        self.begin_frame();
        while event::poll(Duration::from_millis(0))? {
            self.handle_event(event::read()?);
        }

        Ok(())
    }

    /// Drops last frame's one-shot actions, and held keys when the terminal
    /// never reports their release
    pub fn begin_frame(&mut self) {
        if !self.release_events {
            self.left_hand = PlayerControls::default();
            self.right_hand = PlayerControls::default();
        }
        self.oneshot_actions.clear();
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event),
            KeyEventKind::Repeat => self.set_held(key_event.code, true),
            KeyEventKind::Release => self.set_held(key_event.code, false),
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent) {
        let action = match key_event.code {
            KeyCode::Char('c') | KeyCode::Char('C')
                if key_event.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(InputAction::Quit)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputAction::Quit),
            KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => {
                Some(InputAction::TogglePause)
            }
            KeyCode::Char('1') => Some(InputAction::SelectSinglePlayer),
            KeyCode::Char('2') => Some(InputAction::SelectTwoPlayers),
            _ => None,
        };

        match action {
            Some(action) => self.oneshot_actions.push(action),
            None => self.set_held(key_event.code, true),
        }
    }

    fn set_held(&mut self, code: KeyCode, held: bool) {
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') => self.left_hand.up = held,
            KeyCode::Char('s') | KeyCode::Char('S') => self.left_hand.down = held,
            KeyCode::Char('a') | KeyCode::Char('A') => self.left_hand.left = held,
            KeyCode::Char('d') | KeyCode::Char('D') => self.left_hand.right = held,
            KeyCode::Char(' ') => self.left_hand.fire = held,
            KeyCode::Up => self.right_hand.up = held,
            KeyCode::Down => self.right_hand.down = held,
            KeyCode::Left => self.right_hand.left = held,
            KeyCode::Right => self.right_hand.right = held,
            KeyCode::Enter => self.right_hand.fire = held,
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        self.pointer.column = mouse_event.column;
        self.pointer.row = mouse_event.row;
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                self.pointer.pressed = true;
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.pointer.pressed = false;
            }
            _ => {}
        }
    }

    /// One-shot actions from the last poll
    pub fn actions(&self) -> &[InputAction] {
        &self.oneshot_actions
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// Held controls for this frame. Single-player accepts either hand.
    pub fn frame_input(&self, mode: GameMode) -> FrameInput {
        let players = match mode {
            GameMode::Single => [merge(self.left_hand, self.right_hand), PlayerControls::default()],
            GameMode::Two => [self.left_hand, self.right_hand],
        };

        FrameInput {
            players,
            pause_toggled: self.oneshot_actions.contains(&InputAction::TogglePause),
            pause_command: None,
        }
    }
}

fn merge(a: PlayerControls, b: PlayerControls) -> PlayerControls {
    PlayerControls {
        up: a.up || b.up,
        down: a.down || b.down,
        left: a.left || b.left,
        right: a.right || b.right,
        fire: a.fire || b.fire,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_two_player_hands_are_separate() {
        let mut input = InputManager::new(true);
        input.handle_event(key(KeyCode::Char('a'), KeyEventKind::Press));
        input.handle_event(key(KeyCode::Enter, KeyEventKind::Press));

        let frame = input.frame_input(GameMode::Two);
        assert!(frame.players[0].left);
        assert!(!frame.players[0].fire);
        assert!(frame.players[1].fire);
        assert!(!frame.players[1].left);
    }

    #[test]
    fn test_single_player_accepts_both_hands() {
        let mut input = InputManager::new(true);
        input.handle_event(key(KeyCode::Right, KeyEventKind::Press));
        input.handle_event(key(KeyCode::Char(' '), KeyEventKind::Press));

        let frame = input.frame_input(GameMode::Single);
        assert!(frame.players[0].right);
        assert!(frame.players[0].fire);
        assert_eq!(frame.players[1], PlayerControls::default());
    }

    #[test]
    fn test_release_clears_held_key() {
        let mut input = InputManager::new(true);
        input.handle_event(key(KeyCode::Char('w'), KeyEventKind::Press));
        input.handle_event(key(KeyCode::Char('w'), KeyEventKind::Release));
        assert!(!input.frame_input(GameMode::Single).players[0].up);
    }

    #[test]
    fn test_pause_and_quit_are_one_shot() {
        let mut input = InputManager::new(true);
        input.handle_event(key(KeyCode::Esc, KeyEventKind::Press));
        input.handle_event(key(KeyCode::Char('q'), KeyEventKind::Press));

        assert_eq!(
            input.actions(),
            &[InputAction::TogglePause, InputAction::Quit]
        );
        assert!(input.frame_input(GameMode::Single).pause_toggled);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut input = InputManager::new(true);
        input.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(input.actions(), &[InputAction::Quit]);
    }

    #[test]
    fn test_begin_frame_clears_actions() {
        let mut input = InputManager::new(true);
        input.handle_event(key(KeyCode::Char('p'), KeyEventKind::Press));
        input.handle_event(key(KeyCode::Char('d'), KeyEventKind::Press));

        input.begin_frame();

        assert!(input.actions().is_empty());
        assert!(input.frame_input(GameMode::Single).players[0].right);
    }

    #[test]
    fn test_held_keys_expire_without_release_events() {
        let mut input = InputManager::new(false);
        input.handle_event(key(KeyCode::Char('d'), KeyEventKind::Press));
        input.begin_frame();
        assert!(!input.frame_input(GameMode::Single).players[0].right);
    }

    #[test]
    fn test_pointer_tracks_left_button() {
        let mut input = InputManager::new(true);
        input.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 12, 7));
        assert_eq!(
            input.pointer(),
            Pointer {
                column: 12,
                row: 7,
                pressed: true
            }
        );

        input.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 12, 7));
        assert!(!input.pointer().pressed);
    }
}
