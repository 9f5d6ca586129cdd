use ratatui::layout::{Position, Rect};

use crate::input::Pointer;

/// What a menu button does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SinglePlayer,
    TwoPlayers,
    Resume,
    Exit,
}

/// Clickable label occupying a block of terminal cells
#[derive(Debug, Clone)]
pub struct Button {
    pub label: &'static str,
    pub choice: MenuChoice,
    pub area: Rect,
    /// Latched while the pointer stays pressed after a click
    clicked: bool,
}

impl Button {
    pub fn new(label: &'static str, choice: MenuChoice) -> Self {
        Self {
            label,
            choice,
            area: Rect::default(),
            clicked: false,
        }
    }

    /// True on the first frame of a press inside the button; holding the
    /// button down does not activate it again.
    pub fn activated(&mut self, pointer: &Pointer) -> bool {
        let mut action = false;
        let inside = self.area.contains(Position::new(pointer.column, pointer.row));
        if inside && pointer.pressed && !self.clicked {
            self.clicked = true;
            action = true;
        }
        if !pointer.pressed {
            self.clicked = false;
        }
        action
    }
}

pub struct Menu {
    pub title: Option<&'static str>,
    pub buttons: Vec<Button>,
}

impl Menu {
    pub const BUTTON_WIDTH: u16 = 20;
    pub const BUTTON_HEIGHT: u16 = 3;

    /// Mode selection shown between runs
    pub fn main() -> Self {
        Self {
            title: Some("Space Invaders"),
            buttons: vec![
                Button::new("1 Player", MenuChoice::SinglePlayer),
                Button::new("2 Players", MenuChoice::TwoPlayers),
                Button::new("Exit", MenuChoice::Exit),
            ],
        }
    }

    pub fn pause() -> Self {
        Self {
            title: Some("Paused"),
            buttons: vec![
                Button::new("Resume", MenuChoice::Resume),
                Button::new("Exit", MenuChoice::Exit),
            ],
        }
    }

    /// Stacks the buttons in the middle of `area`, leaving two rows above for the title
    pub fn layout(&mut self, area: Rect) {
        let count = self.buttons.len() as u16;
        let stack_height = count * (Self::BUTTON_HEIGHT + 1);
        let x = area.x + area.width.saturating_sub(Self::BUTTON_WIDTH) / 2;
        let mut y = area.y + area.height.saturating_sub(stack_height) / 2 + 1;

        for button in &mut self.buttons {
            button.area = Rect {
                x,
                y,
                width: Self::BUTTON_WIDTH.min(area.width),
                height: Self::BUTTON_HEIGHT,
            }
            .intersection(area);
            y += Self::BUTTON_HEIGHT + 1;
        }
    }

    /// Area covering the title and every button
    pub fn bounds(&self) -> Rect {
        self.buttons
            .iter()
            .fold(Rect::default(), |bounds, button| {
                if bounds.area() == 0 {
                    button.area
                } else {
                    bounds.union(button.area)
                }
            })
    }

    /// Ignores a press already in progress when the menu appears, so the
    /// click that opened it cannot also activate one of its buttons.
    pub fn hold_until_release(&mut self, pointer: &Pointer) {
        for button in &mut self.buttons {
            button.clicked = pointer.pressed;
        }
    }

    /// First button activated by the pointer this frame
    pub fn poll(&mut self, pointer: &Pointer) -> Option<MenuChoice> {
        let mut choice = None;
        // Every button sees the pointer so their latches stay in step
        for button in &mut self.buttons {
            if button.activated(pointer) && choice.is_none() {
                choice = Some(button.choice);
            }
        }
        choice
    }
}
