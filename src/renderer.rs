use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::entities::{EnemyKind, LaserColor};
use crate::menu::Menu;
use crate::snapshot::{HealthBar, Snapshot, Sprite, SpriteDraw};

/// Maps world units onto the cells of the play field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub field: Rect,
    play_width: i64,
    play_height: i64,
}

impl Viewport {
    /// Largest field inside `area` that keeps the world's aspect ratio,
    /// counting a cell as twice as tall as it is wide.
    pub fn fit(area: Rect, play_width: i32, play_height: i32) -> Self {
        let play_width = i64::from(play_width.max(1));
        let play_height = i64::from(play_height.max(1));

        let mut height = i64::from(area.height);
        let mut width = height * 2 * play_width / play_height;
        if width > i64::from(area.width) {
            width = i64::from(area.width);
            height = width * play_height / (2 * play_width);
        }
        let (width, height) = (width as u16, height as u16);

        Self {
            field: Rect {
                x: area.x + (area.width - width) / 2,
                y: area.y + (area.height - height) / 2,
                width,
                height,
            },
            play_width,
            play_height,
        }
    }

    /// Cell rectangle covering a world rectangle, clipped to the field.
    /// None when nothing of it is on screen.
    pub fn project(&self, x: i32, y: i32, width: i32, height: i32) -> Option<Rect> {
        let columns = i64::from(self.field.width);
        let rows = i64::from(self.field.height);
        let floor = |v: i32, cells: i64, world: i64| (i64::from(v) * cells).div_euclid(world);
        let ceil = |v: i32, cells: i64, world: i64| {
            (i64::from(v) * cells + world - 1).div_euclid(world)
        };

        let left = floor(x, columns, self.play_width);
        let top = floor(y, rows, self.play_height);
        let right = ceil(x + width, columns, self.play_width).max(left + 1);
        let bottom = ceil(y + height, rows, self.play_height).max(top + 1);

        let (left, top) = (left.max(0), top.max(0));
        let (right, bottom) = (right.min(columns), bottom.min(rows));
        if left >= right || top >= bottom {
            return None;
        }

        Some(Rect {
            x: self.field.x + left as u16,
            y: self.field.y + top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer {}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Renders the mode selection screen
    pub fn render_main_menu(&self, frame: &mut Frame, menu: &Menu) {
        let area = frame.area();
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
            area,
        );
        self.render_menu(frame, menu, Color::Cyan);

        let hint = Line::from(vec![Span::styled(
            "[1/2: Choose mode] [Click a button] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);
        let hint_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(2),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(hint).centered(), hint_area);
    }

    /// Renders a running, paused or lost game
    pub fn render_game(&self, frame: &mut Frame, snapshot: &Snapshot, pause_menu: &Menu, fps: u32) {
        let area = frame.area();
        let playable = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height.saturating_sub(2),
        };
        let viewport = Viewport::fit(playable, snapshot.play_width, snapshot.play_height);

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));
        let border = Rect {
            x: viewport.field.x.saturating_sub(1),
            width: (viewport.field.width + 2).min(area.width),
            ..viewport.field
        };
        frame.render_widget(block, border);

        let buffer = frame.buffer_mut();
        for draw in &snapshot.sprites {
            render_sprite(buffer, &viewport, draw);
        }
        for bar in &snapshot.health_bars {
            render_health_bar(buffer, &viewport, bar);
        }

        self.render_hud(frame, area, snapshot, fps);

        if snapshot.is_lost() {
            let banner = Rect {
                x: viewport.field.x,
                y: viewport.field.y + viewport.field.height / 2,
                width: viewport.field.width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Line::from("You Lost!!").centered().white().bold()),
                banner,
            );
        } else if snapshot.is_paused() {
            self.render_pause_overlay(frame, pause_menu);
        }
    }

    fn render_hud(&self, frame: &mut Frame, area: Rect, snapshot: &Snapshot, fps: u32) {
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("Lives: ", label),
            Span::styled(format!("{}", snapshot.lives), value),
        ];
        for bar in &snapshot.health_bars {
            let name = if snapshot.player_count > 1 {
                format!("  P{} HP: ", bar.slot + 1)
            } else {
                "  HP: ".to_string()
            };
            spans.push(Span::styled(name, label));
            spans.push(Span::styled(
                format!("{}", bar.health),
                Style::default()
                    .fg(health_color(bar.ratio))
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let hud_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), hud_area);

        let level = Line::from(vec![
            Span::styled("FPS: ", label),
            Span::styled(format!("{}", fps), value),
            Span::styled("  Level: ", label),
            Span::styled(format!("{}", snapshot.level), value),
        ]);
        frame.render_widget(Paragraph::new(level).alignment(Alignment::Right), hud_area);

        let controls = if snapshot.player_count > 1 {
            "[P1: WASD + Space] [P2: Arrows + Enter] [Esc/P: Pause] [Q: Quit]"
        } else {
            "[WASD/Arrows: Move] [Space: Fire] [Esc/P: Pause] [Q: Quit]"
        };
        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(controls, label))).centered(),
            controls_area,
        );
    }

    fn render_pause_overlay(&self, frame: &mut Frame, menu: &Menu) {
        let bounds = menu.bounds();
        let panel = Rect {
            x: bounds.x.saturating_sub(4),
            y: bounds.y.saturating_sub(3),
            width: bounds.width + 8,
            height: bounds.height + 4,
        }
        .intersection(frame.area());

        frame.render_widget(Clear, panel);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
            panel,
        );
        self.render_menu(frame, menu, Color::Yellow);
    }

    fn render_menu(&self, frame: &mut Frame, menu: &Menu, accent: Color) {
        let bounds = menu.bounds();
        if let Some(title) = menu.title {
            let title_area = Rect {
                x: frame.area().x,
                y: bounds.y.saturating_sub(2),
                width: frame.area().width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Line::from(title).centered().bold().fg(accent)),
                title_area,
            );
        }

        for button in &menu.buttons {
            frame.render_widget(
                Paragraph::new(Line::from(button.label).centered().white().bold()).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(accent)),
                ),
                button.area,
            );
        }
    }
}

fn health_color(ratio: f64) -> Color {
    if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.25 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn sprite_lines(sprite: Sprite) -> &'static [&'static str] {
    match sprite {
        Sprite::Player(_) => &[" /^\\ ", "<|||>", " ||| "],
        Sprite::Enemy(EnemyKind::Boss) => &["[=====]", "|#\\V/#|", " \\###/ "],
        Sprite::Enemy(_) => &[" \\|/ ", "{===}", " /_\\ "],
        Sprite::Laser(_) => &["|"],
    }
}

fn sprite_color(sprite: Sprite) -> Color {
    match sprite {
        Sprite::Player(0) => Color::Yellow,
        Sprite::Player(_) => Color::Cyan,
        Sprite::Enemy(EnemyKind::Red) | Sprite::Laser(LaserColor::Red) => Color::Red,
        Sprite::Enemy(EnemyKind::Green) | Sprite::Laser(LaserColor::Green) => Color::Green,
        Sprite::Enemy(EnemyKind::Blue) | Sprite::Laser(LaserColor::Blue) => Color::Blue,
        Sprite::Enemy(EnemyKind::Boss) => Color::Magenta,
        Sprite::Laser(LaserColor::Yellow) => Color::LightYellow,
    }
}

fn render_sprite(buffer: &mut Buffer, viewport: &Viewport, draw: &SpriteDraw) {
    let style = Style::default()
        .fg(sprite_color(draw.sprite))
        .add_modifier(Modifier::BOLD);

    // Lasers are mostly transparent; only the beam is drawn
    let (x, y, width, height) = match draw.sprite {
        Sprite::Laser(_) => {
            let (sx, sy, sw, sh) = draw.solid;
            (draw.x + sx, draw.y + sy, sw, sh)
        }
        _ => (draw.x, draw.y, draw.width, draw.height),
    };
    let Some(cells) = viewport.project(x, y, width, height) else {
        return;
    };

    let lines = sprite_lines(draw.sprite);
    for row in 0..cells.height {
        // Stretch the art over however many rows the sprite covers
        let line = lines[(row as usize * lines.len()) / cells.height as usize];
        let text: String = line.chars().cycle().take(cells.width as usize).collect();
        buffer.set_stringn(cells.x, cells.y + row, text, cells.width as usize, style);
    }
}

fn render_health_bar(buffer: &mut Buffer, viewport: &Viewport, bar: &HealthBar) {
    let Some(cells) = viewport.project(bar.x, bar.y, bar.width, 1) else {
        return;
    };
    let filled = ((f64::from(cells.width) * bar.ratio).round() as u16).min(cells.width);

    buffer.set_stringn(
        cells.x,
        cells.y,
        "█".repeat(filled as usize),
        filled as usize,
        Style::default().fg(Color::Green),
    );
    buffer.set_stringn(
        cells.x + filled,
        cells.y,
        "█".repeat((cells.width - filled) as usize),
        (cells.width - filled) as usize,
        Style::default().fg(Color::Red),
    );
}
