//! Terminal rendering for the game.
//!
//! The playfield is sampled into half-block cells ("▀" with the upper pixel
//! as foreground and the lower as background), letterboxed to keep its
//! proportions. Text (HUD, username, title, game-over panel) is laid over it.

use super::centered_rect;
use crate::config::GameConfig;
use crate::constants::{GRASS_HEIGHT, PIPE_LIP_HEIGHT, PIPE_LIP_OVERHANG};
use crate::game::{FlappyGame, Phase};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// What occupies a point of the playfield, front-most layer first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCell {
    BirdBeak,
    BirdPupil,
    BirdEye,
    BirdBody,
    Grass,
    Ground,
    PipeLip,
    Pipe,
    Sky,
}

impl SceneCell {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::BirdBeak => (255, 165, 0),
            Self::BirdPupil => (0, 0, 0),
            Self::BirdEye => (255, 255, 255),
            Self::BirdBody => (255, 255, 0),
            Self::Grass => (92, 152, 41),
            Self::Ground => (203, 189, 147),
            Self::PipeLip => (6, 64, 43),
            Self::Pipe => (0, 100, 0),
            Self::Sky => (98, 177, 234),
        }
    }
}

/// Classify a playfield point.
pub fn sample(game: &FlappyGame, x: f64, y: f64) -> SceneCell {
    if let Some(cell) = sample_bird(game, x, y) {
        return cell;
    }

    let ground_top = game.config.ground_top();
    if y >= ground_top {
        return if y < ground_top + GRASS_HEIGHT {
            SceneCell::Grass
        } else {
            SceneCell::Ground
        };
    }

    for pipe in &game.pipes {
        let in_lip_x = x >= pipe.x - PIPE_LIP_OVERHANG && x < pipe.right() + PIPE_LIP_OVERHANG;
        let in_top_lip = y >= pipe.gap_top - PIPE_LIP_HEIGHT && y < pipe.gap_top;
        let in_bottom_lip = y >= pipe.gap_bottom() && y < pipe.gap_bottom() + PIPE_LIP_HEIGHT;
        if in_lip_x && (in_top_lip || in_bottom_lip) {
            return SceneCell::PipeLip;
        }

        let in_body_x = x >= pipe.x && x < pipe.right();
        if in_body_x && (y < pipe.gap_top || y >= pipe.gap_bottom()) {
            return SceneCell::Pipe;
        }
    }

    SceneCell::Sky
}

fn sample_bird(game: &FlappyGame, x: f64, y: f64) -> Option<SceneCell> {
    let bird = &game.bird;
    let (bx, by, w, h) = (bird.x(), bird.y, bird.width(), bird.height());

    // Beak: triangle pointing right from the body's front edge
    if x >= bx + w && x < bx + w + 15.0 {
        let t = (x - (bx + w)) / 15.0;
        let half = (h / 2.0 - 10.0) * (1.0 - t);
        let mid = by + h / 2.0;
        if (y - mid).abs() <= half {
            return Some(SceneCell::BirdBeak);
        }
    }
    if in_ellipse(x, y, bx + w - 12.0, by + 7.0, 5.0, 5.0) {
        return Some(SceneCell::BirdPupil);
    }
    if in_ellipse(x, y, bx + w - 15.0, by + 5.0, 10.0, 10.0) {
        return Some(SceneCell::BirdEye);
    }
    if in_ellipse(x, y, bx, by, w, h) {
        return Some(SceneCell::BirdBody);
    }
    None
}

/// Point inside the ellipse inscribed in the given box.
fn in_ellipse(x: f64, y: f64, left: f64, top: f64, width: f64, height: f64) -> bool {
    let rx = width / 2.0;
    let ry = height / 2.0;
    let dx = (x - (left + rx)) / rx;
    let dy = (y - (top + ry)) / ry;
    dx * dx + dy * dy <= 1.0
}

/// Mapping between terminal cells and playfield units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub rect: Rect,
    /// Playfield units per column.
    pub unit_x: f64,
    /// Playfield units per half-row pixel.
    pub unit_y: f64,
}

impl Viewport {
    /// Largest rect inside `area` with the playfield's proportions, counting
    /// each cell as one pixel wide and two pixels tall.
    pub fn fit(area: Rect, config: &GameConfig) -> Option<Self> {
        if area.width == 0 || area.height == 0 || config.width <= 0.0 || config.height <= 0.0 {
            return None;
        }
        let cols = area.width as f64;
        let pixel_rows = area.height as f64 * 2.0;
        let scale = (cols / config.width).min(pixel_rows / config.height);

        let width = ((config.width * scale).floor() as u16).clamp(1, area.width);
        let height = ((config.height * scale / 2.0).floor() as u16).clamp(1, area.height);
        let rect = centered_rect(area, width, height);

        Some(Self {
            rect,
            unit_x: config.width / width as f64,
            unit_y: config.height / (height as f64 * 2.0),
        })
    }

    /// Terminal row showing playfield height `y`, if visible.
    pub fn row_for(&self, y: f64) -> Option<u16> {
        if y < 0.0 {
            return None;
        }
        let row = (y / (self.unit_y * 2.0)).floor() as u16;
        (row < self.rect.height).then(|| self.rect.y + row)
    }

    /// Terminal column showing playfield x, if visible.
    pub fn col_for(&self, x: f64) -> Option<u16> {
        if x < 0.0 {
            return None;
        }
        let col = (x / self.unit_x).floor() as u16;
        (col < self.rect.width).then(|| self.rect.x + col)
    }
}

/// Render the game: playfield, HUD, and the Idle / Over screens.
pub fn render_game(frame: &mut Frame, area: Rect, game: &FlappyGame, username: Option<&str>) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(view) = Viewport::fit(inner, &game.config) else {
        return;
    };

    render_playfield(frame, &view, game);
    if let Some(name) = username {
        render_username(frame, &view, game, name);
    }
    render_hud(frame, &view, game);

    match game.phase {
        Phase::Idle => render_start_screen(frame, &view, game),
        Phase::Running => {}
        Phase::Over => render_game_over(frame, &view, game),
    }
}

fn render_playfield(frame: &mut Frame, view: &Viewport, game: &FlappyGame) {
    // Semi-transparent black overlay while the run is over
    let dimmed = game.phase == Phase::Over;
    let color = |cell: SceneCell| {
        let (r, g, b) = cell.rgb();
        if dimmed {
            Color::Rgb(r / 2, g / 2, b / 2)
        } else {
            Color::Rgb(r, g, b)
        }
    };

    let mut lines = Vec::with_capacity(view.rect.height as usize);
    for row in 0..view.rect.height {
        let y_top = (row as f64 * 2.0 + 0.5) * view.unit_y;
        let y_bottom = (row as f64 * 2.0 + 1.5) * view.unit_y;

        let spans: Vec<Span> = (0..view.rect.width)
            .map(|col| {
                let x = (col as f64 + 0.5) * view.unit_x;
                let top = color(sample(game, x, y_top));
                let bottom = color(sample(game, x, y_bottom));
                Span::styled("▀", Style::default().fg(top).bg(bottom))
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), view.rect);
}

/// A line of text centered on playfield x at playfield y.
fn render_label(frame: &mut Frame, view: &Viewport, x: f64, y: f64, text: &str, style: Style) {
    let Some(row) = view.row_for(y) else {
        return;
    };
    let width = (text.chars().count() as u16).min(view.rect.width);
    let col = ((x / view.unit_x).floor().max(0.0) as u16).min(view.rect.width - 1);
    let center = view.rect.x + col;
    let left = center
        .saturating_sub(width / 2)
        .clamp(view.rect.x, view.rect.x + view.rect.width - width);

    frame.render_widget(
        Paragraph::new(Span::styled(text.to_string(), style)),
        Rect::new(left, row, width, 1),
    );
}

fn text_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn render_hud(frame: &mut Frame, view: &Viewport, game: &FlappyGame) {
    let center = game.config.width / 2.0;
    render_label(
        frame,
        view,
        center,
        30.0,
        &format!("Score: {}", game.score),
        text_style(),
    );
    render_label(
        frame,
        view,
        center,
        65.0,
        &format!("High Score: {}", game.high_score),
        Style::default().fg(Color::White),
    );
}

fn render_username(frame: &mut Frame, view: &Viewport, game: &FlappyGame, name: &str) {
    let bird = &game.bird;
    render_label(
        frame,
        view,
        bird.x() + bird.width() / 2.0,
        bird.y - 20.0,
        name,
        Style::default().fg(Color::White),
    );
}

fn render_start_screen(frame: &mut Frame, view: &Viewport, game: &FlappyGame) {
    let center = game.config.width / 2.0;
    let height = game.config.height;
    render_label(
        frame,
        view,
        center,
        height / 3.0,
        "Flappy Bird",
        text_style().fg(Color::Yellow),
    );
    render_label(
        frame,
        view,
        center,
        height / 2.0 + 40.0,
        "Press SPACE to start",
        text_style(),
    );
    render_label(
        frame,
        view,
        center,
        height / 2.0 + 70.0,
        "Press SPACE to jump",
        Style::default().fg(Color::White),
    );
}

fn render_game_over(frame: &mut Frame, view: &Viewport, game: &FlappyGame) {
    let popup = centered_rect(view.rect, 30, 9);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled(
            "Game Over",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}", game.score),
            text_style(),
        )),
        Line::from(Span::styled(
            format!("High Score: {}", game.high_score),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press SPACE to try again",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
