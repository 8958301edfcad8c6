//! Login / registration form shown before the game.

use super::centered_rect;
use crate::accounts::{AccountError, CredentialStore};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Error,
    Info,
}

/// A message box that blocks the form until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub kind: ModalKind,
    pub title: &'static str,
    pub message: String,
}

pub struct AuthScreen {
    pub mode: AuthMode,
    pub username: String,
    pub password: String,
    pub confirm: String,
    pub focus: Field,
    pub modal: Option<Modal>,
}

impl AuthScreen {
    pub fn new() -> Self {
        Self {
            mode: AuthMode::Login,
            username: String::new(),
            password: String::new(),
            confirm: String::new(),
            focus: Field::Username,
            modal: None,
        }
    }

    fn fields(&self) -> &'static [Field] {
        match self.mode {
            AuthMode::Login => &[Field::Username, Field::Password],
            AuthMode::Register => &[Field::Username, Field::Password, Field::Confirm],
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
            Field::Confirm => &mut self.confirm,
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.clear();
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
        self.confirm.clear();
        self.focus = Field::Username;
    }

    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + fields.len() - 1) % fields.len()];
    }

    pub fn handle_char_input(&mut self, c: char) {
        let focus = self.focus;
        self.field_mut(focus).push(c);
    }

    pub fn handle_backspace(&mut self) {
        let focus = self.focus;
        self.field_mut(focus).pop();
    }

    pub fn dismiss_modal(&mut self) {
        self.modal = None;
    }

    /// Submit the current form. Returns the username on a successful login;
    /// every other outcome is reported through a modal.
    pub fn submit(&mut self, store: &mut CredentialStore) -> Option<String> {
        match self.mode {
            AuthMode::Login => match store.login(&self.username, &self.password) {
                Ok(username) => Some(username),
                Err(e) => {
                    self.password.clear();
                    self.show_error("Login Error", e);
                    None
                }
            },
            AuthMode::Register => {
                match store.register(&self.username, &self.password, &self.confirm) {
                    Ok(()) => {
                        self.clear();
                        self.modal = Some(Modal {
                            kind: ModalKind::Info,
                            title: "Registration Successful",
                            message: "Registration is complete, you can login now.".to_string(),
                        });
                    }
                    Err(e) => self.show_error("Registration Error", e),
                }
                None
            }
        }
    }

    fn show_error(&mut self, title: &'static str, error: AccountError) {
        self.modal = Some(Modal {
            kind: ModalKind::Error,
            title,
            message: error.to_string(),
        });
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let (title, submit_label) = match self.mode {
            AuthMode::Login => ("Flappy Bird - Login", "[Enter] Login"),
            AuthMode::Register => ("Flappy Bird - Register", "[Enter] Register"),
        };

        let mut constraints = vec![
            Constraint::Length(3), // Title
            Constraint::Length(1), // Spacer
        ];
        constraints.extend(self.fields().iter().map(|_| Constraint::Length(3)));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(3)); // Controls

        let form_area = centered_rect(area, 50, area.height);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(form_area);

        let title = Paragraph::new(title)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        for (i, field) in self.fields().iter().enumerate() {
            self.draw_field(f, chunks[2 + i], *field);
        }

        let controls = Paragraph::new(vec![
            Line::from(format!("{}    [Tab] Next field", submit_label)),
            Line::from("[F2] Switch login/register    [Esc] Quit"),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[chunks.len() - 1]);

        if let Some(modal) = &self.modal {
            draw_modal(f, area, modal);
        }
    }

    fn draw_field(&self, f: &mut Frame, area: Rect, field: Field) {
        let (label, value) = match field {
            Field::Username => ("Username", self.username.clone()),
            Field::Password => ("Password", mask(&self.password)),
            Field::Confirm => ("Confirm Password", mask(&self.confirm)),
        };
        let focused = self.focus == field;
        let border_color = if focused { Color::Yellow } else { Color::DarkGray };
        let text = if focused {
            format!("{}_", value)
        } else {
            value
        };

        let widget = Paragraph::new(text)
            .block(
                Block::default()
                    .title(format!(" {} ", label))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            )
            .style(Style::default().fg(Color::White));
        f.render_widget(widget, area);
    }
}

fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

fn draw_modal(f: &mut Frame, area: Rect, modal: &Modal) {
    let color = match modal.kind {
        ModalKind::Error => Color::Red,
        ModalKind::Info => Color::Green,
    };
    let popup = centered_rect(area, 46, 7);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", modal.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled(
            modal.message.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Press any key]",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(text, inner);
}
