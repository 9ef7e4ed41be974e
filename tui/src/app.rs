use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use roster_core::{AddPlayerForm, PlayerID, Roster};
use tracing::{debug, info};

use crate::lang::{Language, Messages};

/// Which part of the screen receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Balance,
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Balance,
            Self::Balance => Self::List,
            Self::List => Self::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Name => Self::List,
            Self::Balance => Self::Name,
            Self::List => Self::Balance,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub roster: Roster,
    pub form: AddPlayerForm,
    pub focus: Focus,
    /// Row of the player list under the cursor.
    pub cursor: usize,
    /// Blocking validation message; swallows input until dismissed.
    pub alert: Option<&'static str>,
    pub lang: Language,
    /// Amount applied by the credit/debit keys.
    pub step: i64,
}

impl App {
    pub fn new(lang: Language, default_balance: i64, step: i64) -> Self {
        Self {
            roster: Roster::new(),
            form: AddPlayerForm::new(default_balance),
            focus: Focus::Name,
            cursor: 0,
            alert: None,
            lang,
            step,
        }
    }

    pub fn messages(&self) -> &'static Messages {
        self.lang.messages()
    }

    /// Apply one key press. Returns `true` when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
            }
            return false;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            _ => match self.focus {
                Focus::Name => self.handle_name_key(key),
                Focus::Balance => self.handle_balance_key(key),
                Focus::List => self.handle_list_key(key),
            },
        }
        false
    }

    fn handle_name_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_form(),
            KeyCode::Backspace => self.form.pop_name(),
            KeyCode::Char(c) if !has_command_modifier(key) => self.form.push_name(c),
            _ => {}
        }
    }

    fn handle_balance_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_form(),
            KeyCode::Backspace => self.form.pop_balance(),
            KeyCode::Char(c) if !has_command_modifier(key) => {
                if !self.form.push_balance(c) {
                    debug!(%c, "ignored non-numeric balance input");
                }
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let player_id = match self.player_under_cursor() {
            Some(id) => id,
            None => return,
        };
        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => self.cursor = (self.cursor + 1).min(self.roster.len() - 1),
            KeyCode::Enter | KeyCode::Char('s') => {
                self.roster = self.roster.select_player(player_id);
            }
            KeyCode::Char('+') => {
                self.roster = self.roster.adjust_balance(player_id, self.step);
            }
            KeyCode::Char('-') => {
                self.roster = self.roster.adjust_balance(player_id, -self.step);
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.roster = self.roster.remove_player(player_id);
                self.cursor = self.cursor.min(self.roster.len().saturating_sub(1));
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        match self.form.submit(&self.roster) {
            Ok((roster, player_id)) => {
                self.roster = roster;
                info!(%player_id, players = self.roster.len(), "player added from form");
            }
            Err(err) => {
                info!(%err, "add rejected");
                self.alert = Some(self.messages().alert(err));
            }
        }
    }

    pub fn player_under_cursor(&self) -> Option<PlayerID> {
        self.roster.players().nth(self.cursor).map(|p| p.player_id())
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
