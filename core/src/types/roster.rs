use std::collections::HashSet;
use std::convert::TryFrom;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::{apply_amount, Player, PlayerID};

/// Minimum number of characters in a (trimmed) player name.
pub const MIN_NAME_LEN: usize = 2;

/// The set of players being tracked. Serialized as the bare list of players;
/// deserializing checks the same invariants the operations maintain.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(try_from = "Vec<Player>", into = "Vec<Player>")]
pub struct Roster {
    /// Players in insertion order. At most one of them is active.
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self { players: vec![] }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get all of the players on the roster, in insertion order.
    pub fn players(&self) -> impl Iterator<Item = &'_ Player> {
        self.players.iter()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerID> + '_ {
        self.players.iter().map(|p| p.player_id)
    }

    pub fn player(&self, id: PlayerID) -> Option<&'_ Player> {
        self.players.iter().find(|p| p.player_id == id)
    }

    /// Index of the player within the roster, if present.
    pub fn position(&self, id: PlayerID) -> Option<usize> {
        self.players.iter().position(|p| p.player_id == id)
    }

    pub fn active_player(&self) -> Option<&'_ Player> {
        self.players.iter().find(|p| p.active)
    }

    /// Sum of all balances on the roster.
    pub fn total(&self) -> u64 {
        self.players
            .iter()
            .fold(0u64, |sum, p| sum.saturating_add(p.balance))
    }

    /// Check that `name` is acceptable for a new player, returning the trimmed
    /// name.
    pub fn validate_name(name: &str) -> Result<&str, RosterError> {
        let name = name.trim();
        if name.chars().count() < MIN_NAME_LEN {
            Err(RosterError::NameTooShort)
        } else {
            Ok(name)
        }
    }

    /// Add a player to the end of the roster, returning the new `Roster` and
    /// the freshly allocated `PlayerID`. The new player is not active.
    pub fn add_player(&self, name: &str, balance: i64) -> Result<(Self, PlayerID), RosterError> {
        self.add_player_with_rng(&mut rand::thread_rng(), name, balance)
    }

    /// Like `add_player`, drawing the new ID from `rng`.
    pub fn add_player_with_rng<R: Rng>(
        &self,
        rng: &mut R,
        name: &str,
        balance: i64,
    ) -> Result<(Self, PlayerID), RosterError> {
        let name = Self::validate_name(name).map_err(|e| {
            debug!(name, "rejected player: name too short");
            e
        })?;
        if balance < 0 {
            debug!(name, balance, "rejected player: negative balance");
            return Err(RosterError::NegativeBalance);
        }

        let player_id = self.fresh_id(rng);
        let mut self_ = self.clone();
        self_.players.push(Player {
            player_id,
            name: name.to_owned(),
            balance: balance as u64,
            active: false,
        });
        info!(%player_id, name, balance, "added player");
        Ok((self_, player_id))
    }

    /// Mark the provided player as the only active one. Unknown IDs leave the
    /// roster untouched.
    pub fn select_player(&self, player_id: PlayerID) -> Self {
        if self.player(player_id).is_none() {
            debug!(%player_id, "select ignored: player does not exist");
            return self.clone();
        }
        let mut self_ = self.clone();
        for p in self_.players.iter_mut() {
            p.active = p.player_id == player_id;
        }
        debug!(%player_id, "selected player");
        self_
    }

    /// Credit (positive `amount`) or debit (negative `amount`) the provided
    /// player. The balance is clamped at zero.
    pub fn adjust_balance(&self, player_id: PlayerID, amount: i64) -> Self {
        let mut self_ = self.clone();
        match self_.players.iter_mut().find(|p| p.player_id == player_id) {
            Some(p) => {
                p.balance = apply_amount(p.balance, amount);
                debug!(%player_id, amount, balance = p.balance, "adjusted balance");
            }
            None => debug!(%player_id, amount, "adjust ignored: player does not exist"),
        }
        self_
    }

    /// Remove a player from the roster.
    pub fn remove_player(&self, player_id: PlayerID) -> Self {
        let mut self_ = self.clone();
        match self.position(player_id) {
            Some(idx) => {
                let p = self_.players.remove(idx);
                info!(%player_id, name = %p.name, "removed player");
            }
            None => debug!(%player_id, "remove ignored: player does not exist"),
        }
        self_
    }

    /// Draw IDs until one is not already taken.
    fn fresh_id<R: Rng>(&self, rng: &mut R) -> PlayerID {
        loop {
            let id = PlayerID(rng.gen());
            if self.player(id).is_none() {
                return id;
            }
        }
    }
}

impl TryFrom<Vec<Player>> for Roster {
    type Error = InvalidRosterError;

    fn try_from(players: Vec<Player>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for p in players.iter() {
            if !seen.insert(p.player_id) {
                return Err(InvalidRosterError::DuplicatePlayerID(p.player_id));
            }
            if Self::validate_name(&p.name).is_err() {
                return Err(InvalidRosterError::NameTooShort(p.player_id));
            }
        }
        if players.iter().filter(|p| p.active).count() > 1 {
            return Err(InvalidRosterError::MultipleActivePlayers);
        }
        Ok(Self { players })
    }
}

impl From<Roster> for Vec<Player> {
    fn from(roster: Roster) -> Self {
        roster.players
    }
}

/// Why a list of players cannot be turned into a `Roster`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRosterError {
    #[error("Player ID {0} appears more than once")]
    DuplicatePlayerID(PlayerID),
    #[error("Player {0} has a name shorter than 2 characters")]
    NameTooShort(PlayerID),
    #[error("More than one player is active")]
    MultipleActivePlayers,
}

#[derive(Error, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum RosterError {
    #[error("Player name must be at least 2 characters long")]
    NameTooShort,
    #[error("Balance must not be negative")]
    NegativeBalance,
    #[error("Balance is not a number")]
    InvalidBalance,
}
