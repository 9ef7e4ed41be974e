//! Generic types used throughout the core codebase.

use std::fmt;

use serde::{Deserialize, Serialize};

mod roster;

pub use roster::{InvalidRosterError, Roster, RosterError, MIN_NAME_LEN};

/// A unique identifier for a player.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(transparent)]
pub struct PlayerID(pub u32);

impl fmt::Display for PlayerID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// Information tracked about a player on the roster.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Player {
    pub(crate) player_id: PlayerID,
    pub(crate) name: String,
    pub(crate) balance: u64,
    pub(crate) active: bool,
}

impl Player {
    pub fn player_id(&self) -> PlayerID {
        self.player_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Whether this is the currently selected player.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Apply a signed `amount` to a balance. The result never drops below zero,
/// and saturates at the top of the range instead of wrapping.
pub(crate) fn apply_amount(balance: u64, amount: i64) -> u64 {
    if amount >= 0 {
        balance.saturating_add(amount as u64)
    } else {
        balance.saturating_sub(amount.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_amount, PlayerID};

    #[test]
    pub fn test_apply_amount_clamps_at_zero() {
        assert_eq!(apply_amount(30, -1000), 0);
        assert_eq!(apply_amount(30, -30), 0);
        assert_eq!(apply_amount(30, -10), 20);
        assert_eq!(apply_amount(0, i64::MIN), 0);
    }

    #[test]
    pub fn test_apply_amount_saturates() {
        assert_eq!(apply_amount(30, 10), 40);
        assert_eq!(apply_amount(u64::MAX - 1, 10), u64::MAX);
    }

    #[test]
    pub fn test_player_id_display() {
        assert_eq!(PlayerID(0xbeef).to_string(), "0000beef");
    }
}
