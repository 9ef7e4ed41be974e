//! In-memory roster of players and their balances.

pub mod form;
pub mod types;

pub use form::{AddPlayerForm, DEFAULT_BALANCE};
pub use types::{InvalidRosterError, Player, PlayerID, Roster, RosterError, MIN_NAME_LEN};
