//! State of the "add player" form.

use rand::Rng;

use crate::types::{PlayerID, Roster, RosterError};

/// Balance pre-filled in the form when it is created or reset.
pub const DEFAULT_BALANCE: i64 = 100;

/// The two input fields used to add a player. Both are held as text, the same
/// way the user typed them; the balance is only parsed on submit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AddPlayerForm {
    name: String,
    balance: String,
    default_balance: i64,
}

impl AddPlayerForm {
    pub fn new(default_balance: i64) -> Self {
        Self {
            name: String::new(),
            balance: default_balance.to_string(),
            default_balance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> &str {
        &self.balance
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn push_name(&mut self, c: char) {
        self.name.push(c);
    }

    pub fn pop_name(&mut self) {
        self.name.pop();
    }

    pub fn set_balance(&mut self, balance: impl Into<String>) {
        self.balance = balance.into();
    }

    /// Append a character to the balance field. Only digits, and a minus sign
    /// at the very start, are accepted; returns whether `c` was taken.
    pub fn push_balance(&mut self, c: char) -> bool {
        let accepted = c.is_ascii_digit() || (c == '-' && self.balance.is_empty());
        if accepted {
            self.balance.push(c);
        }
        accepted
    }

    pub fn pop_balance(&mut self) {
        self.balance.pop();
    }

    /// The balance field as a number. An empty field counts as zero.
    pub fn parsed_balance(&self) -> Result<i64, RosterError> {
        let text = self.balance.trim();
        if text.is_empty() {
            return Ok(0);
        }
        text.parse().map_err(|_| RosterError::InvalidBalance)
    }

    /// Put both fields back to their defaults.
    pub fn reset(&mut self) {
        self.name.clear();
        self.balance = self.default_balance.to_string();
    }

    /// Add a player built from the form to `roster`. The form is reset on
    /// success and left as-is on failure.
    pub fn submit(&mut self, roster: &Roster) -> Result<(Roster, PlayerID), RosterError> {
        self.submit_with_rng(&mut rand::thread_rng(), roster)
    }

    pub fn submit_with_rng<R: Rng>(
        &mut self,
        rng: &mut R,
        roster: &Roster,
    ) -> Result<(Roster, PlayerID), RosterError> {
        Roster::validate_name(&self.name)?;
        let balance = self.parsed_balance()?;
        let res = roster.add_player_with_rng(rng, &self.name, balance)?;
        self.reset();
        Ok(res)
    }
}

impl Default for AddPlayerForm {
    fn default() -> Self {
        Self::new(DEFAULT_BALANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::{AddPlayerForm, DEFAULT_BALANCE};
    use crate::types::{Roster, RosterError};

    #[test]
    pub fn test_defaults() {
        let form = AddPlayerForm::default();
        assert_eq!(form.name(), "");
        assert_eq!(form.balance(), "100");
        assert_eq!(form.parsed_balance(), Ok(DEFAULT_BALANCE));
    }

    #[test]
    pub fn test_submit_resets_fields() {
        let mut form = AddPlayerForm::default();
        form.set_name(" Bob ");
        form.set_balance("40");

        let (roster, id) = form.submit(&Roster::new()).unwrap();

        assert_eq!(roster.player(id).unwrap().name(), "Bob");
        assert_eq!(roster.player(id).unwrap().balance(), 40);
        assert_eq!(form, AddPlayerForm::default());
    }

    #[test]
    pub fn test_failed_submit_keeps_fields() {
        let roster = Roster::new();

        let mut form = AddPlayerForm::default();
        form.set_name("a");
        form.set_balance("50");
        assert_eq!(form.submit(&roster).unwrap_err(), RosterError::NameTooShort);
        assert_eq!(form.name(), "a");
        assert_eq!(form.balance(), "50");

        form.set_name("Alice");
        form.set_balance("-5");
        assert_eq!(
            form.submit(&roster).unwrap_err(),
            RosterError::NegativeBalance
        );
        assert_eq!(form.name(), "Alice");
        assert_eq!(form.balance(), "-5");
    }

    #[test]
    pub fn test_balance_parsing() {
        let mut form = AddPlayerForm::default();
        form.set_name("Alice");

        form.set_balance("");
        assert_eq!(form.parsed_balance(), Ok(0));

        form.set_balance("-");
        assert_eq!(form.parsed_balance(), Err(RosterError::InvalidBalance));
        assert_eq!(
            form.submit(&Roster::new()).unwrap_err(),
            RosterError::InvalidBalance
        );

        form.set_balance("99999999999999999999");
        assert_eq!(form.parsed_balance(), Err(RosterError::InvalidBalance));
    }

    #[test]
    pub fn test_short_name_reported_before_bad_balance() {
        let mut form = AddPlayerForm::default();
        form.set_name("x");
        form.set_balance("-");
        assert_eq!(
            form.submit(&Roster::new()).unwrap_err(),
            RosterError::NameTooShort
        );
    }

    #[test]
    pub fn test_balance_field_filters_input() {
        let mut form = AddPlayerForm::new(0);
        form.pop_balance();
        assert!(form.push_balance('-'));
        assert!(form.push_balance('1'));
        assert!(!form.push_balance('-'));
        assert!(!form.push_balance('x'));
        assert!(form.push_balance('5'));
        assert_eq!(form.balance(), "-15");
        assert_eq!(form.parsed_balance(), Ok(-15));
    }

    #[test]
    pub fn test_custom_default_balance() {
        let mut form = AddPlayerForm::new(250);
        form.set_name("Eve");
        form.set_balance("1");
        form.submit(&Roster::new()).unwrap();
        assert_eq!(form.balance(), "250");
    }
}
