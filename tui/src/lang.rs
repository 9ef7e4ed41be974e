use clap::ValueEnum;
use roster_core::RosterError;

/// Display language of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Fr,
    En,
}

impl Language {
    pub fn messages(self) -> &'static Messages {
        match self {
            Language::Fr => &FR,
            Language::En => &EN,
        }
    }
}

/// Every user-facing string of the interface.
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub balance_label: &'static str,
    pub add_hint: &'static str,
    pub player_count: &'static str,
    pub total: &'static str,
    pub balance: &'static str,
    pub players_title: &'static str,
    pub empty_roster: &'static str,
    pub help: &'static str,
    pub alert_title: &'static str,
    pub alert_dismiss: &'static str,
    name_too_short: &'static str,
    negative_balance: &'static str,
    invalid_balance: &'static str,
}

impl Messages {
    /// The fixed alert text shown for a rejected add.
    pub fn alert(&self, err: RosterError) -> &'static str {
        match err {
            RosterError::NameTooShort => self.name_too_short,
            RosterError::NegativeBalance => self.negative_balance,
            RosterError::InvalidBalance => self.invalid_balance,
        }
    }
}

const FR: Messages = Messages {
    title: "Gestion des joueurs",
    name_label: "Nom",
    name_placeholder: "Nom du joueur",
    balance_label: "Solde",
    add_hint: "[Entrée] Ajouter",
    player_count: "Nombre de joueurs",
    total: "Total banques",
    balance: "Solde",
    players_title: "Joueurs",
    empty_roster: "Aucun joueur pour l'instant. Ajoute-en un ci-dessus.",
    help: "Tab: champ suivant | Entrée/s: sélectionner | +/-: créditer/débiter | d: supprimer | Échap: quitter",
    alert_title: "Attention",
    alert_dismiss: "[Entrée] OK",
    name_too_short: "Le nom doit faire au moins 2 caractères.",
    negative_balance: "Le solde doit être positif.",
    invalid_balance: "Le solde doit être un nombre.",
};

const EN: Messages = Messages {
    title: "Player management",
    name_label: "Name",
    name_placeholder: "Player name",
    balance_label: "Balance",
    add_hint: "[Enter] Add",
    player_count: "Players",
    total: "Total balance",
    balance: "Balance",
    players_title: "Players",
    empty_roster: "No players yet. Add one above.",
    help: "Tab: next field | Enter/s: select | +/-: credit/debit | d: delete | Esc: quit",
    alert_title: "Warning",
    alert_dismiss: "[Enter] OK",
    name_too_short: "The name must be at least 2 characters long.",
    negative_balance: "The balance must be positive.",
    invalid_balance: "The balance must be a number.",
};
