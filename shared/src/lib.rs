use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod fixtures;
pub mod wallet;

pub use wallet::{
    AddCardDialog, AddCardForm, AddCardPayload, AddressField, AddressMode, AddressSelectionState, BillingAddress,
    CardActions, CardDialog, EditCardForm, EditCardSubmission, NewAddressForm, WalletPageState,
};

/// Errors raised when a DOM value (select option, radio value) does not map to a known variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown card brand: {0}")]
    UnknownBrand(String),
    #[error("unknown card type: {0}")]
    UnknownCardType(String),
    #[error("unknown address mode: {0}")]
    UnknownAddressMode(String),
    #[error("expected \"yes\" or \"no\", got: {0}")]
    UnknownYesNo(String),
}

/// Card network of a stored payment card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardBrand {
    Mastercard,
    Visa,
    Elo,
    Amex,
}

impl CardBrand {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardBrand::Mastercard => "mastercard",
            CardBrand::Visa => "visa",
            CardBrand::Elo => "elo",
            CardBrand::Amex => "amex",
        }
    }

    /// Short text shown inside the brand badge
    pub fn badge_label(&self) -> &'static str {
        match self {
            CardBrand::Mastercard => "Mastercard",
            CardBrand::Visa => "VISA",
            CardBrand::Elo => "ELO",
            CardBrand::Amex => "AMEX",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CardBrand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mastercard" => Ok(CardBrand::Mastercard),
            "visa" => Ok(CardBrand::Visa),
            "elo" => Ok(CardBrand::Elo),
            "amex" => Ok(CardBrand::Amex),
            _ => Err(ParseError::UnknownBrand(s.to_string())),
        }
    }
}

/// Whether a card is used as credit or debit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    #[default]
    Credit,
    Debit,
}

impl CardType {
    /// Value used by the card type `<select>`
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Credit => "credit",
            CardType::Debit => "debit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardType::Credit => "Crédito",
            CardType::Debit => "Débito",
        }
    }
}

impl FromStr for CardType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit" => Ok(CardType::Credit),
            "debit" => Ok(CardType::Debit),
            _ => Err(ParseError::UnknownCardType(s.to_string())),
        }
    }
}

/// A saved payment card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCard {
    pub id: String,
    pub brand: CardBrand,
    pub last_four_digits: String,
    pub holder_name: String,
    #[serde(rename = "type", default)]
    pub card_type: CardType,
    /// Stored flag; the user's preferred card
    #[serde(default)]
    pub is_default: bool,
    /// Weak reference into the address book, resolved by id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl PaymentCard {
    pub fn masked_number(&self) -> String {
        format!("•••• {}", self.last_four_digits)
    }

    pub fn type_label(&self) -> &'static str {
        self.card_type.label()
    }

    /// Resolve the billing address. Absent or dangling ids resolve to nothing.
    pub fn resolve_address<'a>(&self, addresses: &'a [Address]) -> Option<&'a Address> {
        self.address_id
            .as_deref()
            .and_then(|id| find_address(addresses, id))
    }
}

/// A saved billing address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default)]
    pub is_default: bool,
}

impl Address {
    pub fn city_state(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// Label of this address in the "existing address" select
    pub fn option_label(&self) -> String {
        let mut label = format!("{}, {}/{}", self.street, self.city, self.state);
        if self.is_default {
            label.push_str(" (Padrão)");
        }
        label
    }
}

pub fn find_address<'a>(addresses: &'a [Address], id: &str) -> Option<&'a Address> {
    addresses.iter().find(|address| address.id == id)
}

/// The address flagged as default, falling back to the first one
pub fn default_address(addresses: &[Address]) -> Option<&Address> {
    addresses
        .iter()
        .find(|address| address.is_default)
        .or_else(|| addresses.first())
}

/// Address lines rendered under a card
#[derive(Debug, Clone, PartialEq)]
pub struct AddressLines {
    pub street: String,
    pub city_state: String,
}

/// Everything a payment card tile renders, computed once from the card and the address book
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentCardView {
    pub brand: CardBrand,
    pub masked_number: String,
    pub nickname: Option<String>,
    pub holder_name: String,
    pub type_label: &'static str,
    pub show_default_badge: bool,
    pub address: Option<AddressLines>,
}

impl PaymentCardView {
    pub fn new(card: &PaymentCard, addresses: &[Address]) -> Self {
        Self {
            brand: card.brand,
            masked_number: card.masked_number(),
            nickname: card
                .nickname
                .as_ref()
                .filter(|nickname| !nickname.trim().is_empty())
                .cloned(),
            holder_name: card.holder_name.clone(),
            type_label: card.type_label(),
            show_default_badge: card.is_default,
            address: card.resolve_address(addresses).map(|address| AddressLines {
                street: address.street.clone(),
                city_state: address.city_state(),
            }),
        }
    }
}

/// Parse the "Sim/Não" select used for the default flag
pub fn parse_yes_no(value: &str) -> Result<bool, ParseError> {
    match value {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(ParseError::UnknownYesNo(value.to_string())),
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(id: &str, is_default: bool) -> Address {
        Address {
            id: id.to_string(),
            street: "Rua das Flores, 250".to_string(),
            neighborhood: "Centro".to_string(),
            city: "Curitiba".to_string(),
            state: "PR".to_string(),
            zip_code: "80010-000".to_string(),
            is_default,
        }
    }

    fn ana_silva_card() -> PaymentCard {
        PaymentCard {
            id: "card-2".to_string(),
            brand: CardBrand::Visa,
            last_four_digits: "1234".to_string(),
            holder_name: "Ana Silva".to_string(),
            card_type: CardType::Debit,
            is_default: false,
            address_id: None,
            nickname: None,
        }
    }

    #[test]
    fn test_debit_card_without_address() {
        let view = PaymentCardView::new(&ana_silva_card(), &[address("addr-1", true)]);

        assert_eq!(view.masked_number, "•••• 1234");
        assert_eq!(view.holder_name, "Ana Silva");
        assert_eq!(view.type_label, "Débito");
        assert!(!view.show_default_badge);
        assert_eq!(view.address, None);
    }

    #[test]
    fn test_resolved_address_is_rendered() {
        let mut card = ana_silva_card();
        card.address_id = Some("addr-2".to_string());
        let addresses = vec![address("addr-1", true), address("addr-2", false)];

        let view = PaymentCardView::new(&card, &addresses);
        let lines = view.address.expect("address should resolve");
        assert_eq!(lines.street, "Rua das Flores, 250");
        assert_eq!(lines.city_state, "Curitiba, PR");
    }

    #[test]
    fn test_dangling_address_id_renders_nothing() {
        let mut card = ana_silva_card();
        card.address_id = Some("addr-missing".to_string());

        assert!(card.resolve_address(&[address("addr-1", true)]).is_none());
        assert_eq!(PaymentCardView::new(&card, &[address("addr-1", true)]).address, None);
    }

    #[test]
    fn test_blank_nickname_is_hidden() {
        let mut card = ana_silva_card();
        card.nickname = Some("   ".to_string());
        assert_eq!(PaymentCardView::new(&card, &[]).nickname, None);

        card.nickname = Some("Cartão Pessoal".to_string());
        assert_eq!(
            PaymentCardView::new(&card, &[]).nickname.as_deref(),
            Some("Cartão Pessoal")
        );
    }

    #[test]
    fn test_option_label_marks_default() {
        assert_eq!(
            address("addr-1", true).option_label(),
            "Rua das Flores, 250, Curitiba/PR (Padrão)"
        );
        assert_eq!(
            address("addr-2", false).option_label(),
            "Rua das Flores, 250, Curitiba/PR"
        );
    }

    #[test]
    fn test_default_address_falls_back_to_first() {
        let addresses = vec![address("addr-1", false), address("addr-2", true)];
        assert_eq!(default_address(&addresses).map(|a| a.id.as_str()), Some("addr-2"));

        let addresses = vec![address("addr-1", false), address("addr-2", false)];
        assert_eq!(default_address(&addresses).map(|a| a.id.as_str()), Some("addr-1"));

        assert!(default_address(&[]).is_none());
    }

    #[test]
    fn test_parse_select_values() {
        assert_eq!("debit".parse::<CardType>(), Ok(CardType::Debit));
        assert_eq!("credit".parse::<CardType>(), Ok(CardType::Credit));
        assert!("prepaid".parse::<CardType>().is_err());

        assert_eq!("VISA".parse::<CardBrand>(), Ok(CardBrand::Visa));
        assert!("diners".parse::<CardBrand>().is_err());

        assert_eq!(parse_yes_no("yes"), Ok(true));
        assert_eq!(parse_yes_no("no"), Ok(false));
        assert_eq!(
            parse_yes_no("maybe"),
            Err(ParseError::UnknownYesNo("maybe".to_string()))
        );
    }

    #[test]
    fn test_card_json_shape() {
        let json = r#"{
            "id": "card-9",
            "brand": "mastercard",
            "lastFourDigits": "5367",
            "holderName": "João Pereira",
            "type": "credit",
            "addressId": "addr-1"
        }"#;

        let card: PaymentCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.brand, CardBrand::Mastercard);
        assert_eq!(card.card_type, CardType::Credit);
        assert!(!card.is_default);
        assert_eq!(card.address_id.as_deref(), Some("addr-1"));
        assert_eq!(card.nickname, None);
    }
}
