//! State machines behind the wallet page: the card dialogs, the shared
//! billing-address selection, the two card forms and the page's auth gate.
//!
//! Everything here is plain data with `&mut self` transitions so that the
//! components can keep it in a `use_state` handle and swap in the next value.

use serde::Serialize;
use std::str::FromStr;

use crate::{Address, CardType, ParseError, PaymentCard};

/// Which half of the address selection is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressMode {
    #[default]
    Existing,
    New,
}

impl AddressMode {
    /// Value of the matching radio input
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressMode::Existing => "existing",
            AddressMode::New => "new",
        }
    }
}

impl FromStr for AddressMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "existing" => Ok(AddressMode::Existing),
            "new" => Ok(AddressMode::New),
            _ => Err(ParseError::UnknownAddressMode(s.to_string())),
        }
    }
}

/// Free-form fields of the "new address" inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Street,
    Neighborhood,
    City,
    State,
    ZipCode,
}

impl AddressField {
    pub const ALL: [AddressField; 5] = [
        AddressField::Street,
        AddressField::Neighborhood,
        AddressField::City,
        AddressField::State,
        AddressField::ZipCode,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AddressField::Street => "street",
            AddressField::Neighborhood => "neighborhood",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::ZipCode => "zipCode",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddressField::Street => "Endereço",
            AddressField::Neighborhood => "Bairro",
            AddressField::City => "Cidade",
            AddressField::State => "Estado",
            AddressField::ZipCode => "CEP",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            AddressField::Street => "Rua, número",
            AddressField::Neighborhood => "Bairro",
            AddressField::City => "Cidade",
            AddressField::State => "Estado",
            AddressField::ZipCode => "CEP",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAddressForm {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl NewAddressForm {
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Street => &self.street,
            AddressField::Neighborhood => &self.neighborhood,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::ZipCode => &self.zip_code,
        }
    }

    pub fn set(&mut self, field: AddressField, value: String) {
        let slot = match field {
            AddressField::Street => &mut self.street,
            AddressField::Neighborhood => &mut self.neighborhood,
            AddressField::City => &mut self.city,
            AddressField::State => &mut self.state,
            AddressField::ZipCode => &mut self.zip_code,
        };
        *slot = value;
    }

    pub fn is_blank(&self) -> bool {
        AddressField::ALL
            .iter()
            .all(|field| self.get(*field).trim().is_empty())
    }
}

/// Billing address chosen in a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum BillingAddress {
    Existing(String),
    New(NewAddressForm),
}

/// Choice between an address from the address book and one typed inline.
///
/// Used by both the edit-card and the add-card dialogs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressSelectionState {
    pub mode: AddressMode,
    /// Empty when nothing is selected
    pub selected_address_id: String,
    pub new_address: NewAddressForm,
}

impl AddressSelectionState {
    pub fn with_selected(address_id: impl Into<String>) -> Self {
        Self {
            selected_address_id: address_id.into(),
            ..Self::default()
        }
    }

    pub fn set_mode(&mut self, mode: AddressMode) {
        self.mode = mode;
    }

    pub fn select_existing(&mut self, address_id: impl Into<String>) {
        self.selected_address_id = address_id.into();
    }

    pub fn update_new(&mut self, field: AddressField, value: String) {
        self.new_address.set(field, value);
    }

    pub fn shows_existing_select(&self) -> bool {
        self.mode == AddressMode::Existing
    }

    pub fn shows_new_address_inputs(&self) -> bool {
        self.mode == AddressMode::New
    }

    /// Hand over the typed address and go back to the existing-address select.
    /// The address book itself is not touched.
    pub fn save_new_address(&mut self) -> NewAddressForm {
        self.mode = AddressMode::Existing;
        self.new_address.clone()
    }

    pub fn billing_address(&self) -> Option<BillingAddress> {
        match self.mode {
            AddressMode::Existing if self.selected_address_id.is_empty() => None,
            AddressMode::Existing => Some(BillingAddress::Existing(
                self.selected_address_id.clone(),
            )),
            AddressMode::New => Some(BillingAddress::New(self.new_address.clone())),
        }
    }
}

/// Which modal a card tile currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardDialog {
    #[default]
    Closed,
    Editing,
    ConfirmingDelete,
}

impl CardDialog {
    pub fn open_edit(&mut self) {
        *self = CardDialog::Editing;
    }

    pub fn open_delete(&mut self) {
        *self = CardDialog::ConfirmingDelete;
    }

    pub fn close(&mut self) {
        *self = CardDialog::Closed;
    }

    /// Close the delete confirmation. Returns the id of the card the user
    /// confirmed; nothing is actually removed.
    pub fn confirm_delete(&mut self, card_id: &str) -> Option<String> {
        if *self != CardDialog::ConfirmingDelete {
            return None;
        }
        *self = CardDialog::Closed;
        Some(card_id.to_string())
    }

    pub fn is_editing(&self) -> bool {
        *self == CardDialog::Editing
    }

    pub fn is_confirming_delete(&self) -> bool {
        *self == CardDialog::ConfirmingDelete
    }
}

/// Editable part of a saved card
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditCardForm {
    pub nickname: String,
    pub address: AddressSelectionState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCardSubmission {
    pub card_id: String,
    pub nickname: Option<String>,
    pub address_id: Option<String>,
}

impl EditCardForm {
    pub fn from_card(card: &PaymentCard) -> Self {
        Self {
            nickname: card.nickname.clone().unwrap_or_default(),
            address: AddressSelectionState::with_selected(
                card.address_id.clone().unwrap_or_default(),
            ),
        }
    }

    pub fn set_nickname(&mut self, nickname: String) {
        self.nickname = nickname;
    }

    /// Only presence is checked: blank fields become `None`.
    pub fn submit(&self, card: &PaymentCard) -> EditCardSubmission {
        EditCardSubmission {
            card_id: card.id.clone(),
            nickname: non_blank(&self.nickname),
            address_id: non_blank(&self.address.selected_address_id),
        }
    }
}

/// Form behind the "add card" dialog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddCardForm {
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
    pub card_name: String,
    pub card_type: CardType,
    pub is_default: bool,
    pub address: AddressSelectionState,
}

/// Logged when a new card is submitted. The CVC is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCardPayload {
    pub card_number: String,
    pub expiry: String,
    #[serde(skip_serializing)]
    pub cvc: String,
    pub card_name: String,
    pub card_type: CardType,
    pub is_default: bool,
    pub billing_address: Option<BillingAddress>,
}

impl AddCardForm {
    /// Blank form with the first address of the book pre-selected
    pub fn new(addresses: &[Address]) -> Self {
        Self {
            address: AddressSelectionState::with_selected(
                addresses
                    .first()
                    .map(|address| address.id.clone())
                    .unwrap_or_default(),
            ),
            ..Self::default()
        }
    }

    /// No validation is applied; every submission goes through as typed.
    pub fn submit(&self) -> AddCardPayload {
        AddCardPayload {
            card_number: self.card_number.trim().to_string(),
            expiry: self.expiry.trim().to_string(),
            cvc: self.cvc.trim().to_string(),
            card_name: self.card_name.trim().to_string(),
            card_type: self.card_type,
            is_default: self.is_default,
            billing_address: self.address.billing_address(),
        }
    }
}

/// Dialogs of one card tile together with the edit form they own.
///
/// The edit form is rebuilt from the card whenever a dialog opens or closes,
/// so abandoned edits never leak into the next opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardActions {
    pub dialog: CardDialog,
    pub edit_form: EditCardForm,
}

impl CardActions {
    pub fn new(card: &PaymentCard) -> Self {
        Self {
            dialog: CardDialog::Closed,
            edit_form: EditCardForm::from_card(card),
        }
    }

    pub fn open_edit(&mut self, card: &PaymentCard) {
        self.dialog.open_edit();
        self.edit_form = EditCardForm::from_card(card);
    }

    pub fn open_delete(&mut self) {
        self.dialog.open_delete();
    }

    pub fn close(&mut self, card: &PaymentCard) {
        self.dialog.close();
        self.edit_form = EditCardForm::from_card(card);
    }

    /// Submit the edit form and close. `None` unless the edit dialog is open.
    pub fn submit_edit(&mut self, card: &PaymentCard) -> Option<EditCardSubmission> {
        if !self.dialog.is_editing() {
            return None;
        }
        let submission = self.edit_form.submit(card);
        self.close(card);
        Some(submission)
    }

    pub fn confirm_delete(&mut self, card: &PaymentCard) -> Option<String> {
        let confirmed = self.dialog.confirm_delete(&card.id);
        if confirmed.is_some() {
            self.edit_form = EditCardForm::from_card(card);
        }
        confirmed
    }
}

/// The "add card" dialog: visibility plus its form, reset on every open and close
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCardDialog {
    pub is_open: bool,
    pub form: AddCardForm,
}

impl AddCardDialog {
    pub fn new(addresses: &[Address]) -> Self {
        Self {
            is_open: false,
            form: AddCardForm::new(addresses),
        }
    }

    pub fn open(&mut self, addresses: &[Address]) {
        self.is_open = true;
        self.form = AddCardForm::new(addresses);
    }

    pub fn close(&mut self, addresses: &[Address]) {
        self.is_open = false;
        self.form = AddCardForm::new(addresses);
    }

    /// Submit and close. `None` when the dialog is not open.
    pub fn submit(&mut self, addresses: &[Address]) -> Option<AddCardPayload> {
        if !self.is_open {
            return None;
        }
        let payload = self.form.submit();
        self.close(addresses);
        Some(payload)
    }
}

/// What the wallet page renders for the current authentication status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletPageState {
    Loading,
    Unauthenticated,
    Authenticated,
}

impl WalletPageState {
    pub fn from_auth(is_loading: bool, is_authenticated: bool) -> Self {
        if is_loading {
            WalletPageState::Loading
        } else if is_authenticated {
            WalletPageState::Authenticated
        } else {
            WalletPageState::Unauthenticated
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{mock_addresses, mock_cards};

    fn card(id: &str) -> PaymentCard {
        mock_cards()
            .into_iter()
            .find(|card| card.id == id)
            .expect("fixture card")
    }

    #[test]
    fn test_toggle_new_address_swaps_visible_inputs() {
        let mut selection = AddressSelectionState::with_selected("addr-1");
        assert!(selection.shows_existing_select());
        assert!(!selection.shows_new_address_inputs());

        selection.set_mode(AddressMode::New);
        assert!(!selection.shows_existing_select());
        assert!(selection.shows_new_address_inputs());

        selection.set_mode(AddressMode::Existing);
        assert!(selection.shows_existing_select());
        assert!(!selection.shows_new_address_inputs());
        assert_eq!(selection.selected_address_id, "addr-1");
    }

    #[test]
    fn test_save_new_address_flips_back_to_existing() {
        let mut selection = AddressSelectionState::with_selected("addr-2");
        selection.set_mode(AddressMode::New);
        selection.update_new(AddressField::Street, "Rua Augusta, 12".to_string());
        selection.update_new(AddressField::City, "São Paulo".to_string());

        let saved = selection.save_new_address();
        assert_eq!(saved.street, "Rua Augusta, 12");
        assert_eq!(saved.city, "São Paulo");
        assert_eq!(selection.mode, AddressMode::Existing);
        // The selection still points at the old address
        assert_eq!(selection.selected_address_id, "addr-2");
    }

    #[test]
    fn test_billing_address_follows_mode() {
        let mut selection = AddressSelectionState::default();
        assert_eq!(selection.billing_address(), None);

        selection.select_existing("addr-3");
        assert_eq!(
            selection.billing_address(),
            Some(BillingAddress::Existing("addr-3".to_string()))
        );

        selection.set_mode(AddressMode::New);
        selection.update_new(AddressField::ZipCode, "22410-002".to_string());
        match selection.billing_address() {
            Some(BillingAddress::New(form)) => assert_eq!(form.zip_code, "22410-002"),
            other => panic!("expected new address, got {:?}", other),
        }
    }

    #[test]
    fn test_new_address_form_blank_check() {
        let mut form = NewAddressForm::default();
        assert!(form.is_blank());
        form.set(AddressField::Neighborhood, "  ".to_string());
        assert!(form.is_blank());
        form.set(AddressField::State, "RJ".to_string());
        assert!(!form.is_blank());
        assert_eq!(form.get(AddressField::State), "RJ");
    }

    #[test]
    fn test_address_mode_radio_values() {
        assert_eq!("new".parse::<AddressMode>(), Ok(AddressMode::New));
        assert_eq!(
            AddressMode::Existing.as_str().parse::<AddressMode>(),
            Ok(AddressMode::Existing)
        );
        assert!("other".parse::<AddressMode>().is_err());
    }

    #[test]
    fn test_edit_form_prefills_nickname() {
        let form = EditCardForm::from_card(&card("card-1"));
        assert_eq!(form.nickname, "Cartão Pessoal");
        assert_eq!(form.address.selected_address_id, "addr-1");
        assert_eq!(form.address.mode, AddressMode::Existing);
    }

    #[test]
    fn test_edit_form_without_nickname_starts_empty() {
        let form = EditCardForm::from_card(&card("card-2"));
        assert_eq!(form.nickname, "");
        assert_eq!(form.address.selected_address_id, "");
    }

    #[test]
    fn test_edit_submission_checks_presence_only() {
        let target = card("card-2");
        let mut form = EditCardForm::from_card(&target);

        let submission = form.submit(&target);
        assert_eq!(submission.card_id, "card-2");
        assert_eq!(submission.nickname, None);
        assert_eq!(submission.address_id, None);

        form.set_nickname("  Cartão Viagem ".to_string());
        form.address.select_existing("addr-3");
        let submission = form.submit(&target);
        assert_eq!(submission.nickname.as_deref(), Some("Cartão Viagem"));
        assert_eq!(submission.address_id.as_deref(), Some("addr-3"));
    }

    #[test]
    fn test_confirm_delete_closes_dialog() {
        let mut dialog = CardDialog::default();
        dialog.open_delete();
        assert!(dialog.is_confirming_delete());

        assert_eq!(dialog.confirm_delete("card-3"), Some("card-3".to_string()));
        assert_eq!(dialog, CardDialog::Closed);
    }

    #[test]
    fn test_confirm_delete_outside_confirmation_is_noop() {
        let mut dialog = CardDialog::default();
        dialog.open_edit();
        assert_eq!(dialog.confirm_delete("card-1"), None);
        assert!(dialog.is_editing());

        dialog.close();
        assert_eq!(dialog, CardDialog::Closed);
        assert_eq!(dialog.confirm_delete("card-1"), None);
    }

    #[test]
    fn test_add_form_defaults() {
        let form = AddCardForm::new(&mock_addresses());
        assert_eq!(form.card_type, CardType::Credit);
        assert!(!form.is_default);
        assert_eq!(form.address.selected_address_id, "addr-1");
        assert!(form.card_number.is_empty());
    }

    #[test]
    fn test_add_form_submits_without_validation() {
        let mut form = AddCardForm::new(&mock_addresses());
        form.card_number = "not a card".to_string();
        form.expiry = "13/99".to_string();
        form.cvc = "1".to_string();
        form.card_type = CardType::Debit;
        form.is_default = true;

        let payload = form.submit();
        assert_eq!(payload.card_number, "not a card");
        assert_eq!(payload.expiry, "13/99");
        assert_eq!(payload.card_type, CardType::Debit);
        assert!(payload.is_default);
        assert_eq!(
            payload.billing_address,
            Some(BillingAddress::Existing("addr-1".to_string()))
        );
    }

    #[test]
    fn test_add_payload_never_logs_cvc() {
        let mut form = AddCardForm::new(&mock_addresses());
        form.cvc = "987".to_string();
        let json = serde_json::to_value(form.submit()).unwrap();
        assert!(json.get("cvc").is_none());
        assert_eq!(json["cardType"], "credit");
        assert_eq!(json["billingAddress"]["kind"], "existing");
    }

    #[test]
    fn test_add_form_preselects_first_address_not_default() {
        let mut addresses = mock_addresses();
        addresses[0].is_default = false;
        addresses[2].is_default = true;

        let form = AddCardForm::new(&addresses);
        assert_eq!(form.address.selected_address_id, "addr-1");
        assert!(AddCardForm::new(&[]).address.selected_address_id.is_empty());
    }

    #[test]
    fn test_edit_dialog_discards_edits_on_close() {
        let target = card("card-1");
        let mut actions = CardActions::new(&target);

        actions.open_edit(&target);
        actions.edit_form.set_nickname("Outro nome".to_string());
        actions.edit_form.address.set_mode(AddressMode::New);
        actions.edit_form.address.select_existing("addr-3");
        actions.close(&target);
        assert_eq!(actions.dialog, CardDialog::Closed);

        actions.open_edit(&target);
        assert!(actions.dialog.is_editing());
        assert_eq!(actions.edit_form, EditCardForm::from_card(&target));
        assert_eq!(actions.edit_form.nickname, "Cartão Pessoal");
        assert_eq!(actions.edit_form.address.selected_address_id, "addr-1");
    }

    #[test]
    fn test_edit_dialog_submit_closes_and_resets() {
        let target = card("card-2");
        let mut actions = CardActions::new(&target);
        assert_eq!(actions.submit_edit(&target), None);

        actions.open_edit(&target);
        actions.edit_form.set_nickname("Cartão Viagem".to_string());
        let submission = actions.submit_edit(&target).expect("edit dialog is open");
        assert_eq!(submission.nickname.as_deref(), Some("Cartão Viagem"));
        assert_eq!(actions.dialog, CardDialog::Closed);
        assert_eq!(actions.edit_form.nickname, "");
    }

    #[test]
    fn test_card_actions_delete_flow() {
        let target = card("card-3");
        let mut actions = CardActions::new(&target);
        actions.open_delete();
        assert!(actions.dialog.is_confirming_delete());
        assert_eq!(actions.confirm_delete(&target), Some("card-3".to_string()));
        assert_eq!(actions.dialog, CardDialog::Closed);
    }

    #[test]
    fn test_add_dialog_discards_edits_on_close() {
        let addresses = mock_addresses();
        let mut dialog = AddCardDialog::new(&addresses);

        dialog.open(&addresses);
        dialog.form.card_number = "4111 1111 1111 1111".to_string();
        dialog.form.card_type = CardType::Debit;
        dialog.form.address.select_existing("addr-2");
        dialog.close(&addresses);
        assert!(!dialog.is_open);

        dialog.open(&addresses);
        assert!(dialog.is_open);
        assert_eq!(dialog.form, AddCardForm::new(&addresses));
    }

    #[test]
    fn test_add_dialog_submit_closes_and_resets() {
        let addresses = mock_addresses();
        let mut dialog = AddCardDialog::new(&addresses);
        assert_eq!(dialog.submit(&addresses), None);

        dialog.open(&addresses);
        dialog.form.card_name = "ANA SILVA".to_string();
        let payload = dialog.submit(&addresses).expect("dialog is open");
        assert_eq!(payload.card_name, "ANA SILVA");
        assert!(!dialog.is_open);
        assert!(dialog.form.card_name.is_empty());
    }

    #[test]
    fn test_wallet_page_state() {
        assert_eq!(WalletPageState::from_auth(true, true), WalletPageState::Loading);
        assert_eq!(WalletPageState::from_auth(true, false), WalletPageState::Loading);
        assert_eq!(
            WalletPageState::from_auth(false, false),
            WalletPageState::Unauthenticated
        );
        assert_eq!(
            WalletPageState::from_auth(false, true),
            WalletPageState::Authenticated
        );
    }
}
