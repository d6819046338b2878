pub mod add_payment_method_modal;
pub mod address_selection;
pub mod card_brand_badge;
pub mod delete_card_modal;
pub mod edit_card_modal;
pub mod layout;
pub mod payment_method_card;
