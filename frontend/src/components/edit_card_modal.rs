use std::rc::Rc;
use yew::prelude::*;
use web_sys::{HtmlInputElement, MouseEvent};
use shared::{Address, AddressSelectionState, EditCardForm, PaymentCard};
use super::address_selection::AddressSelection;
use super::card_brand_badge::CardBrandBadge;
use crate::hooks::use_toast::{use_toast, ToastMessage};
use crate::services::logging::Logger;

const COMPONENT: &str = "EditCardModal";

#[derive(Properties, PartialEq)]
pub struct EditCardModalProps {
    pub is_open: bool,
    pub card: PaymentCard,
    pub addresses: Rc<Vec<Address>>,
    /// Owned by the card tile, which resets it on open and close
    pub form: EditCardForm,
    pub on_change: Callback<EditCardForm>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(EditCardModal)]
pub fn edit_card_modal(props: &EditCardModalProps) -> Html {
    let toast = use_toast();

    let on_nickname_input = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = form.clone();
            next.set_nickname(input.value());
            on_change.emit(next);
        })
    };

    let on_address_change = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |address: AddressSelectionState| {
            let mut next = form.clone();
            next.address = address;
            on_change.emit(next);
        })
    };

    let on_save_new_address = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: ()| {
            let mut next = form.clone();
            let new_address = next.address.save_new_address();
            Logger::info_with_payload(COMPONENT, "New address data:", &new_address);
            toast.emit(ToastMessage::new(
                "Endereço adicionado",
                "Um novo endereço foi adicionado com sucesso.",
            ));
            on_change.emit(next);
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    let card = &props.card;
    let nickname_id = format!("{}-nickname", card.id);

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal edit-card-modal" role="dialog" aria-modal="true" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3 class="modal-title">{"Editar cartão"}</h3>
                    <p class="modal-description">{"Atualize as informações do seu cartão"}</p>
                </div>

                <form class="edit-card-form" onsubmit={on_submit}>
                    <div class="card-summary">
                        <div class="card-summary-brand">
                            <CardBrandBadge brand={card.brand} compact=true />
                            <p class="card-number">{card.masked_number()}</p>
                        </div>
                        <div class="card-summary-grid">
                            <div>
                                <p class="muted">{"Titular"}</p>
                                <p>{&card.holder_name}</p>
                            </div>
                            <div>
                                <p class="muted">{"Tipo"}</p>
                                <p>{card.type_label()}</p>
                            </div>
                        </div>
                    </div>

                    <div class="form-group">
                        <label for={nickname_id.clone()}>{"Nome do cartão (opcional)"}</label>
                        <small class="form-hint">{"Ex: Cartão Pessoal, Cartão da Empresa"}</small>
                        <input
                            id={nickname_id}
                            type="text"
                            placeholder="Dê um nome para identificar este cartão"
                            value={props.form.nickname.clone()}
                            oninput={on_nickname_input}
                        />
                    </div>

                    <hr class="separator" />

                    <AddressSelection
                        id_prefix={format!("edit-{}", card.id)}
                        state={props.form.address.clone()}
                        addresses={props.addresses.clone()}
                        on_change={on_address_change}
                        on_save_new_address={on_save_new_address}
                    />

                    <div class="modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancelar"}
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {"Salvar alterações"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
