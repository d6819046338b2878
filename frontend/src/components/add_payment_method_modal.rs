use std::rc::Rc;
use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use shared::{parse_yes_no, yes_no, AddCardDialog, AddCardForm, Address, AddressSelectionState, CardType};
use super::address_selection::AddressSelection;
use crate::hooks::use_toast::{use_toast, ToastMessage};
use crate::services::logging::Logger;

const COMPONENT: &str = "AddPaymentMethodModal";

#[derive(Clone, Copy, PartialEq)]
enum CardField {
    Number,
    Expiry,
    Cvc,
    Name,
}

impl CardField {
    fn apply(&self, form: &mut AddCardForm, value: String) {
        match self {
            CardField::Number => form.card_number = value,
            CardField::Expiry => form.expiry = value,
            CardField::Cvc => form.cvc = value,
            CardField::Name => form.card_name = value,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AddPaymentMethodModalProps {
    pub addresses: Rc<Vec<Address>>,
}

/// "Adicionar cartão" button plus the dialog it opens
#[function_component(AddPaymentMethodModal)]
pub fn add_payment_method_modal(props: &AddPaymentMethodModalProps) -> Html {
    let dialog = use_state(|| AddCardDialog::new(&props.addresses));
    let toast = use_toast();

    let on_open = {
        let dialog = dialog.clone();
        let addresses = props.addresses.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*dialog).clone();
            next.open(&addresses);
            dialog.set(next);
        })
    };

    let close = {
        let dialog = dialog.clone();
        let addresses = props.addresses.clone();
        Callback::from(move |_: ()| {
            let mut next = (*dialog).clone();
            next.close(&addresses);
            dialog.set(next);
        })
    };

    let text_input = |field: CardField| {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*dialog).clone();
            field.apply(&mut next.form, input.value());
            dialog.set(next);
        })
    };

    let on_card_type_change = {
        let dialog = dialog.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<CardType>() {
                Ok(card_type) => {
                    let mut next = (*dialog).clone();
                    next.form.card_type = card_type;
                    dialog.set(next);
                }
                Err(e) => Logger::warn_with_component(COMPONENT, &e.to_string()),
            }
        })
    };

    let on_default_change = {
        let dialog = dialog.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match parse_yes_no(&select.value()) {
                Ok(is_default) => {
                    let mut next = (*dialog).clone();
                    next.form.is_default = is_default;
                    dialog.set(next);
                }
                Err(e) => Logger::warn_with_component(COMPONENT, &e.to_string()),
            }
        })
    };

    let on_address_change = {
        let dialog = dialog.clone();
        Callback::from(move |address: AddressSelectionState| {
            let mut next = (*dialog).clone();
            next.form.address = address;
            dialog.set(next);
        })
    };

    let on_submit = {
        let dialog = dialog.clone();
        let addresses = props.addresses.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*dialog).clone();
            if let Some(payload) = next.submit(&addresses) {
                Logger::info_with_payload(COMPONENT, "Payment method data:", &payload);
                toast.emit(ToastMessage::new(
                    "Cartão adicionado",
                    "Seu novo cartão foi adicionado à carteira.",
                ));
            }
            dialog.set(next);
        })
    };

    let on_backdrop_click = {
        let close = close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let trigger = html! {
        <button type="button" class="btn btn-primary btn-block" onclick={on_open}>
            {"+ Adicionar cartão de crédito/débito"}
        </button>
    };
    let form = &dialog.form;

    if !dialog.is_open {
        return trigger;
    }

    html! {
        <>
            {trigger}
            <div class="modal-backdrop" onclick={on_backdrop_click}>
                <div class="modal add-card-modal" role="dialog" aria-modal="true" onclick={on_modal_click}>
                    <div class="modal-header">
                        <h3 class="modal-title">{"Adicionar cartão de crédito/débito"}</h3>
                        <p class="modal-description">{"Adicione um novo cartão à sua conta."}</p>
                    </div>

                    <form class="add-card-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="new-card-number">{"Número do cartão"}</label>
                            <input
                                id="new-card-number"
                                type="text"
                                inputmode="numeric"
                                placeholder="1234 5678 9012 3456"
                                value={form.card_number.clone()}
                                oninput={text_input(CardField::Number)}
                            />
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="new-card-expiry">{"Validade"}</label>
                                <input
                                    id="new-card-expiry"
                                    type="text"
                                    placeholder="MM/AA"
                                    value={form.expiry.clone()}
                                    oninput={text_input(CardField::Expiry)}
                                />
                            </div>
                            <div class="form-group">
                                <label for="new-card-cvc">{"CVC"}</label>
                                <input
                                    id="new-card-cvc"
                                    type="text"
                                    inputmode="numeric"
                                    placeholder="123"
                                    value={form.cvc.clone()}
                                    oninput={text_input(CardField::Cvc)}
                                />
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="new-card-name">{"Nome no cartão"}</label>
                            <input
                                id="new-card-name"
                                type="text"
                                placeholder="Nome como aparece no cartão"
                                value={form.card_name.clone()}
                                oninput={text_input(CardField::Name)}
                            />
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="new-card-type">{"Tipo"}</label>
                                <select id="new-card-type" onchange={on_card_type_change}>
                                    {for [CardType::Credit, CardType::Debit].iter().map(|card_type| html! {
                                        <option
                                            value={card_type.as_str()}
                                            selected={*card_type == form.card_type}
                                        >
                                            {card_type.label()}
                                        </option>
                                    })}
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="new-card-default">{"Padrão"}</label>
                                <select id="new-card-default" onchange={on_default_change}>
                                    {for [(true, "Sim"), (false, "Não")].iter().map(|(value, label)| html! {
                                        <option value={yes_no(*value)} selected={*value == form.is_default}>
                                            {*label}
                                        </option>
                                    })}
                                </select>
                            </div>
                        </div>

                        <hr class="separator" />

                        <AddressSelection
                            id_prefix="new-card"
                            state={form.address.clone()}
                            addresses={props.addresses.clone()}
                            on_change={on_address_change}
                        />

                        <div class="modal-buttons">
                            <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                                {"Cancelar"}
                            </button>
                            <button type="submit" class="btn btn-primary">{"Salvar"}</button>
                        </div>
                    </form>
                </div>
            </div>
        </>
    }
}
