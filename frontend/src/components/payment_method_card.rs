use std::rc::Rc;
use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{Address, CardActions, EditCardForm, PaymentCard, PaymentCardView};
use super::card_brand_badge::CardBrandBadge;
use super::delete_card_modal::DeleteCardModal;
use super::edit_card_modal::EditCardModal;
use crate::hooks::use_toast::{use_toast, ToastMessage};
use crate::services::logging::Logger;

const COMPONENT: &str = "PaymentMethodCard";

#[derive(Properties, PartialEq)]
pub struct PaymentMethodCardProps {
    pub card: PaymentCard,
    pub addresses: Rc<Vec<Address>>,
}

/// One saved card with its edit and delete dialogs
#[function_component(PaymentMethodCard)]
pub fn payment_method_card(props: &PaymentMethodCardProps) -> Html {
    let actions = use_state(|| CardActions::new(&props.card));
    let toast = use_toast();
    let view = PaymentCardView::new(&props.card, &props.addresses);

    let transition = {
        let actions = actions.clone();
        let card = props.card.clone();
        move |apply: fn(&mut CardActions, &PaymentCard)| {
            let actions = actions.clone();
            let card = card.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*actions).clone();
                apply(&mut next, &card);
                actions.set(next);
            })
        }
    };
    let on_edit_click = transition(CardActions::open_edit);
    let on_delete_click = transition(|actions, _| actions.open_delete());

    let on_close = {
        let actions = actions.clone();
        let card = props.card.clone();
        Callback::from(move |_: ()| {
            let mut next = (*actions).clone();
            next.close(&card);
            actions.set(next);
        })
    };

    let on_form_change = {
        let actions = actions.clone();
        Callback::from(move |form: EditCardForm| {
            let mut next = (*actions).clone();
            next.edit_form = form;
            actions.set(next);
        })
    };

    let on_submit_edit = {
        let actions = actions.clone();
        let card = props.card.clone();
        let toast = toast.clone();
        Callback::from(move |_: ()| {
            let mut next = (*actions).clone();
            if let Some(submission) = next.submit_edit(&card) {
                Logger::info_with_payload(COMPONENT, "Updated card data:", &submission);
                toast.emit(ToastMessage::new(
                    "Cartão atualizado",
                    "As informações do cartão foram atualizadas com sucesso.",
                ));
            }
            actions.set(next);
        })
    };

    let on_confirm_delete = {
        let actions = actions.clone();
        let card = props.card.clone();
        Callback::from(move |_: ()| {
            let mut next = (*actions).clone();
            if let Some(card_id) = next.confirm_delete(&card) {
                Logger::info_with_component(COMPONENT, &format!("Delete confirmed for card {}", card_id));
            }
            actions.set(next);
        })
    };

    html! {
        <div class="payment-card">
            <div class="payment-card-content">
                <div class="payment-card-details">
                    <div class="payment-card-identity">
                        <CardBrandBadge brand={view.brand} />
                        <div>
                            <p class="card-number">
                                {&view.masked_number}
                                {if let Some(nickname) = &view.nickname {
                                    html! { <span class="card-nickname">{format!("({})", nickname)}</span> }
                                } else { html! {} }}
                            </p>
                            <p class="card-holder">{&view.holder_name}</p>
                        </div>
                    </div>

                    <div class="payment-card-badges">
                        <span class="badge badge-type">{view.type_label}</span>
                        {if view.show_default_badge {
                            html! { <span class="badge badge-default">{"✓ Padrão"}</span> }
                        } else { html! {} }}
                    </div>

                    {if let Some(address) = &view.address {
                        html! {
                            <div class="payment-card-address">
                                <span class="address-pin">{"📍"}</span>
                                <div>
                                    <p class="address-street">{&address.street}</p>
                                    <p class="address-city">{&address.city_state}</p>
                                </div>
                            </div>
                        }
                    } else { html! {} }}
                </div>

                <div class="payment-card-actions">
                    <button type="button" class="icon-btn" title="Editar cartão" onclick={on_edit_click}>
                        {"✎"}
                    </button>
                    <button type="button" class="icon-btn danger" title="Excluir cartão" onclick={on_delete_click}>
                        {"🗑"}
                    </button>
                </div>
            </div>

            <EditCardModal
                is_open={actions.dialog.is_editing()}
                card={props.card.clone()}
                addresses={props.addresses.clone()}
                form={actions.edit_form.clone()}
                on_change={on_form_change}
                on_submit={on_submit_edit}
                on_close={on_close.clone()}
            />
            <DeleteCardModal
                is_open={actions.dialog.is_confirming_delete()}
                on_confirm={on_confirm_delete}
                on_cancel={on_close}
            />
        </div>
    }
}
