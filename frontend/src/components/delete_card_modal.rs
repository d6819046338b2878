use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct DeleteCardModalProps {
    pub is_open: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(DeleteCardModal)]
pub fn delete_card_modal(props: &DeleteCardModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal delete-card-modal" role="alertdialog" aria-modal="true" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3 class="modal-title">{"Excluir método de pagamento"}</h3>
                    <p class="modal-description">
                        {"Tem certeza que deseja excluir este cartão? Esta ação não pode ser desfeita."}
                    </p>
                </div>
                <div class="modal-buttons">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                        {"Cancelar"}
                    </button>
                    <button type="button" class="btn btn-danger" onclick={on_confirm}>
                        {"Excluir"}
                    </button>
                </div>
            </div>
        </div>
    }
}
