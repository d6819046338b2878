use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement, HtmlSelectElement};
use shared::{Address, AddressField, AddressMode, AddressSelectionState};
use crate::services::config::use_config;
use crate::services::logging::Logger;

const COMPONENT: &str = "AddressSelection";

/// Value of the `<select>` or `<input>` an event fired on
fn control_value(target: Option<EventTarget>) -> Option<String> {
    match target?.dyn_into::<HtmlSelectElement>() {
        Ok(select) => Some(select.value()),
        Err(target) => target
            .dyn_into::<HtmlInputElement>()
            .ok()
            .map(|input| input.value()),
    }
}

#[derive(Properties, PartialEq)]
pub struct AddressSelectionProps {
    /// Keeps radio groups and input ids unique when several dialogs exist on the page
    pub id_prefix: AttrValue,
    pub state: AddressSelectionState,
    pub addresses: Rc<Vec<Address>>,
    pub on_change: Callback<AddressSelectionState>,
    /// When set, the new-address inputs get a "Salvar novo endereço" button
    #[prop_or_default]
    pub on_save_new_address: Option<Callback<()>>,
}

/// Billing address picker: an existing address from the address book, or a new one typed inline
#[function_component(AddressSelection)]
pub fn address_selection(props: &AddressSelectionProps) -> Html {
    let config = use_config();
    let radio_name = format!("{}-address-mode", props.id_prefix);
    let existing_id = format!("{}-existing", props.id_prefix);
    let new_id = format!("{}-new", props.id_prefix);

    let on_mode_change = {
        let state = props.state.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let Some(value) = control_value(e.target()) else {
                Logger::warn_with_component(COMPONENT, "address mode change without a radio target");
                return;
            };
            match value.parse::<AddressMode>() {
                Ok(mode) => {
                    let mut next = state.clone();
                    next.set_mode(mode);
                    on_change.emit(next);
                }
                Err(e) => Logger::warn_with_component(COMPONENT, &e.to_string()),
            }
        })
    };

    let on_select_address = {
        let state = props.state.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(address_id) = control_value(e.target()) {
                let mut next = state.clone();
                next.select_existing(address_id);
                on_change.emit(next);
            }
        })
    };

    let field_input = |field: AddressField| -> Html {
        let oninput = {
            let state = props.state.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(value) = control_value(e.target()) {
                    let mut next = state.clone();
                    next.update_new(field, value);
                    on_change.emit(next);
                }
            })
        };
        let input_id = format!("{}-{}", props.id_prefix, field.key());

        html! {
            <div class="form-group">
                <label for={input_id.clone()}>{field.label()}</label>
                <input
                    id={input_id}
                    type="text"
                    placeholder={field.placeholder()}
                    value={props.state.new_address.get(field).to_string()}
                    {oninput}
                />
            </div>
        }
    };

    let on_save_click = props.on_save_new_address.clone().map(|on_save| {
        Callback::from(move |_: MouseEvent| on_save.emit(()))
    });

    html! {
        <div class="address-selection">
            <h4 class="address-selection-title">{"Endereço de cobrança"}</h4>

            <div class="radio-option">
                <input
                    type="radio"
                    id={existing_id.clone()}
                    name={radio_name.clone()}
                    value={AddressMode::Existing.as_str()}
                    checked={props.state.shows_existing_select()}
                    onchange={on_mode_change.clone()}
                />
                <div class="radio-body">
                    <label for={existing_id}>{"Usar um endereço existente"}</label>
                    {if props.state.shows_existing_select() {
                        html! {
                            <select class="address-select" onchange={on_select_address}>
                                <option value="" disabled=true selected={props.state.selected_address_id.is_empty()}>
                                    {"Selecione um endereço"}
                                </option>
                                {for props.addresses.iter().map(|address| {
                                    html! {
                                        <option
                                            key={address.id.clone()}
                                            value={address.id.clone()}
                                            selected={address.id == props.state.selected_address_id}
                                        >
                                            {address.option_label()}
                                        </option>
                                    }
                                })}
                            </select>
                        }
                    } else { html! {} }}
                    <a href={config.addresses_path.clone()} class="manage-addresses-link">
                        {"Gerenciar endereços"}
                    </a>
                </div>
            </div>

            <div class="radio-option">
                <input
                    type="radio"
                    id={new_id.clone()}
                    name={radio_name}
                    value={AddressMode::New.as_str()}
                    checked={props.state.shows_new_address_inputs()}
                    onchange={on_mode_change}
                />
                <div class="radio-body">
                    <label for={new_id}>{"Adicionar novo endereço"}</label>
                    {if props.state.shows_new_address_inputs() {
                        html! {
                            <div class="new-address-fields">
                                {field_input(AddressField::Street)}
                                <div class="form-row">
                                    {field_input(AddressField::Neighborhood)}
                                    {field_input(AddressField::City)}
                                </div>
                                <div class="form-row">
                                    {field_input(AddressField::State)}
                                    {field_input(AddressField::ZipCode)}
                                </div>
                                {if let Some(onclick) = on_save_click {
                                    html! {
                                        <button type="button" class="btn btn-primary" {onclick}>
                                            {"Salvar novo endereço"}
                                        </button>
                                    }
                                } else { html! {} }}
                            </div>
                        }
                    } else { html! {} }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_control_value_reads_form_controls() {
        let input: HtmlInputElement = document().create_element("input").unwrap().dyn_into().unwrap();
        input.set_value("Rua Augusta, 500");
        assert_eq!(control_value(Some(input.into())), Some("Rua Augusta, 500".to_string()));

        let select: HtmlSelectElement = document().create_element("select").unwrap().dyn_into().unwrap();
        let option = document().create_element("option").unwrap();
        option.set_attribute("value", "addr-2").unwrap();
        select.append_child(&option).unwrap();
        select.set_value("addr-2");
        assert_eq!(control_value(Some(select.into())), Some("addr-2".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_control_value_ignores_other_targets() {
        let div = document().create_element("div").unwrap();
        assert_eq!(control_value(Some(div.into())), None);
        assert_eq!(control_value(None), None);
    }
}
