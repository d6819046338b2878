use yew::prelude::*;
use shared::CardBrand;

#[derive(Properties, PartialEq)]
pub struct CardBrandBadgeProps {
    pub brand: CardBrand,
    /// Smaller variant used inside the edit dialog header
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(CardBrandBadge)]
pub fn card_brand_badge(props: &CardBrandBadgeProps) -> Html {
    let mut class = classes!("brand-badge");
    if props.compact {
        class.push("compact");
    }

    match props.brand {
        CardBrand::Mastercard => html! {
            <div class={classes!(class, "brand-mastercard")} title={props.brand.badge_label()}>
                <div class="mastercard-circle left"></div>
                <div class="mastercard-circle right"></div>
            </div>
        },
        brand => html! {
            <div class={classes!(class, format!("brand-{}", brand.as_str()))}>
                <span class="brand-label">{brand.badge_label()}</span>
            </div>
        },
    }
}
