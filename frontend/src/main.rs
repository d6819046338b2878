use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use hooks::use_auth::AuthProvider;
use hooks::use_toast::ToastProvider;
use pages::carteira::Carteira;
use pages::not_found::NotFound;
use services::config::AppConfig;
use services::logging::Logger;
use services::router::AppRoute;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_location());
    let route = use_memo((), |_| AppRoute::current());

    use_effect_with(*route, |route| {
        Logger::debug_with_component("App", &format!("Mounted route {:?}", route));
        || ()
    });

    let page = match *route {
        AppRoute::Carteira => html! { <Carteira /> },
        AppRoute::NotFound => html! { <NotFound /> },
    };

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <AuthProvider>
                <ToastProvider>
                    {page}
                </ToastProvider>
            </AuthProvider>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
