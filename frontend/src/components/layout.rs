use yew::prelude::*;
use web_sys::MouseEvent;
use crate::hooks::use_auth::use_auth;
use crate::services::router::AppRoute;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Html,
    /// Pages that render their own signed-out state turn the session button off
    #[prop_or(true)]
    pub show_session: bool,
}

/// What the header's session area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionControl {
    Hidden,
    SignIn,
    SignOut,
}

fn session_control(is_loading: bool, is_authenticated: bool, show_session: bool) -> SessionControl {
    if !show_session || is_loading {
        SessionControl::Hidden
    } else if is_authenticated {
        SessionControl::SignOut
    } else {
        SessionControl::SignIn
    }
}

/// Page chrome: store header, navigation and the session button
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let auth = use_auth();

    let session_button = match session_control(auth.is_loading, auth.is_authenticated, props.show_session) {
        SessionControl::Hidden => html! {},
        SessionControl::SignOut => {
            let sign_out = auth.sign_out.clone();
            let onclick = Callback::from(move |_: MouseEvent| sign_out.emit(()));
            html! {
                <div class="session">
                    {if let Some(name) = &auth.user_name {
                        html! { <span class="session-user">{name.clone()}</span> }
                    } else { html! {} }}
                    <button type="button" class="btn btn-secondary" {onclick}>{"Sair"}</button>
                </div>
            }
        }
        SessionControl::SignIn => {
            let sign_in = auth.sign_in.clone();
            let onclick = Callback::from(move |_: MouseEvent| sign_in.emit(()));
            html! {
                <div class="session">
                    <button type="button" class="btn btn-primary" {onclick}>{"Entrar"}</button>
                </div>
            }
        }
    };

    html! {
        <>
            <header class="header">
                <div class="container header-content">
                    <a href="/" class="store-name">{"Loja"}</a>
                    <nav class="header-nav">
                        <a href={AppRoute::WALLET_PATH}>{"Carteira"}</a>
                    </nav>
                    {session_button}
                </div>
            </header>
            <main class="main">
                <div class="container">
                    {props.children.clone()}
                </div>
            </main>
        </>
    }
}
