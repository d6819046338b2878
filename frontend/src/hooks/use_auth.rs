use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo::timers::future::TimeoutFuture;
use crate::services::config::use_config;
use crate::services::logging::Logger;

const SIGNED_IN_USER: &str = "João Pereira";

/// Authentication status shared with every page
#[derive(Clone, PartialEq, Default)]
pub struct AuthContext {
    pub is_loading: bool,
    pub is_authenticated: bool,
    pub user_name: Option<AttrValue>,
    pub sign_in: Callback<()>,
    pub sign_out: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Stand-in session provider: starts loading, then resolves to the configured
/// initial state after `auth_load_delay_ms`.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let config = use_config();
    let is_loading = use_state(|| true);
    let is_authenticated = use_state(|| false);

    // Resolve the initial session once on mount
    use_effect_with((), {
        let is_loading = is_loading.clone();
        let is_authenticated = is_authenticated.clone();
        let delay_ms = config.auth_load_delay_ms;
        let start_signed_in = config.start_signed_in;

        move |_| {
            spawn_local(async move {
                if delay_ms > 0 {
                    TimeoutFuture::new(delay_ms).await;
                }
                is_authenticated.set(start_signed_in);
                is_loading.set(false);
                Logger::debug_with_component(
                    "AuthProvider",
                    &format!("Session resolved, authenticated={}", start_signed_in),
                );
            });
            || ()
        }
    });

    let sign_in = {
        let is_authenticated = is_authenticated.clone();
        use_callback((), move |_: (), _| {
            is_authenticated.set(true);
            Logger::info_with_component("AuthProvider", "Signed in");
        })
    };

    let sign_out = {
        let is_authenticated = is_authenticated.clone();
        use_callback((), move |_: (), _| {
            is_authenticated.set(false);
            Logger::info_with_component("AuthProvider", "Signed out");
        })
    };

    let context = AuthContext {
        is_loading: *is_loading,
        is_authenticated: *is_authenticated,
        user_name: (*is_authenticated).then(|| AttrValue::from(SIGNED_IN_USER)),
        sign_in,
        sign_out,
    };

    html! {
        <ContextProvider<AuthContext> {context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Current session. Outside an `AuthProvider` this reports signed out.
#[hook]
pub fn use_auth() -> AuthContext {
    match use_context::<AuthContext>() {
        Some(context) => context,
        None => {
            Logger::warn_with_component("use_auth", "No AuthProvider above this component");
            AuthContext::default()
        }
    }
}
