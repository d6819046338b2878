use yew::prelude::*;
use crate::components::layout::Layout;
use crate::services::router::AppRoute;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Layout>
            <div class="not-found">
                <h1>{"404"}</h1>
                <p>{"Página não encontrada"}</p>
                <a href={AppRoute::WALLET_PATH}>{"Voltar para a carteira"}</a>
            </div>
        </Layout>
    }
}
