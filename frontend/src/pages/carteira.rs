use yew::prelude::*;
use shared::fixtures::{mock_addresses, mock_cards};
use shared::WalletPageState;
use crate::components::add_payment_method_modal::AddPaymentMethodModal;
use crate::components::layout::Layout;
use crate::components::payment_method_card::PaymentMethodCard;
use crate::hooks::use_auth::use_auth;

/// Wallet page: the user's saved payment cards
#[function_component(Carteira)]
pub fn carteira() -> Html {
    let auth = use_auth();
    let cards = use_memo((), |_| mock_cards());
    let addresses = use_memo((), |_| mock_addresses());

    match WalletPageState::from_auth(auth.is_loading, auth.is_authenticated) {
        WalletPageState::Loading => html! {
            <div class="page-loading">
                <div class="spinner" aria-label="Carregando"></div>
            </div>
        },
        WalletPageState::Unauthenticated => html! {
            <Layout show_session=false>
                <div class="signed-out-prompt">
                    <h1>{"Entre para acessar sua carteira"}</h1>
                    <p>{"Faça login para visualizar seus métodos de pagamento"}</p>
                </div>
            </Layout>
        },
        WalletPageState::Authenticated => html! {
            <Layout>
                <div class="wallet-page">
                    <div class="wallet-heading">
                        <h1>{"Minha Carteira"}</h1>
                        <p>{"Gerencie seus métodos de pagamento"}</p>
                    </div>

                    <div class="wallet-panel">
                        <section class="payment-methods">
                            <h2>{"Métodos de pagamento"}</h2>
                            <div class="payment-card-list">
                                {for cards.iter().map(|card| html! {
                                    <PaymentMethodCard
                                        key={card.id.clone()}
                                        card={card.clone()}
                                        addresses={addresses.clone()}
                                    />
                                })}
                            </div>
                            <div class="add-payment-method">
                                <AddPaymentMethodModal addresses={addresses.clone()} />
                            </div>
                        </section>

                        <section class="wallet-info">
                            <h3>{"Informações adicionais"}</h3>
                            <p>
                                {"Os cartões adicionados aqui estarão disponíveis para uso em suas próximas compras. \
                                  Suas informações de pagamento são armazenadas com segurança e criptografadas. \
                                  Boletos e PIX são gerados no momento do pagamento."}
                            </p>
                        </section>
                    </div>
                </div>
            </Layout>
        },
    }
}
