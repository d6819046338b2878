/// Pages the storefront can mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Carteira,
    NotFound,
}

impl AppRoute {
    /// Link target for the wallet page; unknown paths have no canonical URL
    pub const WALLET_PATH: &'static str = "/carteira";

    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | Self::WALLET_PATH => AppRoute::Carteira,
            _ => AppRoute::NotFound,
        }
    }

    pub fn current() -> Self {
        let path = web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default();
        Self::from_path(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_wallet_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Carteira);
        assert_eq!(AppRoute::from_path("/carteira"), AppRoute::Carteira);
        assert_eq!(AppRoute::from_path("/carteira/"), AppRoute::Carteira);
        assert_eq!(AppRoute::from_path(AppRoute::WALLET_PATH), AppRoute::Carteira);
    }

    #[wasm_bindgen_test]
    fn test_unknown_paths() {
        assert_eq!(AppRoute::from_path("/enderecos"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/carteira/extra"), AppRoute::NotFound);
    }
}
