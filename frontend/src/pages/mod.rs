pub mod carteira;
pub mod not_found;
