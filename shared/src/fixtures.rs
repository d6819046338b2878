//! Static sample data standing in for the user's saved cards and addresses.

use crate::{Address, CardBrand, CardType, PaymentCard};

pub fn mock_addresses() -> Vec<Address> {
    vec![
        Address {
            id: "addr-1".to_string(),
            street: "Av. Paulista, 1000".to_string(),
            neighborhood: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            zip_code: "01310-100".to_string(),
            is_default: true,
        },
        Address {
            id: "addr-2".to_string(),
            street: "Rua das Flores, 250".to_string(),
            neighborhood: "Centro".to_string(),
            city: "Curitiba".to_string(),
            state: "PR".to_string(),
            zip_code: "80010-000".to_string(),
            is_default: false,
        },
        Address {
            id: "addr-3".to_string(),
            street: "Rua Visconde de Pirajá, 414".to_string(),
            neighborhood: "Ipanema".to_string(),
            city: "Rio de Janeiro".to_string(),
            state: "RJ".to_string(),
            zip_code: "22410-002".to_string(),
            is_default: false,
        },
    ]
}

pub fn mock_cards() -> Vec<PaymentCard> {
    vec![
        PaymentCard {
            id: "card-1".to_string(),
            brand: CardBrand::Mastercard,
            last_four_digits: "5367".to_string(),
            holder_name: "João Pereira".to_string(),
            card_type: CardType::Credit,
            is_default: true,
            address_id: Some("addr-1".to_string()),
            nickname: Some("Cartão Pessoal".to_string()),
        },
        PaymentCard {
            id: "card-2".to_string(),
            brand: CardBrand::Visa,
            last_four_digits: "1234".to_string(),
            holder_name: "Ana Silva".to_string(),
            card_type: CardType::Debit,
            is_default: false,
            address_id: None,
            nickname: None,
        },
        PaymentCard {
            id: "card-3".to_string(),
            brand: CardBrand::Visa,
            last_four_digits: "9012".to_string(),
            holder_name: "João Pereira".to_string(),
            card_type: CardType::Credit,
            is_default: false,
            address_id: Some("addr-2".to_string()),
            nickname: Some("Cartão da Empresa".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find_address;

    #[test]
    fn test_card_addresses_resolve() {
        let addresses = mock_addresses();
        for card in mock_cards() {
            if let Some(address_id) = &card.address_id {
                assert!(
                    find_address(&addresses, address_id).is_some(),
                    "card {} points at missing address {}",
                    card.id,
                    address_id
                );
            }
        }
    }

    #[test]
    fn test_single_default_entries() {
        assert_eq!(mock_cards().iter().filter(|c| c.is_default).count(), 1);
        assert_eq!(mock_addresses().iter().filter(|a| a.is_default).count(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut card_ids: Vec<_> = mock_cards().into_iter().map(|c| c.id).collect();
        card_ids.sort();
        card_ids.dedup();
        assert_eq!(card_ids.len(), mock_cards().len());

        let mut address_ids: Vec<_> = mock_addresses().into_iter().map(|a| a.id).collect();
        address_ids.sort();
        address_ids.dedup();
        assert_eq!(address_ids.len(), mock_addresses().len());
    }
}
