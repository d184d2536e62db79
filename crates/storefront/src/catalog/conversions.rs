//! Conversions from catalog wire types to domain types.

use coffee_delivery_core::{Coffee, CoffeeId, Money};
use rust_decimal::Decimal;

use super::CatalogError;
use super::types::CoffeeData;

/// Convert a wire coffee into the domain type.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidPrice`] if the price string is not a
/// decimal number.
pub fn convert_coffee(data: CoffeeData) -> Result<Coffee, CatalogError> {
    let amount = data
        .price
        .parse::<Decimal>()
        .map_err(|_| CatalogError::InvalidPrice {
            id: data.id.clone(),
            value: data.price.clone(),
        })?;

    Ok(Coffee {
        id: CoffeeId::new(data.id),
        title: data.title,
        description: data.description,
        tags: data.tags,
        price: Money::brl(amount),
        image: data.image,
        quantity: data.quantity,
        favorite: data.favorite,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(id: &str, price: &str) -> CoffeeData {
        CoffeeData {
            id: id.to_string(),
            title: "Expresso Tradicional".to_string(),
            description: "O tradicional café feito com água quente e grãos moídos".to_string(),
            tags: vec!["tradicional".to_string()],
            price: price.to_string(),
            image: "/images/coffees/expresso.png".to_string(),
            quantity: 0,
            favorite: false,
        }
    }

    #[test]
    fn test_convert_coffee() {
        let coffee = convert_coffee(data("0", "6.90")).expect("valid coffee");
        assert_eq!(coffee.id, CoffeeId::new("0"));
        assert_eq!(coffee.price.display(), "R$ 6,90");
        assert_eq!(coffee.quantity, 0);
        assert!(!coffee.favorite);
    }

    #[test]
    fn test_convert_coffee_rejects_bad_price() {
        let err = convert_coffee(data("0", "six ninety")).expect_err("invalid price");
        assert!(matches!(
            err,
            CatalogError::InvalidPrice { ref id, .. } if id == "0"
        ));
    }

    #[test]
    fn test_wire_defaults() {
        let json = r#"{
            "id": "1",
            "title": "Expresso Americano",
            "description": "Expresso diluído, menos intenso que o tradicional",
            "price": "9.95",
            "image": "/images/coffees/americano.png"
        }"#;
        let parsed: CoffeeData = serde_json::from_str(json).expect("deserialize");
        assert!(parsed.tags.is_empty());
        assert_eq!(parsed.quantity, 0);
        assert!(!parsed.favorite);
    }
}
