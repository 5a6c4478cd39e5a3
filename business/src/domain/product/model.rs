use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::AssetRef;

pub const NAME_MIN_LEN: usize = 4;
pub const NAME_MAX_LEN: usize = 50;
pub const PRICE_MIN: f64 = 3.0;
pub const PRICE_MAX: f64 = 9_999_000_000.0;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub avatar: AssetRef,
    pub images: Vec<AssetRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub price: f64,
    pub avatar: AssetRef,
    pub images: Vec<AssetRef>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        Self::validate_name(&props.name)?;
        Self::validate_price(props.price)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            price: props.price,
            avatar: props.avatar,
            images: props.images,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn validate_name(name: &str) -> Result<(), ProductError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ProductError::NameEmpty);
        }
        let len = trimmed.chars().count();
        if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
            return Err(ProductError::NameLength);
        }
        Ok(())
    }

    pub fn validate_price(price: f64) -> Result<(), ProductError> {
        if !price.is_finite() || !(PRICE_MIN..=PRICE_MAX).contains(&price) {
            return Err(ProductError::PriceOutOfRange);
        }
        Ok(())
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        price: f64,
        avatar: AssetRef,
        images: Vec<AssetRef>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            avatar,
            images,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avatar() -> AssetRef {
        AssetRef::new("av1", "https://media.example.com/av1.jpg")
    }

    #[test]
    fn should_create_product_when_fields_are_valid() {
        let result = Product::new(NewProductProps {
            name: "Chair".to_string(),
            price: 49.0,
            avatar: avatar(),
            images: vec![],
        });

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.name, "Chair");
        assert_eq!(product.price, 49.0);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn should_reject_empty_name() {
        let result = Product::new(NewProductProps {
            name: "   ".to_string(),
            price: 49.0,
            avatar: avatar(),
            images: vec![],
        });

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_reject_name_shorter_than_minimum() {
        let result = Product::new(NewProductProps {
            name: "abc".to_string(),
            price: 49.0,
            avatar: avatar(),
            images: vec![],
        });

        assert!(matches!(result.unwrap_err(), ProductError::NameLength));
    }

    #[test]
    fn should_reject_name_longer_than_maximum() {
        let result = Product::new(NewProductProps {
            name: "x".repeat(NAME_MAX_LEN + 1),
            price: 49.0,
            avatar: avatar(),
            images: vec![],
        });

        assert!(matches!(result.unwrap_err(), ProductError::NameLength));
    }

    #[test]
    fn should_reject_price_below_minimum() {
        let result = Product::new(NewProductProps {
            name: "Chair".to_string(),
            price: 2.99,
            avatar: avatar(),
            images: vec![],
        });

        assert!(matches!(result.unwrap_err(), ProductError::PriceOutOfRange));
    }

    #[test]
    fn should_reject_non_finite_price() {
        let result = Product::new(NewProductProps {
            name: "Chair".to_string(),
            price: f64::NAN,
            avatar: avatar(),
            images: vec![],
        });

        assert!(matches!(result.unwrap_err(), ProductError::PriceOutOfRange));
    }
}
