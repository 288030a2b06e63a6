//! Product domain types and validation.
//!
//! [`validate`] turns an untyped request payload into a normalized
//! [`Product`]. Identifiers and timestamps are never assigned here; the
//! persistence layer owns them.

mod error;
mod rules;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

pub use self::error::ValidationError;
pub use self::rules::{validate, validate_value};

/// Minimum product name length, in characters.
pub const NAME_MIN_LEN: u64 = 3;

/// Maximum product name length, in characters.
pub const NAME_MAX_LEN: u64 = 100;

/// Payload keys, in the order violations are reported.
pub const FIELDS: [&str; 6] = ["name", "description", "price", "unit", "quantity", "status"];

macro_rules! define_literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $lit)] $variant ),+
        }

        impl $name {
            /// Every accepted literal, in declaration order.
            pub const LITERALS: &'static [&'static str] = &[$( $lit ),+];

            /// The wire literal for this variant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $lit ),+
                }
            }

            /// Parse an exact wire literal. Matching is case-sensitive.
            pub fn from_literal(value: &str) -> Option<Self> {
                match value {
                    $( $lit => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_literal_enum! {
    /// Unit a product quantity is measured in.
    Unit {
        Kg = "kg",
        Litre = "litre",
        Pcs = "pcs",
    }
}

define_literal_enum! {
    /// Stock status of a product.
    StockStatus {
        InStock = "in-stock",
        OutOfStock = "out-of-stock",
        Discontinued = "discontinued",
    }
}

/// A validated product, ready to be handed to the persistence layer.
///
/// The bounds declared here are checked by [`validate`] after every field
/// has been read with the right type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    #[validate(length(min = 3, max = 100))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub unit: Unit,
    #[validate(range(min = 0))]
    pub quantity: i64,
    pub status: StockStatus,
}

impl Product {
    /// Apply derived fields. A product with nothing on hand is always
    /// out of stock, whatever status the caller supplied.
    pub fn normalize(mut self) -> Self {
        if self.quantity == 0 {
            self.status = StockStatus::OutOfStock;
        }
        self
    }

    /// The product as a request-shaped JSON object.
    ///
    /// Feeding the result back into [`validate`] yields an equal product.
    pub fn to_payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert("name".into(), Value::from(self.name.as_str()));
        payload.insert("description".into(), Value::from(self.description.as_str()));
        payload.insert("price".into(), Value::from(self.price));
        payload.insert("unit".into(), Value::from(self.unit.as_str()));
        payload.insert("quantity".into(), Value::from(self.quantity));
        payload.insert("status".into(), Value::from(self.status.as_str()));
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice(quantity: i64, status: StockStatus) -> Product {
        Product {
            name: "Rice".to_string(),
            description: "Basmati".to_string(),
            price: 50.0,
            unit: Unit::Kg,
            quantity,
            status,
        }
    }

    #[test]
    fn literals_round_trip() {
        for literal in Unit::LITERALS {
            assert_eq!(Unit::from_literal(literal).unwrap().as_str(), *literal);
        }
        for literal in StockStatus::LITERALS {
            assert_eq!(StockStatus::from_literal(literal).unwrap().as_str(), *literal);
        }
    }

    #[test]
    fn literals_are_case_sensitive() {
        assert_eq!(Unit::from_literal("KG"), None);
        assert_eq!(StockStatus::from_literal("In-Stock"), None);
    }

    #[test]
    fn serde_uses_wire_literals() {
        assert_eq!(serde_json::to_value(Unit::Litre).unwrap(), "litre");
        assert_eq!(
            serde_json::to_value(StockStatus::OutOfStock).unwrap(),
            "out-of-stock"
        );
        let status: StockStatus = serde_json::from_str("\"discontinued\"").unwrap();
        assert_eq!(status, StockStatus::Discontinued);
    }

    #[test]
    fn normalize_forces_out_of_stock_at_zero() {
        let product = rice(0, StockStatus::Discontinued).normalize();
        assert_eq!(product.status, StockStatus::OutOfStock);
    }

    #[test]
    fn normalize_keeps_status_when_stocked() {
        let product = rice(5, StockStatus::Discontinued).normalize();
        assert_eq!(product.status, StockStatus::Discontinued);
    }

    #[test]
    fn declared_bounds_match_constants() {
        let mut product = rice(1, StockStatus::InStock);
        product.name = "a".repeat(NAME_MIN_LEN as usize);
        assert!(product.validate().is_ok());
        product.name = "a".repeat(NAME_MAX_LEN as usize);
        assert!(product.validate().is_ok());
        product.name = "a".repeat(NAME_MIN_LEN as usize - 1);
        assert!(product.validate().is_err());
        product.name = "a".repeat(NAME_MAX_LEN as usize + 1);
        assert!(product.validate().is_err());
    }

    #[test]
    fn payload_has_every_field() {
        let payload = rice(10, StockStatus::InStock).to_payload();
        for field in FIELDS {
            assert!(payload.contains_key(field), "missing {field}");
        }
        assert_eq!(payload["unit"], "kg");
        assert_eq!(payload["status"], "in-stock");
    }
}
