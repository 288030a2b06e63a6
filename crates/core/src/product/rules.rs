//! Product validator. Pure logic, no database access.
//!
//! Checks run in three passes and stop at the first violation:
//!
//! 1. presence of every field,
//! 2. shape (text, number, enum literal, whole-number quantity),
//! 3. bounds declared on [`Product`] (name length, price and quantity sign).
//!
//! Within a pass fields are checked in [`FIELDS`] order, so the reported
//! violation is stable for a given input. The one exception is `status`:
//! when `quantity` is zero the supplied literal is not checked at all, since
//! the status is forced to `out-of-stock` either way.

use serde_json::{Map, Value};
use validator::Validate;

use super::{Product, StockStatus, Unit, ValidationError, FIELDS, NAME_MAX_LEN, NAME_MIN_LEN};

/// Validate a product payload and derive its stock status.
///
/// Unknown keys are ignored. Uniqueness of `name` is left to the
/// persistence layer.
pub fn validate(payload: &Map<String, Value>) -> Result<Product, ValidationError> {
    check_presence(payload)?;
    let product = read_fields(payload)?;
    check_bounds(&product)?;
    Ok(product.normalize())
}

/// Like [`validate`], but accepts any JSON value and rejects non-objects.
pub fn validate_value(payload: &Value) -> Result<Product, ValidationError> {
    match payload {
        Value::Object(map) => validate(map),
        _ => Err(ValidationError::NotAnObject),
    }
}

fn check_presence(payload: &Map<String, Value>) -> Result<(), ValidationError> {
    match FIELDS.iter().find(|field| is_missing(payload.get(**field))) {
        Some(field) => Err(ValidationError::MissingField(*field)),
        None => Ok(()),
    }
}

/// Absent, `null` and empty text all count as not supplied.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn read_fields(payload: &Map<String, Value>) -> Result<Product, ValidationError> {
    let name = read_text(payload, "name")?;
    let description = read_text(payload, "description")?;
    let price = read_number(payload, "price")?;
    let unit = read_literal(payload, "unit", Unit::from_literal, Unit::LITERALS)?;
    let quantity = read_quantity(payload)?;
    // `normalize` overwrites whatever is supplied here.
    let status = if quantity == 0 {
        StockStatus::OutOfStock
    } else {
        read_literal(
            payload,
            "status",
            StockStatus::from_literal,
            StockStatus::LITERALS,
        )?
    };

    Ok(Product {
        name,
        description,
        price,
        unit,
        quantity,
        status,
    })
}

fn read_text(
    payload: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match payload.get(field) {
        Some(Value::String(s)) if s.contains('\0') => {
            Err(ValidationError::InvalidCharacter { field })
        }
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ValidationError::InvalidType {
            field,
            expected: "string",
        }),
    }
}

fn read_number(
    payload: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, ValidationError> {
    payload
        .get(field)
        .and_then(Value::as_f64)
        .ok_or(ValidationError::InvalidType {
            field,
            expected: "number",
        })
}

fn read_literal<T>(
    payload: &Map<String, Value>,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
    allowed: &'static [&'static str],
) -> Result<T, ValidationError> {
    let value = payload.get(field).unwrap_or(&Value::Null);
    value
        .as_str()
        .and_then(parse)
        .ok_or_else(|| ValidationError::InvalidEnum {
            field,
            value: match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
            allowed,
        })
}

/// Whole numbers are accepted even when written with a fraction part of
/// zero (`3.0`). Anything else, including numeric strings, is rejected.
/// Whole numbers past `i64::MAX` do not fit the stored column and are
/// reported as out of range.
fn read_quantity(payload: &Map<String, Value>) -> Result<i64, ValidationError> {
    let value = payload.get("quantity").unwrap_or(&Value::Null);
    let invalid = || ValidationError::InvalidQuantity(value.clone());

    let Value::Number(number) = value else {
        return Err(invalid());
    };
    if let Some(quantity) = number.as_i64() {
        return Ok(quantity);
    }
    if number.is_u64() {
        return Err(ValidationError::QuantityOutOfRange(value.clone()));
    }
    match number.as_f64() {
        Some(q) if q.fract() == 0.0 && q >= i64::MIN as f64 && q < i64::MAX as f64 => {
            Ok(q as i64)
        }
        Some(q) if q.fract() == 0.0 && q >= i64::MAX as f64 => {
            Err(ValidationError::QuantityOutOfRange(value.clone()))
        }
        _ => Err(invalid()),
    }
}

fn check_bounds(product: &Product) -> Result<(), ValidationError> {
    let Err(errors) = product.validate() else {
        return Ok(());
    };
    let failed = errors.field_errors();

    if failed.contains_key("name") {
        return Err(ValidationError::InvalidLength {
            field: "name",
            min: NAME_MIN_LEN,
            max: NAME_MAX_LEN,
            actual: product.name.chars().count(),
        });
    }
    if failed.contains_key("price") {
        return Err(ValidationError::InvalidRange {
            field: "price",
            value: product.price,
        });
    }
    if failed.contains_key("quantity") {
        return Err(ValidationError::InvalidQuantity(Value::from(product.quantity)));
    }
    Ok(())
}
