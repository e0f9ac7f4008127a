use crate::domain::model::Number;
use crate::utils::error::Result;
use crate::utils::validation::validate_numeric;

/// Adds two operands of any JSON type.
///
/// Both operands are checked before anything is computed. If either one is
/// not a number the call fails with [`SvcError::InvalidInput`], whose message
/// is `"Invalid input"`.
///
/// [`SvcError::InvalidInput`]: crate::utils::error::SvcError::InvalidInput
pub fn add(a: &serde_json::Value, b: &serde_json::Value) -> Result<Number> {
    let a = validate_numeric("a", a)?;
    let b = validate_numeric("b", b)?;
    Ok(add_numbers(a, b))
}

/// Typed variant of [`add`]; operands are already known to be numeric.
pub fn add_numbers(a: Number, b: Number) -> Number {
    a + b
}
