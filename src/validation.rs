// src/validation.rs
// String-level validation for interactive input

use crate::engine::{MAX_OPERAND, MIN_OPERAND};
use crate::error::{CalcError, Result};

/// Parse a number typed by the user, enforcing the engine's safe range.
pub fn parse_number(input: &str) -> Result<f64> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(CalcError::validation("number", trimmed, "cannot be empty"));
    }

    let num: f64 = trimmed
        .parse()
        .map_err(|_| CalcError::validation("number", trimmed, "not a valid number"))?;

    if num > MAX_OPERAND || num < MIN_OPERAND {
        return Err(CalcError::validation(
            "number",
            trimmed,
            "value out of allowed range",
        ));
    }

    Ok(num)
}

/// Check a precision value for result formatting.
pub fn validate_precision(precision: usize) -> Result<()> {
    if precision > 15 {
        return Err(CalcError::validation(
            "precision",
            precision.to_string(),
            "must be between 0 and 15",
        ));
    }
    Ok(())
}

/// Interpret a yes/no answer, case-insensitively.
pub fn parse_yes_no(input: &str) -> Result<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" | "1" | "true" => Ok(true),
        "n" | "no" | "0" | "false" => Ok(false),
        _ => Err(CalcError::validation(
            "yes_no",
            input,
            "must be yes/no, y/n, or true/false",
        )),
    }
}
