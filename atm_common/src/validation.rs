//! Parsing of user-typed tokens
//!
//! Each function returns `None` when the token is not a number of the
//! expected kind, so callers decide what a format error means at their stage.

use rust_decimal::Decimal;
use std::str::FromStr;

/// **Parses an integer answer (PIN, menu choice)**
pub fn parse_int(token: &str) -> Option<i64> {
    token.trim().parse::<i64>().ok()
}

/// **Parses a decimal answer (balance, amount)**
///
/// Accepts plain and scientific notation, e.g. "1500", "1500.75", "1.5e3".
pub fn parse_decimal(token: &str) -> Option<Decimal> {
    let token = token.trim();
    Decimal::from_str(token)
        .or_else(|_| Decimal::from_scientific(token))
        .ok()
}

/// **Validates an opening balance**
///
/// Checks for:
/// - A non-numeric token;
/// - A negative value.
pub fn parse_balance(token: &str) -> Option<Decimal> {
    parse_decimal(token).filter(|balance| !balance.is_sign_negative() || balance.is_zero())
}
