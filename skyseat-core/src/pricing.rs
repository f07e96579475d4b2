//! Fare computation: seat base price plus the excess-luggage surcharge.

use crate::Amount;

/// Checked luggage allowance included in every fare.
pub const FREE_LUGGAGE_KG: u32 = 20;

/// Charge per kilogram above [`FREE_LUGGAGE_KG`].
pub const SURCHARGE_PER_KG: Amount = 10.0;

/// Parse a luggage weight typed by the passenger.
///
/// Accepts a leading integer (optionally signed, surrounding whitespace
/// ignored, trailing text such as `"kg"` ignored). Anything that does not
/// start with a number, and any negative number, counts as zero.
pub fn parse_luggage_kg(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 || negative {
        return 0;
    }
    // Digit runs too long for u32 saturate instead of wrapping to zero.
    rest[..digits_len].parse::<u32>().unwrap_or(u32::MAX)
}

/// Surcharge for the given luggage weight.
pub fn luggage_surcharge(luggage_kg: u32) -> Amount {
    Amount::from(luggage_kg.saturating_sub(FREE_LUGGAGE_KG)) * SURCHARGE_PER_KG
}

/// Total fare for a seat with the given base price and luggage weight.
pub fn total_price(base_price: Amount, luggage_kg: u32) -> Amount {
    base_price + luggage_surcharge(luggage_kg)
}
