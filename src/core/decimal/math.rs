//! Word-array arithmetic over the mantissa.
//!
//! The mantissa is treated as an unsigned multi-word integer in base 2^16.
//! Each operation propagates its carry or borrow across words and signals
//! overflow instead of wrapping, and none of them touches the exponent:
//! scale tracking belongs to the caller.

use super::{Decimal, MANTISSA_WORDS};
use std::fmt::{self, Display};

/// Error vocabulary of the arithmetic surface.
///
/// Only `Overflow`, `Underflow` and `DivideByZero` are produced by the
/// short-scalar primitives; the remaining members belong to the legacy
/// vocabulary shared with the wider arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    NoError,
    LossOfPrecision,
    Overflow,
    Underflow,
    DivideByZero,
}

impl Display for CalculationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::NoError => "no error",
            Self::LossOfPrecision => "loss of precision",
            Self::Overflow => "decimal overflow",
            Self::Underflow => "decimal underflow",
            Self::DivideByZero => "division by zero",
        };

        write!(f, "{message}")
    }
}

impl std::error::Error for CalculationError {}

impl Decimal {
    /// Multiplies the mantissa by `multiplicand`, carrying across words.
    /// Signals `Overflow` when the product would require a ninth word.
    pub fn multiply_by_short(&self, multiplicand: u16) -> crate::Result<Decimal> {
        let mut result = *self;
        result.set_compact(false);

        let length = result.active_words();
        let mut carry = 0u32;

        for index in 0..length {
            let product =
                u32::from(result.mantissa[index]) * u32::from(multiplicand) + carry;
            result.mantissa[index] = product as u16;
            carry = product >> 16;
        }

        if carry != 0 {
            if length == MANTISSA_WORDS {
                return Err(CalculationError::Overflow);
            }
            result.mantissa[length] = carry as u16;
            result.set_length(length as u32 + 1);
        }

        Ok(result)
    }

    /// Adds `addend` to the least significant word, propagating the carry.
    /// Signals `Overflow` on a carry out of the top word.
    pub fn add_short(&self, addend: u16) -> crate::Result<Decimal> {
        let mut result = *self;
        result.set_compact(false);

        let length = result.active_words();
        let mut carry = u32::from(addend);
        let mut index = 0;

        while carry != 0 && index < length {
            let sum = u32::from(result.mantissa[index]) + carry;
            result.mantissa[index] = sum as u16;
            carry = sum >> 16;
            index += 1;
        }

        if carry != 0 {
            if length == MANTISSA_WORDS {
                return Err(CalculationError::Overflow);
            }
            result.mantissa[length] = carry as u16;
            result.set_length(length as u32 + 1);
        }

        Ok(result)
    }

    /// Divides the mantissa by `divisor` with base-2^16 long division from
    /// the most significant word, returning the quotient and a remainder
    /// always within `[0, divisor)`. Signals `DivideByZero` for a zero
    /// divisor.
    pub fn divide_by_short(&self, divisor: u16) -> crate::Result<(Decimal, u16)> {
        if divisor == 0 {
            return Err(CalculationError::DivideByZero);
        }

        let mut quotient = *self;
        quotient.set_compact(false);

        let mut length = quotient.active_words();
        let mut remainder = 0u32;

        for index in (0..length).rev() {
            let part = (remainder << 16) | u32::from(quotient.mantissa[index]);
            quotient.mantissa[index] = (part / u32::from(divisor)) as u16;
            remainder = part % u32::from(divisor);
        }

        while length > 0 && quotient.mantissa[length - 1] == 0 {
            length -= 1;
        }
        quotient.set_length(length as u32);

        Ok((quotient, remainder as u16))
    }
}
