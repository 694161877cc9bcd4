mod core;

pub use crate::core::decimal::math::CalculationError;
pub use crate::core::decimal::text::{parse_decimal, ParseDecimalError, ParseResult};
pub use crate::core::decimal::{Decimal, DecodeError, RoundingMode};
pub use crate::core::scan::is_whitespace;
pub use crate::core::span::ByteSpan;
pub use crate::core::Serialize;

pub type Result<T> = std::result::Result<T, CalculationError>;
