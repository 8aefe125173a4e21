//! Fixed-point hour and cost values with a scale of two.
//!
//! Values are kept as whole hundredths so that "12.5" entered at a prompt is
//! stored and read back as "12.50" regardless of how the column is declared
//! in the store.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Number of fractional digits kept by [`Hours`].
pub const SCALE: u32 = 2;

const UNIT: i64 = 10_i64.pow(SCALE);

/// Largest magnitude, in hundredths, that fits a `DECIMAL(7,2)` column (`99999.99`).
pub const MAX_HUNDREDTHS: i64 = 9_999_999;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoursParseError {
    #[error("empty value")]
    Empty,
    #[error("unexpected character '{0}'")]
    InvalidCharacter(char),
    #[error("more than two fractional digits")]
    TooPrecise,
    #[error("value exceeds 99999.99")]
    OutOfRange,
}

/// Decimal quantity with exactly two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hours {
    hundredths: i64,
}

impl Hours {
    /// Wraps a raw count of hundredths without a range check.
    ///
    /// Values outside `-99999.99..=99999.99` are refused when written to or
    /// read from the store; use [`Hours::checked_from_hundredths`] to catch
    /// them earlier.
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self { hundredths }
    }

    /// Builds a value only if it fits `DECIMAL(7,2)`.
    ///
    /// # Arguments
    ///
    /// * `hundredths` - The quantity multiplied by 100
    ///
    /// # Returns
    ///
    /// `None` when the magnitude exceeds [`MAX_HUNDREDTHS`].
    pub const fn checked_from_hundredths(hundredths: i64) -> Option<Self> {
        if hundredths > MAX_HUNDREDTHS || hundredths < -MAX_HUNDREDTHS {
            None
        } else {
            Some(Self { hundredths })
        }
    }

    pub const fn hundredths(&self) -> i64 {
        self.hundredths
    }

    fn from_f64(value: f64) -> Option<Self> {
        let scaled = (value * UNIT as f64).round();
        if scaled.is_finite() && scaled.abs() <= MAX_HUNDREDTHS as f64 {
            Some(Self::from_hundredths(scaled as i64))
        } else {
            None
        }
    }
}

impl FromStr for Hours {
    type Err = HoursParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (whole, fraction) = match body.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (body, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(HoursParseError::Empty);
        }
        if let Some(c) = whole.chars().chain(fraction.chars()).find(|c| !c.is_ascii_digit()) {
            return Err(HoursParseError::InvalidCharacter(c));
        }
        if fraction.len() > SCALE as usize {
            return Err(HoursParseError::TooPrecise);
        }

        let mut hundredths: i64 = 0;
        for digit in whole.bytes() {
            hundredths = hundredths
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(digit - b'0')))
                .filter(|v| *v <= MAX_HUNDREDTHS / UNIT)
                .ok_or(HoursParseError::OutOfRange)?;
        }
        let mut fraction_value: i64 = 0;
        for position in 0..SCALE as usize {
            let digit = fraction.as_bytes().get(position).map_or(0, |d| i64::from(d - b'0'));
            fraction_value = fraction_value * 10 + digit;
        }
        hundredths = hundredths * UNIT + fraction_value;

        Self::checked_from_hundredths(if negative { -hundredths } else { hundredths }).ok_or(HoursParseError::OutOfRange)
    }
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.hundredths < 0 { "-" } else { "" };
        let abs = self.hundredths.unsigned_abs();
        let unit = UNIT as u64;
        write!(f, "{}{}.{:02}", sign, abs / unit, abs % unit)
    }
}

impl ToSql for Hours {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        if Self::checked_from_hundredths(self.hundredths).is_none() {
            return Err(rusqlite::Error::ToSqlConversionFailure(Box::new(HoursParseError::OutOfRange)));
        }
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for Hours {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(i) => i
                .checked_mul(UNIT)
                .and_then(Self::checked_from_hundredths)
                .ok_or(FromSqlError::OutOfRange(i)),
            ValueRef::Real(r) => Self::from_f64(r).ok_or_else(|| FromSqlError::Other(Box::new(HoursParseError::OutOfRange))),
            ValueRef::Text(t) => {
                let text = std::str::from_utf8(t).map_err(|e| FromSqlError::Other(Box::new(e)))?;
                text.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
            }
            _ => Err(FromSqlError::InvalidType),
        }
    }
}
