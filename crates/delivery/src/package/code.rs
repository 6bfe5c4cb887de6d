//! Package tracking code.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::PackageError;

/// Crockford base32 alphabet (no I, L, O, U).
const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

const CODE_LEN: usize = 26;
const TIME_LEN: usize = 10;

/// Largest timestamp the 10-character time field can hold (32^10 - 1 ms).
const MAX_TIME: u64 = (1 << 50) - 1;

/// A package tracking code laid out like a ULID.
///
/// The first 10 characters encode the creation time in milliseconds since
/// the Unix epoch, the remaining 16 are random. Codes are always stored in
/// uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageCode(String);

impl PackageCode {
    /// Generates a fresh code stamped with the current time.
    pub fn generate() -> Self {
        Self::generate_at(Utc::now())
    }

    /// Generates a code stamped with `at`.
    ///
    /// Times before the epoch are clamped to zero. Times beyond the largest
    /// encodable timestamp (32^10 - 1 ms, around the year 37600) are clamped
    /// to it.
    pub fn generate_at(at: DateTime<Utc>) -> Self {
        let mut millis = (at.timestamp_millis().max(0) as u64).min(MAX_TIME);
        let mut code = [b'0'; CODE_LEN];

        for slot in code[..TIME_LEN].iter_mut().rev() {
            *slot = ALPHABET[(millis % 32) as usize];
            millis /= 32;
        }

        let mut rng = rand::thread_rng();
        for slot in code[TIME_LEN..].iter_mut() {
            *slot = ALPHABET[rng.gen_range(0..ALPHABET.len())];
        }

        Self(code.iter().map(|b| *b as char).collect())
    }

    /// Validates and normalizes an existing code.
    pub fn create(value: &str) -> Result<Self, PackageError> {
        let normalized = value.to_ascii_uppercase();

        if !Self::is_well_formed(&normalized) {
            return Err(PackageError::InvalidPackageCode {
                code: value.to_string(),
            });
        }

        let millis = decode_time(&normalized);
        if millis > Utc::now().timestamp_millis().max(0) as u64 {
            return Err(PackageError::InvalidPackageCode {
                code: value.to_string(),
            });
        }

        Ok(Self(normalized))
    }

    /// Returns the time encoded in the code.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        i64::try_from(decode_time(&self.0))
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_well_formed(value: &str) -> bool {
        let bytes = value.as_bytes();

        bytes.len() == CODE_LEN
            && (b'0'..=b'7').contains(&bytes[0])
            && bytes.iter().all(|b| ALPHABET.contains(b))
    }
}

/// Decodes the timestamp prefix. Assumes a well-formed, uppercase code.
fn decode_time(code: &str) -> u64 {
    code.as_bytes()[..TIME_LEN].iter().fold(0u64, |acc, b| {
        let digit = ALPHABET.iter().position(|c| c == b).unwrap_or(0) as u64;
        acc * 32 + digit
    })
}

impl fmt::Display for PackageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PackageCode {
    type Err = PackageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create(s)
    }
}

impl TryFrom<String> for PackageCode {
    type Error = PackageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value)
    }
}

impl From<PackageCode> for String {
    fn from(code: PackageCode) -> Self {
        code.0
    }
}

impl AsRef<str> for PackageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
