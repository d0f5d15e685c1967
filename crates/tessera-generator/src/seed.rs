use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Seed for a reproducible shuffle.
///
/// Formatted and parsed as 64 lowercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use tessera_generator::ShuffleSeed;
///
/// let text = format!("{}ff", "00".repeat(31));
/// let seed: ShuffleSeed = text.parse().unwrap();
/// assert_eq!(seed.as_bytes()[31], 0xff);
/// assert!(seed.to_string().ends_with("ff"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShuffleSeed([u8; ShuffleSeed::LEN]);

impl ShuffleSeed {
    /// Number of bytes in a seed.
    pub const LEN: usize = 32;

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl Display for ShuffleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`ShuffleSeed`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input does not have exactly 64 hex digits.
    #[display("seed must be 64 hex digits, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// The input contains a character that is not a hex digit.
    #[display("invalid hex digit {_0:?} in seed")]
    InvalidDigit(#[error(not(source))] char),
}

impl FromStr for ShuffleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != Self::LEN * 2 {
            return Err(ParseSeedError::InvalidLength(len));
        }

        let mut bytes = [0; Self::LEN];
        let mut digits = s.chars().map(|ch| {
            ch.to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(ParseSeedError::InvalidDigit(ch))
        });
        for byte in &mut bytes {
            let (Some(high), Some(low)) = (digits.next(), digits.next()) else {
                unreachable!("length checked above");
            };
            *byte = (high? << 4) | low?;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed = ShuffleSeed::from_str(SEED).unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), SEED);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let seed = ShuffleSeed::from_str(&SEED.to_uppercase()).unwrap();
        assert_eq!(seed.to_string(), SEED);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            ShuffleSeed::from_str("abcd"),
            Err(ParseSeedError::InvalidLength(4))
        );
        assert_eq!(
            ShuffleSeed::from_str(""),
            Err(ParseSeedError::InvalidLength(0))
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let input = format!("{}zz", &SEED[..62]);
        assert_eq!(
            ShuffleSeed::from_str(&input),
            Err(ParseSeedError::InvalidDigit('z'))
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        // 256-bit collisions are not a practical concern.
        assert_ne!(ShuffleSeed::random(), ShuffleSeed::random());
    }
}
