//! Point-in-time selector for historical reads.
//!
//! WiredTiger read timestamps pack a `(seconds, increment)` pair into a
//! 64-bit value as `seconds << 32 | increment`. Operators may type either
//! the raw integer or the pair; an absent timestamp means "read latest".

use std::fmt;

use crate::WtError;

/// A packed `(seconds, increment)` read timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub fn from_parts(seconds: u32, increment: u32) -> Self {
        Timestamp(((seconds as u64) << 32) | increment as u64)
    }

    pub fn seconds(&self) -> u32 {
        (self.0 >> 32) as u32
    }

    pub fn increment(&self) -> u32 {
        (self.0 & 0xffff_ffff) as u32
    }

    /// Raw value as passed to `wt dump -t`.
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// Parse operator input into an optional timestamp.
    ///
    /// Empty input selects the latest data (`Ok(None)`). A bare decimal
    /// integer is taken as the raw packed value; a `"seconds, increment"`
    /// pair is packed. Anything else is an [`WtError::Argument`], and the
    /// caller should leave its current timestamp unchanged.
    pub fn parse(input: &str) -> Result<Option<Timestamp>, WtError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if let Ok(raw) = input.parse::<u64>() {
            return Ok(Some(Timestamp(raw)));
        }

        if let Some((secs, inc)) = input.split_once(',') {
            let secs = secs.trim().parse::<u32>();
            let inc = inc.trim().parse::<u32>();
            if let (Ok(secs), Ok(inc)) = (secs, inc) {
                return Ok(Some(Timestamp::from_parts(secs, inc)));
            }
        }

        Err(WtError::Argument(format!(
            "Unable to interpret timestamp {}",
            input
        )))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({}, {})", self.seconds(), self.increment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_raw_integer() {
        assert_eq!(Timestamp::parse("1234").unwrap(), Some(Timestamp(1234)));
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            Timestamp::parse("5, 9").unwrap(),
            Some(Timestamp((5u64 << 32) + 9))
        );
        assert_eq!(
            Timestamp::parse("5,9").unwrap(),
            Some(Timestamp((5u64 << 32) + 9))
        );
    }

    #[test]
    fn test_parse_empty_is_latest() {
        assert_eq!(Timestamp::parse("").unwrap(), None);
        assert_eq!(Timestamp::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_garbage_is_error() {
        assert!(Timestamp::parse("abc").is_err());
        assert!(Timestamp::parse("5, x").is_err());
        assert!(Timestamp::parse("-3").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Timestamp::from_parts(5, 9).to_string(),
            "Timestamp(5, 9)"
        );
        assert_eq!(Timestamp(1234).to_string(), "Timestamp(0, 1234)");
    }

    #[test]
    fn test_parts_round_trip() {
        let ts = Timestamp::from_parts(0xdead_beef, 42);
        assert_eq!(ts.seconds(), 0xdead_beef);
        assert_eq!(ts.increment(), 42);
        assert_eq!(Timestamp(ts.raw()), ts);
    }
}
