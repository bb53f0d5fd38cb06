use crate::error::NexradFetchErr;
use std::{fmt::Display, str::FromStr};

/// A 4-letter radar station identifier, e.g. KLOT or KDVN.
///
/// Identifiers are accepted in any case and normalized to uppercase, since the
/// remote store keys use the uppercase form as a path segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StationId([u8; 4]);

impl StationId {
    pub fn as_str(&self) -> &str {
        // Only constructed from validated ASCII.
        std::str::from_utf8(&self.0).unwrap_or("????")
    }
}

impl FromStr for StationId {
    type Err = NexradFetchErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.len() != 4 || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(NexradFetchErr::InvalidStationId(s.to_owned()));
        }

        let mut id = [0u8; 4];
        for (i, c) in s.bytes().enumerate() {
            id[i] = c.to_ascii_uppercase();
        }

        Ok(StationId(id))
    }
}

impl Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_uppercase() {
        let id: StationId = "klot".parse().unwrap();
        assert_eq!(id.as_str(), "KLOT");

        let id: StationId = "Kfws".parse().unwrap();
        assert_eq!(id.as_str(), "KFWS");
    }

    #[test]
    fn rejects_bad_identifiers() {
        assert!("KLO".parse::<StationId>().is_err());
        assert!("KLOTT".parse::<StationId>().is_err());
        assert!("KL T".parse::<StationId>().is_err());
        assert!("".parse::<StationId>().is_err());
    }
}
