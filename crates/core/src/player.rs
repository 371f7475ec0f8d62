use serde::de::Visitor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stable identifier of a player, rendered as a hyphenated uuid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u128);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hex = format!("{:032x}", self.0);
        hex.insert(8, '-');
        hex.insert(13, '-');
        hex.insert(18, '-');
        hex.insert(23, '-');
        f.write_str(&hex)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{0}' is not a hyphenated uuid")]
pub struct InvalidPlayerId(String);

impl FromStr for PlayerId {
    type Err = InvalidPlayerId;

    /// Only the 8-4-4-4-12 hex form is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidPlayerId(s.to_string());
        let groups: Vec<&str> = s.split('-').collect();
        let well_formed = groups.len() == 5
            && groups
                .iter()
                .zip([8, 4, 4, 4, 12])
                .all(|(group, len)| {
                    group.len() == len && group.bytes().all(|b| b.is_ascii_hexdigit())
                });
        if !well_formed {
            return Err(invalid());
        }
        u128::from_str_radix(&groups.concat(), 16)
            .map(PlayerId)
            .map_err(|_| invalid())
    }
}

impl Serialize for PlayerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct PlayerIdVisitor;

impl<'de> Visitor<'de> for PlayerIdVisitor {
    type Value = PlayerId;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a hyphenated uuid string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(PlayerIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_display() {
        let id = PlayerId(0x069a79f444e94726a5befca90e38aaf5);
        assert_eq!(id.to_string(), "069a79f4-44e9-4726-a5be-fca90e38aaf5");
        assert_eq!("069a79f4-44e9-4726-a5be-fca90e38aaf5".parse::<PlayerId>(), Ok(id));
    }

    #[test]
    fn rejects_malformed_uuids() {
        for input in [
            "abc",
            "+1",
            "1-2",
            "",
            "069a79f444e94726a5befca90e38aaf5",
            "069a79f4-44e9-4726-a5be-fca90e38aaf",
            "069a79f4-44e9-4726-a5be-fca90e38aafg",
            "+69a79f4-44e9-4726-a5be-fca90e38aaf5",
        ] {
            assert!(input.parse::<PlayerId>().is_err(), "{input} should not parse");
        }
    }
}
