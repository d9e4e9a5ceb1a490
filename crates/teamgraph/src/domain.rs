//! Domain types for roster data.
//!
//! Raw input rows are [`RosterRecord`]s. Valid rows become co-membership
//! entries keyed by [`TeamYear`] plus [`Player`] attributes keyed by
//! [`PlayerId`].

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Unique identifier for a player.
///
/// Ordering is plain string ordering; graph traversal relies on it to visit
/// neighbours deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A (team, season) pair. Everyone listed under the same key were teammates.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamYear {
    /// Team code, e.g. `BOS`
    pub team: String,
    /// Season year
    pub year: i32,
}

impl TeamYear {
    /// Create a new key
    pub fn new(team: impl Into<String>, year: i32) -> Self {
        Self {
            team: team.into(),
            year,
        }
    }
}

impl fmt::Display for TeamYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.team, self.year)
    }
}

/// One raw roster row as it arrives from the input file.
///
/// Every field is optional here; [`crate::roster::RosterIndex`] decides
/// which rows are usable. Column names of the source season tables
/// (`ID`, `Tm`, `Year`, `Player`, `No.`) are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRecord {
    /// Player identifier
    #[serde(default, alias = "ID", alias = "id")]
    pub player_id: Option<String>,

    /// Team code
    #[serde(default, alias = "Tm", alias = "team_code")]
    pub team: Option<String>,

    /// Season year
    #[serde(
        default,
        alias = "Year",
        deserialize_with = "de_lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<i32>,

    /// Display name
    #[serde(default, alias = "Player", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Jersey number
    #[serde(
        default,
        alias = "No.",
        alias = "Number",
        deserialize_with = "de_lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<i64>,
}

impl RosterRecord {
    /// Build a complete record; convenient in tests and for callers that
    /// already hold parsed rows.
    pub fn new(player_id: impl Into<String>, team: impl Into<String>, year: i32) -> Self {
        Self {
            player_id: Some(player_id.into()),
            team: Some(team.into()),
            year: Some(year),
            name: None,
            number: None,
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a jersey number.
    #[must_use]
    pub fn with_number(mut self, number: i64) -> Self {
        self.number = Some(number);
        self
    }
}

/// Display attributes of a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player identifier
    pub id: PlayerId,

    /// Display name, if any row supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Jersey number, if any row supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
}

impl Player {
    /// The name if known, otherwise the ID.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }
}

/// Accepts `23`, `"23"`, `" 23 "`, `null`, or `""` for an optional integer.
fn de_lenient_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + std::str::FromStr,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Int(n)) => T::try_from(n)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("integer {n} out of range"))),
        Some(Raw::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<T>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid integer: {s:?}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accepts_source_column_names() {
        let record: RosterRecord = serde_json::from_str(
            r#"{"ID":"birdla01","Tm":"BOS","Year":1986,"Player":"Larry Bird","No.":"33"}"#,
        )
        .unwrap();

        assert_eq!(record.player_id.as_deref(), Some("birdla01"));
        assert_eq!(record.team.as_deref(), Some("BOS"));
        assert_eq!(record.year, Some(1986));
        assert_eq!(record.name.as_deref(), Some("Larry Bird"));
        assert_eq!(record.number, Some(33));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let record: RosterRecord = serde_json::from_str(r#"{"player_id":"a"}"#).unwrap();
        assert_eq!(record.team, None);
        assert_eq!(record.year, None);
        assert_eq!(record.number, None);
    }

    #[test]
    fn blank_number_is_none() {
        let record: RosterRecord =
            serde_json::from_str(r#"{"player_id":"a","team":"X","year":2000,"number":" "}"#)
                .unwrap();
        assert_eq!(record.number, None);
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        let result: Result<RosterRecord, _> =
            serde_json::from_str(r#"{"player_id":"a","team":"X","year":"soon"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn team_year_display() {
        assert_eq!(TeamYear::new("LAL", 2001).to_string(), "LAL-2001");
    }
}
