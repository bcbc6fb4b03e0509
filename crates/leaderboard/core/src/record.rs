//! Player record value type.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

use crate::error::MalformedRecord;
use crate::money::Money;

/// Number of days after which a game session is complete.
pub const MAX_DAYS: u32 = 10;

/// Opaque, non-empty key identifying a player session.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Blank (empty or whitespace-only) identities are rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, MalformedRecord> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(MalformedRecord::MissingIdentity);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identity {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One player's progress at a point in time.
///
/// Records are replaced wholesale on update; there is no partial merge, so
/// every field is set at construction and only read afterwards. Serializes
/// back to the wire shape (`uuid` key, money as a two-digit string).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(rename = "uuid")]
    identity: Identity,
    player_name: String,
    current_day: u32,
    elves_remaining: u32,
    money_made: Money,
}

impl Record {
    /// Creates a record with empty name and zeroed counters.
    pub fn new(identity: Identity, money_made: Money) -> Self {
        Self {
            identity,
            player_name: String::new(),
            current_day: 0,
            elves_remaining: 0,
            money_made,
        }
    }

    pub fn with_player_name(mut self, player_name: impl Into<String>) -> Self {
        self.player_name = player_name.into();
        self
    }

    pub fn with_current_day(mut self, current_day: u32) -> Self {
        self.current_day = current_day;
        self
    }

    pub fn with_elves_remaining(mut self, elves_remaining: u32) -> Self {
        self.elves_remaining = elves_remaining;
        self
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    pub fn elves_remaining(&self) -> u32 {
        self.elves_remaining
    }

    pub fn money_made(&self) -> Money {
        self.money_made
    }

    /// Whether the session has played all of its days.
    pub fn is_complete(&self) -> bool {
        self.current_day >= MAX_DAYS
    }
}
