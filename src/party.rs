//! Parties (called "events" by the remote service)

use serde::{Deserialize, Serialize};

pub type PartyId = i64;

/// A party, as stored by the remote service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Party {
    id: PartyId,
    name: String,
    description: String,
    /// ISO-8601 timestamp
    date: String,
    location: String,
}

impl Party {
    pub fn new(id: PartyId, name: String, description: String, date: String, location: String) -> Self {
        Self { id, name, description, date, location }
    }

    pub fn id(&self) -> PartyId { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn description(&self) -> &str { &self.description }
    pub fn date(&self) -> &str { &self.date }
    pub fn location(&self) -> &str { &self.location }

    /// The date part of the ISO-8601 timestamp (e.g. `2025-06-01`)
    pub fn calendar_date(&self) -> &str {
        match self.date.char_indices().nth(10) {
            Some((end, _)) => &self.date[..end],
            None => &self.date,
        }
    }
}

/// The payload sent to create a party
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewParty {
    pub name: String,
    pub description: String,
    /// ISO-8601 timestamp
    pub date: String,
    pub location: String,
}
