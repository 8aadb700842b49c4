//! Guests and their RSVPs

use serde::{Deserialize, Serialize};

use crate::party::PartyId;

pub type GuestId = i64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    id: GuestId,
    name: String,
}

impl Guest {
    pub fn new(id: GuestId, name: String) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> GuestId { self.id }
    pub fn name(&self) -> &str { &self.name }
}

/// Tells that a guest attends a party
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    guest_id: GuestId,
    event_id: PartyId,
}

impl Rsvp {
    pub fn new(guest_id: GuestId, event_id: PartyId) -> Self {
        Self { id: None, guest_id, event_id }
    }

    pub fn id(&self) -> Option<i64> { self.id }
    pub fn guest_id(&self) -> GuestId { self.guest_id }
    pub fn event_id(&self) -> PartyId { self.event_id }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsvp_wire_format() {
        let rsvp: Rsvp = serde_json::from_str(r#"{"id": 9, "guestId": 4, "eventId": 2}"#).unwrap();
        assert_eq!(rsvp.id(), Some(9));
        assert_eq!(rsvp.guest_id(), 4);
        assert_eq!(rsvp.event_id(), 2);

        let json = serde_json::to_value(&Rsvp::new(1, 5)).unwrap();
        assert_eq!(json, serde_json::json!({"guestId": 1, "eventId": 5}));
    }
}
