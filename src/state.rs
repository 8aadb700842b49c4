//! The in-memory application state
//!
//! Every slot has a single mutation entry point, so that every place that changes the state is easy to find.

use crate::party::Party;
use crate::guest::{Guest, Rsvp};
use crate::form::PartyForm;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    all_parties: Vec<Party>,
    /// Fetched on its own, this is not the same value as its entry in `all_parties`
    current_party: Option<Party>,
    all_rsvps: Vec<Rsvp>,
    all_guests: Vec<Guest>,

    form: PartyForm,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all_parties(&self) -> &[Party] { &self.all_parties }
    pub fn current_party(&self) -> Option<&Party> { self.current_party.as_ref() }
    pub fn all_rsvps(&self) -> &[Rsvp] { &self.all_rsvps }
    pub fn all_guests(&self) -> &[Guest] { &self.all_guests }
    pub fn form(&self) -> &PartyForm { &self.form }

    pub fn set_parties(&mut self, parties: Vec<Party>) {
        log::trace!("State: {} parties", parties.len());
        self.all_parties = parties;
    }

    pub fn set_current_party(&mut self, party: Party) {
        log::trace!("State: party #{} is selected", party.id());
        self.current_party = Some(party);
    }

    pub fn clear_selection(&mut self) {
        log::trace!("State: no party is selected");
        self.current_party = None;
    }

    pub fn set_rsvps(&mut self, rsvps: Vec<Rsvp>) {
        log::trace!("State: {} RSVPs", rsvps.len());
        self.all_rsvps = rsvps;
    }

    pub fn set_guests(&mut self, guests: Vec<Guest>) {
        log::trace!("State: {} guests", guests.len());
        self.all_guests = guests;
    }

    pub fn set_form(&mut self, form: PartyForm) {
        self.form = form;
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    /// Whether a party is the selected one
    pub fn is_selected(&self, party: &Party) -> bool {
        self.current_party.as_ref().map(|current| current.id()) == Some(party.id())
    }

    /// The guests that RSVP'd to the selected party, in the order of `all_guests`
    ///
    /// This is empty when no party is selected.
    pub fn attending_guests(&self) -> Vec<&Guest> {
        let current = match &self.current_party {
            None => return Vec::new(),
            Some(party) => party,
        };

        self.all_guests
            .iter()
            .filter(|guest| {
                self.all_rsvps
                    .iter()
                    .any(|rsvp| rsvp.guest_id() == guest.id() && rsvp.event_id() == current.id())
            })
            .collect()
    }
}
