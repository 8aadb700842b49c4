//! This module ties the remote source, the application state and the UI host together
//!
//! Every successful fetch replaces a slot of the state and re-renders the whole page.
//! Failures never stop the application: the page keeps showing the last known good state.

use std::error::Error;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::form::PartyForm;
use crate::guest::{Guest, Rsvp};
use crate::intent::Intent;
use crate::party::{Party, PartyId};
use crate::resource::Collection;
use crate::state::AppState;
use crate::traits::{RemoteSource, Ui};

/// Whether the page is being rebuilt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPhase {
    /// The displayed page reflects the current state
    Idle,
    /// The page is being rebuilt
    Rendering,
}

impl Default for RenderPhase {
    fn default() -> Self {
        Self::Idle
    }
}

fn decode_records<T: DeserializeOwned>(records: Vec<Value>) -> Result<Vec<T>, Box<dyn Error>> {
    let mut decoded = Vec::with_capacity(records.len());
    for record in records {
        decoded.push(serde_json::from_value(record)?);
    }
    Ok(decoded)
}


/// The admin console
///
/// `remote` is usually a [`Client`](crate::client::Client), but it can be mocked in tests.
pub struct App<R, U>
where
    R: RemoteSource,
    U: Ui,
{
    remote: R,
    ui: U,
    state: AppState,

    phase: RenderPhase,
    render_count: u64,
}

impl<R, U> App<R, U>
where
    R: RemoteSource,
    U: Ui,
{
    /// Create an app with an empty state. Nothing is fetched nor rendered until [`Self::initialize`] is called
    pub fn new(remote: R, ui: U) -> Self {
        Self {
            remote, ui,
            state: AppState::new(),
            phase: RenderPhase::default(),
            render_count: 0,
        }
    }

    pub fn remote(&self) -> &R { &self.remote }
    pub fn ui(&self) -> &U { &self.ui }
    pub fn ui_mut(&mut self) -> &mut U { &mut self.ui }
    pub fn state(&self) -> &AppState { &self.state }
    pub fn phase(&self) -> RenderPhase { self.phase }
    /// How many times the page has been rendered
    pub fn render_count(&self) -> u64 { self.render_count }

    /// Load parties, RSVPs and guests (in this order), then render the page
    pub async fn initialize(&mut self) {
        log::info!("Initializing the party planner");
        self.load_parties().await;
        self.load_rsvps().await;
        self.load_guests().await;
        self.refresh_ui();
    }

    /// Rebuild the whole page from the current state
    pub fn refresh_ui(&mut self) {
        self.phase = RenderPhase::Rendering;
        let root = crate::view::render(&self.state);
        self.ui.mount(root);
        self.render_count += 1;
        self.phase = RenderPhase::Idle;
        log::trace!("Page rendered ({} renders so far)", self.render_count);
    }

    async fn fetch_list<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, Box<dyn Error>> {
        let records = self.remote.list(collection).await?;
        decode_records(records)
    }

    /// Fetch every party. Returns whether it succeeded
    pub async fn load_parties(&mut self) -> bool {
        match self.fetch_list::<Party>(Collection::Events).await {
            Err(err) => {
                log::error!("Failed to load parties: {}", err);
                self.ui.alert("Unable to load parties. Please try again later.");
                false
            },
            Ok(parties) => {
                log::debug!("Loaded {} parties", parties.len());
                self.state.set_parties(parties);
                self.refresh_ui();
                true
            },
        }
    }

    /// Fetch a party, and make it the selected one. Returns whether it succeeded
    pub async fn load_party_details(&mut self, id: PartyId) -> bool {
        let fetched: Result<Party, Box<dyn Error>> = match self.remote.get(Collection::Events, id).await {
            Err(err) => Err(err),
            Ok(record) => serde_json::from_value::<Party>(record).map_err(|err| err.into()),
        };

        match fetched {
            Err(err) => {
                log::error!("Failed to load party details for #{}: {}", id, err);
                self.ui.alert("Unable to load party details. Please try again later.");
                false
            },
            Ok(party) => {
                self.state.set_current_party(party);
                self.refresh_ui();
                true
            },
        }
    }

    /// Fetch every RSVP. Failures are only logged. Returns whether it succeeded
    pub async fn load_rsvps(&mut self) -> bool {
        match self.fetch_list::<Rsvp>(Collection::Rsvps).await {
            Err(err) => {
                log::error!("Failed to load RSVPs: {}", err);
                false
            },
            Ok(rsvps) => {
                log::debug!("Loaded {} RSVPs", rsvps.len());
                self.state.set_rsvps(rsvps);
                self.refresh_ui();
                true
            },
        }
    }

    /// Fetch every guest. Failures are only logged. Returns whether it succeeded
    pub async fn load_guests(&mut self) -> bool {
        match self.fetch_list::<Guest>(Collection::Guests).await {
            Err(err) => {
                log::error!("Failed to load guests: {}", err);
                false
            },
            Ok(guests) => {
                log::debug!("Loaded {} guests", guests.len());
                self.state.set_guests(guests);
                self.refresh_ui();
                true
            },
        }
    }

    /// Delete the selected party, once the user has confirmed it
    pub async fn delete_current_party(&mut self) {
        let (id, name) = match self.state.current_party() {
            None => return,
            Some(party) => (party.id(), party.name().to_string()),
        };

        if self.ui.confirm(&format!("Delete party \"{}\"?", name)) == false {
            log::debug!("Deletion of party #{} cancelled", id);
            return;
        }

        if let Err(err) = self.remote.delete(Collection::Events, id).await {
            log::error!("Error deleting party #{}: {}", id, err);
            self.ui.alert("Could not delete party. Please try again.");
            return;
        }

        log::info!("Deleted party #{}", id);
        self.state.clear_selection();
        self.load_parties().await;
        self.refresh_ui();
    }

    /// Submit the creation form
    pub async fn create_party(&mut self, form: PartyForm) {
        self.state.set_form(form);

        let new_party = match self.state.form().validate() {
            Err(err) => {
                log::debug!("Rejected party form: {}", err);
                self.ui.alert(&err.to_string());
                return;
            },
            Ok(new_party) => new_party,
        };

        let sent: Result<(), Box<dyn Error>> = match serde_json::to_value(&new_party) {
            Err(err) => Err(err.into()),
            Ok(payload) => self.remote.create(Collection::Events, payload).await,
        };
        if let Err(err) = sent {
            log::error!("Error adding party {:?}: {}", new_party.name, err);
            self.ui.alert("Could not add party. Please try again.");
            return;
        }

        log::info!("Added party {:?}", new_party.name);
        self.load_parties().await;
        self.state.clear_selection();
        self.state.reset_form();
        self.refresh_ui();
    }

    /// Handle anything the user asked for
    pub async fn dispatch(&mut self, intent: Intent) {
        log::debug!("Dispatching: {}", intent);
        match intent {
            Intent::SelectParty(id) => { self.load_party_details(id).await; },
            Intent::DeleteParty => self.delete_current_party().await,
            Intent::CreateParty(form) => self.create_party(form).await,
        }
    }
}
