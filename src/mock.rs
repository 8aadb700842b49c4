//! In-memory stand-ins for the remote service and the UI host
//!
//! They are used by tests, and can be used to run the app without a network connection.
#![cfg(feature = "mock_remote")]

use std::collections::VecDeque;
use std::error::Error;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use minidom::Element;
use serde_json::Value;

use crate::guest::{Guest, Rsvp};
use crate::mock_behaviour::MockBehaviour;
use crate::party::{NewParty, Party};
use crate::resource::Collection;
use crate::traits::{RemoteSource, Ui};

/// A request received by a [`MockRemote`]
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    /// Path relative to the API endpoint, e.g. `/events/3`
    pub path: String,
    pub body: Option<Value>,
}

impl RecordedRequest {
    fn new(method: &'static str, path: String, body: Option<Value>) -> Self {
        Self { method, path, body }
    }
}

#[derive(Default)]
struct MockData {
    parties: Vec<Party>,
    guests: Vec<Guest>,
    rsvps: Vec<Rsvp>,
    next_id: i64,

    behaviour: MockBehaviour,
    requests: Vec<RecordedRequest>,
}

/// A remote source that stores its records in memory
#[derive(Default)]
pub struct MockRemote {
    data: Mutex<MockData>,
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parties(self, parties: Vec<Party>) -> Self {
        self.edit(|data| {
            data.next_id = data.next_id.max(parties.iter().map(|p| p.id()).max().unwrap_or(0));
            data.parties = parties;
        });
        self
    }

    pub fn with_guests(self, guests: Vec<Guest>) -> Self {
        self.edit(|data| data.guests = guests);
        self
    }

    pub fn with_rsvps(self, rsvps: Vec<Rsvp>) -> Self {
        self.edit(|data| data.rsvps = rsvps);
        self
    }

    pub fn set_behaviour(&self, behaviour: MockBehaviour) {
        self.edit(|data| data.behaviour = behaviour);
    }

    /// Let every request succeed, until [`Self::resume_failures`] is called
    pub fn suspend_failures(&self) {
        self.edit(|data| data.behaviour.suspend());
    }

    /// Apply the failures of the current [`MockBehaviour`] again
    pub fn resume_failures(&self) {
        self.edit(|data| data.behaviour.resume());
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.read(|data| data.requests.clone()).unwrap_or_default()
    }

    pub fn clear_requests(&self) {
        self.edit(|data| data.requests.clear());
    }

    /// The parties currently stored
    pub fn parties(&self) -> Vec<Party> {
        self.read(|data| data.parties.clone()).unwrap_or_default()
    }

    fn edit<F: FnOnce(&mut MockData)>(&self, f: F) {
        match self.data.lock() {
            Ok(mut data) => f(&mut data),
            Err(_) => log::warn!("Mock data lock is poisoned, ignoring an edit"),
        }
    }

    fn read<T, F: FnOnce(&MockData) -> T>(&self, f: F) -> Option<T> {
        self.data.lock().ok().map(|data| f(&data))
    }

    fn lock(&self) -> Result<MutexGuard<'_, MockData>, Box<dyn Error>> {
        self.data.lock().map_err(|_| "Mock data lock is poisoned".into())
    }
}

fn to_records<T: serde::Serialize>(items: &[T]) -> Result<Vec<Value>, Box<dyn Error>> {
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        records.push(serde_json::to_value(item)?);
    }
    Ok(records)
}

#[async_trait]
impl RemoteSource for MockRemote {
    async fn list(&self, collection: Collection) -> Result<Vec<Value>, Box<dyn Error>> {
        let mut data = self.lock()?;
        data.requests.push(RecordedRequest::new("GET", format!("/{}", collection), None));
        data.behaviour.can_list(collection)?;

        match collection {
            Collection::Events => to_records(&data.parties),
            Collection::Rsvps => to_records(&data.rsvps),
            Collection::Guests => to_records(&data.guests),
        }
    }

    async fn get(&self, collection: Collection, id: i64) -> Result<Value, Box<dyn Error>> {
        let mut data = self.lock()?;
        data.requests.push(RecordedRequest::new("GET", format!("/{}/{}", collection, id), None));
        if collection != Collection::Events {
            return Err(format!("Unexpected HTTP status code 404 (no detail route for {})", collection).into());
        }
        data.behaviour.can_get_event()?;

        match data.parties.iter().find(|p| p.id() == id) {
            None => Err(format!("Unexpected HTTP status code 404 (no party #{})", id).into()),
            Some(party) => Ok(serde_json::to_value(party)?),
        }
    }

    async fn create(&self, collection: Collection, payload: Value) -> Result<(), Box<dyn Error>> {
        let mut data = self.lock()?;
        data.requests.push(RecordedRequest::new("POST", format!("/{}", collection), Some(payload.clone())));
        if collection != Collection::Events {
            return Err(format!("Creating {} is not supported by this mock", collection).into());
        }
        data.behaviour.can_create_event()?;

        let new_party: NewParty = serde_json::from_value(payload)?;
        data.next_id += 1;
        let party = Party::new(data.next_id, new_party.name, new_party.description, new_party.date, new_party.location);
        data.parties.push(party);
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: i64) -> Result<(), Box<dyn Error>> {
        let mut data = self.lock()?;
        data.requests.push(RecordedRequest::new("DELETE", format!("/{}/{}", collection, id), None));
        if collection != Collection::Events {
            return Err(format!("Deleting {} is not supported by this mock", collection).into());
        }
        data.behaviour.can_delete_event()?;

        let count = data.parties.len();
        data.parties.retain(|p| p.id() != id);
        if data.parties.len() == count {
            return Err(format!("Unexpected HTTP status code 404 (no party #{})", id).into());
        }
        Ok(())
    }
}


/// A UI host that records what it is asked to show, and answers confirmations from a script
#[derive(Default)]
pub struct ScriptedUi {
    alerts: Vec<String>,
    confirmations: Vec<String>,
    answers: VecDeque<bool>,
    page: Option<Element>,
}

impl ScriptedUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer to the next confirmation. When the queue is empty, confirmations are declined
    pub fn answer_next_confirmation(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    pub fn alerts(&self) -> &[String] { &self.alerts }
    pub fn confirmations(&self) -> &[String] { &self.confirmations }
    /// The last mounted page
    pub fn page(&self) -> Option<&Element> { self.page.as_ref() }
}

impl Ui for ScriptedUi {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn mount(&mut self, root: Element) {
        self.page = Some(root);
    }
}
