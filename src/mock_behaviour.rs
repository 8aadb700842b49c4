//! This module provides ways to tweak a mocked remote source, so that it can return errors on some tests
#![cfg(feature = "mock_remote")]

use std::error::Error;

use crate::resource::Collection;

/// This stores some behaviour tweaks, that describe how a mocked instance will behave during a given test
///
/// So that a functions fails _n_ times after _m_ initial successes, set `(m, n)` for the suited parameter
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    /// If this is true, every action will be allowed
    pub is_suspended: bool,

    pub list_events_behaviour: (u32, u32),
    pub get_event_behaviour: (u32, u32),
    pub create_event_behaviour: (u32, u32),
    pub delete_event_behaviour: (u32, u32),
    pub list_rsvps_behaviour: (u32, u32),
    pub list_guests_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// All operations will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            is_suspended: false,
            list_events_behaviour: (0, n_fails),
            get_event_behaviour: (0, n_fails),
            create_event_behaviour: (0, n_fails),
            delete_event_behaviour: (0, n_fails),
            list_rsvps_behaviour: (0, n_fails),
            list_guests_behaviour: (0, n_fails),
        }
    }

    /// Suspend this mock behaviour until you call `resume`
    pub fn suspend(&mut self) {
        self.is_suspended = true;
    }
    /// Make this behaviour active again
    pub fn resume(&mut self) {
        self.is_suspended = false;
    }

    pub fn can_list(&mut self, collection: Collection) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        match collection {
            Collection::Events => decrement(&mut self.list_events_behaviour, "list events"),
            Collection::Rsvps => decrement(&mut self.list_rsvps_behaviour, "list rsvps"),
            Collection::Guests => decrement(&mut self.list_guests_behaviour, "list guests"),
        }
    }
    pub fn can_get_event(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.get_event_behaviour, "get event")
    }
    pub fn can_create_event(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.create_event_behaviour, "create event")
    }
    pub fn can_delete_event(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.delete_event_behaviour, "delete event")
    }
}


/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), Box<dyn Error>> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 = value.0 - 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else {
        if remaining_failures > 0 {
            value.1 = value.1 - 1;
            log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
            Err(format!("Mocked behaviour requires this {} to fail this time. ({:?})", descr, value).into())
        } else {
            log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
            Ok(())
        }
    }
}
