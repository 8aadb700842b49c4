//! This crate provides an admin console for parties, their guests and their RSVPs.
//!
//! The data lives on a remote REST service, reached by the client in the [`client`] module. \
//! An [`App`](app::App) keeps an in-memory copy of it in an [`AppState`](state::AppState), and rebuilds the whole page
//! (an element tree, see the [`view`] module) every time this state changes.
//!
//! The app does not display anything by itself: it hands the page, alerts and confirmation requests to a host that implements [`Ui`](traits::Ui).
//! User interactions come back to the app as [`Intent`](intent::Intent)s.

pub mod traits;

mod party;
pub use party::{NewParty, Party, PartyId};
mod guest;
pub use guest::{Guest, GuestId, Rsvp};
pub mod form;
pub use form::PartyForm;
pub mod state;
pub mod intent;
pub use intent::Intent;
pub mod view;
pub mod app;
pub use app::App;

pub mod resource;
pub mod client;
#[cfg(feature = "mock_remote")]
pub mod mock;
#[cfg(feature = "mock_remote")]
pub mod mock_behaviour;

pub mod config;
pub mod utils;
