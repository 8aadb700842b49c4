use std::fmt::{Display, Formatter};

use url::Url;

/// The remote collections this crate talks to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Parties. The remote service calls them "events"
    Events,
    /// Guest/party associations
    Rsvps,
    Guests,
}

impl Collection {
    /// The path segment of this collection, relative to the API endpoint
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Events => "events",
            Collection::Rsvps => "rsvps",
            Collection::Guests => "guests",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Just a wrapper around the API endpoint URL (base URL and cohort path)
#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    url: Url,
}

impl Resource {
    pub fn new(base_url: &str, cohort_path: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), cohort_path))?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url { &self.url }

    /// The URL of a whole collection, e.g. `.../api/cohort/events`
    pub fn collection_url(&self, collection: Collection) -> Url {
        self.combine(&[collection.path()])
    }

    /// The URL of a single record, e.g. `.../api/cohort/events/12`
    pub fn item_url(&self, collection: Collection, id: i64) -> Url {
        self.combine(&[collection.path(), &id.to_string()])
    }

    /// Build a new URL by keeping the scheme, server and endpoint path of `self`, and appending path segments
    fn combine(&self, segments: &[&str]) -> Url {
        let mut built = self.url.clone();
        let mut path = built.path().trim_end_matches('/').to_string();
        for segment in segments {
            path.push('/');
            path.push_str(segment);
        }
        built.set_path(&path);
        built
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}
