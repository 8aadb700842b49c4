use std::error::Error;

use async_trait::async_trait;
use minidom::Element;
use serde_json::Value;

use crate::resource::Collection;

/// A remote source of records, organised in collections
///
/// Every call is a single attempt. A non-2xx status and a transport failure are both returned as an `Err`.
#[async_trait]
pub trait RemoteSource {
    /// Returns every record of a collection
    async fn list(&self, collection: Collection) -> Result<Vec<Value>, Box<dyn Error>>;
    /// Returns a single record of a collection
    async fn get(&self, collection: Collection, id: i64) -> Result<Value, Box<dyn Error>>;
    /// Adds a record to a collection. The remote source assigns its id
    async fn create(&self, collection: Collection, payload: Value) -> Result<(), Box<dyn Error>>;
    /// Removes a record from a collection
    async fn delete(&self, collection: Collection, id: i64) -> Result<(), Box<dyn Error>>;
}

/// The host that displays the rendered page and talks to the user
pub trait Ui {
    /// Show a blocking notification
    fn alert(&mut self, message: &str);
    /// Ask the user for an explicit yes/no confirmation
    fn confirm(&mut self, message: &str) -> bool;
    /// Replace the whole displayed page with `root`
    fn mount(&mut self, root: Element);
}
