//! This module provides a client to connect to the remote REST service

use std::error::Error;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use serde_json::Value;

use crate::config::{BASE_URL, COHORT_PATH};
use crate::resource::{Collection, Resource};
use crate::traits::RemoteSource;


/// A remote source that fetches its data from the REST service
pub struct Client {
    resource: Resource,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>, T: AsRef<str>>(base_url: S, cohort_path: T) -> Result<Self, Box<dyn Error>> {
        let resource = Resource::new(base_url.as_ref(), cohort_path.as_ref())?;

        Ok(Self{
            resource,
            http: reqwest::Client::new(),
        })
    }

    /// Create a client for the endpoint this crate was built for
    pub fn with_default_endpoint() -> Result<Self, Box<dyn Error>> {
        Self::new(BASE_URL, COHORT_PATH)
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }
}

fn check_status(response: &Response) -> Result<(), Box<dyn Error>> {
    if response.status().is_success() == false {
        return Err(format!("Unexpected HTTP status code {:?} for {}", response.status(), response.url()).into());
    }
    Ok(())
}

/// Extracts the payload of a `{data: ...}` envelope
pub fn open_envelope(body: &str) -> Result<Value, Box<dyn Error>> {
    let mut json: Value = serde_json::from_str(body)?;
    match json.get_mut("data") {
        None => Err("Response has no \"data\" field".into()),
        Some(data) => Ok(data.take()),
    }
}

/// Extracts the array payload of a `{data: [...]}` envelope
pub fn open_list_envelope(body: &str) -> Result<Vec<Value>, Box<dyn Error>> {
    match open_envelope(body)? {
        Value::Array(records) => Ok(records),
        other => Err(format!("Expected a list of records, got {}", other).into()),
    }
}

#[async_trait]
impl RemoteSource for Client {
    async fn list(&self, collection: Collection) -> Result<Vec<Value>, Box<dyn Error>> {
        let url = self.resource.collection_url(collection);
        log::debug!("GET {}", url);

        let response = self.http
            .get(url)
            .send()
            .await?;
        check_status(&response)?;

        let text = response.text().await?;
        open_list_envelope(&text)
    }

    async fn get(&self, collection: Collection, id: i64) -> Result<Value, Box<dyn Error>> {
        let url = self.resource.item_url(collection, id);
        log::debug!("GET {}", url);

        let response = self.http
            .get(url)
            .send()
            .await?;
        check_status(&response)?;

        let text = response.text().await?;
        open_envelope(&text)
    }

    async fn create(&self, collection: Collection, payload: Value) -> Result<(), Box<dyn Error>> {
        let url = self.resource.collection_url(collection);
        log::debug!("POST {}", url);
        let body = serde_json::to_string(&payload)?;

        let response = self.http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        check_status(&response)?;

        Ok(())
    }

    async fn delete(&self, collection: Collection, id: i64) -> Result<(), Box<dyn Error>> {
        let url = self.resource.item_url(collection, id);
        log::debug!("DELETE {}", url);

        let response = self.http
            .delete(url)
            .send()
            .await?;
        check_status(&response)?;

        Ok(())
    }
}
