//! API client for the Hearth backend

use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use hearth_common::{Error, Property, PropertyStatus, Result};

const API_BASE: &str = "/api";
const TOKEN_KEY: &str = "hearth_token";

/// API client for backend communication
pub struct ApiClient;

impl ApiClient {
    /// Get authentication token from local storage
    fn get_token() -> Option<String> {
        LocalStorage::get(TOKEN_KEY).ok()
    }

    /// Set authentication token in local storage
    pub fn set_token(token: String) {
        let _ = LocalStorage::set(TOKEN_KEY, token);
    }

    /// Clear authentication token
    pub fn clear_token() {
        LocalStorage::delete(TOKEN_KEY);
    }

    /// Make authenticated GET request
    async fn get<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T> {
        let url = format!("{}{}", API_BASE, path);

        let mut request = Request::get(&url);

        if let Some(token) = Self::get_token() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        if !response.ok() {
            return Err(Error::Http {
                status: response.status(),
                message: response.status_text(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }

    /// Make authenticated POST request
    async fn post<B: Serialize, T: for<'de> Deserialize<'de>>(path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", API_BASE, path);

        let mut request = Request::post(&url);

        if let Some(token) = Self::get_token() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .json(body)
            .map_err(|e| Error::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        if !response.ok() {
            return Err(Error::Http {
                status: response.status(),
                message: response.status_text(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }

    /// Make authenticated DELETE request
    async fn delete(path: &str) -> Result<()> {
        let url = format!("{}{}", API_BASE, path);

        let mut request = Request::delete(&url);

        if let Some(token) = Self::get_token() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        if !response.ok() {
            return Err(Error::Http {
                status: response.status(),
                message: response.status_text(),
            });
        }

        Ok(())
    }

    /// List the signed-in member's own listings
    pub async fn list_my_properties() -> Result<Vec<Property>> {
        Self::get("/properties/mine").await
    }

    /// Get a single listing
    pub async fn get_property(id: &str) -> Result<Property> {
        Self::get(&format!("/properties/{}", id)).await
    }

    /// Create a listing
    pub async fn create_property(input: &PropertyInput) -> Result<Property> {
        Self::post("/properties", input).await
    }

    /// Re-save an existing listing
    pub async fn update_property(id: &str, input: &PropertyInput) -> Result<Property> {
        Self::post(&format!("/properties/{}", id), input).await
    }

    /// Update a listing's lifecycle status
    pub async fn update_property_status(id: &str, status: PropertyStatus) -> Result<Property> {
        #[derive(Serialize)]
        struct UpdateStatusRequest {
            #[serde(rename = "propertyStatus")]
            status: PropertyStatus,
        }

        let body = UpdateStatusRequest { status };
        Self::post(&format!("/properties/{}/status", id), &body).await
    }

    /// Delete a listing
    pub async fn delete_property(id: &str) -> Result<()> {
        Self::delete(&format!("/properties/{}", id)).await
    }
}

/// Fields accepted when creating or re-saving a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PropertyInput {
    #[serde(rename = "propertyTitle")]
    pub title: String,
    #[serde(rename = "propertyAddress")]
    pub address: String,
    #[serde(rename = "propertyPrice")]
    pub price: u64,
}
