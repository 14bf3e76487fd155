//! Common types shared between the Hearth backend API and the web UI

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PropertyStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "SOLD")]
    Sold,
    #[serde(rename = "DELETE")]
    Deleted,
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The status badge shows the raw wire value
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Sold => write!(f, "SOLD"),
            Self::Deleted => write!(f, "DELETE"),
        }
    }
}

/// A real-estate listing
///
/// Field names follow the backend wire format. `id` is stable and
/// non-empty; `images` may be empty and the first element is accessed
/// defensively by the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "propertyTitle")]
    pub title: String,
    #[serde(rename = "propertyAddress")]
    pub address: String,
    #[serde(rename = "propertyPrice")]
    pub price: u64,
    #[serde(rename = "propertyImages", default)]
    pub images: Vec<String>,
    #[serde(rename = "propertyStatus")]
    pub status: PropertyStatus,
    #[serde(rename = "propertyViews", default)]
    pub views: u64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// API error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Listing not found: {0}")]
    PropertyNotFound(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Response decode error: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_property() -> Property {
        Property {
            id: "prop-1".to_string(),
            title: "Sunny Loft".to_string(),
            address: "12 Harbor Lane".to_string(),
            price: 250_000,
            images: vec!["uploads/loft.jpg".to_string()],
            status: PropertyStatus::Active,
            views: 42,
            created_at: "2026-01-15T09:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_property_serialization() {
        let property = sample_property();

        let json = serde_json::to_string(&property).unwrap();
        assert!(json.contains("\"_id\""));
        assert!(json.contains("\"propertyTitle\""));
        assert!(json.contains("\"propertyPrice\""));

        let deserialized: Property = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, property);
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&PropertyStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
        assert_eq!(
            serde_json::to_string(&PropertyStatus::Sold).unwrap(),
            "\"SOLD\""
        );
        assert_eq!(
            serde_json::to_string(&PropertyStatus::Deleted).unwrap(),
            "\"DELETE\""
        );
        assert_eq!(PropertyStatus::Sold.to_string(), "SOLD");
    }

    #[test]
    fn test_missing_images_and_views_default() {
        let json = r#"{
            "_id": "prop-2",
            "propertyTitle": "Garden Flat",
            "propertyAddress": "3 Elm Court",
            "propertyPrice": 180000,
            "propertyStatus": "SOLD",
            "createdAt": "2025-11-02T12:30:00Z"
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert!(property.images.is_empty());
        assert_eq!(property.views, 0);
        assert_eq!(property.status, PropertyStatus::Sold);
    }
}
