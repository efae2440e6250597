//! FILENAME: core/pivot-layout/src/config.rs
//! Grid configuration consumed by the layout.

use serde::{Deserialize, Serialize};

use crate::cell::FieldDescriptor;
use crate::error::Result;

/// Axis on which data field headers are placed when there are several
/// data fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataHeadersLocation {
    Rows,
    #[default]
    Columns,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Configured data fields, in display order.
    pub data_fields: Vec<FieldDescriptor>,
    pub data_headers_location: DataHeadersLocation,
}

impl GridConfig {
    pub fn new(
        data_fields: Vec<FieldDescriptor>,
        data_headers_location: DataHeadersLocation,
    ) -> Self {
        GridConfig {
            data_fields,
            data_headers_location,
        }
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of data slots per leaf. A grid without data fields still
    /// reserves one.
    pub fn data_fields_count(&self) -> u32 {
        (self.data_fields.len() as u32).max(1)
    }

    pub fn single_data_field(&self) -> Option<&FieldDescriptor> {
        self.data_fields.first()
    }
}
