use serde::Deserialize;
use serde_json::{Map, Value};

use crate::store::cells::{self, Cell};

/// Backing-file column order. `created_at` is stamped by the store.
pub const COLUMNS: &[&str] = &[
    "hotel_code",
    "name",
    "rating",
    "address",
    "city_id",
    "country_code",
    "latitude",
    "longitude",
    "facilities",
    "images",
    "created_at",
];

/// Hotel submission body. Optional fields keep lenient zero/empty defaults
/// instead of being rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HotelInput {
    pub hotel_code: String,
    pub name: String,
    pub rating: f64,
    pub address: String,
    pub city_id: String,
    pub country_code: String,
    pub map_lat: f64,
    pub map_lon: f64,
    pub facilities: Map<String, Value>,
    pub images: Vec<Value>,
}

impl HotelInput {
    /// Required fields that are absent or empty, in declaration order.
    /// A zero rating counts as not provided.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.hotel_code.is_empty() {
            missing.push("hotel_code");
        }
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.rating == 0.0 {
            missing.push("rating");
        }
        if self.address.is_empty() {
            missing.push("address");
        }
        missing
    }

    /// Cell values in column order, `created_at` excluded.
    pub fn into_row(self) -> Vec<Cell> {
        vec![
            Cell::Text(self.hotel_code),
            Cell::Text(self.name),
            Cell::Number(self.rating),
            Cell::Text(self.address),
            Cell::Text(self.city_id),
            Cell::Text(self.country_code),
            Cell::Number(self.map_lat),
            Cell::Number(self.map_lon),
            Cell::Text(cells::encode_json(&Value::Object(self.facilities))),
            Cell::Text(cells::encode_json(&Value::Array(self.images))),
        ]
    }
}
