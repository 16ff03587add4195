use serde::Deserialize;
use serde_json::{Map, Value};

use crate::store::cells::{self, Cell};

/// Backing-file column order. `created_at` is stamped by the store.
pub const COLUMNS: &[&str] = &[
    "room_id",
    "hotel_code",
    "booking_code",
    "room_name",
    "base_price",
    "total_fare",
    "currency",
    "is_refundable",
    "day_rates",
    "extras",
    "created_at",
];

/// Hotel-room submission body. The `hotel_code` reference is not checked
/// against stored hotels; orphaned rooms are permitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoomInput {
    pub room_id: String,
    pub hotel_code: String,
    pub booking_code: String,
    pub room_name: String,
    pub base_price: f64,
    pub total_fare: f64,
    pub currency: String,
    pub is_refundable: bool,
    pub day_rates: Map<String, Value>,
    pub extras: Map<String, Value>,
}

impl RoomInput {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.room_id.is_empty() {
            missing.push("room_id");
        }
        if self.hotel_code.is_empty() {
            missing.push("hotel_code");
        }
        if self.booking_code.is_empty() {
            missing.push("booking_code");
        }
        if self.room_name.is_empty() {
            missing.push("room_name");
        }
        missing
    }

    /// Cell values in column order, `created_at` excluded.
    pub fn into_row(self) -> Vec<Cell> {
        vec![
            Cell::Text(self.room_id),
            Cell::Text(self.hotel_code),
            Cell::Text(self.booking_code),
            Cell::Text(self.room_name),
            Cell::Number(self.base_price),
            Cell::Number(self.total_fare),
            Cell::Text(self.currency),
            Cell::Bool(self.is_refundable),
            Cell::Text(cells::encode_json(&Value::Object(self.day_rates))),
            Cell::Text(cells::encode_json(&Value::Object(self.extras))),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_reports_all_required_fields() {
        let input = RoomInput::default();
        assert_eq!(
            input.missing_fields(),
            vec!["room_id", "hotel_code", "booking_code", "room_name"]
        );
    }

    #[test]
    fn omitted_is_refundable_defaults_to_false() {
        let input: RoomInput = serde_json::from_str(
            r#"{"room_id": "R1", "hotel_code": "HTL-001", "booking_code": "BK-9",
                "room_name": "Deluxe Twin"}"#,
        )
        .unwrap();
        assert!(!input.is_refundable);
        assert_eq!(input.base_price, 0.0);
        assert_eq!(input.currency, "");
    }

    #[test]
    fn day_rates_serialize_to_a_single_cell() {
        let input: RoomInput = serde_json::from_str(
            r#"{"room_id": "R1", "hotel_code": "HTL-001", "booking_code": "BK-9",
                "room_name": "Deluxe Twin", "day_rates": {"2026-09-01": 120.0}}"#,
        )
        .unwrap();
        let row = input.into_row();
        assert_eq!(row.len(), COLUMNS.len() - 1);
        assert_eq!(row[8], Cell::Text(r#"{"2026-09-01":120.0}"#.to_string()));
    }
}
