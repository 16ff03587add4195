use std::env;
use std::path::PathBuf;

/// Runtime configuration, read once at startup and passed to the stores at
/// construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub hotel_file: PathBuf,
    pub room_file: PathBuf,
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8080),
            hotel_file: env::var("HOTEL_FILE_PATH")
                .unwrap_or_else(|_| "hotels.xlsx".to_string())
                .into(),
            room_file: env::var("ROOM_FILE_PATH")
                .unwrap_or_else(|_| "hotel_rooms.xlsx".to_string())
                .into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            hotel_file: PathBuf::from("hotels.xlsx"),
            room_file: PathBuf::from("hotel_rooms.xlsx"),
        }
    }
}
