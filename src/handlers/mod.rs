use actix_web::{error::InternalError, web, HttpResponse, Responder};
use serde::Serialize;

pub mod hotels;
pub mod rooms;

/// Response envelope for add-endpoints and errors.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    pub fn new(success: bool, message: impl Into<String>) -> Self {
        ApiMessage {
            success,
            message: message.into(),
        }
    }
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "message": "Hotel booking backend is running"
    }))
}

/// Rejects absent or unreadable JSON bodies with the API envelope instead
/// of actix's default error text.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ApiMessage::new(false, "No data provided"));
        InternalError::from_response(err, response).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .route("/hotel/add-hotel", web::post().to(hotels::add_hotel))
        .route("/hotelRoom/add", web::post().to(rooms::add_room))
        .route("/hotels", web::get().to(hotels::get_hotels))
        .route("/rooms", web::get().to(rooms::get_rooms));
}
