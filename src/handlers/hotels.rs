use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::hotel::HotelInput;
use crate::store::Stores;

use super::ApiMessage;

pub async fn add_hotel(stores: web::Data<Stores>, body: web::Json<HotelInput>) -> impl Responder {
    let hotel = body.into_inner();

    let missing = hotel.missing_fields();
    if !missing.is_empty() {
        return HttpResponse::BadRequest().json(ApiMessage::new(
            false,
            format!("Missing required fields: {}", missing.join(", ")),
        ));
    }

    let stores = stores.clone();
    match web::block(move || stores.hotels.append(&hotel.into_row())).await {
        Ok(Ok(())) => HttpResponse::Ok().json(ApiMessage::new(true, "Hotel added successfully")),
        Ok(Err(err)) => {
            log::error!("failed to save hotel data: {err}");
            HttpResponse::InternalServerError()
                .json(ApiMessage::new(false, "Failed to save hotel data"))
        }
        Err(err) => {
            log::error!("hotel write task failed: {err}");
            HttpResponse::InternalServerError()
                .json(ApiMessage::new(false, "Server error while adding hotel"))
        }
    }
}

pub async fn get_hotels(stores: web::Data<Stores>) -> impl Responder {
    let stores = stores.clone();
    match web::block(move || stores.hotels.load_all()).await {
        Ok(Ok(hotels)) => {
            let count = hotels.len();
            HttpResponse::Ok().json(json!({
                "success": true,
                "data": hotels,
                "count": count,
            }))
        }
        Ok(Err(err)) => {
            log::error!("failed to load hotels: {err}");
            HttpResponse::InternalServerError()
                .json(ApiMessage::new(false, "Error retrieving hotels"))
        }
        Err(err) => {
            log::error!("hotel read task failed: {err}");
            HttpResponse::InternalServerError()
                .json(ApiMessage::new(false, "Error retrieving hotels"))
        }
    }
}
