use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::room::RoomInput;
use crate::store::Stores;

use super::ApiMessage;

pub async fn add_room(stores: web::Data<Stores>, body: web::Json<RoomInput>) -> impl Responder {
    let room = body.into_inner();

    let missing = room.missing_fields();
    if !missing.is_empty() {
        return HttpResponse::BadRequest().json(ApiMessage::new(
            false,
            format!("Missing required fields: {}", missing.join(", ")),
        ));
    }

    let stores = stores.clone();
    match web::block(move || stores.rooms.append(&room.into_row())).await {
        Ok(Ok(())) => {
            HttpResponse::Ok().json(ApiMessage::new(true, "Hotel room added successfully"))
        }
        Ok(Err(err)) => {
            log::error!("failed to save room data: {err}");
            HttpResponse::InternalServerError()
                .json(ApiMessage::new(false, "Failed to save room data"))
        }
        Err(err) => {
            log::error!("room write task failed: {err}");
            HttpResponse::InternalServerError()
                .json(ApiMessage::new(false, "Server error while adding room"))
        }
    }
}

pub async fn get_rooms(stores: web::Data<Stores>) -> impl Responder {
    let stores = stores.clone();
    match web::block(move || stores.rooms.load_all()).await {
        Ok(Ok(rooms)) => {
            let count = rooms.len();
            HttpResponse::Ok().json(json!({
                "success": true,
                "data": rooms,
                "count": count,
            }))
        }
        Ok(Err(err)) => {
            log::error!("failed to load rooms: {err}");
            HttpResponse::InternalServerError()
                .json(ApiMessage::new(false, "Error retrieving rooms"))
        }
        Err(err) => {
            log::error!("room read task failed: {err}");
            HttpResponse::InternalServerError()
                .json(ApiMessage::new(false, "Error retrieving rooms"))
        }
    }
}
