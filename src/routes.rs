use actix_web::web;

use crate::api::handlers::pet_handlers::{
    init_creation_form, init_update_form, process_creation_form, process_update_form,
};

pub fn pet_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/owners/{owner_id}/pets/new")
            .route(web::get().to(init_creation_form))
            .route(web::post().to(process_creation_form))
    );

    cfg.service(
        web::resource("/owners/{owner_id}/pets/{pet_id}/edit")
            .route(web::get().to(init_update_form))
            .route(web::post().to(process_update_form))
    );
}
