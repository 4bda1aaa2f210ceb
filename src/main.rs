use pets_service::{api::state::AppState, infrastructure::database::mongo_context::MongoContext, routes::pet_routes, utils::config::AppConfig};
use actix_web::{get, web, App, HttpServer, Responder};

#[get("/")]
async fn entry_point() -> impl Responder {
    "This is the Pets API. Use /owners/{owner_id}/pets/new to add a pet."
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::global();

    let mongo_context = match MongoContext::init(&config.database_url, &config.database_name).await {
        Ok(context) => {
            println!("Connected to MongoDB successfully.");
            context
        },
        Err(e) => {
            log::error!("Failed to connect to MongoDB: {}", e);
            std::process::exit(1);
        }
    };

    println!("🚀 Server running at http://{}", config.server_address);

    let app_state = AppState { db: web::Data::new(mongo_context) };

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(pet_routes)
            .service(entry_point)
    })
    .bind(config.server_address.as_str())?
    .run()
    .await
}
