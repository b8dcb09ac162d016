use actix_web::web;

use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            // File storage
            .service(
                web::scope("/files")
                    .service(
                        web::resource("/{category}")
                            .route(web::post().to(handlers::upload_file)),
                    )
                    .service(web::resource("").route(web::delete().to(handlers::delete_file))),
            )
            // Samples
            .service(
                web::resource("/samples")
                    .route(web::post().to(handlers::create_sample))
                    .route(web::get().to(handlers::list_samples)),
            ),
    );
}

async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": "Server is running"
    }))
}
