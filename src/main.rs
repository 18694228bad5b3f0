use actix_web::{middleware::Logger, App, HttpServer};
use agent_clinic::{config, page};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    config::init_logger();

    let cfg = config::ServerConfig::from_env();
    log::info!("Serving {} on http://{}", cfg.static_dir, cfg.bind_addr);

    let static_dir = cfg.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(page::config)
            .service(page::static_files(&static_dir))
    })
    .bind(&cfg.bind_addr)?
    .run()
    .await
}
