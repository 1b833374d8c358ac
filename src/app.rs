use crate::{
    ai::gemini::Gemini,
    config::Config,
    controllers::{
        health::health_handler,
        plant_info::{get_plant_info_handler, PlantInfoController},
    },
};
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use mockall_double::double;
#[double]
use crate::ai::Ai;
use tracing::{info, warn};

pub struct PlantInfoApp {
    pub plant_info_controller: PlantInfoController,
    host: String,
    port: u16,
}

impl PlantInfoApp {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        if config.gemini.api_key.is_none() {
            warn!("Configure GEMINI_API_KEY to use gemini, serving fallback plant info until then");
        }

        let gemini = Gemini::new(&config.gemini)?;
        let plant_info_controller = PlantInfoController::new(Ai::new(gemini));

        Ok(Self {
            plant_info_controller,
            host: config.host.clone(),
            port: config.port,
        })
    }

    /// Any origin may call, the browser client is served from elsewhere.
    pub fn cors() -> Cors {
        Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec!["authorization", "x-client-info", "apikey", "content-type"])
            .max_age(3600)
    }

    pub fn configure(&'static self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self))
            .service(get_plant_info_handler)
            .service(health_handler);
    }

    pub async fn start(&'static self) -> std::io::Result<()> {
        info!("Server running on http://{}:{}", self.host, self.port);

        HttpServer::new(move || {
            App::new()
                .wrap(Self::cors())
                .configure(|cfg| self.configure(cfg))
        })
        .bind((self.host.as_str(), self.port))?
        .run()
        .await
    }
}
