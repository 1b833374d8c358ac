use plant_info::{app::PlantInfoApp, config::Config};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    info!("{config:?}");

    // Lives for the whole process, actix workers share it by reference.
    let app: &'static PlantInfoApp = Box::leak(Box::new(PlantInfoApp::new(&config)?));
    app.start().await?;

    Ok(())
}
