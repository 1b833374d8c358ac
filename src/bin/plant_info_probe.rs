use plant_info::{
    ai::{gemini::Gemini, Ai},
    config::Config,
};
use std::env;

/// Runs one lookup against the configured model and prints what came back,
/// without the fallback the webserver would substitute.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Expected exactly one argument, had: {args:?}");
        std::process::exit(1);
    }

    let plant_name = &args[1];

    let config = Config::from_env()?;
    let ai = Ai::new(Gemini::new(&config.gemini)?);

    match ai.fetch_plant_info(plant_name).await {
        Ok(plant_info) => println!("{}", serde_json::to_string_pretty(&plant_info)?),
        Err(e) => {
            eprintln!("Lookup failed: {e:#}");
            std::process::exit(1);
        }
    }

    Ok(())
}
