use actix_web::{post, web, HttpResponse};
use mockall_double::double;
use serde_json::Value;
use tracing::{error, info, warn};

use super::ApiError;
#[double]
use crate::ai::Ai;
use crate::{app::PlantInfoApp, domain::PlantInfo};

pub struct PlantInfoController {
    pub ai: Ai,
}

impl PlantInfoController {
    pub fn new(ai: Ai) -> Self {
        Self { ai }
    }

    /// Looks up the plant named in a `{"plantName": ...}` body.  Anything that
    /// goes wrong upstream is answered with `PlantInfo::fallback`.
    pub async fn get_plant_info(&self, body: &[u8]) -> Result<PlantInfo, ApiError> {
        let payload = parse_body(body).map_err(|e| {
            error!("Error in get-plant-info: {e}");
            ApiError::Internal(e.to_string())
        })?;

        let name = plant_name(&payload).ok_or(ApiError::MissingPlantName)?;
        info!("get-plant-info {name:?}");

        match self.ai.fetch_plant_info(name).await {
            Ok(plant_info) => Ok(plant_info),
            Err(e) => {
                warn!("Gemini lookup for {name:?} failed, using fallback: {e:#}");
                Ok(PlantInfo::fallback(name))
            }
        }
    }
}

// No body at all is treated like a body without a name.
fn parse_body(body: &[u8]) -> serde_json::Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(body)
}

fn plant_name(payload: &Value) -> Option<&str> {
    payload
        .get("plantName")?
        .as_str()
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

#[post("/functions/v1/get-plant-info")]
pub async fn get_plant_info_handler(
    body: web::Bytes,
    app: web::Data<&'static PlantInfoApp>,
) -> Result<HttpResponse, ApiError> {
    let plant_info = app.plant_info_controller.get_plant_info(&body).await?;
    Ok(HttpResponse::Ok().json(plant_info))
}
