use thiserror::Error;

use super::Prompt;
use crate::{ai::gemini, domain::PlantInfo};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("no JSON object found in response")]
    NoJson,
    #[error("invalid plant info JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub struct PlantInfoPrompt {
    plant_name: String,
}

impl PlantInfoPrompt {
    pub fn new(plant_name: &str) -> Self {
        Self {
            plant_name: plant_name.to_string(),
        }
    }
}

impl Prompt for PlantInfoPrompt {
    type Response = PlantInfo;

    fn build_payload(&self) -> gemini::GenerateContentRequest {
        super::build_text_request(build_prompt_text(&self.plant_name))
    }

    fn parse_response(&self, raw_response: &str) -> anyhow::Result<PlantInfo> {
        Ok(extract_json(raw_response)?)
    }
}

pub fn build_prompt_text(name: &str) -> String {
    format!(
        r#"Please provide detailed information about the medicinal plant "{}" in the following JSON format:

{{
  "botanicalName": "Scientific name of the plant",
  "family": "Plant family name",
  "description": "Brief description of the plant and its significance",
  "uses": [
    "List of medicinal uses",
    "Each use should be specific and informative",
    "Include traditional and modern applications"
  ],
  "cultivation": "Detailed information about how to grow and care for this plant, including soil, climate, watering, and harvesting requirements",
  "properties": [
    "List of therapeutic properties",
    "Active compounds if known",
    "Pharmacological actions"
  ],
  "precautions": "Important safety information, contraindications, and precautions for use"
}}

Please ensure the response is accurate, informative, and formatted as valid JSON. If the plant is not well-known or if you're unsure about any information, please indicate this clearly in the relevant fields."#,
        name
    )
}

/// Parses the first top-level `{...}` in the model's text as a PlantInfo.
/// The model often wraps its answer in prose or a ```json fence.
pub fn extract_json(text: &str) -> Result<PlantInfo, ParseError> {
    let json_object = find_json_object(text).ok_or(ParseError::NoJson)?;
    Ok(serde_json::from_str(json_object)?)
}

fn find_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    // '}' is one byte, so the object ends right after it.
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}
