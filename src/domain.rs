use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Botanical facts about one plant, as shown on the plant page.
/// Every field is free text from the model; nothing is validated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlantInfo {
    pub botanical_name: String,
    pub family: String,
    pub description: String,
    pub uses: Vec<String>,
    pub cultivation: String,
    pub properties: Vec<String>,
    pub precautions: String,
    /// Anything else the model chose to include, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlantInfo {
    /// Generic advisory text for `name`, served whenever the model can't be
    /// reached or its answer can't be parsed.
    pub fn fallback(name: &str) -> Self {
        Self {
            botanical_name: format!("{name} sp."),
            family: "Plant family information".to_string(),
            description: format!(
                "{name} is a medicinal plant with various traditional uses. For accurate \
                 information, please consult botanical references or healthcare professionals."
            ),
            uses: vec![
                "Traditional medicinal uses".to_string(),
                "Please consult healthcare professionals for specific applications".to_string(),
                "Used in traditional medicine systems".to_string(),
            ],
            cultivation: format!(
                "{name} cultivation requires specific soil, climate, and care conditions. \
                 Please consult agricultural or botanical guides for detailed growing instructions."
            ),
            properties: vec![
                "Various therapeutic compounds".to_string(),
                "Active ingredients vary by species".to_string(),
                "Please consult scientific literature for detailed phytochemistry".to_string(),
            ],
            precautions: "Always consult healthcare professionals before using any medicinal \
                          plant. Individual reactions may vary."
                .to_string(),
            extra: Map::new(),
        }
    }
}
