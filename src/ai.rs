use self::{gemini::Gemini, prompts::plant_info::PlantInfoPrompt};
use crate::domain::PlantInfo;
use mockall::automock;

pub mod gemini;
pub mod prompts;

pub struct Ai {
    pub gemini: Gemini,
}

#[automock]
impl Ai {
    pub fn new(gemini: Gemini) -> Self {
        Self { gemini }
    }

    /// Asks the model about `name` once and parses its answer.  Errors are
    /// left for the caller to recover from.
    pub async fn fetch_plant_info(&self, name: &str) -> anyhow::Result<PlantInfo> {
        self.gemini.execute(PlantInfoPrompt::new(name)).await
    }
}
