use crate::ai::gemini;

pub mod plant_info;

/// A prompt knows how to build a payload for a gemini request
/// and how to parse the response.
pub trait Prompt {
    type Response;

    fn build_payload(&self) -> gemini::GenerateContentRequest;
    fn parse_response(&self, raw_response: &str) -> anyhow::Result<Self::Response>;
}

fn build_text_request(prompt: String) -> gemini::GenerateContentRequest {
    gemini::GenerateContentRequest {
        contents: vec![gemini::Content {
            parts: vec![gemini::Part { text: Some(prompt) }],
        }],
        generation_config: gemini::GenerationConfig {
            temperature: 0.3,
            top_k: 32,
            top_p: 1.0,
            max_output_tokens: 2048,
        },
    }
}
