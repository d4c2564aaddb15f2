use crate::gemini::{Content, Part};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct InterestRequest {
    pub interests: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub history: Vec<Turn>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: String,
    pub parts: Vec<TurnPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnPart {
    pub text: String,
}

impl From<Turn> for Content {
    fn from(turn: Turn) -> Self {
        Content {
            role: Some(turn.role),
            parts: turn
                .parts
                .into_iter()
                .map(|part| Part { text: part.text })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub careers: Vec<CareerEntry>,
    pub hobbies: Vec<HobbyEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CareerEntry {
    pub career: String,
    pub studies: Vec<String>,
    pub icon: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HobbyEntry {
    pub hobby: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResult {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
