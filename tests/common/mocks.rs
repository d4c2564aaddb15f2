use advisor_rust::{
    Error, Result,
    gemini::{GenerateRequest, GenerativeClient},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One recorded upstream invocation: the payload and the timeout the
/// handler asked for.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub request: GenerateRequest,
    pub timeout: Option<Duration>,
}

/// Mock upstream client for testing
#[derive(Debug)]
pub struct MockGenerativeClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub error: Option<String>,
}

impl MockGenerativeClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<String>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate_content(
        &self,
        request: GenerateRequest,
        timeout: Option<Duration>,
    ) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall { request, timeout });

        if let Some(ref error) = self.error {
            return Err(Error::upstream(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::upstream("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockGenerativeClient {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating test data

pub fn valid_recommendation_json() -> serde_json::Value {
    serde_json::json!({
        "careers": [
            {
                "career": "Software Engineer",
                "studies": ["Computer Science", "Mathematics", "Electrical Engineering"],
                "icon": "code"
            },
            {
                "career": "Game Designer",
                "studies": ["Game Design", "Computer Science", "Visual Arts"],
                "icon": "palette"
            },
            {
                "career": "Robotics Engineer",
                "studies": ["Mechatronics", "Computer Science", "Physics"],
                "icon": "wrench"
            }
        ],
        "hobbies": [
            {
                "hobby": "Robotics club",
                "description": "Build and program robots with others who share the interest.",
                "icon": "wrench"
            },
            {
                "hobby": "Game jams",
                "description": "Short collaborative projects that exercise design and coding.",
                "icon": "code"
            }
        ]
    })
}
