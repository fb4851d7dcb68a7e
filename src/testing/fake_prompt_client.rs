use std::sync::{Arc, Mutex};

use crate::domain::{AppError, PromptRequest, PromptResponse};
use crate::ports::PromptClient;

type ErrorFactory = Arc<dyn Fn() -> AppError + Send + Sync>;

/// Prompt client that records requests and answers from canned data.
#[derive(Clone)]
pub struct FakePromptClient {
    prompts: Vec<String>,
    explanation: Option<String>,
    failure: Option<ErrorFactory>,
    requests: Arc<Mutex<Vec<PromptRequest>>>,
    explained: Arc<Mutex<Vec<String>>>,
}

impl FakePromptClient {
    pub fn returning(prompts: &[&str]) -> Self {
        Self {
            prompts: prompts.iter().map(|p| p.to_string()).collect(),
            explanation: None,
            failure: None,
            requests: Arc::new(Mutex::new(vec![])),
            explained: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn failing(error: impl Fn() -> AppError + Send + Sync + 'static) -> Self {
        Self { failure: Some(Arc::new(error)), ..Self::returning(&[]) }
    }

    pub fn with_explanation(mut self, text: &str) -> Self {
        self.explanation = Some(text.to_string());
        self
    }

    pub fn requests(&self) -> Vec<PromptRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn explained(&self) -> Vec<String> {
        self.explained.lock().unwrap().clone()
    }
}

impl PromptClient for FakePromptClient {
    fn generate(&self, request: &PromptRequest) -> Result<PromptResponse, AppError> {
        request.validate()?;
        self.requests.lock().unwrap().push(request.clone());
        if let Some(failure) = &self.failure {
            return Err(failure());
        }
        Ok(PromptResponse { refined_prompts: self.prompts.clone() })
    }

    fn explain(&self, prompt: &str) -> Result<String, AppError> {
        self.explained.lock().unwrap().push(prompt.to_string());
        if let Some(failure) = &self.failure {
            return Err(failure());
        }
        self.explanation.clone().ok_or_else(|| AppError::EmptyResult { what: "explanation".into() })
    }

    fn base_url(&self) -> String {
        "http://fake.test".to_string()
    }
}
