use crate::engine::llm_client::RemoteTutorSettings;

pub enum TutorCommand {
    Ask {
        question: String,
        context: Option<String>,
    },
    Configure(RemoteTutorSettings),
}

#[derive(Debug, PartialEq)]
pub enum TutorResponse {
    Answered { question: String, answer: String },
    Failed { question: String, reason: String },
}
