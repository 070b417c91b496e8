use crate::engine::fact_matcher::{FactMatcher, FALLBACK_ANSWER};
use crate::engine::follow_ups::follow_up_questions;
use crate::model::game_state::GameState;
use crate::model::message::Message;

pub const GREETING: &str =
    "Hi! I'm your Earth Tutor 🌎. Ask me anything about climate-friendly prom planning!";

pub const EXAMPLE_QUESTIONS: [&str; 5] = [
    "What is the carbon footprint of a limousine?",
    "Why is synthetic glitter harmful to the environment?",
    "How can I reduce food waste at prom?",
    "What are sustainable prom dress options?",
    "How can I make prom decorations eco-friendly?",
];

/// What happened to a submitted question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorReply {
    pub question: String,
    /// False when the fallback answer was used.
    pub matched: bool,
}

/// The Ask the Earth chat: an append-only message log backed by the
/// keyword matcher.
pub struct TutorSession {
    matcher: FactMatcher,
    messages: Vec<Message>,
}

impl TutorSession {
    pub fn new(matcher: FactMatcher) -> Self {
        Self {
            matcher,
            messages: vec![Message::Tutor {
                text: GREETING.to_string(),
                follow_ups: None,
            }],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Answers `input` from the fact catalog. Blank input is ignored.
    pub fn ask(&mut self, input: &str) -> Option<TutorReply> {
        let question = input.trim();
        if question.is_empty() {
            return None;
        }

        tracing::debug!("Tutor question: {}", question);

        let found = self.matcher.answer(question);
        let matched = found.is_some();
        let text = found.unwrap_or(FALLBACK_ANSWER).to_string();

        self.messages.push(Message::User(question.to_string()));
        self.messages.push(Message::Tutor {
            text,
            follow_ups: Some(follow_up_questions(question)),
        });

        Some(TutorReply {
            question: question.to_string(),
            matched,
        })
    }

    /// Extra answer that arrived from the remote tutor.
    pub fn push_remote_answer(&mut self, answer: String) {
        self.messages.push(Message::Tutor {
            text: answer,
            follow_ups: None,
        });
    }

    pub fn push_system(&mut self, text: impl Into<String>) {
        self.messages.push(Message::System(text.into()));
    }
}

/// System prompt sent along with remote questions.
pub fn remote_context(state: &GameState) -> String {
    let mut context = String::from(
        "You are the Earth Tutor in a game about planning a climate-friendly prom. \
         Answer in two or three friendly sentences for a high school student.",
    );

    if state.has_started {
        context.push_str(&format!(
            " The player has completed {} phase(s) so far, with {} kg CO2, {} popularity points and ${} budget left.",
            state.completed_phases.len(),
            state.carbon_footprint,
            state.popularity_score,
            state.budget_remaining,
        ));
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Catalog;
    use crate::model::fact::FactCatalog;
    use crate::model::message::Sender;

    fn session() -> TutorSession {
        TutorSession::new(FactMatcher::new(FactCatalog::builtin().unwrap()))
    }

    #[test]
    fn starts_with_greeting() {
        let session = session();

        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender(), Sender::Tutor);
        assert_eq!(session.messages()[0].text(), GREETING);
        assert!(session.messages()[0].follow_ups().is_empty());
    }

    #[test]
    fn ask_appends_question_and_answer() {
        let mut session = session();
        let reply = session
            .ask("  What is the carbon footprint of a limousine?  ")
            .unwrap();

        assert!(reply.matched);
        assert_eq!(reply.question, "What is the carbon footprint of a limousine?");

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1], Message::User(reply.question.clone()));
        assert_eq!(messages[2].sender(), Sender::Tutor);
        assert!(messages[2].text().contains("45 kg"));
        assert_eq!(messages[2].follow_ups().len(), 2);
    }

    #[test]
    fn unmatched_question_uses_fallback_and_default_follow_ups() {
        let mut session = session();
        let reply = session.ask("xyz").unwrap();

        assert!(!reply.matched);
        let answer = &session.messages()[2];
        assert_eq!(answer.text(), FALLBACK_ANSWER);
        assert_eq!(
            answer.follow_ups(),
            [
                "What are some green transportation options for prom?",
                "How can I make prom decorations eco-friendly?",
                "What are sustainable prom dress options?",
            ]
        );
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = session();

        assert!(session.ask("   ").is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn every_example_has_an_answer() {
        let mut session = session();
        for example in EXAMPLE_QUESTIONS {
            assert!(session.ask(example).unwrap().matched, "{example}");
        }
    }

    #[test]
    fn remote_and_system_messages_append() {
        let mut session = session();
        session.push_remote_answer("Bikes are great.".into());
        session.push_system("remote tutor unavailable");

        let messages = session.messages();
        assert_eq!(messages[1].sender(), Sender::Tutor);
        assert!(messages[1].follow_ups().is_empty());
        assert_eq!(messages[2], Message::System("remote tutor unavailable".into()));
    }

    #[test]
    fn context_mentions_totals_once_started() {
        let catalog = Catalog::builtin().unwrap();

        let context = remote_context(&GameState::new(&catalog));
        assert!(!context.contains("budget"));

        let context = remote_context(&GameState::started(&catalog));
        assert!(context.contains("0 kg CO2"));
        assert!(context.contains("$500 budget"));
    }
}
