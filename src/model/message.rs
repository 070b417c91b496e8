#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Tutor,
    System,
}

/// One line of the Ask the Earth chat. Lives only for the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    User(String),
    Tutor {
        text: String,
        follow_ups: Option<Vec<String>>,
    },
    System(String),
}

impl Message {
    pub fn sender(&self) -> Sender {
        match self {
            Message::User(_) => Sender::User,
            Message::Tutor { .. } => Sender::Tutor,
            Message::System(_) => Sender::System,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Message::User(t) | Message::System(t) => t,
            Message::Tutor { text, .. } => text,
        }
    }

    pub fn follow_ups(&self) -> &[String] {
        match self {
            Message::Tutor {
                follow_ups: Some(f),
                ..
            } => f,
            _ => &[],
        }
    }
}
