use branchguard_types::{Level, Message};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Allowed,
    Forbidden,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub outcome: Outcome,
    /// Advisories, info lines and error lines in emission order.
    pub messages: Vec<Message>,
    /// Terminal failure message; `Some` iff `outcome` is `Forbidden`.
    pub error_message: Option<String>,
}

impl Decision {
    pub fn is_forbidden(&self) -> bool {
        self.outcome == Outcome::Forbidden
    }

    /// The terminal failure message, if the pull request is forbidden.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn info_messages(&self) -> impl Iterator<Item = &str> {
        self.messages_at(Level::Info)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.messages_at(Level::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.messages_at(Level::Error)
    }

    fn messages_at(&self, level: Level) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(move |m| m.level == level)
            .map(|m| m.text.as_str())
    }
}
