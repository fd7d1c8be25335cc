use std::fmt;

use crate::core::session::StudySession;

pub enum TaskResult {
    LoadingMessage(String),
    DeckLoaded(Result<StudySession, String>),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::LoadingMessage(_) => "loading_message",
            TaskResult::DeckLoaded(_) => "deck_loaded",
        }
    }
}

impl fmt::Debug for TaskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskResult::LoadingMessage(message) => {
                f.debug_tuple("LoadingMessage").field(message).finish()
            }
            TaskResult::DeckLoaded(Ok(session)) => f
                .debug_struct("DeckLoaded")
                .field("cards", &session.store().len())
                .finish(),
            TaskResult::DeckLoaded(Err(e)) => f.debug_tuple("DeckLoaded").field(e).finish(),
        }
    }
}
