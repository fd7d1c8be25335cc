use crate::core::StudyAction;

// Intents collected while drawing a frame, applied to the session afterwards
pub struct ActionQueue {
    actions: Vec<StudyAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: StudyAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, StudyAction> {
        self.actions.drain(..)
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        LearningStatus,
        StudyFilter,
    };

    #[test]
    fn test_drain_preserves_order() {
        let mut queue = ActionQueue::new();
        queue.push(StudyAction::SetStatus(LearningStatus::Memorized));
        queue.push(StudyAction::ChangeFilter(StudyFilter::Memorized));
        queue.push(StudyAction::Next);

        let drained: Vec<StudyAction> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                StudyAction::SetStatus(LearningStatus::Memorized),
                StudyAction::ChangeFilter(StudyFilter::Memorized),
                StudyAction::Next,
            ]
        );
        assert!(queue.is_empty());
    }
}
