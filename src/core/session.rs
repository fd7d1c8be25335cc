use rand::Rng;

use crate::{
    core::{
        errors::Result,
        models::{
            status_label,
            Card,
            CardView,
            LearningStatus,
            Side,
            StudyFilter,
        },
        store::CardStore,
        view::{
            apply_filter,
            shuffle,
        },
    },
    persistence::StatusStorage,
};

/// The user intents a study session accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyAction {
    Flip,
    Next,
    Prev,
    Shuffle,
    SetStatus(LearningStatus),
    ChangeFilter(StudyFilter),
}

/// Owns the card store and the cursor over the current working set.
pub struct StudySession {
    store: CardStore,
    storage: Box<dyn StatusStorage>,
    working_set: Vec<usize>,
    position: usize,
    side: Side,
    filter: StudyFilter,
}

impl StudySession {
    pub fn new(store: CardStore, storage: Box<dyn StatusStorage>) -> Self {
        let mut session = Self {
            store,
            storage,
            working_set: Vec::new(),
            position: 0,
            side: Side::Front,
            filter: StudyFilter::All,
        };
        session.rederive();
        session
    }

    /// Parses `text`, restores statuses from `storage` and starts on the
    /// unfiltered deck.
    pub fn open(text: &str, storage: Box<dyn StatusStorage>) -> Result<Self> {
        let store = CardStore::open(text, &*storage)?;
        Ok(Self::new(store, storage))
    }

    pub fn dispatch(&mut self, action: StudyAction) -> Result<()> {
        match action {
            StudyAction::Flip => self.flip(),
            StudyAction::Next => self.next(),
            StudyAction::Prev => self.prev(),
            StudyAction::Shuffle => self.shuffle_working_set(),
            StudyAction::SetStatus(status) => return self.set_current_status(status),
            StudyAction::ChangeFilter(filter) => self.change_filter(filter),
        }
        Ok(())
    }

    pub fn next(&mut self) {
        let len = self.working_set.len();
        if len == 0 {
            return;
        }
        self.position = (self.position + 1) % len;
        self.side = Side::Front;
    }

    pub fn prev(&mut self) {
        let len = self.working_set.len();
        if len == 0 {
            return;
        }
        self.position = (self.position + len - 1) % len;
        self.side = Side::Front;
    }

    pub fn flip(&mut self) {
        if self.working_set.is_empty() {
            return;
        }
        self.side = self.side.flipped();
    }

    pub fn shuffle_working_set(&mut self) {
        self.shuffle_working_set_with(&mut rand::rng());
    }

    pub fn shuffle_working_set_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.working_set, rng);
        self.position = 0;
        self.side = Side::Front;
    }

    /// Sets the status of the current card and saves every status. The card
    /// may leave a filtered view, so the working set is rebuilt and the cursor
    /// returns to the first card. A failed save is returned but the new status
    /// stays in effect.
    pub fn set_current_status(&mut self, status: LearningStatus) -> Result<()> {
        let Some(card) = self.current_card() else {
            return Ok(());
        };
        let id = card.id;

        let status = status.status();
        self.store.set_status(id, status)?;
        log::info!("Card {} marked {}", id, status.key());

        let saved = self.store.persist(&mut *self.storage);
        if let Err(e) = &saved {
            log::error!("Failed to save statuses: {}", e);
        }

        self.rederive();
        saved
    }

    pub fn change_filter(&mut self, filter: StudyFilter) {
        self.filter = filter;
        self.rederive();
    }

    pub fn current_view(&self) -> CardView {
        let Some(card) = self.current_card() else {
            return CardView::empty();
        };

        CardView {
            ordinal: self.position + 1,
            total: self.working_set.len(),
            card_id: Some(card.id),
            text: card.text(self.side).to_string(),
            side: self.side,
            status: Some(card.status),
            status_label: status_label(Some(card.status)),
        }
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.working_set.get(self.position).and_then(|&index| self.store.get(index))
    }

    pub fn active_filter(&self) -> StudyFilter {
        self.filter
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn is_empty(&self) -> bool {
        self.working_set.is_empty()
    }

    /// Cards in the working set, in navigation order.
    pub fn working_set(&self) -> Vec<&Card> {
        self.working_set.iter().filter_map(|&index| self.store.get(index)).collect()
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    fn rederive(&mut self) {
        self.working_set = apply_filter(self.store.snapshot(), self.filter);
        self.position = 0;
        self.side = Side::Front;
    }
}
