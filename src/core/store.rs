use std::collections::HashSet;

use crate::{
    core::{
        errors::{
            KiokuError,
            Result,
        },
        models::{
            Card,
            CardId,
            Status,
        },
        source::{
            parse_rows,
            RawRow,
        },
    },
    persistence::{
        StatusMap,
        StatusStorage,
    },
};

/// Canonical, source-ordered list of cards and their statuses.
#[derive(Debug, Default)]
pub struct CardStore {
    cards: Vec<Card>,
    statuses_merged: bool,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `text`, loads the rows and restores statuses from `storage`.
    /// A failed read is logged and treated as no saved statuses.
    pub fn open(text: &str, storage: &dyn StatusStorage) -> Result<Self> {
        let mut store = Self::new();
        let accepted = store.load(parse_rows(text))?;
        log::info!("Loaded {} cards", accepted);

        let persisted = storage.read().unwrap_or_else(|e| {
            log::warn!("Failed to read saved statuses: {}. Starting unrated.", e);
            StatusMap::new()
        });
        store.merge_persisted_statuses(&persisted);
        Ok(store)
    }

    /// Appends every row that has both a front and a back. Other rows are
    /// skipped. Returns the number of cards accepted; on a duplicate id nothing
    /// is added.
    pub fn load(&mut self, rows: impl IntoIterator<Item = RawRow>) -> Result<usize> {
        let mut seen: HashSet<CardId> = self.cards.iter().map(|c| c.id).collect();
        let mut accepted = Vec::new();

        for row in rows {
            let (Some(front), Some(back)) = (row.front(), row.back()) else {
                log::debug!("Skipping row {}: missing front or back", row.row_number);
                continue;
            };
            let id = row.id();
            if !seen.insert(id) {
                return Err(KiokuError::DuplicateCardId(id));
            }
            accepted.push(Card::new(id, front, back));
        }

        let count = accepted.len();
        self.cards.extend(accepted);
        Ok(count)
    }

    /// Restores saved statuses. Only the first call has an effect.
    pub fn merge_persisted_statuses(&mut self, statuses: &StatusMap) {
        if self.statuses_merged {
            log::warn!("Saved statuses were already merged; ignoring");
            return;
        }
        self.statuses_merged = true;

        let mut restored = 0;
        for card in &mut self.cards {
            if let Some(status) = statuses.get(&card.id) {
                card.status = *status;
                restored += 1;
            }
        }
        log::info!("Restored {} saved statuses", restored);
    }

    pub fn set_status(&mut self, id: CardId, status: Status) -> Result<()> {
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(KiokuError::CardNotFound(id))?;
        card.status = status;
        Ok(())
    }

    pub fn snapshot(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn status_map(&self) -> StatusMap {
        self.cards.iter().map(|c| (c.id, c.status)).collect()
    }

    /// Writes the full status map, overwriting whatever was stored.
    pub fn persist(&self, storage: &mut dyn StatusStorage) -> Result<()> {
        storage.write(&self.status_map())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStatusStorage;

    const SAMPLE: &str =
        "no\tja\ten\n1\t犬\tdog\n2\t猫\tcat\n3\t\tbird\n4\t魚\n\n5\t馬\thorse\n";

    fn row(n: u32, front: &str, back: &str) -> RawRow {
        RawRow::new(n, vec![n.to_string(), front.to_string(), back.to_string()])
    }

    #[test]
    fn test_load_skips_incomplete_rows() {
        let mut store = CardStore::new();
        let rows = parse_rows(SAMPLE);
        let line_count = SAMPLE.lines().count();

        let accepted = store.load(rows).unwrap();

        assert_eq!(accepted, 3);
        assert!(store.len() <= line_count - 1);
        let ids: Vec<u32> = store.snapshot().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![2, 3, 7]);
        assert!(store.snapshot().iter().all(|c| c.status == Status::Unrated));
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let mut store = CardStore::new();
        let err = store.load(vec![row(2, "犬", "dog"), row(2, "猫", "cat")]).unwrap_err();

        assert!(matches!(err, KiokuError::DuplicateCardId(CardId(2))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_merge_restores_matching_ids_only() {
        let mut store = CardStore::new();
        store.load(vec![row(2, "犬", "dog"), row(3, "猫", "cat")]).unwrap();

        let mut saved = StatusMap::new();
        saved.insert(CardId(3), Status::Memorized);
        saved.insert(CardId(99), Status::Unknown);
        store.merge_persisted_statuses(&saved);

        assert_eq!(store.snapshot()[0].status, Status::Unrated);
        assert_eq!(store.snapshot()[1].status, Status::Memorized);
    }

    #[test]
    fn test_second_merge_is_ignored() {
        let mut store = CardStore::new();
        store.load(vec![row(2, "犬", "dog")]).unwrap();
        store.merge_persisted_statuses(&StatusMap::new());

        let mut late = StatusMap::new();
        late.insert(CardId(2), Status::Unknown);
        store.merge_persisted_statuses(&late);

        assert_eq!(store.snapshot()[0].status, Status::Unrated);
    }

    #[test]
    fn test_set_status_unknown_card() {
        let mut store = CardStore::new();
        store.load(vec![row(2, "犬", "dog")]).unwrap();

        let err = store.set_status(CardId(5), Status::Memorized).unwrap_err();
        assert!(matches!(err, KiokuError::CardNotFound(CardId(5))));
    }

    #[test]
    fn test_status_round_trips_through_storage() {
        let mut storage = MemoryStatusStorage::new();
        let mut store = CardStore::open(SAMPLE, &storage).unwrap();

        store.set_status(CardId(3), Status::LearnableProduction).unwrap();
        store.persist(&mut storage).unwrap();

        let reopened = CardStore::open(SAMPLE, &storage).unwrap();
        let card = reopened.snapshot().iter().find(|c| c.id == CardId(3)).unwrap();
        assert_eq!(card.status, Status::LearnableProduction);
        assert_eq!(storage.statuses().len(), reopened.len());
    }

    #[test]
    fn test_persist_keeps_order_and_cards() {
        let mut storage = MemoryStatusStorage::new();
        let store = CardStore::open(SAMPLE, &storage).unwrap();

        store.persist(&mut storage).unwrap();
        store.persist(&mut storage).unwrap();

        let ids: Vec<u32> = storage.statuses().keys().map(|id| id.0).collect();
        assert_eq!(ids, vec![2, 3, 7]);
        let canonical: Vec<u32> = store.snapshot().iter().map(|c| c.id.0).collect();
        assert_eq!(canonical, vec![2, 3, 7]);
    }

    struct FailingStorage;

    impl StatusStorage for FailingStorage {
        fn read(&self) -> Result<StatusMap> {
            Err(KiokuError::Custom("disk on fire".to_string()))
        }

        fn write(&mut self, _statuses: &StatusMap) -> Result<()> {
            Err(KiokuError::Custom("disk on fire".to_string()))
        }
    }

    #[test]
    fn test_failed_read_means_no_saved_statuses() {
        let store = CardStore::open(SAMPLE, &FailingStorage).unwrap();
        assert_eq!(store.len(), 3);
        assert!(store.snapshot().iter().all(|c| c.status == Status::Unrated));
    }
}
