use rand::{
    seq::SliceRandom,
    Rng,
};

use crate::core::models::{
    Card,
    StudyFilter,
};

/// Indices into the canonical card list, in canonical order, of every card
/// that passes `filter`. Always recomputed from scratch.
pub fn apply_filter(cards: &[Card], filter: StudyFilter) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| filter.matches(card))
        .map(|(index, _)| index)
        .collect()
}

/// Uniform in-place permutation (Fisher-Yates).
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;
    use crate::core::models::{
        CardId,
        Status,
    };

    fn deck() -> Vec<Card> {
        let statuses = [
            Status::Unrated,
            Status::Memorized,
            Status::LearnableProduction,
            Status::Memorized,
            Status::Unknown,
            Status::Unrated,
        ];
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let mut card = Card::new(CardId(i as u32 + 2), format!("f{i}"), format!("b{i}"));
                card.status = *status;
                card
            })
            .collect()
    }

    #[test]
    fn test_all_returns_canonical_order() {
        let cards = deck();
        let _ = apply_filter(&cards, StudyFilter::Memorized);
        assert_eq!(apply_filter(&cards, StudyFilter::All), (0..cards.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_status_filter_keeps_order() {
        let cards = deck();
        assert_eq!(apply_filter(&cards, StudyFilter::Memorized), vec![1, 3]);
        assert_eq!(apply_filter(&cards, StudyFilter::Unknown), vec![4]);
        assert!(apply_filter(&[], StudyFilter::Unknown).is_empty());
    }

    #[test]
    fn test_filters_partition_by_status() {
        let cards = deck();
        let mut covered: Vec<usize> = StudyFilter::ALL
            .iter()
            .filter(|f| **f != StudyFilter::All)
            .flat_map(|f| apply_filter(&cards, *f))
            .collect();
        let unrated: Vec<usize> = cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.status == Status::Unrated)
            .map(|(i, _)| i)
            .collect();
        covered.extend(unrated);
        covered.sort();

        assert_eq!(covered, apply_filter(&cards, StudyFilter::All));
        for filter in StudyFilter::ALL {
            for index in apply_filter(&cards, filter) {
                assert!(filter.matches(&cards[index]));
            }
        }
    }

    #[test]
    fn test_shuffle_preserves_membership() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<usize> = (0..50).collect();
        shuffle(&mut items, &mut rng);

        assert_eq!(items.len(), 50);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_first_element_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 4];
        let trials = 8000;

        for _ in 0..trials {
            let mut items = [0usize, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            counts[items[0]] += 1;
        }

        // Expected 2000 each; allow a wide margin.
        for count in counts {
            assert!((1700..=2300).contains(&count), "skewed counts: {:?}", counts);
        }
    }
}
