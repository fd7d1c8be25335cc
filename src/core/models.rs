use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// Label shown when there is no card (or no status) to describe.
pub const PLACEHOLDER_LABEL: &str = "-";

/// Text shown in place of a card when the working set is empty.
pub const EMPTY_DECK_TEXT: &str = "カードがありません";

/// Spreadsheet row number of a card. The header is row 1, so the first
/// data line is row 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "unrated")]
    Unrated,
    #[serde(rename = "make")]
    LearnableProduction,
    #[serde(rename = "memorized")]
    Memorized,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Status {
    pub const ALL: [Status; 4] =
        [Status::Unrated, Status::LearnableProduction, Status::Memorized, Status::Unknown];

    /// Key used in the persisted status map.
    pub fn key(&self) -> &'static str {
        match self {
            Status::Unrated => "unrated",
            Status::LearnableProduction => "make",
            Status::Memorized => "memorized",
            Status::Unknown => "unknown",
        }
    }

    pub fn from_key(key: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|status| status.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Unrated => "未分類",
            Status::LearnableProduction => "英作文できる",
            Status::Memorized => "暗記した",
            Status::Unknown => "覚えてない",
        }
    }
}

/// A status a learner can assign. `Unrated` is only ever the initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LearningStatus {
    LearnableProduction,
    Memorized,
    Unknown,
}

impl LearningStatus {
    pub const ALL: [LearningStatus; 3] =
        [LearningStatus::LearnableProduction, LearningStatus::Memorized, LearningStatus::Unknown];

    pub fn status(self) -> Status {
        match self {
            LearningStatus::LearnableProduction => Status::LearnableProduction,
            LearningStatus::Memorized => Status::Memorized,
            LearningStatus::Unknown => Status::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        self.status().label()
    }
}

impl From<LearningStatus> for Status {
    fn from(status: LearningStatus) -> Self {
        status.status()
    }
}

/// Total label mapping; `None` renders as the placeholder.
pub fn status_label(status: Option<Status>) -> &'static str {
    status.map(|s| s.label()).unwrap_or(PLACEHOLDER_LABEL)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub front: String,
    pub back: String,
    pub status: Status,
}

impl Card {
    pub fn new(id: CardId, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self { id, front: front.into(), back: back.into(), status: Status::Unrated }
    }

    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Back,
}

impl Side {
    pub fn flipped(self) -> Self {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StudyFilter {
    #[default]
    All,
    LearnableProduction,
    Memorized,
    Unknown,
}

impl StudyFilter {
    pub const ALL: [StudyFilter; 4] = [
        StudyFilter::All,
        StudyFilter::LearnableProduction,
        StudyFilter::Memorized,
        StudyFilter::Unknown,
    ];

    /// Status a card must have to pass this filter; `None` passes everything.
    pub fn status(&self) -> Option<Status> {
        match self {
            StudyFilter::All => None,
            StudyFilter::LearnableProduction => Some(Status::LearnableProduction),
            StudyFilter::Memorized => Some(Status::Memorized),
            StudyFilter::Unknown => Some(Status::Unknown),
        }
    }

    pub fn matches(&self, card: &Card) -> bool {
        self.status().map_or(true, |status| card.status == status)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StudyFilter::All => "すべて",
            StudyFilter::LearnableProduction => Status::LearnableProduction.label(),
            StudyFilter::Memorized => Status::Memorized.label(),
            StudyFilter::Unknown => Status::Unknown.label(),
        }
    }
}

/// Read-only projection of the session handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub ordinal: usize,
    pub total: usize,
    pub card_id: Option<CardId>,
    pub text: String,
    pub side: Side,
    pub status: Option<Status>,
    pub status_label: &'static str,
}

impl CardView {
    pub fn empty() -> Self {
        Self {
            ordinal: 0,
            total: 0,
            card_id: None,
            text: EMPTY_DECK_TEXT.to_string(),
            side: Side::Front,
            status: None,
            status_label: PLACEHOLDER_LABEL,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
