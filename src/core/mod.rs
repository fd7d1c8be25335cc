pub mod errors;
pub mod http;
pub mod models;
pub mod session;
pub mod source;
pub mod store;
pub mod tasks;
pub mod view;

pub use errors::{
    KiokuError,
    Result,
};
pub use models::{
    Card,
    CardId,
    CardView,
    LearningStatus,
    Side,
    Status,
    StudyFilter,
};
pub use session::{
    StudyAction,
    StudySession,
};
pub use store::CardStore;
