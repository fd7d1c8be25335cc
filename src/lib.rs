pub mod core;
pub mod gui;
pub mod persistence;

pub use crate::core::{
    CardStore,
    KiokuError,
    StudyAction,
    StudySession,
};
