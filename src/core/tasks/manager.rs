use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    core::{
        errors::{
            KiokuError,
            Result,
        },
        http::fetch_source,
        session::StudySession,
    },
    persistence::StatusStorage,
};

pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Result<Self> {
        let runtime = Arc::new(
            Runtime::new()
                .map_err(|e| KiokuError::Custom(format!("Failed to create runtime: {e}")))?,
        );

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender })
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Fetches the word list and builds a session over `storage` in the
    /// background. The outcome arrives as `TaskResult::DeckLoaded`.
    pub fn load_deck(&self, location: String, storage: Box<dyn StatusStorage>) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ =
                sender.send(TaskResult::LoadingMessage("単語リストを読み込み中...".to_string()));

            let result: std::result::Result<StudySession, String> = runtime.block_on(async {
                let text = fetch_source(&location).await.map_err(|e| e.to_string())?;
                StudySession::open(&text, storage).map_err(|e| e.to_string())
            });

            if let Err(e) = &result {
                log::error!("Failed to load word list from {}: {}", location, e);
            }

            let _ = sender.send(TaskResult::DeckLoaded(result));
        });
    }
}
