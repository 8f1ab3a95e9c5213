//! In-memory run store

use chrono::Utc;

use super::{GameRun, RunStore, RunSubmission, SubmitError};

/// Vec-backed store with sequential ids
#[derive(Debug, Clone, Default)]
pub struct MemoryRunStore {
    runs: Vec<GameRun>,
    next_id: u64,
}

impl MemoryRunStore {
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            next_id: 1,
        }
    }

    /// Store a run with an explicit creation timestamp (ms)
    pub fn submit_run_at(
        &mut self,
        player_name: &str,
        score: i64,
        duration_seconds: i64,
        created_at: i64,
    ) -> Result<GameRun, SubmitError> {
        let submission = match RunSubmission::new(player_name, score, duration_seconds) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Rejected run from {:?}: {}", player_name, e);
                return Err(e);
            }
        };

        let run = GameRun {
            id: self.next_id.max(1),
            player_name: submission.player_name,
            score: submission.score,
            duration_seconds: submission.duration_seconds,
            created_at,
        };
        self.next_id = run.id + 1;
        log::info!("Stored run #{} ({}: {})", run.id, run.player_name, run.score);
        self.runs.push(run.clone());
        Ok(run)
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl RunStore for MemoryRunStore {
    fn submit_run(
        &mut self,
        player_name: &str,
        score: i64,
        duration_seconds: i64,
    ) -> Result<GameRun, SubmitError> {
        let now = Utc::now().timestamp_millis();
        self.submit_run_at(player_name, score, duration_seconds, now)
    }

    fn runs(&self) -> &[GameRun] {
        &self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_and_order() {
        let mut store = MemoryRunStore::new();
        let a = store.submit_run_at("A", 10, 10, 100).unwrap();
        let b = store.submit_run_at("B", 5, 5, 200).unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(store.len(), 2);
        assert_eq!(store.runs()[1].player_name, "B");
    }

    #[test]
    fn test_rejected_runs_not_stored() {
        let mut store = MemoryRunStore::default();
        assert!(store.submit_run("", 1, 1).is_err());
        assert!(store.submit_run("A", -1, 1).is_err());
        assert!(store.is_empty());

        // Default-constructed store still starts at id 1
        let run = store.submit_run("A", 1, 1).unwrap();
        assert_eq!(run.id, 1);
        assert!(run.created_at > 0);
    }
}
