// src/modules/portfolio/application/session/save_coordinator.rs
//
// At most one in-flight save per document. Saves that arrive while one is
// running wait behind it; whoever gets the slot next writes only the newest
// staged snapshot, and waiters whose snapshot was superseded get `Coalesced`.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::modules::portfolio::domain::Document;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome<T> {
    /// This call performed the write.
    Saved(T),
    /// A newer snapshot was written (or is being written) on this call's behalf.
    Coalesced,
}

impl<T> SaveOutcome<T> {
    pub fn is_coalesced(&self) -> bool {
        matches!(self, SaveOutcome::Coalesced)
    }

    pub fn kind(&self) -> SaveOutcomeKind {
        match self {
            SaveOutcome::Saved(_) => SaveOutcomeKind::Saved,
            SaveOutcome::Coalesced => SaveOutcomeKind::Coalesced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveOutcomeKind {
    Saved,
    Coalesced,
}

#[derive(Default)]
struct Slot {
    generation: AtomicU64,
    staged: Mutex<Option<(u64, Document)>>,
    writer: tokio::sync::Mutex<()>,
}

impl Slot {
    fn staged(&self) -> MutexGuard<'_, Option<(u64, Document)>> {
        // A panic while staging cannot leave a half-written Option behind.
        self.staged.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn stage(&self, snapshot: Document) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut staged = self.staged();
        match staged.as_ref() {
            Some((current, _)) if *current > generation => {}
            _ => *staged = Some((generation, snapshot)),
        }
    }

    /// Hands a failed snapshot to the next queued save unless something newer
    /// arrived meanwhile. With no one queued the slot is released and the
    /// snapshot is gone; the caller still holds its document and saves again.
    fn restore(&self, generation: u64, snapshot: Document) {
        let mut staged = self.staged();
        if staged.is_none() {
            *staged = Some((generation, snapshot));
        }
    }
}

#[derive(Default)]
pub struct SaveCoordinator {
    slots: Mutex<HashMap<Uuid, Arc<Slot>>>,
}

impl SaveCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents with a save running or queued.
    pub fn active(&self) -> usize {
        self.slots().len()
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<Uuid, Arc<Slot>>> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn acquire(&self, key: Uuid) -> Arc<Slot> {
        self.slots().entry(key).or_default().clone()
    }

    fn release(&self, key: Uuid, slot: Arc<Slot>) {
        let mut slots = self.slots();
        // One reference in the map, one held here: nobody else is queued.
        if Arc::strong_count(&slot) == 2 {
            slots.remove(&key);
        }
    }

    /// Stages `snapshot` for `key` and runs `write` on the newest staged
    /// snapshot once no other save for `key` is in flight.
    pub async fn save<T, E, F, Fut>(
        &self,
        key: Uuid,
        snapshot: Document,
        write: F,
    ) -> Result<SaveOutcome<T>, E>
    where
        F: FnOnce(Document) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let slot = self.acquire(key);
        slot.stage(snapshot);

        let result = {
            let _writer = slot.writer.lock().await;
            let next = slot.staged().take();

            match next {
                None => {
                    debug!(key = %key, "Save coalesced into a newer snapshot");
                    Ok(SaveOutcome::Coalesced)
                }
                Some((generation, latest)) => {
                    let retry = latest.clone();
                    match write(latest).await {
                        Ok(saved) => Ok(SaveOutcome::Saved(saved)),
                        Err(e) => {
                            slot.restore(generation, retry);
                            Err(e)
                        }
                    }
                }
            }
        };

        self.release(key, slot);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use crate::modules::portfolio::domain::Profile;

    fn named(name: &str) -> Document {
        Document {
            profile: Profile {
                name: name.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn single_save_writes_its_snapshot() {
        let coordinator = SaveCoordinator::new();

        let outcome: Result<_, ()> = coordinator
            .save(Uuid::new_v4(), named("Ada"), |doc| async move { Ok(doc.profile.name) })
            .await;

        assert_eq!(outcome, Ok(SaveOutcome::Saved("Ada".to_string())));
        assert_eq!(coordinator.active(), 0);
    }

    #[tokio::test]
    async fn queued_saves_coalesce_into_latest_snapshot() {
        let coordinator = Arc::new(SaveCoordinator::new());
        let key = Uuid::new_v4();
        let concurrent = Arc::new(AtomicUsize::new(0));
        let max_concurrent = Arc::new(AtomicUsize::new(0));
        let written = Arc::new(Mutex::new(Vec::<String>::new()));

        let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();

        // First save holds the slot until released.
        let first = {
            let coordinator = coordinator.clone();
            let written = written.clone();
            tokio::spawn(async move {
                coordinator
                    .save(key, named("v1"), |doc| async move {
                        let _ = release_rx.await;
                        written.lock().unwrap().push(doc.profile.name);
                        Ok::<_, ()>(())
                    })
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        let mut waiters = Vec::new();
        for name in ["v2", "v3", "v4"] {
            let coordinator = coordinator.clone();
            let written = written.clone();
            let concurrent = concurrent.clone();
            let max_concurrent = max_concurrent.clone();
            waiters.push(tokio::spawn(async move {
                coordinator
                    .save(key, named(name), |doc| async move {
                        let now = concurrent.fetch_add(1, Ordering::SeqCst) + 1;
                        max_concurrent.fetch_max(now, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(5)).await;
                        written.lock().unwrap().push(doc.profile.name);
                        concurrent.fetch_sub(1, Ordering::SeqCst);
                        Ok::<_, ()>(())
                    })
                    .await
            }));
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        release_tx.send(()).unwrap();

        assert_eq!(first.await.unwrap(), Ok(SaveOutcome::Saved(())));

        let mut saved = 0;
        let mut coalesced = 0;
        for waiter in waiters {
            match waiter.await.unwrap() {
                Ok(SaveOutcome::Saved(())) => saved += 1,
                Ok(SaveOutcome::Coalesced) => coalesced += 1,
                Err(()) => panic!("save failed"),
            }
        }

        assert_eq!(saved, 1);
        assert_eq!(coalesced, 2);
        assert_eq!(*written.lock().unwrap(), vec!["v1".to_string(), "v4".to_string()]);
        assert!(max_concurrent.load(Ordering::SeqCst) <= 1);
        assert_eq!(coordinator.active(), 0);
    }

    #[tokio::test]
    async fn failed_snapshot_is_retried_by_next_waiter() {
        let coordinator = Arc::new(SaveCoordinator::new());
        let key = Uuid::new_v4();
        let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();

        let failing = {
            let coordinator = coordinator.clone();
            tokio::spawn(async move {
                coordinator
                    .save(key, named("first"), |_| async move {
                        let _ = release_rx.await;
                        Err::<String, _>("connection reset".to_string())
                    })
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        // Queued while the first write is still running. Its own snapshot
        // is older than nothing, so it becomes the staged one.
        let waiter = {
            let coordinator = coordinator.clone();
            tokio::spawn(async move {
                coordinator
                    .save(key, named("second"), |doc| async move {
                        Ok::<_, String>(doc.profile.name)
                    })
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(5)).await;

        release_tx.send(()).unwrap();

        assert_eq!(failing.await.unwrap(), Err("connection reset".to_string()));
        assert_eq!(
            waiter.await.unwrap(),
            Ok(SaveOutcome::Saved("second".to_string()))
        );
    }

    #[tokio::test]
    async fn failure_with_no_waiter_releases_slot_and_next_save_writes_its_own() {
        let coordinator = SaveCoordinator::new();
        let key = Uuid::new_v4();

        let failed: Result<SaveOutcome<()>, &str> = coordinator
            .save(key, named("draft"), |_| async { Err("down") })
            .await;
        assert!(failed.is_err());
        assert_eq!(coordinator.active(), 0);

        let retried: Result<_, &str> = coordinator
            .save(key, named("draft v2"), |doc| async move { Ok(doc.profile.name) })
            .await;
        assert_eq!(retried, Ok(SaveOutcome::Saved("draft v2".to_string())));
    }

    #[tokio::test]
    async fn different_documents_do_not_block_each_other() {
        let coordinator = Arc::new(SaveCoordinator::new());
        let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();

        let blocked = {
            let coordinator = coordinator.clone();
            tokio::spawn(async move {
                coordinator
                    .save(Uuid::new_v4(), named("a"), |_| async move {
                        let _ = release_rx.await;
                        Ok::<_, ()>(())
                    })
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;

        let other: Result<_, ()> = tokio::time::timeout(
            Duration::from_secs(1),
            coordinator.save(Uuid::new_v4(), named("b"), |_| async { Ok(()) }),
        )
        .await
        .expect("independent document should not wait");

        assert_eq!(other, Ok(SaveOutcome::Saved(())));
        assert_eq!(coordinator.active(), 1);

        release_tx.send(()).unwrap();
        blocked.await.unwrap().unwrap();
        assert_eq!(coordinator.active(), 0);
    }

    #[test]
    fn outcome_kind_serializes_lowercase() {
        let outcome: SaveOutcome<()> = SaveOutcome::Coalesced;
        assert!(outcome.is_coalesced());
        assert_eq!(
            serde_json::to_value(outcome.kind()).unwrap(),
            serde_json::json!("coalesced")
        );
    }
}
