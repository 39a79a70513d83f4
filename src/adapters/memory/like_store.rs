//! Process-local like sets.
//!
//! Counts every call as one round trip so batching can be verified, and can
//! be told to fail reads or writes to exercise the degradation policies.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ActorId, LikeSummary, PostId};
use crate::domain::ports::LikeStore;

#[derive(Default)]
pub struct InMemoryLikeStore {
    sets: RwLock<HashMap<PostId, HashSet<String>>>,
    round_trips: AtomicU64,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryLikeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls made against the store so far.
    pub fn round_trips(&self) -> u64 {
        self.round_trips.load(Ordering::SeqCst)
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Whether a set currently exists for the post.
    pub async fn has_set(&self, post_id: PostId) -> bool {
        self.sets.read().await.contains_key(&post_id)
    }

    fn begin_read(&self) -> DomainResult<()> {
        self.round_trips.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::CacheError("like store read failed".to_string()));
        }
        Ok(())
    }

    fn begin_write(&self) -> DomainResult<()> {
        self.round_trips.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::CacheError("like store write failed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl LikeStore for InMemoryLikeStore {
    async fn add_member(&self, post_id: PostId, actor: &ActorId) -> DomainResult<()> {
        self.begin_write()?;
        self.sets
            .write()
            .await
            .entry(post_id)
            .or_default()
            .insert(actor.as_str().to_string());
        Ok(())
    }

    async fn remove_member(&self, post_id: PostId, actor: &ActorId) -> DomainResult<()> {
        self.begin_write()?;
        let mut sets = self.sets.write().await;
        if let Some(members) = sets.get_mut(&post_id) {
            members.remove(actor.as_str());
            // Redis drops a set once its last member is removed.
            if members.is_empty() {
                sets.remove(&post_id);
            }
        }
        Ok(())
    }

    async fn cardinality(&self, post_id: PostId) -> DomainResult<u64> {
        self.begin_read()?;
        let sets = self.sets.read().await;
        Ok(sets.get(&post_id).map_or(0, |members| members.len() as u64))
    }

    async fn is_member(&self, post_id: PostId, actor: &ActorId) -> DomainResult<bool> {
        self.begin_read()?;
        let sets = self.sets.read().await;
        Ok(sets.get(&post_id).is_some_and(|members| members.contains(actor.as_str())))
    }

    async fn delete_set(&self, post_id: PostId) -> DomainResult<()> {
        self.begin_write()?;
        self.sets.write().await.remove(&post_id);
        Ok(())
    }

    async fn fetch_batch(
        &self,
        post_ids: &[PostId],
        actor: Option<&ActorId>,
    ) -> DomainResult<Vec<LikeSummary>> {
        self.begin_read()?;
        let sets = self.sets.read().await;

        Ok(post_ids
            .iter()
            .map(|post_id| {
                let members = sets.get(post_id);
                let count = members.map_or(0, |m| m.len() as u64);
                let liked = match (members, actor) {
                    (Some(m), Some(actor)) => m.contains(actor.as_str()),
                    _ => false,
                };
                LikeSummary::new(count, liked)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(id: &str) -> ActorId {
        ActorId::parse(id).unwrap()
    }

    #[tokio::test]
    async fn test_membership_is_idempotent() {
        let store = InMemoryLikeStore::new();

        store.add_member(1, &actor("42")).await.unwrap();
        store.add_member(1, &actor("42")).await.unwrap();
        assert_eq!(store.cardinality(1).await.unwrap(), 1);
        assert!(store.is_member(1, &actor("42")).await.unwrap());

        store.remove_member(1, &actor("7")).await.unwrap();
        assert_eq!(store.cardinality(1).await.unwrap(), 1);

        store.remove_member(1, &actor("42")).await.unwrap();
        assert_eq!(store.cardinality(1).await.unwrap(), 0);
        assert!(!store.has_set(1).await);
    }

    #[tokio::test]
    async fn test_batch_is_one_round_trip() {
        let store = InMemoryLikeStore::new();
        store.add_member(2, &actor("a")).await.unwrap();
        store.add_member(2, &actor("b")).await.unwrap();
        let before = store.round_trips();

        let summaries = store.fetch_batch(&[1, 2, 3], Some(&actor("b"))).await.unwrap();
        assert_eq!(store.round_trips() - before, 1);
        assert_eq!(
            summaries,
            vec![LikeSummary::new(0, false), LikeSummary::new(2, true), LikeSummary::new(0, false)]
        );
    }

    #[tokio::test]
    async fn test_batch_without_actor_reports_no_membership() {
        let store = InMemoryLikeStore::new();
        store.add_member(5, &actor("a")).await.unwrap();

        let summaries = store.fetch_batch(&[5], None).await.unwrap();
        assert_eq!(summaries, vec![LikeSummary::new(1, false)]);
    }

    #[tokio::test]
    async fn test_delete_set() {
        let store = InMemoryLikeStore::new();
        store.add_member(9, &actor("a")).await.unwrap();

        store.delete_set(9).await.unwrap();
        assert!(!store.has_set(9).await);
        assert_eq!(store.cardinality(9).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let store = InMemoryLikeStore::new();
        store.set_fail_writes(true);
        assert!(store.add_member(1, &actor("a")).await.is_err());
        assert!(!store.has_set(1).await);

        store.set_fail_reads(true);
        assert!(store.fetch_batch(&[1], None).await.is_err());
        assert!(store.cardinality(1).await.is_err());
    }
}
