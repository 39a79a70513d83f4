//! Property tests for like set semantics.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

use postfeed::adapters::memory::InMemoryLikeStore;
use postfeed::domain::models::ActorId;
use postfeed::domain::ports::LikeStore;
use postfeed::LikeTracker;

#[derive(Debug, Clone)]
enum Op {
    Like(u8),
    Unlike(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![(0u8..8).prop_map(Op::Like), (0u8..8).prop_map(Op::Unlike)]
}

fn actor(n: u8) -> ActorId {
    ActorId::parse(&n.to_string()).unwrap()
}

proptest! {
    #[test]
    fn repeated_likes_count_once(actor_id in 0u8..50, repeats in 1usize..10) {
        let store = Arc::new(InMemoryLikeStore::new());
        let tracker = LikeTracker::new(store.clone());
        let actor = actor(actor_id);

        let (count, member) = tokio_test::block_on(async {
            for _ in 0..repeats {
                tracker.like(1, &actor).await.unwrap();
            }
            (store.cardinality(1).await.unwrap(), store.is_member(1, &actor).await.unwrap())
        });

        prop_assert_eq!(count, 1);
        prop_assert!(member);
    }

    #[test]
    fn like_store_matches_set_model(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let store = Arc::new(InMemoryLikeStore::new());
        let tracker = LikeTracker::new(store.clone());
        let mut model = HashSet::new();

        let count = tokio_test::block_on(async {
            for op in &ops {
                match *op {
                    Op::Like(n) => {
                        tracker.like(7, &actor(n)).await.unwrap();
                        model.insert(n);
                    }
                    Op::Unlike(n) => {
                        tracker.unlike(7, &actor(n)).await.unwrap();
                        model.remove(&n);
                    }
                }
            }
            store.cardinality(7).await.unwrap()
        });

        prop_assert_eq!(count, model.len() as u64);
    }
}
