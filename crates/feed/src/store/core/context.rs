use crate::store::domains::follower_store::FollowerStore;
use crate::store::domains::tweet_store::TweetStore;
use crate::store::domains::user_store::UserStore;
use shared::store::SqliteStore;
use std::sync::Arc;

pub struct StoreContext {
    pub user_store: Arc<UserStore>,
    pub follower_store: Arc<FollowerStore>,
    pub tweet_store: Arc<TweetStore>,
    pub sqlite: Arc<SqliteStore>,
}

impl StoreContext {
    pub fn new(store: Arc<SqliteStore>) -> Self {
        Self {
            user_store: Arc::new(UserStore::new(store.clone())),
            follower_store: Arc::new(FollowerStore::new(store.clone())),
            tweet_store: Arc::new(TweetStore::new(store.clone())),
            sqlite: store,
        }
    }
}
