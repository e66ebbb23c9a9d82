pub(crate) mod follower_store;
pub(crate) mod tweet_store;
pub(crate) mod user_store;
