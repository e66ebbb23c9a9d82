pub(crate) mod tweet;
pub(crate) mod user;
