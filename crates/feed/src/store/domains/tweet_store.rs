use crate::models::tweet::{FeedTweet, ReplyView, TweetSummary};
use rusqlite::{params, Row};
use shared::store::{SqliteStore, StoreError};
use std::sync::Arc;

const SUMMARY_COLUMNS: &str = "tweet.tweet,
    (SELECT COUNT(*) FROM \"like\" WHERE \"like\".tweet_id = tweet.tweet_id) AS likes,
    (SELECT COUNT(*) FROM reply WHERE reply.tweet_id = tweet.tweet_id) AS replies,
    tweet.date_time";

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<TweetSummary> {
    Ok(TweetSummary {
        tweet: row.get(0)?,
        likes: row.get(1)?,
        replies: row.get(2)?,
        date_time: row.get(3)?,
    })
}

pub struct TweetStore {
    sqlite: Arc<SqliteStore>,
}

impl TweetStore {
    pub fn new(sqlite: Arc<SqliteStore>) -> Self {
        Self { sqlite }
    }

    /// Latest tweets from accounts `viewer_id` follows, newest first.
    pub fn feed(&self, viewer_id: i64, limit: i64) -> Result<Vec<FeedTweet>, StoreError> {
        self.sqlite.query_all(
            "SELECT user.username, tweet.tweet, tweet.date_time
             FROM tweet
             INNER JOIN follower ON tweet.user_id = follower.following_user_id
             INNER JOIN user ON user.user_id = tweet.user_id
             WHERE follower.follower_user_id = ?
             ORDER BY tweet.date_time DESC, tweet.tweet_id DESC
             LIMIT ?",
            params![viewer_id, limit],
            |row| {
                Ok(FeedTweet {
                    username: row.get(0)?,
                    tweet: row.get(1)?,
                    date_time: row.get(2)?,
                })
            },
        )
    }

    /// True when the tweet exists and its author is followed by `viewer_id`.
    pub fn is_visible_to(&self, viewer_id: i64, tweet_id: i64) -> Result<bool, StoreError> {
        let found: Option<i64> = self.sqlite.query_row(
            "SELECT tweet.user_id
             FROM tweet
             INNER JOIN follower ON tweet.user_id = follower.following_user_id
             WHERE follower.follower_user_id = ? AND tweet.tweet_id = ?
             LIMIT 1",
            params![viewer_id, tweet_id],
            |row| row.get(0),
        )?;
        Ok(found.is_some())
    }

    /// The tweet's summary, only if its author is followed by `viewer_id`.
    pub fn visible_summary(
        &self,
        viewer_id: i64,
        tweet_id: i64,
    ) -> Result<Option<TweetSummary>, StoreError> {
        let sql = format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM tweet
             INNER JOIN follower ON tweet.user_id = follower.following_user_id
             WHERE follower.follower_user_id = ? AND tweet.tweet_id = ?
             LIMIT 1"
        );
        self.sqlite
            .query_row(&sql, params![viewer_id, tweet_id], summary_from_row)
    }

    pub fn tweets_by(&self, user_id: i64) -> Result<Vec<TweetSummary>, StoreError> {
        let sql = format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM tweet
             WHERE tweet.user_id = ?
             ORDER BY tweet.tweet_id"
        );
        self.sqlite.query_all(&sql, params![user_id], summary_from_row)
    }

    /// Usernames of everyone who liked the tweet.
    pub fn likers(&self, tweet_id: i64) -> Result<Vec<String>, StoreError> {
        self.sqlite.query_all(
            "SELECT user.username
             FROM \"like\"
             INNER JOIN user ON \"like\".user_id = user.user_id
             WHERE \"like\".tweet_id = ?
             ORDER BY \"like\".like_id",
            params![tweet_id],
            |row| row.get(0),
        )
    }

    pub fn replies(&self, tweet_id: i64) -> Result<Vec<ReplyView>, StoreError> {
        self.sqlite.query_all(
            "SELECT user.name, reply.reply
             FROM reply
             INNER JOIN user ON reply.user_id = user.user_id
             WHERE reply.tweet_id = ?
             ORDER BY reply.reply_id",
            params![tweet_id],
            |row| {
                Ok(ReplyView {
                    name: row.get(0)?,
                    reply: row.get(1)?,
                })
            },
        )
    }

    /// Inserts a tweet owned by `username` in a single statement. Returns
    /// false when no such user exists.
    pub fn create_for(
        &self,
        username: &str,
        text: Option<&str>,
        date_time: &str,
    ) -> Result<bool, StoreError> {
        let inserted = self.sqlite.execute(
            "INSERT INTO tweet (tweet, user_id, date_time)
             SELECT ?, user_id, ? FROM user WHERE username = ?",
            params![text, date_time, username],
        )?;
        Ok(inserted == 1)
    }

    /// Deletes the tweet only when `owner_id` authored it.
    pub fn delete_owned(&self, tweet_id: i64, owner_id: i64) -> Result<bool, StoreError> {
        let deleted = self.sqlite.execute(
            "DELETE FROM tweet WHERE tweet_id = ? AND user_id = ?",
            params![tweet_id, owner_id],
        )?;
        Ok(deleted > 0)
    }

    // The API has no like or reply routes; these seed fixtures.
    #[cfg(test)]
    pub fn add_like(&self, user_id: i64, tweet_id: i64, date_time: &str) -> Result<(), StoreError> {
        self.sqlite.execute(
            "INSERT INTO \"like\" (tweet_id, user_id, date_time) VALUES (?, ?, ?)",
            params![tweet_id, user_id, date_time],
        )?;
        Ok(())
    }

    #[cfg(test)]
    pub fn add_reply(
        &self,
        user_id: i64,
        tweet_id: i64,
        text: &str,
        date_time: &str,
    ) -> Result<(), StoreError> {
        self.sqlite.execute(
            "INSERT INTO reply (tweet_id, reply, user_id, date_time) VALUES (?, ?, ?, ?)",
            params![tweet_id, text, user_id, date_time],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::schema::apply_schema;

    // ann(1) follows bob(2); cid(3) is followed by nobody
    fn seeded() -> TweetStore {
        let sqlite = Arc::new(SqliteStore::open_in_memory().unwrap());
        apply_schema(&sqlite).unwrap();
        for (name, username) in [("Ann", "ann"), ("Bob", "bob"), ("Cid", "cid")] {
            sqlite
                .execute(
                    "INSERT INTO user (name, username, password) VALUES (?, ?, 'x')",
                    params![name, username],
                )
                .unwrap();
        }
        sqlite
            .execute(
                "INSERT INTO follower (follower_user_id, following_user_id) VALUES (1, 2)",
                [],
            )
            .unwrap();
        TweetStore::new(sqlite)
    }

    #[test]
    fn test_feed_is_limited_and_newest_first() {
        let store = seeded();
        for day in 1..=6 {
            let stamp = format!("2021-04-0{day} 10:00:00");
            assert!(store
                .create_for("bob", Some(&format!("bob {day}")), &stamp)
                .unwrap());
        }
        store
            .create_for("cid", Some("unfollowed"), "2021-04-09 10:00:00")
            .unwrap();

        let feed = store.feed(1, 4).unwrap();
        let texts: Vec<&str> = feed.iter().filter_map(|t| t.tweet.as_deref()).collect();
        assert_eq!(texts, vec!["bob 6", "bob 5", "bob 4", "bob 3"]);
        assert!(feed.iter().all(|t| t.username == "bob"));
    }

    #[test]
    fn test_create_for_unknown_user() {
        let store = seeded();
        assert!(!store.create_for("ghost", Some("boo"), "2021-04-01 10:00:00").unwrap());
    }

    #[test]
    fn test_visibility_follows_follower_edge() {
        let store = seeded();
        store.create_for("bob", Some("visible"), "2021-04-01 10:00:00").unwrap();
        store.create_for("cid", Some("hidden"), "2021-04-01 10:00:00").unwrap();

        assert!(store.is_visible_to(1, 1).unwrap());
        assert!(!store.is_visible_to(1, 2).unwrap());
        assert!(!store.is_visible_to(1, 99).unwrap());
        assert!(store.visible_summary(1, 2).unwrap().is_none());
    }

    #[test]
    fn test_summary_counts_likes_and_replies() {
        let store = seeded();
        store.create_for("bob", Some("hello"), "2021-04-01 10:00:00").unwrap();
        store.add_like(1, 1, "2021-04-01 11:00:00").unwrap();
        store.add_like(3, 1, "2021-04-01 11:00:00").unwrap();
        store.add_reply(1, 1, "hi bob", "2021-04-01 12:00:00").unwrap();

        let summary = store.visible_summary(1, 1).unwrap().unwrap();
        assert_eq!(summary.tweet.as_deref(), Some("hello"));
        assert_eq!(summary.likes, 2);
        assert_eq!(summary.replies, 1);
        assert_eq!(summary.date_time.as_deref(), Some("2021-04-01 10:00:00"));

        assert_eq!(store.likers(1).unwrap(), vec!["ann", "cid"]);
        let replies = store.replies(1).unwrap();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].name.as_deref(), Some("Ann"));
        assert_eq!(replies[0].reply.as_deref(), Some("hi bob"));

        assert_eq!(store.tweets_by(2).unwrap(), vec![summary]);
    }

    #[test]
    fn test_null_columns_are_read_as_none() {
        let store = seeded();
        assert!(store
            .create_for("bob", None, "2021-04-01 10:00:00")
            .unwrap());
        store
            .sqlite
            .execute(
                "INSERT INTO tweet (tweet, user_id, date_time) VALUES ('undated', 2, NULL)",
                [],
            )
            .unwrap();
        store
            .sqlite
            .execute(
                "INSERT INTO reply (tweet_id, reply, user_id, date_time) VALUES (1, NULL, 1, NULL)",
                [],
            )
            .unwrap();

        let own = store.tweets_by(2).unwrap();
        assert_eq!(own.len(), 2);
        assert_eq!(own[0].tweet, None);
        assert_eq!(own[0].replies, 1);
        assert_eq!(own[1].date_time, None);

        assert_eq!(store.feed(1, 4).unwrap().len(), 2);
        assert_eq!(store.replies(1).unwrap()[0].reply, None);
    }

    #[test]
    fn test_delete_owned_only() {
        let store = seeded();
        store.create_for("bob", Some("mine"), "2021-04-01 10:00:00").unwrap();

        assert!(!store.delete_owned(1, 1).unwrap());
        assert_eq!(store.tweets_by(2).unwrap().len(), 1);

        assert!(store.delete_owned(1, 2).unwrap());
        assert!(store.tweets_by(2).unwrap().is_empty());
        assert!(!store.delete_owned(1, 2).unwrap());
    }
}
