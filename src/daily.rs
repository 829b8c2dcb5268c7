use crate::dictionary::Dictionary;
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, NaiveTime, Utc};
use serenity::all::ChannelId;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Somewhere a plain message can be posted.
#[async_trait]
pub trait ChannelSink: Send + Sync {
    async fn send(&self, channel: ChannelId, content: &str) -> anyhow::Result<()>;
}

/// Posts the word of the day to one channel, once a day.
pub struct DailyPoster {
    dictionary: Arc<dyn Dictionary>,
    sink: Arc<dyn ChannelSink>,
    channel: Option<ChannelId>,
    post_at: NaiveTime,
}

impl DailyPoster {
    pub fn new(
        dictionary: Arc<dyn Dictionary>,
        sink: Arc<dyn ChannelSink>,
        channel: Option<ChannelId>,
        post_at: NaiveTime,
    ) -> Self {
        Self {
            dictionary,
            sink,
            channel,
            post_at,
        }
    }

    pub async fn run(self) {
        info!("Daily word of the day post scheduled at {} UTC", self.post_at.format("%H:%M"));
        loop {
            let now = Utc::now();
            let next = next_run_after(now, self.post_at);
            let wait = (next - now).to_std().unwrap_or_default();
            debug!("Next daily post at {} (in {:?})", next, wait);
            tokio::time::sleep(wait).await;
            self.post_word_of_the_day().await;
        }
    }

    pub async fn post_word_of_the_day(&self) {
        let Some(channel) = self.channel else {
            debug!("No channel configured, skipping daily post");
            return;
        };

        let word_of_the_day = self.dictionary.word_of_the_day().await;

        match self.sink.send(channel, &word_of_the_day).await {
            Ok(()) => info!("Posted word of the day to channel {}", channel),
            Err(e) => error!("Failed to post word of the day to channel {}: {}", channel, e),
        }
    }
}

/// First instant strictly after `now` whose UTC wall-clock time is `at`.
pub fn next_run_after(now: DateTime<Utc>, at: NaiveTime) -> DateTime<Utc> {
    let today = now.date_naive().and_time(at).and_utc();
    if today > now {
        today
    } else {
        today + ChronoDuration::days(1)
    }
}
