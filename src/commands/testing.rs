//! In-memory fakes for handler tests.

use super::{ReplyError, ReplyHandle, Services};
use crate::dictionary::{Dictionary, EtymologyLookupError};
use crate::llm::{CompletionError, WordFinder};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

pub fn services(dictionary: Arc<FakeDictionary>, finder: FakeFinder) -> Services {
    Services {
        dictionary,
        finder: Arc::new(finder),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyEvent {
    Defer,
    Respond(String),
    Edit(String),
    FollowUp(String),
}

#[derive(Clone)]
pub struct FakeReply {
    events: Arc<Mutex<Vec<ReplyEvent>>>,
    edited: Arc<Notify>,
    fail_edits: bool,
}

impl FakeReply {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            edited: Arc::new(Notify::new()),
            fail_edits: false,
        }
    }

    pub fn failing_edits() -> Self {
        Self {
            fail_edits: true,
            ..Self::new()
        }
    }

    pub fn events(&self) -> Vec<ReplyEvent> {
        self.events.lock().unwrap().clone()
    }

    pub async fn wait_for_edit(&self, timeout: Duration) {
        tokio::time::timeout(timeout, self.edited.notified())
            .await
            .expect("timed out waiting for the deferred response to be edited");
    }

    fn record(&self, event: ReplyEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ReplyHandle for FakeReply {
    async fn defer(&self) -> Result<(), ReplyError> {
        self.record(ReplyEvent::Defer);
        Ok(())
    }

    async fn respond(&self, content: &str) -> Result<(), ReplyError> {
        self.record(ReplyEvent::Respond(content.to_string()));
        Ok(())
    }

    async fn edit(&self, content: &str) -> Result<(), ReplyError> {
        self.record(ReplyEvent::Edit(content.to_string()));
        self.edited.notify_one();
        if self.fail_edits {
            return Err(ReplyError::Other("unknown webhook".to_string()));
        }
        Ok(())
    }

    async fn follow_up(&self, content: &str) -> Result<(), ReplyError> {
        self.record(ReplyEvent::FollowUp(content.to_string()));
        Ok(())
    }
}

pub struct FakeDictionary {
    word_of_the_day: String,
    definition: String,
    etymologies: Mutex<Option<Result<Vec<String>, EtymologyLookupError>>>,
    calls: AtomicUsize,
    looked_up: Mutex<Vec<String>>,
}

impl FakeDictionary {
    pub const WORD_OF_THE_DAY: &'static str = "📖 **Word of the Day**: **lucent**";
    pub const DEFINITION: &'static str = "📖 **lucent**\n**1.** *(adjective)* shining\n";

    pub fn with_word_of_the_day(mut self, text: &str) -> Self {
        self.word_of_the_day = text.to_string();
        self
    }

    pub fn with_definition(mut self, text: &str) -> Self {
        self.definition = text.to_string();
        self
    }

    /// The error variant is returned once, later calls get an empty list.
    pub fn with_etymologies(self, result: Result<Vec<String>, EtymologyLookupError>) -> Self {
        *self.etymologies.lock().unwrap() = Some(result);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn looked_up(&self) -> Vec<String> {
        self.looked_up.lock().unwrap().clone()
    }
}

impl Default for FakeDictionary {
    fn default() -> Self {
        Self {
            word_of_the_day: Self::WORD_OF_THE_DAY.to_string(),
            definition: Self::DEFINITION.to_string(),
            etymologies: Mutex::new(None),
            calls: AtomicUsize::new(0),
            looked_up: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Dictionary for FakeDictionary {
    async fn word_of_the_day(&self) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.word_of_the_day.clone()
    }

    async fn definitions(&self, word: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.looked_up.lock().unwrap().push(word.to_string());
        self.definition.clone()
    }

    async fn etymologies(&self, word: &str) -> Result<Vec<String>, EtymologyLookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.looked_up.lock().unwrap().push(word.to_string());
        let mut configured = self.etymologies.lock().unwrap();
        if matches!(configured.as_ref(), Some(Err(_))) {
            return Err(configured.take().unwrap().unwrap_err());
        }
        Ok(configured
            .as_ref()
            .and_then(|result| result.as_ref().ok())
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Clone)]
pub struct FakeFinder {
    answer: Option<String>,
    gate: Option<Arc<Notify>>,
    calls: Arc<AtomicUsize>,
}

impl FakeFinder {
    pub fn answering(word: &str) -> Self {
        Self {
            answer: Some(word.to_string()),
            gate: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            ..Self::answering("")
        }
    }

    /// Blocks every lookup until [`FakeFinder::release`] is called.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WordFinder for FakeFinder {
    async fn find_word_for(&self, _sentence: &str) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.answer.clone().ok_or(CompletionError::EmptyResponse)
    }
}
