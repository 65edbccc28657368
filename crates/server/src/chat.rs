//! Chat assistant intent routing.
//!
//! The assistant only needs to know which flow a message is asking for. The
//! default [`KeywordClassifier`] looks for a handful of keywords; a hosted
//! language-model classifier can be swapped in behind [`IntentClassifier`]
//! without touching the rest of the server.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// What the user is trying to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatIntent {
    ReportLost,
    ReportFound,
    Search,
    General,
}

impl ChatIntent {
    /// Canned guidance shown for this intent.
    pub fn reply(&self) -> &'static str {
        match self {
            ChatIntent::ReportLost => {
                "I'm sorry to hear you've lost something. You can report a lost item by clicking on 'Lost Items' in the sidebar, or I can help you report it here. What kind of item did you lose?"
            }
            ChatIntent::ReportFound => {
                "Thank you for finding an item! You can report a found item by clicking on 'Found Items' in the sidebar, or I can help you report it here. What kind of item did you find?"
            }
            ChatIntent::Search => {
                "You can search for items by clicking on 'Search Items' in the sidebar. You can filter by category, location, and date range to find what you're looking for."
            }
            ChatIntent::General => {
                "I'm here to help with lost and found items. You can report lost items, report found items, or search for existing reports. How can I assist you today?"
            }
        }
    }
}

/// Maps a free-text chat message to a [`ChatIntent`].
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, message: &str) -> anyhow::Result<ChatIntent>;
}

/// Case-insensitive keyword rules, checked in order.
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn classify_sync(message: &str) -> ChatIntent {
        let lowered = message.to_lowercase();
        let has = |word: &str| lowered.contains(word);
        if has("lost") || has("missing") {
            ChatIntent::ReportLost
        } else if has("found") {
            ChatIntent::ReportFound
        } else if has("search") || has("looking") {
            ChatIntent::Search
        } else {
            ChatIntent::General
        }
    }
}

#[async_trait]
impl IntentClassifier for KeywordClassifier {
    async fn classify(&self, message: &str) -> anyhow::Result<ChatIntent> {
        Ok(Self::classify_sync(message))
    }
}
