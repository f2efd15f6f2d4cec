//! Grouping of consecutive messages by sender.
//!
//! A chat page shows one bubble per run of messages from the same person.
//! Runs are purely adjacency-based: Alice, Bob, Alice gives three runs.

use std::collections::HashMap;

use crate::Message;

/// Display index per sender, in order of first appearance starting at 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenderIndex {
    indices: HashMap<String, usize>,
    order: Vec<String>,
}

impl SenderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sender's index, assigning the next one if unseen.
    pub fn assign(&mut self, sender: &str) -> usize {
        if let Some(&idx) = self.indices.get(sender) {
            return idx;
        }
        self.order.push(sender.to_string());
        let idx = self.order.len();
        self.indices.insert(sender.to_string(), idx);
        idx
    }

    /// Returns the index of a known sender.
    pub fn get(&self, sender: &str) -> Option<usize> {
        self.indices.get(sender).copied()
    }

    /// Number of distinct senders.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates `(sender, index)` in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .enumerate()
            .map(|(i, sender)| (sender.as_str(), i + 1))
    }
}

/// A maximal run of consecutive messages from one sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedRun {
    pub sender: String,
    pub messages: Vec<Message>,
}

impl GroupedRun {
    /// The first message of the run. Runs are never empty.
    pub fn first(&self) -> &Message {
        &self.messages[0]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Runs in file order plus the sender index used to style them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    pub runs: Vec<GroupedRun>,
    pub senders: SenderIndex,
}

impl Grouping {
    /// Total number of messages across all runs.
    pub fn message_count(&self) -> usize {
        self.runs.iter().map(GroupedRun::len).sum()
    }

    /// Display index of the run's sender.
    pub fn index_of(&self, run: &GroupedRun) -> usize {
        self.senders.get(&run.sender).unwrap_or(0)
    }

    /// Flattens the runs back into the original message sequence.
    pub fn into_messages(self) -> Vec<Message> {
        self.runs.into_iter().flat_map(|run| run.messages).collect()
    }

    pub fn stats(&self) -> GroupingStats {
        GroupingStats {
            message_count: self.message_count(),
            run_count: self.runs.len(),
            sender_count: self.senders.len(),
        }
    }
}

/// Groups consecutive messages from the same sender.
///
/// # Example
/// Input:  [Alice "Hi", Alice "How are you?", Bob "Fine"]
/// Output: runs [Alice x2, Bob x1], senders {Alice: 1, Bob: 2}
pub fn group_by_sender(messages: Vec<Message>) -> Grouping {
    let mut grouping = Grouping::default();

    for msg in messages {
        grouping.senders.assign(&msg.sender);
        match grouping.runs.last_mut() {
            Some(last) if last.sender == msg.sender => {
                last.messages.push(msg);
            }
            _ => {
                grouping.runs.push(GroupedRun {
                    sender: msg.sender.clone(),
                    messages: vec![msg],
                });
            }
        }
    }

    grouping
}

/// Statistics about a grouping, for the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingStats {
    pub message_count: usize,
    pub run_count: usize,
    pub sender_count: usize,
}

impl GroupingStats {
    /// Average number of messages per run (0 for an empty chat).
    pub fn messages_per_run(&self) -> f64 {
        if self.run_count == 0 {
            return 0.0;
        }
        self.message_count as f64 / self.run_count as f64
    }
}
