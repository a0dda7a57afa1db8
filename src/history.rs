//! Request history tracking for debugging and diagnostics.

use std::collections::HashMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Direction of a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Send,
    Receive,
}

/// A recorded request or response in the history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub direction: Direction,
    /// Method and path, e.g. `PUT /api/{username}/lights/1/state`
    pub endpoint: String,
    pub body: Value,
    /// Seconds since history creation
    pub timestamp: f64,
}

/// Tracks request history for debugging.
#[derive(Debug, Clone)]
pub struct RequestHistory {
    latest: HashMap<Direction, HashMap<String, Value>>,
    last_error: Option<String>,
    start_time: Instant,
    entries: Vec<HistoryEntry>,
    max_entries: usize,
}

impl Default for RequestHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestHistory {
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    pub fn new() -> Self {
        Self {
            latest: HashMap::from([
                (Direction::Send, HashMap::new()),
                (Direction::Receive, HashMap::new()),
            ]),
            last_error: None,
            start_time: Instant::now(),
            entries: Vec::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            max_entries,
            ..Self::new()
        }
    }

    pub fn record(&mut self, direction: Direction, endpoint: &str, body: &Value) {
        if let Some(per_endpoint) = self.latest.get_mut(&direction) {
            per_endpoint.insert(endpoint.to_string(), body.clone());
        }

        self.entries.push(HistoryEntry {
            direction,
            endpoint: endpoint.to_string(),
            body: body.clone(),
            timestamp: self.start_time.elapsed().as_secs_f64(),
        });

        if self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
    }

    pub fn record_error(&mut self, error: &str) {
        self.last_error = Some(error.to_string());
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The most recent body seen for an endpoint in the given direction.
    pub fn latest(&self, direction: Direction, endpoint: &str) -> Option<&Value> {
        self.latest.get(&direction).and_then(|m| m.get(endpoint))
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.latest.values_mut().for_each(|m| m.clear());
        self.entries.clear();
        self.last_error = None;
    }

    pub fn summary(&self) -> HistorySummary {
        let count = |d: Direction| self.latest.get(&d).map_or(0, |m| m.len());
        HistorySummary {
            send_count: count(Direction::Send),
            receive_count: count(Direction::Receive),
            total_entries: self.entries.len(),
            last_error: self.last_error.clone(),
        }
    }
}

/// Summary of request history for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySummary {
    pub send_count: usize,
    pub receive_count: usize,
    pub total_entries: usize,
    pub last_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_request() {
        let mut history = RequestHistory::new();
        history.record(Direction::Send, "POST /api", &json!({"devicetype": "app"}));

        assert_eq!(history.len(), 1);
        assert_eq!(
            history.latest(Direction::Send, "POST /api"),
            Some(&json!({"devicetype": "app"}))
        );
    }

    #[test]
    fn test_record_error() {
        let mut history = RequestHistory::new();
        history.record_error("connection refused");
        assert_eq!(history.last_error(), Some("connection refused"));
    }

    #[test]
    fn test_max_entries() {
        let mut history = RequestHistory::with_max_entries(2);
        for i in 0..5 {
            history.record(
                Direction::Send,
                &format!("GET /api/u/lights/{}", i),
                &Value::Null,
            );
        }
        assert_eq!(history.len(), 2);
    }
}
