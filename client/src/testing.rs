use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use tokio::sync::Notify;

use crate::Transport;

/// In-memory transport that serves canned bodies and counts requests.
///
/// A gated URL holds its response until the gate is opened, so tests can
/// finish requests in any order.
#[derive(Default)]
pub struct FakeTransport {
    bodies: Mutex<HashMap<String, Vec<u8>>>,
    requests: Mutex<Vec<String>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, body: serde_json::Value) {
        self.respond_raw(url, body.to_string().into_bytes());
    }

    pub fn respond_raw(&self, url: &str, body: Vec<u8>) {
        self.bodies.lock().unwrap().insert(url.to_string(), body);
    }

    /// Hold responses for `url` until `notify_one` is called on the gate
    pub fn gate(&self, url: &str) -> Arc<Notify> {
        self.gates
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .clone()
    }

    /// Number of requests whose URL ends with `suffix`
    pub fn hits(&self, suffix: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|url| url.ends_with(suffix))
            .count()
    }
}

impl Transport for FakeTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(url.to_string());

        let gate = self.gates.lock().unwrap().get(url).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.bodies
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("404 Not Found: {}", url))
    }
}
