//! Scripted peer transport for exercising failover.

use std::collections::HashMap;

use parking_lot::Mutex;
use shared_crypto::ContentVerifier;
use shared_types::{PeerEndpoint, Record, RecordHash};

use crate::domain::errors::{NetworkError, PeerError};
use crate::ports::outbound::{PeerConnector, PeerSession, RecordBatch};

/// How a scripted peer behaves.
#[derive(Debug, Clone)]
pub enum PeerScript {
    /// Connection fails.
    Unreachable,
    /// `get_records` returns an explicit error.
    Error(String),
    /// `get_records` returns these bytes under this hash (whatever is asked).
    Serve(RecordHash, Vec<u8>),
}

/// Connector whose peers follow fixed scripts and which records every peer
/// it is asked to contact, in order. Unscripted peers are unreachable.
#[derive(Default)]
pub struct ScriptedConnector {
    scripts: HashMap<PeerEndpoint, PeerScript>,
    contacted: Mutex<Vec<PeerEndpoint>>,
}

impl ScriptedConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(mut self, peer: &PeerEndpoint, script: PeerScript) -> Self {
        self.scripts.insert(peer.clone(), script);
        self
    }

    /// Peers contacted so far, in contact order.
    pub fn contacted(&self) -> Vec<PeerEndpoint> {
        self.contacted.lock().clone()
    }
}

impl PeerConnector for ScriptedConnector {
    fn connect(&self, peer: &PeerEndpoint) -> Result<Box<dyn PeerSession>, NetworkError> {
        self.contacted.lock().push(peer.clone());
        match self.scripts.get(peer) {
            None | Some(PeerScript::Unreachable) => {
                Err(NetworkError::Unreachable(peer.to_string()))
            }
            Some(script) => Ok(Box::new(ScriptedSession(script.clone()))),
        }
    }
}

struct ScriptedSession(PeerScript);

impl PeerSession for ScriptedSession {
    fn get_records(&self, _hashes: &[RecordHash]) -> Result<RecordBatch, PeerError> {
        match &self.0 {
            PeerScript::Unreachable => Err(NetworkError::ConnectionRefused.into()),
            PeerScript::Error(message) => Err(PeerError::Remote(message.clone())),
            PeerScript::Serve(hash, bytes) => Ok(RecordBatch::from([(*hash, bytes.clone())])),
        }
    }
}

/// Canonical bytes and hash of a sample zonefile for `name`.
pub fn sample_bytes(name: &str) -> (Vec<u8>, RecordHash) {
    let record = Record::new()
        .with_field("$origin", name)
        .with_field("$ttl", 3600);
    ContentVerifier::new()
        .canonicalize_and_hash(&record)
        .expect("canonicalize sample")
}
