//! Puzzle input and preimage encoding

use crate::core::Nonce;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Static block data being searched over.
///
/// The preimage for a candidate nonce is the input bytes followed by the
/// ASCII suffix `|nonce:{value}`. The input is fixed for the lifetime of
/// a session and only replaced wholesale on reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Puzzle {
    data: Vec<u8>,
}

impl Puzzle {
    /// Create a puzzle over the given static input
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Get the static input bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Build the message hashed for the given candidate nonce
    pub fn preimage(&self, nonce: Nonce) -> Vec<u8> {
        let suffix = format!("|nonce:{}", nonce);
        let mut message = Vec::with_capacity(self.data.len() + suffix.len());
        message.extend_from_slice(&self.data);
        message.extend_from_slice(suffix.as_bytes());
        message
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Puzzle({} bytes)", self.data.len())
    }
}
