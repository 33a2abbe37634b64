//! RngSeed — воспроизводимый seed для покерного RNG.
//!
//! Хранит базовые 32 байта и умеет детерминированное hash-переключение
//! на каждую раздачу: new = H(domain || old || hand_index).

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Seed из u64 — удобно в тестах.
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Новый seed для раздачи с порядковым номером hand_index.
    pub fn derive(&self, hand_index: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"HOLDEM_ENGINE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(hand_index.to_le_bytes());
        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);
        Self { bytes: out }
    }

    /// RNG из этого seed.
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
