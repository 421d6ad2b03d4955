use crate::schema::FieldId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of fresh field ids injected into the editor.
///
/// The editor skips any id that is already present in the store, so a generator
/// only has to make collisions unlikely, not impossible.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> FieldId;
}

/// Monotonic counter producing `field-1`, `field-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::with_prefix("field")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> FieldId {
        let id = FieldId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// Random 64-bit ids rendered as hex, e.g. `field-9f3c02d1a4b7e650`.
#[derive(Debug, Clone)]
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sequence, for reproducible tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> FieldId {
        FieldId::new(format!("field-{:016x}", self.rng.random::<u64>()))
    }
}
