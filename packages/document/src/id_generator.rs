use crc32fast::Hasher;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

static PROCESS_SEED: OnceLock<String> = OnceLock::new();
static GENERATORS: AtomicU32 = AtomicU32::new(0);

/// Seed shared by every generator in this process (CRC32 of start time and pid)
pub fn process_seed() -> &'static str {
    PROCESS_SEED.get_or_init(|| {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();

        let mut hasher = Hasher::new();
        hasher.update(&nanos.to_le_bytes());
        hasher.update(&std::process::id().to_le_bytes());
        format!("{:08x}", hasher.finalize())
    })
}

/// Sequential ID generator for component nodes
///
/// Ids look like `1f2e3d4c0-17`: the fixed-width process seed, the
/// generator's instance number, then a counter. Two generators in one
/// process never share a seed, so no id is ever handed out twice.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        let instance = GENERATORS.fetch_add(1, Ordering::Relaxed);
        Self::from_seed(format!("{}{}", process_seed(), instance))
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Number of ids issued so far
    pub fn issued(&self) -> u64 {
        self.count
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
