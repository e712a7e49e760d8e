// Clock & ID Provider Ports (for deterministic testing)

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Time provider interface (allows fixed clocks in tests)
pub trait TimeProvider: Send + Sync {
    /// Current time in milliseconds since epoch
    fn now_millis(&self) -> i64;
}

/// ID provider interface (request correlation IDs)
pub trait IdProvider: Send + Sync {
    fn generate_id(&self) -> String;
}

/// Wall clock (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// UUID v4 request IDs (production)
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Clock that starts at a fixed instant and advances 1000ms per read
pub struct SteppingClock {
    next: AtomicI64,
}

impl SteppingClock {
    pub fn starting_at(millis: i64) -> Self {
        Self {
            next: AtomicI64::new(millis),
        }
    }
}

impl TimeProvider for SteppingClock {
    fn now_millis(&self) -> i64 {
        self.next.fetch_add(1000, Ordering::SeqCst)
    }
}

/// Sequential IDs: `req-1`, `req-2`, ...
#[derive(Default)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl IdProvider for SequentialIds {
    fn generate_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("req-{}", n)
    }
}
