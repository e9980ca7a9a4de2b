pub mod test_helpers;

use std::sync::{Arc, Once};

use chrono::NaiveDate;
use events_dao::{FixedClock, SessionHandle};
pub use test_helpers::*;

static TRACING: Once = Once::new();

/// The date every test session treats as "today".
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, 1).expect("valid calendar date")
}

/// A fresh, empty session whose clock is pinned to [`test_today`].
pub fn test_session() -> SessionHandle {
    init_test_tracing();
    SessionHandle::with_clock(Arc::new(FixedClock(test_today())))
}

/// Installs a test-writer subscriber once per test binary. Respects
/// `RUST_LOG`; silent by default.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "off".into()),
            )
            .with_test_writer()
            .try_init();
    });
}
