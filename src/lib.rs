//! Farmbook offers the ledger, aggregation, and report primitives behind a
//! single-tenant farm bookkeeping app: farmers with owned income entries,
//! document-wide expenses, JSON persistence, and printable report views.

pub mod aggregation;
pub mod domain;
pub mod errors;
pub mod format;
pub mod report;
pub mod repository;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("farmbook=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Farmbook tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
