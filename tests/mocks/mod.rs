//! Centralized mocks and fixtures for testing

use std::sync::Once;

pub mod configs;
pub mod resolvers;

#[allow(unused_imports)]
pub use configs::TestRegistries;
#[allow(unused_imports)]
pub use resolvers::MockResolver;

static TRACING: Once = Once::new();

/// Install a debug-level subscriber once per test binary so engine and
/// startup logging run against a live collector.
#[allow(dead_code)]
pub fn init_tracing() {
	TRACING.call_once(|| {
		tracing_subscriber::fmt()
			.with_max_level(tracing::Level::DEBUG)
			.with_test_writer()
			.init();
	});
}
