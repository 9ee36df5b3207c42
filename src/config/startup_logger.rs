//! Startup logging for the bridge router

use crate::config::Settings;
use tracing::info;

/// Log a summary of the loaded routing configuration
pub fn log_router_configuration(settings: &Settings) {
	let service_version = env!("CARGO_PKG_VERSION");
	info!("=== Bridge Router v{} ===", service_version);

	let chains: Vec<String> = settings.chains.iter().map(|c| c.to_string()).collect();
	info!("Chains: {}", chains.join(", "));

	let channel_count: usize = settings.channels.values().map(|d| d.len()).sum();
	info!(
		"IBC edges: {} direct, {} relay",
		channel_count,
		settings.relay_channels.len()
	);

	let wrapped_count: usize = settings.wrapped_routes.values().map(|a| a.len()).sum();
	let whitelist_count: usize = settings
		.whitelist
		.values()
		.flat_map(|bridges| bridges.values())
		.map(|assets| assets.len())
		.sum();
	info!(
		"Assets: {} wrapped routes, {} whitelist entries",
		wrapped_count, whitelist_count
	);

	info!(
		"Relay endpoint: {} (timeout {}ms)",
		settings.relay.endpoint, settings.relay.timeout_ms
	);
	info!(
		"Configuration loaded at {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}
