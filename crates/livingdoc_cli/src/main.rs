//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `livingdoc_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use livingdoc_core::BackendConfig;

fn main() {
    let config = BackendConfig::from_env();
    println!("livingdoc_core version={}", livingdoc_core::core_version());
    println!("livingdoc_core base_url={}", config.base_url);
    println!("livingdoc_core summarizer_url={}", config.summarizer_url);
}
