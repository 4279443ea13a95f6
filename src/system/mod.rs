pub mod collector;
pub mod error;
#[cfg(any(test, feature = "test-util"))]
pub mod fixed;
pub mod platform;
pub mod provider;
pub mod snapshot;
pub mod sysinfo_provider;
