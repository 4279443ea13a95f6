/// Per-OS queries sysinfo does not expose in the shape the viewer needs.
pub trait PlatformExtensions {
    /// Human-readable processor description, as the OS itself reports it.
    fn processor_description() -> Option<String>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
mod other;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;
#[cfg(target_os = "windows")]
use windows as platform_impl;
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
use other as platform_impl;

pub fn processor_description() -> Option<String> {
    platform_impl::Platform::processor_description()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
