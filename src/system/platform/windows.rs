use super::PlatformExtensions;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn processor_description() -> Option<String> {
        // Set by the system for every session, e.g.
        // "Intel64 Family 6 Model 142 Stepping 10, GenuineIntel".
        std::env::var("PROCESSOR_IDENTIFIER").ok()
    }
}
