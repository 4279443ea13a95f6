use super::PlatformExtensions;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn processor_description() -> Option<String> {
        None
    }
}
