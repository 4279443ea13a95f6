use super::PlatformExtensions;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn processor_description() -> Option<String> {
        let contents = std::fs::read_to_string("/proc/cpuinfo").ok()?;
        parse_cpuinfo_model(&contents)
    }
}

// x86 exposes "model name"; several ARM kernels only have "Hardware" or
// "Processor".
fn parse_cpuinfo_model(contents: &str) -> Option<String> {
    for key in ["model name", "Hardware", "Processor"] {
        let found = contents.lines().find_map(|line| {
            let (name, value) = line.split_once(':')?;
            (name.trim() == key).then(|| value.trim().to_string())
        });
        if let Some(value) = found.filter(|v| !v.is_empty()) {
            return Some(value);
        }
    }
    None
}
