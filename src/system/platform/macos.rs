use std::ffi::CStr;

use super::PlatformExtensions;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn processor_description() -> Option<String> {
        sysctl_string(c"machdep.cpu.brand_string")
    }
}

fn sysctl_string(name: &CStr) -> Option<String> {
    let mut len: libc::size_t = 0;
    // First call sizes the buffer.
    let rc = unsafe {
        libc::sysctlbyname(
            name.as_ptr(),
            std::ptr::null_mut(),
            &mut len,
            std::ptr::null_mut(),
            0,
        )
    };
    if rc != 0 || len == 0 {
        return None;
    }

    let mut buf = vec![0u8; len];
    let rc = unsafe {
        libc::sysctlbyname(
            name.as_ptr(),
            buf.as_mut_ptr().cast(),
            &mut len,
            std::ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return None;
    }

    buf.truncate(len);
    let value = CStr::from_bytes_until_nul(&buf).ok()?;
    Some(value.to_string_lossy().into_owned())
}
