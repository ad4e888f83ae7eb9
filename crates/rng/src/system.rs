//! Provide entropy from the operating system.

/// Returns a random `u64` value, or `None` if the platform refused to provide one.
pub fn try_entropy() -> Option<u64> {
    #[cfg(target_arch = "wasm32")]
    {
        let bytes: [u8; 8] = std::array::from_fn(|_| (js_sys::Math::random() * 256.0) as u8);
        Some(u64::from_ne_bytes(bytes))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut bytes = [0u8; 8];
        getrandom::getrandom(&mut bytes).ok()?;
        Some(u64::from_ne_bytes(bytes))
    }
}

/// Returns a random `u64` value.
///
/// # Remarks
///
/// If the operating system fails to provide entropy, the value is derived from the system
/// clock instead. Use [`try_entropy`] to detect that case.
pub fn entropy() -> u64 {
    try_entropy().unwrap_or_else(clock_entropy)
}

/// Derives a seed from the current time. Only meant as a last resort.
pub fn clock_entropy() -> u64 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    crate::utility::splitmix64(nanos)
}
