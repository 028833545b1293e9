use std::sync::OnceLock;

pub(crate) const DEFAULT_QUIET_ZONE: usize = 4;
pub(crate) const MAX_QUIET_ZONE: usize = 16;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static QUIET_ZONE: OnceLock<usize> = OnceLock::new();

/// Default quiet zone width in modules (`QR_QUIET_ZONE`)
pub(crate) fn quiet_zone() -> usize {
    *QUIET_ZONE.get_or_init(|| {
        parse_env_usize("QR_QUIET_ZONE", DEFAULT_QUIET_ZONE).min(MAX_QUIET_ZONE)
    })
}

static PARALLEL_MASKS: OnceLock<bool> = OnceLock::new();

/// Whether mask candidates are built on the rayon pool (`QR_PARALLEL_MASKS`)
pub(crate) fn parallel_masks() -> bool {
    *PARALLEL_MASKS.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASKS", true))
}
