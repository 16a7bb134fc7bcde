/// Application name and metadata constants
pub const APP_NAME: &str = "file-attr";

/// Namespace prepended to bare attribute names when none is configured.
/// Linux only accepts unprivileged attributes under `user.`.
#[cfg(target_os = "linux")]
pub const DEFAULT_NAMESPACE: &str = "user.";
#[cfg(not(target_os = "linux"))]
pub const DEFAULT_NAMESPACE: &str = "";

pub const DEFAULT_FOLLOW_SYMLINKS: bool = true;

/// Namespaces the Linux kernel accepts; names outside them are rejected
#[cfg(target_os = "linux")]
pub const KNOWN_NAMESPACES: &[&str] = &["user.", "trusted.", "security.", "system."];
