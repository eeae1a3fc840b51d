use log::Level;

pub const SUPPORT_EMAIL: &str = "hello@bloodlinkai.com";
pub const PARTNERSHIP_EMAIL: &str = "partnerships@bloodlinkai.com";
pub const SUPPORT_PHONE: &str = "+91 98765 43210";
pub const OFFICE_LOCATION: &str = "Mumbai, India";

/// How many toasts can be on screen at once. Older ones are dropped first.
pub const TOAST_LIMIT: usize = 3;

/// Scroll offset in pixels after which the header switches to its solid style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 16.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn toast_duration_ms() -> u32 {
    8_000
}

#[cfg(not(debug_assertions))]
pub fn toast_duration_ms() -> u32 {
    5_000
}
