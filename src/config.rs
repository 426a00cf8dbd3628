#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "http://localhost:8080/assets" // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "/assets"
}

pub fn asset_url(name: &str) -> String {
    format!("{}/{}", get_asset_base(), name.trim_start_matches('/'))
}

/// Viewports at or below this width get the mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
/// Header switches to its solid style past this scroll offset.
pub const HEADER_SCROLLED_PX: f64 = 50.0;

pub const COMPARISON_INTERVAL_MS: u32 = 6000;
pub const FEATURE_ROTATE_MS: u32 = 7000;
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

pub const HERO_LOAD_DELAY_MS: u32 = 100;
pub const SUBSCRIBED_NOTICE_MS: u32 = 3000;

pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_MARGIN: &str = "0px 0px -50px 0px";
pub const SHOWCASE_REVEAL_THRESHOLD: f64 = 0.18;
pub const SHOWCASE_REVEAL_MARGIN: &str = "0px 0px -60px 0px";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const TOUCH_PRIMARY_QUERY: &str = "(hover: none)";
