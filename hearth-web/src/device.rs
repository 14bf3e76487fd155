//! Viewport classification

/// Coarse device class derived from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

/// Viewport width below which the UI renders the compact layout
const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Classify the current viewport.
///
/// Queried once per render; the value is a snapshot, not a subscription.
pub fn detect_device() -> DeviceClass {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(MOBILE_BREAKPOINT_PX);

    if width < MOBILE_BREAKPOINT_PX {
        DeviceClass::Mobile
    } else {
        DeviceClass::Desktop
    }
}
