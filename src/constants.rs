// Browser shell constants: element ids, class names and timer periods.

// Element looked up by the auto-mount in `start()`
pub const DEFAULT_ROOT_ID: &str = "room-root";

// Id of the injected stylesheet; shared by every mounted instance
pub const STYLE_ELEMENT_ID: &str = "room-web-style";

// Monitor clock refresh
pub const CLOCK_TICK_MS: i32 = 1000;

// Hover picking is skipped while the pointer moves less than this (px)
pub const HOVER_MIN_MOVE_PX: f32 = 0.5;

// Class toggled on the app root for theme-dependent chrome
pub const NIGHT_CLASS: &str = "night";

// Class toggled on the viewport while an interactive primitive is under the pointer
pub const HOVER_CLASS: &str = "hovering";
