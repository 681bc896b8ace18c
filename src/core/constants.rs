// Geometry and timing constants shared by the scene, camera and controllers.

// Viewport
pub const PERSPECTIVE_PX: f32 = 1000.0; // CSS `perspective` of the viewport; eye sits this far in front of z=0

// Camera
pub const CAMERA_TRANSITION_SEC: f64 = 0.8;
pub const CAMERA_EASE: [f32; 4] = [0.25, 1.0, 0.5, 1.0]; // cubic-bezier control points, strong deceleration

// Theme cross-fade
pub const THEME_FADE_SEC: f64 = 1.0;
pub const THEME_EASE: [f32; 4] = [0.4, 0.0, 0.2, 1.0];

// Modal entrance/exit
pub const MODAL_TRANSITION_SEC: f64 = 0.35;
pub const MODAL_BLUR_PX: f32 = 20.0;
pub const MODAL_PANEL_SCALE_FROM: f32 = 0.95;
pub const MODAL_PANEL_OFFSET_PX: f32 = 20.0;

// Pinboard card presence
pub const CARD_TRANSITION_SEC: f64 = 0.3;
pub const CARD_HIDDEN_SCALE: f32 = 0.8;

// Interactive surfaces (box sizes in px)
pub const MONITOR_SIZE: [f32; 2] = [720.0, 450.0];
pub const PINBOARD_SIZE: [f32; 2] = [1200.0, 1000.0];

// Apps grid tile tones: (background, foreground, border)
pub const APP_TILE_TONES: [(&str, &str, &str); 6] = [
    ("rgba(59,130,246,0.2)", "#60a5fa", "rgba(59,130,246,0.3)"),
    ("rgba(168,85,247,0.2)", "#c084fc", "rgba(168,85,247,0.3)"),
    ("rgba(16,185,129,0.2)", "#34d399", "rgba(16,185,129,0.3)"),
    ("rgba(245,158,11,0.2)", "#fbbf24", "rgba(245,158,11,0.3)"),
    ("rgba(236,72,153,0.2)", "#f472b6", "rgba(236,72,153,0.3)"),
    ("rgba(6,182,212,0.2)", "#22d3ee", "rgba(6,182,212,0.3)"),
];

// Soft contact shadow used under furniture
pub const CONTACT_SHADOW: &str =
    "radial-gradient(ellipse at center, rgba(0,0,0,1) 0%, rgba(0,0,0,0) 70%)";
