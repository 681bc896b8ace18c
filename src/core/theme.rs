use crate::core::constants::{THEME_EASE, THEME_FADE_SEC};
use crate::core::tween::{Easing, Transition};

pub const THEME_TRANSITION: Transition =
    Transition::new(THEME_FADE_SEC, Easing::from_points(THEME_EASE));

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }

    pub fn is_night(self) -> bool {
        self == Theme::Night
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    /// Target of the global cross-fade channel: 0 by day, 1 at night.
    pub fn night_level(self) -> f32 {
        match self {
            Theme::Day => 0.0,
            Theme::Night => 1.0,
        }
    }
}

/// Opacity of a themed layer at full day and at full night.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    pub day: f32,
    pub night: f32,
}

impl Fade {
    /// Night-only overlay stacked over the day paint.
    pub const NIGHT_OVERLAY: Fade = Fade::new(0.0, 1.0);

    pub const fn new(day: f32, night: f32) -> Self {
        Self { day, night }
    }

    pub fn at(self, night_level: f32) -> f32 {
        let t = night_level.clamp(0.0, 1.0);
        self.day + (self.night - self.day) * t
    }
}
