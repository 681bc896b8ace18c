use crate::core::constants::{CAMERA_EASE, CAMERA_TRANSITION_SEC};
use crate::core::tween::{Easing, Transition, Tween};
use crate::core::view::{ViewState, WorldPose};

pub const CAMERA_TRANSITION: Transition =
    Transition::new(CAMERA_TRANSITION_SEC, Easing::from_points(CAMERA_EASE));

/// Current view plus the single animated world transform it drives.
///
/// The camera only supplies start and target poses; sampling happens
/// wherever a frame is drawn, against the same clock passed to `navigate`.
#[derive(Clone, Debug)]
pub struct Camera {
    view: ViewState,
    tween: Tween<WorldPose>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(ViewState::Room)
    }
}

impl Camera {
    /// Starts settled on `view`; the first pose is not animated.
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            tween: Tween::new(view.pose(), CAMERA_TRANSITION),
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Returns false (and leaves the transform alone) when already on `target`.
    pub fn navigate(&mut self, target: ViewState, now: f64) -> bool {
        if self.view == target {
            return false;
        }
        self.view = target;
        self.tween.retarget(target.pose(), now);
        true
    }

    /// Single-level back: always returns to the room overview.
    pub fn navigate_back(&mut self, now: f64) -> bool {
        self.navigate(ViewState::Room, now)
    }

    pub fn pose_at(&self, now: f64) -> WorldPose {
        self.tween.sample(now)
    }
}
