use crate::core::transform::TransformChain;
use crate::core::tween::Lerp;
use glam::Mat4;

/// Named camera target. The set is closed: there is no "invalid view".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewState {
    #[default]
    Room,
    Computer,
    Pinboard,
}

impl ViewState {
    pub const ALL: [ViewState; 3] = [ViewState::Room, ViewState::Computer, ViewState::Pinboard];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewState::Room => "room",
            ViewState::Computer => "computer",
            ViewState::Pinboard => "pinboard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewState::Room => "Room",
            ViewState::Computer => "Computer",
            ViewState::Pinboard => "Pinboard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "room" => Some(ViewState::Room),
            "computer" => Some(ViewState::Computer),
            "pinboard" => Some(ViewState::Pinboard),
            _ => None,
        }
    }

    /// World transform that frames this view.
    pub fn pose(self) -> WorldPose {
        match self {
            ViewState::Room => WorldPose::new(0.0, -200.0, -1500.0, -15.0, 25.0),
            ViewState::Computer => WorldPose::new(0.0, 145.0, 400.0, 0.0, 0.0),
            ViewState::Pinboard => WorldPose::new(1000.0, 300.0, 200.0, 0.0, 0.0),
        }
    }
}

/// Translation (px) and rotation (deg) applied once to the scene root.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldPose {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl WorldPose {
    pub const fn new(x: f32, y: f32, z: f32, rotate_x: f32, rotate_y: f32) -> Self {
        Self {
            x,
            y,
            z,
            rotate_x,
            rotate_y,
        }
    }

    pub fn chain(&self) -> TransformChain {
        TransformChain::new()
            .translate_x(self.x)
            .translate_y(self.y)
            .translate_z(self.z)
            .rotate_x(self.rotate_x)
            .rotate_y(self.rotate_y)
    }

    pub fn matrix(&self) -> Mat4 {
        self.chain().matrix()
    }

    pub fn to_css(&self) -> String {
        self.chain().to_css()
    }
}

impl Lerp for WorldPose {
    fn lerp(self, to: Self, t: f32) -> Self {
        WorldPose {
            x: self.x.lerp(to.x, t),
            y: self.y.lerp(to.y, t),
            z: self.z.lerp(to.z, t),
            rotate_x: self.rotate_x.lerp(to.rotate_x, t),
            rotate_y: self.rotate_y.lerp(to.rotate_y, t),
        }
    }
}
