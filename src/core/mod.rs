pub mod camera;
pub mod config;
pub mod constants;
pub mod data;
pub mod icons;
pub mod markdown;
pub mod modal;
pub mod monitor;
pub mod pinboard;
pub mod primitive;
pub mod project;
pub mod room;
pub mod scene;
pub mod state;
pub mod surface;
pub mod theme;
pub mod transform;
pub mod tween;
pub mod ui;
pub mod view;

pub use config::Config;
pub use icons::IconResolver;
pub use monitor::ClockReading;
pub use primitive::Primitive;
pub use project::Project;
pub use scene::Scene;
pub use state::{AppState, Changes};
pub use surface::{ContentContext, Presentation, SurfaceController, SurfaceId};
pub use theme::Fade;
pub use tween::Animator;
pub use ui::Action;
pub use view::{ViewState, WorldPose};
