use crate::core::config::Config;
use crate::core::icons::IconResolver;
use crate::core::project::Catalog;
use crate::core::ui::{Action, Node};
use crate::core::view::ViewState;

/// The two scene surfaces that double as interactive mini-applications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    Monitor,
    Pinboard,
}

impl SurfaceId {
    pub const ALL: [SurfaceId; 2] = [SurfaceId::Monitor, SurfaceId::Pinboard];

    /// The view in which this surface is active.
    pub fn view(self) -> ViewState {
        match self {
            SurfaceId::Monitor => ViewState::Computer,
            SurfaceId::Pinboard => ViewState::Pinboard,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SurfaceId::Monitor => "monitor",
            SurfaceId::Pinboard => "pinboard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "monitor" => Some(SurfaceId::Monitor),
            "pinboard" => Some(SurfaceId::Pinboard),
            _ => None,
        }
    }
}

/// Outcome of a click that lands on a surface outside any inner control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceClick {
    /// Inactive: ask the camera to move to the owning view.
    Activate,
    /// Active and inline: now fullscreen.
    Escalate,
    /// Already fullscreen; inner content owns the click.
    Consumed,
}

/// Active/fullscreen sub-state shared by every controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceState {
    active: bool,
    fullscreen: bool,
}

impl SurfaceState {
    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Returns true when the flag flipped. Deactivation always drops fullscreen.
    pub fn set_active(&mut self, active: bool) -> bool {
        if !active {
            self.fullscreen = false;
        }
        if self.active == active {
            return false;
        }
        self.active = active;
        true
    }

    pub fn click(&mut self) -> SurfaceClick {
        if !self.active {
            SurfaceClick::Activate
        } else if !self.fullscreen {
            self.fullscreen = true;
            SurfaceClick::Escalate
        } else {
            SurfaceClick::Consumed
        }
    }

    pub fn exit_fullscreen(&mut self) -> bool {
        std::mem::replace(&mut self.fullscreen, false)
    }

    /// Inner content only receives pointer input while focused.
    pub fn pointer_events(&self) -> bool {
        self.active || self.fullscreen
    }
}

/// Which of the two tiers a content tree is being rendered into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    Inline,
    Fullscreen,
}

/// Read-only data every content function may draw on.
#[derive(Clone, Copy)]
pub struct ContentContext<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a Config,
    pub icons: &'a IconResolver,
}

/// Shared contract of the monitor and pinboard controllers.
///
/// `content` is a pure function of the controller's state and the context;
/// the shell mounts its output both inside the scene and in the fullscreen
/// layer, so the same tree must work in either place.
pub trait SurfaceController {
    fn surface(&self) -> &SurfaceState;
    fn surface_mut(&mut self) -> &mut SurfaceState;

    /// Reset controller-local UI when focus is lost.
    fn on_deactivate(&mut self) {}

    fn set_active(&mut self, active: bool) -> bool {
        let changed = self.surface_mut().set_active(active);
        if changed && !active {
            self.on_deactivate();
        }
        changed
    }

    fn click(&mut self) -> SurfaceClick {
        self.surface_mut().click()
    }

    fn exit_fullscreen(&mut self) -> bool {
        self.surface_mut().exit_fullscreen()
    }

    fn content(&self, ctx: &ContentContext<'_>, tier: Presentation) -> Node;
}

/// Outer wrapper shared by both tiers: pointer gating plus the surface-click
/// action so that a click on bare content escalates.
pub fn surface_root(id: SurfaceId, state: &SurfaceState, tier: Presentation) -> Node {
    Node::div("surface-content")
        .class(id.as_str())
        .class_if(tier == Presentation::Fullscreen, "fullscreen")
        .class_if(state.pointer_events(), "focused")
        .attr("data-surface", id.as_str())
        .action(&Action::SurfaceClick(id))
        .style(if state.pointer_events() {
            "pointer-events:auto"
        } else {
            "pointer-events:none"
        })
}
