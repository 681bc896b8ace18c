use crate::core::camera::Camera;
use crate::core::monitor::{ClockReading, Monitor};
use crate::core::pinboard::Pinboard;
use crate::core::project::{Catalog, Project};
use crate::core::surface::{SurfaceClick, SurfaceController, SurfaceId};
use crate::core::theme::Theme;
use crate::core::ui::Action;
use crate::core::view::ViewState;

/// Regions that need to be redrawn after a state update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Changes {
    pub view: bool,
    pub theme: bool,
    pub project: bool,
    pub monitor: bool,
    pub pinboard: bool,
    /// Pinboard filter only: cards animate presence, nothing is rebuilt.
    pub filter: bool,
    pub clock: bool,
}

impl Changes {
    pub fn merge(&mut self, other: Changes) {
        self.view |= other.view;
        self.theme |= other.theme;
        self.project |= other.project;
        self.monitor |= other.monitor;
        self.pinboard |= other.pinboard;
        self.filter |= other.filter;
        self.clock |= other.clock;
    }

    pub fn is_empty(&self) -> bool {
        *self == Changes::default()
    }

    fn surface(id: SurfaceId) -> Self {
        match id {
            SurfaceId::Monitor => Changes {
                monitor: true,
                ..Changes::default()
            },
            SurfaceId::Pinboard => Changes {
                pinboard: true,
                ..Changes::default()
            },
        }
    }
}

/// Everything one mounted room owns. View, theme and the active project are
/// written only here; controllers own their private sub-state.
pub struct AppState {
    camera: Camera,
    theme: Theme,
    active_project: Option<String>,
    monitor: Monitor,
    pinboard: Pinboard,
    catalog: Catalog,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let mut state = Self {
            camera: Camera::default(),
            theme: Theme::default(),
            active_project: None,
            monitor: Monitor::new(),
            pinboard: Pinboard::new(),
            catalog,
        };
        state.sync_surfaces();
        state
    }

    pub fn view(&self) -> ViewState {
        self.camera.view()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn active_project(&self) -> Option<&Project> {
        self.active_project
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }

    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    pub fn pinboard(&self) -> &Pinboard {
        &self.pinboard
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn controller(&self, id: SurfaceId) -> &dyn SurfaceController {
        match id {
            SurfaceId::Monitor => &self.monitor,
            SurfaceId::Pinboard => &self.pinboard,
        }
    }

    fn controller_mut(&mut self, id: SurfaceId) -> &mut dyn SurfaceController {
        match id {
            SurfaceId::Monitor => &mut self.monitor,
            SurfaceId::Pinboard => &mut self.pinboard,
        }
    }

    pub fn dispatch(&mut self, action: Action, now: f64) -> Changes {
        let changes = match action {
            Action::Navigate(view) => self.navigate(view, now),
            Action::Back => self.back(now),
            Action::ToggleTheme => self.toggle_theme(),
            Action::OpenProject(id) => self.open_project(&id),
            Action::CloseProject => self.close_project(),
            Action::SurfaceClick(id) => self.surface_click(id, now),
            Action::ExitFullscreen(id) => {
                if self.controller_mut(id).exit_fullscreen() {
                    Changes::surface(id)
                } else {
                    Changes::default()
                }
            }
            Action::ToggleSettings => Changes {
                monitor: self.monitor.toggle_settings(),
                ..Changes::default()
            },
            Action::SetFilter(filter) => Changes {
                filter: self.pinboard.set_filter(filter),
                ..Changes::default()
            },
            Action::ExpandNote(id) => Changes {
                pinboard: self.pinboard.expand_note(id),
                ..Changes::default()
            },
            Action::CloseNote => Changes {
                pinboard: self.pinboard.close_note(),
                ..Changes::default()
            },
        };
        if !changes.is_empty() {
            log::debug!("dispatch -> {:?}", changes);
        }
        changes
    }

    /// Escape: close the project, else return to the room, else nothing.
    pub fn escape(&mut self, now: f64) -> Changes {
        if self.active_project.is_some() {
            return self.close_project();
        }
        self.back(now)
    }

    /// Click on empty viewport background.
    pub fn background_click(&mut self, now: f64) -> Changes {
        self.back(now)
    }

    pub fn tick_clock(&mut self, reading: ClockReading) -> Changes {
        Changes {
            clock: self.monitor.tick(reading),
            ..Changes::default()
        }
    }

    fn navigate(&mut self, view: ViewState, now: f64) -> Changes {
        if !self.camera.navigate(view, now) {
            return Changes::default();
        }
        self.view_changed()
    }

    fn back(&mut self, now: f64) -> Changes {
        if !self.camera.navigate_back(now) {
            return Changes::default();
        }
        self.view_changed()
    }

    fn view_changed(&mut self) -> Changes {
        log::info!("view -> {}", self.camera.view().as_str());
        let mut changes = Changes {
            view: true,
            ..Changes::default()
        };
        changes.merge(self.sync_surfaces());
        changes
    }

    /// Pushes "is the camera on my view" into both controllers.
    pub fn sync_surfaces(&mut self) -> Changes {
        let view = self.camera.view();
        let mut changes = Changes::default();
        for id in SurfaceId::ALL {
            let was_fullscreen = self.controller(id).surface().is_fullscreen();
            let flipped = self.controller_mut(id).set_active(id.view() == view);
            let dropped = was_fullscreen && !self.controller(id).surface().is_fullscreen();
            if flipped || dropped {
                changes.merge(Changes::surface(id));
            }
        }
        changes
    }

    fn toggle_theme(&mut self) -> Changes {
        self.theme = self.theme.toggled();
        log::info!("theme -> {}", self.theme.as_str());
        Changes {
            theme: true,
            ..Changes::default()
        }
    }

    /// Projects open from a focused surface only.
    fn open_project(&mut self, id: &str) -> Changes {
        if !self.has_focused_surface() {
            log::debug!("project '{}' ignored: no surface focused", id);
            return Changes::default();
        }
        if !self.catalog.contains(id) {
            log::warn!("unknown project '{}'", id);
            return Changes::default();
        }
        if self.active_project.as_deref() == Some(id) {
            return Changes::default();
        }
        log::info!("project -> {}", id);
        self.active_project = Some(id.to_string());
        Changes {
            project: true,
            ..Changes::default()
        }
    }

    fn has_focused_surface(&self) -> bool {
        SurfaceId::ALL
            .iter()
            .any(|id| self.controller(*id).surface().pointer_events())
    }

    fn close_project(&mut self) -> Changes {
        match self.active_project.take() {
            Some(id) => {
                log::info!("project closed ({})", id);
                Changes {
                    project: true,
                    ..Changes::default()
                }
            }
            None => Changes::default(),
        }
    }

    fn surface_click(&mut self, id: SurfaceId, now: f64) -> Changes {
        match self.controller_mut(id).click() {
            SurfaceClick::Activate => self.navigate(id.view(), now),
            SurfaceClick::Escalate => {
                log::info!("{} fullscreen", id.as_str());
                Changes::surface(id)
            }
            SurfaceClick::Consumed => Changes::default(),
        }
    }
}
