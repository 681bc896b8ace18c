use crate::core::constants::APP_TILE_TONES;
use crate::core::icons::Icon;
use crate::core::project::Status;
use crate::core::surface::{
    surface_root, ContentContext, Presentation, SurfaceController, SurfaceId, SurfaceState,
};
use crate::core::ui::{Action, Node};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MENU: [&str; 5] = ["File", "Edit", "View", "Window", "Help"];

/// Local wall-clock time as the monitor displays it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockReading {
    /// 0 = Sunday.
    pub weekday: u8,
    /// 0 = January.
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

/// `"Mon, Oct 19 3:04 PM"`.
pub fn format_clock(r: &ClockReading) -> String {
    let weekday = WEEKDAYS[(r.weekday % 7) as usize];
    let month = MONTHS[(r.month % 12) as usize];
    let (hour, meridiem) = match r.hour % 24 {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    format!(
        "{}, {} {} {}:{:02} {}",
        weekday, month, r.day, hour, r.minute, meridiem
    )
}

#[derive(Clone, Debug, Default)]
pub struct Monitor {
    surface: SurfaceState,
    clock: ClockReading,
    settings_open: bool,
}

impl Monitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the displayed text changed.
    pub fn tick(&mut self, reading: ClockReading) -> bool {
        if self.clock == reading {
            return false;
        }
        self.clock = reading;
        true
    }

    pub fn clock_text(&self) -> String {
        format_clock(&self.clock)
    }

    #[cfg(test)]
    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    /// Ignored while the monitor is unfocused.
    pub fn toggle_settings(&mut self) -> bool {
        if !self.surface.pointer_events() {
            return false;
        }
        self.settings_open = !self.settings_open;
        true
    }

    fn top_bar(&self, fullscreen: bool) -> Node {
        let mut left = Node::div("os-bar-left").child(Node::span("os-brand").text("LiquidOS"));
        if fullscreen {
            left = left.child(
                Node::span("os-exit")
                    .action(&Action::ExitFullscreen(SurfaceId::Monitor))
                    .text("Exit Fullscreen"),
            );
        }
        left = left.children(MENU.iter().map(|m| Node::span("os-menu").text(*m)));

        let right = Node::div("os-bar-right")
            .child(
                Node::span("os-clock")
                    .attr("data-clock", "")
                    .text(self.clock_text()),
            )
            .child(Node::span("os-glyph").text(Icon::Wifi.glyph()))
            .child(Node::span("os-glyph").text(Icon::Battery.glyph()))
            .child(Node::span("os-glyph").text(Icon::Search.glyph()))
            .child(
                Node::span("os-glyph os-settings")
                    .class_if(self.settings_open, "on")
                    .action(&Action::ToggleSettings)
                    .text(Icon::User.glyph()),
            );

        Node::div("os-bar").child(left).child(right)
    }

    fn apps(&self, ctx: &ContentContext<'_>) -> Node {
        let tiles = ctx.catalog.iter().enumerate().map(|(i, project)| {
            let (bg, fg, border) = APP_TILE_TONES[i % APP_TILE_TONES.len()];
            let icon = ctx.icons.resolve(project.icon);
            let mut badge = Node::div("app-icon")
                .style(&format!(
                    "background:{};color:{};border-color:{}",
                    bg, fg, border
                ))
                .child(Node::span("glyph").text(icon.glyph()));
            if project.status == Status::InProgress {
                badge = badge.child(Node::span("status-dot").attr("title", "In progress"));
            }
            Node::div("app-tile")
                .attr("data-project", project.id)
                .action(&Action::OpenProject(project.id.to_string()))
                .child(badge)
                .child(Node::span("app-label").text(project.title))
        });
        Node::div("app-grid").children(tiles)
    }

    fn about(&self) -> Node {
        Node::div("os-about")
            .child(Node::new("h3").text("About this desktop"))
            .child(Node::new("p").text(
                "Built in Rust and compiled to WebAssembly. Every surface in the room is a \
                 transformed DOM plane; the camera is one animated world transform.",
            ))
            .child(
                Node::span("os-about-close")
                    .action(&Action::ToggleSettings)
                    .text(Icon::Close.glyph()),
            )
    }

    fn dock(&self, ctx: &ContentContext<'_>) -> Node {
        let link = |href: String, icon: Icon, title: &str, external: bool| {
            let mut a = Node::new("a")
                .class("dock-item")
                .attr("href", href)
                .attr("title", title)
                .text(icon.glyph());
            if external {
                a = a
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer");
            }
            a
        };
        Node::div("os-dock")
            .child(link(ctx.config.mailto(), Icon::Mail, "Email", false))
            .child(link(
                ctx.config.profile_url.clone(),
                Icon::Briefcase,
                "Profile",
                true,
            ))
            .child(
                Node::span("dock-item")
                    .attr("title", "Settings")
                    .action(&Action::ToggleSettings)
                    .text(Icon::Settings.glyph()),
            )
    }
}

impl SurfaceController for Monitor {
    fn surface(&self) -> &SurfaceState {
        &self.surface
    }

    fn surface_mut(&mut self) -> &mut SurfaceState {
        &mut self.surface
    }

    fn on_deactivate(&mut self) {
        self.settings_open = false;
    }

    fn content(&self, ctx: &ContentContext<'_>, tier: Presentation) -> Node {
        let fullscreen = tier == Presentation::Fullscreen && self.surface.is_fullscreen();
        let mut root = surface_root(SurfaceId::Monitor, &self.surface, tier)
            .child(Node::div("os-wallpaper").style(&format!(
                "background-image:url(\"{}\")",
                ctx.config.wallpaper_url
            )))
            .child(Node::div("os-dim"))
            .child(self.top_bar(fullscreen))
            .child(self.apps(ctx));
        if self.settings_open {
            root = root.child(self.about());
        }
        root.child(self.dock(ctx))
    }
}
