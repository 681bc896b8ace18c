use crate::core::markdown::escape_html;
use crate::core::pinboard::Filter;
use crate::core::surface::SurfaceId;
use crate::core::view::ViewState;
use std::fmt::Write as _;

/// Every user intent that can change application state.
///
/// Rendered content carries these as `data-action` attributes; the browser
/// shell delegates clicks by parsing them back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Navigate(ViewState),
    Back,
    ToggleTheme,
    OpenProject(String),
    CloseProject,
    SurfaceClick(SurfaceId),
    ExitFullscreen(SurfaceId),
    ToggleSettings,
    SetFilter(Filter),
    ExpandNote(u16),
    CloseNote,
}

impl Action {
    pub fn encode(&self) -> String {
        match self {
            Action::Navigate(view) => format!("nav:{}", view.as_str()),
            Action::Back => "back".to_string(),
            Action::ToggleTheme => "theme".to_string(),
            Action::OpenProject(id) => format!("open:{}", id),
            Action::CloseProject => "close".to_string(),
            Action::SurfaceClick(id) => format!("surface:{}", id.as_str()),
            Action::ExitFullscreen(id) => format!("exit:{}", id.as_str()),
            Action::ToggleSettings => "settings".to_string(),
            Action::SetFilter(filter) => format!("filter:{}", filter.as_str()),
            Action::ExpandNote(id) => format!("note:{}", id),
            Action::CloseNote => "close-note".to_string(),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let (head, arg) = match s.split_once(':') {
            Some((h, a)) => (h, Some(a)),
            None => (s, None),
        };
        match (head, arg) {
            ("nav", Some(v)) => ViewState::parse(v).map(Action::Navigate),
            ("back", None) => Some(Action::Back),
            ("theme", None) => Some(Action::ToggleTheme),
            ("open", Some(id)) if !id.is_empty() => Some(Action::OpenProject(id.to_string())),
            ("close", None) => Some(Action::CloseProject),
            ("surface", Some(id)) => SurfaceId::parse(id).map(Action::SurfaceClick),
            ("exit", Some(id)) => SurfaceId::parse(id).map(Action::ExitFullscreen),
            ("settings", None) => Some(Action::ToggleSettings),
            ("filter", Some(f)) => Filter::parse(f).map(Action::SetFilter),
            ("note", Some(n)) => n.parse().ok().map(Action::ExpandNote),
            ("close-note", None) => Some(Action::CloseNote),
            _ => None,
        }
    }
}

/// Nearest ancestor-or-self of a click target carrying a routing marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker<'a> {
    /// Raw `data-action` value.
    Action(&'a str),
    /// `data-stop`: the click belongs to a panel interior.
    Stop,
}

/// What a click resolved to after walking up from its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Action(Action),
    /// The bare viewport itself: return to the room.
    Background,
    /// Native link, panel interior, chrome or scene geometry; nothing to do.
    Ignored,
}

impl ClickTarget {
    pub fn route(in_link: bool, marker: Option<Marker<'_>>, on_viewport: bool) -> Self {
        if in_link {
            return ClickTarget::Ignored;
        }
        match marker {
            Some(Marker::Action(raw)) => match Action::parse(raw) {
                Some(action) => ClickTarget::Action(action),
                None => {
                    log::warn!("unknown data-action '{}'", raw);
                    ClickTarget::Ignored
                }
            },
            Some(Marker::Stop) => ClickTarget::Ignored,
            None if on_viewport => ClickTarget::Background,
            None => ClickTarget::Ignored,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// Already-escaped markup, e.g. rendered markdown.
    Html(String),
}

/// Minimal element tree produced by the content functions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub style: String,
    pub content: Content,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    pub fn div(class: &str) -> Self {
        Self::new("div").class(class)
    }

    pub fn span(class: &str) -> Self {
        Self::new("span").class(class)
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes
            .extend(class.split_whitespace().map(str::to_string));
        self
    }

    pub fn class_if(self, on: bool, class: &str) -> Self {
        if on {
            self.class(class)
        } else {
            self
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn action(self, action: &Action) -> Self {
        self.attr("data-action", action.encode())
    }

    pub fn style(mut self, css: &str) -> Self {
        if !self.style.is_empty() && !self.style.ends_with(';') {
            self.style.push(';');
        }
        self.style.push_str(css);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn html(mut self, html: String) -> Self {
        self.content = Content::Html(html);
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_html(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
        if !self.style.is_empty() {
            let _ = write!(out, " style=\"{}\"", escape_html(&self.style));
        }
        out.push('>');
        if is_void(self.tag) {
            return;
        }
        match &self.content {
            Content::None => {}
            Content::Text(t) => out.push_str(&escape_html(t)),
            Content::Html(h) => out.push_str(h),
        }
        for c in &self.children {
            c.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Read-side queries over rendered trees.
#[cfg(test)]
impl Node {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Content::Text(t) = &self.content {
            out.push_str(t);
        }
        for c in &self.children {
            c.collect_text(out);
        }
    }

    /// Pre-order search.
    pub fn find(&self, pred: &dyn Fn(&Node) -> bool) -> Option<&Node> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }

    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Node) -> bool, out: &mut Vec<&'a Node>) {
        if pred(self) {
            out.push(self);
        }
        for c in &self.children {
            c.find_all(pred, out);
        }
    }

    pub fn find_class(&self, class: &str) -> Option<&Node> {
        self.find(&|n| n.has_class(class))
    }

    pub fn actions(&self) -> Vec<Action> {
        let mut nodes = Vec::new();
        self.find_all(&|n| n.get_attr("data-action").is_some(), &mut nodes);
        nodes
            .into_iter()
            .filter_map(|n| n.get_attr("data-action").and_then(Action::parse))
            .collect()
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "br" | "hr" | "input")
}
