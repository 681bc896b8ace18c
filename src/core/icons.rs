use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Droplet,
    Cpu,
    Leaf,
    Home,
    Lightbulb,
    Archive,
    Folder,
    Briefcase,
    Camera,
    Gamepad,
    Mail,
    User,
    Settings,
    Wifi,
    Battery,
    Search,
    External,
    Close,
}

impl Icon {
    pub const DEFAULT: Icon = Icon::Folder;

    pub fn name(self) -> &'static str {
        match self {
            Icon::Droplet => "Droplet",
            Icon::Cpu => "Cpu",
            Icon::Leaf => "Leaf",
            Icon::Home => "Home",
            Icon::Lightbulb => "Lightbulb",
            Icon::Archive => "Archive",
            Icon::Folder => "Folder",
            Icon::Briefcase => "Briefcase",
            Icon::Camera => "Camera",
            Icon::Gamepad => "Gamepad2",
            Icon::Mail => "Mail",
            Icon::User => "User",
            Icon::Settings => "Settings",
            Icon::Wifi => "Wifi",
            Icon::Battery => "Battery",
            Icon::Search => "Search",
            Icon::External => "ExternalLink",
            Icon::Close => "X",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Droplet => "\u{1F4A7}",
            Icon::Cpu => "\u{1F5A5}",
            Icon::Leaf => "\u{1F343}",
            Icon::Home => "\u{1F3E0}",
            Icon::Lightbulb => "\u{1F4A1}",
            Icon::Archive => "\u{1F5C4}",
            Icon::Folder => "\u{1F4C1}",
            Icon::Briefcase => "\u{1F4BC}",
            Icon::Camera => "\u{1F4F7}",
            Icon::Gamepad => "\u{1F3AE}",
            Icon::Mail => "\u{2709}",
            Icon::User => "\u{1F464}",
            Icon::Settings => "\u{2699}",
            Icon::Wifi => "\u{1F4F6}",
            Icon::Battery => "\u{1F50B}",
            Icon::Search => "\u{1F50D}",
            Icon::External => "\u{2197}",
            Icon::Close => "\u{2715}",
        }
    }

    const ALL: [Icon; 18] = [
        Icon::Droplet,
        Icon::Cpu,
        Icon::Leaf,
        Icon::Home,
        Icon::Lightbulb,
        Icon::Archive,
        Icon::Folder,
        Icon::Briefcase,
        Icon::Camera,
        Icon::Gamepad,
        Icon::Mail,
        Icon::User,
        Icon::Settings,
        Icon::Wifi,
        Icon::Battery,
        Icon::Search,
        Icon::External,
        Icon::Close,
    ];
}

/// Name → icon lookup. Unknown names resolve to [`Icon::DEFAULT`].
pub struct IconResolver {
    by_name: FnvHashMap<&'static str, Icon>,
}

impl Default for IconResolver {
    fn default() -> Self {
        Self {
            by_name: Icon::ALL.iter().map(|i| (i.name(), *i)).collect(),
        }
    }
}

impl IconResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: &str) -> Option<Icon> {
        self.by_name.get(name).copied()
    }

    pub fn resolve(&self, name: &str) -> Icon {
        match self.lookup(name) {
            Some(icon) => icon,
            None => {
                log::debug!("icon '{}' not found, using {}", name, Icon::DEFAULT.name());
                Icon::DEFAULT
            }
        }
    }
}
