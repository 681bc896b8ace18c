#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Completed,
    InProgress,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::InProgress => "in-progress",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::InProgress => "in progress",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub id: &'static str,
    pub image: &'static str,
    pub caption: &'static str,
    pub priority: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collaborator {
    pub name: &'static str,
    pub url: &'static str,
}

/// Static portfolio entry. Text fields are markdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub status: Status,
    pub icon: &'static str,
    pub description: &'static str,
    pub context: &'static str,
    pub body: &'static str,
    pub slides: Vec<Slide>,
    pub collaborators: Vec<Collaborator>,
}

impl Project {
    /// Slides in presentation order: ascending priority, ties keep
    /// declaration order.
    pub fn sorted_slides(&self) -> Vec<Slide> {
        let mut slides = self.slides.clone();
        slides.sort_by_key(|s| s.priority);
        slides
    }
}

/// Read-only, ordered project collection.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }
}
