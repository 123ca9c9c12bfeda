// Section table - which endpoint feeds which section, and what it shows without one
use crate::domain::collection::CollectionItem;
use crate::domain::defaults;
use crate::domain::experience::ExperienceEntry;
use crate::domain::offering::ServiceOffering;
use crate::domain::profile::Profile;
use crate::domain::project::Project;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Profile,
    Projects,
    Collections,
    Experience,
    Services,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Profile,
        Section::Projects,
        Section::Collections,
        Section::Experience,
        Section::Services,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Section::Profile => "/api/profile",
            Section::Projects => "/api/projects",
            Section::Collections => "/api/collections",
            Section::Experience => "/api/experience",
            Section::Services => "/api/services",
        }
    }

    /// Page anchor of the section. The profile renders as the about block.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Profile => "about",
            Section::Projects => "projects",
            Section::Collections => "collections",
            Section::Experience => "experience",
            Section::Services => "services",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Profile => "About",
            Section::Projects => "Projects",
            Section::Collections => "Collections",
            Section::Experience => "Experience",
            Section::Services => "Services",
        }
    }
}

/// Data a section can display, decoded from its endpoint's wire shape.
pub trait SectionContent: Clone + Send + Sync + 'static {
    type Wire: DeserializeOwned;

    /// `None` when the payload has nothing to show.
    fn from_wire(wire: Self::Wire) -> Option<Self>;
}

impl<T> SectionContent for Vec<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    type Wire = Vec<T>;

    fn from_wire(wire: Self::Wire) -> Option<Self> {
        (!wire.is_empty()).then_some(wire)
    }
}

// The profile endpoint answers with a list holding zero or one profile.
impl SectionContent for Profile {
    type Wire = Vec<Profile>;

    fn from_wire(wire: Self::Wire) -> Option<Self> {
        wire.into_iter().next()
    }
}

/// One row of the section table: an endpoint and its default content.
pub struct SectionSpec<T> {
    pub section: Section,
    pub default: fn() -> T,
}

impl<T> SectionSpec<T> {
    pub fn path(&self) -> &'static str {
        self.section.path()
    }

    pub fn default_value(&self) -> T {
        (self.default)()
    }
}

pub const PROFILE: SectionSpec<Profile> = SectionSpec {
    section: Section::Profile,
    default: Profile::default,
};

pub const PROJECTS: SectionSpec<Vec<Project>> = SectionSpec {
    section: Section::Projects,
    default: defaults::projects,
};

pub const COLLECTIONS: SectionSpec<Vec<CollectionItem>> = SectionSpec {
    section: Section::Collections,
    default: defaults::collections,
};

pub const EXPERIENCE: SectionSpec<Vec<ExperienceEntry>> = SectionSpec {
    section: Section::Experience,
    default: defaults::experience,
};

pub const SERVICES: SectionSpec<Vec<ServiceOffering>> = SectionSpec {
    section: Section::Services,
    default: defaults::services,
};
