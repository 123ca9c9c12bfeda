// Portfolio service - Loads every section of the page concurrently
use crate::application::content_source::ContentSource;
use crate::application::fetch::{fetch_with_fallback, spawn_section, SectionHandle, SectionState};
use crate::application::section::{
    Section, SectionContent, SectionSpec, COLLECTIONS, EXPERIENCE, PROFILE, PROJECTS, SERVICES,
};
use crate::domain::collection::CollectionItem;
use crate::domain::experience::ExperienceEntry;
use crate::domain::offering::ServiceOffering;
use crate::domain::profile::{Profile, ProfileView};
use crate::domain::project::Project;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioPage {
    pub profile: SectionState<Profile>,
    pub projects: SectionState<Vec<Project>>,
    pub collections: SectionState<Vec<CollectionItem>>,
    pub experience: SectionState<Vec<ExperienceEntry>>,
    pub services: SectionState<Vec<ServiceOffering>>,
}

impl PortfolioPage {
    pub fn about(&self) -> ProfileView {
        self.profile.data.resolve()
    }

    /// Sections currently showing built-in content
    pub fn defaulted_sections(&self) -> Vec<Section> {
        let flags = [
            self.profile.using_default,
            self.projects.using_default,
            self.collections.using_default,
            self.experience.using_default,
            self.services.using_default,
        ];

        Section::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(section, defaulted)| defaulted.then_some(section))
            .collect()
    }
}

/// Live view models for one displayed page
pub struct PageHandles {
    pub profile: SectionHandle<Profile>,
    pub projects: SectionHandle<Vec<Project>>,
    pub collections: SectionHandle<Vec<CollectionItem>>,
    pub experience: SectionHandle<Vec<ExperienceEntry>>,
    pub services: SectionHandle<Vec<ServiceOffering>>,
}

impl PageHandles {
    /// Wait for every section. `None` if the page was torn down first.
    pub async fn resolved(&self) -> Option<PortfolioPage> {
        let (profile, projects, collections, experience, services) = futures::join!(
            self.profile.resolved(),
            self.projects.resolved(),
            self.collections.resolved(),
            self.experience.resolved(),
            self.services.resolved(),
        );

        Some(PortfolioPage {
            profile: profile?,
            projects: projects?,
            collections: collections?,
            experience: experience?,
            services: services?,
        })
    }

    pub fn cancel(&self) {
        self.profile.cancel();
        self.projects.cancel();
        self.collections.cancel();
        self.experience.cancel();
        self.services.cancel();
    }
}

#[derive(Clone)]
pub struct PortfolioService {
    source: Arc<dyn ContentSource>,
    timeout: Duration,
}

impl PortfolioService {
    pub fn new(source: Arc<dyn ContentSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    pub async fn load_page(&self) -> PortfolioPage {
        let (profile, projects, collections, experience, services) = tokio::join!(
            self.load(&PROFILE),
            self.load(&PROJECTS),
            self.load(&COLLECTIONS),
            self.load(&EXPERIENCE),
            self.load(&SERVICES),
        );

        let page = PortfolioPage {
            profile,
            projects,
            collections,
            experience,
            services,
        };

        let defaulted = page.defaulted_sections();
        if !defaulted.is_empty() {
            tracing::info!("Rendering with built-in content for {:?}", defaulted);
        }

        page
    }

    pub fn open_page(&self) -> PageHandles {
        PageHandles {
            profile: spawn_section(self.source.clone(), &PROFILE, self.timeout),
            projects: spawn_section(self.source.clone(), &PROJECTS, self.timeout),
            collections: spawn_section(self.source.clone(), &COLLECTIONS, self.timeout),
            experience: spawn_section(self.source.clone(), &EXPERIENCE, self.timeout),
            services: spawn_section(self.source.clone(), &SERVICES, self.timeout),
        }
    }

    async fn load<T: SectionContent>(&self, spec: &SectionSpec<T>) -> SectionState<T> {
        fetch_with_fallback(self.source.as_ref(), spec.path(), spec.default_value(), self.timeout).await
    }
}
