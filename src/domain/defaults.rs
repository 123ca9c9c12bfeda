// Built-in content shown whenever the backend cannot supply a section
use super::collection::CollectionItem;
use super::experience::ExperienceEntry;
use super::offering::ServiceOffering;
use super::project::Project;

pub const PROFILE_BIO: &str = "Master of Design student at NIFT Panchkula (2024–2026). Passionate about information design, systems thinking, and visual storytelling across mediums.";
pub const PROFILE_EDUCATION: &[&str] = &["Master of Design — NIFT Panchkula (2024–2026)"];
pub const PROFILE_SKILLS_DESIGN: &[&str] = &["Visual Design", "Information Design", "System Mapping"];
pub const PROFILE_SKILLS_TECH: &[&str] = &["Figma", "Adobe Suite", "Prototyping"];
pub const PROFILE_PHILOSOPHY: &str =
    "Design is a way to narrate systems, reduce complexity, and craft meaningful experiences.";
pub const PROFILE_EMAIL: &str = "hello@example.com";
pub const PROFILE_RESUME_URL: &str = "#";

const COLLECTION_SIZE: usize = 8;

pub fn projects() -> Vec<Project> {
    vec![
        Project::new(
            "Information System for Campus Mobility",
            "Wayfinding and data storytelling",
            &["Information Design", "UX"],
        ),
        Project::new(
            "Visual Identity for Creative Collective",
            "Modular system and brand toolkit",
            &["Identity", "Systems"],
        ),
        Project::new(
            "Product Concept — Camera of 2030",
            "Speculative design & interaction",
            &["Concept", "Vision"],
        ),
    ]
}

pub fn collections() -> Vec<CollectionItem> {
    (0..COLLECTION_SIZE)
        .map(|i| {
            let category = if i % 2 == 1 { "Photography" } else { "Visual Design" };
            CollectionItem::new(format!("Study {}", i + 1), category)
        })
        .collect()
}

pub fn experience() -> Vec<ExperienceEntry> {
    let entry = |kind: &str, role: &str, org: &str, start: &str, end: Option<&str>, description: &str| {
        ExperienceEntry {
            kind: kind.to_string(),
            role: role.to_string(),
            org: org.to_string(),
            start: start.to_string(),
            end: end.map(str::to_string),
            description: Some(description.to_string()),
        }
    };

    vec![
        entry("Internship", "Design Intern", "Studio Alpha", "2023", Some("2023"), "Worked on visual systems and UI."),
        entry("Leadership", "Club Lead", "Fashion Club", "2022", Some("2023"), "Led events and collaborations."),
        entry("Volunteering", "Volunteer", "Design for Good", "2021", None, "Community-centered design."),
    ]
}

pub fn services() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering::new(
            "Information Design",
            "Turning complexity into clarity across reports, maps, and systems.",
        ),
        ServiceOffering::new("System Mapping", "Visualizing relationships, feedback loops, and flows."),
        ServiceOffering::new(
            "Product & UI/UX Concepts",
            "Research-driven concepts and interaction models.",
        ),
        ServiceOffering::new("Visual Identity", "Modular identities and expressive visual language."),
        ServiceOffering::new("Creative Direction", "Story-driven campaigns and art direction."),
    ]
}
