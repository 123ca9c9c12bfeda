// HTML page rendering for the portfolio
use crate::application::contact_service::ContactForm;
use crate::application::portfolio_service::PortfolioPage;
use crate::application::section::Section;
use crate::domain::collection::CollectionItem;
use crate::domain::defaults;
use crate::domain::experience::ExperienceEntry;
use crate::domain::offering::ServiceOffering;
use crate::domain::profile::ProfileView;
use crate::domain::project::Project;
use crate::infrastructure::config::SiteSettings;
use crate::presentation::theme::ThemeContext;

const CARD: &str = "rounded-2xl border border-black/10 dark:border-white/10 p-6 bg-white/60 dark:bg-black/30 backdrop-blur";
const HEADING: &str = "text-3xl md:text-4xl font-semibold tracking-tight text-gray-900 dark:text-white";
const FIELD: &str = "rounded-xl border border-black/10 dark:border-white/10 bg-white/70 dark:bg-black/30 px-4 py-3";

/// Render the whole page as one HTML document
pub fn render_page(
    page: &PortfolioPage,
    site: &SiteSettings,
    theme: ThemeContext,
    contact: &ContactForm,
) -> String {
    let body = [
        render_theme_toggle(theme),
        render_nav(site),
        render_hero(site),
        render_about(&page.about()),
        render_projects(&page.projects.data),
        render_collections(&page.collections.data),
        render_experience(&page.experience.data),
        render_services(&page.services.data),
        render_contact(contact, theme),
        render_footer(site),
    ]
    .concat();

    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="{class}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<div class="min-h-screen bg-white dark:bg-[#0b0b0b]">
{body}
</div>
</body>
</html>
"#,
        class = theme.document_class(),
        title = html_escape(&site.owner_name),
        body = body,
    )
}

fn render_theme_toggle(theme: ThemeContext) -> String {
    format!(
        r#"<a aria-label="Toggle theme" href="/?theme={}" class="fixed right-6 top-6 z-30 rounded-full px-4 py-2 text-sm">{}</a>
"#,
        theme.toggle().theme.as_str(),
        theme.toggle_label()
    )
}

fn render_nav(site: &SiteSettings) -> String {
    let mut links = String::new();
    for section in Section::ALL {
        links.push_str(&format!(
            r##"<a href="#{}" class="hover:opacity-70 transition">{}</a>"##,
            section.anchor(),
            section.label()
        ));
    }
    links.push_str(r##"<a href="#contact" class="hover:opacity-70 transition">Contact</a>"##);

    format!(
        r##"<nav class="fixed inset-x-0 top-0 z-20"><div class="mx-auto max-w-6xl px-6 py-5 flex items-center justify-between"><a href="#" class="font-medium tracking-tight">{}</a><div class="hidden md:flex items-center gap-6 text-sm">{}</div></div></nav>
"##,
        html_escape(&site.owner_name),
        links
    )
}

fn render_hero(site: &SiteSettings) -> String {
    format!(
        r#"<section class="relative h-[90vh] w-full overflow-hidden">
<div class="absolute inset-0" data-scene="{scene}"></div>
<div class="relative z-10 h-full mx-auto max-w-6xl px-6 flex flex-col justify-center">
<h1 class="text-5xl md:text-7xl font-semibold tracking-tight">{name}</h1>
<p class="mt-4 text-xl md:text-2xl">{tagline}</p>
<p class="mt-6 max-w-2xl">{intro}</p>
</div>
</section>
"#,
        scene = html_escape(&site.scene_url),
        name = html_escape(&site.owner_name),
        tagline = html_escape(&site.tagline),
        intro = html_escape(&site.intro),
    )
}

fn render_about(profile: &ProfileView) -> String {
    let education: String = profile
        .education
        .iter()
        .map(|e| format!("<li>• {}</li>", html_escape(e)))
        .collect();

    format!(
        r#"<section id="about" class="mx-auto max-w-6xl px-6 py-20 md:py-28">
<h2 class="{heading}">About</h2>
<p class="mt-6 leading-relaxed">{bio}</p>
<div class="mt-8 grid sm:grid-cols-2 gap-6">
<div><h3 class="text-sm uppercase tracking-wider">Education</h3><ul class="mt-3 space-y-2">{education}</ul></div>
<div><h3 class="text-sm uppercase tracking-wider">Skills</h3><p class="mt-3">{design}</p><p class="mt-1">{tech}</p></div>
</div>
<p class="mt-8">{philosophy}</p>
<div class="mt-6 flex flex-wrap items-center gap-4 text-sm">
<a href="mailto:{email}" class="rounded-full px-4 py-2">Email</a>
<a href="{resume}" class="rounded-full px-4 py-2">Resume</a>
</div>
</section>
"#,
        heading = HEADING,
        bio = html_escape(&profile.bio),
        education = education,
        design = html_escape(&profile.skills_design.join(" • ")),
        tech = html_escape(&profile.skills_tech.join(" • ")),
        philosophy = html_escape(&profile.philosophy),
        email = html_escape(mail_address(&profile.email)),
        resume = html_escape(safe_href(&profile.resume_url, defaults::PROFILE_RESUME_URL)),
    )
}

fn render_projects(projects: &[Project]) -> String {
    let mut cards = String::new();
    for project in projects {
        let tags: String = project
            .card_tags()
            .iter()
            .map(|t| format!("<span>{}</span>", html_escape(t)))
            .collect();

        cards.push_str(&format!(
            r##"<a href="#" class="group block rounded-2xl overflow-hidden border border-black/10 dark:border-white/10">{cover}<div class="p-5"><div class="flex items-center gap-2 text-[11px] uppercase tracking-wider">{tags}</div><h3 class="mt-2 text-lg font-medium">{title}</h3><p class="mt-1">{summary}</p><div class="mt-3 text-sm">Read case</div></div></a>"##,
            cover = render_cover(&project.cover_image, "aspect-[4/3]"),
            tags = tags,
            title = html_escape(&project.title),
            summary = html_escape(&project.summary),
        ));
    }

    format!(
        r##"<section id="projects" class="mx-auto max-w-6xl px-6 py-20 md:py-28">
<div class="flex items-end justify-between"><h2 class="{}">Featured Projects</h2><a href="#" class="text-sm hover:opacity-70">View all</a></div>
<div class="mt-10 grid md:grid-cols-3 gap-6">{}</div>
</section>
"##,
        HEADING, cards
    )
}

fn render_collections(items: &[CollectionItem]) -> String {
    let mut tiles = String::new();
    for item in items {
        tiles.push_str(&format!(
            r#"<div class="mb-4 break-inside-avoid rounded-xl overflow-hidden border border-black/10 dark:border-white/10">{}<div class="p-3"><div class="text-[11px] uppercase tracking-wider">{}</div><div>{}</div></div></div>"#,
            render_cover(&item.image_url, "aspect-[4/5]"),
            html_escape(&item.category),
            html_escape(&item.title),
        ));
    }

    format!(
        r#"<section id="collections" class="mx-auto max-w-6xl px-6 py-20 md:py-28">
<h2 class="{}">Collections</h2>
<div class="mt-8 columns-1 sm:columns-2 md:columns-3 gap-4">{}</div>
</section>
"#,
        HEADING, tiles
    )
}

fn render_experience(entries: &[ExperienceEntry]) -> String {
    let mut cards = String::new();
    for entry in entries {
        let description = entry
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| format!(r#"<p class="mt-3">{}</p>"#, html_escape(d)))
            .unwrap_or_default();

        cards.push_str(&format!(
            r#"<div class="{card}"><div class="text-xs uppercase tracking-wider">{kind}</div><div class="mt-1 text-lg">{role} — {org}</div><div class="text-sm">{period}</div>{description}</div>"#,
            card = CARD,
            kind = html_escape(&entry.kind),
            role = html_escape(&entry.role),
            org = html_escape(&entry.org),
            period = html_escape(&entry.period()),
            description = description,
        ));
    }

    format!(
        r#"<section id="experience" class="mx-auto max-w-6xl px-6 py-20 md:py-28">
<h2 class="{}">Experience</h2>
<div class="mt-8 grid md:grid-cols-2 gap-6">{}</div>
</section>
"#,
        HEADING, cards
    )
}

fn render_services(offerings: &[ServiceOffering]) -> String {
    let cards: String = offerings
        .iter()
        .map(|s| {
            format!(
                r#"<div class="{}"><div class="text-lg">{}</div><p class="mt-2">{}</p></div>"#,
                CARD,
                html_escape(&s.title),
                html_escape(&s.description)
            )
        })
        .collect();

    format!(
        r#"<section id="services" class="mx-auto max-w-6xl px-6 py-20 md:py-28">
<h2 class="{}">What I Do</h2>
<div class="mt-8 grid md:grid-cols-2 gap-6">{}</div>
</section>
"#,
        HEADING, cards
    )
}

fn render_contact(form: &ContactForm, theme: ThemeContext) -> String {
    let fields = form.fields();
    format!(
        r#"<section id="contact" class="mx-auto max-w-3xl px-6 py-20 md:py-28">
<h2 class="{heading}">Contact</h2>
<form method="post" action="/contact#contact" class="mt-8 grid gap-4">
<input type="hidden" name="theme" value="{theme}">
<input required name="name" value="{name}" placeholder="Your name" class="{field}">
<input required type="email" name="email" value="{email}" placeholder="Email" class="{field}">
<textarea required name="message" placeholder="Message" rows="6" class="{field}">{message}</textarea>
<div class="flex items-center gap-4"><button class="rounded-full px-5 py-2.5">Send</button><span class="text-sm" role="status">{status}</span></div>
</form>
</section>
"#,
        heading = HEADING,
        theme = theme.theme.as_str(),
        name = html_escape(&fields.name),
        email = html_escape(&fields.email),
        message = html_escape(&fields.message),
        field = FIELD,
        status = html_escape(form.status_message()),
    )
}

fn render_footer(site: &SiteSettings) -> String {
    format!(
        r#"<footer class="mx-auto max-w-6xl px-6 py-10 text-sm"><div class="border-t border-black/10 dark:border-white/10 pt-6">Crafted with intention by {}</div></footer>
"#,
        html_escape(&site.owner_name)
    )
}

// Gradient placeholder when there is no image
fn render_cover(image_url: &str, aspect: &str) -> String {
    if image_url.is_empty() {
        format!(
            r#"<div class="{} w-full bg-gradient-to-br from-neutral-100 to-neutral-200 dark:from-neutral-800 dark:to-neutral-700"></div>"#,
            aspect
        )
    } else {
        format!(
            r#"<img src="{}" alt="" class="{} w-full object-cover">"#,
            html_escape(image_url),
            aspect
        )
    }
}

const LINK_SCHEMES: &[&str] = &["http://", "https://", "mailto:"];

// Backend links only render with a known scheme or as a fragment
fn safe_href<'a>(url: &'a str, fallback: &'a str) -> &'a str {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    if url.starts_with('#') || LINK_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        url
    } else {
        tracing::debug!("Dropping link with unsupported scheme: {}", url);
        fallback
    }
}

fn mail_address(email: &str) -> &str {
    let email = email.trim();
    if email.is_empty() || email.contains(':') {
        defaults::PROFILE_EMAIL
    } else {
        email
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
