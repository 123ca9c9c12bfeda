// Fetch-with-fallback - section view models that never surface backend errors
use crate::application::content_source::ContentSource;
use crate::application::section::{SectionContent, SectionSpec};
use anyhow::Context;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// State backing one section of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionState<T> {
    pub loading: bool,
    /// True while pending and whenever the backend could not supply the data
    pub using_default: bool,
    pub data: T,
}

impl<T> SectionState<T> {
    pub fn pending(default: T) -> Self {
        Self {
            loading: true,
            using_default: true,
            data: default,
        }
    }

    fn live(data: T) -> Self {
        Self {
            loading: false,
            using_default: false,
            data,
        }
    }

    fn fallback(default: T) -> Self {
        Self {
            loading: false,
            using_default: true,
            data: default,
        }
    }
}

/// Fetch `path` and decode it, or hand back `default` on any failure.
/// The returned state is never loading.
pub async fn fetch_with_fallback<T: SectionContent>(
    source: &dyn ContentSource,
    path: &str,
    default: T,
    timeout: Duration,
) -> SectionState<T> {
    match resolve::<T>(source, path, timeout).await {
        Ok(Some(data)) => {
            tracing::debug!("Section {} resolved from backend", path);
            SectionState::live(data)
        }
        Ok(None) => {
            tracing::debug!("Section {} came back empty, using defaults", path);
            SectionState::fallback(default)
        }
        Err(e) => {
            tracing::warn!("Fetching {} failed, using defaults: {:#}", path, e);
            SectionState::fallback(default)
        }
    }
}

async fn resolve<T: SectionContent>(
    source: &dyn ContentSource,
    path: &str,
    timeout: Duration,
) -> anyhow::Result<Option<T>> {
    let body = tokio::time::timeout(timeout, source.fetch_json(path))
        .await
        .map_err(|_| anyhow::anyhow!("no response within {:?}", timeout))??;

    let wire: T::Wire = serde_json::from_value(body).context("malformed payload")?;
    Ok(T::from_wire(wire))
}

/// Shared slot a section task commits into. Commits and teardown take the
/// same watch lock, so nothing lands after `close` returns.
struct SectionSlot<T> {
    state: watch::Sender<SectionState<T>>,
    alive: AtomicBool,
}

impl<T> SectionSlot<T> {
    fn new(initial: SectionState<T>) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            state,
            alive: AtomicBool::new(true),
        }
    }

    fn commit(&self, resolved: SectionState<T>) -> bool {
        self.state.send_if_modified(|state| {
            if !self.alive.load(Ordering::Acquire) {
                return false;
            }
            *state = resolved;
            true
        })
    }

    fn close(&self) {
        // Returning true wakes anyone waiting on `resolved`.
        self.state.send_if_modified(|_| self.alive.swap(false, Ordering::AcqRel));
    }

    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

/// A displayed section: one in-flight fetch plus the state it resolves into.
/// Dropping the handle tears the section down.
pub struct SectionHandle<T> {
    slot: Arc<SectionSlot<T>>,
    task: JoinHandle<()>,
}

/// Activate a section: start in the loading state and issue exactly one request.
pub fn spawn_section<T: SectionContent>(
    source: Arc<dyn ContentSource>,
    spec: &SectionSpec<T>,
    timeout: Duration,
) -> SectionHandle<T> {
    let section = spec.section;
    let default = spec.default_value();
    let slot = Arc::new(SectionSlot::new(SectionState::pending(default.clone())));

    let task_slot = slot.clone();
    let task = tokio::spawn(async move {
        let path = section.path();
        let resolved = fetch_with_fallback(source.as_ref(), path, default, timeout).await;
        if !task_slot.commit(resolved) {
            tracing::debug!("Section {} was torn down, discarding result", path);
        }
    });

    SectionHandle { slot, task }
}

impl<T> SectionHandle<T> {
    pub fn is_cancelled(&self) -> bool {
        !self.slot.is_alive()
    }

    /// Tear the section down. No state update happens after this returns.
    pub fn cancel(&self) {
        self.slot.close();
        self.task.abort();
    }
}

impl<T: Clone> SectionHandle<T> {
    pub fn snapshot(&self) -> SectionState<T> {
        self.slot.state.borrow().clone()
    }

    /// Wait until the section stops loading. `None` once cancelled.
    pub async fn resolved(&self) -> Option<SectionState<T>> {
        let mut rx = self.slot.state.subscribe();
        let slot = &self.slot;
        let state = {
            let current = rx
                .wait_for(|state| !state.loading || !slot.is_alive())
                .await
                .ok()?;
            SectionState::clone(&current)
        };

        slot.is_alive().then_some(state)
    }
}

impl<T> Drop for SectionHandle<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::content_source::fake::{FakeSource, Reply};
    use crate::application::section::{PROFILE, PROJECTS, SERVICES};
    use crate::domain::defaults;
    use crate::domain::project::Project;
    use serde_json::json;
    use tokio::sync::Notify;

    const TIMEOUT: Duration = Duration::from_secs(2);

    #[tokio::test]
    async fn test_success_replaces_defaults_without_merging() {
        let source = FakeSource::new().reply(
            "/api/projects",
            Reply::Json(json!([{"title": "Atlas", "summary": "Maps", "tags": ["Maps"]}])),
        );

        let state = fetch_with_fallback(&source, PROJECTS.path(), PROJECTS.default_value(), TIMEOUT).await;

        assert!(!state.loading);
        assert!(!state.using_default);
        assert_eq!(state.data, vec![Project::new("Atlas", "Maps", &["Maps"])]);
    }

    #[tokio::test]
    async fn test_null_optional_fields_keep_live_data() {
        let source = FakeSource::new()
            .reply(
                "/api/projects",
                Reply::Json(json!([{"title": "Atlas", "summary": "Maps", "tags": ["a"], "cover_image": null}])),
            )
            .reply(
                "/api/collections",
                Reply::Json(json!([{"title": "Shot", "category": "Photo", "image_url": null}])),
            );

        let projects = fetch_with_fallback(&source, "/api/projects", defaults::projects(), TIMEOUT).await;
        assert!(!projects.using_default);
        assert_eq!(projects.data.len(), 1);
        assert_eq!(projects.data[0].title, "Atlas");

        let collections =
            fetch_with_fallback(&source, "/api/collections", defaults::collections(), TIMEOUT).await;
        assert!(!collections.using_default);
        assert_eq!(collections.data.len(), 1);
        assert_eq!(collections.data[0].category, "Photo");
    }

    #[tokio::test]
    async fn test_failure_empty_and_malformed_fall_back() {
        let source = FakeSource::new()
            .reply("/api/projects", Reply::Fail)
            .reply("/api/services", Reply::Json(json!([])))
            .reply("/api/collections", Reply::Json(json!({"items": "nope"})));

        let projects = fetch_with_fallback(&source, "/api/projects", defaults::projects(), TIMEOUT).await;
        assert!(projects.using_default);
        assert!(!projects.loading);
        assert_eq!(projects.data, defaults::projects());

        let services = fetch_with_fallback(&source, "/api/services", defaults::services(), TIMEOUT).await;
        assert!(services.using_default);
        assert_eq!(services.data.len(), 5);

        let collections =
            fetch_with_fallback(&source, "/api/collections", defaults::collections(), TIMEOUT).await;
        assert!(collections.using_default);
        assert_eq!(collections.data, defaults::collections());
    }

    #[tokio::test]
    async fn test_profile_takes_first_element() {
        let source = FakeSource::new().reply("/api/profile", Reply::Json(json!([{"bio": "Hello there"}])));

        let state = fetch_with_fallback(&source, PROFILE.path(), PROFILE.default_value(), TIMEOUT).await;

        assert!(!state.using_default);
        let view = state.data.resolve();
        assert_eq!(view.bio, "Hello there");
        assert_eq!(view.email, defaults::PROFILE_EMAIL);
    }

    #[tokio::test]
    async fn test_hung_request_times_out_to_defaults() {
        let source = FakeSource::new().reply("/api/services", Reply::Hang);

        let state = fetch_with_fallback(
            &source,
            SERVICES.path(),
            SERVICES.default_value(),
            Duration::from_millis(50),
        )
        .await;

        assert!(!state.loading);
        assert!(state.using_default);
        assert_eq!(state.data, defaults::services());
    }

    #[tokio::test]
    async fn test_handle_starts_loading_and_resolves_once() {
        let gate = Arc::new(Notify::new());
        let source = Arc::new(FakeSource::new().reply(
            "/api/projects",
            Reply::Gated(gate.clone(), json!([{"title": "Atlas"}])),
        ));

        let handle = spawn_section(source.clone(), &PROJECTS, TIMEOUT);
        let pending = handle.snapshot();
        assert!(pending.loading);
        assert!(pending.using_default);
        assert_eq!(pending.data, defaults::projects());

        gate.notify_one();
        let resolved = handle.resolved().await.expect("section still alive");
        assert!(!resolved.loading);
        assert_eq!(resolved.data.len(), 1);
        assert_eq!(resolved.data[0].title, "Atlas");
        assert_eq!(source.calls("/api/projects"), 1);
    }

    #[tokio::test]
    async fn test_cancelled_handle_ignores_late_response() {
        let gate = Arc::new(Notify::new());
        let source = Arc::new(FakeSource::new().reply(
            "/api/projects",
            Reply::Gated(gate.clone(), json!([{"title": "Late"}])),
        ));

        let handle = spawn_section(source.clone(), &PROJECTS, TIMEOUT);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(source.calls("/api/projects"), 1);

        handle.cancel();
        gate.notify_one();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(handle.is_cancelled());
        let state = handle.snapshot();
        assert!(state.loading);
        assert_eq!(state.data, defaults::projects());
        assert_eq!(handle.resolved().await, None);
    }

    #[test]
    fn test_closed_slot_rejects_commit() {
        let slot = SectionSlot::new(SectionState::pending(defaults::services()));
        let mut rx = slot.state.subscribe();

        slot.close();
        let committed = slot.commit(SectionState::live(Vec::new()));

        assert!(!committed);
        let state = rx.borrow_and_update().clone();
        assert!(state.loading);
        assert_eq!(state.data.len(), 5);
    }

    #[tokio::test]
    async fn test_independent_sections_do_not_interfere() {
        let source = Arc::new(
            FakeSource::new()
                .reply("/api/projects", Reply::Fail)
                .reply("/api/services", Reply::Json(json!([{"title": "Zines", "description": "Small press"}]))),
        );

        let projects = spawn_section(source.clone(), &PROJECTS, TIMEOUT);
        let services = spawn_section(source.clone(), &SERVICES, TIMEOUT);
        let (projects, services) = tokio::join!(projects.resolved(), services.resolved());

        let projects = projects.unwrap();
        let services = services.unwrap();
        assert!(projects.using_default);
        assert_eq!(projects.data, defaults::projects());
        assert!(!services.using_default);
        assert_eq!(services.data.len(), 1);
        assert_eq!(services.data[0].title, "Zines");
    }
}
