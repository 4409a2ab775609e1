use std::future::IntoFuture;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use axum_test::TestServer;
use medialens::AppState;
use medialens::gate::{ApiKeyGate, ConfiguredKeyGate};
use medialens::server::router;
use medialens::session::ShellStore;
use medialens::shell::{AppView, NavItem, ShellState};

/// Gate that counts continuation calls and hides itself after the first.
#[derive(Debug)]
struct CountingGate {
    showing: AtomicBool,
    calls: AtomicUsize,
}

impl CountingGate {
    fn new(showing: bool) -> Arc<Self> {
        Arc::new(Self {
            showing: AtomicBool::new(showing),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ApiKeyGate for CountingGate {
    fn must_show(&self) -> bool {
        self.showing.load(Ordering::SeqCst)
    }

    fn try_continue(&self) -> bool {
        let ran = self
            .showing
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok();
        if ran {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
        ran
    }
}

fn server_with(shells: ShellStore, gate: Arc<dyn ApiKeyGate>) -> TestServer {
    let state = AppState { shells, gate };
    TestServer::new(router(state, "static")).expect("Failed to build test server")
}

fn server_with_gate(gate: Arc<dyn ApiKeyGate>) -> TestServer {
    server_with(ShellStore::new(), gate)
}

fn server() -> TestServer {
    server_with_gate(CountingGate::new(false))
}

/// Pull the session ID out of the first `/shell/{id}/...` link in the page.
fn session_id(html: &str) -> String {
    let start = html.find("/shell/").expect("page has no shell links") + "/shell/".len();
    let end = start + html[start..].find('/').expect("unterminated shell link");
    html[start..end].to_string()
}

async fn open_session(server: &TestServer) -> (String, String) {
    let response = server.get("/").await;
    response.assert_status_ok();
    let html = response.text();
    (session_id(&html), html)
}

async fn state_of(server: &TestServer, id: &str) -> ShellState {
    server.get(&format!("/shell/{id}/state")).await.json()
}

#[tokio::test]
async fn test_index_renders_expanded_dashboard() {
    let server = server();
    let (id, html) = open_session(&server).await;

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-view="dashboard""#));
    assert!(html.contains("w-[260px]"));
    assert_eq!(html.matches("data-nav-label").count(), 8);

    assert_eq!(state_of(&server, &id).await, ShellState::default());
}

#[tokio::test]
async fn test_each_visit_gets_its_own_session() {
    let server = server();
    let (a, _) = open_session(&server).await;
    let (b, _) = open_session(&server).await;
    assert_ne!(a, b);

    server.post(&format!("/shell/{a}/sidebar/toggle")).await.assert_status_ok();
    assert!(state_of(&server, &a).await.sidebar_collapsed);
    assert!(!state_of(&server, &b).await.sidebar_collapsed);
}

#[tokio::test]
async fn test_sidebar_toggle_round_trip() {
    let server = server();
    let (id, _) = open_session(&server).await;
    let toggle = format!("/shell/{id}/sidebar/toggle");

    let collapsed = server.post(&toggle).await;
    collapsed.assert_status_ok();
    let html = collapsed.text();
    assert!(!html.contains("<!DOCTYPE html>"), "toggle returns a fragment");
    assert!(html.contains("w-[70px]"));
    assert_eq!(html.matches("data-nav-label").count(), 0);

    let expanded = server.post(&toggle).await;
    expanded.assert_status_ok();
    let html = expanded.text();
    assert!(html.contains("w-[260px]"));
    assert_eq!(html.matches("data-nav-label").count(), 8);

    assert_eq!(state_of(&server, &id).await, ShellState::default());
}

#[tokio::test]
async fn test_home_selects_dashboard() {
    let server = server();
    let (id, _) = open_session(&server).await;

    let response = server.post(&format!("/shell/{id}/nav/home")).await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"data-view="dashboard""#));
    assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);

    assert_eq!(state_of(&server, &id).await.view, AppView::Dashboard);
}

#[tokio::test]
async fn test_inert_items_do_not_change_state() {
    let server = server();
    let (id, _) = open_session(&server).await;
    server.post(&format!("/shell/{id}/sidebar/toggle")).await.assert_status_ok();
    let before = state_of(&server, &id).await;

    for item in NavItem::ALL.into_iter().filter(|i| *i != NavItem::Home) {
        server
            .post(&format!("/shell/{id}/nav/{}", item.slug()))
            .await
            .assert_status_ok();
    }

    assert_eq!(state_of(&server, &id).await, before);
}

#[tokio::test]
async fn test_unknown_nav_item_is_not_found() {
    let server = server();
    let (id, _) = open_session(&server).await;

    server
        .post(&format!("/shell/{id}/nav/settings"))
        .expect_failure()
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let server = server();

    for path in [
        "/shell/missing",
        "/shell/missing/state",
    ] {
        server.get(path).expect_failure().await.assert_status_not_found();
    }
    for path in [
        "/shell/missing/sidebar/toggle",
        "/shell/missing/nav/home",
        "/shell/missing/gate/continue",
    ] {
        server.post(path).expect_failure().await.assert_status_not_found();
    }
}

#[tokio::test]
async fn test_gate_absent_when_not_required() {
    let server = server();
    let (_, html) = open_session(&server).await;
    assert!(!html.contains("data-gate-dialog"));
}

#[tokio::test]
async fn test_gate_overlays_until_confirmed() {
    let gate = CountingGate::new(true);
    let server = server_with_gate(gate.clone());
    let (id, html) = open_session(&server).await;

    assert_eq!(html.matches("data-gate-dialog").count(), 1);
    assert!(html.contains(&format!(r#"hx-post="/shell/{id}/gate/continue""#)));

    // Rendering alone never runs the continuation.
    server.get(&format!("/shell/{id}")).await.assert_status_ok();
    server.post(&format!("/shell/{id}/sidebar/toggle")).await.assert_status_ok();
    assert_eq!(gate.calls(), 0);

    let response = server.post(&format!("/shell/{id}/gate/continue")).await;
    response.assert_status_ok();
    assert!(!response.text().contains("data-gate-dialog"));
    assert_eq!(gate.calls(), 1);

    // Re-render and repeat confirmation leave the count alone.
    let page = server.get(&format!("/shell/{id}")).await.text();
    assert!(!page.contains("data-gate-dialog"));
    server
        .post(&format!("/shell/{id}/gate/continue"))
        .await
        .assert_status_ok();
    assert_eq!(gate.calls(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_confirmations_continue_once() {
    let gate = CountingGate::new(true);
    let server = server_with_gate(gate.clone());
    let (id, _) = open_session(&server).await;
    let path = format!("/shell/{id}/gate/continue");

    let (a, b, c, d) = tokio::join!(
        server.post(&path).into_future(),
        server.post(&path).into_future(),
        server.post(&path).into_future(),
        server.post(&path).into_future(),
    );
    for response in [a, b, c, d] {
        response.assert_status_ok();
        assert!(!response.text().contains("data-gate-dialog"));
    }
    assert_eq!(gate.calls(), 1);
}

#[tokio::test]
async fn test_configured_gate_is_shared_across_sessions() {
    let server = server_with_gate(Arc::new(ConfiguredKeyGate::new(true, false)));
    let (a, html_a) = open_session(&server).await;
    let (_, html_b) = open_session(&server).await;
    assert!(html_a.contains("data-gate-dialog"));
    assert!(html_b.contains("data-gate-dialog"));

    server
        .post(&format!("/shell/{a}/gate/continue"))
        .await
        .assert_status_ok();

    let (_, html_c) = open_session(&server).await;
    assert!(!html_c.contains("data-gate-dialog"));
}

#[tokio::test]
async fn test_page_loads_do_not_grow_sessions_past_cap() {
    let shells = ShellStore::with_limits(Duration::from_secs(60), 25);
    let server = server_with(shells.clone(), CountingGate::new(false));

    let (first, _) = open_session(&server).await;
    for _ in 0..200 {
        server.get("/").await.assert_status_ok();
    }
    let (last, _) = open_session(&server).await;

    assert_eq!(shells.len(), 25);
    server
        .get(&format!("/shell/{first}"))
        .expect_failure()
        .await
        .assert_status_not_found();
    server.get(&format!("/shell/{last}")).await.assert_status_ok();
}

#[tokio::test]
async fn test_idle_session_expires() {
    let shells = ShellStore::with_limits(Duration::from_millis(50), 100);
    let server = server_with(shells.clone(), CountingGate::new(false));
    let (stale, _) = open_session(&server).await;

    tokio::time::sleep(Duration::from_millis(120)).await;
    let (fresh, _) = open_session(&server).await;

    server
        .post(&format!("/shell/{stale}/sidebar/toggle"))
        .expect_failure()
        .await
        .assert_status_not_found();
    assert_eq!(shells.len(), 1);
    server.get(&format!("/shell/{fresh}/state")).await.assert_status_ok();
}

#[tokio::test]
async fn test_feature_grid() {
    let server = server();
    let (_, html) = open_session(&server).await;

    for title in [
        "Brand Health Check",
        "Competitor Spy",
        "Viral Content Search",
        "Influencer Rankings",
        "Keyword Monitor",
        "Ad Strategy Library",
    ] {
        assert!(html.contains(&format!(r#"data-feature="{title}""#)));
    }
    assert_eq!(html.matches(r#"data-badge="premium""#).count(), 3);
}

#[tokio::test]
async fn test_healthz() {
    let server = server();
    let response = server.get("/healthz").await;
    response.assert_status_ok();
    response.assert_text("ok");
}

#[tokio::test]
async fn test_static_assets() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("theme.css"), "body { margin: 0; }").expect("write css");

    let state = AppState {
        shells: ShellStore::new(),
        gate: CountingGate::new(false),
    };
    let server = TestServer::new(router(state, dir.path().to_str().expect("utf-8 path")))
        .expect("Failed to build test server");

    let response = server.get("/static/theme.css").await;
    response.assert_status_ok();
    response.assert_text("body { margin: 0; }");
}
