use std::time::Duration;

use egui_kittest::Harness;
use userboard_ui::UsersApp;
use userboard_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Time to wait for the mocked endpoint between frames (milliseconds).
const API_RESPONSE_WAIT_MS: u64 = 25;

/// Frames to pump before giving up on the fetch.
const MAX_POLL_FRAMES: usize = 120;

/// Wide enough for all eight columns without horizontal scrolling.
const WINDOW_SIZE: [f32; 2] = [1400.0, 900.0];

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    _mock_server: MockServer,
    harness: Harness<'a, UsersApp>,
}

impl<'a> TestCtx<'a> {
    /// App whose users endpoint serves `count` generated users.
    #[allow(unused)]
    pub async fn with_users(count: usize) -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_json(sample_users(count))).await
    }

    /// App whose users endpoint answers with `response`, expecting exactly one call.
    pub async fn with_response(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(response)
            .expect(1)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = UsersApp::new(state);
        let harness = app_harness(app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, UsersApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, UsersApp> {
        &self.harness
    }

    /// Runs frames until the users view leaves `Loading`.
    pub async fn wait_until_settled(&mut self) {
        wait_until_settled(&mut self.harness).await;
    }
}

pub fn app_harness<'a>(app: UsersApp) -> Harness<'a, UsersApp> {
    Harness::builder()
        .with_size(WINDOW_SIZE)
        .build_eframe(|_| app)
}

/// Runs frames, giving the fetch thread time between them, until the view settles.
pub async fn wait_until_settled(harness: &mut Harness<'_, UsersApp>) {
    for _ in 0..MAX_POLL_FRAMES {
        harness.step();
        if !harness.state().state.users_view.is_loading() {
            // One more frame so the settled view is what gets queried.
            harness.step();
            return;
        }
        yield_wait_for_network(API_RESPONSE_WAIT_MS).await;
    }
    panic!("users view still loading after {MAX_POLL_FRAMES} frames");
}

pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Steps enough frames for a click to be handled and its result rendered.
#[allow(unused)]
pub fn settle_click(harness: &mut Harness<'_, UsersApp>) {
    harness.step();
    harness.step();
}

/// `count` users in the shape served by jsonplaceholder, ids starting at 1.
pub fn sample_users(count: usize) -> serde_json::Value {
    let users: Vec<_> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "name": format!("User {i}"),
                "username": format!("user{i}"),
                "email": format!("user{i}@example.com"),
                "address": {
                    "street": "Kulas Light",
                    "city": format!("City {i}"),
                    "geo": { "lat": format!("-37.{i:04}"), "lng": format!("81.{i:04}") }
                },
                "phone": format!("1-770-736-{i:04}"),
                "website": format!("user{i}.org"),
                "company": { "name": "Romaguera-Crona" }
            })
        })
        .collect();
    serde_json::Value::Array(users)
}
