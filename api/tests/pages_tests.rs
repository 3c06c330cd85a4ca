//! End-to-end tests for the page flow, driven through the router with a local
//! stand-in for the chat-completion API.

use std::path::PathBuf;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{
        HeaderValue, Request, StatusCode,
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    },
    response::{IntoResponse, Response},
    routing::post,
};
use clap::Parser;
use fridgechef_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::util::ServiceExt;

const BOUNDARY: &str = "fridgechef-test-boundary";
const EXTRACTION_REPLY: &str = "```json\n[\"양파\", \"당근\", \"감자\"]\n```";
const RECIPE_REPLY: &str = "  양파 감자 볶음: 양파와 감자를 채 썰어 볶는다.  ";

#[derive(Clone)]
struct FakeLlm {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

async fn fake_completions(State(fake): State<FakeLlm>, Json(body): Json<Value>) -> Response {
    fake.calls.fetch_add(1, Ordering::SeqCst);
    if fake.fail {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
    }

    let content = if body["messages"][0]["role"] == "system" {
        assert_eq!(body["max_tokens"], 100);
        assert_eq!(body["temperature"], 0.0);
        EXTRACTION_REPLY
    } else {
        assert_eq!(body["max_tokens"], 500);
        RECIPE_REPLY
    };

    Json(json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    }))
    .into_response()
}

struct TestApp {
    router: Router,
    calls: Arc<AtomicUsize>,
    dir: TempDir,
    upload_dir: PathBuf,
    cookie: Option<String>,
}

async fn setup(fail: bool) -> TestApp {
    setup_with_upload_dir(fail, "uploads").await
}

/// `upload_subdir` is relative to the static dir
async fn setup_with_upload_dir(fail: bool, upload_subdir: &str) -> TestApp {
    let calls = Arc::new(AtomicUsize::new(0));
    let fake = Router::new()
        .route("/v1/chat/completions", post(fake_completions))
        .with_state(FakeLlm {
            calls: calls.clone(),
            fail,
        });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, fake).await.unwrap();
    });

    let dir = tempfile::tempdir().unwrap();
    let static_dir = dir.path().join("static");
    let upload_dir = static_dir.join(upload_subdir);
    let args = Args::parse_from([
        "fridgechef",
        "--openai-api-key",
        "sk-test",
        "--llm-base-url",
        base_url.as_str(),
        "--static-dir",
        static_dir.to_str().unwrap(),
        "--upload-dir",
        upload_dir.to_str().unwrap(),
    ]);

    let app_state = state(Arc::new(args)).await.unwrap();

    TestApp {
        router: router(app_state).unwrap(),
        calls,
        dir,
        upload_dir,
        cookie: None,
    }
}

fn multipart_body(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, data) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"images\"; filename=\"{name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

impl TestApp {
    fn llm_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn upload_dir(&self) -> PathBuf {
        self.upload_dir.clone()
    }

    async fn send(&mut self, mut request: Request<Body>) -> Response {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        }

        let response = self.router.clone().oneshot(request).await.unwrap();

        if let Some(set_cookie) = response.headers().get(SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }
        response
    }

    async fn get(&mut self, uri: &str) -> Response {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn post_form(&mut self, uri: &str, body: String) -> Response {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    async fn upload(&mut self, files: &[(&str, &[u8])]) -> Response {
        self.send(
            Request::builder()
                .method("POST")
                .uri("/upload")
                .header(
                    CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(multipart_body(files)))
                .unwrap(),
        )
        .await
    }
}

#[tokio::test]
async fn landing_page_renders() {
    let mut app = setup(false).await;

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("/upload"));
}

#[tokio::test]
async fn results_without_upload_redirects_to_upload() {
    let mut app = setup(false).await;

    let response = app.get("/results").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/upload");
    assert_eq!(app.llm_calls(), 0);
}

#[tokio::test]
async fn full_flow_extracts_once_and_generates_recipe() {
    let mut app = setup(false).await;

    let response = app.upload(&[("fridge.jpg", b"jpeg".as_slice()), ("shelf.png", b"png".as_slice())]).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/results");
    assert!(app.cookie.is_some());

    let first = app.get("/results").await;
    assert_eq!(first.status(), StatusCode::OK);
    let page = body_text(first).await;
    assert!(page.contains("양파"));
    assert!(page.contains("감자"));

    let second = app.get("/results").await;
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(app.llm_calls(), 1);

    let edit = serde_urlencoded::to_string([("ingredients", "양파, 감자 ,, 버터")]).unwrap();
    let response = app.post_form("/results", edit).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/style");

    let style_page = app.get("/style").await;
    assert!(body_text(style_page).await.contains("식사용"));

    let styles =
        serde_urlencoded::to_string([("recipe_type", "간식용"), ("recipe_type", "야식용")])
            .unwrap();
    let response = app.post_form("/style", styles).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/chat");

    let chat = app.get("/chat").await;
    assert_eq!(chat.status(), StatusCode::OK);
    let page = body_text(chat).await;
    assert!(page.contains("양파 감자 볶음: 양파와 감자를 채 썰어 볶는다."));
    assert!(page.contains("간식용, 야식용"));
    assert!(page.contains("양파, 감자, 버터"));
    assert_eq!(app.llm_calls(), 2);

    app.get("/chat").await;
    assert_eq!(app.llm_calls(), 3);
}

#[tokio::test]
async fn upload_lowercases_extension_with_unique_names() {
    let mut app = setup(false).await;

    app.upload(&[("PHOTO.PNG", b"one".as_slice()), ("PHOTO.PNG", b"two".as_slice())])
        .await;

    let mut names: Vec<String> = std::fs::read_dir(app.upload_dir())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(names.len(), 2);
    assert!(names.iter().all(|name| name.ends_with(".png")));
    assert_ne!(names[0], names[1]);
}

#[tokio::test]
async fn new_upload_invalidates_cached_ingredients() {
    let mut app = setup(false).await;

    app.upload(&[("a.jpg", b"a".as_slice())]).await;
    app.get("/results").await;
    let styles = serde_urlencoded::to_string([("recipe_type", "간식용")]).unwrap();
    app.post_form("/style", styles).await;
    assert_eq!(app.llm_calls(), 1);

    app.upload(&[("b.jpg", b"b".as_slice())]).await;
    assert_eq!(std::fs::read_dir(app.upload_dir()).unwrap().count(), 1);

    app.get("/results").await;
    assert_eq!(app.llm_calls(), 2);
}

#[tokio::test]
async fn sessions_are_not_shared_between_visitors() {
    let mut app = setup(false).await;
    app.upload(&[("a.jpg", b"a".as_slice())]).await;

    let mut stranger = TestApp {
        router: app.router.clone(),
        calls: app.calls.clone(),
        dir: tempfile::tempdir().unwrap(),
        upload_dir: app.upload_dir(),
        cookie: Some(format!(
            "fridgechef_session={}",
            "00000000-0000-4000-8000-000000000000"
        )),
    };
    let response = stranger.get("/results").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/upload");
}

#[tokio::test]
async fn upload_without_images_is_rejected() {
    let mut app = setup(false).await;

    let response = app.upload(&[("", b"".as_slice())]).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_over_body_limit_is_rejected() {
    let mut app = setup(false).await;
    let oversized = vec![0u8; 50 * 1024 * 1024 + 1];

    let response = app.upload(&[("huge.jpg", oversized.as_slice())]).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(std::fs::read_dir(app.upload_dir()).unwrap().count(), 0);
    assert_eq!(app.get("/results").await.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn empty_style_selection_is_rejected() {
    let mut app = setup(false).await;

    let response = app.post_form("/style", "other=1".to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upstream_failure_renders_diagnostic_page() {
    let mut app = setup(true).await;
    app.upload(&[("a.jpg", b"a".as_slice())]).await;

    let response = app.get("/results").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let page = body_text(response).await;
    assert!(page.contains("서버 내부 오류"));
    assert!(page.contains("upstream exploded"));
}

#[tokio::test]
async fn service_worker_and_favicon_fall_back_when_missing() {
    let mut app = setup(false).await;

    assert_eq!(
        app.get("/service-worker.js").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(app.get("/favicon.ico").await.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn service_worker_is_served_as_javascript() {
    let mut app = setup(false).await;
    std::fs::write(
        app.dir.path().join("static").join("service-worker.js"),
        "self.addEventListener('fetch', () => {});",
    )
    .unwrap();

    let response = app.get("/service-worker.js").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/javascript"
    );
}

#[tokio::test]
async fn uploaded_images_are_served_from_static() {
    let mut app = setup(false).await;
    app.upload(&[("dish.jpg", b"jpeg bytes".as_slice())]).await;
    let name = std::fs::read_dir(app.upload_dir())
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .file_name()
        .to_string_lossy()
        .into_owned();

    let response = app.get(&format!("/static/uploads/{name}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "jpeg bytes");
}

#[tokio::test]
async fn gallery_links_follow_configured_upload_dir() {
    let mut app = setup_with_upload_dir(false, "media/photos").await;
    app.upload(&[("dish.webp", b"webp bytes".as_slice())]).await;
    let name = std::fs::read_dir(app.upload_dir())
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .file_name()
        .to_string_lossy()
        .into_owned();

    let page = body_text(app.get("/results").await).await;
    assert!(page.contains(&format!("/static/media/photos/{name}")));

    let response = app.get(&format!("/static/media/photos/{name}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "webp bytes");
}
