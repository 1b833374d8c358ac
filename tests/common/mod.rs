use actix_web::{
    dev::ServerHandle, http::StatusCode, rt, web, App, HttpRequest, HttpResponse, HttpServer,
};
use plant_info::{
    app::PlantInfoApp,
    config::{Config, GeminiConfig},
};
use serde_json::{json, Value};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

/// What the fake saw of the last request it answered.
#[derive(Debug, Clone, Default)]
pub struct SeenRequest {
    pub query: String,
    pub api_key_header: Option<String>,
}

/// Stands in for Gemini: answers every request with the same status and body.
pub struct FakeGemini {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<SeenRequest>>>,
    handle: ServerHandle,
}

impl FakeGemini {
    pub async fn start(status: StatusCode, body: Value) -> Self {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn start_with_delay(status: StatusCode, body: Value, delay: Duration) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let server_hits = hits.clone();
        let last_request = Arc::new(Mutex::new(None));
        let server_last_request = last_request.clone();

        let server = HttpServer::new(move || {
            let body = body.clone();
            let hits = server_hits.clone();
            let last_request = server_last_request.clone();

            App::new().default_service(web::to(move |req: HttpRequest| {
                hits.fetch_add(1, Ordering::SeqCst);
                let seen = SeenRequest {
                    query: req.query_string().to_string(),
                    api_key_header: req
                        .headers()
                        .get("x-goog-api-key")
                        .and_then(|value| value.to_str().ok())
                        .map(str::to_string),
                };
                *last_request.lock().unwrap() = Some(seen);
                let body = body.clone();

                async move {
                    rt::time::sleep(delay).await;
                    HttpResponse::build(status).json(body)
                }
            }))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("fake gemini should bind");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        rt::spawn(server);

        Self {
            base_url: format!("http://{addr}"),
            hits,
            last_request,
            handle,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<SeenRequest> {
        self.last_request.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// A generateContent response carrying `text` as the only candidate.
pub fn envelope(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
}

pub fn config(api_key: Option<&str>, base_url: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        gemini: GeminiConfig {
            api_key: api_key.map(str::to_string),
            base_url: base_url.to_string(),
            api_version: "v1".to_string(),
            model: "gemini-1.5-flash".to_string(),
            timeout: Duration::from_secs(2),
        },
    }
}

pub fn leak_app(config: &Config) -> &'static PlantInfoApp {
    Box::leak(Box::new(
        PlantInfoApp::new(config).expect("app should build"),
    ))
}
