#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use video_metadata::{FetcherConfig, MetadataFetcher, MetadataObserver};

/// How the fake oEmbed endpoint answers.
#[derive(Clone)]
pub enum Behavior {
    Json(serde_json::Value),
    Status(u16),
    StatusBody(u16, String),
    Raw(&'static str),
    Delay(Duration, serde_json::Value),
}

#[derive(Clone)]
struct UpstreamState {
    behavior: Behavior,
    hits: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    peak_in_flight: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub struct Upstream {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    peak_in_flight: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl Upstream {
    pub fn endpoint(&self) -> String {
        format!("http://{}/oembed", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Most requests the endpoint was serving at the same moment.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.queries.lock().unwrap().clone()
    }
}

async fn oembed(
    State(state): State<UpstreamState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.queries.lock().unwrap().push(query);
    let now = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    state.peak_in_flight.fetch_max(now, Ordering::SeqCst);

    let response = match state.behavior {
        Behavior::Json(body) => axum::Json(body).into_response(),
        Behavior::Status(code) => {
            let status = StatusCode::from_u16(code).unwrap();
            (status, "upstream unavailable").into_response()
        }
        Behavior::StatusBody(code, body) => {
            let status = StatusCode::from_u16(code).unwrap();
            (status, body).into_response()
        }
        Behavior::Raw(body) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Behavior::Delay(delay, body) => {
            tokio::time::sleep(delay).await;
            axum::Json(body).into_response()
        }
    };

    state.in_flight.fetch_sub(1, Ordering::SeqCst);
    response
}

/// Serve a fake oEmbed endpoint on an ephemeral local port.
pub async fn spawn_upstream(behavior: Behavior) -> Upstream {
    let hits = Arc::new(AtomicUsize::new(0));
    let peak_in_flight = Arc::new(AtomicUsize::new(0));
    let queries = Arc::new(Mutex::new(Vec::new()));
    let state = UpstreamState {
        behavior,
        hits: hits.clone(),
        in_flight: Arc::new(AtomicUsize::new(0)),
        peak_in_flight: peak_in_flight.clone(),
        queries: queries.clone(),
    };

    let app = Router::new().route("/oembed", get(oembed)).with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Upstream {
        addr,
        hits,
        peak_in_flight,
        queries,
    }
}

/// An endpoint on a port nothing listens on.
pub async fn refused_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/oembed", addr)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Success { video_id: String, title: String },
    Failure { video_id: String, error: String },
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl MetadataObserver for RecordingObserver {
    fn on_success(&self, video_id: &str, title: &str) {
        self.events.lock().unwrap().push(Event::Success {
            video_id: video_id.to_string(),
            title: title.to_string(),
        });
    }

    fn on_failure(&self, video_id: &str, error: &str) {
        self.events.lock().unwrap().push(Event::Failure {
            video_id: video_id.to_string(),
            error: error.to_string(),
        });
    }
}

pub fn fetcher_for(endpoint: String, timeout: Duration) -> (MetadataFetcher, Arc<RecordingObserver>) {
    fetcher_with(
        FetcherConfig::default()
            .with_oembed_endpoint(endpoint)
            .with_timeout(timeout),
    )
}

pub fn fetcher_with(config: FetcherConfig) -> (MetadataFetcher, Arc<RecordingObserver>) {
    let observer = Arc::new(RecordingObserver::default());
    let fetcher = MetadataFetcher::new(config)
        .unwrap()
        .with_observer(observer.clone());
    (fetcher, observer)
}
