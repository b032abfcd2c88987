//! In-process stand-in for the processing service.

use axum::{
    body::Bytes,
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::post,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Canned response for one mode
#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl MockReply {
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            status: StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: b"{\"error\": \"boom\"}".to_vec(),
        }
    }
}

/// A multipart request as the service saw it
#[derive(Debug, Clone, Default)]
pub struct RecordedRequest {
    pub mode: String,
    pub fields: HashMap<String, Vec<u8>>,
    pub file_names: HashMap<String, String>,
    pub content_types: HashMap<String, String>,
}

#[derive(Clone)]
struct MockState {
    replies: Arc<HashMap<String, MockReply>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockService {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    /// Serve `POST /img_img` and `POST /img_txt` on an ephemeral port
    pub async fn start(img_img: MockReply, img_txt: MockReply) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            replies: Arc::new(HashMap::from([
                ("img_img".to_string(), img_img),
                ("img_txt".to_string(), img_txt),
            ])),
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/:mode", post(handle_mode))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock service");
        let addr = listener.local_addr().expect("mock service address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, requests }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

async fn handle_mode(
    State(state): State<MockState>,
    Path(mode): Path<String>,
    mut multipart: Multipart,
) -> (StatusCode, Vec<u8>) {
    let mut recorded = RecordedRequest {
        mode: mode.clone(),
        ..Default::default()
    };

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        if let Some(file_name) = field.file_name() {
            recorded
                .file_names
                .insert(name.clone(), file_name.to_string());
        }
        if let Some(content_type) = field.content_type() {
            recorded
                .content_types
                .insert(name.clone(), content_type.to_string());
        }
        let data: Bytes = field.bytes().await.unwrap_or_default();
        recorded.fields.insert(name, data.to_vec());
    }

    state.requests.lock().expect("requests lock").push(recorded);

    match state.replies.get(&mode) {
        Some(reply) => (reply.status, reply.body.clone()),
        None => (StatusCode::NOT_FOUND, Vec::new()),
    }
}
