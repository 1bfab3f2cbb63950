//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::thread::{self, JoinHandle};
use std::time::Duration;

use pizza_admin_client::{ClientConfig, HttpAdminApi};
use tiny_http::{Header, Response, Server};

/// What the mock server saw for one request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
}

/// A local HTTP server answering a fixed script of responses, one per request.
pub struct MockServer {
    pub base_url: String,
    handle: JoinHandle<Vec<RecordedRequest>>,
}

impl MockServer {
    pub fn start(script: Vec<(u16, &'static str)>) -> Self {
        let server = Server::http("127.0.0.1:0").expect("start mock server");
        let base_url = format!("http://{}", server.server_addr());

        let handle = thread::spawn(move || {
            let mut seen = Vec::new();
            for (status, body) in script {
                let request = server.recv().expect("request expected");
                let authorization = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.as_str().to_string());
                seen.push(RecordedRequest {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    authorization,
                });
                let response = Response::from_string(body)
                    .with_status_code(status)
                    .with_header(
                        Header::from_bytes("Content-Type", "application/json")
                            .expect("valid content type header"),
                    );
                request.respond(response).expect("response should succeed");
            }
            seen
        });

        Self { base_url, handle }
    }

    /// Wait for the scripted requests and return what was received.
    pub fn finish(self) -> Vec<RecordedRequest> {
        self.handle.join().expect("server thread should join")
    }
}

pub fn client_for(base_url: &str, token: Option<&str>) -> HttpAdminApi {
    HttpAdminApi::new(ClientConfig {
        base_url: base_url.to_string(),
        auth_token: token.map(str::to_string),
        connect_timeout: Duration::from_secs(1),
        request_timeout: Duration::from_secs(2),
    })
    .expect("client should initialize")
}

pub const FRANCHISE_PAGE: &str = r#"{
    "franchises": [
        {
            "id": "1",
            "name": "pizzaPocket",
            "admins": [{ "id": "3", "name": "pizza franchisee", "email": "f@jwt.com" }],
            "stores": [
                { "id": "1", "name": "SLC", "totalRevenue": 0.309 },
                { "id": "8", "name": "Test Store", "totalRevenue": 0 }
            ]
        },
        { "id": "52", "name": "test", "admins": [{ "id": "156", "name": "admin", "email": "a@jwt.com" }], "stores": [] },
        { "id": "2", "name": "Test Franchise", "admins": [], "stores": [] }
    ],
    "more": true
}"#;

pub const USER_PAGE: &str = r#"{
    "users": [
        { "id": 1, "name": "pizza admin", "email": "a@jwt.com", "roles": [{ "role": "admin" }] },
        { "id": 3, "name": "pizza franchisee", "email": "f@jwt.com", "roles": [{ "role": "diner" }, { "role": "franchisee", "objectId": 1 }] }
    ],
    "more": false
}"#;
