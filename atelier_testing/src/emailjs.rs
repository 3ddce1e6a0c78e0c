use std::{
    collections::BTreeMap,
    net::{IpAddr, Ipv4Addr},
    sync::{Arc, Mutex},
};

use anyhow::Context;
use axum::{extract::State, http::StatusCode, routing, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;
use url::Url;

pub const SEND_ROUTE: &str = "/api/v1.0/email/send";

const INVALID_PUBLIC_KEY: &str =
    "The Public Key is invalid. To find this ID, visit https://dashboard.emailjs.com/admin/account";
const INVALID_SERVICE_ID: &str =
    "The service ID is invalid. To find this ID, visit https://dashboard.emailjs.com/admin";
const INVALID_TEMPLATE_ID: &str =
    "The template ID not found. To find this ID, visit https://dashboard.emailjs.com/admin/templates";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// An email accepted by the testing server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEmail {
    pub service_id: String,
    pub template_id: String,
    pub access_token: Option<String>,
    pub template_params: BTreeMap<String, String>,
}

/// Every email the server accepted, in order of arrival.
#[derive(Debug, Clone, Default)]
pub struct Outbox(Arc<Mutex<Vec<SentEmail>>>);

impl Outbox {
    pub fn emails(&self) -> Vec<SentEmail> {
        self.0.lock().map(|x| x.clone()).unwrap_or_default()
    }

    fn push(&self, email: SentEmail) {
        if let Ok(mut emails) = self.0.lock() {
            emails.push(email);
        }
    }
}

#[derive(Clone)]
struct AppState {
    credentials: Arc<EmailJsCredentials>,
    outbox: Outbox,
}

pub fn router(credentials: EmailJsCredentials, outbox: Outbox) -> Router {
    Router::new()
        .route(SEND_ROUTE, routing::post(send))
        .with_state(AppState {
            credentials: credentials.into(),
            outbox,
        })
}

pub async fn start_server(
    host: IpAddr,
    port: u16,
    credentials: EmailJsCredentials,
) -> anyhow::Result<()> {
    info!("Starting EmailJS testing server on {host}:{port}");
    info!("EmailJS base url: http://{host}:{port}/");
    info!("Credentials: {credentials:?}");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(credentials, Outbox::default()))
        .await
        .context("Failed to start HTTP server")
}

/// A testing server running in the background of the current tokio runtime.
pub struct SpawnedServer {
    pub base_url: Url,
    pub outbox: Outbox,
}

/// Starts the testing server on a random local port.
pub async fn spawn(credentials: EmailJsCredentials) -> anyhow::Result<SpawnedServer> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .context("Failed to bind to a local port")?;
    let addr = listener.local_addr()?;

    let outbox = Outbox::default();
    let router = router(credentials, outbox.clone());
    tokio::spawn(async move { axum::serve(listener, router).await });

    Ok(SpawnedServer {
        base_url: format!("http://{addr}/").parse()?,
        outbox,
    })
}

#[derive(Deserialize)]
struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    #[serde(rename = "accessToken")]
    access_token: Option<String>,
    #[serde(default)]
    template_params: BTreeMap<String, String>,
}

async fn send(
    State(state): State<AppState>,
    Json(request): Json<SendRequest>,
) -> (StatusCode, &'static str) {
    let credentials = &state.credentials;

    if request.user_id != credentials.public_key {
        return (StatusCode::BAD_REQUEST, INVALID_PUBLIC_KEY);
    }
    if request.service_id != credentials.service_id {
        return (StatusCode::BAD_REQUEST, INVALID_SERVICE_ID);
    }
    if request.template_id != credentials.template_id {
        return (StatusCode::BAD_REQUEST, INVALID_TEMPLATE_ID);
    }

    state.outbox.push(SentEmail {
        service_id: request.service_id,
        template_id: request.template_id,
        access_token: request.access_token,
        template_params: request.template_params,
    });

    (StatusCode::OK, "OK")
}
