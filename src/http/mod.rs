use std::io::{Cursor, Read};
use std::sync::Arc;
use std::thread::JoinHandle;

use tiny_http::{Header, Method, Request, Response, Server};
use tracing::{debug, info, warn};

use crate::error::{PortalError, Result};
use crate::render::render_page;
use crate::store::{CredentialStore, WifiCredentials};
use crate::telemetry::StatusProvider;
use crate::theme::ThemeConfig;

pub mod screens;

const HTML_CONTENT_TYPE: &str = "text/html; charset=UTF-8";
const MAX_FORM_BYTES: u64 = 4 * 1024;

/// Paths operating systems request to detect a captive portal.
const CAPTIVE_PROBES: &[&str] = &[
    "/generate_204",
    "/gen_204",
    "/hotspot-detect.html",
    "/connecttest.txt",
    "/ncsi.txt",
    "/redirect",
    "/fwlink",
];

/// Everything a request handler may read, shared by all requests.
pub struct PortalContext {
    pub theme: ThemeConfig,
    pub store: CredentialStore,
    pub status: Box<dyn StatusProvider>,
}

impl PortalContext {
    pub fn new(theme: ThemeConfig, store: CredentialStore, status: Box<dyn StatusProvider>) -> Self {
        Self {
            theme,
            store,
            status,
        }
    }

    fn page(&self, title: &str, fragment: &str) -> String {
        render_page(title, fragment, &self.theme)
    }
}

/// Transport-independent response produced by [`route`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalResponse {
    pub status: u16,
    pub location: Option<String>,
    pub body: String,
}

impl PortalResponse {
    fn html(status: u16, body: String) -> Self {
        Self {
            status,
            location: None,
            body,
        }
    }

    fn redirect(status: u16, location: &str) -> Self {
        Self {
            status,
            location: Some(location.to_string()),
            body: String::new(),
        }
    }

    fn into_tiny_http(self) -> Result<Response<Cursor<Vec<u8>>>> {
        let mut response = Response::from_string(self.body)
            .with_status_code(self.status)
            .with_header(header("Content-Type", HTML_CONTENT_TYPE)?)
            .with_header(header("Cache-Control", "no-store")?);

        if let Some(location) = self.location {
            response = response.with_header(header("Location", &location)?);
        }
        Ok(response)
    }
}

fn header(name: &'static str, value: &str) -> Result<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).map_err(|_| PortalError::Header { name })
}

/// Dispatch one request.
///
/// Only `/save` and `/reset` touch shared state (the credential store).
pub fn route(ctx: &PortalContext, method: &Method, url: &str, body: &str) -> PortalResponse {
    let path = url.split('?').next().unwrap_or("/");

    match (method, path) {
        (Method::Get, "/") => {
            let saved = ctx.store.saved_ssid();
            let fragment = screens::setup_form(saved.as_deref(), None);
            PortalResponse::html(200, ctx.page("Setup", &fragment))
        }

        (Method::Post, "/save") => save_credentials(ctx, body),

        (Method::Get, "/status") => {
            let status = ctx.status.snapshot();
            let saved = ctx.store.saved_ssid();
            let fragment = screens::status_view(&status, saved.as_deref(), &ctx.theme.app_version);
            PortalResponse::html(200, ctx.page("Status", &fragment))
        }

        (Method::Post, "/reset") => {
            if let Some(previous) = ctx.store.clear() {
                info!("Cleared saved network {:?}", previous.ssid);
            }
            PortalResponse::redirect(303, "/")
        }

        (_, probe) if CAPTIVE_PROBES.contains(&probe) => {
            debug!("Captive portal probe {}, redirecting to setup", probe);
            PortalResponse::redirect(302, "/")
        }

        _ => {
            debug!("No route for {} {}", method, path);
            let fragment = screens::not_found_view(path);
            PortalResponse::html(404, ctx.page("Not Found", &fragment))
        }
    }
}

fn save_credentials(ctx: &PortalContext, body: &str) -> PortalResponse {
    let mut ssid = String::new();
    let mut password = String::new();
    for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
        match key.as_ref() {
            "ssid" => ssid = value.trim().to_string(),
            "password" => password = value.into_owned(),
            _ => {}
        }
    }

    if ssid.is_empty() {
        warn!("Rejected setup form without an SSID");
        let fragment = screens::setup_form(None, Some("Please enter a network name."));
        return PortalResponse::html(400, ctx.page("Setup", &fragment));
    }

    info!("Saved network {:?}", ssid);
    let fragment = screens::saved_view(&ssid);
    ctx.store.save(WifiCredentials::new(ssid, password));
    PortalResponse::html(200, ctx.page("Saved", &fragment))
}

pub struct HttpServer {
    addr: String,
}

impl HttpServer {
    pub fn new(addr: &str) -> Self {
        Self {
            addr: addr.to_string(),
        }
    }

    /// Bind the listener and serve requests on a background thread.
    ///
    /// There is one accept thread and requests are handled one at a time,
    /// which is plenty for a setup page with a single visitor.
    pub fn start(&self, ctx: Arc<PortalContext>) -> Result<JoinHandle<()>> {
        let server = Server::http(&self.addr).map_err(|e| PortalError::Bind {
            addr: self.addr.clone(),
            message: e.to_string(),
        })?;
        info!("Portal listening on http://{}", self.addr);

        let handle = std::thread::Builder::new()
            .name("portal-http".to_string())
            .spawn(move || {
                for req in server.incoming_requests() {
                    handle_request(&ctx, req);
                }
            })?;

        Ok(handle)
    }
}

/// Outcome of reading a form submission.
#[derive(Debug, PartialEq, Eq)]
enum FormBody {
    Text(String),
    TooLarge,
    NotUtf8,
}

/// Read at most `MAX_FORM_BYTES`, rejecting anything longer instead of
/// cutting it off.
fn read_form_body(reader: &mut dyn Read, declared_len: Option<usize>) -> std::io::Result<FormBody> {
    if declared_len.is_some_and(|len| len as u64 > MAX_FORM_BYTES) {
        return Ok(FormBody::TooLarge);
    }

    let mut bytes = Vec::new();
    reader.take(MAX_FORM_BYTES + 1).read_to_end(&mut bytes)?;
    if bytes.len() as u64 > MAX_FORM_BYTES {
        return Ok(FormBody::TooLarge);
    }

    Ok(match String::from_utf8(bytes) {
        Ok(text) => FormBody::Text(text),
        Err(_) => FormBody::NotUtf8,
    })
}

fn rejected_form(ctx: &PortalContext, status: u16, heading: &str, message: &str) -> PortalResponse {
    let fragment = screens::error_view(heading, message);
    PortalResponse::html(status, ctx.page(heading, &fragment))
}

fn handle_request(ctx: &PortalContext, mut req: Request) {
    let method = req.method().clone();
    let url = req.url().to_string();

    let response = if method == Method::Post {
        let declared_len = req.body_length();
        match read_form_body(req.as_reader(), declared_len) {
            Ok(FormBody::Text(body)) => route(ctx, &method, &url, &body),
            Ok(FormBody::TooLarge) => {
                warn!("Rejected {} {}: body over {} bytes", method, url, MAX_FORM_BYTES);
                rejected_form(
                    ctx,
                    413,
                    "Request Too Large",
                    "The submitted form is too large.",
                )
            }
            Ok(FormBody::NotUtf8) => {
                warn!("Rejected {} {}: body is not UTF-8", method, url);
                rejected_form(ctx, 400, "Bad Request", "The submitted form is not valid UTF-8.")
            }
            Err(e) => {
                warn!("Failed to read body of {} {}: {}", method, url, e);
                rejected_form(ctx, 400, "Bad Request", "The submitted form could not be read.")
            }
        }
    } else {
        route(ctx, &method, &url, "")
    };
    debug!("{} {} -> {}", method, url, response.status);

    let result = match response.into_tiny_http() {
        Ok(response) => req.respond(response),
        Err(e) => {
            warn!("Failed to build response for {}: {}", url, e);
            req.respond(Response::from_string("internal error").with_status_code(500))
        }
    };
    if let Err(e) = result {
        warn!("Failed to send response for {}: {}", url, e);
    }
}
