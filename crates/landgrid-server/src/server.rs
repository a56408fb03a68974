//! Background-thread HTTP server.

use std::io::{Cursor, Read};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use landgrid_registry::ZoningCategory;
use landgrid_view::{LandModel, ModelError, ViewMode};
use serde::{Deserialize, Serialize};
use tiny_http::{Header, Method, Request, Response, Server};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {address}:{port}: {error}")]
    BindError {
        address: String,
        port: u16,
        error: String,
    },
    #[error("Server thread panicked")]
    ThreadPanic,
    #[error("I/O error while serving request: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode response: {0}")]
    Json(#[from] serde_json::Error),
}

/// HTTP server exposing a shared [`LandModel`].
pub struct LandServer {
    address: String,
    port: u16,
    actual_port: Option<u16>,
    server: Option<Arc<Server>>,
    handle: Option<JoinHandle<()>>,
}

#[derive(Deserialize)]
struct ZoningRequest {
    parcel: String,
    category: ZoningCategory,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    parcels: usize,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type JsonResponse = Response<Cursor<Vec<u8>>>;

impl LandServer {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
            actual_port: None,
            server: None,
            handle: None,
        }
    }

    pub fn start(&mut self, model: Arc<LandModel>) -> Result<(), ServerError> {
        let server = Server::http(format!("{}:{}", self.address, self.port)).map_err(|e| {
            ServerError::BindError {
                address: self.address.clone(),
                port: self.port,
                error: e.to_string(),
            }
        })?;

        let actual_port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .unwrap_or(self.port);
        self.actual_port = Some(actual_port);
        log::info!("Serving land model on {}:{actual_port}", self.address);

        let server = Arc::new(server);
        let worker = Arc::clone(&server);
        self.handle = Some(thread::spawn(move || Self::run_server(&worker, &model)));
        self.server = Some(server);
        Ok(())
    }

    /// Unblock the accept loop and wait for the server thread to finish.
    pub fn stop(&mut self) -> Result<(), ServerError> {
        if let Some(server) = self.server.take() {
            server.unblock();
        }
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| ServerError::ThreadPanic),
            None => Ok(()),
        }
    }

    /// Block the calling thread until the server thread exits.
    pub fn wait(&mut self) -> Result<(), ServerError> {
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| ServerError::ThreadPanic),
            None => Ok(()),
        }
    }

    pub fn actual_port(&self) -> u16 {
        self.actual_port.unwrap_or(self.port)
    }

    fn run_server(server: &Server, model: &LandModel) {
        for request in server.incoming_requests() {
            if let Err(e) = Self::handle_request(request, model) {
                log::warn!("Land server error: {e}");
            }
        }
        log::debug!("Land server loop exited");
    }

    fn handle_request(mut request: Request, model: &LandModel) -> Result<(), ServerError> {
        let url = request.url().to_string();
        let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
        log::debug!("{} {path}", request.method());

        let response = match (request.method(), path) {
            (&Method::Get, "/health") => json_response(
                200,
                &HealthResponse {
                    status: "ok",
                    parcels: model.parcel_ids().len(),
                },
            )?,
            (&Method::Get, "/zoning") => json_response(200, &model.zoning())?,
            (&Method::Post, "/zoning") => {
                let mut body = String::new();
                request.as_reader().read_to_string(&mut body)?;
                match serde_json::from_str::<ZoningRequest>(&body) {
                    Ok(edit) => match model.assign_zoning(&edit.parcel, edit.category) {
                        Ok(snapshot) => json_response(200, &snapshot)?,
                        Err(e) => error_response(&e)?,
                    },
                    Err(e) => json_error(400, format!("Malformed zoning request: {e}"))?,
                }
            }
            (&Method::Get, "/parcels") => json_response(200, &model.parcel_ids())?,
            (&Method::Get, "/tiles") => {
                let tiles = query_param(query, "view")
                    .map(str::parse::<ViewMode>)
                    .transpose()
                    .map(|view| {
                        model.render(
                            view.unwrap_or_default(),
                            query_param(query, "selected"),
                            query_param(query, "hovered"),
                        )
                    });
                match tiles {
                    Ok(tiles) => json_response(200, &tiles)?,
                    Err(e) => error_response(&e)?,
                }
            }
            (&Method::Get, "/tax-range") => json_response(200, &model.tax_range())?,
            (&Method::Get, _) if path.starts_with("/parcels/") => {
                let id = &path["/parcels/".len()..];
                match model.detail(id) {
                    Ok(panel) => json_response(200, &panel)?,
                    Err(e) => error_response(&e)?,
                }
            }
            _ => json_error(404, format!("No route for {path}"))?,
        };

        request.respond(response)?;
        Ok(())
    }
}

impl Drop for LandServer {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            log::warn!("Land server did not shut down cleanly: {e}");
        }
    }
}

fn query_param<'q>(query: &'q str, key: &str) -> Option<&'q str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
}

fn json_response<T: Serialize + ?Sized>(status: u16, body: &T) -> Result<JsonResponse, ServerError> {
    let json = serde_json::to_string(body)?;
    let response = Response::from_string(json).with_status_code(status);
    Ok(match Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    })
}

fn json_error(status: u16, error: String) -> Result<JsonResponse, ServerError> {
    json_response(status, &ErrorResponse { error })
}

fn error_response(err: &ModelError) -> Result<JsonResponse, ServerError> {
    let status = match err {
        ModelError::UnknownParcel(_) => 404,
        ModelError::UnknownViewMode(_) | ModelError::Grid(_) => 400,
        ModelError::Registry(_) => 500,
    };
    json_error(status, err.to_string())
}

#[cfg(test)]
mod query_tests {
    use super::query_param;

    #[test]
    fn test_query_param() {
        let q = "view=tax&selected=0xAB12CD&hovered=";
        assert_eq!(query_param(q, "view"), Some("tax"));
        assert_eq!(query_param(q, "selected"), Some("0xAB12CD"));
        assert_eq!(query_param(q, "hovered"), None);
        assert_eq!(query_param(q, "missing"), None);
        assert_eq!(query_param("", "view"), None);
    }
}
