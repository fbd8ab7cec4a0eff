//! Structured per-request access logging.
//!
//! Emits one event per completed request with method, path, status, duration
//! and trace id. The level follows the response class: 5xx at error, 4xx at
//! warn, everything else at info.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

struct RequestRecord {
    method: String,
    path: String,
    trace_id: String,
    started: Instant,
}

impl RequestRecord {
    fn emit(&self, status: StatusCode) {
        let duration_us = self.started.elapsed().as_micros() as u64;
        let code = status.as_u16();

        if status.is_server_error() {
            error!(
                http.method = %self.method,
                url.path = %self.path,
                http.status_code = code,
                duration_us,
                trace_id = %self.trace_id,
                "request_completed"
            );
        } else if status.is_client_error() {
            warn!(
                http.method = %self.method,
                url.path = %self.path,
                http.status_code = code,
                duration_us,
                trace_id = %self.trace_id,
                "request_completed"
            );
        } else {
            info!(
                http.method = %self.method,
                url.path = %self.path,
                http.status_code = code,
                duration_us,
                trace_id = %self.trace_id,
                "request_completed"
            );
        }
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let record = RequestRecord {
            method: req.method().to_string(),
            path: req.path().to_string(),
            // RequestTrace runs before us and leaves the id in the extensions.
            trace_id: req
                .extensions()
                .get::<String>()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string()),
            started: Instant::now(),
        };

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            record.emit(status);
            result
        })
    }
}
