//! Simulated network latency.
//!
//! The mock API delays every response so front-end loading states can be
//! exercised against realistic timings.

use std::rc::Rc;
use std::task::{Context, Poll};
use std::time::Duration;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use futures_util::future::{LocalBoxFuture, Ready, ready};

/// Middleware delaying each request by a fixed duration before the inner
/// service runs. A zero duration disables the delay.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use actix_web::App;
/// use zoe_api::middleware::Latency;
///
/// let app = App::new().wrap(Latency::new(Duration::from_millis(400)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Latency {
    delay: Duration,
}

impl Latency {
    /// Build the middleware with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl<S, B> Transform<S, ServiceRequest> for Latency
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = LatencyMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LatencyMiddleware {
            service: Rc::new(service),
            delay: self.delay,
        }))
    }
}

/// Service wrapper produced by [`Latency`].
pub struct LatencyMiddleware<S> {
    service: Rc<S>,
    delay: Duration,
}

impl<S, B> Service<ServiceRequest> for LatencyMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let delay = self.delay;
        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            service.call(req).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use std::time::Instant;

    async fn elapsed_for(delay: Duration) -> Duration {
        let app = actix_test::init_service(
            App::new()
                .wrap(Latency::new(delay))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        let started = Instant::now();
        let req = actix_test::TestRequest::get().uri("/").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert!(res.status().is_success());
        started.elapsed()
    }

    #[actix_web::test]
    async fn delays_response_by_configured_duration() {
        let elapsed = elapsed_for(Duration::from_millis(50)).await;
        assert!(elapsed >= Duration::from_millis(50), "elapsed {elapsed:?}");
    }

    #[actix_web::test]
    async fn zero_delay_passes_straight_through() {
        let elapsed = elapsed_for(Duration::ZERO).await;
        assert!(elapsed < Duration::from_millis(50), "elapsed {elapsed:?}");
    }

    #[test]
    fn exposes_configured_delay() {
        assert_eq!(
            Latency::new(Duration::from_millis(400)).delay(),
            Duration::from_millis(400)
        );
    }
}
