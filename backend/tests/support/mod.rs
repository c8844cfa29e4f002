//! Shared helpers for end-to-end HTTP tests.
//!
//! The app is assembled the way the server binary assembles it, over a
//! dataset seeded at a fixed instant and with the simulated latency off.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::sync::Arc;
use std::time::Duration;

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use example_data::SeedDefinition;
use mockable::Clock;
use zoe_api::inbound::http::health::HealthState;
use zoe_api::inbound::http::{api_routes, meta_routes};
use zoe_api::outbound::memory::seeded_state;
use zoe_api::seed::Dataset;
use zoe_api::{Latency, Trace};

/// Thursday 12 June 2025, 09:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 12, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixedClock;

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        fixed_now().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Dataset for a fixed seed.
pub fn dataset() -> Dataset {
    Dataset::build(&SeedDefinition::new("integration", 2_024), fixed_now()).expect("dataset")
}

/// The full application over a freshly seeded dataset.
pub fn seeded_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();
    let health = HealthState::new();
    health.mark_ready();
    App::new()
        .app_data(web::Data::new(health))
        .app_data(web::Data::new(seeded_state(dataset(), Arc::new(FixedClock))))
        .wrap(Trace)
        .service(
            web::scope("/api")
                .wrap(Latency::new(Duration::ZERO))
                .wrap(session)
                .configure(api_routes),
        )
        .configure(meta_routes)
}
