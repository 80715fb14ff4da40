//! Tests for HTTP controller endpoints.
//!
//! Handlers are invoked directly with extracted state, verifying status
//! codes and response bodies without standing up a full server.

mod admin;
mod catalog;
mod user;

use orrery::server::model::app::AppState;
use orrery_test_utils::prelude::*;

pub fn app_state(test: &TestSetup) -> AppState {
    AppState::new(test.db.clone())
}
