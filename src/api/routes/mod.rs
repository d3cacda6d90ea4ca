//! API routes module

pub mod chat;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;

pub type SharedState = Arc<RwLock<AppState>>;
