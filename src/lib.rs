//! Administrative client for OpenSearch / Elasticsearch index maintenance:
//! listing, pattern and age based deletion, aliases, rollover, reindex,
//! open/close and the multi-step shrink workflow.

pub mod common;

pub mod controller;
pub mod enums;
pub mod env_configuration;
pub mod model;
pub mod repository;
pub mod service;
pub mod traits;
pub mod utils_modules;
