pub use std::fmt;
pub use std::sync::{Arc, Mutex};

pub use tokio::time::Duration;
pub use tokio_util::sync::CancellationToken;

pub use log::{error, info, warn};

pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};

pub use serde::de::DeserializeOwned;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{json, Map, Value};

pub use elasticsearch::Elasticsearch;
pub use elasticsearch::auth::Credentials as EsCredentials;
pub use elasticsearch::http::headers::{HeaderMap, HeaderValue, CONTENT_TYPE};
pub use elasticsearch::http::request::JsonBody;
pub use elasticsearch::http::response::Response;
pub use elasticsearch::http::transport::{
    SingleNodeConnectionPool, Transport as EsTransport, TransportBuilder,
};
pub use elasticsearch::http::{Method, Url};

pub use anyhow::{anyhow, Context, Result};

pub use chrono::{DateTime, TimeZone, Utc};

pub use getset::Getters;
pub use derive_new::new;

pub use once_cell::sync::Lazy as once_lazy;

pub use async_trait::async_trait;
