use crate::common::*;

use crate::enums::{admin_error::*, request_method::*};

use crate::model::{configs::cluster_conn_config::*, es_response::*};

use crate::traits::repository::es_repository_trait::*;

#[derive(Debug, Getters, Clone)]
#[getset(get = "pub")]
pub struct EsRepositoryImpl {
    endpoint: String,
    es_client: Elasticsearch,
}

impl EsRepositoryImpl {
    #[doc = "Elasticsearch connection 생성자"]
    /// # Arguments
    /// * `conn_config` - endpoint, credentials and request timeout of the cluster
    ///
    /// # Returns
    /// * Result<Self, anyhow::Error>
    pub fn new(conn_config: &ClusterConnConfig) -> Result<Self, anyhow::Error> {
        let es_id_opt: Option<&str> =
            (!conn_config.es_id().is_empty()).then(|| conn_config.es_id().as_str());

        let es_client: Elasticsearch = Self::create_es_conn(
            conn_config.endpoint(),
            es_id_opt,
            conn_config.es_pw(),
            *conn_config.timeout_sec(),
        )
        .map_err(|e| anyhow!("[EsRepositoryImpl::new] {:?}", e))?;

        Ok(Self {
            endpoint: conn_config.endpoint().to_string(),
            es_client,
        })
    }

    #[doc = "Function that creates an Elasticsearch connection to a single endpoint."]
    fn create_es_conn(
        endpoint: &str,
        es_id_opt: Option<&str>,
        es_pw: &str,
        timeout_sec: u64,
    ) -> anyhow::Result<Elasticsearch> {
        let cluster_url: Url = Url::parse(endpoint)
            .map_err(|e| anyhow!("[EsRepositoryImpl::create_es_conn] invalid endpoint '{}': {}", endpoint, e))?;

        let conn_pool: SingleNodeConnectionPool = SingleNodeConnectionPool::new(cluster_url);

        /* One overall timeout per call; no retry happens on expiry. */
        let mut builder: TransportBuilder =
            TransportBuilder::new(conn_pool).timeout(Duration::from_secs(timeout_sec));

        /* Authentication */
        if let Some(id) = es_id_opt {
            builder = builder.auth(EsCredentials::Basic(id.to_string(), es_pw.to_string()));
        }

        let transport: EsTransport = builder
            .build()
            .map_err(|e| anyhow!("[EsRepositoryImpl::create_es_conn] {:?}", e))?;

        Ok(Elasticsearch::new(transport))
    }
}

#[async_trait]
impl EsRepository for EsRepositoryImpl {
    #[doc = "Function that sends one raw request to the cluster management API"]
    /// # Arguments
    /// * `cancel` - caller's cancellation signal
    /// * `method` - HTTP method
    /// * `path`   - path appended to the endpoint, e.g. `/logs-a,logs-b/_close`
    /// * `query`  - query string pairs
    /// * `body`   - optional JSON body
    ///
    /// # Returns
    /// * Result<EsResponse, anyhow::Error> - raw status and body text
    async fn send_request(
        &self,
        cancel: &CancellationToken,
        method: RequestMethod,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<EsResponse, anyhow::Error> {
        info!("[EsRepositoryImpl->send_request] {} {}", method, path);

        let mut headers: HeaderMap = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let query_pairs: Vec<(&str, &str)> = query.to_vec();
        let query_string: Option<&Vec<(&str, &str)>> =
            (!query_pairs.is_empty()).then_some(&query_pairs);
        let json_body: Option<JsonBody<Value>> = body.map(JsonBody::new);

        let response: Response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(AdminError::Cancelled.into()),
            sent = self.es_client.transport().send(
                method.into(),
                path,
                headers,
                query_string,
                json_body,
                None,
            ) => sent?,
        };

        let status: u16 = response.status_code().as_u16();

        let response_body: String = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(AdminError::Cancelled.into()),
            text = response.text() => text?,
        };

        if status >= 400 {
            warn!(
                "[EsRepositoryImpl->send_request] {} {} answered with status {}",
                method, path, status
            );
        }

        Ok(EsResponse::new(status, response_body))
    }
}

#[doc = "Function that initializes the client for the administered cluster"]
/// # Arguments
/// * `conn_config` - cluster connection section of the admin config
///
/// # Returns
/// * Result<EsRepositoryImpl, anyhow::Error>
pub fn initialize_es_client(conn_config: &ClusterConnConfig) -> anyhow::Result<EsRepositoryImpl> {
    let es_repository: EsRepositoryImpl = EsRepositoryImpl::new(conn_config)?;

    info!(
        "[initialize_es_client] connection to '{}' prepared",
        es_repository.endpoint()
    );

    Ok(es_repository)
}
