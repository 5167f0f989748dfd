use crate::common::*;

fn default_timeout_sec() -> u64 {
    30
}

#[doc = "Connection information for the cluster being administered"]
#[derive(Serialize, Deserialize, Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ClusterConnConfig {
    pub endpoint: String,
    #[serde(default)]
    pub es_id: String,
    #[serde(default)]
    pub es_pw: String,
    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,
}
