use crate::common::*;

#[doc = "toml 파일을 읽어서 객체로 변환해주는 함수"]
/// # Arguments
/// * `file_path` - 읽을 대상 toml 파일이 존재하는 경로
///
/// # Returns
/// * Result<T, anyhow::Error>
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = "Function that parses a JSON object given on the command line into a settings map"]
/// # Arguments
/// * `raw`   - JSON text, must be an object
/// * `label` - argument name used in the error message
///
/// # Returns
/// * anyhow::Result<Map<String, Value>>
pub fn parse_json_object(raw: &str, label: &str) -> anyhow::Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| anyhow!("[parse_json_object] '{}' is not valid JSON: {}", label, e))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(anyhow!(
            "[parse_json_object] '{}' must be a JSON object, got: {}",
            label,
            other
        )),
    }
}
