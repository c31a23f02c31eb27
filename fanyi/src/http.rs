use crate::{Error, Vendor};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::time::Duration;

pub(crate) fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, Error> {
    let mut builder = reqwest::Client::builder();
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    builder
        .build()
        .map_err(|e| Error::Configuration(format!("build http client error: {e}")))
}

pub(crate) async fn read_response(resp: reqwest::Response) -> Result<(StatusCode, String), Error> {
    let status = resp.status();
    let text = resp.text().await?;
    Ok((status, text))
}

/// 解析厂商的响应外层结构
///
/// 解析失败时：非2xx视为传输层错误，2xx视为响应格式错误
pub(crate) fn parse_envelope<T: DeserializeOwned>(
    vendor: Vendor,
    status: StatusCode,
    body: &str,
) -> Result<T, Error> {
    match serde_json::from_str::<T>(body) {
        Ok(v) => Ok(v),
        Err(_) if !status.is_success() => Err(Error::RequestAPIFailed {
            status,
            body: body.to_owned(),
        }),
        Err(_) => Err(Error::malformed(vendor, "$", body)),
    }
}

/// 在检查完厂商错误码之后调用：非2xx且没有厂商错误信息
pub(crate) fn ensure_success(status: StatusCode, body: &str) -> Result<(), Error> {
    if !status.is_success() {
        return Err(Error::RequestAPIFailed {
            status,
            body: body.to_owned(),
        });
    }
    Ok(())
}

/// 错误码有的厂商返回字符串，有的返回数字，统一成字符串
pub(crate) fn de_opt_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(match v {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
