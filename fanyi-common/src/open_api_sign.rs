use super::error::Error;
use super::helper::{
    canonical_query, hash_sha256, hmac_sha256_hex, host_of, iso8601_seconds, parse_endpoint,
};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use time::OffsetDateTime;

// 阿里云签名文档链接：https://help.aliyun.com/zh/sdk/product-overview/v3-request-structure-and-signature
// 这里只处理RPC风格、参数全部放在query中的请求，body为空

pub struct SignParams<'a, T: Serialize> {
    // 如：https://mt.aliyuncs.com，只写host时默认https
    pub endpoint: &'a str,
    pub req_method: &'a str,
    pub x_acs_action: &'a str,
    pub x_acs_version: &'a str,
    pub x_acs_security_token: Option<&'a str>,
    // 这个字段只要是序列化为Value后是Object即可
    pub query_map: T,
    pub date_time: OffsetDateTime,
    pub nonce: &'a str,
}

/// 签名后的请求：发送时直接使用url和headers即可
#[derive(Debug)]
pub struct SignedRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
}

impl SignedRequest {
    pub fn authorization(&self) -> Option<&str> {
        self.headers.get("Authorization").map(String::as_str)
    }
}

// 签名入口
pub fn sign_openapi_request<T: Serialize>(
    access_key_id: &str,
    access_key_secret: &str,
    sign_params: SignParams<'_, T>,
) -> Result<SignedRequest, Error> {
    let endpoint = parse_endpoint(sign_params.endpoint)?;
    let host = host_of(&endpoint)?;

    let query_map = to_query_map(&sign_params.query_map)?;
    let can_query_str = canonical_query(&query_map);
    // RPC风格CanonicalURI固定为`/`
    let can_uri = "/";
    let body_hash = hash_sha256(b"");

    let mut headers = BTreeMap::new();
    headers.insert("host".to_owned(), host);
    headers.insert(
        "x-acs-action".to_owned(),
        sign_params.x_acs_action.to_owned(),
    );
    headers.insert("x-acs-content-sha256".to_owned(), body_hash.clone());
    headers.insert(
        "x-acs-date".to_owned(),
        iso8601_seconds(&sign_params.date_time)?,
    );
    headers.insert(
        "x-acs-signature-nonce".to_owned(),
        sign_params.nonce.to_owned(),
    );
    headers.insert(
        "x-acs-version".to_owned(),
        sign_params.x_acs_version.to_owned(),
    );
    if let Some(token) = sign_params.x_acs_security_token {
        headers.insert("x-acs-security-token".to_owned(), token.trim().to_owned());
    }

    // BTreeMap保证了header按小写key排序
    let mut can_headers = String::new();
    for (k, v) in &headers {
        can_headers.push_str(&format!("{k}:{}\n", v.trim()));
    }
    let can_signed_headers = headers.keys().cloned().collect::<Vec<_>>().join(";");

    let can_req_str = format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        sign_params.req_method, can_uri, can_query_str, can_headers, can_signed_headers, body_hash
    );
    let hashed_can_request = hash_sha256(can_req_str.as_bytes());
    let str_to_sign = format!("ACS3-HMAC-SHA256\n{hashed_can_request}");
    let signature = hmac_sha256_hex(access_key_secret.as_bytes(), str_to_sign.as_bytes());

    let authorization = format!(
        "ACS3-HMAC-SHA256 Credential={},SignedHeaders={},Signature={}",
        access_key_id, can_signed_headers, signature
    );
    headers.insert("Authorization".to_owned(), authorization);

    let base = endpoint.as_str().trim_end_matches('/');
    let url = if can_query_str.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/?{can_query_str}")
    };

    Ok(SignedRequest { url, headers })
}

/// 按照签名文档要求序列化请求参数为BTreeMap<String, String>
///
/// 传入的query需要是一个to_value后为Value::Object的类型
pub fn to_query_map(query: impl Serialize) -> Result<BTreeMap<String, String>, Error> {
    let v = serde_json::to_value(query)
        .map_err(|e| Error::Common(format!("serialize query error: {e}")))?;
    if !v.is_object() {
        return Err(Error::Common("query is not an object".to_owned()));
    }
    let mut res = BTreeMap::new();
    if let Value::Object(map) = &v {
        for (k, val) in map {
            flatten_with_prefix(k, val, &mut res);
        }
    }
    Ok(res)
}

fn flatten_with_prefix(prefix: &str, v: &Value, out: &mut BTreeMap<String, String>) {
    match v {
        // 可选参数不出现在query中
        Value::Null => {}
        Value::Bool(b) => {
            out.insert(prefix.to_owned(), b.to_string());
        }
        Value::Number(n) => {
            out.insert(prefix.to_owned(), n.to_string());
        }
        Value::String(s) => {
            out.insert(prefix.to_owned(), s.clone());
        }
        Value::Array(arr) => {
            for (i, item) in arr.iter().enumerate() {
                // 下标从 1 开始："Tag.1"、"Tag.2"…
                let new_prefix = format!("{prefix}.{}", i + 1);
                flatten_with_prefix(&new_prefix, item, out);
            }
        }
        Value::Object(map) => {
            for (k, val) in map {
                let new_prefix = format!("{prefix}.{k}");
                flatten_with_prefix(&new_prefix, val, out);
            }
        }
    }
}
