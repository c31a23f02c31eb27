use crate::Error;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::Rng;
use rand::distr::Alphanumeric;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use sha2::{Digest, Sha256};
use time::format_description::well_known::iso8601::{
    Config, EncodedConfig, Iso8601, TimePrecision,
};
use time::{OffsetDateTime, UtcOffset};
use url::Url;

// RFC 3986 unreserved: A-Z a-z 0-9 - _ . ~
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// 输出格式: YYYY-MM-DDThh:mm:ssZ
///
/// eg: 2025-11-13T13:31:09Z
pub fn iso8601_seconds(date_time: &OffsetDateTime) -> Result<String, Error> {
    const ENCODED_CONFIG: EncodedConfig = Config::DEFAULT
        .set_time_precision(TimePrecision::Second {
            decimal_digits: None,
        })
        .encode();

    date_time
        .to_offset(UtcOffset::UTC)
        .format(&Iso8601::<ENCODED_CONFIG>)
        .map_err(|e| Error::Common(format!("format date time error: {}", e)))
}

/// 按RFC 3986进行编码，空格为`%20`，`*`为`%2A`，`~`不编码
pub fn uri_encode(s: &str) -> String {
    utf8_percent_encode(s, URI_ENCODE_SET).to_string()
}

/// 对key、value分别编码后按key排序，用`&`连接
///
/// 签名用的CanonicalQueryString和实际发送的query使用同一个字符串，避免两边编码不一致
pub fn canonical_query<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut encoded = pairs
        .into_iter()
        .map(|(k, v)| (uri_encode(k.as_ref()), uri_encode(v.as_ref())))
        .collect::<Vec<_>>();
    encoded.sort();
    encoded
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// 配置里的endpoint可以只写host（如`mt.aliyuncs.com`），此时默认使用https
pub fn parse_endpoint(endpoint: &str) -> Result<Url, Error> {
    let endpoint = endpoint.trim();
    let with_scheme = if endpoint.contains("://") {
        endpoint.to_owned()
    } else {
        format!("https://{endpoint}")
    };
    let url = Url::parse(&with_scheme)
        .map_err(|e| Error::InvalidEndpoint(format!("{endpoint}: {e}")))?;
    if url.host_str().is_none() {
        return Err(Error::InvalidEndpoint(format!("{endpoint}: missing host")));
    }
    Ok(url)
}

/// 签名中使用的host，非默认端口时带上端口
pub fn host_of(url: &Url) -> Result<String, Error> {
    let host = url
        .host_str()
        .ok_or_else(|| Error::InvalidEndpoint(format!("{url}: missing host")))?;
    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    })
}

pub fn into_header_map<I, K, V>(headers: I) -> Result<HeaderMap, Error>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    headers
        .into_iter()
        .map(|(k, v)| {
            let name = HeaderName::from_bytes(k.as_ref().as_bytes())
                .map_err(|e| Error::InvalidHeader(format!("{}: {}", k.as_ref(), e)))?;
            let value = HeaderValue::from_str(v.as_ref())
                .map_err(|e| Error::InvalidHeader(format!("{}: {}", k.as_ref(), e)))?;
            Ok((name, value))
        })
        .collect()
}

pub fn hash_sha256(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

pub fn hmac_sha256(key: &[u8], msg: &[u8]) -> Vec<u8> {
    type HmacSha256 = Hmac<Sha256>;
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(msg);
    mac.finalize().into_bytes().to_vec()
}

pub fn hmac_sha256_hex(key: &[u8], msg: &[u8]) -> String {
    hex::encode(hmac_sha256(key, msg))
}

pub fn generate_random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
