use super::error::Error;
use super::helper::{hash_sha256, hmac_sha256, hmac_sha256_hex};
use time::OffsetDateTime;
use time::macros::format_description;

// 腾讯云签名方法 v3：https://cloud.tencent.com/document/api/213/30654

const ALGORITHM: &str = "TC3-HMAC-SHA256";
const SIGNED_HEADERS: &str = "content-type;host;x-tc-action";

pub struct Tc3Params<'a> {
    pub host: &'a str,
    // 产品名，机器翻译为`tmt`
    pub service: &'a str,
    pub action: &'a str,
    pub content_type: &'a str,
    pub payload: &'a [u8],
    // 秒级时间戳，同时用于X-TC-Timestamp
    pub timestamp: i64,
}

/// 返回Authorization头的值
pub fn tc3_authorization(
    secret_id: &str,
    secret_key: &str,
    params: Tc3Params<'_>,
) -> Result<String, Error> {
    let date = OffsetDateTime::from_unix_timestamp(params.timestamp)
        .map_err(|e| Error::Common(format!("invalid timestamp: {e}")))?
        .format(&format_description!("[year]-[month]-[day]"))
        .map_err(|e| Error::Common(format!("format date error: {e}")))?;

    // 1. CanonicalRequest，只有POST，CanonicalURI和CanonicalQueryString固定
    let canonical_headers = format!(
        "content-type:{}\nhost:{}\nx-tc-action:{}\n",
        params.content_type,
        params.host,
        params.action.to_lowercase()
    );
    let canonical_request = format!(
        "POST\n/\n\n{}\n{}\n{}",
        canonical_headers,
        SIGNED_HEADERS,
        hash_sha256(params.payload)
    );

    // 2. StringToSign
    let credential_scope = format!("{}/{}/tc3_request", date, params.service);
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        params.timestamp,
        credential_scope,
        hash_sha256(canonical_request.as_bytes())
    );

    // 3. Signature
    let secret_date = hmac_sha256(format!("TC3{secret_key}").as_bytes(), date.as_bytes());
    let secret_service = hmac_sha256(&secret_date, params.service.as_bytes());
    let secret_signing = hmac_sha256(&secret_service, b"tc3_request");
    let signature = hmac_sha256_hex(&secret_signing, string_to_sign.as_bytes());

    Ok(format!(
        "{ALGORITHM} Credential={secret_id}/{credential_scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}"
    ))
}
