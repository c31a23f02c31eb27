use super::error::Error;
use super::helper::{canonical_query, hash_sha256, hmac_sha256, hmac_sha256_hex};
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

// 火山引擎签名：https://www.volcengine.com/docs/6369/67269

const ALGORITHM: &str = "HMAC-SHA256";
const SIGNED_HEADERS: &str = "content-type;host;x-content-sha256;x-date";

pub struct VolcSignParams<'a> {
    pub method: &'a str,
    pub host: &'a str,
    pub path: &'a str,
    pub query: &'a [(&'a str, &'a str)],
    pub content_type: &'a str,
    pub payload: &'a [u8],
    pub region: &'a str,
    pub service: &'a str,
    pub date_time: OffsetDateTime,
}

/// 发送请求时需要带上的签名相关头
#[derive(Debug, Clone)]
pub struct VolcSigned {
    pub authorization: String,
    pub x_date: String,
    pub x_content_sha256: String,
}

pub fn volc_sign(
    access_key_id: &str,
    secret_access_key: &str,
    params: VolcSignParams<'_>,
) -> Result<VolcSigned, Error> {
    let date_time = params.date_time.to_offset(UtcOffset::UTC);
    let x_date = date_time
        .format(&format_description!(
            "[year][month][day]T[hour][minute][second]Z"
        ))
        .map_err(|e| Error::Common(format!("format date error: {e}")))?;
    let short_date = &x_date[..8];
    let payload_hash = hash_sha256(params.payload);

    let canonical_headers = format!(
        "content-type:{}\nhost:{}\nx-content-sha256:{}\nx-date:{}\n",
        params.content_type.trim(),
        params.host.trim(),
        payload_hash,
        x_date
    );
    let canonical_request = format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        params.method,
        params.path,
        canonical_query(params.query.iter().copied()),
        canonical_headers,
        SIGNED_HEADERS,
        payload_hash
    );

    let credential_scope = format!(
        "{}/{}/{}/request",
        short_date, params.region, params.service
    );
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        x_date,
        credential_scope,
        hash_sha256(canonical_request.as_bytes())
    );

    let k_date = hmac_sha256(secret_access_key.as_bytes(), short_date.as_bytes());
    let k_region = hmac_sha256(&k_date, params.region.as_bytes());
    let k_service = hmac_sha256(&k_region, params.service.as_bytes());
    let k_signing = hmac_sha256(&k_service, b"request");
    let signature = hmac_sha256_hex(&k_signing, string_to_sign.as_bytes());

    Ok(VolcSigned {
        authorization: format!(
            "{ALGORITHM} Credential={access_key_id}/{credential_scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}"
        ),
        x_date,
        x_content_sha256: payload_hash,
    })
}
