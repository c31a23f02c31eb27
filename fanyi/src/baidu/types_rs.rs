use crate::http::{de_opt_code, ensure_success, parse_envelope};
use crate::{Error, Vendor};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

// 百度在成功时有时也会带上这个错误码
const SUCCESS_CODE: &str = "52000";

#[derive(Serialize)]
pub(crate) struct TranslateForm<'a> {
    pub q: &'a str,
    pub from: &'a str,
    pub to: &'a str,
    pub appid: &'a str,
    pub salt: &'a str,
    pub sign: &'a str,
}

/// ```json
/// {
///     "from": "zh",
///     "to": "en",
///     "trans_result": [
///         { "src": "我爱你，亲爱的中国！", "dst": "I love you, dear China!" }
///     ]
/// }
/// ```
///
/// 出错时：`{"error_code": "54001", "error_msg": "Invalid Sign"}`
#[derive(Deserialize, Debug)]
pub struct TranslateResponse {
    pub from: Option<String>,
    pub to: Option<String>,
    pub trans_result: Option<Vec<TransResult>>,
    #[serde(default, deserialize_with = "de_opt_code")]
    pub error_code: Option<String>,
    pub error_msg: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct TransResult {
    pub src: Option<String>,
    pub dst: Option<String>,
}

/// 多行的原文每行对应一个`trans_result`，按行拼回去
pub(crate) fn extract_translation(status: StatusCode, body: &str) -> Result<String, Error> {
    let resp: TranslateResponse = parse_envelope(Vendor::Baidu, status, body)?;
    if let Some(code) = resp.error_code.filter(|c| c != SUCCESS_CODE) {
        return Err(Error::provider(
            Vendor::Baidu,
            code,
            resp.error_msg.unwrap_or_default(),
        ));
    }
    ensure_success(status, body)?;

    let results = resp
        .trans_result
        .filter(|r| !r.is_empty())
        .ok_or_else(|| Error::malformed(Vendor::Baidu, "trans_result[0]", body))?;
    let mut lines = Vec::with_capacity(results.len());
    for (i, r) in results.into_iter().enumerate() {
        let dst = r
            .dst
            .ok_or_else(|| Error::malformed(Vendor::Baidu, format!("trans_result[{i}].dst"), body))?;
        lines.push(dst);
    }
    Ok(lines.join("\n"))
}
