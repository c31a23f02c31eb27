use crate::http::{de_opt_code, ensure_success, parse_envelope};
use crate::{Error, Vendor};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct TranslateQuery<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub apikey: &'a str,
    pub src_text: &'a str,
}

#[derive(Serialize)]
pub(crate) struct TranslateArrayBody<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub apikey: &'a str,
    pub src_text: &'a [&'a str],
}

/// ```json
/// { "from": "en", "to": "zh", "tgt_text": "你好" }
/// ```
///
/// 出错时：`{"error_code": "13001", "error_msg": "apikey is empty", "from": "en", "to": "zh"}`
#[derive(Deserialize, Debug)]
pub struct TranslateResponse {
    pub from: Option<String>,
    pub to: Option<String>,
    pub tgt_text: Option<String>,
    #[serde(default, deserialize_with = "de_opt_code")]
    pub error_code: Option<String>,
    pub error_msg: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct TranslateArrayResponse {
    pub from: Option<String>,
    pub to: Option<String>,
    pub tgt_text: Option<Vec<TgtItem>>,
    #[serde(default, deserialize_with = "de_opt_code")]
    pub error_code: Option<String>,
    pub error_msg: Option<String>,
}

/// 批量接口的`tgt_text`有两种形态：字符串数组，或者`[{"tgt": "..."}]`
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum TgtItem {
    Text(String),
    Object { tgt: Option<String> },
}

impl TgtItem {
    fn into_text(self) -> Option<String> {
        match self {
            TgtItem::Text(s) => Some(s),
            TgtItem::Object { tgt } => tgt,
        }
    }
}

fn check_error(
    status: StatusCode,
    body: &str,
    code: Option<String>,
    msg: Option<String>,
) -> Result<(), Error> {
    if let Some(code) = code {
        return Err(Error::provider(Vendor::NiuTrans, code, msg.unwrap_or_default()));
    }
    ensure_success(status, body)
}

pub(crate) fn extract_translation(status: StatusCode, body: &str) -> Result<String, Error> {
    let resp: TranslateResponse = parse_envelope(Vendor::NiuTrans, status, body)?;
    check_error(status, body, resp.error_code, resp.error_msg)?;
    resp.tgt_text
        .ok_or_else(|| Error::malformed(Vendor::NiuTrans, "tgt_text", body))
}

pub(crate) fn extract_batch(
    status: StatusCode,
    body: &str,
    expected: usize,
) -> Result<Vec<String>, Error> {
    let resp: TranslateArrayResponse = parse_envelope(Vendor::NiuTrans, status, body)?;
    check_error(status, body, resp.error_code, resp.error_msg)?;
    let list = resp
        .tgt_text
        .ok_or_else(|| Error::malformed(Vendor::NiuTrans, "tgt_text", body))?;
    if list.len() != expected {
        return Err(Error::malformed(
            Vendor::NiuTrans,
            format!("tgt_text[{}]", list.len().min(expected)),
            body,
        ));
    }
    list.into_iter()
        .enumerate()
        .map(|(i, item)| {
            item.into_text()
                .ok_or_else(|| Error::malformed(Vendor::NiuTrans, format!("tgt_text[{i}].tgt"), body))
        })
        .collect()
}
