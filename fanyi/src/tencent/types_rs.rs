use crate::http::{ensure_success, parse_envelope};
use crate::{Error, Vendor};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// region    --- request
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct TextTranslateRequest<'a> {
    pub source_text: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub project_id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct TextTranslateBatchRequest<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub project_id: i64,
    pub source_text_list: &'a [&'a str],
}
// endregion --- request

// region    --- response
/// 腾讯云api的响应都包在`Response`里，出错时`Response.Error`存在
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Envelope<T> {
    pub response: Option<T>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ApiError {
    pub code: Option<String>,
    pub message: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct TextTranslateResponse {
    pub target_text: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub request_id: Option<String>,
    pub error: Option<ApiError>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct TextTranslateBatchResponse {
    pub target_text_list: Option<Vec<String>>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub request_id: Option<String>,
    pub error: Option<ApiError>,
}
// endregion --- response

trait HasError {
    fn take_error(&mut self) -> Option<ApiError>;
}

impl HasError for TextTranslateResponse {
    fn take_error(&mut self) -> Option<ApiError> {
        self.error.take()
    }
}

impl HasError for TextTranslateBatchResponse {
    fn take_error(&mut self) -> Option<ApiError> {
        self.error.take()
    }
}

fn open_envelope<T: DeserializeOwned + HasError>(
    status: StatusCode,
    body: &str,
) -> Result<T, Error> {
    let envelope: Envelope<T> = parse_envelope(Vendor::Tencent, status, body)?;
    let Some(mut resp) = envelope.response else {
        ensure_success(status, body)?;
        return Err(Error::malformed(Vendor::Tencent, "Response", body));
    };
    if let Some(err) = resp.take_error() {
        return Err(Error::provider(
            Vendor::Tencent,
            err.code.unwrap_or_default(),
            err.message.unwrap_or_default(),
        ));
    }
    ensure_success(status, body)?;
    Ok(resp)
}

pub(crate) fn extract_translation(status: StatusCode, body: &str) -> Result<String, Error> {
    let resp: TextTranslateResponse = open_envelope(status, body)?;
    resp.target_text
        .ok_or_else(|| Error::malformed(Vendor::Tencent, "Response.TargetText", body))
}

pub(crate) fn extract_batch(
    status: StatusCode,
    body: &str,
    expected: usize,
) -> Result<Vec<String>, Error> {
    let resp: TextTranslateBatchResponse = open_envelope(status, body)?;
    let list = resp
        .target_text_list
        .ok_or_else(|| Error::malformed(Vendor::Tencent, "Response.TargetTextList", body))?;
    if list.len() != expected {
        return Err(Error::malformed(
            Vendor::Tencent,
            format!("Response.TargetTextList[{}]", list.len().min(expected)),
            body,
        ));
    }
    Ok(list)
}
