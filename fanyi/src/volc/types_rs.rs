use crate::http::{ensure_success, parse_envelope};
use crate::{Error, Vendor};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// `SourceLanguage`不传时由火山自动检测，不能传空字符串
#[serde_with::skip_serializing_none]
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct TranslateTextRequest<'a> {
    pub source_language: Option<&'a str>,
    pub target_language: &'a str,
    pub text_list: &'a [&'a str],
}

/// ```json
/// {
///     "TranslationList": [{ "Translation": "你好", "DetectedSourceLanguage": "en" }],
///     "ResponseMetadata": { "RequestId": "...", "Action": "TranslateText", "Version": "2020-06-01" }
/// }
/// ```
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct TranslateTextResponse {
    pub translation_list: Option<Vec<TranslationItem>>,
    pub response_metadata: Option<ResponseMetadata>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct TranslationItem {
    pub translation: Option<String>,
    pub detected_source_language: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseMetadata {
    pub request_id: Option<String>,
    pub action: Option<String>,
    pub version: Option<String>,
    pub error: Option<ApiError>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ApiError {
    pub code: Option<String>,
    pub code_n: Option<i64>,
    pub message: Option<String>,
}

pub(crate) fn extract_translations(
    status: StatusCode,
    body: &str,
    expected: usize,
) -> Result<Vec<String>, Error> {
    let resp: TranslateTextResponse = parse_envelope(Vendor::Volc, status, body)?;
    if let Some(err) = resp.response_metadata.and_then(|m| m.error) {
        let code = match (err.code, err.code_n) {
            (Some(code), _) => code,
            (None, Some(n)) => n.to_string(),
            (None, None) => String::new(),
        };
        return Err(Error::provider(
            Vendor::Volc,
            code,
            err.message.unwrap_or_default(),
        ));
    }
    ensure_success(status, body)?;

    let list = resp
        .translation_list
        .ok_or_else(|| Error::malformed(Vendor::Volc, "TranslationList", body))?;
    if list.len() != expected {
        return Err(Error::malformed(
            Vendor::Volc,
            format!("TranslationList[{}]", list.len().min(expected)),
            body,
        ));
    }
    list.into_iter()
        .enumerate()
        .map(|(i, item)| {
            item.translation.ok_or_else(|| {
                Error::malformed(Vendor::Volc, format!("TranslationList[{i}].Translation"), body)
            })
        })
        .collect()
}
