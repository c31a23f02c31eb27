use super::Client;
use crate::http::{de_opt_code, ensure_success, parse_envelope};
use crate::{Error, Vendor};
use bon::Builder;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

const SUCCESS_CODE: &str = "200";

// region    --- translate
/// 通用版（`TranslateGeneral`）和专业版（`Translate`）共用的参数，`scene`不是`general`时走专业版
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Translate<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    #[builder(default = "text")]
    format_type: &'a str,
    source_language: &'a str,
    target_language: &'a str,
    pub(crate) source_text: &'a str,
    #[builder(default = "general")]
    pub(crate) scene: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,
}

/// ```json
/// {
///     "RequestId": "86C3A7F6-0FD6-4E8B-8A56-2DD1B4F8E5A2",
///     "Data": { "WordCount": "5", "Translated": "你好" },
///     "Code": "200"
/// }
/// ```
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct TranslateResponse {
    #[serde(default, deserialize_with = "de_opt_code")]
    pub code: Option<String>,
    pub message: Option<String>,
    pub recommend: Option<String>,
    pub request_id: Option<String>,
    pub data: Option<TranslateData>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct TranslateData {
    pub word_count: Option<String>,
    pub translated: Option<String>,
    pub detected_language: Option<String>,
}
// endregion --- translate

// region    --- batch translate
/// `SourceText`在发送时拼成`{"0": "...", "1": "..."}`的json字符串
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBatchTranslate<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    #[builder(default = "text")]
    format_type: &'a str,
    source_language: &'a str,
    target_language: &'a str,
    #[serde(skip_serializing)]
    pub(crate) source_texts: &'a [&'a str],
    #[builder(default = "general")]
    scene: &'a str,
    /// `translate_standard`为通用版，`translate_ecommerce`为专业版
    #[builder(default = "translate_standard")]
    api_type: &'a str,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct GetBatchTranslateResponse {
    #[serde(default, deserialize_with = "de_opt_code")]
    pub code: Option<String>,
    pub message: Option<String>,
    pub recommend: Option<String>,
    pub request_id: Option<String>,
    pub translated_list: Option<Vec<BatchItem>>,
}

/// 注意列表里的字段是小驼峰
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    #[serde(default, deserialize_with = "de_opt_code")]
    pub index: Option<String>,
    #[serde(default, deserialize_with = "de_opt_code")]
    pub code: Option<String>,
    pub translated: Option<String>,
    pub word_count: Option<String>,
    pub detected_language: Option<String>,
    pub error_msg: Option<String>,
}
// endregion --- batch translate

// region    --- detect language
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDetectLanguage<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    pub(crate) source_text: &'a str,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct GetDetectLanguageResponse {
    #[serde(default, deserialize_with = "de_opt_code")]
    pub code: Option<String>,
    pub message: Option<String>,
    pub recommend: Option<String>,
    pub request_id: Option<String>,
    pub detected_language: Option<String>,
    pub language_probabilities: Option<String>,
}
// endregion --- detect language

/// 网关错误和业务错误都是`Code != 200`，网关错误会额外带上`Recommend`诊断地址
fn check_code(
    status: StatusCode,
    body: &str,
    code: Option<String>,
    message: Option<String>,
    recommend: Option<String>,
) -> Result<(), Error> {
    if let Some(code) = code.filter(|c| c != SUCCESS_CODE) {
        let mut message = message.unwrap_or_default();
        if let Some(recommend) = recommend {
            message = format!("{message}, recommend: {recommend}");
        }
        return Err(Error::provider(Vendor::Aliyun, code, message));
    }
    ensure_success(status, body)
}

pub(crate) fn extract_translation(status: StatusCode, body: &str) -> Result<String, Error> {
    let resp: TranslateResponse = parse_envelope(Vendor::Aliyun, status, body)?;
    check_code(status, body, resp.code, resp.message, resp.recommend)?;
    resp.data
        .and_then(|d| d.translated)
        .ok_or_else(|| Error::malformed(Vendor::Aliyun, "Data.Translated", body))
}

pub(crate) fn extract_detected(status: StatusCode, body: &str) -> Result<String, Error> {
    let resp: GetDetectLanguageResponse = parse_envelope(Vendor::Aliyun, status, body)?;
    check_code(status, body, resp.code, resp.message, resp.recommend)?;
    resp.detected_language
        .ok_or_else(|| Error::malformed(Vendor::Aliyun, "DetectedLanguage", body))
}

/// 按`index`把结果放回请求的顺序，阿里云不保证返回顺序
pub(crate) fn extract_batch(
    status: StatusCode,
    body: &str,
    expected: usize,
) -> Result<Vec<String>, Error> {
    let resp: GetBatchTranslateResponse = parse_envelope(Vendor::Aliyun, status, body)?;
    check_code(status, body, resp.code, resp.message, resp.recommend)?;
    let list = resp
        .translated_list
        .ok_or_else(|| Error::malformed(Vendor::Aliyun, "TranslatedList", body))?;

    let mut slots: Vec<Option<String>> = vec![None; expected];
    for (pos, item) in list.into_iter().enumerate() {
        let index = item
            .index
            .as_deref()
            .and_then(|i| i.parse::<usize>().ok())
            .filter(|i| *i < expected)
            .ok_or_else(|| {
                Error::malformed(Vendor::Aliyun, format!("TranslatedList[{pos}].index"), body)
            })?;
        if let Some(code) = item.code.filter(|c| c != SUCCESS_CODE) {
            let message = item
                .error_msg
                .unwrap_or_else(|| format!("query #{index} failed"));
            return Err(Error::provider(Vendor::Aliyun, code, message));
        }
        let translated = item.translated.ok_or_else(|| {
            Error::malformed(Vendor::Aliyun, format!("TranslatedList[{pos}].translated"), body)
        })?;
        slots[index] = Some(translated);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            s.ok_or_else(|| Error::malformed(Vendor::Aliyun, format!("TranslatedList[index={i}]"), body))
        })
        .collect()
}
