use super::types_rs::*;
use super::{Client, MAX_CHARS};
use crate::http::read_response;
use crate::{Error, Vendor};
use fanyi_common::helper::{generate_random_string, into_header_map};
use fanyi_common::open_api_sign::{SignParams, sign_openapi_request, to_query_map};
use reqwest::StatusCode;
use serde::Serialize;
use std::collections::BTreeMap;
use time::OffsetDateTime;
use tracing::debug;

const VERSION: &str = "2018-10-12";

impl Client {
    /// 机器翻译-通用版和专业版
    ///
    /// > <a href="https://help.aliyun.com/zh/machine-translation/developer-reference/api-alimt-2018-10-12-translategeneral" target="_blank">api文档地址</a>
    ///
    /// 注意事项:
    /// 1. QPS限制50
    /// 2. 单次最多5000字符，超出时在本地返回`InvalidRequest`
    pub fn translate_builder(&self) -> TranslateBuilder<'_> {
        Translate::builder(self)
    }

    /// 批量翻译，结果按`source_texts`的下标排列
    pub fn get_batch_translate(&self) -> GetBatchTranslateBuilder<'_> {
        GetBatchTranslate::builder(self)
    }

    /// 注意：使用翻译的不同的api，需要在控制台开启相应的服务
    pub fn get_detect_language(&self) -> GetDetectLanguageBuilder<'_> {
        GetDetectLanguage::builder(self)
    }

    async fn send_rpc<T: Serialize>(
        &self,
        action: &str,
        query_map: T,
    ) -> Result<(StatusCode, String), Error> {
        let nonce = generate_random_string(32);
        let signed = sign_openapi_request(
            &self.access_key.id,
            self.access_key.secret.expose(),
            SignParams {
                endpoint: &self.endpoint,
                req_method: "GET",
                x_acs_action: action,
                x_acs_version: VERSION,
                x_acs_security_token: None,
                query_map,
                date_time: OffsetDateTime::now_utc(),
                nonce: &nonce,
            },
        )?;

        let header_map = into_header_map(&signed.headers)?;
        debug!(vendor = %Vendor::Aliyun, action, "sending request");
        let resp = self
            .http_client
            .get(&signed.url)
            .headers(header_map)
            .send()
            .await?;
        read_response(resp).await
    }
}

fn check_len(text: &str) -> Result<(), Error> {
    let len = text.chars().count();
    if len > MAX_CHARS {
        return Err(Error::InvalidRequest(format!(
            "aliyun accepts at most {MAX_CHARS} characters per text, got {len}"
        )));
    }
    Ok(())
}

impl Translate<'_> {
    pub async fn send(&self) -> Result<String, Error> {
        check_len(self.source_text)?;
        let action = if self.scene == "general" {
            "TranslateGeneral"
        } else {
            "Translate"
        };

        let (status, body) = self.client.send_rpc(action, self).await?;
        extract_translation(status, &body)
    }
}

impl GetBatchTranslate<'_> {
    pub async fn send(&self) -> Result<Vec<String>, Error> {
        let mut texts = BTreeMap::new();
        for (i, text) in self.source_texts.iter().enumerate() {
            check_len(text)?;
            texts.insert(i.to_string(), *text);
        }
        let source_text = serde_json::to_string(&texts)
            .map_err(|e| Error::InvalidRequest(format!("serialize source text error: {e}")))?;

        let mut query_map = to_query_map(self)?;
        query_map.insert("SourceText".to_owned(), source_text);

        let (status, body) = self
            .client
            .send_rpc("GetBatchTranslate", &query_map)
            .await?;
        extract_batch(status, &body, self.source_texts.len())
    }
}

impl GetDetectLanguage<'_> {
    pub async fn send(&self) -> Result<String, Error> {
        check_len(self.source_text)?;
        let (status, body) = self.client.send_rpc("GetDetectLanguage", self).await?;
        extract_detected(status, &body)
    }
}
