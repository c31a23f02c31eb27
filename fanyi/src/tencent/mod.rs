//! 腾讯云机器翻译（TMT）
//!
//! - 文本翻译：<https://cloud.tencent.com/document/api/551/15619>
//! - 批量文本翻译：<https://cloud.tencent.com/document/api/551/40566>
//!
//! 签名使用TC3-HMAC-SHA256，见[`fanyi_common::tc3_sign`]

mod types_rs;
pub use types_rs::{ApiError, TextTranslateBatchResponse, TextTranslateResponse};

use crate::config::{TencentConfig, timeout};
use crate::credentials::AccessKey;
use crate::http::{build_http_client, read_response};
use crate::{
    BatchRequest, BatchTranslator, Error, Lang, TranslationRequest, Translator, Vendor,
};
use bon::bon;
use fanyi_common::helper::{host_of, into_header_map, parse_endpoint};
use fanyi_common::tc3_sign::{Tc3Params, tc3_authorization};
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::debug;
use types_rs::{TextTranslateBatchRequest, TextTranslateRequest, extract_batch, extract_translation};
use url::Url;

const SERVICE: &str = "tmt";
const VERSION: &str = "2018-03-21";
const CONTENT_TYPE: &str = "application/json; charset=utf-8";

pub const DEFAULT_ENDPOINT: &str = "tmt.tencentcloudapi.com";

pub struct Client {
    access_key: AccessKey,
    endpoint: Url,
    host: String,
    region: String,
    project_id: i64,
    qps: u32,
    http_client: reqwest::Client,
}

#[bon]
impl Client {
    #[builder(on(String, into))]
    pub fn new(
        access_key: AccessKey,
        #[builder(default = DEFAULT_ENDPOINT.to_owned())] endpoint: String,
        #[builder(default = "ap-guangzhou".to_owned())] region: String,
        #[builder(default = 0)] project_id: i64,
        #[builder(default = 5)] qps: u32,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        access_key.validate(Vendor::Tencent)?;
        let endpoint = parse_endpoint(&endpoint)?;
        let host = host_of(&endpoint)?;

        Ok(Self {
            access_key,
            endpoint,
            host,
            region,
            project_id,
            qps,
            http_client: build_http_client(timeout)?,
        })
    }
}

impl Client {
    pub fn from_config(config: TencentConfig) -> Result<Self, Error> {
        Client::builder()
            .access_key(AccessKey::new(config.secret_id, config.secret_key))
            .endpoint(config.endpoint)
            .region(config.region)
            .qps(config.qps)
            .maybe_timeout(timeout(config.timeout_secs))
            .build()
    }

    pub async fn text_translate(&self, req: TranslationRequest<'_>) -> Result<String, Error> {
        let body = TextTranslateRequest {
            source_text: req.query,
            source: lang_code(req.source),
            target: lang_code(req.target),
            project_id: self.project_id,
        };
        let (status, text) = self.send("TextTranslate", &body).await?;
        extract_translation(status, &text)
    }

    pub async fn text_translate_batch(&self, req: BatchRequest<'_>) -> Result<Vec<String>, Error> {
        let body = TextTranslateBatchRequest {
            source: lang_code(req.source),
            target: lang_code(req.target),
            project_id: self.project_id,
            source_text_list: req.queries,
        };
        let (status, text) = self.send("TextTranslateBatch", &body).await?;
        extract_batch(status, &text, req.queries.len())
    }

    async fn send(&self, action: &str, body: &impl Serialize) -> Result<(StatusCode, String), Error> {
        let payload = serde_json::to_vec(body)
            .map_err(|e| Error::InvalidRequest(format!("serialize request error: {e}")))?;
        let timestamp = OffsetDateTime::now_utc().unix_timestamp();
        let authorization = tc3_authorization(
            &self.access_key.id,
            self.access_key.secret.expose(),
            Tc3Params {
                host: &self.host,
                service: SERVICE,
                action,
                content_type: CONTENT_TYPE,
                payload: &payload,
                timestamp,
            },
        )?;

        let timestamp = timestamp.to_string();
        let headers = into_header_map([
            ("Authorization", authorization.as_str()),
            ("Content-Type", CONTENT_TYPE),
            ("Host", self.host.as_str()),
            ("X-TC-Action", action),
            ("X-TC-Timestamp", timestamp.as_str()),
            ("X-TC-Version", VERSION),
            ("X-TC-Region", self.region.as_str()),
        ])?;

        debug!(vendor = %Vendor::Tencent, action, region = %self.region, "sending request");
        let resp = self
            .http_client
            .post(self.endpoint.clone())
            .headers(headers)
            .body(payload)
            .send()
            .await?;
        read_response(resp).await
    }
}

/// 腾讯云的语种代码
pub fn lang_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Auto => "auto",
        Lang::Zh => "zh",
        Lang::ZhTw => "zh-TW",
        Lang::En => "en",
        Lang::Ja => "ja",
        Lang::Ko => "ko",
        Lang::Fr => "fr",
        Lang::De => "de",
        Lang::Es => "es",
        Lang::Ru => "ru",
        Lang::Pt => "pt",
        Lang::It => "it",
        Lang::Ar => "ar",
        Lang::Th => "th",
        Lang::Vi => "vi",
    }
}

#[async_trait::async_trait]
impl Translator for Client {
    fn vendor(&self) -> Vendor {
        Vendor::Tencent
    }

    fn qps(&self) -> u32 {
        self.qps
    }

    async fn translate(&self, query: &str, source: Lang, target: Lang) -> Result<String, Error> {
        let req = TranslationRequest::new(query, source, target)?;
        self.text_translate(req).await
    }

    fn as_batch(&self) -> Option<&dyn BatchTranslator> {
        Some(self)
    }
}

#[async_trait::async_trait]
impl BatchTranslator for Client {
    async fn translate_batch(
        &self,
        queries: &[&str],
        source: Lang,
        target: Lang,
    ) -> Result<Vec<String>, Error> {
        let req = BatchRequest::new(queries, source, target)?;
        self.text_translate_batch(req).await
    }
}
