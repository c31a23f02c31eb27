//! 火山引擎机器翻译
//!
//! 文档：<https://www.volcengine.com/docs/4640/65067>
//!
//! `TextList`本身就是批量的，单条翻译也走同一个接口

mod types_rs;
pub use types_rs::{ApiError, ResponseMetadata, TranslateTextResponse, TranslationItem};

use crate::config::{VolcConfig, timeout};
use crate::credentials::AccessKey;
use crate::http::{build_http_client, read_response};
use crate::{
    BatchRequest, BatchTranslator, Error, Lang, TranslationRequest, Translator, Vendor,
};
use bon::bon;
use fanyi_common::helper::{canonical_query, host_of, into_header_map, parse_endpoint};
use fanyi_common::volc_sign::{VolcSignParams, volc_sign};
use std::time::Duration;
use time::OffsetDateTime;
use tracing::debug;
use types_rs::{TranslateTextRequest, extract_translations};
use url::Url;

const SERVICE: &str = "translate";
const CONTENT_TYPE: &str = "application/json";
const QUERY: &[(&str, &str)] = &[("Action", "TranslateText"), ("Version", "2020-06-01")];

pub const DEFAULT_ENDPOINT: &str = "translate.volcengineapi.com";

pub struct Client {
    access_key: AccessKey,
    endpoint: Url,
    host: String,
    region: String,
    qps: u32,
    http_client: reqwest::Client,
}

#[bon]
impl Client {
    #[builder(on(String, into))]
    pub fn new(
        access_key: AccessKey,
        #[builder(default = DEFAULT_ENDPOINT.to_owned())] endpoint: String,
        #[builder(default = "cn-north-1".to_owned())] region: String,
        #[builder(default = 10)] qps: u32,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        access_key.validate(Vendor::Volc)?;
        let endpoint = parse_endpoint(&endpoint)?;
        let host = host_of(&endpoint)?;

        Ok(Self {
            access_key,
            endpoint,
            host,
            region,
            qps,
            http_client: build_http_client(timeout)?,
        })
    }
}

impl Client {
    pub fn from_config(config: VolcConfig) -> Result<Self, Error> {
        Client::builder()
            .access_key(AccessKey::new(config.access_key_id, config.access_key_secret))
            .endpoint(config.endpoint)
            .region(config.region)
            .qps(config.qps)
            .maybe_timeout(timeout(config.timeout_secs))
            .build()
    }

    /// 结果和`req.queries`按下标一一对应
    pub async fn translate_text(&self, req: BatchRequest<'_>) -> Result<Vec<String>, Error> {
        let body = TranslateTextRequest {
            source_language: (!req.source.is_auto()).then(|| lang_code(req.source)),
            target_language: lang_code(req.target),
            text_list: req.queries,
        };
        let payload = serde_json::to_vec(&body)
            .map_err(|e| Error::InvalidRequest(format!("serialize request error: {e}")))?;

        let signed = volc_sign(
            &self.access_key.id,
            self.access_key.secret.expose(),
            VolcSignParams {
                method: "POST",
                host: &self.host,
                path: "/",
                query: QUERY,
                content_type: CONTENT_TYPE,
                payload: &payload,
                region: &self.region,
                service: SERVICE,
                date_time: OffsetDateTime::now_utc(),
            },
        )?;
        let headers = into_header_map([
            ("Authorization", signed.authorization.as_str()),
            ("Content-Type", CONTENT_TYPE),
            ("Host", self.host.as_str()),
            ("X-Date", signed.x_date.as_str()),
            ("X-Content-Sha256", signed.x_content_sha256.as_str()),
        ])?;

        let mut url = self.endpoint.clone();
        url.set_path("/");
        url.set_query(Some(&canonical_query(QUERY.iter().copied())));

        debug!(vendor = %Vendor::Volc, count = req.queries.len(), region = %self.region, "sending request");
        let resp = self
            .http_client
            .post(url)
            .headers(headers)
            .body(payload)
            .send()
            .await?;
        let (status, text) = read_response(resp).await?;
        extract_translations(status, &text, req.queries.len())
    }
}

/// 火山的语种代码
pub fn lang_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Auto => "auto",
        Lang::Zh => "zh",
        Lang::ZhTw => "zh-Hant",
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
        Vendor::Volc
    }

    fn qps(&self) -> u32 {
        self.qps
    }

    async fn translate(&self, query: &str, source: Lang, target: Lang) -> Result<String, Error> {
        let req = TranslationRequest::new(query, source, target)?;
        let queries = [req.query];
        let list = self
            .translate_text(BatchRequest::new(&queries, req.source, req.target)?)
            .await?;
        list.into_iter()
            .next()
            .ok_or_else(|| Error::malformed(Vendor::Volc, "TranslationList[0]", ""))
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
        self.translate_text(req).await
    }
}
