//! 小牛翻译（NiuTrans）
//!
//! - 文本翻译：<https://niutrans.com/documents/contents/trans_text>
//! - 批量翻译走`translationArray`接口，地址单独配置

mod types_rs;
pub use types_rs::{TgtItem, TranslateArrayResponse, TranslateResponse};

use crate::config::{NiuTransConfig, timeout};
use crate::credentials::{Secret, require};
use crate::http::{build_http_client, read_response};
use crate::{
    BatchRequest, BatchTranslator, Error, Lang, TranslationRequest, Translator, Vendor,
};
use bon::bon;
use fanyi_common::helper::parse_endpoint;
use std::time::Duration;
use tracing::debug;
use types_rs::{TranslateArrayBody, TranslateQuery, extract_batch, extract_translation};

pub const DEFAULT_URL: &str = "http://api.niutrans.com/NiuTransServer/translation";
pub const DEFAULT_BATCH_URL: &str = "http://api.niutrans.com/NiuTransServer/translationArray";

pub struct Client {
    api_key: Secret,
    url: String,
    batch_url: String,
    qps: u32,
    http_client: reqwest::Client,
}

#[bon]
impl Client {
    #[builder(on(String, into))]
    pub fn new(
        #[builder(into)] api_key: Secret,
        #[builder(default = DEFAULT_URL.to_owned())] url: String,
        #[builder(default = DEFAULT_BATCH_URL.to_owned())] batch_url: String,
        #[builder(default = 5)] qps: u32,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        require(Vendor::NiuTrans, "api_key", api_key.expose())?;
        parse_endpoint(&url)?;
        parse_endpoint(&batch_url)?;

        Ok(Self {
            api_key,
            url,
            batch_url,
            qps,
            http_client: build_http_client(timeout)?,
        })
    }
}

impl Client {
    pub fn from_config(config: NiuTransConfig) -> Result<Self, Error> {
        Client::builder()
            .api_key(config.api_key)
            .url(config.url)
            .batch_url(config.batch_url)
            .qps(config.qps)
            .maybe_timeout(timeout(config.timeout_secs))
            .build()
    }

    pub async fn translate_text(&self, req: TranslationRequest<'_>) -> Result<String, Error> {
        let query = TranslateQuery {
            from: lang_code(req.source),
            to: lang_code(req.target),
            apikey: self.api_key.expose(),
            src_text: req.query,
        };

        debug!(vendor = %Vendor::NiuTrans, from = query.from, to = query.to, "sending request");
        let resp = self
            .http_client
            .get(&self.url)
            .query(&query)
            .send()
            .await?;
        let (status, body) = read_response(resp).await?;
        extract_translation(status, &body)
    }

    pub async fn translate_array(&self, req: BatchRequest<'_>) -> Result<Vec<String>, Error> {
        let body = TranslateArrayBody {
            from: lang_code(req.source),
            to: lang_code(req.target),
            apikey: self.api_key.expose(),
            src_text: req.queries,
        };

        debug!(vendor = %Vendor::NiuTrans, count = req.queries.len(), "sending batch request");
        let resp = self
            .http_client
            .post(&self.batch_url)
            .json(&body)
            .send()
            .await?;
        let (status, text) = read_response(resp).await?;
        extract_batch(status, &text, req.queries.len())
    }
}

/// 小牛的语种代码
pub fn lang_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Auto => "auto",
        Lang::Zh => "zh",
        Lang::ZhTw => "cht",
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
        Vendor::NiuTrans
    }

    fn qps(&self) -> u32 {
        self.qps
    }

    async fn translate(&self, query: &str, source: Lang, target: Lang) -> Result<String, Error> {
        let req = TranslationRequest::new(query, source, target)?;
        self.translate_text(req).await
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
        self.translate_array(req).await
    }
}
