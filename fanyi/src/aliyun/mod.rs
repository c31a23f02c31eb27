//! 阿里云机器翻译
//!
//! 请求使用OpenAPI V3签名（ACS3-HMAC-SHA256），参数全部放在query中

mod trans;
mod types_rs;
pub use types_rs::*;

use crate::config::{AliyunConfig, timeout};
use crate::credentials::AccessKey;
use crate::http::build_http_client;
use crate::{
    BatchRequest, BatchTranslator, Error, Lang, TranslationRequest, Translator, Vendor,
};
use bon::bon;
use fanyi_common::helper::parse_endpoint;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "mt.aliyuncs.com";

/// 单条文本的字符数上限
pub const MAX_CHARS: usize = 5000;

pub struct Client {
    access_key: AccessKey,
    endpoint: String,
    scene: String,
    qps: u32,
    http_client: reqwest::Client,
}

#[bon]
impl Client {
    #[builder(on(String, into))]
    pub fn new(
        access_key: AccessKey,
        #[builder(default = DEFAULT_ENDPOINT.to_owned())] endpoint: String,
        /// `general`使用通用版，其他场景（如`title`、`description`）使用专业版
        #[builder(default = "general".to_owned())]
        scene: String,
        #[builder(default = 50)] qps: u32,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        access_key.validate(Vendor::Aliyun)?;
        parse_endpoint(&endpoint)?;

        Ok(Self {
            access_key,
            endpoint,
            scene,
            qps,
            http_client: build_http_client(timeout)?,
        })
    }
}

impl Client {
    pub fn from_config(config: AliyunConfig) -> Result<Self, Error> {
        Client::builder()
            .access_key(AccessKey::new(config.access_key_id, config.access_key_secret))
            .endpoint(config.endpoint)
            .scene(config.scene)
            .qps(config.qps)
            .maybe_timeout(timeout(config.timeout_secs))
            .build()
    }

    /// 使用客户端配置的场景翻译
    pub async fn translate_text(&self, req: TranslationRequest<'_>) -> Result<String, Error> {
        self.translate_professional(req, &self.scene).await
    }

    /// 指定场景翻译，`general`以外的场景需要开通专业版
    pub async fn translate_professional(
        &self,
        req: TranslationRequest<'_>,
        scene: &str,
    ) -> Result<String, Error> {
        self.translate_builder()
            .source_language(lang_code(req.source))
            .target_language(lang_code(req.target))
            .source_text(req.query)
            .scene(scene)
            .build()
            .send()
            .await
    }

    /// 返回阿里云的语种代码，如`zh`、`en`
    pub async fn detect_language(&self, text: &str) -> Result<String, Error> {
        if text.trim().is_empty() {
            return Err(Error::InvalidRequest("query is empty".to_owned()));
        }
        self.get_detect_language().source_text(text).build().send().await
    }
}

/// 阿里云的语种代码：<https://help.aliyun.com/zh/machine-translation/support/supported-languages-and-codes>
pub fn lang_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Auto => "auto",
        Lang::Zh => "zh",
        Lang::ZhTw => "zh-tw",
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
        Vendor::Aliyun
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
        self.get_batch_translate()
            .source_language(lang_code(req.source))
            .target_language(lang_code(req.target))
            .source_texts(req.queries)
            .scene(&self.scene)
            .build()
            .send()
            .await
    }
}
