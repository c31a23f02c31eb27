//! 百度通用文本翻译
//!
//! 文档：<https://api.fanyi.baidu.com/doc/21>
//!
//! 百度没有批量接口，[`Translator::as_batch`]返回`None`

mod sign;
pub use sign::{generate_salt, sign};

mod types_rs;
pub use types_rs::{TransResult, TranslateResponse};

use crate::config::{BaiduConfig, timeout};
use crate::credentials::{Secret, require};
use crate::http::{build_http_client, read_response};
use crate::{Error, Lang, TranslationRequest, Translator, Vendor};
use bon::bon;
use std::time::Duration;
use tracing::debug;
use types_rs::{TranslateForm, extract_translation};

pub const DEFAULT_URL: &str = "http://api.fanyi.baidu.com/api/trans/vip/translate";

pub struct Client {
    app_id: String,
    app_key: Secret,
    url: String,
    qps: u32,
    http_client: reqwest::Client,
}

#[bon]
impl Client {
    #[builder(on(String, into))]
    pub fn new(
        app_id: String,
        #[builder(into)] app_key: Secret,
        /// 完整的接口地址
        #[builder(default = DEFAULT_URL.to_owned())]
        url: String,
        #[builder(default = 10)] qps: u32,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        require(Vendor::Baidu, "app_id", &app_id)?;
        require(Vendor::Baidu, "app_key", app_key.expose())?;
        fanyi_common::helper::parse_endpoint(&url)?;

        Ok(Self {
            app_id,
            app_key,
            url,
            qps,
            http_client: build_http_client(timeout)?,
        })
    }
}

impl Client {
    pub fn from_config(config: BaiduConfig) -> Result<Self, Error> {
        Client::builder()
            .app_id(config.app_id)
            .app_key(config.app_key)
            .url(config.url)
            .qps(config.qps)
            .maybe_timeout(timeout(config.timeout_secs))
            .build()
    }

    pub async fn translate_text(&self, req: TranslationRequest<'_>) -> Result<String, Error> {
        let salt = generate_salt();
        let sign = sign(&self.app_id, req.query, &salt, self.app_key.expose());
        let form = TranslateForm {
            q: req.query,
            from: lang_code(req.source),
            to: lang_code(req.target),
            appid: &self.app_id,
            salt: &salt,
            sign: &sign,
        };

        debug!(vendor = %Vendor::Baidu, from = form.from, to = form.to, "sending request");
        let resp = self.http_client.post(&self.url).form(&form).send().await?;
        let (status, body) = read_response(resp).await?;
        extract_translation(status, &body)
    }
}

/// 百度的语种代码：<https://api.fanyi.baidu.com/doc/21>
pub fn lang_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Auto => "auto",
        Lang::Zh => "zh",
        Lang::ZhTw => "cht",
        Lang::En => "en",
        Lang::Ja => "jp",
        Lang::Ko => "kor",
        Lang::Fr => "fra",
        Lang::De => "de",
        Lang::Es => "spa",
        Lang::Ru => "ru",
        Lang::Pt => "pt",
        Lang::It => "it",
        Lang::Ar => "ara",
        Lang::Th => "th",
        Lang::Vi => "vie",
    }
}

#[async_trait::async_trait]
impl Translator for Client {
    fn vendor(&self) -> Vendor {
        Vendor::Baidu
    }

    fn qps(&self) -> u32 {
        self.qps
    }

    async fn translate(&self, query: &str, source: Lang, target: Lang) -> Result<String, Error> {
        let req = TranslationRequest::new(query, source, target)?;
        self.translate_text(req).await
    }
}
