use crate::{Error, Lang};
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Aliyun,
    Baidu,
    Tencent,
    Volc,
    #[serde(alias = "xiaoniu")]
    NiuTrans,
}

impl Vendor {
    pub const ALL: [Vendor; 5] = [
        Vendor::Aliyun,
        Vendor::Baidu,
        Vendor::Tencent,
        Vendor::Volc,
        Vendor::NiuTrans,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Vendor::Aliyun => "aliyun",
            Vendor::Baidu => "baidu",
            Vendor::Tencent => "tencent",
            Vendor::Volc => "volc",
            Vendor::NiuTrans => "niutrans",
        }
    }
}

impl Display for Vendor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vendor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aliyun" | "ali" => Ok(Vendor::Aliyun),
            "baidu" => Ok(Vendor::Baidu),
            "tencent" => Ok(Vendor::Tencent),
            "volc" | "volcano" | "volcengine" => Ok(Vendor::Volc),
            "niutrans" | "xiaoniu" => Ok(Vendor::NiuTrans),
            other => Err(Error::Configuration(format!("unknown vendor `{other}`"))),
        }
    }
}

/// Translation provider interface.
///
/// Every vendor client implements this; callers that only hold a `&dyn Translator`
/// (or a [`Provider`](crate::Provider)) never need the vendor type.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    fn vendor(&self) -> Vendor;

    /// QPS limit of the account. Only informational, calls are never throttled.
    fn qps(&self) -> u32;

    /// Translate `query`, issuing exactly one HTTP request.
    async fn translate(&self, query: &str, source: Lang, target: Lang) -> Result<String, Error>;

    /// Batch capability, `None` when the vendor has no batch api.
    fn as_batch(&self) -> Option<&dyn BatchTranslator> {
        None
    }
}

#[async_trait::async_trait]
pub trait BatchTranslator: Translator {
    /// `output[i]` is the translation of `queries[i]`.
    async fn translate_batch(
        &self,
        queries: &[&str],
        source: Lang,
        target: Lang,
    ) -> Result<Vec<String>, Error>;
}
