use crate::config::VendorConfig;
use crate::{BatchTranslator, Error, Lang, Translator, Vendor};

/// 按配置选出的厂商客户端
///
/// ```no_run
/// # async fn run() -> Result<(), fanyi::Error> {
/// use fanyi::config::VendorConfig;
/// use fanyi::{Lang, Provider, Translator, Vendor};
///
/// let provider = Provider::new(VendorConfig::from_env(Vendor::Baidu)?)?;
/// let text = provider.translate("Hello", Lang::Auto, Lang::Zh).await?;
/// # Ok(())
/// # }
/// ```
pub enum Provider {
    #[cfg(feature = "aliyun")]
    Aliyun(crate::aliyun::Client),
    #[cfg(feature = "baidu")]
    Baidu(crate::baidu::Client),
    #[cfg(feature = "tencent")]
    Tencent(crate::tencent::Client),
    #[cfg(feature = "volc")]
    Volc(crate::volc::Client),
    #[cfg(feature = "niutrans")]
    NiuTrans(crate::niutrans::Client),
}

impl Provider {
    /// 厂商没有编译进来时返回`Configuration`错误
    pub fn new(config: VendorConfig) -> Result<Self, Error> {
        let provider = match config {
            #[cfg(feature = "aliyun")]
            VendorConfig::Aliyun(c) => Provider::Aliyun(crate::aliyun::Client::from_config(c)?),
            #[cfg(feature = "baidu")]
            VendorConfig::Baidu(c) => Provider::Baidu(crate::baidu::Client::from_config(c)?),
            #[cfg(feature = "tencent")]
            VendorConfig::Tencent(c) => Provider::Tencent(crate::tencent::Client::from_config(c)?),
            #[cfg(feature = "volc")]
            VendorConfig::Volc(c) => Provider::Volc(crate::volc::Client::from_config(c)?),
            #[cfg(feature = "niutrans")]
            VendorConfig::NiuTrans(c) => {
                Provider::NiuTrans(crate::niutrans::Client::from_config(c)?)
            }
            #[allow(unreachable_patterns)]
            other => {
                let vendor = other.vendor();
                return Err(Error::Configuration(format!(
                    "vendor `{vendor}` is not enabled, enable the `{vendor}` feature"
                )));
            }
        };
        Ok(provider)
    }

    fn inner(&self) -> &dyn Translator {
        match *self {
            #[cfg(feature = "aliyun")]
            Provider::Aliyun(ref c) => c,
            #[cfg(feature = "baidu")]
            Provider::Baidu(ref c) => c,
            #[cfg(feature = "tencent")]
            Provider::Tencent(ref c) => c,
            #[cfg(feature = "volc")]
            Provider::Volc(ref c) => c,
            #[cfg(feature = "niutrans")]
            Provider::NiuTrans(ref c) => c,
        }
    }
}

#[async_trait::async_trait]
impl Translator for Provider {
    fn vendor(&self) -> Vendor {
        self.inner().vendor()
    }

    fn qps(&self) -> u32 {
        self.inner().qps()
    }

    async fn translate(&self, query: &str, source: Lang, target: Lang) -> Result<String, Error> {
        self.inner().translate(query, source, target).await
    }

    fn as_batch(&self) -> Option<&dyn BatchTranslator> {
        self.inner().as_batch()
    }
}
