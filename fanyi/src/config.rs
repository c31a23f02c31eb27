//! 各厂商的配置
//!
//! 配置可以从环境变量加载（[`VendorConfig::from_env`]），也可以从toml文件加载（[`FileConfig`]），
//! toml中每个厂商一个table：
//!
//! ```toml
//! vendor = "baidu"
//!
//! [baidu]
//! app_id = "2015063000000001"
//! app_key = "12345678"
//! qps = 10
//! ```
//!
//! 加载后的配置按值传入[`Provider::new`](crate::Provider::new)，不存在全局状态。

use crate::credentials::Secret;
use crate::{Error, Vendor};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

fn default_aliyun_endpoint() -> String {
    "mt.aliyuncs.com".to_owned()
}
fn default_aliyun_scene() -> String {
    "general".to_owned()
}
fn default_aliyun_qps() -> u32 {
    50
}

fn default_baidu_url() -> String {
    "http://api.fanyi.baidu.com/api/trans/vip/translate".to_owned()
}
fn default_baidu_qps() -> u32 {
    10
}

fn default_tencent_endpoint() -> String {
    "tmt.tencentcloudapi.com".to_owned()
}
fn default_tencent_region() -> String {
    "ap-guangzhou".to_owned()
}
fn default_tencent_qps() -> u32 {
    5
}

fn default_volc_endpoint() -> String {
    "translate.volcengineapi.com".to_owned()
}
fn default_volc_region() -> String {
    "cn-north-1".to_owned()
}
fn default_volc_qps() -> u32 {
    10
}

fn default_niutrans_url() -> String {
    "http://api.niutrans.com/NiuTransServer/translation".to_owned()
}
fn default_niutrans_batch_url() -> String {
    "http://api.niutrans.com/NiuTransServer/translationArray".to_owned()
}
fn default_niutrans_qps() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct AliyunConfig {
    pub access_key_id: String,
    pub access_key_secret: Secret,
    #[serde(default = "default_aliyun_endpoint")]
    pub endpoint: String,
    /// `general`走通用版，其它场景（如`social`、`title`）走专业版
    #[serde(default = "default_aliyun_scene")]
    pub scene: String,
    #[serde(default = "default_aliyun_qps")]
    pub qps: u32,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BaiduConfig {
    pub app_id: String,
    pub app_key: Secret,
    #[serde(default = "default_baidu_url")]
    pub url: String,
    #[serde(default = "default_baidu_qps")]
    pub qps: u32,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TencentConfig {
    pub secret_id: String,
    pub secret_key: Secret,
    #[serde(default = "default_tencent_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_tencent_region")]
    pub region: String,
    #[serde(default = "default_tencent_qps")]
    pub qps: u32,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VolcConfig {
    pub access_key_id: String,
    pub access_key_secret: Secret,
    #[serde(default = "default_volc_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_volc_region")]
    pub region: String,
    #[serde(default = "default_volc_qps")]
    pub qps: u32,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NiuTransConfig {
    pub api_key: Secret,
    #[serde(default = "default_niutrans_url")]
    pub url: String,
    #[serde(default = "default_niutrans_batch_url")]
    pub batch_url: String,
    #[serde(default = "default_niutrans_qps")]
    pub qps: u32,
    pub timeout_secs: Option<u64>,
}

/// 选定的厂商及其配置
#[derive(Debug, Clone)]
pub enum VendorConfig {
    Aliyun(AliyunConfig),
    Baidu(BaiduConfig),
    Tencent(TencentConfig),
    Volc(VolcConfig),
    NiuTrans(NiuTransConfig),
}

impl VendorConfig {
    pub fn vendor(&self) -> Vendor {
        match self {
            VendorConfig::Aliyun(_) => Vendor::Aliyun,
            VendorConfig::Baidu(_) => Vendor::Baidu,
            VendorConfig::Tencent(_) => Vendor::Tencent,
            VendorConfig::Volc(_) => Vendor::Volc,
            VendorConfig::NiuTrans(_) => Vendor::NiuTrans,
        }
    }

    /// 只读取所选厂商的环境变量，缺少必需的变量时返回`Configuration`错误
    pub fn from_env(vendor: Vendor) -> Result<Self, Error> {
        Self::from_lookup(vendor, |k| std::env::var(k).ok())
    }

    pub fn from_lookup(
        vendor: Vendor,
        get: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Error> {
        let env = Env { get: &get };
        let timeout_secs = env.parse("FANYI_TIMEOUT_SECS")?;
        let config = match vendor {
            Vendor::Aliyun => VendorConfig::Aliyun(AliyunConfig {
                access_key_id: env.required("ALIYUN_ACCESS_KEY_ID")?,
                access_key_secret: env.required("ALIYUN_ACCESS_KEY_SECRET")?.into(),
                endpoint: env.or("ALIYUN_ENDPOINT", default_aliyun_endpoint),
                scene: env.or("ALIYUN_SCENE", default_aliyun_scene),
                qps: env.parse("ALIYUN_QPS")?.unwrap_or_else(default_aliyun_qps),
                timeout_secs,
            }),
            Vendor::Baidu => VendorConfig::Baidu(BaiduConfig {
                app_id: env.required("BAIDU_APP_ID")?,
                app_key: env.required("BAIDU_APP_KEY")?.into(),
                url: env.or("BAIDU_URL", default_baidu_url),
                qps: env.parse("BAIDU_QPS")?.unwrap_or_else(default_baidu_qps),
                timeout_secs,
            }),
            Vendor::Tencent => VendorConfig::Tencent(TencentConfig {
                secret_id: env.required("TENCENT_SECRET_ID")?,
                secret_key: env.required("TENCENT_SECRET_KEY")?.into(),
                endpoint: env.or("TENCENT_ENDPOINT", default_tencent_endpoint),
                region: env.or("TENCENT_REGION", default_tencent_region),
                qps: env.parse("TENCENT_QPS")?.unwrap_or_else(default_tencent_qps),
                timeout_secs,
            }),
            Vendor::Volc => VendorConfig::Volc(VolcConfig {
                access_key_id: env.required("VOLC_ACCESS_KEY_ID")?,
                access_key_secret: env.required("VOLC_ACCESS_KEY_SECRET")?.into(),
                endpoint: env.or("VOLC_ENDPOINT", default_volc_endpoint),
                region: env.or("VOLC_REGION", default_volc_region),
                qps: env.parse("VOLC_QPS")?.unwrap_or_else(default_volc_qps),
                timeout_secs,
            }),
            Vendor::NiuTrans => VendorConfig::NiuTrans(NiuTransConfig {
                api_key: env.required("XIAONIU_KEY")?.into(),
                url: env.or("XIAONIU_URL", default_niutrans_url),
                batch_url: env.or("XIAONIU_BATCH_URL", default_niutrans_batch_url),
                qps: env.parse("XIAONIU_QPS")?.unwrap_or_else(default_niutrans_qps),
                timeout_secs,
            }),
        };
        Ok(config)
    }
}

struct Env<'a> {
    get: &'a dyn Fn(&str) -> Option<String>,
}

impl Env<'_> {
    fn get(&self, name: &str) -> Option<String> {
        (self.get)(name).filter(|v| !v.trim().is_empty())
    }

    fn required(&self, name: &str) -> Result<String, Error> {
        self.get(name).ok_or_else(|| {
            Error::Configuration(format!("environment variable `{name}` is not set"))
        })
    }

    fn or(&self, name: &str, default: fn() -> String) -> String {
        self.get(name).unwrap_or_else(default)
    }

    fn parse<T: FromStr>(&self, name: &str) -> Result<Option<T>, Error> {
        self.get(name)
            .map(|v| {
                v.trim().parse::<T>().map_err(|_| {
                    Error::Configuration(format!("environment variable `{name}` is invalid: {v}"))
                })
            })
            .transpose()
    }
}

/// toml配置文件
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// 默认使用的厂商
    pub vendor: Option<Vendor>,
    pub aliyun: Option<AliyunConfig>,
    pub baidu: Option<BaiduConfig>,
    pub tencent: Option<TencentConfig>,
    pub volc: Option<VolcConfig>,
    #[serde(alias = "xiaoniu")]
    pub niutrans: Option<NiuTransConfig>,
}

impl FileConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        toml::from_str(s).map_err(|e| Error::Configuration(format!("parse config error: {e}")))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("read config file {} error: {e}", path.display()))
        })?;
        Self::from_toml_str(&s)
    }

    pub fn vendor_config(&self, vendor: Vendor) -> Result<VendorConfig, Error> {
        let config = match vendor {
            Vendor::Aliyun => self.aliyun.clone().map(VendorConfig::Aliyun),
            Vendor::Baidu => self.baidu.clone().map(VendorConfig::Baidu),
            Vendor::Tencent => self.tencent.clone().map(VendorConfig::Tencent),
            Vendor::Volc => self.volc.clone().map(VendorConfig::Volc),
            Vendor::NiuTrans => self.niutrans.clone().map(VendorConfig::NiuTrans),
        };
        config.ok_or_else(|| Error::Configuration(format!("missing [{vendor}] table in config")))
    }
}

pub(crate) fn timeout(secs: Option<u64>) -> Option<Duration> {
    secs.map(Duration::from_secs)
}
