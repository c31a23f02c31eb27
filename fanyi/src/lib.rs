#![doc = include_str!("../README.md")]

pub mod config;
pub mod credentials;
mod error;
pub use error::{Error, ErrorKind};
pub(crate) mod http;
mod lang;
pub use lang::Lang;
mod provider;
pub use provider::Provider;
mod request;
pub use request::{BatchRequest, TranslationRequest};
mod translator;
pub use translator::{BatchTranslator, Translator, Vendor};

#[cfg(feature = "aliyun")]
pub mod aliyun;
#[cfg(feature = "baidu")]
pub mod baidu;
#[cfg(feature = "niutrans")]
pub mod niutrans;
#[cfg(feature = "tencent")]
pub mod tencent;
#[cfg(feature = "volc")]
pub mod volc;
