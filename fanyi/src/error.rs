use crate::Vendor;
use reqwest::StatusCode;

/// 错误分类，调用方一般只需要按这个来决定怎么处理
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 网络错误、超时、或者没有厂商错误信息的非2xx响应
    Transport,
    /// 厂商在响应里返回的错误码
    Provider,
    /// 响应能收到，但缺少译文字段
    MalformedResponse,
    /// 凭证或配置有问题
    Configuration,
    /// 请求参数在本地校验不通过，没有发出请求
    InvalidRequest,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("reqwest error: {0}")]
    Transport(reqwest::Error),
    #[error("request api failed: {status}, body: {body}")]
    RequestAPIFailed { status: StatusCode, body: String },
    #[error("{vendor} api error: code: {code}, message: {message}")]
    Provider {
        vendor: Vendor,
        code: String,
        message: String,
    },
    #[error("{vendor} response missing `{key}`, raw response: {raw}")]
    MalformedResponse {
        vendor: Vendor,
        key: String,
        raw: String,
    },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport(_) | Error::RequestAPIFailed { .. } => ErrorKind::Transport,
            Error::Provider { .. } => ErrorKind::Provider,
            Error::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            Error::Configuration(_) => ErrorKind::Configuration,
            Error::InvalidRequest(_) => ErrorKind::InvalidRequest,
        }
    }

    pub(crate) fn malformed(vendor: Vendor, key: impl Into<String>, raw: &str) -> Self {
        Error::MalformedResponse {
            vendor,
            key: key.into(),
            raw: raw.to_owned(),
        }
    }

    pub(crate) fn provider(
        vendor: Vendor,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let (code, message) = (code.into(), message.into());
        tracing::warn!(%vendor, %code, %message, "vendor returned an error");
        Error::Provider {
            vendor,
            code,
            message,
        }
    }
}

// 小牛的apikey在query里，去掉url避免密钥出现在错误信息中
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e.without_url())
    }
}

// 签名、endpoint解析失败都来自本地配置
impl From<fanyi_common::Error> for Error {
    fn from(e: fanyi_common::Error) -> Self {
        Error::Configuration(e.to_string())
    }
}
