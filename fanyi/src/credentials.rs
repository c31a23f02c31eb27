//! Credentials shared by the vendor clients.
//!
//! Secrets are wrapped in [`Secret`] so that `Debug` output of configs and
//! clients never contains them.

use crate::{Error, Vendor};
use serde::Deserialize;
use std::fmt::{Debug, Formatter};

#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for Secret {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Secret {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// AccessKey对：阿里云、腾讯云（SecretId/SecretKey）、火山引擎都使用这种形式
#[derive(Clone, Debug)]
pub struct AccessKey {
    pub id: String,
    pub secret: Secret,
}

impl AccessKey {
    pub fn new(id: impl Into<String>, secret: impl Into<Secret>) -> Self {
        Self {
            id: id.into(),
            secret: secret.into(),
        }
    }

    pub(crate) fn validate(&self, vendor: Vendor) -> Result<(), Error> {
        require(vendor, "access key id", &self.id)?;
        require(vendor, "access key secret", self.secret.expose())
    }
}

pub(crate) fn require(vendor: Vendor, field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::Configuration(format!("{vendor}: {field} is empty")));
    }
    Ok(())
}
