//! 语种
//!
//! 统一使用[`Lang`]表示语种，各厂商模块自己负责转换成对应的语种代码

use crate::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Auto,
    Zh,
    /// 繁体中文
    ZhTw,
    En,
    Ja,
    Ko,
    Fr,
    De,
    Es,
    Ru,
    Pt,
    It,
    Ar,
    Th,
    Vi,
}

impl Lang {
    pub const ALL: [Lang; 15] = [
        Lang::Auto,
        Lang::Zh,
        Lang::ZhTw,
        Lang::En,
        Lang::Ja,
        Lang::Ko,
        Lang::Fr,
        Lang::De,
        Lang::Es,
        Lang::Ru,
        Lang::Pt,
        Lang::It,
        Lang::Ar,
        Lang::Th,
        Lang::Vi,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Auto => "auto",
            Lang::Zh => "zh",
            Lang::ZhTw => "zh-TW",
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

    pub fn name(self) -> &'static str {
        match self {
            Lang::Auto => "自动检测",
            Lang::Zh => "中文",
            Lang::ZhTw => "繁体中文",
            Lang::En => "英语",
            Lang::Ja => "日语",
            Lang::Ko => "韩语",
            Lang::Fr => "法语",
            Lang::De => "德语",
            Lang::Es => "西班牙语",
            Lang::Ru => "俄语",
            Lang::Pt => "葡萄牙语",
            Lang::It => "意大利语",
            Lang::Ar => "阿拉伯语",
            Lang::Th => "泰语",
            Lang::Vi => "越南语",
        }
    }

    pub fn is_auto(self) -> bool {
        self == Lang::Auto
    }
}

impl Display for Lang {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = Error;

    /// 除了标准代码，也接受百度风格的写法（`jp`、`kor`、`cht`等）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Lang::Auto,
            "zh" | "zh-cn" | "zh-hans" => Lang::Zh,
            "zh-tw" | "zh-hant" | "zht" | "cht" => Lang::ZhTw,
            "en" => Lang::En,
            "ja" | "jp" => Lang::Ja,
            "ko" | "kor" => Lang::Ko,
            "fr" | "fra" => Lang::Fr,
            "de" => Lang::De,
            "es" | "spa" => Lang::Es,
            "ru" => Lang::Ru,
            "pt" => Lang::Pt,
            "it" => Lang::It,
            "ar" | "ara" => Lang::Ar,
            "th" => Lang::Th,
            "vi" | "vie" => Lang::Vi,
            _ => {
                return Err(Error::InvalidRequest(format!(
                    "unknown language code `{}`",
                    s.trim()
                )));
            }
        };
        Ok(lang)
    }
}
