use crate::{Error, Lang};

/// 单条翻译请求，构造时完成校验，之后不可修改
#[derive(Debug, Clone, Copy)]
pub struct TranslationRequest<'a> {
    pub query: &'a str,
    pub source: Lang,
    pub target: Lang,
}

impl<'a> TranslationRequest<'a> {
    pub fn new(query: &'a str, source: Lang, target: Lang) -> Result<Self, Error> {
        check_target(target)?;
        check_query(query)?;
        Ok(Self {
            query,
            source,
            target,
        })
    }
}

/// 批量翻译请求，结果按`queries`的下标对齐
#[derive(Debug, Clone, Copy)]
pub struct BatchRequest<'a> {
    pub queries: &'a [&'a str],
    pub source: Lang,
    pub target: Lang,
}

impl<'a> BatchRequest<'a> {
    pub fn new(queries: &'a [&'a str], source: Lang, target: Lang) -> Result<Self, Error> {
        check_target(target)?;
        if queries.is_empty() {
            return Err(Error::InvalidRequest("batch is empty".to_owned()));
        }
        for (i, q) in queries.iter().enumerate() {
            check_query(q).map_err(|_| Error::InvalidRequest(format!("query #{i} is empty")))?;
        }
        Ok(Self {
            queries,
            source,
            target,
        })
    }
}

fn check_target(target: Lang) -> Result<(), Error> {
    if target.is_auto() {
        return Err(Error::InvalidRequest(
            "target language can not be `auto`".to_owned(),
        ));
    }
    Ok(())
}

fn check_query(query: &str) -> Result<(), Error> {
    if query.trim().is_empty() {
        return Err(Error::InvalidRequest("query is empty".to_owned()));
    }
    Ok(())
}
