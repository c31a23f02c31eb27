use md5::{Digest, Md5};

/// `sign = md5(appid + q + salt + 密钥)`，顺序不能变，否则百度返回54001签名错误
///
/// `q`使用原文，不做urlencode
pub fn sign(app_id: &str, query: &str, salt: &str, app_key: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(app_id.as_bytes());
    hasher.update(query.as_bytes());
    hasher.update(salt.as_bytes());
    hasher.update(app_key.as_bytes());
    hex::encode(hasher.finalize())
}

/// 每次请求重新生成，百度允许字母数字组成的salt
pub fn generate_salt() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
