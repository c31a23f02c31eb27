#![cfg(feature = "aliyun")]

use fanyi::aliyun::Client;
use fanyi::config::FileConfig;
use fanyi::credentials::AccessKey;
use fanyi::{Error, ErrorKind, Lang, Translator};
use serde_json::json;
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Client {
    Client::builder()
        .access_key(AccessKey::new("LTAI-test", "secret"))
        .endpoint(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn translate_general() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("x-acs-action", "TranslateGeneral"))
        .and(header("x-acs-version", "2018-10-12"))
        .and(header_exists("authorization"))
        .and(query_param("SourceText", "Hello"))
        .and(query_param("SourceLanguage", "auto"))
        .and(query_param("TargetLanguage", "zh"))
        .and(query_param("FormatType", "text"))
        .and(query_param("Scene", "general"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RequestId": "86C3A7F6-0FD6-4E8B-8A56-2DD1B4F8E5A2",
            "Data": { "WordCount": "5", "Translated": "你好" },
            "Code": "200"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let res = client(&server)
        .translate("Hello", Lang::Auto, Lang::Zh)
        .await
        .unwrap();
    assert_eq!(res, "你好");
}

#[tokio::test]
async fn professional_scene_uses_translate_action() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("x-acs-action", "Translate"))
        .and(query_param("Scene", "title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RequestId": "r",
            "Data": { "WordCount": "5", "Translated": "标题" },
            "Code": "200"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .access_key(AccessKey::new("LTAI-test", "secret"))
        .endpoint(server.uri())
        .scene("title")
        .build()
        .unwrap();
    let res = client.translate("Title", Lang::En, Lang::Zh).await.unwrap();
    assert_eq!(res, "标题");
}

#[tokio::test]
async fn batch_is_aligned_with_input() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("x-acs-action", "GetBatchTranslate"))
        .and(query_param("SourceText", r#"{"0":"a","1":"b","2":"c"}"#))
        .and(query_param("ApiType", "translate_standard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Code": 200,
            "RequestId": "r",
            "TranslatedList": [
                { "index": "1", "code": "200", "translated": "乙", "wordCount": "1" },
                { "index": "2", "code": "200", "translated": "丙", "wordCount": "1" },
                { "index": "0", "code": "200", "translated": "甲", "wordCount": "1" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let batch = client.as_batch().unwrap();
    let res = batch
        .translate_batch(&["a", "b", "c"], Lang::Auto, Lang::Zh)
        .await
        .unwrap();
    assert_eq!(res, ["甲", "乙", "丙"]);
}

#[tokio::test]
async fn gateway_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "RequestId": "r",
            "HostId": "mt.aliyuncs.com",
            "Code": "InvalidAccessKeyId.NotFound",
            "Message": "Specified access key is not found.",
            "Recommend": "https://api.aliyun.com/troubleshoot?q=InvalidAccessKeyId.NotFound"
        })))
        .mount(&server)
        .await;

    let e = client(&server)
        .translate("Hello", Lang::Auto, Lang::Zh)
        .await
        .unwrap_err();
    assert!(matches!(e, Error::Provider { ref code, .. } if code == "InvalidAccessKeyId.NotFound"));
}

#[tokio::test]
async fn missing_translated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RequestId": "r",
            "Data": { "WordCount": "5" },
            "Code": "200"
        })))
        .mount(&server)
        .await;

    let e = client(&server)
        .translate("Hello", Lang::Auto, Lang::Zh)
        .await
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn too_long_text_is_rejected_locally() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let text = "a".repeat(fanyi::aliyun::MAX_CHARS + 1);
    let e = client(&server)
        .translate(&text, Lang::Auto, Lang::Zh)
        .await
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidRequest);
}

#[tokio::test]
async fn detect_language() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("x-acs-action", "GetDetectLanguage"))
        .and(query_param("SourceText", "中文"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RequestId": "r",
            "DetectedLanguage": "zh",
            "LanguageProbabilities": "zh:1.0"
        })))
        .mount(&server)
        .await;

    assert_eq!(client(&server).detect_language("中文").await.unwrap(), "zh");
}

#[tokio::test]
#[ignore]
async fn translate_live() {
    let conf = FileConfig::from_file("tests/aliyun/config.toml").unwrap();
    let client = Client::from_config(conf.aliyun.unwrap()).unwrap();
    let res = client
        .translate("test first line.\ntest second line.", Lang::Auto, Lang::Zh)
        .await;
    match res {
        Ok(s) => println!("[success] res:\n{s}"),
        Err(e) => println!("[error] {e:#?}"),
    }

    let res = client.detect_language("中文").await;
    match res {
        Ok(s) => println!("[success] res: {s}"),
        Err(e) => println!("[error] {e:#?}"),
    }
}
