#![cfg(feature = "volc")]

use fanyi::config::FileConfig;
use fanyi::credentials::AccessKey;
use fanyi::volc::Client;
use fanyi::{ErrorKind, Lang, Translator};
use serde_json::{Value, json};
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Client {
    Client::builder()
        .access_key(AccessKey::new("AKLTtest", "c2VjcmV0"))
        .endpoint(server.uri())
        .build()
        .unwrap()
}

fn success(translations: &[&str]) -> Value {
    let list: Vec<Value> = translations
        .iter()
        .map(|t| json!({ "Translation": t, "DetectedSourceLanguage": "en" }))
        .collect();
    json!({
        "TranslationList": list,
        "ResponseMetadata": {
            "RequestId": "20250310164240",
            "Action": "TranslateText",
            "Version": "2020-06-01",
            "Service": "translate",
            "Region": "cn-north-1"
        }
    })
}

#[tokio::test]
async fn auto_source_is_omitted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(query_param("Action", "TranslateText"))
        .and(query_param("Version", "2020-06-01"))
        .and(header_exists("Authorization"))
        .and(header_exists("X-Date"))
        .and(header_exists("X-Content-Sha256"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(&["你好"])))
        .expect(1)
        .mount(&server)
        .await;

    let res = client(&server)
        .translate("Hello", Lang::Auto, Lang::Zh)
        .await
        .unwrap();
    assert_eq!(res, "你好");

    let req = &server.received_requests().await.unwrap()[0];
    let body: Value = serde_json::from_slice(&req.body).unwrap();
    assert_eq!(body, json!({ "TargetLanguage": "zh", "TextList": ["Hello"] }));
    let auth = req.headers.get("Authorization").unwrap().to_str().unwrap();
    assert!(auth.starts_with("HMAC-SHA256 Credential=AKLTtest/"));
    assert!(auth.contains("/cn-north-1/translate/request"));
}

#[tokio::test]
async fn batch_with_source() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(&["甲", "乙"])))
        .mount(&server)
        .await;

    let client = client(&server);
    let res = client
        .as_batch()
        .unwrap()
        .translate_batch(&["a", "b"], Lang::En, Lang::ZhTw)
        .await
        .unwrap();
    assert_eq!(res, ["甲", "乙"]);

    let req = &server.received_requests().await.unwrap()[0];
    let body: Value = serde_json::from_slice(&req.body).unwrap();
    assert_eq!(body["SourceLanguage"], "en");
    assert_eq!(body["TargetLanguage"], "zh-Hant");
}

#[tokio::test]
async fn metadata_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "ResponseMetadata": {
                "RequestId": "r",
                "Action": "TranslateText",
                "Version": "2020-06-01",
                "Error": {
                    "CodeN": 100009,
                    "Code": "InvalidAccessKey",
                    "Message": "The request has invalid access key"
                }
            }
        })))
        .mount(&server)
        .await;

    let e = client(&server)
        .translate("Hello", Lang::Auto, Lang::Zh)
        .await
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Provider);
}

#[tokio::test]
async fn missing_translation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "TranslationList": [{ "DetectedSourceLanguage": "en" }]
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
async fn server_error_without_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let e = client(&server)
        .translate("Hello", Lang::Auto, Lang::Zh)
        .await
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Transport);
}

#[tokio::test]
#[ignore]
async fn translate_live() {
    let conf = FileConfig::from_file("tests/volc/config.toml").unwrap();
    let client = Client::from_config(conf.volc.unwrap()).unwrap();
    let res = client.translate("Hello world", Lang::Auto, Lang::Zh).await;
    match res {
        Ok(s) => println!("[success] res: {s}"),
        Err(e) => println!("[error] {e:#?}"),
    }
}
