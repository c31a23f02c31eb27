#![cfg(feature = "baidu")]

use fanyi::baidu::{Client, sign};
use fanyi::config::FileConfig;
use fanyi::{ErrorKind, Lang, Translator, Vendor};
use serde_json::json;
use std::collections::HashMap;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PATH: &str = "/api/trans/vip/translate";

fn client(server: &MockServer) -> Client {
    Client::builder()
        .app_id("2015063000000001")
        .app_key("12345678")
        .url(format!("{}{PATH}", server.uri()))
        .build()
        .unwrap()
}

fn form_of(body: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(body).into_owned().collect()
}

#[tokio::test]
async fn translate_hello() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PATH))
        .and(body_string_contains("q=Hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "from": "en",
            "to": "zh",
            "trans_result": [{ "src": "Hello", "dst": "你好" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let res = client(&server)
        .translate("Hello", Lang::Auto, Lang::Zh)
        .await
        .unwrap();
    assert_eq!(res, "你好");

    let req = &server.received_requests().await.unwrap()[0];
    let form = form_of(&req.body);
    assert_eq!(form["appid"], "2015063000000001");
    assert_eq!(form["from"], "auto");
    assert_eq!(form["to"], "zh");
    assert_eq!(
        form["sign"],
        sign("2015063000000001", "Hello", &form["salt"], "12345678")
    );
}

#[tokio::test]
async fn salt_changes_between_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "from": "en",
            "to": "zh",
            "trans_result": [{ "src": "apple", "dst": "苹果" }]
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    client.translate("apple", Lang::En, Lang::Zh).await.unwrap();
    client.translate("apple", Lang::En, Lang::Zh).await.unwrap();

    let reqs = server.received_requests().await.unwrap();
    assert_eq!(reqs.len(), 2);
    let (a, b) = (form_of(&reqs[0].body), form_of(&reqs[1].body));
    assert_ne!(a["salt"], b["salt"]);
    assert_ne!(a["sign"], b["sign"]);
}

#[tokio::test]
async fn error_code_is_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error_code": "54001",
            "error_msg": "Invalid Sign"
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
async fn missing_trans_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "from": "en", "to": "zh" })))
        .mount(&server)
        .await;

    let e = client(&server)
        .translate("Hello", Lang::Auto, Lang::Zh)
        .await
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn connection_refused() {
    let client = Client::builder()
        .app_id("2015063000000001")
        .app_key("12345678")
        .url(format!("http://127.0.0.1:1{PATH}"))
        .build()
        .unwrap();
    let e = client
        .translate("Hello", Lang::Auto, Lang::Zh)
        .await
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn invalid_request_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    let e = client.translate("  ", Lang::Auto, Lang::Zh).await.unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidRequest);
    let e = client.translate("Hello", Lang::En, Lang::Auto).await.unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidRequest);
    assert!(client.as_batch().is_none());
}

#[tokio::test]
#[ignore]
async fn translate_live() {
    let conf = FileConfig::from_file("tests/baidu/config.toml").unwrap();
    let client = Client::from_config(conf.baidu.unwrap()).unwrap();
    assert_eq!(client.vendor(), Vendor::Baidu);

    let res = client
        .translate("test first line.\ntest second line.", Lang::Auto, Lang::Zh)
        .await;
    match res {
        Ok(s) => println!("[success] res:\n{s}"),
        Err(e) => println!("[error] {e:#?}"),
    }
}
