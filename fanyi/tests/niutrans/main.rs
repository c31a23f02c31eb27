#![cfg(feature = "niutrans")]

use fanyi::config::FileConfig;
use fanyi::niutrans::Client;
use fanyi::{ErrorKind, Lang, Translator};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Client {
    Client::builder()
        .api_key("nk-test")
        .url(format!("{}/NiuTransServer/translation", server.uri()))
        .batch_url(format!("{}/NiuTransServer/translationArray", server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn translate_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/NiuTransServer/translation"))
        .and(query_param("from", "auto"))
        .and(query_param("to", "zh"))
        .and(query_param("apikey", "nk-test"))
        .and(query_param("src_text", "Hello world"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "from": "en",
            "to": "zh",
            "tgt_text": "你好世界"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let res = client(&server)
        .translate("Hello world", Lang::Auto, Lang::Zh)
        .await
        .unwrap();
    assert_eq!(res, "你好世界");
}

#[tokio::test]
async fn translation_array() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/NiuTransServer/translationArray"))
        .and(body_json(json!({
            "from": "en",
            "to": "zh",
            "apikey": "nk-test",
            "src_text": ["Allright", "Yes", "Good"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "from": "en",
            "to": "zh",
            "tgt_text": [{ "tgt": "好吧" }, { "tgt": "是的" }, { "tgt": "好" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let res = client
        .as_batch()
        .unwrap()
        .translate_batch(&["Allright", "Yes", "Good"], Lang::En, Lang::Zh)
        .await
        .unwrap();
    assert_eq!(res, ["好吧", "是的", "好"]);
}

#[tokio::test]
async fn error_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "from": "en",
            "to": "zh",
            "error_code": "13001",
            "error_msg": "apikey is empty",
            "src_text": "Hello world"
        })))
        .mount(&server)
        .await;

    let e = client(&server)
        .translate("Hello world", Lang::Auto, Lang::Zh)
        .await
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Provider);
}

#[tokio::test]
async fn missing_tgt_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "from": "en", "to": "zh" })))
        .mount(&server)
        .await;

    let e = client(&server)
        .translate("Hello world", Lang::Auto, Lang::Zh)
        .await
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn transport_error_hides_api_key() {
    let client = Client::builder()
        .api_key("nk-super-secret")
        .url("http://127.0.0.1:1/NiuTransServer/translation")
        .build()
        .unwrap();
    let e = client
        .translate("Hello", Lang::Auto, Lang::Zh)
        .await
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Transport);
    assert!(!e.to_string().contains("nk-super-secret"));
    assert!(!format!("{e:?}").contains("nk-super-secret"));
}

#[tokio::test]
#[ignore]
async fn translate_live() {
    let conf = FileConfig::from_file("tests/niutrans/config.toml").unwrap();
    let client = Client::from_config(conf.niutrans.unwrap()).unwrap();
    let res = client.translate("Hello world", Lang::Auto, Lang::Zh).await;
    match res {
        Ok(s) => println!("[success] res: {s}"),
        Err(e) => println!("[error] {e:#?}"),
    }
}
