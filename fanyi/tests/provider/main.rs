use fanyi::config::{FileConfig, VendorConfig};
use fanyi::{ErrorKind, Lang, Provider, Translator, Vendor};
use serde_json::json;
use std::collections::HashMap;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn missing_env_variable() {
    let vars: HashMap<&str, &str> = HashMap::from([("VOLC_ACCESS_KEY_ID", "AK")]);
    let e = VendorConfig::from_lookup(Vendor::Volc, |k| vars.get(k).map(|v| v.to_string()))
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Configuration);
    assert!(e.to_string().contains("VOLC_ACCESS_KEY_SECRET"));
}

#[cfg(feature = "baidu")]
#[tokio::test]
async fn provider_from_toml() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "from": "en",
            "to": "zh",
            "trans_result": [
                { "src": "first line", "dst": "第一行" },
                { "src": "second line", "dst": "第二行" }
            ]
        })))
        .mount(&server)
        .await;

    let conf = FileConfig::from_toml_str(&format!(
        r#"
        vendor = "baidu"

        [baidu]
        app_id = "2015063000000001"
        app_key = "12345678"
        url = "{}/api/trans/vip/translate"
        timeout_secs = 5
        "#,
        server.uri()
    ))
    .unwrap();
    let vendor = conf.vendor.unwrap();
    let provider = Provider::new(conf.vendor_config(vendor).unwrap()).unwrap();
    assert_eq!(provider.vendor(), Vendor::Baidu);
    assert_eq!(provider.qps(), 10);
    assert!(provider.as_batch().is_none());

    let res = provider
        .translate("first line\nsecond line", Lang::En, Lang::Zh)
        .await
        .unwrap();
    assert_eq!(res, "第一行\n第二行");
}

#[cfg(feature = "volc")]
#[tokio::test]
async fn batch_through_provider() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "TranslationList": [{ "Translation": "甲" }, { "Translation": "乙" }, { "Translation": "丙" }]
        })))
        .mount(&server)
        .await;

    let provider = Provider::new(
        VendorConfig::from_lookup(Vendor::Volc, |k| match k {
            "VOLC_ACCESS_KEY_ID" => Some("AK".to_owned()),
            "VOLC_ACCESS_KEY_SECRET" => Some("SK".to_owned()),
            "VOLC_ENDPOINT" => Some(server.uri()),
            _ => None,
        })
        .unwrap(),
    )
    .unwrap();

    let res = provider
        .as_batch()
        .unwrap()
        .translate_batch(&["a", "b", "c"], Lang::Auto, Lang::En)
        .await
        .unwrap();
    assert_eq!(res, ["甲", "乙", "丙"]);
}
