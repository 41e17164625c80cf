use httpmock::prelude::*;
use sellerguard::{ConfigProvider, GuardConfig, Lead, LeadStore, SupabaseLeads};

fn config_with_lead_store(server: &MockServer) -> GuardConfig {
    let toml_content = format!(
        r#"
[ai_service]
api_key = "test-key"
models = ["deepseek/deepseek-r1:free"]

[lead_store]
url = "{}"
key = "service-key"

[admin]
password = "hunter2"
"#,
        server.url("")
    );

    GuardConfig::from_toml_str(&toml_content).unwrap()
}

#[tokio::test]
async fn test_lead_submit_and_admin_readout_roundtrip() {
    let server = MockServer::start();

    let insert_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/leads")
            .header("apikey", "service-key")
            .header("Authorization", "Bearer service-key")
            .header("Prefer", "return=minimal")
            .json_body(serde_json::json!({
                "contact": "@seller_ivan",
                "problem_type": "Штраф за карточку",
                "amount": 15000
            }));
        then.status(201);
    });

    let select_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/leads")
            .query_param("select", "*")
            .header("apikey", "service-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": 7, "contact": "@seller_ivan", "problem_type": "Штраф за карточку", "amount": 15000}
            ]));
    });

    let config = config_with_lead_store(&server);
    let (url, key) = config.lead_store().unwrap();
    let store = SupabaseLeads::new(url, key);

    store
        .submit(&Lead::new("@seller_ivan", "Штраф за карточку", 15000))
        .await
        .unwrap();
    insert_mock.assert();

    let leads = store.fetch_all().await.unwrap();
    select_mock.assert();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].id, Some(7));
    assert_eq!(leads[0].contact, "@seller_ivan");

    assert_eq!(config.admin_password(), Some("hunter2"));
}

#[tokio::test]
async fn test_missing_lead_store_config_disables_the_feature() {
    let toml_content = r#"
[ai_service]
api_key = "test-key"
models = ["deepseek/deepseek-r1:free"]
"#;

    let config = GuardConfig::from_toml_str(toml_content).unwrap();
    assert!(config.lead_store().is_none());
    assert!(config.admin_password().is_none());
}
