use super::*;

fn test_client(base_url: &str) -> WindsorClient {
    WindsorClient::with_base_url(30, "adsdash-test", base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_url_constructs_query_string() {
    let client = test_client("https://connectors.windsor.ai/all");
    let url = client.build_url("test-key", Domain::Dayparting, DateRange::Last7Days);
    assert_eq!(
        url.as_str(),
        "https://connectors.windsor.ai/all?api_key=test-key&date_preset=last_7d&fields=date%2Cclicks%2Cconversions%2Cspend"
    );
}

#[test]
fn build_url_uses_domain_field_list() {
    let client = test_client("https://connectors.windsor.ai/all");
    let url = client.build_url("k", Domain::Geo, DateRange::LastMonth);
    let fields = url
        .query_pairs()
        .find(|(k, _)| k == "fields")
        .map(|(_, v)| v.into_owned());
    assert_eq!(fields.as_deref(), Some(Domain::Geo.fields()));
    assert!(url.as_str().contains("date_preset=last_month"));
}

#[test]
fn build_url_encodes_special_characters_in_key() {
    let client = test_client("https://connectors.windsor.ai/all");
    let url = client.build_url("a&b=c", Domain::Audience, DateRange::Last30Days);
    assert!(
        url.as_str().contains("api_key=a%26b%3Dc"),
        "api key should be percent-encoded: {url}"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = WindsorClient::with_base_url(30, "adsdash-test", "not a url");
    assert!(matches!(result, Err(WindsorError::InvalidBaseUrl { .. })));
}

#[tokio::test]
async fn blank_credential_short_circuits() {
    let client = test_client("http://127.0.0.1:9/all");
    let rows = client
        .fetch_rows(Domain::Performance, Some("   "), DateRange::Last30Days)
        .await
        .expect("blank credential is not an error");
    assert!(rows.is_empty());

    let rows = client
        .fetch_rows(Domain::Performance, None, DateRange::Last30Days)
        .await
        .expect("missing credential is not an error");
    assert!(rows.is_empty());
}

#[test]
fn new_targets_default_endpoint() {
    let client = WindsorClient::new(30).expect("client construction should not fail");
    let url = client.build_url("k", Domain::Funnel, DateRange::ThisMonth);
    assert!(url.as_str().starts_with(DEFAULT_BASE_URL));
    assert!(url.as_str().contains("conversion_value"));
}
