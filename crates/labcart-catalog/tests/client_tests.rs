//! Directory client tests against a mock server.
#![cfg(feature = "http")]

use labcart_catalog::{CatalogError, LabDirectoryClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn lab_summary_json() -> serde_json::Value {
    serde_json::json!([{
        "_id": "lab-1",
        "name": "City Care Diagnostics",
        "address": {
            "street": "12 Hill Cart Road",
            "city": "Siliguri",
            "state": "West Bengal",
            "country": "India",
            "pincode": "734001"
        },
        "rating": 4.5,
        "distance": "1.2 km",
        "startingPrice": "₹299"
    }])
}

#[tokio::test]
async fn test_list_labs_sends_city_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/labs"))
        .and(query_param("city", "Siliguri"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lab_summary_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = LabDirectoryClient::new(format!("{}/", server.uri()));
    let labs = client.list_labs("Siliguri").await.unwrap();

    assert_eq!(labs.len(), 1);
    assert_eq!(labs[0].id, "lab-1");
}

#[tokio::test]
async fn test_get_lab_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/labs/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = LabDirectoryClient::new(server.uri());
    let err = client.get_lab("missing").await.unwrap_err();

    assert!(matches!(err, CatalogError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_get_lab_id_stays_in_one_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/labs/a%2Fb%3Fc"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = LabDirectoryClient::new(server.uri());
    let err = client.get_lab("a/b?c").await.unwrap_err();

    match err {
        CatalogError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/labs/a%2Fb%3Fc"));
        }
        other => panic!("unexpected error: {}", other),
    }
}
