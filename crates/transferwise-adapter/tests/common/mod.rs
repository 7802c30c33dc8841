/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for transferwise-adapter tests

use serde_json::{Value, json};
use transferwise_adapter::{ClientOption, TransferwiseClient};
use wiremock::MockServer;

/// Token the mock server expects in `Authorization`
pub const TEST_TOKEN: &str = "test-token-0b1c";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer, extra: Vec<ClientOption>) -> TransferwiseClient {
    let mut options = vec![ClientOption::BaseUrl(server.uri())];
    options.extend(extra);
    TransferwiseClient::new(TEST_TOKEN, options).expect("client init")
}

#[allow(dead_code)]
pub fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
}

#[allow(dead_code)]
pub fn personal_profile_json(id: i64) -> Value {
    json!({
        "id": id,
        "type": "personal",
        "details": {
            "firstName": "Oliver",
            "lastName": "Wilson",
            "dateOfBirth": "1977-07-01",
            "phoneNumber": "+3725064992",
            "avatar": null,
            "occupation": null,
            "primaryAddress": 236532
        }
    })
}

#[allow(dead_code)]
pub fn business_profile_json(id: i64) -> Value {
    json!({
        "id": id,
        "type": "business",
        "details": {
            "name": "ABC Logistics Ltd",
            "registrationNumber": "12144939",
            "acn": null,
            "abn": null,
            "arbn": null,
            "companyType": "LIMITED",
            "companyRole": "OWNER",
            "descriptionOfBusiness": "Information and communication",
            "webpage": "https://abc-logistics.com",
            "primaryAddress": 240402
        }
    })
}

#[allow(dead_code)]
pub fn quote_response_json(id: i64, profile: i64) -> Value {
    json!({
        "id": id,
        "source": "EUR",
        "target": "GBP",
        "targetAmount": 600.0,
        "sourceAmount": 693.98,
        "type": "BALANCE_PAYOUT",
        "rate": 0.86,
        "createdTime": "2019-04-05T13:18:58Z",
        "createdByUserId": 12,
        "profile": profile,
        "rateType": "FIXED",
        "deliveryEstimate": "2019-04-08T12:30:00Z",
        "fee": 3.98,
        "allowedProfileTypes": ["PERSONAL", "BUSINESS"],
        "guaranteedTargetAmount": false,
        "ofSourceAmount": false
    })
}
