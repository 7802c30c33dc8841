/*
[INPUT]:  Mock profile responses
[OUTPUT]: Test results for profile endpoints
[POS]:    Integration tests - profiles
[UPDATE]: When profile endpoints or shapes change
*/

mod common;

use common::{bearer, business_profile_json, client_for, personal_profile_json, setup_mock_server};
use serde_json::json;
use tokio_test::assert_ok;
use transferwise_adapter::{
    BusinessProfileRequest, CalendarDate, CompanyRole, CompanyType, PersonalProfileRequest,
    ProfileType, TransferwiseError,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn personal_request() -> PersonalProfileRequest {
    PersonalProfileRequest {
        first_name: "Test".to_string(),
        last_name: "Person".to_string(),
        date_of_birth: CalendarDate::from_ymd(1977, 12, 18).expect("valid date"),
        phone_number: Some("+37211223344".to_string()),
    }
}

fn business_request() -> BusinessProfileRequest {
    BusinessProfileRequest {
        name: "Test company Ltd".to_string(),
        registration_number: "01234567".to_string(),
        acn: None,
        abn: None,
        arbn: None,
        company_type: CompanyType::PrivateLimitedCompany,
        company_role: CompanyRole::Director,
        description: "Software development".to_string(),
        webpage: "www.example.com".to_string(),
    }
}

#[tokio::test]
async fn test_list_profiles() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/profiles"))
        .and(header("authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            personal_profile_json(1),
            business_profile_json(2)
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, vec![]);
    let profiles = assert_ok!(client.profiles().await);

    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].profile_type(), ProfileType::Personal);
    assert!(profiles[0].as_business().is_none());
    assert_eq!(
        profiles[0].as_person().map(|p| p.details.first_name.as_str()),
        Some("Oliver")
    );
    assert_eq!(profiles[1].profile_type(), ProfileType::Business);
    assert!(profiles[1].as_person().is_none());
    assert_eq!(profiles[1].id(), Some(2));
}

#[tokio::test]
async fn test_get_profile_joins_id_into_path() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/profiles/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(personal_profile_json(42)))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server, vec![]);
    let profile = assert_ok!(client.profile(42).await);
    assert_eq!(profile.id(), Some(42));

    let person = assert_ok!(client.person(42).await);
    assert_eq!(person.id, Some(42));
    assert_eq!(person.details.date_of_birth, CalendarDate::from_ymd(1977, 7, 1));
}

#[tokio::test]
async fn test_get_business_rejects_personal_profile() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/profiles/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(personal_profile_json(42)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, vec![]);
    match client.business(42).await {
        Err(TransferwiseError::ProfileTypeMismatch { expected, actual }) => {
            assert_eq!(expected, ProfileType::Business);
            assert_eq!(actual, ProfileType::Personal);
        }
        other => panic!("Expected type mismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_personal_profile() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v1/profiles"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "type": "personal",
            "details": {
                "firstName": "Test",
                "lastName": "Person",
                "dateOfBirth": "1977-12-18",
                "phoneNumber": "+37211223344"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(personal_profile_json(101)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, vec![]);
    let person = assert_ok!(client.create_personal_profile(personal_request()).await);
    assert_eq!(person.id, Some(101));
}

#[tokio::test]
async fn test_create_business_profile() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v1/profiles"))
        .and(body_json(json!({
            "type": "business",
            "details": {
                "name": "Test company Ltd",
                "registrationNumber": "01234567",
                "companyType": "PRIVATE_LIMITED_COMPANY",
                "companyRole": "DIRECTOR",
                "descriptionOfBusiness": "Software development",
                "webpage": "www.example.com"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(business_profile_json(202)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, vec![]);
    let business = assert_ok!(client.create_business_profile(business_request()).await);
    assert_eq!(business.id, Some(202));
    assert_eq!(business.details.name, "ABC Logistics Ltd");
}

#[tokio::test]
async fn test_create_personal_profile_mismatch_after_call() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(business_profile_json(3)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, vec![]);
    let err = client
        .create_personal_profile(personal_request())
        .await
        .unwrap_err();
    assert!(matches!(err, TransferwiseError::ProfileTypeMismatch { .. }), "{err:?}");
}

#[tokio::test]
async fn test_update_profile_uses_put() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(personal_profile_json(7)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, vec![]);
    let person = assert_ok!(client.update_personal_profile(personal_request()).await);
    assert_eq!(person.id, Some(7));
}

#[tokio::test]
async fn test_update_business_profile() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/v1/profiles"))
        .and(body_json(json!({
            "type": "business",
            "details": {
                "name": "Test company Ltd",
                "registrationNumber": "01234567",
                "companyType": "PRIVATE_LIMITED_COMPANY",
                "companyRole": "DIRECTOR",
                "descriptionOfBusiness": "Software development",
                "webpage": "www.example.com"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(business_profile_json(8)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, vec![]);
    let profile = assert_ok!(client.update_profile(business_request()).await);
    assert!(profile.is_business());
    let business = assert_ok!(profile.try_into_business());
    assert_eq!(business.id, Some(8));
}

#[tokio::test]
async fn test_update_business_profile_returns_business() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(business_profile_json(9)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, vec![]);
    let business = assert_ok!(client.update_business_profile(business_request()).await);
    assert_eq!(business.id, Some(9));
    assert_eq!(business.details.company_type, Some(CompanyType::Limited));
}

#[tokio::test]
async fn test_create_business_profile_mismatch_after_call() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(personal_profile_json(4)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, vec![]);
    match client.create_business_profile(business_request()).await {
        Err(TransferwiseError::ProfileTypeMismatch { expected, actual }) => {
            assert_eq!(expected, ProfileType::Business);
            assert_eq!(actual, ProfileType::Personal);
        }
        other => panic!("Expected type mismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_personal_profile_mismatch_after_call() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(business_profile_json(5)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, vec![]);
    match client.update_personal_profile(personal_request()).await {
        Err(TransferwiseError::ProfileTypeMismatch { expected, actual }) => {
            assert_eq!(expected, ProfileType::Personal);
            assert_eq!(actual, ProfileType::Business);
        }
        other => panic!("Expected type mismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_business_profile_mismatch_after_call() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(personal_profile_json(6)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, vec![]);
    match client.update_business_profile(business_request()).await {
        Err(TransferwiseError::ProfileTypeMismatch { expected, actual }) => {
            assert_eq!(expected, ProfileType::Business);
            assert_eq!(actual, ProfileType::Personal);
        }
        other => panic!("Expected type mismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_profiles_tolerates_unlisted_values() {
    let server = setup_mock_server().await;
    let mut cooperative = business_profile_json(11);
    cooperative["details"]["companyType"] = json!("COOPERATIVE");
    cooperative["details"]["companyRole"] = json!("SHAREHOLDER");
    let mut team = personal_profile_json(12);
    team["type"] = json!("team");

    Mock::given(method("GET"))
        .and(path("/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            personal_profile_json(10),
            cooperative,
            team
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, vec![]);
    let profiles = assert_ok!(client.profiles().await);
    assert_eq!(profiles.len(), 3);

    let business = profiles[1].as_business().expect("business view");
    assert_eq!(business.id, Some(11));
    assert_eq!(business.details.company_type, Some(CompanyType::Unknown));
    assert_eq!(business.details.company_role, Some(CompanyRole::Unknown));

    assert_eq!(profiles[2].profile_type(), ProfileType::Unknown);
    assert!(profiles[2].as_person().is_none());
    assert!(profiles[2].as_business().is_none());
}
