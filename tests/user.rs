mod common;

use common::{ok_body, with_client, with_client_opts};
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DETAIL: &str = r#""info": {
    "user": {
        "real_name": "DNSPod",
        "user_type": "personal",
        "id": 1000,
        "email": "api@dnspod.com",
        "status": "enabled",
        "agent_pending": false,
        "balance": 0,
        "smsbalance": "10",
        "user_grade": ""
    },
    "agent": {"discount": 100, "points": "0", "balance_limit": "0", "users": 0}
}"#;

#[tokio::test]
async fn user_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/User.Detail"))
        .and(body_string("login_token=token&format=json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ok_body(DETAIL)))
        .expect(1)
        .mount(&server)
        .await;

    let info = with_client(&server, |c| c.user().detail())
        .await
        .unwrap()
        .value;

    assert_eq!(info.user.id, "1000");
    assert_eq!(info.user.email, "api@dnspod.com");
    assert_eq!(info.user.balance, Some(0));
    assert_eq!(info.user.smsbalance, Some(10));
    assert_eq!(info.user.user_grade, "");
    assert_eq!(info.agent.discount, "100");
}

#[tokio::test]
async fn user_detail_international_default_grade() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/User.Detail"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ok_body(DETAIL)))
        .expect(1)
        .mount(&server)
        .await;

    let info = with_client_opts(&server, true, |c| c.user().detail())
        .await
        .unwrap()
        .value;

    assert_eq!(info.user.user_grade, dnspod::user::INTERNATIONAL_DEFAULT_GRADE);
}

#[tokio::test]
async fn user_detail_login_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/User.Detail"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status": {"code": "-1", "message": "Login failed"}}"#,
        ))
        .mount(&server)
        .await;

    let err = with_client(&server, |c| c.user().detail())
        .await
        .unwrap_err();

    assert!(err.is_status());
    assert!(err.to_string().contains("-1"));
    assert!(err.to_string().contains("Login failed"));
}
