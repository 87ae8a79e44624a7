use crate::common::{config_for, direct_credentials, USER_ID};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use vk_client::config::Credentials;
use vk_client::error::{AppError, AuthError};
use vk_client::harness::context::VkHarness;
use vk_client::session::interface::UserActor;
use vk_client::utils::logger::setup_logger;

fn oauth_credentials(access_token: Option<&str>, client_id: &str) -> Credentials {
    Credentials {
        access_token: access_token.map(String::from),
        user_id: None,
        client_id: Some(client_id.to_string()),
        secret: Some("s3cr3t".to_string()),
        code: Some("abc".to_string()),
    }
}

#[tokio::test]
async fn test_direct_pair_makes_no_oauth_call() {
    setup_logger();
    let mut server = Server::new_async().await;
    let oauth = server
        .mock("GET", "/access_token")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let harness = VkHarness::from_config(config_for(&server, direct_credentials()))
        .await
        .unwrap();

    assert_eq!(harness.actor(), &UserActor::new(USER_ID, "token"));
    oauth.assert_async().await;
}

#[tokio::test]
async fn test_empty_token_goes_through_code_flow() {
    setup_logger();
    let mut server = Server::new_async().await;
    let oauth = server
        .mock("GET", "/access_token")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("client_id".into(), "6121396".into()),
            Matcher::UrlEncoded("client_secret".into(), "s3cr3t".into()),
            Matcher::UrlEncoded("code".into(), "abc".into()),
            Matcher::UrlEncoded(
                "redirect_uri".into(),
                "https://oauth.vk.com/blank.html".into(),
            ),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token": "issued", "expires_in": 86400, "user_id": 66748}"#)
        .expect(1)
        .create_async()
        .await;

    let harness = VkHarness::from_config(config_for(
        &server,
        oauth_credentials(Some(""), "6121396"),
    ))
    .await
    .unwrap();

    assert_eq!(harness.actor(), &UserActor::new(USER_ID, "issued"));
    oauth.assert_async().await;
}

#[tokio::test]
async fn test_rejected_code_aborts_harness() {
    setup_logger();
    let mut server = Server::new_async().await;
    let oauth = server
        .mock("GET", "/access_token")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "invalid_grant", "error_description": "Code is invalid or expired."}"#)
        .create_async()
        .await;

    let result =
        VkHarness::from_config(config_for(&server, oauth_credentials(None, "6121396"))).await;

    assert!(matches!(
        result,
        Err(AppError::Auth(AuthError::Rejected { .. }))
    ));
    oauth.assert_async().await;
}

#[tokio::test]
async fn test_malformed_client_id_fails_without_request() {
    setup_logger();
    let mut server = Server::new_async().await;
    let oauth = server
        .mock("GET", "/access_token")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let result =
        VkHarness::from_config(config_for(&server, oauth_credentials(None, "six"))).await;

    assert!(matches!(
        result,
        Err(AppError::Auth(AuthError::InvalidClientId(_)))
    ));
    oauth.assert_async().await;
}
