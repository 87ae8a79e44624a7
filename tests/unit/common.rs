use mockito::{Matcher, Mock, Server};
use std::sync::Arc;
use vk_client::config::{Config, Credentials, RestApiConfig};

pub const USER_ID: i64 = 66748;

pub fn config_for(server: &Server, credentials: Credentials) -> Arc<Config> {
    Arc::new(Config {
        credentials,
        rest_api: RestApiConfig {
            base_url: server.url(),
            oauth_url: server.url(),
            api_version: "5.131".to_string(),
            timeout: 5,
        },
    })
}

pub fn direct_credentials() -> Credentials {
    Credentials {
        access_token: Some("token".to_string()),
        user_id: Some(USER_ID.to_string()),
        ..Credentials::default()
    }
}

pub fn post_json(id: i64, count: i64, user_likes: i64, can_like: bool) -> String {
    format!(
        r#"{{"id": {id}, "owner_id": {USER_ID}, "from_id": {USER_ID}, "date": 1715680800, "text": "post {id}", "likes": {{"count": {count}, "user_likes": {user_likes}, "can_like": {}, "can_publish": 1}}}}"#,
        u8::from(can_like)
    )
}

pub async fn mock_wall(server: &mut Server, posts: &[String]) -> Mock {
    server
        .mock("POST", "/wall.get")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("access_token".into(), "token".into()),
            Matcher::UrlEncoded("owner_id".into(), USER_ID.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"response": {{"count": {}, "items": [{}]}}}}"#,
            posts.len(),
            posts.join(",")
        ))
        .create_async()
        .await
}
