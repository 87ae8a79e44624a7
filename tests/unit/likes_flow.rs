use crate::common::{config_for, direct_credentials, mock_wall, post_json};
use mockito::{Matcher, Server};
use vk_client::harness::context::VkHarness;
use vk_client::harness::outcome::ScenarioError;
use vk_client::harness::runner::run_all;
use vk_client::utils::logger::setup_logger;

async fn harness(server: &Server) -> VkHarness {
    VkHarness::from_config(config_for(server, direct_credentials()))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_add_like_on_post_with_four_likes() {
    setup_logger();
    let mut server = Server::new_async().await;
    let wall = mock_wall(&mut server, &[post_json(12, 4, 0, true)]).await;
    let add = server
        .mock("POST", "/likes.add")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), "post".into()),
            Matcher::UrlEncoded("item_id".into(), "12".into()),
            Matcher::UrlEncoded("v".into(), "5.131".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"response": {"likes": 5}}"#)
        .expect(1)
        .create_async()
        .await;

    let harness = harness(&server).await;
    let posts = harness.likeable_posts().await.unwrap();
    assert_eq!(posts.len(), 1);

    harness.add_like_to_post(&posts[0]).await.unwrap();

    wall.assert_async().await;
    add.assert_async().await;
}

#[tokio::test]
async fn test_delete_without_like_passes_on_access_denied() {
    setup_logger();
    let mut server = Server::new_async().await;
    let _wall = mock_wall(&mut server, &[post_json(12, 4, 0, true)]).await;
    let delete = server
        .mock("POST", "/likes.delete")
        .match_body(Matcher::UrlEncoded("item_id".into(), "12".into()))
        .with_status(200)
        .with_body(r#"{"error": {"error_code": 15, "error_msg": "Access denied", "request_params": []}}"#)
        .create_async()
        .await;

    let harness = harness(&server).await;
    harness.delete_like_from_post_without_like().await.unwrap();

    delete.assert_async().await;
}

#[tokio::test]
async fn test_transport_failure_is_hard_failure() {
    setup_logger();
    let mut server = Server::new_async().await;
    let _wall = server
        .mock("POST", "/wall.get")
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let harness = harness(&server).await;
    let err = harness.is_liked().await.unwrap_err();

    assert!(matches!(err, ScenarioError::Remote(_)));
}

#[tokio::test]
async fn test_run_all_against_mock_service() {
    setup_logger();
    let mut server = Server::new_async().await;
    let _wall = mock_wall(
        &mut server,
        &[
            post_json(1, 4, 0, true),
            post_json(2, 3, 1, false),
            post_json(3, 0, 0, true),
        ],
    )
    .await;

    let _add_1 = server
        .mock("POST", "/likes.add")
        .match_body(Matcher::UrlEncoded("item_id".into(), "1".into()))
        .with_body(r#"{"response": {"likes": 5}}"#)
        .create_async()
        .await;
    let _add_2 = server
        .mock("POST", "/likes.add")
        .match_body(Matcher::UrlEncoded("item_id".into(), "2".into()))
        .with_body(r#"{"response": {"likes": 3}}"#)
        .create_async()
        .await;
    let _add_3 = server
        .mock("POST", "/likes.add")
        .match_body(Matcher::UrlEncoded("item_id".into(), "3".into()))
        .with_body(r#"{"response": {"likes": 1}}"#)
        .create_async()
        .await;
    let _delete_liked = server
        .mock("POST", "/likes.delete")
        .match_body(Matcher::UrlEncoded("item_id".into(), "2".into()))
        .with_body(r#"{"response": {"likes": 2}}"#)
        .create_async()
        .await;
    let _delete_unliked = server
        .mock("POST", "/likes.delete")
        .match_body(Matcher::UrlEncoded("item_id".into(), "1".into()))
        .with_body(r#"{"error": {"error_code": 15, "error_msg": "Access denied"}}"#)
        .create_async()
        .await;
    let _list_all = server
        .mock("POST", "/likes.getList")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("item_id".into(), "1".into()),
            Matcher::UrlEncoded("friends_only".into(), "0".into()),
        ]))
        .with_body(r#"{"response": {"count": 4, "items": [10, 11, 12, 13]}}"#)
        .create_async()
        .await;
    let _list_friends = server
        .mock("POST", "/likes.getList")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("item_id".into(), "3".into()),
            Matcher::UrlEncoded("friends_only".into(), "1".into()),
        ]))
        .with_body(r#"{"response": {"count": 0, "items": []}}"#)
        .create_async()
        .await;
    let _liked = server
        .mock("POST", "/likes.isLiked")
        .match_body(Matcher::UrlEncoded("item_id".into(), "2".into()))
        .with_body(r#"{"response": {"liked": 1, "copied": 0}}"#)
        .create_async()
        .await;
    let _not_liked = server
        .mock("POST", "/likes.isLiked")
        .match_body(Matcher::UrlEncoded("item_id".into(), "1".into()))
        .with_body(r#"{"response": {"liked": 0, "copied": 0}}"#)
        .create_async()
        .await;

    let harness = harness(&server).await;
    let reports = run_all(&harness).await;

    assert_eq!(reports.len(), 9);
    for report in &reports {
        assert!(report.passed(), "{report}");
    }
}
