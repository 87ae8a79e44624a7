//! Scenarios against the real VK API.
//!
//! Ignored by default. Run with `cargo test --test live -- --ignored` after
//! exporting either `accessToken` + `userId` or `clientId` + `secret` + `code`.
//! The account must hold posts in every state the scenarios select on.

use std::sync::{Arc, OnceLock};
use vk_client::application::services::likes_service::LikesServiceImpl;
use vk_client::application::services::wall_service::WallServiceImpl;
use vk_client::config::Config;
use vk_client::harness::context::{HarnessContext, VkHarness};
use vk_client::session::interface::UserActor;
use vk_client::transport::http_client::VkHttpClientImpl;
use vk_client::utils::logger::setup_logger;

static ACTOR: OnceLock<UserActor> = OnceLock::new();

/// Resolves the actor once per test binary; an authorization code is single use.
fn actor() -> UserActor {
    ACTOR
        .get_or_init(|| {
            std::thread::spawn(|| {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .expect("runtime");
                runtime.block_on(async {
                    match VkHarness::from_config(Arc::new(Config::new())).await {
                        Ok(harness) => harness.actor().clone(),
                        Err(e) => panic!("Data for UserActor is not provided: {e}"),
                    }
                })
            })
            .join()
            .expect("actor resolution panicked")
        })
        .clone()
}

fn harness() -> VkHarness {
    setup_logger();
    let config = Arc::new(Config::new());
    let client = Arc::new(VkHttpClientImpl::new(config).expect("http client"));
    HarnessContext::new(
        actor(),
        Arc::new(WallServiceImpl::new(client.clone())),
        Arc::new(LikesServiceImpl::new(client)),
    )
}

#[tokio::test]
#[ignore]
async fn live_add_like_to_likeable_posts() {
    let harness = harness();
    let posts = harness.likeable_posts().await.unwrap();
    for post in &posts {
        harness.add_like_to_post(post).await.unwrap();
    }
}

#[tokio::test]
#[ignore]
async fn live_add_like_to_post_with_like() {
    harness().add_like_to_post_with_like().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn live_delete_like_from_post() {
    harness().delete_like_from_post().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn live_delete_like_from_post_without_like() {
    harness().delete_like_from_post_without_like().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn live_get_like_list() {
    harness().get_like_list().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn live_get_like_list_friends_only() {
    harness().get_like_list_friends_only().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn live_is_liked() {
    harness().is_liked().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn live_is_not_liked() {
    harness().is_not_liked().await.unwrap();
}
