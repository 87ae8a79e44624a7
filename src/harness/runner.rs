use crate::application::services::likes_service::LikesService;
use crate::application::services::wall_service::WallService;
use crate::harness::context::HarnessContext;
use crate::harness::outcome::ScenarioReport;
use tracing::{error, info, warn};

fn record(reports: &mut Vec<ScenarioReport>, report: ScenarioReport) {
    if report.passed() {
        info!("{}", report);
    } else {
        error!("{}", report);
    }
    reports.push(report);
}

/// Runs every scenario once, plus the add-like scenario per likeable post.
///
/// Scenarios are independent: a failure is recorded and the next one still runs.
pub async fn run_all<W: WallService, L: LikesService>(
    ctx: &HarnessContext<W, L>,
) -> Vec<ScenarioReport> {
    let mut reports = Vec::new();

    match ctx.likeable_posts().await {
        Ok(posts) if posts.is_empty() => {
            warn!("No likeable posts, bulk add_like_to_post has nothing to run");
        }
        Ok(posts) => {
            for post in &posts {
                let outcome = ctx.add_like_to_post(post).await;
                record(
                    &mut reports,
                    ScenarioReport::new(format!("add_like_to_post[{}]", post.id), outcome),
                );
            }
        }
        Err(e) => record(&mut reports, ScenarioReport::new("add_like_to_post", Err(e))),
    }

    record(
        &mut reports,
        ScenarioReport::new(
            "add_like_to_post_with_like",
            ctx.add_like_to_post_with_like().await,
        ),
    );
    record(
        &mut reports,
        ScenarioReport::new("delete_like_from_post", ctx.delete_like_from_post().await),
    );
    record(
        &mut reports,
        ScenarioReport::new(
            "delete_like_from_post_without_like",
            ctx.delete_like_from_post_without_like().await,
        ),
    );
    record(
        &mut reports,
        ScenarioReport::new("get_like_list", ctx.get_like_list().await),
    );
    record(
        &mut reports,
        ScenarioReport::new(
            "get_like_list_friends_only",
            ctx.get_like_list_friends_only().await,
        ),
    );
    record(&mut reports, ScenarioReport::new("is_liked", ctx.is_liked().await));
    record(
        &mut reports,
        ScenarioReport::new("is_not_liked", ctx.is_not_liked().await),
    );

    let failed = reports.iter().filter(|r| !r.passed()).count();
    info!(
        "Scenarios finished: {} passed, {} failed",
        reports.len() - failed,
        failed
    );
    reports
}
