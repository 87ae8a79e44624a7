/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/5/25
******************************************************************************/
use crate::application::services::likes_service::{LikesService, LikesServiceImpl};
use crate::application::services::wall_service::{WallService, WallServiceImpl};
use crate::config::Config;
use crate::error::AppError;
use crate::session::auth::VkAuth;
use crate::session::interface::UserActor;
use crate::session::resolver::resolve_actor;
use crate::transport::http_client::VkHttpClientImpl;
use std::sync::Arc;
use tracing::info;

/// Everything a scenario needs: the resolved actor and the services it calls.
pub struct HarnessContext<W: WallService, L: LikesService> {
    actor: UserActor,
    pub(crate) wall: Arc<W>,
    pub(crate) likes: Arc<L>,
}

/// Context wired to the real API.
pub type VkHarness = HarnessContext<
    WallServiceImpl<VkHttpClientImpl>,
    LikesServiceImpl<VkHttpClientImpl>,
>;

impl<W: WallService, L: LikesService> HarnessContext<W, L> {
    pub fn new(actor: UserActor, wall: Arc<W>, likes: Arc<L>) -> Self {
        Self { actor, wall, likes }
    }

    pub fn actor(&self) -> &UserActor {
        &self.actor
    }
}

impl VkHarness {
    /// Resolves the actor and wires the HTTP services.
    ///
    /// Fails when no actor can be obtained; scenarios must not run in that case.
    pub async fn from_config(config: Arc<Config>) -> Result<Self, AppError> {
        let client = Arc::new(VkHttpClientImpl::new(config.clone())?);
        let authenticator = VkAuth::new(config.clone(), client.clone());

        let actor = resolve_actor(&config.credentials, &authenticator).await?;
        info!("Harness ready for user {}", actor.user_id);

        Ok(Self::new(
            actor,
            Arc::new(WallServiceImpl::new(client.clone())),
            Arc::new(LikesServiceImpl::new(client)),
        ))
    }
}
