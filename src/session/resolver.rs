/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/5/25
******************************************************************************/
use crate::config::Credentials;
use crate::error::AuthError;
use crate::session::interface::{present, AuthCredentials, UserActor, VkAuthenticator};
use tracing::{error, info, instrument, warn};

/// Builds the actor straight from a pre-issued token when the pair is complete.
///
/// Returns `Ok(None)` when the pair is absent or incomplete. An empty string counts
/// as absent. A present user id that is not an integer is an error.
pub fn direct_actor(credentials: &Credentials) -> Result<Option<UserActor>, AuthError> {
    match (
        present(credentials.access_token.as_deref()),
        present(credentials.user_id.as_deref()),
    ) {
        (Some(token), Some(user_id)) => {
            let user_id = user_id
                .parse::<i64>()
                .map_err(|_| AuthError::InvalidUserId(user_id.to_string()))?;
            Ok(Some(UserActor::new(user_id, token)))
        }
        (None, None) => Ok(None),
        (token, user_id) => {
            warn!(
                "Incomplete token pair (accessToken set: {}, userId set: {}), falling back to authorization code flow",
                token.is_some(),
                user_id.is_some()
            );
            Ok(None)
        }
    }
}

/// Resolves the single actor used for the whole run.
///
/// A complete token pair short-circuits; anything else goes through one
/// authorization code exchange. Every failure is logged here once and returned.
#[instrument(skip_all)]
pub async fn resolve_actor<A: VkAuthenticator + ?Sized>(
    credentials: &Credentials,
    authenticator: &A,
) -> Result<UserActor, AuthError> {
    let resolved = resolve(credentials, authenticator).await;
    if let Err(e) = &resolved {
        error!("Can't obtain UserActor: {}", e);
    }
    resolved
}

async fn resolve<A: VkAuthenticator + ?Sized>(
    credentials: &Credentials,
    authenticator: &A,
) -> Result<UserActor, AuthError> {
    if let Some(actor) = direct_actor(credentials)? {
        info!("Using pre-issued access token for user {}", actor.user_id);
        return Ok(actor);
    }

    let auth_credentials = AuthCredentials::from_raw(
        credentials.client_id.as_deref(),
        credentials.secret.as_deref(),
        credentials.code.as_deref(),
    )?;

    let actor = authenticator.exchange_code(&auth_credentials).await?;
    info!("Authorized user {} through code flow", actor.user_id);
    Ok(actor)
}
