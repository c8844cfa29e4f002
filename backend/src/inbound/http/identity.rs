//! Resolution of the user a request acts as.
//!
//! The API has no hard authentication gate. A request acts as the user stored
//! in its session cookie, else the user named by an `Authorization: Bearer`
//! token issued at login, else the first seeded account.

use actix_web::http::header::{AUTHORIZATION, HeaderMap};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use crate::domain::{ApiResult, Error, User, UserId, user_id_from_token};
use crate::inbound::http::port_errors::map_user_error;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Extractor yielding the account the request acts as.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// Unwrap the resolved account.
    pub fn into_inner(self) -> User {
        self.0
    }
}

fn bearer_user_id(headers: &HeaderMap) -> Option<UserId> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    user_id_from_token(token)
}

async fn find_user(state: &HttpState, id: UserId) -> ApiResult<Option<User>> {
    state.users.find(id).await.map_err(map_user_error)
}

/// Resolve the acting user from the session, a bearer token, or the first
/// account, in that order. Identifiers that no longer match an account are
/// skipped.
pub(crate) async fn resolve_current_user(
    state: &HttpState,
    session_user: Option<UserId>,
    bearer_user: Option<UserId>,
) -> ApiResult<User> {
    for (source, candidate) in [("session", session_user), ("bearer", bearer_user)] {
        let Some(id) = candidate else { continue };
        if let Some(user) = find_user(state, id).await? {
            return Ok(user);
        }
        debug!(source, user_id = %id, "identity refers to an unknown user");
    }
    state
        .users
        .first()
        .await
        .map_err(map_user_error)?
        .ok_or_else(|| Error::unauthorized("no user accounts are available"))
}

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        let session = SessionContext::from_request(req, payload);
        let bearer_user = bearer_user_id(req.headers());
        Box::pin(async move {
            let state = state.ok_or_else(|| Error::internal("HTTP state is not configured"))?;
            let session = session.await?;
            resolve_current_user(&state, session.user_id(), bearer_user)
                .await
                .map(CurrentUser)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::inbound::http::test_utils::{TestPorts, account};
    use actix_web::test::TestRequest;
    use rstest::rstest;

    #[rstest]
    #[case(Some("Bearer mock_jwt_153_1718000000000"), Some(153))]
    #[case(Some("Bearer  mock_jwt_153_1 "), Some(153))]
    #[case(Some("Bearer mock_refresh_153_1"), None)]
    #[case(Some("Basic dXNlcjpwYXNz"), None)]
    #[case(None, None)]
    fn parses_bearer_tokens(#[case] header: Option<&str>, #[case] expected: Option<u32>) {
        let mut request = TestRequest::default();
        if let Some(value) = header {
            request = request.insert_header((AUTHORIZATION, value));
        }
        let req = request.to_http_request();
        assert_eq!(bearer_user_id(req.headers()), expected.map(UserId::new));
    }

    #[tokio::test]
    async fn session_wins_over_bearer() {
        let mut ports = TestPorts::default();
        ports
            .users
            .expect_find()
            .withf(|id| *id == UserId::new(152))
            .returning(|id| Ok(Some(account(id.get(), &[100], &[100]))));
        let state = ports.into_state();

        let user = resolve_current_user(&state, Some(UserId::new(152)), Some(UserId::new(153)))
            .await
            .expect("resolved");
        assert_eq!(user.id, UserId::new(152));
    }

    #[tokio::test]
    async fn stale_session_falls_back_to_bearer() {
        let mut ports = TestPorts::default();
        ports.users.expect_find().returning(|id| {
            Ok((id == UserId::new(153)).then(|| account(153, &[20], &[20, 100])))
        });
        let state = ports.into_state();

        let user = resolve_current_user(&state, Some(UserId::new(999)), Some(UserId::new(153)))
            .await
            .expect("resolved");
        assert_eq!(user.id, UserId::new(153));
    }

    #[tokio::test]
    async fn anonymous_requests_act_as_first_account() {
        let mut ports = TestPorts::default();
        ports
            .users
            .expect_first()
            .returning(|| Ok(Some(account(151, &[1], &[1]))));
        let state = ports.into_state();

        let user = resolve_current_user(&state, None, None)
            .await
            .expect("resolved");
        assert_eq!(user.id, UserId::new(151));
    }

    #[tokio::test]
    async fn empty_account_store_is_unauthorised() {
        let mut ports = TestPorts::default();
        ports.users.expect_first().returning(|| Ok(None));
        let state = ports.into_state();

        let error = resolve_current_user(&state, None, None)
            .await
            .expect_err("no accounts");
        assert_eq!(error.code(), ErrorCode::Unauthorized);
    }
}
