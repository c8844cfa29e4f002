//! User account store and the login service built on it.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::ports::{LoginService, UserRepository, UserRepositoryError};
use crate::domain::{
    Contact, Error, LoginCredentials, NewUser, User, UserId, UserParts, UserPatch,
    UserValidationError,
};

/// Users kept in ascending id order.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create a repository holding `users`.
    #[must_use]
    pub fn new(mut users: Vec<User>) -> Self {
        users.sort_by_key(|user| user.id);
        Self {
            users: RwLock::new(users),
        }
    }
}

fn rejected(err: &UserValidationError) -> UserRepositoryError {
    UserRepositoryError::rejected(err.to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.users.read().await.clone())
    }

    async fn find(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn first(&self) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users.read().await.first().cloned())
    }

    async fn create(&self, user: NewUser, contact: Contact) -> Result<User, UserRepositoryError> {
        let mut users = self.users.write().await;
        if users.iter().any(|existing| existing.contact_id == contact.id) {
            return Err(UserRepositoryError::conflict(contact.id));
        }
        let email = contact
            .email
            .clone()
            .ok_or(UserValidationError::MissingEmail {
                contact_id: contact.id,
            })
            .map_err(|err| rejected(&err))?;
        let id = users
            .iter()
            .map(|existing| existing.id.get())
            .max()
            .map_or(Some(1), |max| max.checked_add(1))
            .ok_or_else(|| UserRepositoryError::storage("user ids exhausted"))?;

        let created = User::try_from_parts(UserParts {
            id: UserId::new(id),
            username: email.clone(),
            password: user.password,
            contact_id: contact.id,
            full_name: contact.full_name(),
            email,
            roles: user.roles,
            permissions: user.permissions,
            manage_group_ids: user.manage_group_ids,
            view_group_ids: user.view_group_ids,
        })
        .map_err(|err| rejected(&err))?;
        users.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, UserRepositoryError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| UserRepositoryError::not_found(id.get()))?;
        user.apply(patch).map_err(|err| rejected(&err))?;
        Ok(user.clone())
    }
}

#[async_trait]
impl LoginService for InMemoryUserRepository {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let users = self.users.read().await;
        let matched = users.iter().find(|user| {
            user.username == credentials.username() && user.password_matches(credentials.password())
        });
        match matched {
            Some(user) => Ok(user.clone()),
            None => {
                warn!(username = credentials.username(), "rejected login attempt");
                Err(Error::unauthorized("Invalid username or password"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode, Gender, GroupId};
    use rstest::{fixture, rstest};

    fn ids(raw: &[u32]) -> Vec<GroupId> {
        raw.iter().copied().map(GroupId::new).collect()
    }

    fn contact(id: u32, email: Option<&str>) -> Contact {
        Contact {
            id,
            first_name: "Grace".to_owned(),
            last_name: "Nakato".to_owned(),
            email: email.map(str::to_owned),
            phone: "+256700000000".to_owned(),
            gender: Gender::Female,
            age_group: "20-30".to_owned(),
            date_of_birth: None,
            civil_status: "Single".to_owned(),
            place_of_work: None,
            group_id: GroupId::new(100),
            role: "Member".to_owned(),
            country: "Uganda".to_owned(),
            district: "Kampala".to_owned(),
            free_form: None,
        }
    }

    fn new_user(contact_id: u32) -> NewUser {
        NewUser {
            contact_id,
            password: "secret".to_owned(),
            roles: vec!["MC Shepherd".to_owned()],
            permissions: Vec::new(),
            manage_group_ids: ids(&[100]),
            view_group_ids: ids(&[100, 20]),
        }
    }

    #[fixture]
    fn repository() -> InMemoryUserRepository {
        let user = User::try_from_parts(UserParts {
            id: UserId::new(151),
            username: "fellowship@worshipharvest.org".to_owned(),
            password: "password123".to_owned(),
            contact_id: 1,
            full_name: "Emmanuel Okello".to_owned(),
            email: "fellowship@worshipharvest.org".to_owned(),
            roles: vec!["MC Shepherd".to_owned()],
            permissions: vec!["REPORT_VIEW".to_owned()],
            manage_group_ids: ids(&[100]),
            view_group_ids: ids(&[100]),
        })
        .expect("valid user");
        InMemoryUserRepository::new(vec![user])
    }

    #[rstest]
    #[tokio::test]
    async fn create_uses_contact_email_and_next_id(repository: InMemoryUserRepository) {
        let created = repository
            .create(new_user(7), contact(7, Some("grace@example.org")))
            .await
            .expect("create user");
        assert_eq!(created.id, UserId::new(152));
        assert_eq!(created.username, "grace@example.org");
        assert_eq!(created.full_name, "Grace Nakato");
    }

    #[rstest]
    #[tokio::test]
    async fn create_conflicts_for_existing_contact(repository: InMemoryUserRepository) {
        let err = repository
            .create(new_user(1), contact(1, Some("x@example.org")))
            .await
            .expect_err("conflict");
        assert_eq!(err, UserRepositoryError::conflict(1_u32));
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_contact_without_email(repository: InMemoryUserRepository) {
        let err = repository
            .create(new_user(8), contact(8, None))
            .await
            .expect_err("missing email");
        assert!(matches!(err, UserRepositoryError::Rejected { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn update_rejects_manage_outside_view(repository: InMemoryUserRepository) {
        let patch = UserPatch {
            manage_group_ids: Some(ids(&[100, 101])),
            ..UserPatch::default()
        };
        let err = repository
            .update(UserId::new(151), patch)
            .await
            .expect_err("scope violation");
        assert!(matches!(err, UserRepositoryError::Rejected { .. }));
        let stored = repository
            .find(UserId::new(151))
            .await
            .expect("find")
            .expect("present");
        assert_eq!(stored.scope.manage_group_ids(), ids(&[100]).as_slice());
    }

    #[rstest]
    #[case("fellowship@worshipharvest.org", "password123", true)]
    #[case("fellowship@worshipharvest.org", "wrong", false)]
    #[case("nobody@worshipharvest.org", "password123", false)]
    #[tokio::test]
    async fn authenticate_checks_username_and_password(
        repository: InMemoryUserRepository,
        #[case] username: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let creds = LoginCredentials::try_from_parts(username, password).expect("credentials shape");
        match (should_succeed, repository.authenticate(&creds).await) {
            (true, Ok(user)) => assert_eq!(user.id, UserId::new(151)),
            (false, Err(err)) => assert_eq!(err.code(), ErrorCode::Unauthorized),
            (true, Err(err)) => panic!("expected success, got error: {err:?}"),
            (false, Ok(user)) => panic!("expected failure, got success: {user:?}"),
        }
    }
}
