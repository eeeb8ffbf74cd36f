use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Administrator, LoginInput, NewAdministrator};
use super::repository::AdministratorRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Administrator business service independent of web framework
pub struct AdministratorService<R: AdministratorRepository> {
    repo: Arc<R>,
}

impl<R: AdministratorRepository> AdministratorService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Look up the administrator matching both email and password.
    ///
    /// `Ok(None)` means no such account; storage failures are `Err`.
    ///
    /// # Examples
    /// ```
    /// use service::administrator::{AdministratorService, repository::mock::MockAdministratorRepository};
    /// use service::administrator::domain::{LoginInput, NewAdministrator, Role};
    /// use std::sync::Arc;
    /// let svc = AdministratorService::new(Arc::new(MockAdministratorRepository::default()));
    /// let new = NewAdministrator { email: "u@e.com".into(), password: "pw".into(), role: Role::Editor };
    /// tokio_test::block_on(svc.create(new)).unwrap();
    /// let found = tokio_test::block_on(svc.login(&LoginInput { email: "u@e.com".into(), password: "pw".into() })).unwrap();
    /// assert_eq!(found.map(|a| a.role), Some(Role::Editor));
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: &LoginInput) -> Result<Option<Administrator>, ServiceError> {
        let found = self.repo.find_by_credentials(&input.email, &input.password).await?;
        if found.is_none() {
            debug!("no administrator matches the given credentials");
        }
        Ok(found)
    }

    #[instrument(skip(self, new), fields(email = %new.email, role = %new.role))]
    pub async fn create(&self, new: NewAdministrator) -> Result<Administrator, ServiceError> {
        let created = self.repo.insert(new).await?;
        info!(id = created.id, email = %created.email, role = %created.role, "administrator_created");
        Ok(created)
    }

    /// `None` lists everything; `Some(n)` returns the n-th page of ten.
    pub async fn list(&self, page: Option<u32>) -> Result<Vec<Administrator>, ServiceError> {
        self.repo.list(page.map(Pagination::page)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::administrator::domain::Role;
    use crate::administrator::repository::{mock::MockAdministratorRepository, SeaOrmAdministratorRepository};
    use crate::test_support::get_db;

    fn new_admin(email: &str, role: Role) -> NewAdministrator {
        NewAdministrator { email: email.into(), password: "secret".into(), role }
    }

    fn login(email: &str, password: &str) -> LoginInput {
        LoginInput { email: email.into(), password: password.into() }
    }

    #[tokio::test]
    async fn login_requires_both_fields_to_match() -> anyhow::Result<()> {
        let svc = AdministratorService::new(Arc::new(MockAdministratorRepository::default()));
        svc.create(new_admin("adm@example.com", Role::Admin)).await?;

        assert!(svc.login(&login("adm@example.com", "secret")).await?.is_some());
        assert!(svc.login(&login("adm@example.com", "wrong")).await?.is_none());
        assert!(svc.login(&login("nobody@example.com", "secret")).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn list_with_and_without_page() -> anyhow::Result<()> {
        let svc = AdministratorService::new(Arc::new(MockAdministratorRepository::default()));
        for i in 0..12 {
            svc.create(new_admin(&format!("a{i}@example.com"), Role::Editor)).await?;
        }
        assert_eq!(svc.list(None).await?.len(), 12);
        assert_eq!(svc.list(Some(1)).await?.len(), 10);
        let second = svc.list(Some(2)).await?;
        assert_eq!(second.iter().map(|a| a.id).collect::<Vec<_>>(), vec![11, 12]);
        assert!(svc.list(Some(3)).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_round_trip() -> anyhow::Result<()> {
        let db = get_db().await?;
        let svc = AdministratorService::new(Arc::new(SeaOrmAdministratorRepository { db }));

        let created = svc.create(new_admin("editor@example.com", Role::Editor)).await?;
        assert!(created.id > 0);

        let found = svc.login(&login("editor@example.com", "secret")).await?.expect("login");
        assert_eq!(found, created);
        assert!(svc.login(&login("editor@example.com", "nope")).await?.is_none());

        // seeded administrator plus the new one
        let all = svc.list(None).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].email, "editor@example.com");
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_duplicate_email_is_a_db_error() -> anyhow::Result<()> {
        let db = get_db().await?;
        let svc = AdministratorService::new(Arc::new(SeaOrmAdministratorRepository { db }));
        svc.create(new_admin("dup@example.com", Role::Admin)).await?;
        let res = svc.create(new_admin("dup@example.com", Role::Editor)).await;
        assert!(matches!(res, Err(ServiceError::Model(_))));
        Ok(())
    }
}
