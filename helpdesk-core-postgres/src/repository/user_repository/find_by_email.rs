use helpdesk_core_db::models::user::UserModel;

use super::repo_impl::UserRepositoryImpl;
use crate::utils::TryFromRow;

impl UserRepositoryImpl {
    pub(super) async fn find_by_email_impl(
        repo: &UserRepositoryImpl,
        email: &str,
    ) -> Result<Option<UserModel>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            SELECT * FROM users WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&*repo.pool)
        .await?;

        row.as_ref().map(UserModel::try_from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{new_test_user, setup_test_context};
    use helpdesk_core_api::domain::common_enums::UserRole;
    use helpdesk_core_db::repository::find_by_email::FindByEmail;

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL"]
    #[serial_test::serial]
    async fn test_find_by_email_round_trip() -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    {
        let ctx = setup_test_context().await?;
        let repo = ctx.repos.user_repository();

        let user = new_test_user(UserRole::Agent);
        repo.create(user.clone()).await?;

        let found = repo.find_by_email(user.email.as_str()).await?;
        let found = found.ok_or("account was not persisted")?;
        assert_eq!(found.id, user.id);
        assert_eq!(found.role, UserRole::Agent);

        let missing = repo.find_by_email("nobody@example.com").await?;
        assert!(missing.is_none());

        Ok(())
    }
}
