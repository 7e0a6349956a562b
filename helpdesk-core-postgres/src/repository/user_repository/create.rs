use helpdesk_core_db::models::user::UserModel;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    /// Insert an account row. Accounts are created at signup and never
    /// change role afterwards, so there is no update path.
    pub async fn create(
        &self,
        user: UserModel,
    ) -> Result<UserModel, Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, display_name, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id)
        .bind(user.email.as_str())
        .bind(user.display_name.as_deref())
        .bind(user.role)
        .bind(user.created_at)
        .execute(&*self.pool)
        .await?;

        Ok(user)
    }
}
