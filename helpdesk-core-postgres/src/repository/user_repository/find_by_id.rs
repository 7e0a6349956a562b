use helpdesk_core_db::models::user::UserModel;
use uuid::Uuid;

use super::repo_impl::UserRepositoryImpl;
use crate::utils::TryFromRow;

impl UserRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &UserRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<UserModel>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            SELECT * FROM users WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&*repo.pool)
        .await?;

        row.as_ref().map(UserModel::try_from_row).transpose()
    }
}
