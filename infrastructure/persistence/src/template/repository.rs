use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::RestaurantId;
use business::domain::template::model::MenuTemplate;
use business::domain::template::repository::MenuTemplateRepository;

use super::entity::{MenuTemplateEntity, items_to_json};

pub struct MenuTemplateRepositoryPostgres {
    pool: PgPool,
}

impl MenuTemplateRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuTemplateRepository for MenuTemplateRepositoryPostgres {
    async fn get_all(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<MenuTemplate>, RepositoryError> {
        let entities = sqlx::query_as::<_, MenuTemplateEntity>(
            "SELECT id, restaurant_id, template_name, items, created_at FROM menu_templates WHERE restaurant_id = $1 ORDER BY created_at DESC",
        )
        .bind(restaurant_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(
        &self,
        id: Uuid,
        restaurant_id: &RestaurantId,
    ) -> Result<MenuTemplate, RepositoryError> {
        let entity = sqlx::query_as::<_, MenuTemplateEntity>(
            "SELECT id, restaurant_id, template_name, items, created_at FROM menu_templates WHERE id = $1 AND restaurant_id = $2",
        )
        .bind(id)
        .bind(restaurant_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, template: &MenuTemplate) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO menu_templates (id, restaurant_id, template_name, items, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                template_name = EXCLUDED.template_name,
                items = EXCLUDED.items"#,
        )
        .bind(template.id)
        .bind(template.restaurant_id.as_uuid())
        .bind(&template.template_name)
        .bind(items_to_json(&template.items)?)
        .bind(template.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
