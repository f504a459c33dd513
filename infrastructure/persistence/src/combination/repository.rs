use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use business::domain::combination::model::{
    CombinationFlag, CombinationPatch, GeneratedCombination,
};
use business::domain::combination::repository::CombinationRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::RestaurantId;

use super::entity::CombinationEntity;
use crate::numeric::{to_count, to_numeric};

const COLUMNS: &str = "c.id, c.daily_menu_id, c.name, c.description, c.price, c.principio_product_id, c.proteina_product_id, c.entrada_product_id, c.bebida_product_id, c.side_product_ids, c.planned_quantity, c.available, c.favorite, c.special, c.created_at";

/// Inserts one freshly generated combination. Only the menu commit writes whole rows,
/// inside its transaction.
pub(crate) async fn insert_combination<'e, E>(
    executor: E,
    combination: &GeneratedCombination,
) -> Result<(), RepositoryError>
where
    E: PgExecutor<'e>,
{
    let price = to_numeric(combination.price)?;
    sqlx::query(
        r#"INSERT INTO generated_combinations (id, daily_menu_id, name, description, price, principio_product_id, proteina_product_id, entrada_product_id, bebida_product_id, side_product_ids, planned_quantity, available, favorite, special, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)"#,
    )
    .bind(combination.id)
    .bind(combination.daily_menu_id)
    .bind(&combination.name)
    .bind(&combination.description)
    .bind(price)
    .bind(combination.principio_product_id)
    .bind(combination.proteina_product_id)
    .bind(combination.entrada_product_id)
    .bind(combination.bebida_product_id)
    .bind(&combination.side_product_ids)
    .bind(to_count(combination.planned_quantity))
    .bind(combination.available)
    .bind(combination.favorite)
    .bind(combination.special)
    .bind(combination.created_at)
    .execute(executor)
    .await
    .map_err(|_| RepositoryError::DatabaseError)?;

    Ok(())
}

fn toggle_statement(flag: CombinationFlag) -> String {
    let column = match flag {
        CombinationFlag::Favorite => "favorite",
        CombinationFlag::Special => "special",
    };
    format!(
        "UPDATE generated_combinations c SET {column} = NOT c.{column} FROM daily_menus m WHERE c.id = $1 AND c.daily_menu_id = m.id AND m.restaurant_id = $2 RETURNING {COLUMNS}"
    )
}

fn update_statement() -> String {
    format!(
        "UPDATE generated_combinations c SET name = COALESCE($3, c.name), description = COALESCE($4, c.description), price = COALESCE($5, c.price), available = COALESCE($6, c.available) FROM daily_menus m WHERE c.id = $1 AND c.daily_menu_id = m.id AND m.restaurant_id = $2 RETURNING {COLUMNS}"
    )
}

pub struct CombinationRepositoryPostgres {
    pool: PgPool,
}

impl CombinationRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CombinationRepository for CombinationRepositoryPostgres {
    async fn get_by_menu(
        &self,
        daily_menu_id: Uuid,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<GeneratedCombination>, RepositoryError> {
        let entities = sqlx::query_as::<_, CombinationEntity>(&format!(
            "SELECT {COLUMNS} FROM generated_combinations c JOIN daily_menus m ON m.id = c.daily_menu_id WHERE c.daily_menu_id = $1 AND m.restaurant_id = $2 ORDER BY c.created_at ASC, c.name ASC"
        ))
        .bind(daily_menu_id)
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
    ) -> Result<GeneratedCombination, RepositoryError> {
        let entity = sqlx::query_as::<_, CombinationEntity>(&format!(
            "SELECT {COLUMNS} FROM generated_combinations c JOIN daily_menus m ON m.id = c.daily_menu_id WHERE c.id = $1 AND m.restaurant_id = $2"
        ))
        .bind(id)
        .bind(restaurant_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn update_fields(
        &self,
        id: Uuid,
        restaurant_id: &RestaurantId,
        patch: &CombinationPatch,
    ) -> Result<GeneratedCombination, RepositoryError> {
        let price = patch.price.map(to_numeric).transpose()?;
        let entity = sqlx::query_as::<_, CombinationEntity>(&update_statement())
            .bind(id)
            .bind(restaurant_id.as_uuid())
            .bind(patch.name.as_deref())
            .bind(patch.description.as_deref())
            .bind(price)
            .bind(patch.available)
            .fetch_optional(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn toggle_flag(
        &self,
        id: Uuid,
        restaurant_id: &RestaurantId,
        flag: CombinationFlag,
    ) -> Result<GeneratedCombination, RepositoryError> {
        let entity = sqlx::query_as::<_, CombinationEntity>(&toggle_statement(flag))
            .bind(id)
            .bind(restaurant_id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: Uuid, restaurant_id: &RestaurantId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "DELETE FROM generated_combinations c USING daily_menus m WHERE c.id = $1 AND c.daily_menu_id = m.id AND m.restaurant_id = $2",
        )
        .bind(id)
        .bind(restaurant_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() != 1 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
