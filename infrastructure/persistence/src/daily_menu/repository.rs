use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use business::domain::daily_menu::model::{
    DailyMenu, MenuComposition, MenuSelection, MenuStatus, PersistedProteinQuantity,
};
use business::domain::daily_menu::repository::DailyMenuRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::RestaurantId;

use super::entity::{DailyMenuEntity, MenuSelectionEntity, ProteinQuantityEntity};
use crate::combination::repository::insert_combination;
use crate::numeric::{to_count, to_numeric};

pub struct DailyMenuRepositoryPostgres {
    pool: PgPool,
}

impl DailyMenuRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn deactivate_previous(
        tx: &mut Transaction<'_, Postgres>,
        menu: &DailyMenu,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE daily_menus SET status = $1 WHERE restaurant_id = $2 AND menu_date = $3 AND status = $4",
        )
        .bind(MenuStatus::Inactive.to_string())
        .bind(menu.restaurant_id.as_uuid())
        .bind(menu.menu_date)
        .bind(MenuStatus::Active.to_string())
        .execute(&mut **tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn insert_menu(
        tx: &mut Transaction<'_, Postgres>,
        menu: &DailyMenu,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO daily_menus (id, restaurant_id, menu_price, menu_date, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(menu.id)
        .bind(menu.restaurant_id.as_uuid())
        .bind(to_numeric(menu.menu_price)?)
        .bind(menu.menu_date)
        .bind(menu.status.to_string())
        .bind(menu.created_at)
        .execute(&mut **tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn insert_selection(
        tx: &mut Transaction<'_, Postgres>,
        selection: &MenuSelection,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO daily_menu_selections (daily_menu_id, product_id, category_id, category_name, product_name_snapshot, selection_order)
            VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(selection.daily_menu_id)
        .bind(selection.product_id)
        .bind(selection.category_external_id)
        .bind(&selection.category_name)
        .bind(&selection.product_name_snapshot)
        .bind(to_count(selection.order))
        .execute(&mut **tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn insert_protein_quantity(
        tx: &mut Transaction<'_, Postgres>,
        quantity: &PersistedProteinQuantity,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO protein_quantities (daily_menu_id, product_id, planned_quantity, unit_type)
            VALUES ($1, $2, $3, $4)"#,
        )
        .bind(quantity.daily_menu_id)
        .bind(quantity.product_id)
        .bind(to_count(quantity.planned_quantity))
        .bind(&quantity.unit_type)
        .execute(&mut **tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn write_composition(
        tx: &mut Transaction<'_, Postgres>,
        composition: &MenuComposition,
    ) -> Result<(), RepositoryError> {
        Self::deactivate_previous(tx, &composition.menu).await?;
        Self::insert_menu(tx, &composition.menu).await?;
        for selection in &composition.selections {
            Self::insert_selection(tx, selection).await?;
        }
        for quantity in &composition.protein_quantities {
            Self::insert_protein_quantity(tx, quantity).await?;
        }
        for combination in &composition.combinations {
            insert_combination(&mut **tx, combination).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl DailyMenuRepository for DailyMenuRepositoryPostgres {
    async fn find_active(
        &self,
        restaurant_id: &RestaurantId,
        menu_date: NaiveDate,
    ) -> Result<Option<DailyMenu>, RepositoryError> {
        let entity = sqlx::query_as::<_, DailyMenuEntity>(
            "SELECT id, restaurant_id, menu_price, menu_date, status, created_at FROM daily_menus WHERE restaurant_id = $1 AND menu_date = $2 AND status = $3 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(restaurant_id.as_uuid())
        .bind(menu_date)
        .bind(MenuStatus::Active.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn get_by_id(
        &self,
        id: Uuid,
        restaurant_id: &RestaurantId,
    ) -> Result<DailyMenu, RepositoryError> {
        let entity = sqlx::query_as::<_, DailyMenuEntity>(
            "SELECT id, restaurant_id, menu_price, menu_date, status, created_at FROM daily_menus WHERE id = $1 AND restaurant_id = $2",
        )
        .bind(id)
        .bind(restaurant_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_selections(
        &self,
        daily_menu_id: Uuid,
    ) -> Result<Vec<MenuSelection>, RepositoryError> {
        let entities = sqlx::query_as::<_, MenuSelectionEntity>(
            "SELECT daily_menu_id, product_id, category_id, category_name, product_name_snapshot, selection_order FROM daily_menu_selections WHERE daily_menu_id = $1 ORDER BY selection_order ASC",
        )
        .bind(daily_menu_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_protein_quantities(
        &self,
        daily_menu_id: Uuid,
    ) -> Result<Vec<PersistedProteinQuantity>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProteinQuantityEntity>(
            "SELECT daily_menu_id, product_id, planned_quantity, unit_type FROM protein_quantities WHERE daily_menu_id = $1",
        )
        .bind(daily_menu_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save_composition(&self, composition: &MenuComposition) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        // Dropping the transaction on error rolls every statement back.
        if let Err(e) = Self::write_composition(&mut tx, composition).await {
            tracing::error!(
                menu_id = %composition.menu.id,
                "daily menu composition rolled back: {}",
                e
            );
            return Err(RepositoryError::TransactionAborted);
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::TransactionAborted)
    }
}
