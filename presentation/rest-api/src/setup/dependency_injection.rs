use std::sync::Arc;

use logger::TracingLogger;
use persistence::catalog::repository::ProductCatalogRepositoryPostgres;
use persistence::combination::repository::CombinationRepositoryPostgres;
use persistence::daily_menu::repository::DailyMenuRepositoryPostgres;
use persistence::template::repository::MenuTemplateRepositoryPostgres;
use persistence::usage_history::repository::UsageHistoryRepositoryPostgres;

use business::application::catalog::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::catalog::get_usage_history::GetUsageHistoryUseCaseImpl;
use business::application::combination::delete::DeleteCombinationUseCaseImpl;
use business::application::combination::get_by_menu::GetCombinationsUseCaseImpl;
use business::application::combination::toggle_flag::ToggleCombinationFlagUseCaseImpl;
use business::application::combination::update::UpdateCombinationUseCaseImpl;
use business::application::daily_menu::commit::CommitMenuUseCaseImpl;
use business::application::daily_menu::get_selection::GetMenuSelectionUseCaseImpl;
use business::application::daily_menu::load_active::LoadActiveMenuUseCaseImpl;
use business::application::template::create::CreateMenuTemplateUseCaseImpl;
use business::application::template::get_all::GetMenuTemplatesUseCaseImpl;

use crate::api::catalog::routes::CatalogApi;
use crate::api::combination::routes::CombinationApi;
use crate::api::daily_menu::routes::DailyMenuApi;
use crate::api::health::routes::HealthApi;
use crate::api::template::routes::TemplateApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub catalog_api: CatalogApi,
    pub daily_menu_api: DailyMenuApi,
    pub combination_api: CombinationApi,
    pub template_api: TemplateApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let catalog_repository = Arc::new(ProductCatalogRepositoryPostgres::new(pool.clone()));
        let usage_history_repository = Arc::new(UsageHistoryRepositoryPostgres::new(pool.clone()));
        let daily_menu_repository = Arc::new(DailyMenuRepositoryPostgres::new(pool.clone()));
        let combination_repository = Arc::new(CombinationRepositoryPostgres::new(pool.clone()));
        let template_repository = Arc::new(MenuTemplateRepositoryPostgres::new(pool));

        // Catalog use cases
        let get_products_use_case = Arc::new(GetProductsByCategoryUseCaseImpl {
            repository: catalog_repository,
            logger: logger.clone(),
        });
        let get_usage_history_use_case = Arc::new(GetUsageHistoryUseCaseImpl {
            repository: usage_history_repository,
            logger: logger.clone(),
        });

        // Daily menu use cases
        let load_active_use_case = Arc::new(LoadActiveMenuUseCaseImpl {
            repository: daily_menu_repository.clone(),
            combination_repository: combination_repository.clone(),
            logger: logger.clone(),
        });
        let commit_use_case = Arc::new(CommitMenuUseCaseImpl {
            repository: daily_menu_repository.clone(),
            template_repository: template_repository.clone(),
            logger: logger.clone(),
        });
        let get_selection_use_case = Arc::new(GetMenuSelectionUseCaseImpl {
            repository: daily_menu_repository,
            logger: logger.clone(),
        });

        // Combination use cases
        let get_combinations_use_case = Arc::new(GetCombinationsUseCaseImpl {
            repository: combination_repository.clone(),
            logger: logger.clone(),
        });
        let update_combination_use_case = Arc::new(UpdateCombinationUseCaseImpl {
            repository: combination_repository.clone(),
            logger: logger.clone(),
        });
        let toggle_flag_use_case = Arc::new(ToggleCombinationFlagUseCaseImpl {
            repository: combination_repository.clone(),
            logger: logger.clone(),
        });
        let delete_combination_use_case = Arc::new(DeleteCombinationUseCaseImpl {
            repository: combination_repository,
            logger: logger.clone(),
        });

        // Template use cases
        let create_template_use_case = Arc::new(CreateMenuTemplateUseCaseImpl {
            repository: template_repository.clone(),
            logger: logger.clone(),
        });
        let get_templates_use_case = Arc::new(GetMenuTemplatesUseCaseImpl {
            repository: template_repository,
            logger,
        });

        let catalog_api = CatalogApi::new(get_products_use_case, get_usage_history_use_case);
        let daily_menu_api =
            DailyMenuApi::new(load_active_use_case, commit_use_case, get_selection_use_case);
        let combination_api = CombinationApi::new(
            get_combinations_use_case,
            update_combination_use_case,
            toggle_flag_use_case,
            delete_combination_use_case,
        );
        let template_api = TemplateApi::new(create_template_use_case, get_templates_use_case);

        Ok(Self {
            health_api,
            catalog_api,
            daily_menu_api,
            combination_api,
            template_api,
        })
    }
}
