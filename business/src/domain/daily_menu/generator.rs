use chrono::Utc;
use uuid::Uuid;

use super::errors::MenuError;
use super::model::is_valid_price;
use super::selection::{ProteinQuantities, Selection};
use crate::domain::category::model::MenuCategory;
use crate::domain::combination::model::GeneratedCombination;

pub fn combination_name(principio: &str, proteina: &str) -> String {
    format!("{} con {}", principio, proteina)
}

pub fn combination_description(principio: &str, proteina: &str) -> String {
    format!("Combinación de {} acompañado de {}", principio, proteina)
}

/// Checks the generation preconditions without building anything.
pub fn validate_generation(selection: &Selection, menu_price: f64) -> Result<(), MenuError> {
    if selection.count(MenuCategory::Principios) == 0 {
        return Err(MenuError::PrincipioRequired);
    }
    if selection.count(MenuCategory::Proteinas) == 0 {
        return Err(MenuError::ProteinaRequired);
    }
    if !is_valid_price(menu_price) {
        return Err(MenuError::InvalidPrice);
    }
    Ok(())
}

/// Expands principios × proteínas into sellable combinations.
///
/// Output is principio-major in selection order. Every combination shares the menu
/// price, the first entrada, the first bebida and all acompañamientos.
pub fn generate_combinations(
    daily_menu_id: Uuid,
    selection: &Selection,
    protein_quantities: &ProteinQuantities,
    menu_price: f64,
) -> Result<Vec<GeneratedCombination>, MenuError> {
    validate_generation(selection, menu_price)?;

    let principios = selection.products(MenuCategory::Principios);
    let proteinas = selection.products(MenuCategory::Proteinas);
    let entrada = selection.first(MenuCategory::Entradas).map(|p| p.id);
    let bebida = selection.first(MenuCategory::Bebidas).map(|p| p.id);
    let sides: Vec<Uuid> = selection
        .products(MenuCategory::Acompanamientos)
        .iter()
        .map(|p| p.id)
        .collect();
    let created_at = Utc::now();

    let mut combinations = Vec::with_capacity(principios.len() * proteinas.len());
    for principio in principios {
        for proteina in proteinas {
            combinations.push(GeneratedCombination {
                id: Uuid::new_v4(),
                daily_menu_id,
                name: combination_name(&principio.name, &proteina.name),
                description: combination_description(&principio.name, &proteina.name),
                price: menu_price,
                principio_product_id: principio.id,
                proteina_product_id: proteina.id,
                entrada_product_id: entrada,
                bebida_product_id: bebida,
                side_product_ids: sides.clone(),
                planned_quantity: protein_quantities.get_or_default(proteina.id),
                available: true,
                favorite: false,
                special: false,
                created_at,
            });
        }
    }
    Ok(combinations)
}
