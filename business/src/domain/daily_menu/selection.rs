use std::collections::{BTreeMap, HashMap, HashSet};

use uuid::Uuid;

use super::model::{MenuSelection, PersistedProteinQuantity};
use crate::domain::catalog::model::Product;
use crate::domain::category::model::{DEFAULT_PROTEIN_QUANTITY, MenuCategory};

/// Products chosen for one category: set membership plus display order.
#[derive(Debug, Clone, Default, PartialEq)]
struct CategorySelection {
    ids: HashSet<Uuid>,
    ordered: Vec<Product>,
}

/// In-progress choice of products per category.
///
/// A product appears at most once per category. Order is display order only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    categories: BTreeMap<MenuCategory, CategorySelection>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the product. Returns `false` if it was already selected.
    pub fn add(&mut self, category: MenuCategory, product: Product) -> bool {
        let entry = self.categories.entry(category).or_default();
        if !entry.ids.insert(product.id) {
            return false;
        }
        entry.ordered.push(product);
        true
    }

    /// Returns `false` if the product was not selected.
    pub fn remove(&mut self, category: MenuCategory, product_id: Uuid) -> bool {
        let Some(entry) = self.categories.get_mut(&category) else {
            return false;
        };
        if !entry.ids.remove(&product_id) {
            return false;
        }
        entry.ordered.retain(|p| p.id != product_id);
        if entry.ordered.is_empty() {
            self.categories.remove(&category);
        }
        true
    }

    pub fn contains(&self, category: MenuCategory, product_id: Uuid) -> bool {
        self.categories
            .get(&category)
            .is_some_and(|entry| entry.ids.contains(&product_id))
    }

    /// Adds the product if absent, removes it if present.
    /// Returns `true` when the product ends up selected.
    pub fn toggle(&mut self, category: MenuCategory, product: Product) -> bool {
        if self.contains(category, product.id) {
            self.remove(category, product.id);
            false
        } else {
            self.add(category, product)
        }
    }

    pub fn products(&self, category: MenuCategory) -> &[Product] {
        self.categories
            .get(&category)
            .map(|entry| entry.ordered.as_slice())
            .unwrap_or(&[])
    }

    pub fn first(&self, category: MenuCategory) -> Option<&Product> {
        self.products(category).first()
    }

    pub fn count(&self, category: MenuCategory) -> usize {
        self.products(category).len()
    }

    pub fn total(&self) -> usize {
        self.categories.values().map(|entry| entry.ordered.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn clear(&mut self) {
        self.categories.clear();
    }

    /// Non-empty categories in wizard order.
    pub fn iter(&self) -> impl Iterator<Item = (MenuCategory, &[Product])> {
        self.categories
            .iter()
            .map(|(category, entry)| (*category, entry.ordered.as_slice()))
    }

    /// Rebuilds a selection from persisted rows.
    ///
    /// Rows are grouped by the category mapped from their external id and sorted by
    /// their stored order. Rows whose category is unknown are skipped.
    pub fn from_rows(rows: &[MenuSelection]) -> Self {
        let mut sorted: Vec<&MenuSelection> = rows.iter().collect();
        sorted.sort_by_key(|row| row.order);

        let mut selection = Self::new();
        for row in sorted {
            if let Some(category) = row.category() {
                selection.add(
                    category,
                    Product::from_snapshot(
                        row.product_id,
                        row.product_name_snapshot.clone(),
                        category,
                    ),
                );
            }
        }
        selection
    }

    /// Persisted projection of this selection for the given menu.
    pub fn to_rows(&self, daily_menu_id: Uuid) -> Vec<MenuSelection> {
        self.iter()
            .flat_map(|(category, products)| {
                products
                    .iter()
                    .enumerate()
                    .map(move |(order, product)| MenuSelection {
                        daily_menu_id,
                        product_id: product.id,
                        category_external_id: category.external_id(),
                        category_name: category.display_name().to_string(),
                        product_name_snapshot: product.name.clone(),
                        order: order as u32,
                    })
            })
            .collect()
    }
}

/// Planned quantities for selected proteínas, each at least one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProteinQuantities {
    quantities: HashMap<Uuid, u32>,
}

impl ProteinQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, product_id: Uuid, quantity: u32) {
        self.quantities.insert(product_id, quantity.max(1));
    }

    /// Seeds the default only when no quantity was planned yet.
    pub fn ensure_default(&mut self, product_id: Uuid) {
        self.quantities
            .entry(product_id)
            .or_insert(DEFAULT_PROTEIN_QUANTITY);
    }

    pub fn remove(&mut self, product_id: Uuid) {
        self.quantities.remove(&product_id);
    }

    pub fn get(&self, product_id: Uuid) -> Option<u32> {
        self.quantities.get(&product_id).copied()
    }

    pub fn get_or_default(&self, product_id: Uuid) -> u32 {
        self.get(product_id)
            .unwrap_or(MenuCategory::Proteinas.default_planned_quantity())
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
    }

    pub fn from_rows(rows: &[PersistedProteinQuantity]) -> Self {
        let mut quantities = Self::new();
        for row in rows {
            quantities.set(row.product_id, row.planned_quantity);
        }
        quantities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(name: &str, category: MenuCategory) -> Product {
        Product::from_snapshot(Uuid::new_v4(), name.to_string(), category)
    }

    fn names(selection: &Selection, category: MenuCategory) -> Vec<String> {
        selection
            .products(category)
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }

    #[test]
    fn should_add_product_once_per_category() {
        let mut selection = Selection::new();
        let arroz = product("Arroz", MenuCategory::Principios);

        assert!(selection.add(MenuCategory::Principios, arroz.clone()));
        assert!(!selection.add(MenuCategory::Principios, arroz.clone()));
        assert_eq!(selection.count(MenuCategory::Principios), 1);
        assert!(selection.contains(MenuCategory::Principios, arroz.id));
        assert!(!selection.contains(MenuCategory::Proteinas, arroz.id));
    }

    #[test]
    fn should_remove_product_when_toggled_while_present() {
        let mut selection = Selection::new();
        let pollo = product("Pollo", MenuCategory::Proteinas);

        assert!(selection.toggle(MenuCategory::Proteinas, pollo.clone()));
        assert!(!selection.toggle(MenuCategory::Proteinas, pollo.clone()));
        assert!(selection.is_empty());
    }

    #[test]
    fn should_iterate_categories_in_wizard_order() {
        let mut selection = Selection::new();
        selection.add(MenuCategory::Bebidas, product("Limonada", MenuCategory::Bebidas));
        selection.add(MenuCategory::Entradas, product("Sopa", MenuCategory::Entradas));

        let order: Vec<MenuCategory> = selection.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec![MenuCategory::Entradas, MenuCategory::Bebidas]);
    }

    #[test]
    fn should_rebuild_selection_from_rows_in_stored_order() {
        let mut selection = Selection::new();
        selection.add(MenuCategory::Principios, product("Arroz", MenuCategory::Principios));
        selection.add(MenuCategory::Principios, product("Frijoles", MenuCategory::Principios));
        selection.add(MenuCategory::Proteinas, product("Res", MenuCategory::Proteinas));

        let menu_id = Uuid::new_v4();
        let mut rows = selection.to_rows(menu_id);
        rows.reverse();
        let rebuilt = Selection::from_rows(&rows);

        assert_eq!(
            names(&rebuilt, MenuCategory::Principios),
            vec!["Arroz", "Frijoles"]
        );
        assert_eq!(names(&rebuilt, MenuCategory::Proteinas), vec!["Res"]);
        assert!(rows.iter().all(|r| r.daily_menu_id == menu_id));
    }

    #[test]
    fn should_skip_rows_with_unknown_category() {
        let rows = vec![MenuSelection {
            daily_menu_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            category_external_id: Uuid::new_v4(),
            category_name: "Postres".to_string(),
            product_name_snapshot: "Flan".to_string(),
            order: 0,
        }];

        assert!(Selection::from_rows(&rows).is_empty());
    }

    #[test]
    fn should_clamp_protein_quantity_to_one() {
        let mut quantities = ProteinQuantities::new();
        let id = Uuid::new_v4();

        quantities.set(id, 0);
        assert_eq!(quantities.get(id), Some(1));
        quantities.set(id, 25);
        assert_eq!(quantities.get(id), Some(25));
    }

    #[test]
    fn should_keep_planned_quantity_when_default_seeded_again() {
        let mut quantities = ProteinQuantities::new();
        let id = Uuid::new_v4();

        quantities.ensure_default(id);
        assert_eq!(quantities.get(id), Some(DEFAULT_PROTEIN_QUANTITY));
        quantities.set(id, 3);
        quantities.ensure_default(id);
        assert_eq!(quantities.get(id), Some(3));
        assert_eq!(quantities.get_or_default(Uuid::new_v4()), DEFAULT_PROTEIN_QUANTITY);
    }

    proptest! {
        #[test]
        fn should_restore_membership_and_order_when_toggled_twice(
            count in 1usize..8,
            pick in 0usize..8,
        ) {
            let mut selection = Selection::new();
            let products: Vec<Product> = (0..count)
                .map(|i| product(&format!("Producto {i}"), MenuCategory::Acompanamientos))
                .collect();
            for p in &products {
                selection.add(MenuCategory::Acompanamientos, p.clone());
            }
            let before = selection.clone();
            let target = products[pick % count].clone();

            selection.toggle(MenuCategory::Acompanamientos, target.clone());
            selection.toggle(MenuCategory::Acompanamientos, target.clone());

            let others_before: Vec<Uuid> = before
                .products(MenuCategory::Acompanamientos)
                .iter()
                .filter(|p| p.id != target.id)
                .map(|p| p.id)
                .collect();
            let others_after: Vec<Uuid> = selection
                .products(MenuCategory::Acompanamientos)
                .iter()
                .filter(|p| p.id != target.id)
                .map(|p| p.id)
                .collect();
            prop_assert!(selection.contains(MenuCategory::Acompanamientos, target.id));
            prop_assert_eq!(others_before, others_after);
            prop_assert_eq!(selection.total(), count);
        }
    }
}
