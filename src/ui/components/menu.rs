// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Menu page: read-only view over the catalog's pizzas.

use std::sync::Arc;

use eframe::egui;

use crate::models::{Catalog, Pizza};

/// Page model exposing the catalog menu to the view, untouched.
#[derive(Clone, Debug)]
pub struct MenuModel {
    items: Arc<[Pizza]>,
}

impl MenuModel {
    /// Share the catalog's menu; the pizzas themselves are not copied.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            items: catalog.shared_menu(),
        }
    }

    /// Pizzas in catalog order.
    pub fn items(&self) -> &[Pizza] {
        &self.items
    }

    /// Whether both models view the same catalog menu.
    pub fn same_as(&self, other: &MenuModel) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    #[cfg(test)]
    fn shares_storage_with(&self, catalog: &Catalog) -> bool {
        Arc::ptr_eq(&self.items, &catalog.shared_menu())
    }
}

/// Render the menu as one card per pizza.
pub fn view(ui: &mut egui::Ui, model: &MenuModel) {
    if model.items().is_empty() {
        ui.label(
            egui::RichText::new("The menu is empty.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return;
    }

    for (i, pizza) in model.items().iter().enumerate() {
        render_pizza(ui, i, pizza);
        ui.add_space(8.0);
    }
}

/// Name and crust on top, then a two-column grid of toppings and prices.
fn render_pizza(ui: &mut egui::Ui, index: usize, pizza: &Pizza) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.heading(pizza.name());
            ui.label(
                egui::RichText::new(pizza.crust().to_string())
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
        });
        ui.label(
            egui::RichText::new(pizza.topping_names().collect::<Vec<_>>().join(", "))
                .italics(),
        );
        ui.add_space(4.0);

        egui::Grid::new(("toppings_grid", index))
            .num_columns(2)
            .spacing(egui::vec2(24.0, 4.0))
            .striped(true)
            .show(ui, |ui| {
                for topping in pizza.toppings() {
                    ui.label(topping.name());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(topping.price().to_string());
                    });
                    ui.end_row();
                }
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_the_catalog_menu() {
        let catalog = Catalog::new();
        let model = MenuModel::new(&catalog);

        assert!(model.shares_storage_with(&catalog));
        assert_eq!(model.items(), catalog.menu());
        assert!(std::ptr::eq(model.items().as_ptr(), catalog.menu().as_ptr()));
    }

    #[test]
    fn same_as_compares_the_viewed_menu() {
        let catalog = Catalog::new();
        let first = MenuModel::new(&catalog);

        assert!(first.same_as(&MenuModel::new(&catalog)));
        assert!(first.same_as(&first.clone()));
        assert!(!first.same_as(&MenuModel::new(&Catalog::new())));
    }

    #[test]
    fn model_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MenuModel>();
    }

    #[test]
    fn items_keep_catalog_order() {
        let model = MenuModel::new(&Catalog::new());
        let names: Vec<_> = model.items().iter().map(Pizza::name).collect();
        assert_eq!(names, vec!["Margherita", "Pepperoni", "Olive", "Funghi"]);
    }
}
