// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Seed data for the session's menu.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::models::pizza::{Crust, Pizza};
use crate::models::topping::Topping;

/// Fixed, read-only list of pizzas available for the session.
#[derive(Clone, Debug)]
pub struct Catalog {
    menu: Arc<[Pizza]>,
}

impl Catalog {
    /// Build the catalog from the literal seed data.
    pub fn new() -> Self {
        let half = || Decimal::new(50, 2);
        let base = || [Topping::new("Tomato", half()), Topping::new("Mozzarella", half())];
        let with = |extra: Topping| base().into_iter().chain(std::iter::once(extra));

        let menu: Arc<[Pizza]> = Arc::from([
            Pizza::new("Margherita", Crust::Thin, base()),
            Pizza::new(
                "Pepperoni",
                Crust::Thin,
                with(Topping::new("Pepperoni", Decimal::new(100, 2))),
            ),
            Pizza::new("Olive", Crust::Thin, with(Topping::new("Olives", half()))),
            Pizza::new("Funghi", Crust::Thin, with(Topping::new("Mushrooms", half()))),
        ]);
        tracing::debug!(pizzas = menu.len(), "catalog seeded");

        Self { menu }
    }

    /// Pizzas in seed order.
    pub fn menu(&self) -> &[Pizza] {
        &self.menu
    }

    /// Shared handle to the same pizza list, for read-only views.
    pub fn shared_menu(&self) -> Arc<[Pizza]> {
        Arc::clone(&self.menu)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
