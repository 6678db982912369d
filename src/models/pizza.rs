// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Pizza and crust value types.

use std::fmt;

use crate::models::topping::Topping;

/// Base style of a pizza.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Crust {
    #[default]
    Thin,
}

impl Crust {
    /// Label shown next to the pizza name.
    pub fn label(&self) -> &'static str {
        match self {
            Crust::Thin => "Thin crust",
        }
    }
}

impl fmt::Display for Crust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A menu entry: name, crust and toppings in display order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pizza {
    name: String,
    crust: Crust,
    toppings: Box<[Topping]>,
}

impl Pizza {
    /// Build a pizza, collecting `toppings` into storage owned by the pizza.
    ///
    /// The source collection is consumed (or cloned from, when an iterator over
    /// borrowed items is passed), so later changes to it never reach the pizza.
    pub fn new(
        name: impl Into<String>,
        crust: Crust,
        toppings: impl IntoIterator<Item = Topping>,
    ) -> Self {
        Self {
            name: name.into(),
            crust,
            toppings: toppings.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn crust(&self) -> Crust {
        self.crust
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// Topping names in display order.
    pub fn topping_names(&self) -> impl Iterator<Item = &str> {
        self.toppings.iter().map(Topping::name)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn half(name: &str) -> Topping {
        Topping::new(name, Decimal::new(50, 2))
    }

    #[test]
    fn crust_comes_from_constructor_argument() {
        let pizza = Pizza::new("Margherita", Crust::Thin, vec![half("Tomato")]);
        assert_eq!(pizza.crust(), Crust::Thin);
        assert_eq!(pizza.crust().label(), "Thin crust");
        assert_eq!(pizza.crust().to_string(), "Thin crust");
    }

    #[test]
    fn source_mutation_does_not_reach_pizza() {
        let mut source = vec![half("Tomato"), half("Mozzarella")];
        let pizza = Pizza::new("Margherita", Crust::Thin, source.iter().cloned());

        source.push(half("Olives"));
        source.swap(0, 1);
        source[0] = Topping::new("Anchovies", Decimal::ONE);

        assert_eq!(pizza.toppings().len(), 2);
        assert_eq!(
            pizza.topping_names().collect::<Vec<_>>(),
            vec!["Tomato", "Mozzarella"]
        );
    }

    #[test]
    fn accepts_empty_toppings() {
        let pizza = Pizza::new("Bianca", Crust::Thin, Vec::new());
        assert!(pizza.toppings().is_empty());
        assert_eq!(pizza.topping_names().count(), 0);
    }

    #[test]
    fn keeps_duplicate_toppings_in_order() {
        let pizza = Pizza::new(
            "Double cheese",
            Crust::Thin,
            [half("Mozzarella"), half("Tomato"), half("Mozzarella")],
        );
        assert_eq!(
            pizza.topping_names().collect::<Vec<_>>(),
            vec!["Mozzarella", "Tomato", "Mozzarella"]
        );
    }
}
