// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Topping value type.

use std::fmt;

use rust_decimal::Decimal;

/// A named ingredient with its unit price.
///
/// Prices are taken as given; nothing rejects zero or negative amounts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Topping {
    name: String,
    price: Decimal,
}

impl Topping {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_negative_prices() {
        let free = Topping::new("Basil", Decimal::ZERO);
        let refund = Topping::new("Discount", Decimal::new(-25, 2));

        assert_eq!(free.price(), Decimal::ZERO);
        assert_eq!(refund.price(), Decimal::new(-25, 2));
    }

    #[test]
    fn equality_is_by_value() {
        let a = Topping::new("Tomato", Decimal::new(50, 2));
        let b = Topping::new(String::from("Tomato"), Decimal::new(5, 1));

        assert_eq!(a, b);
        assert_ne!(a, Topping::new("Tomato", Decimal::ONE));
    }

    #[test]
    fn display_shows_name_and_price() {
        let topping = Topping::new("Pepperoni", Decimal::new(100, 2));
        assert_eq!(topping.to_string(), "Pepperoni (1.00)");
    }
}
