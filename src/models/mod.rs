// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: immutable menu data shared between the page models and the UI.

pub mod catalog;
pub mod pizza;
pub mod topping;

pub use catalog::Catalog;
pub use pizza::Pizza;
