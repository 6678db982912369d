// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Page models and their egui views, structured for MVU-style updates.

pub mod menu;

pub use menu::MenuModel;
