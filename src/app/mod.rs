// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the pizzeria window.

use anyhow::{Result, anyhow};
use eframe::egui;
use egui_phosphor::Variant;

use crate::config::AppConfig;
use crate::ui::PizzeriaApp;

/// Title used for the native window and the eframe app id.
pub const APP_TITLE: &str = "Pizzeria";

/// Bootstrap the desktop application and run the main egui event loop.
///
/// # Errors
///
/// Returns an error when the native window or its rendering backend cannot
/// be created.
pub fn run(config: &AppConfig) -> Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size(config.inner_size())
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    let [width, height] = config.inner_size();
    tracing::info!(width, height, "opening main window");

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(PizzeriaApp::default()))
        }),
    )
    .map_err(|err| anyhow!("failed to run the {APP_TITLE} window: {err}"))
}
