// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the pizzeria window.
//! Handles layout and routes page navigation through the MVU kernel.

pub mod components;

use crossbeam_channel::Receiver;
use eframe::egui;

use crate::mvu::{self, AppModel, Msg, Page, PageKind};
use crate::ui::components::menu;

/// Stateful egui application showing the active page.
pub struct PizzeriaApp {
    model: AppModel,
    inbox: Vec<Msg>,
    page_rx: Receiver<PageKind>,
}

impl Default for PizzeriaApp {
    fn default() -> Self {
        let mut model = AppModel::new();
        let page_rx = model.subscribe();
        Self {
            model,
            inbox: Vec::new(),
            page_rx,
        }
    }
}

impl eframe::App for PizzeriaApp {
    /// Drives a single UI frame: applies queued messages, reacts to page
    /// changes, then renders the top bar and the active page.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for msg in std::mem::take(&mut self.inbox) {
            mvu::update(&mut self.model, msg);
        }

        // A new page needs a fresh layout pass.
        while let Ok(kind) = self.page_rx.try_recv() {
            tracing::debug!(?kind, "showing page");
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(format!("{} Pizzeria", egui_phosphor::regular::PIZZA));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_page_tabs(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| match self.model.current_page() {
                Page::Menu(model) => menu::view(ui, model),
            });
        });
    }
}

impl PizzeriaApp {
    /// One selectable button per page; clicking enqueues `Msg::ShowPage`.
    fn render_page_tabs(&mut self, ui: &mut egui::Ui) {
        let current = self.model.current_page().kind();
        let tab = egui::Button::new(format!("{} Menu", egui_phosphor::regular::LIST))
            .selected(current == PageKind::Menu);
        if ui.add(tab).clicked() {
            self.inbox.push(Msg::ShowPage(PageKind::Menu));
        }
    }

    /// Render how many pizzas the catalog offers.
    fn render_status(&self, ui: &mut egui::Ui) {
        let count = self.model.catalog().menu().len();
        ui.label(
            egui::RichText::new(format!("{count} pizzas on the menu"))
                .color(egui::Color32::from_gray(68)),
        );
    }
}
