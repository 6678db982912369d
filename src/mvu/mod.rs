// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel: owns the catalog and the active page.

use crossbeam_channel::{Receiver, Sender};

use crate::models::Catalog;
use crate::ui::components::MenuModel;

/// Identifies a page without carrying its state; sent to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Menu,
}

/// The page currently shown in the main window.
#[derive(Clone, Debug)]
pub enum Page {
    Menu(MenuModel),
}

impl Page {
    pub fn kind(&self) -> PageKind {
        match self {
            Page::Menu(_) => PageKind::Menu,
        }
    }

    /// Whether `other` is the same page showing the same data.
    pub fn same_as(&self, other: &Page) -> bool {
        match (self, other) {
            (Page::Menu(a), Page::Menu(b)) => a.same_as(b),
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppModel {
    catalog: Catalog,
    current_page: Page,
    subscribers: Vec<Sender<PageKind>>,
}

/// Application messages routed through the update function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Msg {
    ShowPage(PageKind),
}

impl AppModel {
    /// Seed the catalog and open on the menu page.
    pub fn new() -> Self {
        let catalog = Catalog::new();
        let current_page = Page::Menu(MenuModel::new(&catalog));
        Self {
            catalog,
            current_page,
            subscribers: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_page(&self) -> &Page {
        &self.current_page
    }

    /// Register for page-change notifications.
    ///
    /// Each change sends the new page kind to every live receiver. Dropped
    /// receivers are forgotten on the next change.
    pub fn subscribe(&mut self) -> Receiver<PageKind> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Replace the active page, notifying subscribers only if it changed.
    pub(crate) fn set_current_page(&mut self, page: Page) {
        let changed = !page.same_as(&self.current_page);
        self.current_page = page;
        if !changed {
            return;
        }

        let kind = self.current_page.kind();
        tracing::debug!(?kind, "active page changed");
        self.notify(kind);
    }

    fn notify(&mut self, kind: PageKind) {
        self.subscribers.retain(|tx| tx.send(kind).is_ok());
    }

    fn build_page(&self, kind: PageKind) -> Page {
        match kind {
            PageKind::Menu => Page::Menu(MenuModel::new(&self.catalog)),
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Update the application model.
pub fn update(model: &mut AppModel, msg: Msg) {
    match msg {
        Msg::ShowPage(kind) => {
            if model.current_page.kind() == kind {
                return;
            }
            let page = model.build_page(kind);
            model.set_current_page(page);
        }
    }
}
