mod app;
mod config;
mod models;
mod mvu;
mod ui;

use clap::Parser;

use crate::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    config::init_tracing(&config);
    app::run(&config)
}
