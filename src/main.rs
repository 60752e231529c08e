//! Order Log Frontend Entry Point

mod app;
mod commands;
mod components;
mod crud;
mod fields;
mod grid;
mod logging;
mod models;
mod record;
mod validation;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
