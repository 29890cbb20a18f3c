#![allow(warnings)]
//! CatMap Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod mapping;
mod models;
mod selection;
mod tree;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
