#![allow(warnings)]
//! Food Passport Frontend Entry Point

mod app;
mod backend;
mod components;
mod constants;
mod context;
mod error;
mod gemini;
mod models;
mod share;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
