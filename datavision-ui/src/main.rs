//! DataVision Web Client
//!
//! Login screen and work code dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application. Session handling,
//! validation and localization live in the `datavision` core crate; this
//! crate supplies the browser pieces (`localStorage`, the location hash and
//! a fetch transport) and renders the two views.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
