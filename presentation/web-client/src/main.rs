mod api;
mod app;
mod catalog;

/// Storefront entry point. Mounts the catalog view onto the document body.
fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
