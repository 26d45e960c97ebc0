mod app;
mod components;
mod core;
mod features;
mod utils;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
