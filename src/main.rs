mod app_core;
mod input;
mod persisted_store;
mod yew_app;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        gloo::console::log!("app: start");
    }
    yew_app::run();
}
