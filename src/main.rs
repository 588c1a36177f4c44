use dioxus::prelude::*;

use storyweave::ui::App;

fn main() {
    // Initialize logging for whichever platform we launched on
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt::init();
    #[cfg(target_arch = "wasm32")]
    wasm_logger::init(wasm_logger::Config::default());

    launch(App);
}
