use log::{error, info};

use quantbrief_frontend::config;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting QuantBrief page script");
    if let Err(e) = quantbrief_frontend::run_when_ready() {
        error!("Page script did not start: {}", e);
    }
}
