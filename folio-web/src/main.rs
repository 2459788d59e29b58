use folio_web::{config, App};
use tracing::info;

fn configure_logging() {
    dioxus::logger::init(config::log_level()).expect("Failed to initialize logger");
}

fn main() {
    configure_logging();
    info!("Starting folio at log level {}", config::log_level());
    dioxus::launch(App);
}
