//! Entry point for the listing page bundle: mounts the max-price slider with
//! the default element ids as soon as the module starts.

use log::{error, LevelFilter};
use price_slider::{dom, logging, WidgetConfig};

fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);

    if let Err(e) = dom::mount(&WidgetConfig::default()) {
        error!("Price slider not mounted: {}", e);
    }
}
