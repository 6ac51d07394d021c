use dotenv::dotenv;
use tracing::{info, warn};

use exwork_backend::app::app::App;
use exwork_backend::util::logger::Logger;

#[tokio::main]
async fn main() {
    // Load environment variables before the logger reads its own settings
    let dotenv_result = dotenv();

    let _logger = Logger::new().expect("Failed to initialize logging");

    match dotenv_result {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    info!("🚀 Starting ExWork Backend Application");

    let app = App::new().await;
    app.start().await;
}
