use qigen::{server, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => println!("✅ .env file loaded"),
        Err(_) => println!("⚠️  No .env file found, using system environment variables"),
    }

    qigen::logger::init_with_config(qigen::logger::LoggerConfig::development())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let config = Config::from_env();
    let status = config.dashscope.status();

    if status.configured {
        log::info!("✅ DashScope credentials found in environment");
        if let Some(key) = &config.dashscope.api_key {
            log::debug!("API key starts with: {}...", &key[..5.min(key.len())]);
        }
    } else {
        if !status.has_key {
            log::warn!("⚠️  DASHSCOPE_API_KEY is not set");
        }
        if !status.has_url {
            log::warn!("⚠️  DASHSCOPE_API_URL is not set");
        }
        log::warn!("Image generation will fail until DashScope is configured");
    }

    server::run(config).await
}
