use anyhow::Context;

/// Load `.env` (if present) and the layered configuration.
pub fn load_config() -> anyhow::Result<sio_config::SioConfig> {
    sio_config::SioConfig::load_with_dotenv().context("failed to load sounditout configuration")
}
