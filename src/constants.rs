/// Upstream feeds used when neither the config file nor the environment names one.
pub const DEFAULT_BENEFITS_URL: &str = "https://run.mocky.io/v3/8f75c4b5-ad90-49bb-bc52-f1fc0b4aad02";
pub const DEFAULT_FILTERS_URL: &str = "https://run.mocky.io/v3/b0ddc735-cfc9-410e-9365-137e04e33fcf";
pub const DEFAULT_FICHAS_URL: &str = "https://run.mocky.io/v3/4654cafa-58d8-4846-9256-79841b29a687";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_LOG_DIR: &str = "logs";

// Environment overrides
pub const ENV_BENEFITS_URL: &str = "BENEFICIOS_API_URL";
pub const ENV_FILTERS_URL: &str = "FILTROS_API_URL";
pub const ENV_FICHAS_URL: &str = "FICHAS_API_URL";
pub const ENV_TIMEOUT_SECONDS: &str = "SOURCE_TIMEOUT_SECONDS";
pub const ENV_PORT: &str = "PORT";

pub const SERVICE_NAME: &str = "benefit-report";
pub const REPORT_ROUTE: &str = "/api/v1/beneficios-procesados";
