#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    3000
}
