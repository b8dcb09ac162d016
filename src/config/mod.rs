use std::env;

/// Application configuration, loaded once at startup and passed explicitly to
/// whoever needs it. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub upload_root_dir: String,
    pub upload_max_bytes: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            upload_root_dir: env::var("UPLOAD_ROOT_DIR").unwrap_or_else(|_| "./uploads".to_string()),
            upload_max_bytes: env::var("UPLOAD_MAX_BYTES")
                .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
                .parse()
                .expect("UPLOAD_MAX_BYTES must be a valid number"),
        }
    }
}
