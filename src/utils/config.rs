use dotenv::dotenv;
use std::env;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_name: String,
    pub server_address: String,
}

impl AppConfig {

    pub fn global() -> &'static AppConfig {
        CONFIG.get_or_init(|| {
            dotenv().ok();

            AppConfig {
                database_url: env::var("DATABASE_URL")
                    .expect("DATABASE_URL environment variable must be set"),
                database_name: env::var("DATABASE_NAME")
                    .unwrap_or_else(|_| "petclinic".to_string()),
                server_address: env::var("SERVER_ADDRESS")
                    .unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_is_singleton() {
        temp_env::with_vars(vec![
            ("DATABASE_URL", Some("mongodb://localhost:27017")),
            ("DATABASE_NAME", Some("petclinic_test")),
            ("SERVER_ADDRESS", Some("127.0.0.1:9090")),
        ], || {
            let config1 = AppConfig::global();
            let config2 = AppConfig::global();

            assert!(std::ptr::eq(config1, config2));
        });
    }
}
