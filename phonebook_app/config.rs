use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub struct Config {
    pub http_port: u16,
    pub contact_api_base_url: String,
    pub redelivery_delay: Duration,
    pub max_delivery_attempts: u32,
    pub max_location_len: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let http_port = match env::var("PHONEBOOK_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        let contact_api_base_url = match env::var("PHONEBOOK_CONTACT_API_URL") {
            Ok(val) => val,
            Err(_) => format!("http://127.0.0.1:{http_port}"),
        };

        let redelivery_delay_ms = match env::var("PHONEBOOK_REDELIVERY_DELAY_MS") {
            Ok(val) => val.parse::<u64>().unwrap_or(1000),
            Err(_) => 1000,
        };

        let max_delivery_attempts = match env::var("PHONEBOOK_MAX_DELIVERY_ATTEMPTS") {
            Ok(val) => val.parse::<u32>().unwrap_or(5).max(1),
            Err(_) => 5,
        };

        let max_location_len = match env::var("PHONEBOOK_MAX_LOCATION_LEN") {
            Ok(val) => val.parse::<usize>().unwrap_or(128),
            Err(_) => 128,
        };

        Self {
            http_port,
            contact_api_base_url,
            redelivery_delay: Duration::from_millis(redelivery_delay_ms),
            max_delivery_attempts,
            max_location_len,
        }
    }
}
