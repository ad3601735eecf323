use std::env;
use chrono_tz::Tz;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: Option<String>, // Overrides the embedded fixtures when set
    pub log_dir: String,
    pub hotel_tz: Tz,
    pub payment_delay_ms: u64,
    pub draft_reset_after_secs: i64,
    pub draft_idle_ttl_secs: i64,
    pub draft_sweep_interval_secs: u64,
    pub admin_email: String,
    pub admin_password: String,
    pub admin_session_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            data_dir: env::var("DATA_DIR").ok().filter(|d| !d.is_empty()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
            hotel_tz: parse_timezone(&env::var("HOTEL_TIMEZONE").unwrap_or_else(|_| "Africa/Nairobi".to_string())),
            payment_delay_ms: env::var("PAYMENT_DELAY_MS").unwrap_or_else(|_| "2000".to_string()).parse().expect("PAYMENT_DELAY_MS must be a number"),
            draft_reset_after_secs: env::var("DRAFT_RESET_AFTER_SECS").unwrap_or_else(|_| "30".to_string()).parse().expect("DRAFT_RESET_AFTER_SECS must be a number"),
            draft_idle_ttl_secs: env::var("DRAFT_IDLE_TTL_SECS").unwrap_or_else(|_| "3600".to_string()).parse().expect("DRAFT_IDLE_TTL_SECS must be a number"),
            draft_sweep_interval_secs: env::var("DRAFT_SWEEP_INTERVAL_SECS").unwrap_or_else(|_| "5".to_string()).parse().expect("DRAFT_SWEEP_INTERVAL_SECS must be a number"),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| "demo@hotel.com".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "Demo2024!".to_string()),
            admin_session_hours: env::var("ADMIN_SESSION_HOURS").unwrap_or_else(|_| "8".to_string()).parse().expect("ADMIN_SESSION_HOURS must be a number"),
        }
    }
}

fn parse_timezone(name: &str) -> Tz {
    name.parse()
        .unwrap_or_else(|_| panic!("HOTEL_TIMEZONE must be a valid IANA zone, got '{}'", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("Africa/Nairobi"), chrono_tz::Africa::Nairobi);
        assert_eq!(parse_timezone("UTC"), chrono_tz::UTC);
    }

    #[test]
    #[should_panic(expected = "HOTEL_TIMEZONE must be a valid IANA zone")]
    fn test_misspelled_timezone_is_rejected() {
        parse_timezone("Africa/Nairobbi");
    }
}
