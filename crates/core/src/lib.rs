pub mod catalog;
pub mod metrics;
pub mod query;

pub mod config {
    use anyhow::Context;

    const DEFAULT_PORT: u16 = 3000;
    const DEFAULT_ENVIRONMENT: &str = "development";

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub port: u16,
        pub sentry_dsn: Option<String>,
        pub environment: String,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
            let non_empty = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

            let port = match non_empty("PORT") {
                Some(v) => v
                    .trim()
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a valid port number (got {v:?})"))?,
                None => DEFAULT_PORT,
            };

            Ok(Self {
                port,
                sentry_dsn: non_empty("SENTRY_DSN"),
                environment: non_empty("BLAZE_ENVIRONMENT")
                    .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            })
        }
    }

}
