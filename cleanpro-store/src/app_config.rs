use cleanpro_catalog::PricingConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    pub business: BusinessConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessConfig {
    pub name: String,
    pub currency: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Self::defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `CLEANPRO__SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("CLEANPRO").separator("__"));

        builder.build()?.try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("business.name", "CleanPro Edmonton")?
            .set_default("business.currency", "CAD")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};
    use rust_decimal_macros::dec;

    fn from_toml(toml: &str) -> Config {
        Config::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_only() {
        let cfg = from_toml("");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.business.currency, "CAD");
        assert_eq!(cfg.pricing, PricingConfig::default());
    }

    #[test]
    fn test_partial_pricing_override() {
        let cfg = from_toml(
            r#"
            [server]
            port = 3000

            [pricing]
            weekly_multiplier = "0.80"
            commercial_base = "175"
            "#,
        );

        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.pricing.weekly_multiplier, dec!(0.80));
        assert_eq!(cfg.pricing.commercial_base, dec!(175));
        assert_eq!(cfg.pricing.whole_home_base, dec!(80));
    }
}
