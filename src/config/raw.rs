use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("festapp.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.db.is_some());
        assert!(cfg.webserver.is_some());
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r#"
            [db]
            connection-sqlite = "/var/lib/festapp/festapp.db"
            connection-pool-size = 4
            "#,
        )
        .unwrap();
        let db = cfg.db.unwrap();
        assert_eq!("/var/lib/festapp/festapp.db", db.connection_sqlite);
        assert_eq!(4, db.connection_pool_size);
        assert!(cfg.webserver.is_none());
    }

    #[test]
    fn reject_incomplete_db_section() {
        let res: Result<Config, _> = toml::from_str(
            r#"
            [db]
            connection-pool-size = 4
            "#,
        );
        assert!(res.is_err());
    }
}
