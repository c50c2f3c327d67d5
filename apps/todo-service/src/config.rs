//! # Todo Service 設定
//!
//! 環境変数から Todo Service サーバーの設定を読み込む。

use std::env;

use thiserror::Error;

/// デフォルトのバインドアドレス
const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
const DEFAULT_PORT: u16 = 3000;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 環境変数の値が不正
    #[error("{var} の値が不正です: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Todo Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// バインドアドレス
    pub host:               String,
    /// ポート番号
    pub port:               u16,
    /// データベース接続 URL
    pub database_url:       String,
    /// 起動時にストアが空なら初期データを投入するか
    pub seed_default_items: bool,
}

impl TodoConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の取得関数から設定を読み込む
    ///
    /// `lookup` は変数名を受け取り、値があれば `Some` を返す。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("TODO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("TODO_PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "TODO_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let seed_default_items = match lookup("SEED_DEFAULT_ITEMS") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                var: "SEED_DEFAULT_ITEMS",
                value,
            })?,
            None => false,
        };

        Ok(Self {
            host,
            port,
            database_url,
            seed_default_items,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_database_urlのみ設定した場合はデフォルト値が使われる() {
        let config =
            TodoConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/todo")]))
                .unwrap();

        assert_eq!(
            config,
            TodoConfig {
                host:               "0.0.0.0".to_string(),
                port:               3000,
                database_url:       "postgres://localhost/todo".to_string(),
                seed_default_items: false,
            }
        );
    }

    #[test]
    fn test_全ての変数が反映される() {
        let config = TodoConfig::from_lookup(lookup_from(&[
            ("TODO_HOST", "127.0.0.1"),
            ("TODO_PORT", "18080"),
            ("DATABASE_URL", "postgres://db/todo"),
            ("SEED_DEFAULT_ITEMS", "true"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 18080);
        assert!(config.seed_default_items);
    }

    #[test]
    fn test_database_url未設定はmissingエラー() {
        let result = TodoConfig::from_lookup(lookup_from(&[]));

        assert_eq!(result, Err(ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn test_不正なポート番号はinvalidエラー() {
        let result = TodoConfig::from_lookup(lookup_from(&[
            ("TODO_PORT", "abc"),
            ("DATABASE_URL", "postgres://db/todo"),
        ]));

        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                var:   "TODO_PORT",
                value: "abc".to_string(),
            })
        );
    }

    #[rstest]
    #[case("true", Some(true))]
    #[case("1", Some(true))]
    #[case("false", Some(false))]
    #[case("0", Some(false))]
    #[case("yes", None)]
    #[case("", None)]
    fn test_parse_boolの判定(#[case] input: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool(input), expected);
    }

    #[test]
    fn test_seed_default_itemsが不正値ならinvalidエラー() {
        let result = TodoConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/todo"),
            ("SEED_DEFAULT_ITEMS", "yes"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                var: "SEED_DEFAULT_ITEMS",
                ..
            })
        ));
    }
}
