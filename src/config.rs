use config::{Config, Environment, Map};
use serde::Deserialize;
use thiserror::Error;

/// 既定の待ち受けポート
const DEFAULT_PORT: u16 = 3000;

/// 環境変数のプレフィックス（`LIBRARY_SEED_SAMPLE_DATA` など）
const ENV_PREFIX: &str = "LIBRARY";

/// 設定読み込みのエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 設定値の取得・型変換に失敗した
    #[error("Failed to load configuration")]
    Load(#[from] config::ConfigError),
}

/// アプリケーション設定
///
/// 起動時に一度だけ読み込み、値として渡す。ライブラリ側は参照しない。
///
/// | 環境変数 | 既定値 |
/// |---|---|
/// | `PORT` | 3000 |
/// | `LIBRARY_SEED_SAMPLE_DATA` | true |
/// | `LIBRARY_NOTIFICATIONS` | true |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    /// サンプル蔵書を投入したストアで起動するか
    pub seed_sample_data: bool,
    /// メール通知サービスを注入するか
    pub notifications: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed_sample_data: true,
            notifications: true,
        }
    }
}

impl AppConfig {
    /// プロセスの環境変数から読み込む（未設定の項目は既定値）
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// 環境変数のマップから読み込む
    ///
    /// `LIBRARY_`で始まる変数を設定キーに対応付け、`PORT`はそのまま`port`を上書きする。
    pub fn from_vars(vars: Map<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = vars.get("PORT").cloned();

        let config = Config::builder()
            .set_default("port", i64::from(defaults.port))?
            .set_default("seed_sample_data", defaults.seed_sample_data)?
            .set_default("notifications", defaults.notifications)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .set_override_option("port", port)?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
