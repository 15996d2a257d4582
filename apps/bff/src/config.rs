//! # BFF 設定
//!
//! 環境変数から BFF サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 既定値 | 説明 |
//! |--------|------|--------|------|
//! | `BFF_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `BFF_PORT` | **Yes** | - | ポート番号 |
//! | `REMOTE_API_BASE` | No | `https://lazypeople.zeabur.app/api` | 外部バックエンドのベース URL |
//! | `DEV_MODE` | No | `false` | 開発モード（開発専用ページを認証なしで開ける） |
//! | `COOKIE_SECURE` | No | `true` | 認証 Cookie に `Secure` を付与する |
//! | `FRONTEND_DIST_DIR` | No | `dist` | ビルド済みフロントエンドのディレクトリ |
//! | `MOCK_LATENCY` | No | `true` | モック API でネットワーク遅延を再現する |

use std::{env, path::PathBuf};

use thiserror::Error;

/// 外部バックエンドの既定 URL
pub const DEFAULT_REMOTE_API_BASE: &str = "https://lazypeople.zeabur.app/api";

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
   #[error("{0} が設定されていません")]
   Missing(&'static str),

   #[error("{name} の値が不正です: {value:?}")]
   Invalid { name: &'static str, value: String },
}

/// BFF サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BffConfig {
   /// バインドアドレス
   pub host:              String,
   /// ポート番号
   pub port:              u16,
   /// 外部バックエンドのベース URL（末尾のスラッシュなし）
   pub remote_api_base:   String,
   /// 開発モード
   ///
   /// リリースビルドでは常に無効になる。
   pub dev_mode:          bool,
   /// 認証 Cookie の `Secure` 属性
   pub cookie_secure:     bool,
   /// ビルド済みフロントエンドのディレクトリ
   pub frontend_dist_dir: PathBuf,
   /// モック API の遅延再現
   pub mock_latency:      bool,
}

impl BffConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// テストでプロセスの環境変数を書き換えずに済むよう、読み込み元を差し替えられる。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let port_raw = lookup("BFF_PORT").ok_or(ConfigError::Missing("BFF_PORT"))?;
      let port = port_raw.trim().parse().map_err(|_| ConfigError::Invalid {
         name:  "BFF_PORT",
         value: port_raw.clone(),
      })?;

      let dev_mode = parse_flag("DEV_MODE", lookup("DEV_MODE"), false)?;

      // リリースビルドでは開発モードを強制的に無効化する
      #[cfg(not(debug_assertions))]
      let dev_mode = if dev_mode {
         tracing::warn!("DEV_MODE=true はリリースビルドでは無視されます");
         false
      } else {
         dev_mode
      };

      Ok(Self {
         host: lookup("BFF_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
         port,
         remote_api_base: lookup("REMOTE_API_BASE")
            .unwrap_or_else(|| DEFAULT_REMOTE_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string(),
         dev_mode,
         cookie_secure: parse_flag("COOKIE_SECURE", lookup("COOKIE_SECURE"), true)?,
         frontend_dist_dir: lookup("FRONTEND_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("dist")),
         mock_latency: parse_flag("MOCK_LATENCY", lookup("MOCK_LATENCY"), true)?,
      })
   }
}

/// 真偽値の環境変数をパースする
///
/// `true` / `1` と `false` / `0` を受け付ける（大文字小文字は区別しない）。
/// 空文字列は未設定と同じ扱い。
fn parse_flag(
   name: &'static str,
   value: Option<String>,
   default: bool,
) -> Result<bool, ConfigError> {
   let Some(value) = value else {
      return Ok(default);
   };

   match value.trim() {
      "" => Ok(default),
      v if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
      v if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
      _ => Err(ConfigError::Invalid { name, value }),
   }
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   fn load(vars: &[(&str, &str)]) -> Result<BffConfig, ConfigError> {
      let vars: HashMap<String, String> = vars
         .iter()
         .map(|(k, v)| (k.to_string(), v.to_string()))
         .collect();
      BffConfig::from_lookup(|name| vars.get(name).cloned())
   }

   #[test]
   fn test_必須項目のみで既定値が使われる() {
      let config = load(&[("BFF_PORT", "13000")]).unwrap();

      assert_eq!(
         config,
         BffConfig {
            host:              "0.0.0.0".to_string(),
            port:              13000,
            remote_api_base:   DEFAULT_REMOTE_API_BASE.to_string(),
            dev_mode:          false,
            cookie_secure:     true,
            frontend_dist_dir: PathBuf::from("dist"),
            mock_latency:      true,
         }
      );
   }

   #[test]
   fn test_bff_portが未設定ならエラー() {
      assert_eq!(load(&[]), Err(ConfigError::Missing("BFF_PORT")));
   }

   #[rstest]
   #[case("abc")]
   #[case("70000")]
   #[case("")]
   fn test_bff_portが不正ならエラー(#[case] port: &str) {
      assert!(matches!(
         load(&[("BFF_PORT", port)]),
         Err(ConfigError::Invalid { name: "BFF_PORT", .. })
      ));
   }

   #[test]
   fn test_remote_api_baseの末尾スラッシュを除去する() {
      let config = load(&[
         ("BFF_PORT", "13000"),
         ("REMOTE_API_BASE", "http://localhost:5000/api/"),
      ])
      .unwrap();

      assert_eq!(config.remote_api_base, "http://localhost:5000/api");
   }

   #[rstest]
   #[case("true", true)]
   #[case("TRUE", true)]
   #[case("1", true)]
   #[case("false", false)]
   #[case("False", false)]
   #[case("0", false)]
   fn test_フラグのパース(#[case] value: &str, #[case] expected: bool) {
      let config = load(&[("BFF_PORT", "13000"), ("COOKIE_SECURE", value)]).unwrap();
      assert_eq!(config.cookie_secure, expected);
   }

   #[test]
   fn test_空のフラグは既定値になる() {
      let config = load(&[("BFF_PORT", "13000"), ("MOCK_LATENCY", "")]).unwrap();
      assert!(config.mock_latency);
   }

   #[test]
   fn test_不正なフラグはエラー() {
      assert_eq!(
         load(&[("BFF_PORT", "13000"), ("MOCK_LATENCY", "yes")]),
         Err(ConfigError::Invalid {
            name:  "MOCK_LATENCY",
            value: "yes".to_string(),
         })
      );
   }

   #[cfg(debug_assertions)]
   #[test]
   fn test_デバッグビルドでは開発モードを有効にできる() {
      let config = load(&[("BFF_PORT", "13000"), ("DEV_MODE", "true")]).unwrap();
      assert!(config.dev_mode);
   }
}
