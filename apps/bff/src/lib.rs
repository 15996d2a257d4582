//! # BFF (Backend for Frontend) ライブラリ
//!
//! ブラウザと外部バックエンドの間に立つ API サーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: State とルーターの組み立て
//! - `client`: 外部バックエンドクライアント
//! - `config`: 環境変数からの設定読み込み
//! - `error`: ハンドラ共通のエラーと外部バックエンドエラーの整形
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（ページガード、キャッシュ制御、Request ID）
//! - `session`: Cookie による認証状態

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod session;
