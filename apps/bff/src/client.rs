//! # 外部 API クライアント
//!
//! 外部バックエンド（認証 API）との通信を担当する。

pub mod remote_api;

pub use remote_api::{
    LoginResponse,
    LogoutResponse,
    RegisterResponse,
    RemoteApiError,
    RemoteAuthClient,
    RemoteAuthClientImpl,
    RemoteEndpoints,
    RemoteErrorBody,
};
