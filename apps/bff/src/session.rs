//! # 認証セッション
//!
//! 認証状態は 2 つの Cookie だけで表す。サーバー側にセッションストアは持たない。
//!
//! | Cookie | 値 | 用途 |
//! |--------|----|------|
//! | `auth_token` | 外部バックエンドが発行したトークン | ログアウト時の Bearer 認証 |
//! | `user_info` | `AuthUser` の JSON | 再読み込み後のユーザー表示 |
//!
//! Cookie 値のパーセントエンコードは `CookieJar` が読み書きの両方で行う。
//! どちらもフロントエンドから読めるよう `HttpOnly` を付けない。
//! CSRF は `SameSite=Strict` で防ぐ。
//!
//! 「認証済み」はトークンが空でなく、かつユーザー情報を復元できることを指す。

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::{
   CookieJar,
   cookie::{Cookie, SameSite},
};
use lazypeople_domain::{route_guard::AuthEnvironment, user::AuthUser};
use lazypeople_shared::event_log::error::{category, kind};

/// トークンを保持する Cookie 名
pub const AUTH_TOKEN_COOKIE: &str = "auth_token";

/// ユーザー情報を保持する Cookie 名
pub const USER_INFO_COOKIE: &str = "user_info";

/// リクエストの Cookie から復元した認証状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
   pub token: Option<String>,
   pub user:  Option<AuthUser>,
}

impl AuthSession {
   /// Cookie から認証状態を復元する
   ///
   /// `user_info` が壊れている場合はユーザーなしとして扱う。
   pub fn from_jar(jar: &CookieJar) -> Self {
      let token = jar
         .get(AUTH_TOKEN_COOKIE)
         .map(|cookie| cookie.value().to_string())
         .filter(|token| !token.is_empty());
      let user = jar
         .get(USER_INFO_COOKIE)
         .and_then(|cookie| decode_user_info(cookie.value()));

      Self { token, user }
   }

   pub fn is_authenticated(&self) -> bool {
      self.token.is_some() && self.user.is_some()
   }

   /// ルートガードに渡す環境を組み立てる
   pub fn environment(&self, is_development_mode: bool) -> AuthEnvironment {
      AuthEnvironment {
         is_authenticated: self.is_authenticated(),
         is_development_mode,
      }
   }
}

impl<S> FromRequestParts<S> for AuthSession
where
   S: Send + Sync,
{
   type Rejection = Infallible;

   async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
      Ok(Self::from_jar(&CookieJar::from_headers(&parts.headers)))
   }
}

/// `user_info` Cookie の値を生成する
pub fn encode_user_info(user: &AuthUser) -> Result<String, serde_json::Error> {
   serde_json::to_string(user)
}

/// `user_info` Cookie の値を復元する
pub fn decode_user_info(value: &str) -> Option<AuthUser> {
   match serde_json::from_str(value) {
      Ok(user) => Some(user),
      Err(e) => {
         tracing::warn!(
            error.category = category::INTERNAL,
            error.kind = kind::COOKIE,
            "user_info Cookie を復元できません: {}",
            e
         );
         None
      }
   }
}

/// 認証 Cookie の属性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
   /// `Secure` 属性を付与するか
   pub secure: bool,
}

impl CookiePolicy {
   pub fn new(secure: bool) -> Self {
      Self { secure }
   }

   /// `auth_token` Cookie を構築する
   pub fn token_cookie(&self, token: &str) -> Cookie<'static> {
      self.build(AUTH_TOKEN_COOKIE, token.to_string())
   }

   /// `user_info` Cookie を構築する
   pub fn user_info_cookie(&self, user: &AuthUser) -> Result<Cookie<'static>, serde_json::Error> {
      Ok(self.build(USER_INFO_COOKIE, encode_user_info(user)?))
   }

   /// Cookie をクリアするための Cookie を構築する
   pub fn clear_cookie(&self, name: &'static str) -> Cookie<'static> {
      let mut cookie = self.build(name, String::new());
      cookie.set_max_age(time::Duration::seconds(0));
      cookie
   }

   /// 認証 Cookie をすべてクリアした Jar を返す
   pub fn clear_all(&self, jar: CookieJar) -> CookieJar {
      jar.add(self.clear_cookie(AUTH_TOKEN_COOKIE))
         .add(self.clear_cookie(USER_INFO_COOKIE))
   }

   fn build(&self, name: &'static str, value: String) -> Cookie<'static> {
      Cookie::build((name, value))
         .path("/")
         .http_only(false)
         .secure(self.secure)
         .same_site(SameSite::Strict)
         .build()
   }
}

#[cfg(test)]
mod tests {
   use axum::http::{HeaderMap, HeaderValue, header};
   use pretty_assertions::assert_eq;

   use super::*;

   fn jar_with(cookies: &str) -> CookieJar {
      let mut headers = HeaderMap::new();
      headers.insert(header::COOKIE, HeaderValue::from_str(cookies).unwrap());
      CookieJar::from_headers(&headers)
   }

   fn user() -> AuthUser {
      AuthUser::new("user@example.com", "user-001")
   }

   /// ブラウザが送り返す `user_info` の値（パーセントエンコード済み）
   const ENCODED_USER_INFO: &str =
      "%7B%22email%22%3A%22user%40example.com%22%2C%22userId%22%3A%22user-001%22%7D";

   #[test]
   fn test_user_infoはcamel_caseのjsonになる() {
      let encoded = encode_user_info(&user()).unwrap();

      assert_eq!(encoded, r#"{"email":"user@example.com","userId":"user-001"}"#);
      assert_eq!(decode_user_info(&encoded), Some(user()));
   }

   #[test]
   fn test_トークンとユーザーが揃えば認証済み() {
      let cookies = format!("auth_token=token-abc; user_info={ENCODED_USER_INFO}");

      let session = AuthSession::from_jar(&jar_with(&cookies));

      assert_eq!(session.token.as_deref(), Some("token-abc"));
      assert_eq!(session.user, Some(user()));
      assert!(session.is_authenticated());
   }

   #[test]
   fn test_トークンのみでは未認証() {
      let session = AuthSession::from_jar(&jar_with("auth_token=token-abc"));

      assert!(!session.is_authenticated());
   }

   #[test]
   fn test_空のトークンは存在しない扱い() {
      let cookies = format!("auth_token=; user_info={ENCODED_USER_INFO}");

      let session = AuthSession::from_jar(&jar_with(&cookies));

      assert_eq!(session.token, None);
      assert!(!session.is_authenticated());
   }

   #[test]
   fn test_壊れたuser_infoはユーザーなしとして扱う() {
      let session = AuthSession::from_jar(&jar_with("auth_token=token-abc; user_info=%7Bbroken"));

      assert_eq!(session.user, None);
      assert!(!session.is_authenticated());
   }

   #[test]
   fn test_環境の組み立て() {
      let env = AuthSession::default().environment(true);

      assert!(!env.is_authenticated);
      assert!(env.is_development_mode);
   }

   #[test]
   fn test_認証cookieの属性() {
      let cookie = CookiePolicy::new(true).token_cookie("token-abc");

      assert_eq!(cookie.name(), "auth_token");
      assert_eq!(cookie.value(), "token-abc");
      assert_eq!(cookie.path(), Some("/"));
      assert_eq!(cookie.secure(), Some(true));
      assert_eq!(cookie.http_only(), Some(false));
      assert_eq!(cookie.same_site(), Some(SameSite::Strict));
   }

   #[test]
   fn test_書き出したuser_infoを読み戻せる() {
      let cookie = CookiePolicy::new(true).user_info_cookie(&user()).unwrap();
      let set_cookie = cookie.encoded().to_string();
      let pair = set_cookie.split(';').next().unwrap();

      assert!(pair.starts_with("user_info=%7B"));
      let session = AuthSession::from_jar(&jar_with(&format!("auth_token=token-abc; {pair}")));
      assert_eq!(session.user, Some(user()));
   }

   #[test]
   fn test_クリア用cookieは有効期限0() {
      let cookie = CookiePolicy::new(false).clear_cookie(USER_INFO_COOKIE);

      assert_eq!(cookie.value(), "");
      assert_eq!(cookie.max_age(), Some(time::Duration::seconds(0)));
      assert_eq!(cookie.secure(), Some(false));
   }
}
