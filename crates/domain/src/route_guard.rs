//! # ルートガード
//!
//! ページ遷移を許可するか、ホーム（`/`）へリダイレクトするかを決定する。
//!
//! ## 設計判断
//!
//! 認証状態と実行モードは [`AuthEnvironment`] として引数で受け取る。
//! ルートに宣言されたアクセス属性も [`RouteAccessMetadata`] という素のデータで受け取り、
//! ルーティング層の仕組みには依存しない。これにより [`decide`] は
//! 副作用のない全域関数になり、並行に何度呼んでも同じ結果を返す。
//!
//! ## 判定順序
//!
//! 上から順に評価し、最初に一致した規則の結果を返す。
//!
//! | # | 条件 | 結果 |
//! |---|------|------|
//! | 1 | `is_public` | Allow |
//! | 2 | 開発モード かつ `is_dev_only` | Allow |
//! | 3 | パスが `/` | Allow |
//! | 4 | 一致ルート 0 件 かつ 認証済み | Allow |
//! | 5 | 未認証 または 一致ルート 0 件 | RedirectHome |
//! | 6 | それ以外 | Allow |
//!
//! 規則 4 と 5 の非対称性は意図したもの。認証済みユーザーには「ページが見つかりません」
//! 画面を表示し、未認証ユーザーには存在しないパスでも一律にホームへ戻すことで、
//! どのパスが存在するかを外部から探られないようにする。

use serde::{Deserialize, Serialize};

/// ホームのパス
pub const HOME_PATH: &str = "/";

/// ルートごとに宣言されるアクセス属性
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAccessMetadata {
    /// 認証不要のルート
    #[serde(default, rename = "public")]
    pub is_public:   bool,
    /// 開発モードでのみ到達可能なルート（認証をバイパスする）
    #[serde(default, rename = "devOnly")]
    pub is_dev_only: bool,
}

impl RouteAccessMetadata {
    /// 公開ルート
    pub const fn public() -> Self {
        Self {
            is_public:   true,
            is_dev_only: false,
        }
    }

    /// 開発専用ルート
    pub const fn dev_only() -> Self {
        Self {
            is_public:   false,
            is_dev_only: true,
        }
    }

    /// 認証が必要なルート（既定値）
    pub const fn private() -> Self {
        Self {
            is_public:   false,
            is_dev_only: false,
        }
    }
}

/// 呼び出し側が用意する認証・実行環境のスナップショット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthEnvironment {
    pub is_authenticated:    bool,
    pub is_development_mode: bool,
}

/// 1 回の遷移試行ごとに組み立てる遷移コンテキスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationContext {
    /// 遷移先のパス
    pub target_path:         String,
    /// 遷移先に一致した登録ルートの数（0 は「存在しない」）
    pub matched_route_count: usize,
}

impl NavigationContext {
    pub fn new(target_path: impl Into<String>, matched_route_count: usize) -> Self {
        Self {
            target_path: target_path.into(),
            matched_route_count,
        }
    }

    /// このコンテキストで [`decide`] を呼ぶ
    pub fn decide(&self, metadata: &RouteAccessMetadata, env: &AuthEnvironment) -> AuthAction {
        decide(metadata, &self.target_path, self.matched_route_count, env)
    }
}

/// 遷移の判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AuthAction {
    /// そのまま遷移する
    Allow,
    /// ホームへリダイレクトする
    RedirectHome,
}

/// 遷移を許可するかどうかを決定する
///
/// 判定順序はモジュールドキュメントを参照。
///
/// # 例
///
/// ```rust
/// use lazypeople_domain::route_guard::{AuthAction, AuthEnvironment, RouteAccessMetadata, decide};
///
/// let env = AuthEnvironment {
///     is_authenticated:    true,
///     is_development_mode: false,
/// };
///
/// // 認証済みユーザーが存在しないパスへ遷移した場合は 404 画面を表示させる
/// assert_eq!(
///     decide(&RouteAccessMetadata::default(), "/non-existent", 0, &env),
///     AuthAction::Allow
/// );
/// ```
pub fn decide(
    metadata: &RouteAccessMetadata,
    target_path: &str,
    matched_route_count: usize,
    env: &AuthEnvironment,
) -> AuthAction {
    if metadata.is_public {
        return AuthAction::Allow;
    }

    // 開発モード以外では dev_only は効果を持たない
    if env.is_development_mode && metadata.is_dev_only {
        return AuthAction::Allow;
    }

    if target_path == HOME_PATH {
        return AuthAction::Allow;
    }

    // ここに到達した時点でパスは `/` ではなく、公開ルートでもない
    if matched_route_count == 0 && env.is_authenticated {
        return AuthAction::Allow;
    }

    if !env.is_authenticated || matched_route_count == 0 {
        return AuthAction::RedirectHome;
    }

    AuthAction::Allow
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn env(is_authenticated: bool, is_development_mode: bool) -> AuthEnvironment {
        AuthEnvironment {
            is_authenticated,
            is_development_mode,
        }
    }

    const PATHS: &[&str] = &["/", "/login", "/dashboard", "/debug", "/non-existent"];
    const COUNTS: &[usize] = &[0, 1, 2];

    fn all_metadata() -> Vec<RouteAccessMetadata> {
        [(false, false), (true, false), (false, true), (true, true)]
            .into_iter()
            .map(|(is_public, is_dev_only)| RouteAccessMetadata {
                is_public,
                is_dev_only,
            })
            .collect()
    }

    fn all_envs() -> Vec<AuthEnvironment> {
        [(false, false), (true, false), (false, true), (true, true)]
            .into_iter()
            .map(|(a, d)| env(a, d))
            .collect()
    }

    // ===== 代表シナリオ =====

    #[rstest]
    #[case::公開ページは直接許可(RouteAccessMetadata::public(), "/login", 1, env(false, false), AuthAction::Allow)]
    #[case::開発モードの開発専用ページは許可(RouteAccessMetadata::dev_only(), "/debug", 1, env(false, true), AuthAction::Allow)]
    #[case::ホームは暗黙的に公開(RouteAccessMetadata::default(), "/", 1, env(false, false), AuthAction::Allow)]
    #[case::認証済みで存在しないパスは許可(RouteAccessMetadata::default(), "/non-existent", 0, env(true, false), AuthAction::Allow)]
    #[case::未認証で存在しないパスはホームへ(RouteAccessMetadata::default(), "/non-existent", 0, env(false, false), AuthAction::RedirectHome)]
    #[case::未認証で非公開ページはホームへ(RouteAccessMetadata::default(), "/dashboard", 1, env(false, false), AuthAction::RedirectHome)]
    #[case::認証済みで非公開ページは許可(RouteAccessMetadata::default(), "/dashboard", 1, env(true, false), AuthAction::Allow)]
    fn test_代表シナリオ(
        #[case] metadata: RouteAccessMetadata,
        #[case] path: &str,
        #[case] matched: usize,
        #[case] env: AuthEnvironment,
        #[case] expected: AuthAction,
    ) {
        assert_eq!(decide(&metadata, path, matched, &env), expected);
    }

    #[test]
    fn test_本番モードでは開発専用ページも認証が必要() {
        let metadata = RouteAccessMetadata::dev_only();

        assert_eq!(
            decide(&metadata, "/debug", 1, &env(false, false)),
            AuthAction::RedirectHome
        );
        assert_eq!(
            decide(&metadata, "/debug", 1, &env(true, false)),
            AuthAction::Allow
        );
    }

    #[test]
    fn test_公開かつ開発専用のルートはどのモードでも許可() {
        let metadata = RouteAccessMetadata {
            is_public:   true,
            is_dev_only: true,
        };

        for env in all_envs() {
            assert_eq!(decide(&metadata, "/debug", 0, &env), AuthAction::Allow);
        }
    }

    // ===== 性質テスト（入力領域の全探索） =====

    #[test]
    fn test_公開ルートは常に許可() {
        for env in all_envs() {
            for &path in PATHS {
                for &count in COUNTS {
                    for is_dev_only in [false, true] {
                        let metadata = RouteAccessMetadata {
                            is_public: true,
                            is_dev_only,
                        };
                        assert_eq!(decide(&metadata, path, count, &env), AuthAction::Allow);
                    }
                }
            }
        }
    }

    #[test]
    fn test_本番モードのdev_onlyは判定に影響しない() {
        for is_authenticated in [false, true] {
            let env = env(is_authenticated, false);
            for &path in PATHS.iter().filter(|p| **p != HOME_PATH) {
                for &count in COUNTS {
                    assert_eq!(
                        decide(&RouteAccessMetadata::dev_only(), path, count, &env),
                        decide(&RouteAccessMetadata::private(), path, count, &env),
                        "path={path} count={count} auth={is_authenticated}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_ホームは非公開属性でも常に許可() {
        for env in all_envs() {
            for &count in COUNTS {
                assert_eq!(
                    decide(&RouteAccessMetadata::private(), HOME_PATH, count, &env),
                    AuthAction::Allow
                );
            }
        }
    }

    #[rstest]
    #[case(true, 0, AuthAction::Allow)]
    #[case(false, 0, AuthAction::RedirectHome)]
    #[case(false, 1, AuthAction::RedirectHome)]
    #[case(false, 3, AuthAction::RedirectHome)]
    #[case(true, 1, AuthAction::Allow)]
    #[case(true, 3, AuthAction::Allow)]
    fn test_非公開ルートは認証状態と一致数で決まる(
        #[case] is_authenticated: bool,
        #[case] matched: usize,
        #[case] expected: AuthAction,
    ) {
        for &path in &["/dashboard", "/non-existent", "/rescue/abc"] {
            for is_development_mode in [false, true] {
                let env = env(is_authenticated, is_development_mode);
                assert_eq!(
                    decide(&RouteAccessMetadata::private(), path, matched, &env),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_判定は決定的である() {
        for metadata in all_metadata() {
            for env in all_envs() {
                for &path in PATHS {
                    for &count in COUNTS {
                        let first = decide(&metadata, path, count, &env);
                        let second = decide(&metadata, path, count, &env);
                        assert_eq!(first, second);
                    }
                }
            }
        }
    }

    #[test]
    fn test_navigation_contextからの判定はdecideと一致する() {
        let ctx = NavigationContext::new("/dashboard", 1);
        let metadata = RouteAccessMetadata::default();

        assert_eq!(
            ctx.decide(&metadata, &env(false, false)),
            AuthAction::RedirectHome
        );
        assert_eq!(ctx.decide(&metadata, &env(true, false)), AuthAction::Allow);
    }

    #[test]
    fn test_auth_actionのシリアライズ形式() {
        assert_eq!(
            serde_json::to_value(AuthAction::Allow).unwrap(),
            serde_json::json!("allow")
        );
        assert_eq!(
            serde_json::to_value(AuthAction::RedirectHome).unwrap(),
            serde_json::json!("redirect-home")
        );
        assert_eq!(AuthAction::RedirectHome.to_string(), "redirect-home");
    }

    #[test]
    fn test_メタデータは省略時にfalseになる() {
        let metadata: RouteAccessMetadata = serde_json::from_str("{}").unwrap();
        assert_eq!(metadata, RouteAccessMetadata::private());

        let metadata: RouteAccessMetadata =
            serde_json::from_str(r#"{ "public": true }"#).unwrap();
        assert_eq!(metadata, RouteAccessMetadata::public());
    }
}
