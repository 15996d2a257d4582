//! # ページルート表
//!
//! フロントエンドのページ一覧と、各ページのアクセス属性を保持する。
//! 遷移先パスを解決し、[`route_guard::decide`](crate::route_guard::decide) に渡す
//! 「一致したルート数」と「メタデータ」を求める。
//!
//! ## パターン構文
//!
//! - `/dashboard` のようなリテラルセグメント
//! - `/rescue/{id}` のような `{name}` セグメント（空でない任意の 1 セグメントに一致）
//!
//! 末尾のスラッシュは無視する（`/dashboard/` は `/dashboard` と同じ）。
//! 解決前にパスを正規化するため、`/?ref=mail` や `//` はホーム `/` として扱う。

use crate::route_guard::{NavigationContext, RouteAccessMetadata};

/// パターンの 1 セグメント
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param,
}

/// ルートパターン
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// パターン文字列を解析する
    pub fn parse(pattern: &str) -> Self {
        let segments = split_segments(pattern)
            .map(|segment| {
                if segment.starts_with('{') && segment.ends_with('}') {
                    Segment::Param
                } else {
                    Segment::Literal(segment.to_string())
                }
            })
            .collect();

        Self { segments }
    }

    /// パスがこのパターンに一致するか
    pub fn matches(&self, path: &str) -> bool {
        let mut path_segments = split_segments(path);
        for segment in &self.segments {
            let Some(actual) = path_segments.next() else {
                return false;
            };
            if let Segment::Literal(expected) = segment
                && expected != actual
            {
                return false;
            }
        }
        path_segments.next().is_none()
    }
}

/// クエリ文字列・フラグメントを除き、空でないセグメントに分割する
fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty())
}

/// パスを正規化する
///
/// クエリ文字列・フラグメントを除き、連続するスラッシュと末尾のスラッシュを取り除く。
/// 結果は常に `/` で始まる。
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = split_segments(path).collect();
    format!("/{}", segments.join("/"))
}

/// ページルート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    pub pattern: RoutePattern,
    pub meta:    RouteAccessMetadata,
}

impl PageRoute {
    pub fn new(pattern: &str, meta: RouteAccessMetadata) -> Self {
        Self {
            pattern: RoutePattern::parse(pattern),
            meta,
        }
    }
}

/// パス解決の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub navigation: NavigationContext,
    /// 最初に一致したルートのメタデータ（一致なしの場合は既定値）
    pub meta:       RouteAccessMetadata,
}

/// ページルート表
///
/// 登録順を保持する。複数のルートが一致した場合、メタデータは最初の一致から取る。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRouteTable {
    routes: Vec<PageRoute>,
}

impl PageRouteTable {
    pub fn new(routes: Vec<PageRoute>) -> Self {
        Self { routes }
    }

    /// アプリケーションのページ一覧
    ///
    /// `/` は非公開として登録するが、ガード側で暗黙的に公開扱いになる。
    pub fn application() -> Self {
        Self::new(vec![
            PageRoute::new("/", RouteAccessMetadata::private()),
            PageRoute::new("/login", RouteAccessMetadata::public()),
            PageRoute::new("/register", RouteAccessMetadata::public()),
            PageRoute::new("/dashboard", RouteAccessMetadata::private()),
            PageRoute::new("/map", RouteAccessMetadata::private()),
            PageRoute::new("/rescue/new", RouteAccessMetadata::private()),
            PageRoute::new("/rescue/{id}", RouteAccessMetadata::private()),
            PageRoute::new("/debug", RouteAccessMetadata::dev_only()),
        ])
    }

    /// パスを解決する
    ///
    /// 判定に渡す `target_path` は正規化後のパスになる。
    pub fn resolve(&self, path: &str) -> ResolvedRoute {
        let path = normalize_path(path);
        let mut matched = self
            .routes
            .iter()
            .filter(|route| route.pattern.matches(&path));
        let (meta, matched_route_count) = match matched.next() {
            Some(first) => (first.meta, 1 + matched.count()),
            None => (RouteAccessMetadata::default(), 0),
        };

        ResolvedRoute {
            navigation: NavigationContext::new(path, matched_route_count),
            meta,
        }
    }
}
