//! トークンの結果コンテナ
//!
//! 解析結果の1単位（表層形と素性の組）を表現する型を提供します。
//! ラティスが解放された後も使えるよう、すべてのデータを所有します。

use crate::feature::Feature;

/// 形態素解析の結果トークン
///
/// 表層形は入力文中に現れた文字列そのものです。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    surface: String,
    feature: Feature,
}

impl Token {
    /// 表層形と素性からトークンを作成します。
    #[inline(always)]
    pub const fn from_parts(surface: String, feature: Feature) -> Self {
        Self { surface, feature }
    }

    /// トークンの表層形を取得します。
    ///
    /// Gets the surface string of the token.
    #[inline(always)]
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// トークンの素性を取得します。
    ///
    /// Gets the decoded feature of the token.
    #[inline(always)]
    pub fn feature(&self) -> &Feature {
        &self.feature
    }

    /// 表層形と素性に分解します。
    pub fn into_parts(self) -> (String, Feature) {
        (self.surface, self.feature)
    }
}

impl From<(String, Feature)> for Token {
    fn from((surface, feature): (String, Feature)) -> Self {
        Self::from_parts(surface, feature)
    }
}

impl From<Token> for (String, Feature) {
    fn from(token: Token) -> Self {
        token.into_parts()
    }
}
