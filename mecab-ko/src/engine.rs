//! 解析エンジンの抽象化
//!
//! ネイティブのタガーを「ラティスを作り、解析し、ノードを列挙する」能力として
//! 表現します。具象実装は[`native::NativeEngine`]のみですが、この境界により
//! デコーダやアナライザをエンジンから独立してテストできます。

pub mod native;

use std::borrow::Cow;
use std::ops::BitOr;

/// ラティスの要求タイプ
///
/// MeCabの `MECAB_*` 要求フラグに対応するビット集合です。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RequestType(i32);

impl RequestType {
    /// 1-bestの解析結果のみを要求します。
    pub const ONE_BEST: Self = Self(1);

    /// 入力文をラティス内にコピーします。
    ///
    /// このフラグがない場合、エンジンは呼び出し間でトークンのメモリを再利用するため、
    /// 各ノードを個別に参照できなくなります。
    pub const ALLOCATE_SENTENCE: Self = Self(64);

    /// フラグのビット値を返します。
    #[inline(always)]
    pub const fn bits(self) -> i32 {
        self.0
    }

    /// `other` のフラグをすべて含むかどうかを返します。
    #[inline(always)]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for RequestType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// 解析済みラティスの1ノード
///
/// 表層形と生の素性文字列を借用します。文頭・文末ノードは含まれません。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawNode<'a> {
    /// 表層形
    pub surface: Cow<'a, str>,
    /// 8フィールドの素性文字列
    pub feature: Cow<'a, str>,
}

/// エンジンが管理する文単位の作業バッファ
///
/// 値がドロップされた時点でバッファが解放されなければなりません。
pub trait EngineLattice {
    /// ノードのイテレータ
    type Nodes<'a>: Iterator<Item = RawNode<'a>>
    where
        Self: 'a;

    /// 要求タイプを追加します。
    fn add_request_type(&mut self, request: RequestType);

    /// 解析する文を設定します。
    fn set_sentence(&mut self, sentence: &str);

    /// 解析後のノードを文の左から右の順に列挙します。
    fn nodes(&self) -> Self::Nodes<'_>;
}

/// 形態素解析エンジン
pub trait AnalysisEngine {
    /// このエンジンが生成するラティスの型
    type Lattice: EngineLattice;

    /// 新しいラティスを確保します。
    ///
    /// 確保に失敗した場合はエンジンの診断メッセージを返します。
    fn new_lattice(&self) -> Result<Self::Lattice, String>;

    /// ラティスを解析します。失敗した場合は `false` を返します。
    fn parse(&self, lattice: &mut Self::Lattice) -> bool;

    /// 直前の失敗についての診断メッセージを返します。
    fn last_error(&self, lattice: &Self::Lattice) -> String;
}
