//! 形態素解析器
//!
//! [`Analyzer`]はエンジンのハンドルを所有し、文ごとにラティスを構築して解析し、
//! 各ノードの表層形とデコードした素性を組にして返します。
//!
//! # 例
//!
//! ```no_run
//! use mecab_ko::Analyzer;
//!
//! let analyzer = Analyzer::open(None)?;
//!
//! for token in analyzer.analyze("아버지가방에들어가신다")? {
//!     println!("{}\t{}", token.surface(), token.feature());
//! }
//! assert_eq!(analyzer.nouns("아버지가방에들어가신다")?, ["아버지", "방"]);
//! # Ok::<(), mecab_ko::errors::MecabError>(())
//! ```

use crate::config::AnalyzerConfig;
use crate::engine::native::NativeEngine;
use crate::engine::{AnalysisEngine, EngineLattice};
use crate::errors::{MecabError, Result};
use crate::feature::Feature;
use crate::lattice;
use crate::token::Token;

/// 形態素解析器
///
/// 生成後は変更されません。1つのインスタンスで同時に実行できる解析は1つだけです。
/// 並列に解析する場合は、スレッドごとに別のインスタンスを生成してください。
///
/// [`NativeEngine`]を使うアナライザは別スレッドへ移動できますが、
/// 参照を複数のスレッドで共有することはできません。
///
/// ```compile_fail
/// use mecab_ko::Analyzer;
///
/// fn share(analyzer: &Analyzer) {
///     std::thread::scope(|s| {
///         s.spawn(|| analyzer.morphemes("이것은"));
///         s.spawn(|| analyzer.morphemes("테스트입니다"));
///     });
/// }
/// ```
pub struct Analyzer<E = NativeEngine> {
    engine: E,
}

impl Analyzer<NativeEngine> {
    /// 辞書ディレクトリを指定してアナライザを生成します。
    ///
    /// `None` または空文字列の場合、MeCabの既定の辞書を使用します。
    /// 環境変数 `MECAB_KO_DIC_PATH` は参照しません（[`AnalyzerConfig::from_env`]を使ってください）。
    /// 共有ライブラリの場所は環境変数 `MECAB_KO_LIBRARY_PATH` から読み込まれます。
    ///
    /// # エラー
    ///
    /// エンジンを初期化できなかった場合、[`MecabError::EngineInit`]を返します。
    pub fn open(dictionary_path: Option<&str>) -> Result<Self> {
        Self::from_config(&open_config(dictionary_path))
    }

    /// 設定からアナライザを生成します。
    ///
    /// # エラー
    ///
    /// エンジンを初期化できなかった場合、[`MecabError::EngineInit`]を返します。
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let engine = NativeEngine::new(config)?;
        log::debug!("[mecab-ko] Analyzer ready");
        Ok(Self::with_engine(engine))
    }
}

/// [`Analyzer::open`]の設定
///
/// 環境変数からはライブラリの場所のみを引き継ぎます。
fn open_config(dictionary_path: Option<&str>) -> AnalyzerConfig {
    let config = AnalyzerConfig::new().dictionary_dir(dictionary_path.unwrap_or_default());
    match AnalyzerConfig::from_env().library() {
        Some(path) => config.library_path(path),
        None => config,
    }
}

impl<E> Analyzer<E>
where
    E: AnalysisEngine,
{
    /// 任意のエンジンからアナライザを生成します。
    pub const fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// 内部のエンジンへの参照を返します。
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// 文を解析し、トークン列を文中の順序で返します。
    ///
    /// # エラー
    ///
    /// - エンジンが解析に失敗した場合、エンジンのメッセージを持つ[`MecabError::Analysis`]
    /// - いずれかのトークンの素性が8フィールドでない場合、[`MecabError::Decode`]
    ///
    /// どちらの場合も部分的な結果は返されません。
    pub fn analyze(&self, sentence: &str) -> Result<Vec<Token>> {
        let mut lattice = lattice::build(&self.engine, sentence)?;
        if !self.engine.parse(&mut lattice) {
            return Err(MecabError::analysis(self.engine.last_error(&lattice)));
        }

        // Collected before `lattice` is released.
        let tokens = lattice
            .nodes()
            .map(|node| -> Result<Token> {
                let feature = Feature::decode(&node.feature)?;
                Ok(Token::from_parts(node.surface.into_owned(), feature))
            })
            .collect();
        tokens
    }

    /// 表層形と品詞タグの組を返します。
    ///
    /// 辞書が品詞に `*` を出力した場合、タグは `None` になります。
    pub fn tags(&self, sentence: &str) -> Result<Vec<(String, Option<String>)>> {
        Ok(self
            .analyze(sentence)?
            .into_iter()
            .map(|token| {
                let (surface, feature) = token.into_parts();
                let pos = feature.pos().map(str::to_string);
                (surface, pos)
            })
            .collect())
    }

    /// 表層形のみを返します。
    pub fn morphemes(&self, sentence: &str) -> Result<Vec<String>> {
        Ok(self
            .analyze(sentence)?
            .into_iter()
            .map(|token| token.into_parts().0)
            .collect())
    }

    /// 体言（品詞が `N` で始まるトークン）の表層形のみを返します。
    pub fn nouns(&self, sentence: &str) -> Result<Vec<String>> {
        Ok(self
            .analyze(sentence)?
            .into_iter()
            .filter(|token| token.feature().is_noun())
            .map(|token| token.into_parts().0)
            .collect())
    }
}
