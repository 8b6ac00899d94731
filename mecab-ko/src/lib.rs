//! # mecab-ko
//!
//! MeCab-koによる韓国語形態素解析のバインディングです。
//!
//! ## 概要
//!
//! 文をトークン（表層形）に分割し、各トークンの素性文字列を構造化された
//! [`Feature`]にデコードします。さらに、品詞タグ・形態素・名詞のみといった
//! よく使われるビューを提供します。
//!
//! ネイティブのタガーと辞書はビルド済みのものを使用します。共有ライブラリ
//! `libmecab` は実行時に読み込まれるため、ビルド時にMeCabは不要です。
//!
//! ## 主な機能
//!
//! - **形態素解析**: [`Analyzer::analyze`]によるトークン列の取得
//! - **素性のデコード**: 8フィールドの素性文字列から[`Feature`]への変換
//! - **ビュー**: [`Analyzer::tags`]、[`Analyzer::morphemes`]、[`Analyzer::nouns`]
//! - **エンジンの抽象化**: [`engine::AnalysisEngine`]を実装すれば任意のエンジンを利用可能
//!
//! ## 使用例
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use mecab_ko::{Analyzer, AnalyzerConfig};
//!
//! let config = AnalyzerConfig::from_env().dictionary_dir("/usr/local/lib/mecab/dic/mecab-ko-dic");
//! let analyzer = Analyzer::from_config(&config)?;
//!
//! let tags = analyzer.tags("이것은 테스트입니다")?;
//! for (surface, pos) in &tags {
//!     println!("{}/{}", surface, pos.as_deref().unwrap_or("*"));
//! }
//!
//! let tokens = analyzer.analyze("이것은 테스트입니다")?;
//! assert_eq!(tokens.len(), tags.len());
//! # Ok(())
//! # }
//! ```

/// 形態素解析器とビュー
pub mod analyzer;

/// アナライザの設定
pub mod config;

/// 解析エンジンの抽象化とネイティブ実装
pub mod engine;

/// エラー型の定義
pub mod errors;

/// 素性文字列のデコーダ
pub mod feature;

/// ラティスの構築
pub mod lattice;

/// トークン型の定義
pub mod token;

#[cfg(test)]
mod test_utils;

// Re-exports
pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use errors::{MecabError, Result};
pub use feature::Feature;
pub use token::Token;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
