//! エラー型の定義
//!
//! このモジュールは、mecab-koで使用されるすべてのエラー型を定義します。
//! 設定の問題（[`EngineInitError`]）と文単位の問題（[`AnalysisError`]、
//! [`DecodeError`]）は別のバリアントとして区別されます。

use std::error::Error;
use std::fmt;

/// mecab-ko専用のResult型
///
/// エラー型としてデフォルトで[`MecabError`]を使用します。
pub type Result<T, E = MecabError> = std::result::Result<T, E>;

/// mecab-koのエラー型
///
/// いずれのエラーも内部で再試行されることはなく、そのまま呼び出し元へ伝播します。
#[derive(Debug, thiserror::Error)]
pub enum MecabError {
    /// エンジンの初期化エラー
    ///
    /// [`EngineInitError`]のエラーバリアント。
    /// このエラーが返された場合、アナライザは生成されません。
    #[error(transparent)]
    EngineInit(EngineInitError),

    /// 解析エラー
    ///
    /// [`AnalysisError`]のエラーバリアント。
    /// 失敗したのはその呼び出しのみで、アナライザは引き続き使用できます。
    #[error(transparent)]
    Analysis(AnalysisError),

    /// 素性文字列のデコードエラー
    ///
    /// [`DecodeError`]のエラーバリアント。
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl MecabError {
    /// エンジン初期化エラーを生成します
    ///
    /// # 引数
    ///
    /// * `msg` - エラーメッセージ
    /// * `cause` - エラーの原因
    pub(crate) fn engine_init<S, M>(msg: S, cause: M) -> Self
    where
        S: Into<String>,
        M: Into<String>,
    {
        Self::EngineInit(EngineInitError {
            msg: msg.into(),
            cause: cause.into(),
        })
    }

    /// 解析エラーを生成します
    ///
    /// # 引数
    ///
    /// * `msg` - エンジンが返した診断メッセージ
    pub(crate) fn analysis<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Analysis(AnalysisError { msg: msg.into() })
    }

    /// エンジンの初期化エラーであるかどうかを判定します。
    ///
    /// # 戻り値
    ///
    /// アナライザを生成できなかった場合は`true`を返します。
    ///
    /// Returns `true` if the analyzer could not be constructed.
    pub fn is_engine_init(&self) -> bool {
        matches!(self, Self::EngineInit(_))
    }

    /// 解析エラーであるかどうかを判定します。
    ///
    /// # 戻り値
    ///
    /// エンジンが文の解析に失敗した場合は`true`を返します。
    ///
    /// Returns `true` if the engine rejected a sentence.
    pub fn is_analysis(&self) -> bool {
        matches!(self, Self::Analysis(_))
    }

    /// デコードエラーであるかどうかを判定します。
    ///
    /// Returns `true` if a feature string was malformed.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// エンジンまたは辞書の初期化に失敗した場合に使用されるエラー
#[derive(Debug)]
pub struct EngineInitError {
    /// エラーメッセージ
    pub(crate) msg: String,

    /// エラーの根本原因
    pub(crate) cause: String,
}

impl EngineInitError {
    /// エラーメッセージを取得します。
    ///
    /// # 戻り値
    ///
    /// 失敗した処理を表すメッセージを返します。
    ///
    /// Gets the error message.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// エラーの根本原因を取得します。
    ///
    /// # 戻り値
    ///
    /// 見つからなかったパス、またはライブラリやMeCabが返したメッセージを返します。
    ///
    /// Gets the underlying cause.
    pub fn cause(&self) -> &str {
        &self.cause
    }
}

impl fmt::Display for EngineInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EngineInitError: {}: {}", self.msg, self.cause)
    }
}

impl Error for EngineInitError {}

/// エンジンが文の解析に失敗した場合に使用されるエラー
#[derive(Debug)]
pub struct AnalysisError {
    /// エンジンの診断メッセージ（加工なし）
    pub(crate) msg: String,
}

impl AnalysisError {
    /// エンジンが返した診断メッセージを取得します。
    ///
    /// Gets the diagnostic message reported by the engine.
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AnalysisError: {}", self.msg)
    }
}

impl Error for AnalysisError {}

/// 素性文字列が固定の8フィールド形式に一致しない場合に使用されるエラー
///
/// 辞書とエンジンのバージョン不整合を示します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// デコードしようとした素性文字列
    pub(crate) raw: String,

    /// 実際のフィールド数
    pub(crate) num_fields: usize,
}

impl DecodeError {
    /// デコードしようとした素性文字列を取得します。
    ///
    /// # 戻り値
    ///
    /// エンジンが出力した素性文字列をそのまま返します。
    ///
    /// Gets the raw feature string.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// 実際のフィールド数
    ///
    /// Gets the number of comma-separated fields found.
    pub fn num_fields(&self) -> usize {
        self.num_fields
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "DecodeError: expected {} comma-separated fields, found {}: {:?}",
            crate::feature::NUM_FIELDS,
            self.num_fields,
            self.raw
        )
    }
}

impl Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_distinguishable() {
        let e = MecabError::engine_init("failed to create tagger", "no such file");
        assert!(e.is_engine_init());
        assert!(!e.is_analysis());
        assert!(!e.is_decode());

        let e = MecabError::analysis("lattice is empty");
        assert!(e.is_analysis());
        assert_eq!(e.to_string(), "AnalysisError: lattice is empty");

        let e = MecabError::from(DecodeError {
            raw: "NNG,*".to_string(),
            num_fields: 2,
        });
        assert!(e.is_decode());
    }

    #[test]
    fn test_engine_init_display() {
        let e = MecabError::engine_init("dictionary directory not found", "/nowhere");
        assert_eq!(
            e.to_string(),
            "EngineInitError: dictionary directory not found: /nowhere"
        );
    }
}
