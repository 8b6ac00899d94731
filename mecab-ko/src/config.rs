//! アナライザの設定
//!
//! 辞書ディレクトリ、ユーザー辞書、共有ライブラリの場所を指定します。
//! 何も指定しない場合、MeCabの既定の辞書とシステムのライブラリ検索パスを使用します。

use std::env;
use std::path::{Path, PathBuf};

use crate::errors::{MecabError, Result};

/// 共有ライブラリの場所を指定する環境変数
pub const LIBRARY_PATH_ENV: &str = "MECAB_KO_LIBRARY_PATH";

/// 辞書ディレクトリを指定する環境変数
pub const DIC_PATH_ENV: &str = "MECAB_KO_DIC_PATH";

/// アナライザの設定
///
/// # 例
///
/// ```
/// use mecab_ko::AnalyzerConfig;
///
/// let config = AnalyzerConfig::new()
///     .dictionary_dir("/usr/local/lib/mecab/dic/mecab-ko-dic")
///     .user_dictionary("/home/user/user.dic");
///
/// assert_eq!(
///     config.engine_arguments(),
///     [
///         "mecab",
///         "-d",
///         "/usr/local/lib/mecab/dic/mecab-ko-dic",
///         "-u",
///         "/home/user/user.dic",
///     ],
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    dictionary_dir: Option<PathBuf>,
    user_dictionaries: Vec<PathBuf>,
    library_path: Option<PathBuf>,
}

impl AnalyzerConfig {
    /// 既定の辞書とライブラリを使う設定を作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 環境変数 [`LIBRARY_PATH_ENV`] と [`DIC_PATH_ENV`] から設定を作成します。
    ///
    /// 空の値は未設定として扱います。
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Some(path) = env::var_os(LIBRARY_PATH_ENV).filter(|v| !v.is_empty()) {
            config.library_path = Some(PathBuf::from(path));
        }
        if let Some(path) = env::var_os(DIC_PATH_ENV).filter(|v| !v.is_empty()) {
            config.dictionary_dir = Some(PathBuf::from(path));
        }
        config
    }

    /// 辞書ディレクトリを指定します。
    ///
    /// 空のパスは既定の辞書を意味します。
    pub fn dictionary_dir<P>(mut self, path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        let path = path.into();
        self.dictionary_dir = if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        };
        self
    }

    /// ユーザー辞書を追加します。
    pub fn user_dictionary<P>(mut self, path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.user_dictionaries.push(path.into());
        self
    }

    /// 共有ライブラリ `libmecab` の場所を指定します。
    pub fn library_path<P>(mut self, path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.library_path = Some(path.into());
        self
    }

    /// 指定された辞書ディレクトリを取得します。
    ///
    /// # 戻り値
    ///
    /// 未指定、または空のパスが指定された場合は[`None`]を返します。
    ///
    /// Gets the explicit dictionary directory.
    pub fn dictionary(&self) -> Option<&Path> {
        self.dictionary_dir.as_deref()
    }

    /// 追加されたユーザー辞書
    pub fn user_dictionaries(&self) -> &[PathBuf] {
        &self.user_dictionaries
    }

    /// 指定された共有ライブラリの場所
    ///
    /// Gets the explicit location of `libmecab`.
    pub fn library(&self) -> Option<&Path> {
        self.library_path.as_deref()
    }

    /// エンジンに渡すコマンドライン引数を生成します。
    ///
    /// 各パスは独立した引数として渡されるため、空白を含むパスもそのまま扱えます。
    pub fn engine_arguments(&self) -> Vec<String> {
        let mut args = vec!["mecab".to_string()];
        if let Some(dir) = &self.dictionary_dir {
            args.push("-d".to_string());
            args.push(dir.to_string_lossy().into_owned());
        }
        if !self.user_dictionaries.is_empty() {
            let userdic: Vec<_> = self
                .user_dictionaries
                .iter()
                .map(|p| p.to_string_lossy())
                .collect();
            args.push("-u".to_string());
            args.push(userdic.join(","));
        }
        args
    }

    /// 指定されたファイルが存在するかを検証します。
    ///
    /// 共有ライブラリを読み込む前に呼ばれ、設定の誤りを早期に
    /// [`MecabError::EngineInit`] として報告します。
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.dictionary_dir {
            if !dir.is_dir() {
                return Err(MecabError::engine_init(
                    "dictionary directory not found",
                    dir.display().to_string(),
                ));
            }
        }
        for path in &self.user_dictionaries {
            if !path.is_file() {
                return Err(MecabError::engine_init(
                    "user dictionary not found",
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}
