//! 素性文字列のデコーダ
//!
//! MeCab-ko辞書の素性は、次の8フィールドをカンマで連結した固定形式です。
//!
//! ```text
//! <pos>,<semantic>,<has_jongseong>,<reading>,<type>,<start_pos>,<end_pos>,<expression>
//! ```
//!
//! どのフィールドでも `*` は「値なし」を意味し、[`None`]にデコードされます。

use std::fmt;
use std::str::FromStr;

use crate::errors::DecodeError;

/// 素性文字列のフィールド数
pub const NUM_FIELDS: usize = 8;

/// 値が存在しないことを表す記号
const ABSENT: &str = "*";

/// 1トークン分の素性情報
///
/// 値としての同一性のみを持つ不変のレコードです。
///
/// # 例
///
/// ```
/// use mecab_ko::Feature;
///
/// let feature = Feature::decode("NNG,*,F,테스트,*,*,*,*")?;
/// assert_eq!(feature.pos(), Some("NNG"));
/// assert_eq!(feature.semantic(), None);
/// assert_eq!(feature.has_jongseong(), Some(false));
/// assert_eq!(feature.reading(), Some("테스트"));
/// assert!(feature.is_noun());
/// # Ok::<(), mecab_ko::errors::DecodeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Feature {
    pos: Option<String>,
    semantic: Option<String>,
    has_jongseong: Option<bool>,
    reading: Option<String>,
    morpheme_type: Option<String>,
    start_pos: Option<String>,
    end_pos: Option<String>,
    expression: Option<String>,
}

impl Feature {
    /// 素性文字列をデコードします。
    ///
    /// フィールドの値は品詞体系に照らして検証されません。未知のタグはそのまま保持されます。
    ///
    /// # エラー
    ///
    /// カンマで区切ったフィールド数がちょうど8でない場合、[`DecodeError`]を返します。
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        let fields: Vec<&str> = raw.split(',').collect();
        let [pos, semantic, has_jongseong, reading, morpheme_type, start_pos, end_pos, expression] =
            fields[..]
        else {
            return Err(DecodeError {
                raw: raw.to_string(),
                num_fields: fields.len(),
            });
        };

        Ok(Self {
            pos: parse_field(pos),
            semantic: parse_field(semantic),
            has_jongseong: parse_has_jongseong(has_jongseong),
            reading: parse_field(reading),
            morpheme_type: parse_field(morpheme_type),
            start_pos: parse_field(start_pos),
            end_pos: parse_field(end_pos),
            expression: parse_field(expression),
        })
    }

    /// 品詞タグを取得します。
    ///
    /// # 戻り値
    ///
    /// `NNG`、`VV+EP`などのタグを返します。辞書が `*` を出力した場合は[`None`]です。
    ///
    /// Gets the part-of-speech tag.
    #[inline(always)]
    pub fn pos(&self) -> Option<&str> {
        self.pos.as_deref()
    }

    /// 意味分類
    ///
    /// Gets the semantic class.
    #[inline(always)]
    pub fn semantic(&self) -> Option<&str> {
        self.semantic.as_deref()
    }

    /// 最後の音節に終声（받침）があるかどうかを取得します。
    ///
    /// # 戻り値
    ///
    /// `T`なら`Some(true)`、`F`なら`Some(false)`を返します。
    /// 辞書がそれ以外の値を出力した場合は[`None`]です。
    ///
    /// Gets whether the last syllable has a final consonant.
    #[inline(always)]
    pub fn has_jongseong(&self) -> Option<bool> {
        self.has_jongseong
    }

    /// 読みを取得します。
    ///
    /// Gets the reading.
    #[inline(always)]
    pub fn reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }

    /// 形態素のタイプ（`Inflect`、`Compound`、`Preanalysis`など）
    #[inline(always)]
    pub fn morpheme_type(&self) -> Option<&str> {
        self.morpheme_type.as_deref()
    }

    /// 複合語の先頭の品詞
    #[inline(always)]
    pub fn start_pos(&self) -> Option<&str> {
        self.start_pos.as_deref()
    }

    /// 複合語の末尾の品詞
    #[inline(always)]
    pub fn end_pos(&self) -> Option<&str> {
        self.end_pos.as_deref()
    }

    /// 複合語の分解表現を取得します。
    ///
    /// # 戻り値
    ///
    /// `가/VV/*+았/EP/*`のように`+`で連結された構成要素を返します。
    ///
    /// Gets the decomposition of an inflected or compound word.
    #[inline(always)]
    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    /// 品詞が体言であるかどうかを判定します。
    ///
    /// # 戻り値
    ///
    /// 品詞タグが`N`で始まる場合は`true`を返します。品詞が[`None`]の場合は`false`です。
    ///
    /// Checks whether the token is a noun.
    pub fn is_noun(&self) -> bool {
        self.pos().is_some_and(|pos| pos.starts_with('N'))
    }
}

impl FromStr for Feature {
    type Err = DecodeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::decode(raw)
    }
}

/// 素性を辞書と同じ8フィールド形式に書き戻します。
///
/// [`None`]は `*` に戻ります。`has_jongseong` は `T`/`F`/`*` のいずれかに正規化されます。
impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_jongseong = match self.has_jongseong {
            Some(true) => "T",
            Some(false) => "F",
            None => ABSENT,
        };
        write!(
            f,
            "{},{},{},{},{},{},{},{}",
            format_field(&self.pos),
            format_field(&self.semantic),
            has_jongseong,
            format_field(&self.reading),
            format_field(&self.morpheme_type),
            format_field(&self.start_pos),
            format_field(&self.end_pos),
            format_field(&self.expression),
        )
    }
}

#[inline(always)]
fn parse_field(value: &str) -> Option<String> {
    if value == ABSENT {
        None
    } else {
        Some(value.to_string())
    }
}

#[inline(always)]
fn format_field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(ABSENT)
}

fn parse_has_jongseong(value: &str) -> Option<bool> {
    match value {
        "T" => Some(true),
        "F" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_noun() {
        let feature = Feature::decode("NNG,*,F,테스트,*,*,*,*").unwrap();
        assert_eq!(feature.pos(), Some("NNG"));
        assert_eq!(feature.semantic(), None);
        assert_eq!(feature.has_jongseong(), Some(false));
        assert_eq!(feature.reading(), Some("테스트"));
        assert_eq!(feature.morpheme_type(), None);
        assert_eq!(feature.start_pos(), None);
        assert_eq!(feature.end_pos(), None);
        assert_eq!(feature.expression(), None);
        assert!(feature.is_noun());
    }

    #[test]
    fn test_decode_verb_with_jongseong() {
        let feature = Feature::decode("VV,*,T,가,*,*,*,*").unwrap();
        assert_eq!(feature.pos(), Some("VV"));
        assert_eq!(feature.has_jongseong(), Some(true));
        assert!(!feature.is_noun());
    }

    #[test]
    fn test_decode_inflect() {
        let feature = Feature::decode("VCP+EF,*,F,입니다,Inflect,VCP,EF,이/VCP/*+ㅂ니다/EF/*").unwrap();
        assert_eq!(feature.pos(), Some("VCP+EF"));
        assert_eq!(feature.morpheme_type(), Some("Inflect"));
        assert_eq!(feature.start_pos(), Some("VCP"));
        assert_eq!(feature.end_pos(), Some("EF"));
        assert_eq!(feature.expression(), Some("이/VCP/*+ㅂ니다/EF/*"));
    }

    #[test]
    fn test_has_jongseong_unknown() {
        for raw in [
            "NNG,*,*,a,*,*,*,*",
            "NNG,*,,a,*,*,*,*",
            "NNG,*,t,a,*,*,*,*",
            "NNG,*,TRUE,a,*,*,*,*",
        ] {
            assert_eq!(Feature::decode(raw).unwrap().has_jongseong(), None, "{raw}");
        }
    }

    #[test]
    fn test_absent_in_every_position() {
        let feature = Feature::decode("*,*,*,*,*,*,*,*").unwrap();
        assert_eq!(feature.pos(), None);
        assert!(!feature.is_noun());
        assert_eq!(feature.to_string(), "*,*,*,*,*,*,*,*");
    }

    #[test]
    fn test_empty_is_not_absent() {
        let feature = Feature::decode("NNG,,F,,*,*,*,*").unwrap();
        assert_eq!(feature.semantic(), Some(""));
        assert_eq!(feature.reading(), Some(""));
        assert_eq!(feature.morpheme_type(), None);
    }

    #[test]
    fn test_unknown_tags_pass_through() {
        let feature = Feature::decode("XYZ,인명,F,?,foo,bar,baz,qux").unwrap();
        assert_eq!(feature.pos(), Some("XYZ"));
        assert_eq!(feature.semantic(), Some("인명"));
        assert_eq!(feature.expression(), Some("qux"));
    }

    #[test]
    fn test_wrong_field_count() {
        let e = Feature::decode("NNG,*,F,테스트,*,*,*").unwrap_err();
        assert_eq!(e.num_fields(), 7);
        assert_eq!(e.raw(), "NNG,*,F,테스트,*,*,*");

        let e = Feature::decode("NNG,*,F,테스트,*,*,*,*,*").unwrap_err();
        assert_eq!(e.num_fields(), 9);

        let e = Feature::decode("").unwrap_err();
        assert_eq!(e.num_fields(), 1);
    }

    #[test]
    fn test_reencode() {
        for raw in [
            "NNG,*,F,테스트,*,*,*,*",
            "NNP,인명,T,홍길동,*,*,*,*",
            "VCP+EF,*,F,입니다,Inflect,VCP,EF,이/VCP/*+ㅂ니다/EF/*",
            "SF,,*,,,,,",
        ] {
            assert_eq!(Feature::decode(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn test_reencode_normalizes_has_jongseong() {
        let feature = Feature::decode("NNG,*,x,a,*,*,*,*").unwrap();
        assert_eq!(feature.to_string(), "NNG,*,*,a,*,*,*,*");
    }

    #[test]
    fn test_from_str() {
        let feature: Feature = "JX,*,T,은,*,*,*,*".parse().unwrap();
        assert_eq!(feature, Feature::decode("JX,*,T,은,*,*,*,*").unwrap());
        assert!("JX".parse::<Feature>().is_err());
    }
}
