//! ラティスの構築
//!
//! ラティスは1文ごとにエンジンから新しく確保され、再利用されません。
//! 解放はラティス値のドロップに結び付いているため、エラーで早期リターンした場合も
//! 必ず解放されます。

use crate::engine::{AnalysisEngine, EngineLattice, RequestType};
use crate::errors::{MecabError, Result};

/// 各トークンを個別に参照するために必要な要求タイプ
pub const REQUIRED_REQUEST_TYPE: RequestType = RequestType::ALLOCATE_SENTENCE;

/// `sentence` を解析するためのラティスを構築します。
///
/// # エラー
///
/// エンジンがラティスを確保できなかった場合、[`MecabError::Analysis`]を返します。
pub fn build<E>(engine: &E, sentence: &str) -> Result<E::Lattice>
where
    E: AnalysisEngine + ?Sized,
{
    let mut lattice = engine.new_lattice().map_err(MecabError::analysis)?;
    lattice.add_request_type(REQUIRED_REQUEST_TYPE);
    lattice.set_sentence(sentence);
    Ok(lattice)
}
