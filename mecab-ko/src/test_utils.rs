//! テスト用ユーティリティ
//!
//! 共有ライブラリを必要としない、最長一致で分割するだけの偽エンジンを提供します。

use std::borrow::Cow;
use std::cell::Cell;
use std::rc::Rc;

use crate::engine::{AnalysisEngine, EngineLattice, RawNode, RequestType};

/// 小さな韓国語辞書
const KOREAN_ENTRIES: &[(&str, &str)] = &[
    ("이것", "NP,*,T,이것,*,*,*,*"),
    ("은", "JX,*,T,은,*,*,*,*"),
    ("테스트", "NNG,*,F,테스트,*,*,*,*"),
    ("입니다", "VCP+EF,*,F,입니다,Inflect,VCP,EF,이/VCP/*+ㅂ니다/EF/*"),
    ("아버지", "NNG,*,F,아버지,*,*,*,*"),
    ("가", "JKS,*,F,가,*,*,*,*"),
    ("방", "NNG,*,T,방,*,*,*,*"),
    ("에", "JKB,*,F,에,*,*,*,*"),
    ("들어가", "VV,*,F,들어가,*,*,*,*"),
    ("신다", "EP+EF,*,F,신다,Inflect,EP,EF,시/EP/*+ᆫ다/EF/*"),
    ("서울", "NNP,지명,T,서울,*,*,*,*"),
    (".", "SF,*,*,*,*,*,*,*"),
];

pub(crate) struct FakeEngine {
    entries: Vec<(String, String)>,
    parse_error: Option<String>,
    allocation_error: Option<String>,
    live: Rc<Cell<usize>>,
}

impl FakeEngine {
    pub(crate) fn new<I, S, F>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, F)>,
        S: Into<String>,
        F: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(s, f)| (s.into(), f.into()))
                .collect(),
            parse_error: None,
            allocation_error: None,
            live: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn korean() -> Self {
        Self::new(KOREAN_ENTRIES.iter().copied())
    }

    pub(crate) fn with_entry(mut self, surface: &str, feature: &str) -> Self {
        self.entries.push((surface.to_string(), feature.to_string()));
        self
    }

    pub(crate) fn fail_parse(mut self, msg: &str) -> Self {
        self.parse_error = Some(msg.to_string());
        self
    }

    pub(crate) fn fail_allocation(mut self, msg: &str) -> Self {
        self.allocation_error = Some(msg.to_string());
        self
    }

    /// 解放されていないラティスの数
    pub(crate) fn live_lattices(&self) -> usize {
        self.live.get()
    }

    fn longest_match(&self, text: &str) -> Option<&(String, String)> {
        self.entries
            .iter()
            .filter(|(surface, _)| text.starts_with(surface.as_str()))
            .max_by_key(|(surface, _)| surface.len())
    }
}

pub(crate) struct FakeLattice {
    sentence: String,
    request: RequestType,
    nodes: Vec<(String, String)>,
    error: String,
    live: Rc<Cell<usize>>,
}

impl FakeLattice {
    pub(crate) fn sentence(&self) -> &str {
        &self.sentence
    }

    pub(crate) fn request_type(&self) -> RequestType {
        self.request
    }
}

impl Drop for FakeLattice {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl EngineLattice for FakeLattice {
    type Nodes<'a> = Box<dyn Iterator<Item = RawNode<'a>> + 'a>
    where
        Self: 'a;

    fn add_request_type(&mut self, request: RequestType) {
        self.request = self.request | request;
    }

    fn set_sentence(&mut self, sentence: &str) {
        self.sentence = sentence.to_string();
    }

    fn nodes(&self) -> Self::Nodes<'_> {
        Box::new(self.nodes.iter().map(|(surface, feature)| RawNode {
            surface: Cow::Borrowed(surface.as_str()),
            feature: Cow::Borrowed(feature.as_str()),
        }))
    }
}

impl AnalysisEngine for FakeEngine {
    type Lattice = FakeLattice;

    fn new_lattice(&self) -> Result<FakeLattice, String> {
        if let Some(msg) = &self.allocation_error {
            return Err(msg.clone());
        }
        self.live.set(self.live.get() + 1);
        Ok(FakeLattice {
            sentence: String::new(),
            request: RequestType::default(),
            nodes: vec![],
            error: String::new(),
            live: Rc::clone(&self.live),
        })
    }

    fn parse(&self, lattice: &mut FakeLattice) -> bool {
        if let Some(msg) = &self.parse_error {
            lattice.error = msg.clone();
            return false;
        }
        let mut nodes = vec![];
        let mut rest = lattice.sentence.as_str();
        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                break;
            }
            match self.longest_match(rest) {
                Some((surface, feature)) => {
                    nodes.push((surface.clone(), feature.clone()));
                    rest = &rest[surface.len()..];
                }
                None => {
                    lattice.error = format!("no entry for {:?}", rest);
                    return false;
                }
            }
        }
        lattice.nodes = nodes;
        true
    }

    fn last_error(&self, lattice: &FakeLattice) -> String {
        lattice.error.clone()
    }
}
