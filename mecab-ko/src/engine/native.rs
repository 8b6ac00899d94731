//! MeCab C APIによるエンジン実装
//!
//! 共有ライブラリ `libmecab` を実行時に読み込み、必要なシンボルを解決します。
//! ビルド時にMeCabをリンクする必要はありません。

use std::borrow::Cow;
use std::ffi::{c_char, c_float, c_int, c_long, c_short, c_uchar, c_uint, c_ushort, CStr, CString};
use std::marker::PhantomData;
use std::path::Path;
use std::ptr;
use std::sync::Arc;

use libloading::Library;

use crate::config::AnalyzerConfig;
use crate::engine::{AnalysisEngine, EngineLattice, RawNode, RequestType};
use crate::errors::{MecabError, Result};

/// ライブラリパスが指定されていない場合に試す名前
#[cfg(target_os = "macos")]
const LIBRARY_NAMES: &[&str] = &["libmecab.2.dylib", "libmecab.dylib"];
#[cfg(target_os = "windows")]
const LIBRARY_NAMES: &[&str] = &["libmecab.dll", "mecab.dll"];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const LIBRARY_NAMES: &[&str] = &["libmecab.so.2", "libmecab.so"];

const MECAB_EOS_NODE: c_uchar = 3;

#[repr(C)]
struct MecabT {
    _private: [u8; 0],
}

#[repr(C)]
struct MecabLatticeT {
    _private: [u8; 0],
}

#[repr(C)]
struct MecabPathT {
    _private: [u8; 0],
}

/// `mecab_node_t` のレイアウト
#[allow(dead_code)]
#[repr(C)]
struct MecabNodeT {
    prev: *mut MecabNodeT,
    next: *mut MecabNodeT,
    enext: *mut MecabNodeT,
    bnext: *mut MecabNodeT,
    rpath: *mut MecabPathT,
    lpath: *mut MecabPathT,
    surface: *const c_char,
    feature: *const c_char,
    id: c_uint,
    length: c_ushort,
    rlength: c_ushort,
    rc_attr: c_ushort,
    lc_attr: c_ushort,
    posid: c_ushort,
    char_type: c_uchar,
    stat: c_uchar,
    isbest: c_uchar,
    alpha: c_float,
    beta: c_float,
    prob: c_float,
    wcost: c_short,
    cost: c_long,
}

type MecabNewFn = unsafe extern "C" fn(c_int, *mut *mut c_char) -> *mut MecabT;
type MecabDestroyFn = unsafe extern "C" fn(*mut MecabT);
type MecabStrerrorFn = unsafe extern "C" fn(*mut MecabT) -> *const c_char;
type MecabParseLatticeFn = unsafe extern "C" fn(*mut MecabT, *mut MecabLatticeT) -> c_int;
type LatticeNewFn = unsafe extern "C" fn() -> *mut MecabLatticeT;
type LatticeDestroyFn = unsafe extern "C" fn(*mut MecabLatticeT);
type LatticeAddRequestTypeFn = unsafe extern "C" fn(*mut MecabLatticeT, c_int);
type LatticeSetSentence2Fn = unsafe extern "C" fn(*mut MecabLatticeT, *const c_char, usize);
type LatticeGetBosNodeFn = unsafe extern "C" fn(*mut MecabLatticeT) -> *mut MecabNodeT;
type LatticeStrerrorFn = unsafe extern "C" fn(*mut MecabLatticeT) -> *const c_char;

/// 解決済みのC API関数表
struct Api {
    new: MecabNewFn,
    destroy: MecabDestroyFn,
    strerror: MecabStrerrorFn,
    parse_lattice: MecabParseLatticeFn,
    lattice_new: LatticeNewFn,
    lattice_destroy: LatticeDestroyFn,
    lattice_add_request_type: LatticeAddRequestTypeFn,
    lattice_set_sentence2: LatticeSetSentence2Fn,
    lattice_get_bos_node: LatticeGetBosNodeFn,
    lattice_strerror: LatticeStrerrorFn,
    // Must outlive the function pointers above.
    _library: Library,
}

macro_rules! symbol {
    ($library:expr, $name:literal, $ty:ty) => {{
        // SAFETY: the declared type matches the prototype in mecab.h.
        let symbol = unsafe { $library.get::<$ty>(concat!($name, "\0").as_bytes()) }
            .map_err(|e| MecabError::engine_init(concat!("missing symbol ", $name), e.to_string()))?;
        *symbol
    }};
}

impl Api {
    fn load(library_path: Option<&Path>) -> Result<Self> {
        let library = match library_path {
            Some(path) => {
                log::debug!("[mecab-ko] Loading {}", path.display());
                // SAFETY: loading libmecab runs no initialization routines with preconditions.
                unsafe { Library::new(path) }.map_err(|e| {
                    MecabError::engine_init(
                        format!("failed to load {}", path.display()),
                        e.to_string(),
                    )
                })?
            }
            None => Self::open_default()?,
        };

        Ok(Self {
            new: symbol!(library, "mecab_new", MecabNewFn),
            destroy: symbol!(library, "mecab_destroy", MecabDestroyFn),
            strerror: symbol!(library, "mecab_strerror", MecabStrerrorFn),
            parse_lattice: symbol!(library, "mecab_parse_lattice", MecabParseLatticeFn),
            lattice_new: symbol!(library, "mecab_lattice_new", LatticeNewFn),
            lattice_destroy: symbol!(library, "mecab_lattice_destroy", LatticeDestroyFn),
            lattice_add_request_type: symbol!(library, "mecab_lattice_add_request_type", LatticeAddRequestTypeFn),
            lattice_set_sentence2: symbol!(library, "mecab_lattice_set_sentence2", LatticeSetSentence2Fn),
            lattice_get_bos_node: symbol!(library, "mecab_lattice_get_bos_node", LatticeGetBosNodeFn),
            lattice_strerror: symbol!(library, "mecab_lattice_strerror", LatticeStrerrorFn),
            _library: library,
        })
    }

    fn open_default() -> Result<Library> {
        let mut errors = vec![];
        for name in LIBRARY_NAMES {
            // SAFETY: see `load`.
            match unsafe { Library::new(name) } {
                Ok(library) => {
                    log::debug!("[mecab-ko] Loaded {}", name);
                    return Ok(library);
                }
                Err(e) => errors.push(format!("{name}: {e}")),
            }
        }
        Err(MecabError::engine_init(
            "libmecab could not be loaded; set MECAB_KO_LIBRARY_PATH",
            errors.join("; "),
        ))
    }
}

/// ヌル終端のC文字列を所有文字列に変換します。
///
/// # Safety
///
/// `ptr` はヌルか、有効なヌル終端文字列を指していなければなりません。
unsafe fn message(ptr: *const c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}

/// `mecab_t` の所有ハンドル
///
/// エンジンと、そこから生成されたすべてのラティスで共有されます。
/// ノードの素性は辞書のメモリを指すため、最後の参照が消えるまで解放されません。
struct Tagger {
    api: Api,
    mecab: *mut MecabT,
}

impl Drop for Tagger {
    fn drop(&mut self) {
        // SAFETY: `mecab` was returned by `mecab_new` and is destroyed exactly once.
        unsafe { (self.api.destroy)(self.mecab) }
    }
}

/// 共有ライブラリ上のMeCabタガー
///
/// スレッド間で移動できますが、共有はできません（`Sync`ではありません）。
/// 複数スレッドから同時に使う場合は、スレッドごとにインスタンスを生成するか
/// `Mutex` で保護してください。
///
/// エンジンを先にドロップしても、生成済みの[`NativeLattice`]は有効なままです。
pub struct NativeEngine {
    tagger: Arc<Tagger>,
}

// SAFETY: the tagger has no thread affinity and the reference count is atomic;
// `Arc<Tagger>` is not `Sync`, so at most one thread drives the engine at a time.
unsafe impl Send for NativeEngine {}

impl NativeEngine {
    /// 設定に従ってタガーを生成します。
    ///
    /// # エラー
    ///
    /// 辞書ディレクトリが存在しない場合、ライブラリが読み込めない場合、
    /// またはMeCabがタガーを生成できなかった場合に[`MecabError::EngineInit`]を返します。
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let api = Api::load(config.library())?;

        let args = config.engine_arguments();
        log::debug!("[mecab-ko] Creating tagger with {:?}", args);
        let args = args
            .into_iter()
            .map(CString::new)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| MecabError::engine_init("invalid engine argument", e.to_string()))?;
        let mut argv: Vec<*mut c_char> = args.iter().map(|a| a.as_ptr() as *mut c_char).collect();
        let argc = c_int::try_from(argv.len())
            .map_err(|e| MecabError::engine_init("too many engine arguments", e.to_string()))?;

        // SAFETY: argv holds `argc` valid C strings kept alive by `args`; MeCab copies them.
        let mecab = unsafe { (api.new)(argc, argv.as_mut_ptr()) };
        if mecab.is_null() {
            // SAFETY: a null tagger selects the global error message.
            let cause = unsafe { message((api.strerror)(ptr::null_mut())) };
            return Err(MecabError::engine_init("failed to create tagger", cause));
        }

        Ok(Self {
            tagger: Arc::new(Tagger { api, mecab }),
        })
    }
}

impl AnalysisEngine for NativeEngine {
    type Lattice = NativeLattice;

    fn new_lattice(&self) -> std::result::Result<NativeLattice, String> {
        let api = &self.tagger.api;
        // SAFETY: no preconditions.
        let lattice = unsafe { (api.lattice_new)() };
        if lattice.is_null() {
            // SAFETY: a null tagger selects the global error message.
            return Err(unsafe { message((api.strerror)(ptr::null_mut())) });
        }
        Ok(NativeLattice {
            lattice,
            sentence: String::new(),
            tagger: Arc::clone(&self.tagger),
        })
    }

    fn parse(&self, lattice: &mut NativeLattice) -> bool {
        let tagger = &self.tagger;
        // SAFETY: both handles are live; the sentence buffer is owned by `lattice`.
        unsafe { (tagger.api.parse_lattice)(tagger.mecab, lattice.lattice) != 0 }
    }

    fn last_error(&self, lattice: &NativeLattice) -> String {
        let tagger = &self.tagger;
        // SAFETY: both handles are live.
        let msg = unsafe { message((tagger.api.lattice_strerror)(lattice.lattice)) };
        if !msg.is_empty() {
            return msg;
        }
        // SAFETY: the tagger is live.
        unsafe { message((tagger.api.strerror)(tagger.mecab)) }
    }
}

/// `mecab_lattice_t` の所有ハンドル
///
/// ドロップ時に `mecab_lattice_destroy` で解放されます。
/// 生成元のタガーへの参照を保持するため、エンジンより長く生存できます。
pub struct NativeLattice {
    lattice: *mut MecabLatticeT,
    sentence: String,
    // Released after `lattice` is destroyed.
    tagger: Arc<Tagger>,
}

impl NativeLattice {
    #[inline(always)]
    fn api(&self) -> &Api {
        &self.tagger.api
    }
}

impl Drop for NativeLattice {
    fn drop(&mut self) {
        // SAFETY: `lattice` was returned by `mecab_lattice_new` and is destroyed exactly once.
        unsafe { (self.api().lattice_destroy)(self.lattice) }
    }
}

impl EngineLattice for NativeLattice {
    type Nodes<'a> = NativeNodes<'a>
    where
        Self: 'a;

    fn add_request_type(&mut self, request: RequestType) {
        // SAFETY: the lattice is live.
        unsafe { (self.api().lattice_add_request_type)(self.lattice, request.bits()) }
    }

    fn set_sentence(&mut self, sentence: &str) {
        // Keeps the buffer alive even when the lattice does not copy it.
        self.sentence.clear();
        self.sentence.push_str(sentence);
        // SAFETY: the pointer and length describe `self.sentence`, which outlives every parse.
        unsafe {
            (self.api().lattice_set_sentence2)(
                self.lattice,
                self.sentence.as_ptr().cast(),
                self.sentence.len(),
            )
        }
    }

    fn nodes(&self) -> NativeNodes<'_> {
        // SAFETY: the lattice is live; the BOS node is null before parsing.
        let bos = unsafe { (self.api().lattice_get_bos_node)(self.lattice) };
        let next = if bos.is_null() {
            ptr::null()
        } else {
            // SAFETY: a non-null BOS node is valid while the lattice is.
            unsafe { (*bos).next }
        };
        NativeNodes {
            next,
            _lattice: PhantomData,
        }
    }
}

/// 文頭の次から文末の手前までのノードを辿るイテレータ
pub struct NativeNodes<'a> {
    next: *const MecabNodeT,
    _lattice: PhantomData<&'a NativeLattice>,
}

impl<'a> Iterator for NativeNodes<'a> {
    type Item = RawNode<'a>;

    fn next(&mut self) -> Option<RawNode<'a>> {
        if self.next.is_null() {
            return None;
        }
        // SAFETY: nodes live as long as the borrowed lattice.
        let node = unsafe { &*self.next };
        if node.stat == MECAB_EOS_NODE {
            self.next = ptr::null();
            return None;
        }
        self.next = node.next;

        let surface = if node.surface.is_null() {
            Cow::Borrowed("")
        } else {
            // SAFETY: `surface` points into the sentence with `length` bytes.
            let bytes = unsafe {
                std::slice::from_raw_parts(node.surface.cast::<u8>(), usize::from(node.length))
            };
            String::from_utf8_lossy(bytes)
        };
        let feature = if node.feature.is_null() {
            Cow::Borrowed("")
        } else {
            // SAFETY: `feature` is a null-terminated string owned by the dictionary or lattice.
            unsafe { CStr::from_ptr(node.feature) }.to_string_lossy()
        };

        Some(RawNode { surface, feature })
    }
}
