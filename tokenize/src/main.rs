//! 形態素解析を実行するユーティリティ
//!
//! このバイナリは、標準入力から読み込んだテキストを形態素解析し、
//! 指定された出力形式（mecab、wakati、pos、nouns）で結果を出力します。

use std::error::Error;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use mecab_ko::{Analyzer, AnalyzerConfig, Token};

use clap::Parser;

/// 出力モード
#[derive(Clone, Debug)]
enum OutputMode {
    Mecab,
    Wakati,
    Pos,
    Nouns,
}

impl FromStr for OutputMode {
    type Err = &'static str;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "mecab" => Ok(Self::Mecab),
            "wakati" => Ok(Self::Wakati),
            "pos" => Ok(Self::Pos),
            "nouns" => Ok(Self::Nouns),
            _ => Err("Could not parse a mode"),
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "tokenize", about = "Predicts Korean morphemes")]
struct Args {
    /// Dictionary directory. Defaults to MECAB_KO_DIC_PATH or the MeCab default.
    #[clap(short = 'd', long)]
    dicdir: Option<PathBuf>,

    /// User dictionary. Can be given more than once.
    #[clap(short = 'u', long)]
    userdic: Vec<PathBuf>,

    /// Path to libmecab. Defaults to MECAB_KO_LIBRARY_PATH or the system search path.
    #[clap(short = 'l', long)]
    library: Option<PathBuf>,

    /// Output mode. Choices are mecab, wakati, pos, and nouns.
    #[clap(short = 'O', long, default_value = "mecab")]
    output_mode: OutputMode,
}

impl Args {
    fn config(&self) -> AnalyzerConfig {
        let mut config = AnalyzerConfig::from_env();
        if let Some(dicdir) = &self.dicdir {
            config = config.dictionary_dir(dicdir);
        }
        for userdic in &self.userdic {
            config = config.user_dictionary(userdic);
        }
        if let Some(library) = &self.library {
            config = config.library_path(library);
        }
        config
    }
}

/// 1行分の解析結果を指定された形式で書き出します。
fn write_tokens<W>(out: &mut W, tokens: &[Token], mode: &OutputMode) -> std::io::Result<()>
where
    W: Write,
{
    match mode {
        OutputMode::Mecab => {
            for t in tokens {
                writeln!(out, "{}\t{}", t.surface(), t.feature())?;
            }
            out.write_all(b"EOS\n")?;
        }
        OutputMode::Wakati => {
            for (i, t) in tokens.iter().enumerate() {
                if i != 0 {
                    out.write_all(b" ")?;
                }
                out.write_all(t.surface().as_bytes())?;
            }
            out.write_all(b"\n")?;
        }
        OutputMode::Pos => {
            for (i, t) in tokens.iter().enumerate() {
                if i != 0 {
                    out.write_all(b" ")?;
                }
                write!(out, "{}/{}", t.surface(), t.feature().pos().unwrap_or("*"))?;
            }
            out.write_all(b"\n")?;
        }
        OutputMode::Nouns => {
            let nouns = tokens.iter().filter(|t| t.feature().is_noun());
            for (i, t) in nouns.enumerate() {
                if i != 0 {
                    out.write_all(b" ")?;
                }
                out.write_all(t.surface().as_bytes())?;
            }
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    eprintln!("Loading the dictionary...");
    let analyzer = Analyzer::from_config(&args.config())?;

    eprintln!("Ready to tokenize");

    let is_tty = atty::is(atty::Stream::Stdout);

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    let lines = std::io::stdin().lock().lines();
    for (lineno, line) in lines.enumerate() {
        let line = line?;
        let tokens = match analyzer.analyze(&line) {
            Ok(tokens) => tokens,
            Err(e) => {
                log::warn!("line {}: {}", lineno + 1, e);
                continue;
            }
        };
        write_tokens(&mut out, &tokens, &args.output_mode)?;
        if is_tty {
            out.flush()?;
        }
    }

    Ok(())
}
