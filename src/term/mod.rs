use aiscript::lang::{
    AssetTable, Diagnostics, Error, Level, Limits, MessageTable, SymbolTable, MAX_INSTRUCTIONS,
    MAX_LINE_LEN, MAX_SOURCE_LEN, MAX_WORD_LEN,
};
use aiscript::error;
use aiscript::mach::{Compiler, ScriptInfo};
use ansi_term::{Colour, Style};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "aisc", about = "AI script compiler", version)]
struct Cli {
    /// Script source files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Word file to write (single input only; default is FILE.bin)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a disassembly of each compiled script
    #[arg(long)]
    listing: bool,

    /// Report diagnostics without writing word files
    #[arg(long)]
    check: bool,

    /// Asset names, one per line; the line index is the slot
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Write registered messages here, one per line
    #[arg(long)]
    messages: Option<PathBuf>,

    /// Disable ANSI styling
    #[arg(long)]
    plain: bool,

    /// Log compiler progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Source bytes compiled from each file; reading stops just past it
    #[arg(long, default_value_t = MAX_SOURCE_LEN)]
    max_source_len: usize,

    #[arg(long, default_value_t = MAX_LINE_LEN)]
    max_line_len: usize,

    #[arg(long, default_value_t = MAX_WORD_LEN)]
    max_word_len: usize,

    /// Instruction words per compiled script
    #[arg(long, default_value_t = MAX_INSTRUCTIONS)]
    max_instructions: usize,
}

impl Cli {
    fn limits(&self) -> Limits {
        Limits {
            max_source_len: self.max_source_len,
            max_line_len: self.max_line_len,
            max_word_len: self.max_word_len,
            max_instructions: self.max_instructions,
        }
    }
}

/// Returns the process exit code: 0 on success, 1 if any script had an
/// error or could not be read or saved, 2 on bad usage or when the asset
/// or message list fails.
pub fn main() -> i32 {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::TRACE)
            .init();
    }
    if cli.output.is_some() && cli.files.len() > 1 {
        eprintln!("{}", paint(&cli, Level::Error, "--output NEEDS A SINGLE INPUT FILE"));
        return 2;
    }
    match run(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            eprintln!("{}", paint(&cli, Level::Error, &error.to_string()));
            2
        }
    }
}

fn run(cli: &Cli) -> io::Result<bool> {
    let symbols = SymbolTable::builtin();
    let mut assets = match &cli.assets {
        Some(path) => load_assets(path)?,
        None => AssetTable::new(),
    };
    let mut messages = MessageTable::new();
    let mut compiler = Compiler::new(symbols)
        .limits(cli.limits())
        .assets(&mut assets)
        .messages(&mut messages);
    let mut success = true;
    for path in &cli.files {
        let name = path.display().to_string();
        let source = match read_source(path, cli.max_source_len) {
            Ok(source) => source,
            Err(error) => {
                file_error(cli, &name, error)?;
                success = false;
                continue;
            }
        };
        let (script, diagnostics) = compiler.compile(&source, &name);
        report(cli, &diagnostics)?;
        if cli.listing {
            print!("{}", script.listing(symbols));
        }
        if diagnostics.had_error() {
            success = false;
            continue;
        }
        if !cli.check {
            let output = match &cli.output {
                Some(output) => output.clone(),
                None => path.with_extension("bin"),
            };
            if let Err(error) = save(&script, &output) {
                file_error(cli, &output.display().to_string(), error)?;
                success = false;
            }
        }
    }
    drop(compiler);
    // Word files already written refer to these indices.
    if let Some(path) = &cli.messages {
        let mut file = File::create(path)?;
        for message in messages.messages() {
            writeln!(file, "{}", message)?;
        }
    }
    Ok(success)
}

fn file_error(cli: &Cli, name: &str, error: io::Error) -> io::Result<()> {
    let mut diagnostics = Diagnostics::new(name);
    diagnostics.push(error!(FileError; error.to_string()));
    report(cli, &diagnostics)
}

/// Reads at most a few bytes past `max_len`, enough for the compiler to
/// see that the source is too large. A character split by that cut is
/// dropped.
fn read_source(path: &Path, max_len: usize) -> io::Result<String> {
    let limit = (max_len as u64).saturating_add(4);
    let mut bytes = vec![];
    File::open(path)?.take(limit).read_to_end(&mut bytes)?;
    let capped = bytes.len() as u64 == limit;
    match String::from_utf8(bytes) {
        Ok(source) => Ok(source),
        Err(error) if capped && error.utf8_error().error_len().is_none() => {
            let valid = error.utf8_error().valid_up_to();
            let mut bytes = error.into_bytes();
            bytes.truncate(valid);
            String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        }
        Err(error) => Err(io::Error::new(io::ErrorKind::InvalidData, error)),
    }
}

fn report(cli: &Cli, diagnostics: &Diagnostics) -> io::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    for error in diagnostics {
        writeln!(out, "{}", styled(cli, error))?;
    }
    Ok(())
}

fn styled(cli: &Cli, error: &Error) -> String {
    paint(cli, error.level(), &error.to_string())
}

fn paint(cli: &Cli, level: Level, text: &str) -> String {
    if cli.plain {
        return text.to_string();
    }
    let style = match level {
        Level::Error => Style::new().bold().fg(Colour::Red),
        Level::Warning => Style::new().bold().fg(Colour::Yellow),
    };
    style.paint(text).to_string()
}

fn load_assets(path: &Path) -> io::Result<AssetTable> {
    let reader = BufReader::new(File::open(path)?);
    let mut assets = AssetTable::new();
    for (slot, line) in reader.lines().enumerate() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            assets.insert(name, slot as i32);
        }
    }
    Ok(assets)
}

fn save(script: &ScriptInfo, path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(&script.to_le_bytes())?;
    tracing::info!("wrote {} words to {}", script.len(), path.display());
    Ok(())
}
