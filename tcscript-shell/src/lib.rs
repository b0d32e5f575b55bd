pub mod config;

use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use config::ShellConfig;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tcscript_compiler::{
    CompileOutput, Compiler, CompilerConfig, DelayMode, OutputLayout, StreamWriter,
};
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command script to compile
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Byte stream destination (default: the script path with a `.byte` extension)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Delay stream destination for the split layout (default: `.delay` extension)
    #[arg(long = "delay-file", value_name = "FILE")]
    pub delay_file: Option<PathBuf>,

    /// How a Wait_us value applies to the following commands
    #[arg(long = "delay-mode", value_enum)]
    pub delay_mode: Option<DelayModeArg>,

    /// Write delays next to each byte, or to a separate file
    #[arg(long = "layout", value_enum)]
    pub layout: Option<LayoutArg>,

    /// Load settings from a TOML file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with status 0 even when the script contains errors
    #[arg(long = "allow-errors")]
    pub allow_errors: bool,

    /// Log every line and packet
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DelayModeArg {
    Sticky,
    OneShot,
}

impl From<DelayModeArg> for DelayMode {
    fn from(arg: DelayModeArg) -> Self {
        match arg {
            DelayModeArg::Sticky => DelayMode::Sticky,
            DelayModeArg::OneShot => DelayMode::OneShot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Combined,
    Split,
}

impl From<LayoutArg> for OutputLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Combined => OutputLayout::Combined,
            LayoutArg::Split => OutputLayout::Split,
        }
    }
}

/// Effective settings after layering defaults, config file and flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub delay_file: Option<PathBuf>,
    pub compiler: CompilerConfig,
    pub layout: OutputLayout,
    pub allow_errors: bool,
}

impl RunSettings {
    pub fn resolve(args: &Args, config: ShellConfig) -> Self {
        let layout = args.layout.map(OutputLayout::from).unwrap_or(config.layout);
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| args.input.with_extension(&config.output_extension));
        let delay_file = match layout {
            OutputLayout::Split => Some(
                args.delay_file
                    .clone()
                    .unwrap_or_else(|| output.with_extension(&config.delay_extension)),
            ),
            OutputLayout::Combined => None,
        };

        Self {
            input: args.input.clone(),
            output,
            delay_file,
            compiler: CompilerConfig {
                delay_mode: args
                    .delay_mode
                    .map(DelayMode::from)
                    .unwrap_or(config.delay_mode),
            },
            layout,
            allow_errors: args.allow_errors || config.allow_errors,
        }
    }

    /// Script, byte stream and delay stream must be three different files
    ///
    /// # Errors
    ///
    /// Returns an error naming the first pair of paths that resolve to the
    /// same file.
    pub fn check_paths(&self) -> Result<()> {
        let input = normalized(&self.input);
        let output = normalized(&self.output);
        ensure!(
            output != input,
            "output would overwrite the script {}",
            self.input.display()
        );

        if let Some(delay_file) = &self.delay_file {
            let delays = normalized(delay_file);
            ensure!(
                delays != input,
                "delay file would overwrite the script {}",
                self.input.display()
            );
            ensure!(
                delays != output,
                "byte and delay streams would both be written to {}",
                self.output.display()
            );
        }
        Ok(())
    }
}

/// Absolute form of a path that may not exist yet
fn normalized(path: &Path) -> PathBuf {
    if let Ok(full) = path.canonicalize() {
        return full;
    }
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

/// What a run produced, printed at the end
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub settings: RunSettings,
    pub output: CompileOutput,
}

impl RunSummary {
    pub fn error_count(&self) -> usize {
        self.output.error_count()
    }

    pub fn should_fail(&self) -> bool {
        self.error_count() > 0 && !self.settings.allow_errors
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.should_fail() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "## Errors detected in command file: {}", self.error_count())?;
        writeln!(f, "## Script source file: {}", self.settings.input.display())?;
        writeln!(f, "## Destination file: {}", self.settings.output.display())?;
        if let Some(delay_file) = &self.settings.delay_file {
            writeln!(f, "## Delay file: {}", delay_file.display())?;
        }
        writeln!(f)?;
        f.write_str(&banner("End of Script"))
    }
}

pub fn banner(title: &str) -> String {
    let rule = "#".repeat(29);
    format!("{rule}\n# {title}\n{rule}\n")
}

/// Compile the script named by `args` and write its streams
///
/// # Errors
///
/// Returns an error if the config file, the script or an output file cannot be
/// accessed. Script errors are reported in the summary instead.
pub fn run(args: &Args) -> Result<RunSummary> {
    let config = match &args.config {
        Some(path) => ShellConfig::load(path)?,
        None => ShellConfig::default(),
    };
    let settings = RunSettings::resolve(args, config);
    settings.check_paths()?;
    info!(
        input = %settings.input.display(),
        delay_mode = ?settings.compiler.delay_mode,
        layout = ?settings.layout,
        "compiling script"
    );

    let compiler = Compiler::new(settings.compiler);
    let writer = StreamWriter::with_layout(settings.layout);
    let output = compiler.compile_file(
        &settings.input,
        &writer,
        &settings.output,
        settings.delay_file.as_deref(),
    )?;

    Ok(RunSummary { settings, output })
}
