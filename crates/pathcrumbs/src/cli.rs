use crate::config::resolve_environment;
use crate::output::{Output, OutputFormat};
use crate::record::process_line;
use crate::shorten::Shortener;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, ValueHint, builder::Styles};
use color_eyre::Section as _;
use color_eyre::eyre::{Result, WrapErr as _, eyre};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const fn help_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::White.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Green.on_default())
        .valid(AnsiColor::Cyan.on_default())
        .invalid(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}

#[derive(Parser, Debug)]
#[command(name = "pathcrumbs")]
#[command(
    about = "Add short path breadcrumbs to name:linenum:contents search output",
    version,
    styles = help_styles(),
    after_help = "Examples:\n  rg --line-number TODO | pathcrumbs\n  grep -rn main src | pathcrumbs --format pretty\n\nEach input line becomes name:linenum:short:linenum:contents."
)]
pub struct Cli {
    #[arg(
        long,
        value_hint = ValueHint::DirPath,
        help = "Working directory used for relative names and the '' prefix (default: current dir)"
    )]
    cwd: Option<PathBuf>,
    #[arg(
        long,
        value_hint = ValueHint::DirPath,
        help = "Home directory used for '~' (default: $HOME)"
    )]
    home: Option<PathBuf>,
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Output format"
    )]
    format: OutputFormat,
    #[arg(long, help = "Disable ANSI colors")]
    no_color: bool,
    #[arg(long, help = "Show debug logs on stderr")]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_diagnostics(cli.verbose, cli.no_color)?;
    let env = resolve_environment(cli.cwd.as_deref(), cli.home.as_deref())?;
    let shortener = Shortener::new(&env.cwd, &env.home);
    for entry in shortener.table().entries() {
        debug!(
            placeholder = %entry.placeholder,
            expansion = %entry.expansion,
            "replacement"
        );
    }
    let output = Output::new(cli.format, cli.no_color);
    debug!(format = ?output.format(), "reading records from stdin");
    process_stream(&shortener, &output, io::stdin().lock(), io::stdout().lock())
}

/// Transform every input line in order. Stops at the first malformed record;
/// a closed output pipe ends the stream without error.
pub fn process_stream<R, W>(
    shortener: &Shortener,
    output: &Output,
    input: R,
    mut out: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    for (idx, line) in input.lines().enumerate() {
        let line_number = idx + 1;
        let line = line.wrap_err_with(|| format!("failed to read input line {line_number}"))?;
        let record = match process_line(shortener, &line) {
            Ok(record) => record,
            Err(err) => {
                let hint = err.hint();
                return Err(err)
                    .wrap_err(format!("malformed record on input line {line_number}"))
                    .suggestion(hint);
            }
        };
        debug!(line = line_number, short = %record.short_filename, "record");
        if let Err(err) = output.write_record(&mut out, &record) {
            return handle_write_error(err);
        }
    }
    if let Err(err) = out.flush() {
        return handle_write_error(err);
    }
    Ok(())
}

fn handle_write_error(err: io::Error) -> Result<()> {
    if err.kind() == io::ErrorKind::BrokenPipe {
        debug!("stdout closed, stopping");
        return Ok(());
    }
    Err(err).wrap_err("failed to write to stdout")
}

fn init_diagnostics(verbose: bool, no_color: bool) -> Result<()> {
    if no_color {
        // Safe: set before any threads spawn.
        unsafe { std::env::set_var("NO_COLOR", "1") };
    }
    color_eyre::install()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color && std::io::stderr().is_terminal())
        .try_init()
        .map_err(|err| eyre!("failed to initialize tracing subscriber: {err}"))?;
    Ok(())
}
