use easydraw::render::{LayoutConfig, LayoutOptions, convert};
use easydraw::{DiagramLanguage, ValidationReport};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Core(easydraw::Error),
    Render(easydraw_render::Error),
    Json(serde_json::Error),
    Invalid,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Core(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Invalid => write!(f, "Diagram failed validation"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<easydraw::Error> for CliError {
    fn from(value: easydraw::Error) -> Self {
        Self::Core(value)
    }
}

impl From<easydraw_render::Error> for CliError {
    fn from(value: easydraw_render::Error) -> Self {
        Self::Render(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    Sanitize,
    Validate,
    Process,
    Layout,
    #[default]
    Render,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    raw: bool,
    diagram_type: Option<String>,
    language: Option<String>,
    config: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "easydraw\n\
\n\
USAGE:\n\
  easydraw sanitize [<path>|-]\n\
  easydraw validate [--type <hint>] [--language mermaid|plantuml] [--pretty] [<path>|-]\n\
  easydraw process [--type <hint>] [--language mermaid|plantuml] [--pretty] [<path>|-]\n\
  easydraw layout [--config <json-path>] [--raw] [--pretty] [<path>|-]\n\
  easydraw [render] [--config <json-path>] [--raw] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - validate exits with status 1 when the diagram has structural errors.\n\
  - layout and render sanitize the input first unless --raw is given.\n\
  - render prints draw.io XML to stdout by default; use --out to write a file.\n\
  - Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "sanitize" => args.command = Command::Sanitize,
            "validate" => args.command = Command::Validate,
            "process" => args.command = Command::Process,
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--raw" => args.raw = true,
            "--type" => {
                let Some(hint) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.diagram_type = Some(hint.clone());
            }
            "--language" => {
                let Some(code) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.language = Some(code.clone());
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            println!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn layout_options(config: Option<&str>) -> Result<LayoutOptions, CliError> {
    let Some(path) = config else {
        return Ok(LayoutOptions::default());
    };
    let json = std::fs::read_to_string(path)?;
    Ok(LayoutOptions::with_config(LayoutConfig::from_json_str(&json)?))
}

fn canonical_input(args: &Args) -> Result<String, CliError> {
    let text = read_input(args.input.as_deref())?;
    if args.raw {
        Ok(text)
    } else {
        Ok(easydraw::sanitize(&text))
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Sanitize => {
            let text = read_input(args.input.as_deref())?;
            write_text(&easydraw::sanitize(&text), args.out.as_deref())
        }
        Command::Validate => {
            let text = read_input(args.input.as_deref())?;
            let language = DiagramLanguage::from_code(args.language.as_deref())?;
            let errors = match language {
                DiagramLanguage::Mermaid => {
                    easydraw::validate(&text, args.diagram_type.as_deref())
                }
                DiagramLanguage::PlantUml => easydraw::validate_plantuml(&text),
            };
            let report = ValidationReport::from_errors(errors);
            write_json(&report, args.pretty)?;
            if report.valid {
                Ok(())
            } else {
                Err(CliError::Invalid)
            }
        }
        Command::Process => {
            let text = read_input(args.input.as_deref())?;
            let language = DiagramLanguage::from_code(args.language.as_deref())?;
            let prepared = easydraw::prepare(&text, language, args.diagram_type.as_deref());
            write_json(&prepared, args.pretty)
        }
        Command::Layout => {
            let options = layout_options(args.config.as_deref())?;
            let canonical = canonical_input(&args)?;
            let layout = easydraw::render::layout_flowchart(&canonical, &options);
            write_json(&layout, args.pretty)
        }
        Command::Render => {
            let options = layout_options(args.config.as_deref())?;
            let canonical = canonical_input(&args)?;
            let xml = convert(&canonical, &options);
            write_text(&xml, args.out.as_deref())
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    tracing::debug!(command = ?args.command, input = ?args.input, "easydraw");

    match run(args) {
        Ok(()) => {}
        Err(CliError::Invalid) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
