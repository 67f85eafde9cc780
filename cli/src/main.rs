use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use volcfg::constants::{DEFAULT_INDENT, DEFAULT_SEPARATOR};
use volcfg::{Document, EncodeOptions, Indent, NodeRef};

#[derive(Parser, Debug)]
#[command(name = "volcfg", version, about = "Check, format and query volcfg files")]
struct Args {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse the input and report whether it is well formed.
    Check {
        /// Input file path. Omit or use '-' to read from stdin.
        input: Option<String>,
    },
    /// Rewrite the input in canonical form.
    Fmt {
        /// Input file path. Omit or use '-' to read from stdin.
        input: Option<String>,

        /// Output file path (prints to stdout if omitted).
        #[arg(short, long, value_name = "file")]
        output: Option<String>,

        /// Indentation per nesting level.
        #[arg(long, value_name = "number", default_value_t = DEFAULT_INDENT)]
        indent: usize,
    },
    /// Print the node at a path.
    Get {
        /// Input file path, or '-' for stdin.
        input: String,

        /// Path to look up, e.g. devices/dir.
        path: String,

        /// Path separator.
        #[arg(long, value_name = "char", default_value_t = DEFAULT_SEPARATOR)]
        sep: char,
    },
    /// Convert the input to JSON.
    Json {
        /// Input file path. Omit or use '-' to read from stdin.
        input: Option<String>,

        /// Output file path (prints to stdout if omitted).
        #[arg(short, long, value_name = "file")]
        output: Option<String>,

        /// JSON indentation (0 for compact output).
        #[arg(long, value_name = "number", default_value_t = 2)]
        indent: usize,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(err) = run(args.command) {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = fmt::layer().with_target(false).with_writer(io::stderr);
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Check { input } => {
            let document = read_document(input.as_deref())?;
            debug!(nodes = document.node_count(), "check passed");
            println!("ok");
            Ok(())
        }
        Command::Fmt {
            input,
            output,
            indent,
        } => {
            let document = read_document(input.as_deref())?;
            let options = EncodeOptions::new().with_indent(Indent::Spaces(indent));
            match OutputTarget::from_arg(output.as_deref()) {
                OutputTarget::File(path) => volcfg::to_file_with_options(&document, &path, &options)?,
                OutputTarget::Stdout => {
                    let stdout = io::stdout();
                    volcfg::to_writer_with_options(stdout.lock(), &document, &options)?;
                }
            }
            Ok(())
        }
        Command::Get { input, path, sep } => {
            let document = read_document(Some(&input))?;
            let node = document
                .find_node(&path, sep)
                .ok_or_else(|| format!("{path} not found"))?;
            print_node(&node)
        }
        Command::Json {
            input,
            output,
            indent,
        } => {
            let document = read_document(input.as_deref())?;
            let target = OutputTarget::from_arg(output.as_deref());
            with_output_writer(target.path(), |writer| {
                write_json(writer, &document, indent)?;
                writer.write_all(b"\n")?;
                Ok(())
            })
        }
    }
}

fn read_document(input: Option<&str>) -> Result<Document, Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(volcfg::from_slice(&buf)?)
        }
        Some(path) => Ok(volcfg::from_file(path)?),
    }
}

fn print_node(node: &NodeRef<'_>) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if node.is_section() {
        for child in node.children() {
            writeln!(handle, "{}", child.key())?;
        }
        return Ok(());
    }
    for value in node.values() {
        writeln!(handle, "{value}")?;
    }
    Ok(())
}

#[derive(Clone, Debug)]
enum OutputTarget {
    Stdout,
    File(String),
}

impl OutputTarget {
    fn from_arg(output: Option<&str>) -> Self {
        match output {
            Some(path) if path != "-" => OutputTarget::File(path.to_string()),
            _ => OutputTarget::Stdout,
        }
    }

    fn path(&self) -> Option<&str> {
        match self {
            OutputTarget::Stdout => None,
            OutputTarget::File(path) => Some(path.as_str()),
        }
    }
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            f(&mut file)?;
            file.flush()?;
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_json(
    writer: &mut dyn Write,
    document: &Document,
    indent: usize,
) -> Result<(), Box<dyn Error>> {
    if indent == 0 {
        serde_json::to_writer(writer, document)?;
        return Ok(());
    }

    let indent_bytes = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    document.serialize(&mut serializer)?;
    Ok(())
}
