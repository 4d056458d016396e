// Command-line interface for xmldoc
//
// Converts the documentation-comment XML a compiler writes next to an assembly into Markdown.
// All of the work happens in xmldoc-babel; this binary reads files, layers configuration and
// reports errors.
//
// Usage:
//  xmldoc <input> [--output <file>]                 - Convert the whole file (stdout by default)
//  xmldoc <input> --member T:N.Type [--member ...]  - Convert only the given members
//
// Configuration:
//
// Defaults are embedded (see xmldoc-config). An `xmldoc.toml` in the working directory is picked
// up when present, --config names an explicit file, and --width / --list-style win over both.

use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;
use xmldoc_babel::markdown::render_block;
use xmldoc_babel::model::DocumentationFile;
use xmldoc_babel::{convert_to_block, parse_documentation, select_member, MarkdownOptions};
use xmldoc_config::{ConfigError, Loader, XmlDocConfig};

fn build_cli() -> Command {
    Command::new("xmldoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert documentation-comment XML to Markdown")
        .long_about(
            "xmldoc reads the XML documentation file produced by a compiler\n\
            (<doc><assembly>..</assembly><members>..</members></doc>) and prints it as Markdown.\n\n\
            Examples:\n  \
            xmldoc MyLib.xml                          # Whole file to stdout\n  \
            xmldoc MyLib.xml -o MyLib.md              # Whole file to MyLib.md\n  \
            xmldoc MyLib.xml --member T:MyLib.Widget  # A single member\n  \
            xmldoc MyLib.xml --width 80 -vv           # Wrap at 80 columns, debug logging",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Documentation XML file")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("member")
                .long("member")
                .value_name("ID")
                .help("Only convert the member with this id, e.g. T:MyNamespace.MyClass")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an xmldoc.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("N")
                .help("Wrap paragraphs at N columns (0 disables wrapping)")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("list-style")
                .long("list-style")
                .help("Bullet character for unordered lists")
                .value_parser(["dash", "plus", "star"]),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &matches,
    );

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let members: Vec<&str> = matches
        .get_many::<String>("member")
        .map(|ids| ids.map(|s| s.as_str()).collect())
        .unwrap_or_default();
    let output = matches.get_one::<String>("output").map(|s| s.as_str());

    let options = MarkdownOptions::from(&config.markdown);
    handle_convert_command(input, &members, output, &options);
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    // RUST_LOG is parsed last so it wins over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Handle the conversion of one documentation file
fn handle_convert_command(
    input: &str,
    members: &[&str],
    output: Option<&str>,
    options: &MarkdownOptions,
) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let file = parse_documentation(&source).unwrap_or_else(|e| {
        eprintln!("Parse error in '{input}': {e}");
        std::process::exit(1);
    });
    log::info!(
        "read {} members of assembly '{}' from {input}",
        file.members.len(),
        file.assembly_name
    );

    let file = if members.is_empty() {
        file
    } else {
        select_members(&file, members, input)
    };

    let markdown = convert_to_block(&file)
        .and_then(|block| render_block(&block, options))
        .unwrap_or_else(|e| {
            eprintln!("Render error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, markdown).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            log::info!("wrote {path}");
        }
        None => print!("{markdown}"),
    }
}

/// Keeps only the requested members, in the order they were asked for.
fn select_members(file: &DocumentationFile, ids: &[&str], input: &str) -> DocumentationFile {
    let members = ids
        .iter()
        .map(|id| {
            select_member(file, id).cloned().unwrap_or_else(|| {
                eprintln!("Error: no member '{id}' in '{input}'");
                std::process::exit(1);
            })
        })
        .collect();
    DocumentationFile {
        assembly_name: file.assembly_name.clone(),
        members,
    }
}

fn load_cli_config(explicit_path: Option<&str>, matches: &clap::ArgMatches) -> XmlDocConfig {
    let loader = Loader::new().with_optional_file("xmldoc.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    apply_config_overrides(loader, matches)
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

/// Command-line flags are the top configuration layer.
fn apply_config_overrides(
    mut loader: Loader,
    matches: &clap::ArgMatches,
) -> Result<Loader, ConfigError> {
    if let Some(width) = matches.get_one::<usize>("width") {
        let width = i64::try_from(*width).unwrap_or(i64::MAX);
        loader = loader.set_override("markdown.width", width)?;
    }
    if let Some(style) = matches.get_one::<String>("list-style") {
        loader = loader.set_override("markdown.list_style", style.as_str())?;
    }
    Ok(loader)
}
