use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::{
    env,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
};
use threadmark_config::{Config, OutputFormat};
use threadmark_engine::{CommentNode, ParseOptions, Parser, Segment, outline, preview};

const PREVIEW_CHARS: usize = 60;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Parse one body; `None` reads stdin.
    Parse(Option<PathBuf>),
    /// Render a saved thread (JSON array of comments).
    Thread(String),
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    json: bool,
    command: Command,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let json = args.iter().any(|a| a == "--json");
    let rest: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "--json")
        .collect();

    let command = match rest.as_slice() {
        ["parse"] | ["parse", "-"] => Command::Parse(None),
        ["parse", file] => Command::Parse(Some(PathBuf::from(file))),
        ["thread", name] => Command::Thread(name.to_string()),
        [] => bail!("no command given"),
        other => bail!("unrecognised arguments: {}", other.join(" ")),
    };
    Ok(Args { json, command })
}

/// One comment with its parsed body, for JSON output.
#[derive(Serialize)]
struct RenderedComment<'a> {
    id: i64,
    author_name: &'a str,
    like_count: i64,
    created_at: i64,
    segments: Vec<Segment>,
    replies: Vec<RenderedComment<'a>>,
}

fn render_tree<'a>(parser: &Parser, nodes: &'a [CommentNode]) -> Vec<RenderedComment<'a>> {
    nodes
        .iter()
        .map(|node| RenderedComment {
            id: node.id,
            author_name: &node.author_name,
            like_count: node.like_count,
            created_at: node.created_at,
            segments: parser.parse(&node.raw_text),
            replies: render_tree(parser, &node.children),
        })
        .collect()
}

fn print_outline_tree(parser: &Parser, nodes: &[CommentNode], depth: usize) {
    let pad = "  ".repeat(depth);
    for node in nodes {
        let segments = parser.parse(&node.raw_text);
        println!(
            "{pad}#{} {} ({} likes): {}",
            node.id,
            node.author_name,
            node.like_count,
            preview(&segments, PREVIEW_CHARS)
        );
        for line in outline(&segments).lines() {
            println!("{pad}  {line}");
        }
        print_outline_tree(parser, &node.children, depth + 1);
    }
}

fn read_body(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read stdin")?;
            Ok(body)
        }
    }
}

fn load_thread(path: &Path) -> Result<Vec<CommentNode>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read thread {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to decode thread {}", path.display()))
}

fn run(args: Args, config: Config) -> Result<()> {
    let parser = Parser::new(ParseOptions {
        center_lone_formatters: config.center_lone_formatters,
    });
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output
    };

    match args.command {
        Command::Parse(path) => {
            let body = read_body(path.as_deref())?;
            let segments = parser.parse(&body);
            log::info!("Parsed {} bytes into {} segments", body.len(), segments.len());
            match format {
                OutputFormat::Outline => println!("{}", outline(&segments)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&segments)?),
            }
        }
        Command::Thread(name) => {
            let path = config.thread_path(&name);
            let roots = load_thread(&path)?;
            log::info!("Loaded {} top-level comments from {}", roots.len(), path.display());
            match format {
                OutputFormat::Outline => print_outline_tree(&parser, &roots, 0),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&render_tree(&parser, &roots))?
                ),
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "threadmark".to_string());
    let raw: Vec<String> = env::args().skip(1).collect();

    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program_name} [--json] parse [FILE|-]");
            eprintln!("       {program_name} [--json] thread FILE");
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    run(args, config)
}
