//! sfhl - SwiftFlow highlighter for the terminal

use std::env;
use std::io::{self, Read};
use std::process;

use log::{debug, warn};

use swiftflow_highlight::{suggest, AnsiStyler, Config, Highlighter, PlainStyler, Result, Styler};

const SELF_TEST_SOURCE: &str = r#"var x = 10; print("Hello"); if (x > 5) { weld("Big"); }"#;

/// What to print for the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Render,
    Tokens,
    Suggest,
}

/// Parsed command line
struct Options {
    mode: Mode,
    color: bool,
    stdin: bool,
    words: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut options = Options {
        mode: Mode::Render,
        color: true,
        stdin: false,
        words: Vec::new(),
    };

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--no-color" => options.color = false,
            "--tokens" => options.mode = Mode::Tokens,
            "--suggest" => options.mode = Mode::Suggest,
            "-" => options.stdin = true,
            _ => options.words.push(arg),
        }
    }

    let source = if options.stdin {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        options.words.join(" ")
    };

    if options.mode == Mode::Suggest {
        for suggestion in suggest(&source) {
            println!("{}", suggestion);
        }
        return Ok(());
    }

    let config = Config::load()?;
    debug!("config: {:?}", config);

    let styler: Box<dyn Styler> = if options.color && config.color {
        Box::new(AnsiStyler::new(config.palette))
    } else {
        Box::new(PlainStyler)
    };

    let highlighter = match Highlighter::swiftflow(styler) {
        Ok(highlighter) => highlighter,
        Err(e) => {
            warn!("highlighting unavailable: {}", e);
            println!("{}", source);
            return Ok(());
        }
    };

    if !options.stdin && options.words.is_empty() {
        println!("Self-test:");
        println!("{}", highlighter.colorize_or_plain(SELF_TEST_SOURCE));
        return Ok(());
    }

    match options.mode {
        Mode::Tokens => {
            for line in highlighter.token_lines_or_plain(&source) {
                println!("{}", line);
            }
        }
        _ => println!("{}", highlighter.colorize_or_plain(&source)),
    }

    Ok(())
}

fn print_usage() {
    println!("sfhl {} - SwiftFlow syntax highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: sfhl [OPTIONS] [CODE...]");
    println!();
    println!("CODE words are joined with spaces. Without CODE a built-in");
    println!("sample is highlighted.");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!("  --no-color     Print plain text");
    println!("  --tokens       Print one category and token per line");
    println!("  --suggest      Print completion hints instead of highlighting");
    println!("  -              Read code from standard input");
    println!();
    println!("Environment:");
    println!("  SFHL_CONFIG    Config file (default ~/.sfhl.toml)");
    println!("  NO_COLOR       Disable colors when set");
    println!("  RUST_LOG       Log filter (default warn)");
}

fn print_version() {
    println!("sfhl {}", env!("CARGO_PKG_VERSION"));
}
