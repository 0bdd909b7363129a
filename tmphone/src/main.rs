use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use tmphone::{Config, KeyLevel, OutputFormat, PhoneticKeys, TMphone, Token};

#[derive(Parser)]
#[command(name = "tmphone")]
#[command(about = "Phonetic keys for Tamil words")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: plain or json
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Print the token stream next to the keys
    #[arg(long, global = true)]
    tokens: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Single word for quick encoding
    input: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode each word independently
    Encode {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Check whether two words share a key
    Compare {
        a: String,
        b: String,
        /// Key level: 0/coarse, 1/medium or 2/fine
        #[arg(short, long)]
        level: Option<KeyLevel>,
    },
    /// Show how a word is split into glyph tokens
    Tokens { word: String },
    /// Read one word per line from stdin
    Repl,
}

#[derive(Serialize)]
struct EncodedWord<'a> {
    word: &'a str,
    #[serde(flatten)]
    keys: &'a PhoneticKeys,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<&'a [Token]>,
}

#[derive(Serialize)]
struct Comparison<'a> {
    a: &'a str,
    b: &'a str,
    level: KeyLevel,
    matches: bool,
    finest_match: Option<KeyLevel>,
}

struct Printer {
    tm: TMphone,
    config: Config,
}

impl Printer {
    fn print_word(&self, out: &mut impl Write, word: &str) -> anyhow::Result<()> {
        let keys = self.tm.encode(word);
        let tokens = self.config.show_tokens.then(|| self.tm.tokenize(word));

        match self.config.output {
            OutputFormat::Plain => {
                writeln!(out, "{}\t{}", word, keys)?;
                if let Some(tokens) = &tokens {
                    write_tokens(out, tokens)?;
                }
            }
            OutputFormat::Json => {
                let rec = EncodedWord {
                    word,
                    keys: &keys,
                    tokens: tokens.as_deref(),
                };
                writeln!(out, "{}", serde_json::to_string(&rec)?)?;
            }
        }
        Ok(())
    }

    fn print_comparison(
        &self,
        out: &mut impl Write,
        a: &str,
        b: &str,
        level: KeyLevel,
    ) -> anyhow::Result<bool> {
        let ka = self.tm.encode(a);
        let kb = self.tm.encode(b);
        let cmp = Comparison {
            a,
            b,
            level,
            matches: ka.matches(&kb, level),
            finest_match: ka.match_level(&kb),
        };

        match self.config.output {
            OutputFormat::Plain => {
                writeln!(out, "{}\t{}", a, ka)?;
                writeln!(out, "{}\t{}", b, kb)?;
                let finest = cmp
                    .finest_match
                    .map_or_else(|| "none".to_string(), |l| l.to_string());
                writeln!(
                    out,
                    "{} at {} (finest shared level: {})",
                    if cmp.matches { "match" } else { "no match" },
                    level,
                    finest
                )?;
            }
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&cmp)?)?,
        }
        Ok(cmp.matches)
    }
}

fn write_tokens(out: &mut impl Write, tokens: &[Token]) -> io::Result<()> {
    for t in tokens {
        let code = if t.code.is_empty() { "-" } else { t.code };
        let marker = if t.modified { " +mod" } else { "" };
        writeln!(
            out,
            "  {}..{}\t{}\t{}\t{}{}",
            t.start, t.end, t.glyph, code, t.category, marker
        )?;
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "tmphone=info",
        1 => "tmphone=debug,tmphone_core=debug",
        _ => "tmphone=trace,tmphone_core=trace",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_toml(path)?,
        None => Config::default(),
    };
    if let Some(format) = cli.format {
        config.output = format;
    }
    if cli.tokens {
        config.show_tokens = true;
    }
    Ok(config)
}

fn run_repl(printer: &Printer) -> anyhow::Result<()> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("tmphone: type a Tamil word and press Enter (Ctrl-D to exit)");
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let raw = line.context("error reading stdin")?;
        let word = raw.trim();
        if word.is_empty() {
            continue;
        }
        printer.print_word(&mut out, word)?;
        out.flush()?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let printer = Printer {
        tm: TMphone::new(),
        config,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Encode { words }) => {
            for word in &words {
                printer.print_word(&mut out, word)?;
            }
        }
        Some(Commands::Compare { a, b, level }) => {
            let level = level.unwrap_or(printer.config.match_level);
            if !printer.print_comparison(&mut out, &a, &b, level)? {
                out.flush()?;
                std::process::exit(1);
            }
        }
        Some(Commands::Tokens { word }) => {
            let tokens = printer.tm.tokenize(&word);
            match printer.config.output {
                OutputFormat::Plain => write_tokens(&mut out, &tokens)?,
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&tokens)?)?,
            }
        }
        Some(Commands::Repl) => {
            drop(out);
            run_repl(&printer)?;
        }
        None => match cli.input {
            Some(word) => printer.print_word(&mut out, &word)?,
            None => {
                drop(out);
                run_repl(&printer)?;
            }
        },
    }
    Ok(())
}
