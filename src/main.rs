use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};

use readable_regex::escape_names::{fragment_names, named_fragment};
use readable_regex::{
    ClassPart, Fragment, Quantifier, any_character_except, any_one_of, build, control_character,
    hex_character, octal_character, text, unicode_character,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Quantifier applied to the generated fragment, e.g. `+`, `{2,4}?`, `*+`
    #[arg(short = 'r', long, value_name = "QUANTIFIER", global = true)]
    repeat: Option<String>,

    /// Log what is being built
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Literal text, metacharacters escaped
    Literal {
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,
    },
    /// A character class
    Class {
        /// Match any character except the listed ones
        #[arg(short = 'x', long)]
        except: bool,

        /// Characters to include, as one list part
        #[arg(short = 'c', long, value_name = "CHARS")]
        chars: Vec<String>,

        /// An inclusive range written as `A-B`
        #[arg(short = 'R', long, value_name = "A-B")]
        range: Vec<String>,
    },
    /// A named escape sequence such as `tab` or `digit`
    Escape {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// A character given by 1-3 octal digits
    Octal { digits: String },
    /// A character given by 2 or 4 hex digits
    Hex { digits: String },
    /// A character given by 4 hex digits
    Unicode { digits: String },
    /// A control character
    Control { letter: char },
}

fn parse_range(spec: &str) -> Result<ClassPart> {
    match spec.chars().collect::<Vec<_>>()[..] {
        [from, '-', to] => Ok(ClassPart::range(from, to)),
        _ => bail!("Range must be written as A-B, got {spec:?}"),
    }
}

fn fragment(command: Command) -> Result<Fragment> {
    let fragment = match command {
        Command::Literal { text: words } => text(&words.concat()),
        Command::Class {
            except,
            chars,
            range,
        } => {
            if chars.iter().any(String::is_empty) {
                bail!("--chars needs at least one character");
            }
            let mut parts: Vec<_> = chars
                .iter()
                .map(|c| ClassPart::characters(c.chars()))
                .collect();
            for spec in &range {
                parts.push(parse_range(spec)?);
            }
            if parts.is_empty() {
                bail!("A class needs at least one --chars or --range");
            }
            if except {
                any_character_except(&parts)
            } else {
                any_one_of(&parts)
            }
        }
        Command::Escape { name } => named_fragment(&name).ok_or_else(|| {
            anyhow!(
                "Unknown escape {name:?}, expected one of: {}",
                fragment_names().join(", ")
            )
        })?,
        Command::Octal { digits } => octal_character(&digits)?,
        Command::Hex { digits } => hex_character(&digits)?,
        Command::Unicode { digits } => unicode_character(&digits)?,
        Command::Control { letter } => control_character(letter)?,
    };
    Ok(fragment)
}

/// Build the pattern for `command`, quantified by `repeat` when given.
fn render(command: Command, repeat: Option<&str>) -> Result<String> {
    let quantifier = repeat
        .map(str::parse::<Quantifier>)
        .transpose()
        .context("Invalid --repeat")?;

    let mut fragment = fragment(command)?;
    if let Some(quantifier) = quantifier {
        fragment = quantifier.apply(&[fragment]);
    }
    log::debug!("{fragment:?}");

    Ok(build(&[fragment]))
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    println!("{}", render(args.command, args.repeat.as_deref())?);
    Ok(())
}
