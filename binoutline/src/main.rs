//! Outline command-line tool: renders indented markup as a numbered
//! outline, reads outlines back, and repairs their numbering.
//!
//! Usage: outline [OPTIONS] < INPUT > OUTPUT
//!
//! Options:
//!   -e, --encode               Markup to outline (default)
//!   -d, --decode               Outline to markup
//!   -r, --repair               Outline to renumbered, re-wrapped outline
//!   -n, --numeric              Decimal numbering (1., 1.1, 1.1.1)
//!   -w, --width <N>            Wrap column [default: 79]
//!   -s, --spacing <SPACING>    mixed, single, or double [default: mixed]
//!   -v, --verbose              Log to stderr (repeat for more)
//!   -h, --help                 Print help
//!   -V, --version              Print version

use clap::{ArgAction, ArgGroup, Parser};
use liboutline::{run, Mode, Options, Spacing, Style, DEFAULT_WIDTH};
use log::LevelFilter;
use std::io;
use std::process;

const EXAMPLES: &str = "EXAMPLES:
    # Number an indented list
    outline < notes.txt > notes.outline

    # Recover the indented list
    outline --decode < notes.outline

    # Renumber an outline after editing it by hand, wrapping at 60 columns
    outline --repair -w 60 < notes.outline

    # Decimal numbering, no blank lines between items
    outline -n --single < notes.txt";

#[derive(Parser, Debug)]
#[command(name = "outline", version)]
#[command(about = "Render indented markup as a numbered outline, and back")]
#[command(after_help = EXAMPLES)]
#[command(group(ArgGroup::new("mode").args(["encode", "decode", "repair"])))]
#[command(group(ArgGroup::new("line_spacing").args(["spacing", "single", "double"])))]
struct Cli {
    /// Read indented markup and write a numbered outline (default)
    #[arg(short, long)]
    encode: bool,

    /// Read a numbered outline and write indented markup
    #[arg(short, long)]
    decode: bool,

    /// Read a numbered outline and write it renumbered and re-wrapped
    #[arg(short, long, visible_alias = "recode")]
    repair: bool,

    /// Number items with dot-joined decimals instead of roman and letters
    #[arg(short, long, visible_alias = "decimal", conflicts_with = "style")]
    numeric: bool,

    /// Numbering style: traditional or decimal
    #[arg(long, value_name = "STYLE")]
    style: Option<Style>,

    /// Column at which to wrap item text
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Blank lines between items: mixed (after wrapped items), single, or double
    #[arg(short, long, value_name = "SPACING")]
    spacing: Option<Spacing>,

    /// Never put blank lines between items
    #[arg(long)]
    single: bool,

    /// Always put a blank line between items
    #[arg(long)]
    double: bool,

    /// Log progress to stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.decode {
            Mode::Decode
        } else if self.repair {
            Mode::Recode
        } else {
            Mode::Encode
        }
    }

    fn options(&self) -> Options {
        let style = if self.numeric {
            Style::Decimal
        } else {
            self.style.unwrap_or_default()
        };
        let spacing = if self.single {
            Spacing::Single
        } else if self.double {
            Spacing::Double
        } else {
            self.spacing.unwrap_or_default()
        };
        Options {
            style,
            width: self.width,
            spacing,
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };
    init_logging(cli.verbose);

    let mode = cli.mode();
    let options = cli.options();

    if let Err(e) = run(mode, &options, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("outline").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.mode(), Mode::Encode);
        assert_eq!(cli.options(), Options::default());
    }

    #[test]
    fn test_modes() {
        assert_eq!(parse(&["-d"]).mode(), Mode::Decode);
        assert_eq!(parse(&["--repair"]).mode(), Mode::Recode);
        assert_eq!(parse(&["--recode"]).mode(), Mode::Recode);
        assert_eq!(parse(&["-e"]).mode(), Mode::Encode);
    }

    #[test]
    fn test_modes_are_exclusive() {
        assert!(Cli::try_parse_from(["outline", "-d", "-e"]).is_err());
        assert!(Cli::try_parse_from(["outline", "--decode", "--repair"]).is_err());
    }

    #[test]
    fn test_options() {
        let options = parse(&["-n", "-w", "40", "--double"]).options();
        assert_eq!(options.style, Style::Decimal);
        assert_eq!(options.width, 40);
        assert_eq!(options.spacing, Spacing::Double);

        let options = parse(&["--style", "decimal", "-s", "single"]).options();
        assert_eq!(options.style, Style::Decimal);
        assert_eq!(options.spacing, Spacing::Single);
    }

    #[test]
    fn test_bad_values() {
        assert!(Cli::try_parse_from(["outline", "-s", "triple"]).is_err());
        assert!(Cli::try_parse_from(["outline", "--style", "greek"]).is_err());
        assert!(Cli::try_parse_from(["outline", "-w", "wide"]).is_err());
        assert!(Cli::try_parse_from(["outline", "--single", "--double"]).is_err());
    }
}
