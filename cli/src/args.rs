//! Parsing command-line arguments.

use clap::{
    builder::{PossibleValuesParser, TypedValueParser},
    crate_description, crate_name, crate_version,
    error::ErrorKind,
    value_parser, Arg, ArgAction, ArgMatches, Command, Error,
};
use seatsim_lib::{Config, Grid, Parallelism, Visibility};
use std::{
    ffi::{OsStr, OsString},
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) grid: Grid,
    pub(crate) print: bool,
    pub(crate) verbose: u8,
}

impl Args {
    /// Parses the command-line arguments, the configuration file and the input.
    pub(crate) fn parse() -> Result<Self, Error> {
        Args::parse_from(std::env::args_os(), io::stdin())
    }

    /// Parses the given arguments.
    ///
    /// The seat layout is read from `stdin` if `INPUT` is omitted or `-`.
    pub(crate) fn parse_from<I, T, R>(args: I, stdin: R) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        R: Read,
    {
        let mut command = command();
        let matches = command.try_get_matches_from_mut(args)?;

        let config =
            config_from(&matches).map_err(|e| command.error(ErrorKind::InvalidValue, e))?;

        let input = matches
            .get_one::<PathBuf>("INPUT")
            .filter(|path| path.as_os_str() != "-");
        let text = read_input(input.map(PathBuf::as_path), stdin)
            .map_err(|e| command.error(ErrorKind::Io, e))?;
        let grid = text
            .parse::<Grid>()
            .map_err(|e| command.error(ErrorKind::InvalidValue, e))?;

        Ok(Args {
            config,
            grid,
            print: matches.get_flag("PRINT"),
            verbose: matches.get_count("VERBOSE"),
        })
    }
}

fn command() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .long_about(
            "Simulates people choosing seats in a waiting area\n\
             \n\
             Every round, all seats are updated at once: an empty seat with no \
             occupied seat in sight is taken, and an occupied seat with too many \
             occupied seats in sight is left. Rounds repeat until nothing changes, \
             then the number of occupied seats is printed.\n\
             \n\
             The input is a seat layout, one row per line:\n\
             * Floor is represented by `.`;\n\
             * Empty seats are represented by `L`;\n\
             * Occupied seats are represented by `#`.\n",
        )
        .arg(
            Arg::new("INPUT")
                .help("Seat layout file")
                .long_help(
                    "Seat layout file\n\
                     Reads from the standard input if omitted or `-`.\n",
                )
                .index(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("MODE")
                .help("How far a seat looks")
                .long_help(
                    "How far a seat looks\n\
                     \"adjacent\" only looks at the eight neighboring cells.\n\
                     \"line-of-sight\" looks at the first seat in each of the eight \
                     directions, skipping floor.\n",
                )
                .short('m')
                .long("mode")
                .value_parser(
                    PossibleValuesParser::new(["adjacent", "line-of-sight", "a", "l"])
                        .try_map(|s| s.parse::<Visibility>()),
                ),
        )
        .arg(
            Arg::new("THRESHOLD")
                .help("Number of occupied seats in sight that makes a seat empty")
                .long_help(
                    "Number of occupied seats in sight that makes a seat empty\n\
                     Defaults to 4 for \"adjacent\", 5 for \"line-of-sight\".\n",
                )
                .short('t')
                .long("threshold")
                .value_parser(value_parser!(u8).range(1..=8)),
        )
        .arg(
            Arg::new("PARALLELISM")
                .help("How the work of a round is spread over tasks")
                .long_help(
                    "How the work of a round is spread over tasks\n\
                     \"serial\" computes every cell on one thread.\n\
                     \"cell\" uses one task per cell.\n\
                     \"direction\" also uses one task per direction of each cell.\n",
                )
                .short('p')
                .long("parallelism")
                .value_parser(
                    PossibleValuesParser::new(["serial", "cell", "direction", "s", "c", "d"])
                        .try_map(|s| s.parse::<Parallelism>()),
                ),
        )
        .arg(
            Arg::new("THREADS")
                .help("Number of worker threads")
                .short('j')
                .long("threads")
                .value_parser(value_parser!(u64).range(1..).try_map(usize::try_from)),
        )
        .arg(
            Arg::new("MAX")
                .help("Maximal number of rounds")
                .long_help(
                    "Maximal number of rounds\n\
                     If this value is set to 0, it means there is no limitation.\n",
                )
                .long("max-rounds")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Configuration file")
                .long_help(
                    "Configuration file\n\
                     JSON, YAML or TOML, chosen by the file extension.\n\
                     Options given on the command line override the file.\n",
                )
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("PRINT")
                .help("Prints the final seat layout before the count")
                .long("print")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Logs more; can be repeated")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
}

/// Builds the configuration: the configuration file first,
/// then the options given on the command line.
fn config_from(matches: &ArgMatches) -> Result<Config, String> {
    let mut config = match matches.get_one::<PathBuf>("CONFIG") {
        Some(path) => read_config(path)?,
        None => Config::default(),
    };
    if let Some(&visibility) = matches.get_one::<Visibility>("MODE") {
        config = config.set_visibility(visibility);
    }
    if let Some(&threshold) = matches.get_one::<u8>("THRESHOLD") {
        config = config.set_threshold(Some(usize::from(threshold)));
    }
    if let Some(&parallelism) = matches.get_one::<Parallelism>("PARALLELISM") {
        config = config.set_parallelism(parallelism);
    }
    if let Some(&threads) = matches.get_one::<usize>("THREADS") {
        config = config.set_threads(Some(threads));
    }
    if let Some(&max_rounds) = matches.get_one::<u64>("MAX") {
        let max_rounds = match max_rounds {
            0 => None,
            i => Some(i),
        };
        config = config.set_max_rounds(max_rounds);
    }
    config.rule().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Reads the seat layout from a file, or from `stdin`.
fn read_input<R: Read>(path: Option<&Path>, mut stdin: R) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Reads a configuration file.
fn read_config(path: &Path) -> Result<Config, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("unable to read {}: {}", path.display(), e))?;
    let extension = path.extension().and_then(OsStr::to_str).unwrap_or_default();
    parse_config(&text, extension)
}

/// Decodes a configuration in the format given by the file extension.
fn parse_config(text: &str, extension: &str) -> Result<Config, String> {
    match extension {
        "json" => serde_json::from_str(text).map_err(|e| e.to_string()),
        "yaml" | "yml" => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        "toml" => toml::from_str(text).map_err(|e| e.to_string()),
        _ => Err(format!(
            "unknown configuration format {:?}, expected json, yaml or toml",
            extension
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_formats() {
        let expected = Config::new(Visibility::LineOfSight)
            .set_parallelism(Parallelism::PerDirection)
            .set_threads(Some(4));

        let json = r#"{ "visibility": "line-of-sight", "parallelism": "direction", "threads": 4 }"#;
        assert_eq!(parse_config(json, "json"), Ok(expected.clone()));

        let yaml = "visibility: line-of-sight\nparallelism: direction\nthreads: 4\n";
        assert_eq!(parse_config(yaml, "yml"), Ok(expected.clone()));

        let toml = "visibility = \"line-of-sight\"\nparallelism = \"direction\"\nthreads = 4\n";
        assert_eq!(parse_config(toml, "toml"), Ok(expected));
    }

    #[test]
    fn partial_config() {
        let config = parse_config("threshold = 6\nmax_rounds = 50\n", "toml").unwrap();
        assert_eq!(config.visibility, Visibility::Adjacent);
        assert_eq!(config.threshold, Some(6));
        assert_eq!(config.max_rounds, Some(50));
    }

    #[test]
    fn unknown_format() {
        assert!(parse_config("", "ini").is_err());
        assert!(parse_config("visibility = \"sideways\"", "toml").is_err());
    }

    fn parse_args(args: &[&str], stdin: &str) -> Result<Args, Error> {
        Args::parse_from(
            ["seatsim"].iter().chain(args).copied(),
            stdin.as_bytes(),
        )
    }

    #[test]
    fn stdin() -> Result<(), Error> {
        let expected: Grid = "L.#\n#L.".parse().unwrap();
        assert_eq!(parse_args(&["-"], "L.#\n#L.\n")?.grid, expected);
        assert_eq!(parse_args(&[], "L.#\n#L.\n")?.grid, expected);
        assert!(parse_args(&[], "L?\n").is_err());
        Ok(())
    }

    #[test]
    fn max_rounds() -> Result<(), Error> {
        assert_eq!(parse_args(&[], "L")?.config.max_rounds, Some(10_000));
        assert_eq!(
            parse_args(&["--max-rounds", "20"], "L")?.config.max_rounds,
            Some(20)
        );
        assert_eq!(
            parse_args(&["--max-rounds", "0"], "L")?.config.max_rounds,
            None
        );
        Ok(())
    }

    #[test]
    fn threads() -> Result<(), Error> {
        assert_eq!(parse_args(&[], "L")?.config.threads, None);
        assert_eq!(parse_args(&["-j", "3"], "L")?.config.threads, Some(3));
        Ok(())
    }

    #[test]
    fn invalid_options() {
        assert!(parse_args(&["-t", "9"], "L").is_err());
        assert!(parse_args(&["-t", "0"], "L").is_err());
        assert!(parse_args(&["-j", "0"], "L").is_err());
        assert!(parse_args(&["-m", "sideways"], "L").is_err());
    }

    #[test]
    fn options_override_config_file() -> Result<(), Error> {
        let path = std::env::temp_dir().join(format!("seatsim-{}.toml", std::process::id()));
        fs::write(
            &path,
            "visibility = \"line-of-sight\"\nthreshold = 6\nthreads = 3\nmax_rounds = 50\n",
        )
        .unwrap();
        let path_str = path.to_str().unwrap();

        let from_file = parse_args(&["-c", path_str, "-"], "L");
        let overridden = parse_args(
            &["-c", path_str, "-t", "2", "-p", "serial", "--max-rounds", "0", "-"],
            "L",
        );
        fs::remove_file(&path).unwrap();

        let config = from_file?.config;
        assert_eq!(config.visibility, Visibility::LineOfSight);
        assert_eq!(config.threshold, Some(6));
        assert_eq!(config.threads, Some(3));
        assert_eq!(config.max_rounds, Some(50));

        let config = overridden?.config;
        assert_eq!(config.visibility, Visibility::LineOfSight);
        assert_eq!(config.threshold, Some(2));
        assert_eq!(config.parallelism, Parallelism::Serial);
        assert_eq!(config.threads, Some(3));
        assert_eq!(config.max_rounds, None);
        Ok(())
    }
}
