use crate::config::Config;
use crate::options::GridSize;
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CliCommand {
    Run(Arguments),
    Help,
    Version,
}

impl CliCommand {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<CliCommand, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(CliCommand::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CliCommand::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("wrap") => args.wraparound = Some(true),
                Arg::Long("bounded") => args.wraparound = Some(false),
                Arg::Long("grid-size") => {
                    let size = parser.value()?.parse::<u16>()?;
                    let size = GridSize::new(size).ok_or_else(|| lexopt::Error::UnexpectedValue {
                        option: String::from("grid-size"),
                        value: size.to_string().into(),
                    })?;
                    args.grid_size = Some(size);
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Long("no-bell") => args.no_bell = true,
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CliCommand::Run(args))
    }

    pub(crate) fn help_text() -> String {
        format!(
            concat!(
                "Usage: {bin} [<options>]\n",
                "\n",
                "Play Snake in the terminal\n",
                "\n",
                "Options:\n",
                "  -c, --config <FILE>   Read configuration from the given file\n",
                "      --wrap            Let the snake pass through the edges of the grid\n",
                "      --bounded         Make the edges of the grid solid walls\n",
                "      --grid-size <N>   Use an NxN grid ({min} to {max})\n",
                "      --log-file <FILE> Append log messages to the given file\n",
                "      --no-bell         Never ring the terminal bell\n",
                "  -h, --help            Display this help message and exit\n",
                "  -V, --version         Show the program version and exit\n",
            ),
            bin = env!("CARGO_PKG_NAME"),
            min = crate::consts::MIN_GRID_SIZE,
            max = crate::consts::MAX_GRID_SIZE,
        )
    }
}

/// Command-line overrides for the configuration file
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    wraparound: Option<bool>,
    grid_size: Option<GridSize>,
    log_file: Option<PathBuf>,
    no_bell: bool,
}

impl Arguments {
    pub(crate) fn apply(&self, config: &mut Config) {
        if let Some(wraparound) = self.wraparound {
            config.options.wraparound = wraparound;
        }
        if let Some(size) = self.grid_size {
            config.options.grid_size = size;
        }
        if let Some(ref path) = self.log_file {
            config.log.file = Some(path.clone());
        }
        if self.no_bell {
            config.feedback.bell = false;
        }
    }
}
