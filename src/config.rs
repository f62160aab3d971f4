//! Command-line configuration for the two binaries.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

use crate::utils::timer::TimingConfig;

/// Argument errors. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("missing round count argument")]
    MissingRoundCount,

    #[error("invalid round count {value:?}")]
    InvalidRoundCount {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("option {0} requires a value")]
    MissingValue(&'static str),

    #[error("invalid value {value:?} for {option}")]
    InvalidNumber {
        option: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown option: {0}")]
    UnknownOption(String),
}

/// Parse the round count from the first positional argument.
///
/// Any 32-bit signed value is accepted; a negative count runs zero rounds.
pub fn parse_round_count(arg: Option<&str>) -> Result<i32, ArgsError> {
    let value = arg.ok_or(ArgsError::MissingRoundCount)?;
    value
        .parse()
        .map_err(|source| ArgsError::InvalidRoundCount {
            value: value.to_string(),
            source,
        })
}

/// Options of the `dispatch-bench` runner
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessArgs {
    pub show_list: bool,
    pub show_help: bool,
    pub sizes: Vec<usize>,
    pub runs: usize,
    pub warmup: usize,
    pub seed: Option<u64>,
    pub csv_path: Option<PathBuf>,
    pub algorithm: Option<String>,
}

impl Default for HarnessArgs {
    fn default() -> Self {
        let timing = TimingConfig::default();
        Self {
            show_list: false,
            show_help: false,
            sizes: vec![64, 256, 1024, 4096],
            runs: timing.runs_per_variant,
            warmup: timing.warmup_iterations,
            seed: None,
            csv_path: None,
            algorithm: None,
        }
    }
}

fn parse_number<T>(option: &'static str, value: Option<String>) -> Result<T, ArgsError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    let value = value.ok_or(ArgsError::MissingValue(option))?;
    value.trim().parse().map_err(|source| ArgsError::InvalidNumber {
        option,
        value,
        source,
    })
}

impl HarnessArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--list" | "-l" => parsed.show_list = true,
                "--help" | "-h" => parsed.show_help = true,
                "--sizes" => {
                    let list = args.next().ok_or(ArgsError::MissingValue("--sizes"))?;
                    parsed.sizes = list
                        .split(',')
                        .filter(|s| !s.trim().is_empty())
                        .map(|s| parse_number("--sizes", Some(s.to_string())))
                        .collect::<Result<_, _>>()?;
                }
                "--runs" => parsed.runs = parse_number("--runs", args.next())?,
                "--warmup" => parsed.warmup = parse_number("--warmup", args.next())?,
                "--seed" => parsed.seed = Some(parse_number("--seed", args.next())?),
                "--csv" => {
                    let path = args.next().ok_or(ArgsError::MissingValue("--csv"))?;
                    parsed.csv_path = Some(PathBuf::from(path));
                }
                other if !other.starts_with('-') => parsed.algorithm = Some(other.to_string()),
                other => return Err(ArgsError::UnknownOption(other.to_string())),
            }
        }

        Ok(parsed)
    }

    /// Timing configuration derived from these options
    pub fn timing_config(&self) -> TimingConfig {
        TimingConfig {
            runs_per_variant: self.runs,
            warmup_iterations: self.warmup,
            seed: self.seed,
            ..TimingConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_round_count() {
        assert_eq!(parse_round_count(Some("2")).unwrap(), 2);
        assert_eq!(parse_round_count(Some("0")).unwrap(), 0);
    }

    #[test]
    fn test_round_count_negative() {
        assert_eq!(parse_round_count(Some("-5")).unwrap(), -5);
        assert_eq!(parse_round_count(Some("-2147483648")).unwrap(), i32::MIN);
    }

    #[test]
    fn test_round_count_missing() {
        assert!(matches!(
            parse_round_count(None),
            Err(ArgsError::MissingRoundCount)
        ));
    }

    #[test]
    fn test_round_count_invalid() {
        for bad in ["", "abc", "1.5", "12x", "2147483648"] {
            let err = parse_round_count(Some(bad)).unwrap_err();
            assert!(
                matches!(err, ArgsError::InvalidRoundCount { ref value, .. } if value == bad),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_harness_defaults() {
        let parsed = HarnessArgs::parse(args(&[])).unwrap();
        assert_eq!(parsed, HarnessArgs::default());
        assert_eq!(parsed.sizes, [64, 256, 1024, 4096]);
        assert_eq!(parsed.runs, 30);
        assert_eq!(parsed.warmup, 10);
    }

    #[test]
    fn test_harness_options() {
        let parsed = HarnessArgs::parse(args(&[
            "--sizes", "16, 32", "--runs", "5", "--warmup", "1", "--seed", "99", "--csv",
            "out.csv", "string_dispatch", "-l",
        ]))
        .unwrap();

        assert_eq!(parsed.sizes, [16, 32]);
        assert_eq!(parsed.runs, 5);
        assert_eq!(parsed.warmup, 1);
        assert_eq!(parsed.seed, Some(99));
        assert_eq!(parsed.csv_path, Some(PathBuf::from("out.csv")));
        assert_eq!(parsed.algorithm.as_deref(), Some("string_dispatch"));
        assert!(parsed.show_list);

        let timing = parsed.timing_config();
        assert_eq!(timing.runs_per_variant, 5);
        assert_eq!(timing.seed, Some(99));
    }

    #[test]
    fn test_harness_errors() {
        assert!(matches!(
            HarnessArgs::parse(args(&["--bogus"])),
            Err(ArgsError::UnknownOption(o)) if o == "--bogus"
        ));
        assert!(matches!(
            HarnessArgs::parse(args(&["--runs"])),
            Err(ArgsError::MissingValue("--runs"))
        ));
        assert!(matches!(
            HarnessArgs::parse(args(&["--sizes", "8,x"])),
            Err(ArgsError::InvalidNumber { option: "--sizes", .. })
        ));
    }
}
