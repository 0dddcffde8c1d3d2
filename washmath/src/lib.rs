//! The washmath app, a command line front end over [libwashmath].

#![deny(missing_docs)]

mod diagnostics;
use diagnostics::emit_error;

use libwashmath::euler::{euler, LinearSlope, Stop};
use libwashmath::series::{to_radians, TrigFunction};
use libwashmath::{Fraction, FractionOptions};
use std::error::Error;
use std::fmt::Write;
#[allow(unused_imports)]
use clap::value_t;

/// Default `--max-iter` for `approx`.
const DEFAULT_MAX_ITER: &str = "1000000";
/// Default `--max-steps` for `euler --until`.
const DEFAULT_MAX_STEPS: &str = "10000";

/// Options to run washmath with.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// What to compute.
    pub command: Command,
    /// When true, errors will be colored.
    pub color: bool,
}

/// A washmath subcommand, with its arguments as given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print a fraction in canonical form.
    Reduce {
        /// The fraction, like `6/-8`.
        fraction: String,
        /// Keep the denominator of a zero fraction.
        keep_zero_denominator: bool,
        /// Also print the floating-point value.
        float: bool,
    },
    /// Apply a binary operator to two fractions.
    Calc {
        /// Left-hand side.
        lhs: String,
        /// One of `+`, `-`, `*`, `/`, `^`.
        op: String,
        /// Right-hand side.
        rhs: String,
    },
    /// Find the simplest fraction equal to a decimal at `f64` precision.
    Approx {
        /// The decimal.
        decimal: String,
        /// Stern-Brocot steps to try.
        max_iter: u64,
    },
    /// Evaluate a series function.
    Trig {
        /// `sin`, `cos`, `tan`, `sec`, `csc` or `exp`.
        function: String,
        /// The argument.
        x: String,
        /// Read the argument in degrees.
        degrees: bool,
        /// Terms to sum, or the function's default.
        terms: Option<u32>,
    },
    /// Tabulate the Euler method for `dy/dx = a·x + b·y + c`.
    Euler {
        /// Step size `h`.
        step_size: String,
        /// Initial `x`.
        initial_x: String,
        /// Initial `y`.
        initial_y: String,
        /// When to stop.
        stop: EulerStop,
        /// Coefficients `a,b,c`.
        slope: String,
    },
}

/// When `euler` stops, as given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum EulerStop {
    /// `--steps N`
    Steps(usize),
    /// `--until Y`, giving up after `max_steps`.
    Until {
        /// The target `y`.
        target: String,
        /// Step budget.
        max_steps: usize,
    },
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let fraction_help = "A fraction like \"3/4\", \"-2\" or \"3.08/4\"";
    let app = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .setting(clap::AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            clap::SubCommand::with_name("reduce")
                .about("Prints a fraction in lowest terms.")
                .arg(
                    clap::Arg::with_name("fraction")
                        .help(fraction_help)
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    clap::Arg::with_name("keep-zero-denominator")
                        .long("--keep-zero-denominator")
                        .help("Keep the denominator of a zero fraction, and print both parts."),
                )
                .arg(
                    clap::Arg::with_name("float")
                        .long("--float")
                        .help("Also print the floating-point value."),
                ),
        )
        .subcommand(
            clap::SubCommand::with_name("calc")
                .about("Applies an operator to two fractions.")
                .arg(
                    clap::Arg::with_name("lhs")
                        .help(fraction_help)
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    clap::Arg::with_name("op")
                        .help("Operator")
                        .required(true)
                        .allow_hyphen_values(true)
                        .possible_values(&["+", "-", "*", "/", "^"]),
                )
                .arg(
                    clap::Arg::with_name("rhs")
                        .help(fraction_help)
                        .required(true)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            clap::SubCommand::with_name("approx")
                .about("Finds the simplest fraction equal to a decimal.")
                .arg(
                    clap::Arg::with_name("decimal")
                        .help("Decimal to approximate")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    clap::Arg::with_name("max-iter")
                        .long("--max-iter")
                        .value_name("N")
                        .help("Give up after this many refinements.")
                        .takes_value(true)
                        .default_value(DEFAULT_MAX_ITER),
                ),
        )
        .subcommand(
            clap::SubCommand::with_name("trig")
                .about("Evaluates a function by its Taylor series.")
                .arg(
                    clap::Arg::with_name("function")
                        .help("One of sin, cos, tan, sec, csc, exp")
                        .required(true),
                )
                .arg(
                    clap::Arg::with_name("x")
                        .help(fraction_help)
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    clap::Arg::with_name("degrees")
                        .long("--degrees")
                        .help("Read the argument in degrees."),
                )
                .arg(
                    clap::Arg::with_name("terms")
                        .long("--terms")
                        .value_name("N")
                        .help("Number of series terms to sum.")
                        .takes_value(true),
                ),
        )
        .subcommand(
            clap::SubCommand::with_name("euler")
                .about("Tabulates the Euler method for dy/dx = a·x + b·y + c.")
                .arg(
                    clap::Arg::with_name("step-size")
                        .long("--step-size")
                        .value_name("H")
                        .required(true)
                        .takes_value(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    clap::Arg::with_name("initial-x")
                        .long("--initial-x")
                        .value_name("X")
                        .required(true)
                        .takes_value(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    clap::Arg::with_name("initial-y")
                        .long("--initial-y")
                        .value_name("Y")
                        .required(true)
                        .takes_value(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    clap::Arg::with_name("steps")
                        .long("--steps")
                        .value_name("N")
                        .help("Take exactly this many steps.")
                        .takes_value(true),
                )
                .arg(
                    clap::Arg::with_name("until")
                        .long("--until")
                        .value_name("Y")
                        .help("Step until y reaches this value.")
                        .takes_value(true)
                        .allow_hyphen_values(true),
                )
                .group(
                    clap::ArgGroup::with_name("stop")
                        .args(&["steps", "until"])
                        .required(true),
                )
                .arg(
                    clap::Arg::with_name("max-steps")
                        .long("--max-steps")
                        .value_name("N")
                        .help("With --until, give up after this many steps.")
                        .takes_value(true)
                        .default_value(DEFAULT_MAX_STEPS),
                )
                .arg(
                    clap::Arg::with_name("slope")
                        .long("--slope")
                        .value_name("A,B,C")
                        .help("Coefficients of dy/dx = a·x + b·y + c, like \"1,-1/2,0\".")
                        .required(true)
                        .takes_value(true)
                        .allow_hyphen_values(true),
                ),
        );
    let matches = parser(app)?;

    let command = match matches.subcommand() {
        ("reduce", Some(m)) => Command::Reduce {
            fraction: value(m, "fraction"),
            keep_zero_denominator: m.is_present("keep-zero-denominator"),
            float: m.is_present("float"),
        },
        ("calc", Some(m)) => Command::Calc {
            lhs: value(m, "lhs"),
            op: value(m, "op"),
            rhs: value(m, "rhs"),
        },
        ("approx", Some(m)) => Command::Approx {
            decimal: value(m, "decimal"),
            max_iter: clap::value_t!(m, "max-iter", u64)?,
        },
        ("trig", Some(m)) => Command::Trig {
            function: value(m, "function"),
            x: value(m, "x"),
            degrees: m.is_present("degrees"),
            terms: match m.value_of("terms") {
                Some(_) => Some(clap::value_t!(m, "terms", u32)?),
                None => None,
            },
        },
        ("euler", Some(m)) => Command::Euler {
            step_size: value(m, "step-size"),
            initial_x: value(m, "initial-x"),
            initial_y: value(m, "initial-y"),
            stop: match m.value_of("until") {
                Some(target) => EulerStop::Until {
                    target: target.to_owned(),
                    max_steps: clap::value_t!(m, "max-steps", usize)?,
                },
                None => EulerStop::Steps(clap::value_t!(m, "steps", usize)?),
            },
            slope: value(m, "slope"),
        },
        _ => {
            return Err(clap::Error::with_description(
                "a subcommand is required",
                clap::ErrorKind::MissingSubcommand,
            ))
        }
    };

    Ok(Opts { command, color })
}

fn value(matches: &clap::ArgMatches, name: &str) -> String {
    matches.value_of(name).unwrap_or_default().to_owned()
}

/// Output of a washmath execution.
#[derive(Debug, Default, PartialEq)]
pub struct WashmathResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
}

/// Runs washmath end-to-end.
pub fn run_washmath(opts: Opts) -> WashmathResult {
    log::debug!("running {:?}", opts.command);
    match run_command(&opts.command) {
        Ok(stdout) => WashmathResult {
            code: 0,
            stdout,
            stderr: String::new(),
        },
        Err(err) => WashmathResult {
            code: 1,
            stdout: String::new(),
            stderr: emit_error(&*err, opts.color),
        },
    }
}

fn run_command(command: &Command) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();
    match command {
        Command::Reduce {
            fraction,
            keep_zero_denominator,
            float,
        } => {
            let options = FractionOptions {
                persistent_denominator: *keep_zero_denominator,
                ..FractionOptions::default()
            };
            let fraction = Fraction::parse_with_options(fraction, options)?;
            if *keep_zero_denominator {
                write!(out, "{}/{}", fraction.numerator(), fraction.denominator())?;
            } else {
                write!(out, "{}", fraction)?;
            }
            if *float {
                write!(out, " = {}", fraction.to_f64())?;
            }
        }
        Command::Calc { lhs, op, rhs } => {
            let lhs: Fraction = lhs.parse()?;
            let rhs: Fraction = rhs.parse()?;
            let result = match op.as_str() {
                "+" => lhs.checked_add(rhs)?,
                "-" => lhs.checked_sub(rhs)?,
                "*" => lhs.checked_mul(rhs)?,
                "/" => lhs.checked_div(rhs)?,
                "^" => lhs.pow_ratio(rhs)?,
                other => return Err(format!("unknown operator \"{}\"", other).into()),
            };
            write!(out, "{}", result)?;
        }
        Command::Approx { decimal, max_iter } => {
            let decimal: f64 = decimal.trim().parse()?;
            write!(out, "{}", Fraction::approximate(decimal, *max_iter)?)?;
        }
        Command::Trig {
            function,
            x,
            degrees,
            terms,
        } => {
            let function: TrigFunction = function.parse()?;
            let mut x: Fraction = x.parse()?;
            if *degrees {
                if !function.takes_angle() {
                    return Err(format!("{} does not take an angle", function).into());
                }
                x = to_radians(&x);
            }
            let terms = terms.unwrap_or_else(|| function.default_terms());
            write!(out, "{}", function.evaluate(&x, terms)?.to_f64())?;
        }
        Command::Euler {
            step_size,
            initial_x,
            initial_y,
            stop,
            slope,
        } => {
            let step_size: Fraction = step_size.parse()?;
            let slope: LinearSlope = slope.parse()?;
            let stop = match stop {
                EulerStop::Steps(steps) => Stop::Steps(*steps),
                EulerStop::Until { target, max_steps } => Stop::Until {
                    target: target.parse()?,
                    max_steps: *max_steps,
                },
            };
            let rows = euler(
                &step_size,
                initial_x.parse()?,
                initial_y.parse()?,
                &stop,
                |x, y| Ok(slope.slope(x, y)),
            )?;
            write!(out, "n\tx\ty")?;
            for row in rows {
                write!(out, "\n{}\t{}\t{}", row.index, row.x, row.y)?;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn opts(args: &[&str]) -> Result<Opts, clap::Error> {
        let argv = std::iter::once("washmath").chain(args.iter().copied());
        get_opts(|app| app.get_matches_from_safe(argv), false)
    }

    fn run(args: &[&str]) -> WashmathResult {
        run_washmath(opts(args).unwrap())
    }

    fn ok(stdout: &str) -> WashmathResult {
        WashmathResult {
            code: 0,
            stdout: stdout.to_owned(),
            stderr: String::new(),
        }
    }

    fn assert_fails_with(result: WashmathResult, message: &str) {
        assert_eq!(result.code, 1);
        assert!(result.stdout.is_empty());
        assert!(
            result.stderr.contains(message),
            "{:?} does not contain {:?}",
            result.stderr,
            message
        );
    }

    #[test]
    fn parses_reduce() {
        assert_eq!(
            opts(&["reduce", "-3/4", "--float"]).unwrap(),
            Opts {
                command: Command::Reduce {
                    fraction: "-3/4".into(),
                    keep_zero_denominator: false,
                    float: true,
                },
                color: false,
            }
        );
    }

    #[test]
    fn parses_euler() {
        let parsed = opts(&[
            "euler",
            "--step-size",
            "1/10",
            "--initial-x",
            "-1",
            "--initial-y",
            "2",
            "--until",
            "5",
            "--slope",
            "1,-1,0",
        ])
        .unwrap();
        assert_eq!(
            parsed.command,
            Command::Euler {
                step_size: "1/10".into(),
                initial_x: "-1".into(),
                initial_y: "2".into(),
                stop: EulerStop::Until {
                    target: "5".into(),
                    max_steps: 10_000,
                },
                slope: "1,-1,0".into(),
            }
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(opts(&[]).is_err());
        assert!(opts(&["calc", "1", "%", "2"]).is_err());
        assert!(opts(&["approx", "0.5", "--max-iter", "many"]).is_err());
        assert!(opts(&["trig", "sin", "1", "--terms", "-3"]).is_err());
        assert!(opts(&[
            "euler",
            "--step-size",
            "1",
            "--initial-x",
            "0",
            "--initial-y",
            "0",
            "--slope",
            "0,0,0",
        ])
        .is_err());
    }

    #[test]
    fn reduce() {
        assert_eq!(run(&["reduce", "6/-8"]), ok("-3/4"));
        assert_eq!(run(&["reduce", "3.08/4"]), ok("77/100"));
        assert_eq!(run(&["reduce", "0/18"]), ok("0"));
        assert_eq!(run(&["reduce", "0/18", "--keep-zero-denominator"]), ok("0/18"));
        assert_eq!(run(&["reduce", "3/4", "--float"]), ok("3/4 = 0.75"));
        assert_fails_with(run(&["reduce", "1/0"]), "0 cannot be the denominator");
        assert_fails_with(run(&["reduce", "1/x"]), "\"x\"");
        assert_fails_with(run(&["reduce", "1e-200000000"]), "1e-200000000");
    }

    #[test]
    fn calc() {
        assert_eq!(run(&["calc", "1/2", "+", "1/3"]), ok("5/6"));
        assert_eq!(run(&["calc", "1/2", "-", "1/3"]), ok("1/6"));
        assert_eq!(run(&["calc", "-2/3", "*", "9"]), ok("-6"));
        assert_eq!(run(&["calc", "1/2", "/", "0.25"]), ok("2"));
        assert_eq!(run(&["calc", "2", "^", "-2"]), ok("1/4"));
        assert_eq!(run(&["calc", "4/9", "^", "0.5"]), ok("2/3"));
        assert_fails_with(run(&["calc", "1", "/", "0"]), "0 cannot be the denominator");
        assert_fails_with(run(&["calc", "0", "^", "0"]), "zeroth power");
        assert_fails_with(run(&["calc", "2", "^", "1/2"]), "no exact fractional value");
    }

    #[test]
    fn approx() {
        assert_eq!(run(&["approx", "0.318181818181818181818"]), ok("7/22"));
        assert_eq!(run(&["approx", "-2.75"]), ok("-11/4"));
        assert_eq!(run(&["approx", "1e30"]), ok("1000000000000000019884624838656"));
        assert_fails_with(
            run(&["approx", "3.141592653589793", "--max-iter", "10"]),
            "after 10 iterations",
        );
        assert_fails_with(run(&["approx", "pi"]), "invalid float literal");
    }

    #[test]
    fn trig() {
        assert_eq!(run(&["trig", "cos", "0"]), ok("1"));
        assert_eq!(run(&["trig", "sin", "1/2", "--terms", "2"]), ok(&(23. / 48f64).to_string()));

        let result = run(&["trig", "sin", "30", "--degrees"]);
        assert_eq!(result.code, 0);
        assert!((result.stdout.parse::<f64>().unwrap() - 0.5).abs() < 1e-12);

        let result = run(&["trig", "exp", "1"]);
        assert!((result.stdout.parse::<f64>().unwrap() - std::f64::consts::E).abs() < 1e-12);

        assert_fails_with(run(&["trig", "exp", "1", "--degrees"]), "does not take an angle");
        assert_fails_with(run(&["trig", "csc", "0"]), "0 cannot be the denominator");
        assert_fails_with(run(&["trig", "log", "1"]), "unknown function");
    }

    #[test]
    fn euler_table() {
        let result = run(&[
            "euler",
            "--step-size",
            "1/2",
            "--initial-x",
            "0",
            "--initial-y",
            "0",
            "--steps",
            "2",
            "--slope",
            "0,0,1",
        ]);
        assert_eq!(result, ok("n\tx\ty\n0\t0\t0\n1\t1/2\t1/2\n2\t1\t1"));
    }

    #[test]
    fn euler_gives_up() {
        let result = run(&[
            "euler",
            "--step-size",
            "1",
            "--initial-x",
            "0",
            "--initial-y",
            "0",
            "--until",
            "1",
            "--max-steps",
            "3",
            "--slope",
            "0,0,0",
        ]);
        assert_fails_with(result, "Target was not reached after 3 steps.");
    }

    #[test]
    fn errors_are_prefixed() {
        let result = run(&["reduce", "1/0"]);
        assert!(result.stderr.starts_with("error: "));
    }
}
