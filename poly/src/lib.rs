//! The poly app. For the algebra behind it, see [libpoly's documentation](libpoly).
//!
//! poly builds functions from `COEF:EXP` terms on the command line, fits them through
//! `--points`, or generates random ones, and reports for each function its derivative,
//! integral, slope, extrema and intercepts.

#![deny(missing_docs)]

#[macro_use]
extern crate clap;


mod random;
pub use random::RandomPolynomialFactory;

use libpoly::{PolyError, PolyResult, Polynomial, Precision, Rational, Term};
use std::fmt;
use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};
use tracing::debug;

/// Options to run poly with.
#[derive(Debug, Clone)]
pub struct Opts {
    /// Terms of a function to analyze, as `COEF:EXP` pairs.
    pub terms: Vec<String>,
    /// Points to fit a function through, as `X,Y` pairs.
    pub points: Vec<String>,
    /// Number of random functions to generate when no terms or points are given.
    pub count: usize,
    /// When true, the derivative of each function is reported.
    pub derivative: bool,
    /// When true, the integral of each function is reported.
    pub integral: bool,
    /// When true, random functions may have fractional coefficients.
    pub fractions: bool,
    /// When true, random functions are linear.
    pub linear: bool,
    /// Lower bound of the domain searched for extrema.
    pub domain_min: f64,
    /// Upper bound of the domain searched for extrema.
    pub domain_max: f64,
    /// Seed for random generation.
    pub seed: Option<u64>,
    /// Log verbosity: 0 is silent, 1 is debug, 2 or more is trace.
    pub verbosity: u64,
    /// When true, poly's diagnostics will be colored.
    pub color: bool,
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let app = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .author(clap::crate_authors!())
        .arg(
            clap::Arg::with_name("terms")
                .value_name("COEF:EXP")
                .help(
                    "Terms of the function to analyze, like \"3/4:2\" for 3/4x^2. \
                    Write negative numbers with \"~\", like \"~1:0\".",
                )
                .multiple(true)
                .conflicts_with("points"),
        )
        .arg(
            clap::Arg::with_name("points")
                .long("points")
                .value_name("X,Y")
                .help("Fit a function through these points.")
                .takes_value(true)
                .multiple(true),
        )
        .arg(
            clap::Arg::with_name("count")
                .short("n")
                .long("count")
                .help("The number of random functions to generate.")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            clap::Arg::with_name("derivative")
                .short("d")
                .long("derivative")
                .help("Print derivatives too."),
        )
        .arg(
            clap::Arg::with_name("integral")
                .short("i")
                .long("integral")
                .help("Print integrals too."),
        )
        .arg(
            clap::Arg::with_name("fractions")
                .short("f")
                .long("fractions")
                .help("Allow fractional coefficients in random functions."),
        )
        .arg(
            clap::Arg::with_name("linear")
                .short("l")
                .long("linear")
                .help("Generate only linear random functions."),
        )
        .arg(
            clap::Arg::with_name("domain-min")
                .long("domain-min")
                .help("Domain minimum for min/max calculations.")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-inf"),
        )
        .arg(
            clap::Arg::with_name("domain-max")
                .long("domain-max")
                .help("Domain maximum for min/max calculations.")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("inf"),
        )
        .arg(
            clap::Arg::with_name("seed")
                .long("seed")
                .help("Seed random generation for reproducible output.")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log solver decisions to stderr. Repeat for per-iteration traces.")
                .multiple(true),
        );
    let matches = parser(app)?;

    let count = value_t!(matches, "count", usize)?;
    if count == 0 {
        return Err(invalid_value("Option -n requires a positive integer"));
    }
    let domain_min = value_t!(matches, "domain-min", f64)?;
    let domain_max = value_t!(matches, "domain-max", f64)?;
    if domain_min.is_nan() || domain_max.is_nan() || domain_min > domain_max {
        return Err(invalid_value(&format!(
            "[{}, {}] is not a domain",
            domain_min, domain_max
        )));
    }
    let seed = match matches.value_of("seed") {
        Some(_) => Some(value_t!(matches, "seed", u64)?),
        None => None,
    };

    Ok(Opts {
        terms: values(&matches, "terms"),
        points: values(&matches, "points"),
        count,
        derivative: matches.is_present("derivative"),
        integral: matches.is_present("integral"),
        fractions: matches.is_present("fractions"),
        linear: matches.is_present("linear"),
        domain_min,
        domain_max,
        seed,
        verbosity: matches.occurrences_of("verbose"),
        color,
    })
}

fn values(matches: &clap::ArgMatches<'_>, name: &str) -> Vec<String> {
    matches
        .values_of(name)
        .map(|values| values.map(str::to_owned).collect())
        .unwrap_or_default()
}

fn invalid_value(description: &str) -> clap::Error {
    clap::Error::with_description(description, clap::ErrorKind::InvalidValue)
}

/// Output of a poly execution.
#[derive(Default, Debug)]
pub struct PolyReport {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
}

/// Builds a [PolyReport](self::PolyReport).
struct PolyReportBuilder {
    precision: Precision,
    domain: (f64, f64),
    derivative: bool,
    integral: bool,
    color: bool,
    stdout: Vec<String>,
    stderr: Vec<String>,
}

/// Maps [UnsupportedDomain](PolyError::UnsupportedDomain) to [None](Option::None): the feature
/// does not exist for this function and is left out of the report.
fn available<T>(result: PolyResult<T>) -> PolyResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(PolyError::UnsupportedDomain(reason)) => {
            debug!("omitted from report: {}", reason);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Renders `error: <message>`, with a red `error` when `color` is set.
fn colored_error(error: &dyn fmt::Display, color: bool) -> io::Result<String> {
    let mut buffer = if color {
        Buffer::ansi()
    } else {
        Buffer::no_color()
    };
    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(buffer, "error")?;
    buffer.reset()?;
    write!(buffer, ": {}", error)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Renders a function under a different name than the `f(x)` of its display form.
fn render(name: &str, p: &Polynomial) -> String {
    if p.is_zero() {
        return format!("{} = 0", name);
    }
    let terms: Vec<_> = p.terms().map(Term::to_string).collect();
    format!("{} = {}", name, terms.join(" "))
}

impl PolyReportBuilder {
    fn new(opts: &Opts) -> Self {
        Self {
            precision: Precision::default(),
            domain: (opts.domain_min, opts.domain_max),
            derivative: opts.derivative,
            integral: opts.integral,
            color: opts.color,
            stdout: Vec::new(),
            stderr: Vec::new(),
        }
    }

    fn emit(&mut self, line: impl Into<String>) {
        self.stdout.push(line.into());
    }

    fn err(&mut self, error: &dyn fmt::Display) {
        let line = colored_error(error, self.color).unwrap_or_else(|_| format!("error: {}", error));
        self.stderr.push(line);
    }

    /// Reports everything known about `f`.
    fn describe(&mut self, f: &Polynomial) -> PolyResult<()> {
        if !self.stdout.is_empty() {
            self.emit("");
        }
        self.emit(f.to_string());

        if self.derivative {
            self.emit(render("f'(x)", &f.differentiate()));
        }
        if self.integral {
            if let Some(integral) = available(f.integrate())? {
                self.emit(format!("{} + C", render("F(x)", &integral)));
            }
        }
        if f.is_linear_function() {
            let slope = f.compute_slope()?;
            self.emit(format!("slope: {}", slope.to_plain_string()));
        }

        let (lo, hi) = self.domain;
        let precision = self.precision;
        let extrema = [
            ("min", available(f.find_minimum(lo, hi, precision))?),
            ("max", available(f.find_maximum(lo, hi, precision))?),
        ];
        for (name, x) in extrema.iter() {
            if let Some(x) = *x {
                let y = f.evaluate(x, precision);
                if !x.is_nan() && !y.is_nan() {
                    self.emit(format!("{}: ({:.6}, {:.6})", name, x, y));
                }
            }
        }

        self.emit(format!("y-intercept: {:.6}", f.evaluate(0., precision)));
        if let Some(roots) = available(f.solve(precision))? {
            for root in roots {
                self.emit(format!("x-intercept: {:.6}", root));
            }
        }
        Ok(())
    }

    fn ok(self) -> PolyReport {
        self.finish(0)
    }

    fn failed(self) -> PolyReport {
        self.finish(1)
    }

    fn finish(self, code: i32) -> PolyReport {
        PolyReport {
            code,
            stdout: self.stdout.join("\n"),
            stderr: self.stderr.join("\n"),
        }
    }
}

/// Parses a `COEF:EXP` term.
fn parse_term(term: &str) -> PolyResult<Term> {
    let mut parts = term.splitn(2, ':');
    match (parts.next(), parts.next()) {
        (Some(coefficient), Some(exponent)) => {
            Ok(Term::new(coefficient.parse::<Rational>()?, exponent.parse::<Rational>()?))
        }
        _ => Err(PolyError::MalformedInput(format!(
            r#""{}" is not a term; expected COEF:EXP"#,
            term
        ))),
    }
}

/// Parses an `X,Y` point.
fn parse_point(point: &str) -> PolyResult<(Rational, Rational)> {
    let mut parts = point.splitn(2, ',');
    match (parts.next(), parts.next()) {
        (Some(x), Some(y)) => Ok((x.parse()?, y.parse()?)),
        _ => Err(PolyError::MalformedInput(format!(
            r#""{}" is not a point; expected X,Y"#,
            point
        ))),
    }
}

/// The functions to report on: the one given by terms or points, or random ones.
fn functions(opts: &Opts) -> PolyResult<Vec<Polynomial>> {
    if !opts.terms.is_empty() {
        let terms = opts
            .terms
            .iter()
            .map(|t| parse_term(t))
            .collect::<PolyResult<Vec<_>>>()?;
        return Ok(vec![terms.into_iter().collect()]);
    }
    if !opts.points.is_empty() {
        let points = opts
            .points
            .iter()
            .map(|p| parse_point(p))
            .collect::<PolyResult<Vec<_>>>()?;
        return Ok(vec![Polynomial::fit_points(&points)?]);
    }

    let mut factory = RandomPolynomialFactory::new(opts.seed)
        .fractions(opts.fractions)
        .linear(opts.linear);
    (0..opts.count).map(|_| factory.create()).collect()
}

/// Runs poly end-to-end.
pub fn run_poly(opts: Opts) -> PolyReport {
    let mut report = PolyReportBuilder::new(&opts);

    let functions = match functions(&opts) {
        Ok(functions) => functions,
        Err(e) => {
            report.err(&e);
            return report.failed();
        }
    };

    for f in functions.iter() {
        debug!("reporting on {}", f);
        if let Err(e) = report.describe(f) {
            report.err(&e);
            return report.failed();
        }
    }
    report.ok()
}
