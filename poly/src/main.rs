use poly::{get_opts, run_poly, Opts, PolyReport};
use std::io::Write;
use termcolor::{BufferedStandardStream, ColorChoice, WriteColor};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs a stderr logger for `-v` (debug) and `-vv` (trace).
fn init_logging(opts: &Opts) -> Result<(), Box<dyn std::error::Error>> {
    let level = match opts.verbosity {
        0 => return Ok(()),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main_impl() -> Result<(), Box<dyn std::error::Error>> {
    let mut ch_stdout = BufferedStandardStream::stdout(ColorChoice::Auto);
    let mut ch_stderr = BufferedStandardStream::stderr(ColorChoice::Auto);
    let is_tty = atty::is(atty::Stream::Stderr);
    let use_color = is_tty && ch_stderr.supports_color();

    let opts = match get_opts(|app| app.get_matches_safe(), use_color) {
        Ok(opts) => opts,
        Err(e) => e.exit(),
    };
    init_logging(&opts)?;

    let PolyReport {
        code,
        stdout,
        stderr,
    } = run_poly(opts);

    if !stderr.is_empty() {
        writeln!(&mut ch_stderr, "{}", stderr)?;
        ch_stderr.flush()?;
    }
    if !stdout.is_empty() {
        writeln!(&mut ch_stdout, "{}", stdout)?;
        ch_stdout.flush()?;
    }

    std::process::exit(code)
}

fn main() {
    let out = std::panic::catch_unwind(main_impl);

    match out {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
        Err(..) => {
            eprint!("\nnote: you found an internal poly error; this is a bug in poly.\n");
            eprint!(
                "\nnote: we would appreciate a bug report with the arguments that caused it.\n"
            );
            std::process::exit(2);
        }
    }
}
