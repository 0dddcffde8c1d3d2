use std::io::Write;
use termcolor::{BufferedStandardStream, ColorChoice, WriteColor};
use washmath::{get_opts, run_washmath, WashmathResult};

fn main_impl() -> Result<(), Box<dyn std::error::Error>> {
    let mut ch_stdout = BufferedStandardStream::stdout(ColorChoice::Auto);
    let mut ch_stderr = BufferedStandardStream::stderr(ColorChoice::Auto);
    let is_tty = atty::is(atty::Stream::Stderr);
    let use_color = is_tty && ch_stderr.supports_color();

    let opts = match get_opts(|app| app.get_matches_safe(), use_color) {
        Ok(opts) => opts,
        Err(err) => err.exit(),
    };
    log::debug!("{:?}", opts);
    let WashmathResult {
        code,
        stdout,
        stderr,
    } = run_washmath(opts);

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
    pretty_env_logger::init();
    let out = std::panic::catch_unwind(main_impl);

    match out {
        Ok(Err(err)) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
        Err(..) => {
            eprint!("\nnote: you found an internal washmath error!\n");
            eprint!("\nnote: we would appreciate a bug report with the command that caused it\n");
            std::process::exit(2);
        }
        Ok(Ok(())) => {}
    }
}
