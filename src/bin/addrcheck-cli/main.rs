mod args;
mod logging;
mod output;

use std::io::{self, BufRead, IsTerminal, Write};

use addrcheck::{
    NormalizedEmail, ValidationOptions, normalize_bytes_with, normalize_with, validate_bytes_with,
};
use anyhow::{Context, Result};

use args::{Cli, Commands};

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let options = cli.options()?;

    let rows = if cli.stdin {
        read_batch(io::stdin().lock(), &options)?
    } else if let Some(Commands::Validate { emails }) = &cli.cmd {
        emails
            .iter()
            .map(|email| normalize_with(email, &options))
            .collect()
    } else {
        cli.check_prompt_flags()?;
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprint!("Enter an email address: ");
            io::stderr().flush()?;
        }
        return prompt(stdin.lock(), io::stdout().lock(), &options);
    };

    let bytes = output::render(&rows, &cli.format)?;
    output::emit(&bytes, cli.out.as_deref())?;

    // invalid addresses are an outcome, not a failure: exit code stays 0
    Ok(())
}

/// Single address, answered with `Valid` / `Invalid: <reason>`.
fn prompt<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    options: &ValidationOptions,
) -> Result<()> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line).context("read stdin")?;

    match validate_bytes_with(strip_newline(&line), options) {
        Ok(verdict) => writeln!(writer, "{verdict}"),
        Err(err) => writeln!(writer, "Invalid: {err}"),
    }
    .context("write stdout")?;
    writer.flush().context("flush stdout")
}

/// One row per line. Lines that are not UTF-8 are reported on stderr and skipped.
fn read_batch<R: BufRead>(
    mut reader: R,
    options: &ValidationOptions,
) -> Result<Vec<NormalizedEmail>> {
    let mut rows = Vec::new();
    let mut line = Vec::new();
    let mut lineno = 0usize;

    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line).context("read stdin")?;
        if n == 0 {
            break;
        }
        lineno += 1;

        match normalize_bytes_with(strip_newline(&line), options) {
            Ok(row) => rows.push(row),
            Err(err) => {
                #[cfg(feature = "with-tracing")]
                tracing::warn!(line = lineno, error = %err, "skipping unreadable line");
                eprintln!("line {lineno}: {err}");
            }
        }
    }
    Ok(rows)
}

fn strip_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
