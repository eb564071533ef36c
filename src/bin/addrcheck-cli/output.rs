use std::io::Write;

use addrcheck::NormalizedEmail;
use anyhow::{Context, Result, bail};

pub fn render(rows: &[NormalizedEmail], format: &str) -> Result<Vec<u8>> {
    match format {
        "human" => Ok(render_human(rows)),
        "json" => render_json(rows),
        "ndjson" => render_ndjson(rows),
        "csv" => render_csv(rows),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

/// Writes to `out` atomically when given, to stdout otherwise.
pub fn emit(bytes: &[u8], out: Option<&str>) -> Result<()> {
    match out {
        Some(path) => write_all_atomically(path, bytes),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes).context("write stdout")?;
            stdout.flush().context("flush stdout")
        }
    }
}

fn render_human(rows: &[NormalizedEmail]) -> Vec<u8> {
    let mut buf = String::new();
    for row in rows {
        match row.verdict.reason() {
            None => buf.push_str(&format!("[VALID]   {}\n", row.original)),
            Some(reason) => buf.push_str(&format!("[INVALID] {} -> {reason}\n", row.original)),
        }
    }
    buf.into_bytes()
}

#[cfg(feature = "with-serde")]
fn render_json(rows: &[NormalizedEmail]) -> Result<Vec<u8>> {
    let mut buf = serde_json::to_vec_pretty(rows)?;
    buf.push(b'\n');
    Ok(buf)
}

#[cfg(not(feature = "with-serde"))]
fn render_json(_: &[NormalizedEmail]) -> Result<Vec<u8>> {
    bail!("format=json requires the 'with-serde' feature")
}

#[cfg(feature = "with-serde")]
fn render_ndjson(rows: &[NormalizedEmail]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    for row in rows {
        serde_json::to_writer(&mut buf, row)?;
        buf.push(b'\n');
    }
    Ok(buf)
}

#[cfg(not(feature = "with-serde"))]
fn render_ndjson(_: &[NormalizedEmail]) -> Result<Vec<u8>> {
    bail!("format=ndjson requires the 'with-serde' feature")
}

#[cfg(feature = "with-csv")]
fn render_csv(rows: &[NormalizedEmail]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["original", "local", "domain", "valid", "rule", "reason"])?;
    for row in rows {
        wtr.write_record([
            row.original.as_str(),
            row.local.as_str(),
            row.domain.as_str(),
            if row.verdict.valid { "true" } else { "false" },
            row.verdict.rule.map(|rule| rule.as_str()).unwrap_or(""),
            row.verdict.reason().unwrap_or(""),
        ])?;
    }
    Ok(wtr.into_inner()?)
}

#[cfg(not(feature = "with-csv"))]
fn render_csv(_: &[NormalizedEmail]) -> Result<Vec<u8>> {
    bail!("format=csv requires the 'with-csv' feature")
}

fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}
