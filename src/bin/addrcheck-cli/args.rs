use addrcheck::ValidationOptions;
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

/// Without arguments, reads one address from stdin and prints
/// `Valid` or `Invalid: <reason>`. `--format` and `--out` only apply to
/// `validate` and `--stdin`.
#[derive(Parser)]
#[command(name = "addrcheck-cli")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// read addresses from stdin (one per line)
    #[arg(long)]
    pub stdin: bool,

    /// write report to file instead of stdout
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// profile: standard|long-tld
    #[arg(long, default_value = "standard")]
    pub profile: String,

    /// override the maximum TLD length of the profile
    #[arg(long)]
    pub max_tld_len: Option<usize>,

    /// keep surrounding whitespace instead of trimming it
    #[arg(long)]
    pub no_trim: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// validate each address given on the command line
    Validate {
        #[arg(required = true)]
        emails: Vec<String>,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn options(&self) -> Result<ValidationOptions> {
        let mut options = options_from_profile(&self.profile)?;
        if let Some(max) = self.max_tld_len {
            if max < options.tld_min_len {
                bail!(
                    "--max-tld-len {max} is below the minimum TLD length {}",
                    options.tld_min_len
                );
            }
            options.tld_max_len = max;
        }
        if self.no_trim {
            options.trim = false;
        }
        Ok(options)
    }

    /// Prompt mode has a fixed output; reject report flags instead of ignoring them.
    pub fn check_prompt_flags(&self) -> Result<()> {
        if self.out.is_some() {
            bail!("--out requires `validate` or --stdin");
        }
        if self.format != "human" {
            bail!("--format {} requires `validate` or --stdin", self.format);
        }
        Ok(())
    }
}

pub fn options_from_profile(profile: &str) -> Result<ValidationOptions> {
    match profile {
        "standard" => Ok(ValidationOptions::standard()),
        "long-tld" => Ok(ValidationOptions::long_tld()),
        other => bail!("unknown --profile '{other}', use: standard|long-tld"),
    }
}
