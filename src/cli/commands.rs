// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        #[command(flatten)]
        policy: PolicyArgs,

        /// Number of passwords to generate
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,

        /// Skip computing verification hashes
        #[arg(long)]
        no_hashes: bool,
    },

    /// Estimate the strength of a policy without generating a password
    Strength {
        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// List the built-in policy presets
    Presets,

    /// Compute SHA-256, SHA-512 and PBKDF2 hashes of a password
    Hash {
        /// Password to hash (read from stdin if omitted)
        password: Option<String>,
    },

    /// Check a password against a pbkdf2_sha256$... record
    Verify {
        /// Record produced by `hash` or `generate`
        #[arg(required = true)]
        record: String,

        /// Password to check (read from stdin if omitted)
        password: Option<String>,
    },
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// Start from a named preset (conservative, standard, maximum, alphanumeric, pin, passphrase)
    #[arg(long, short)]
    pub preset: Option<String>,

    /// Password length
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Exclude uppercase letters (A-Z)
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude lowercase letters (a-z)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude numbers (0-9)
    #[arg(long)]
    pub no_numbers: bool,

    /// Exclude special symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Symbol set to draw from instead of the default
    #[arg(long, short = 's', allow_hyphen_values = true)]
    pub symbols: Option<String>,
}
