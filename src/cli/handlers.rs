// src/cli/handlers.rs
use anyhow::{anyhow, bail, Context};
use console::Style;
use serde::Serialize;
use std::io::{self, BufRead};
use std::process::ExitCode;

use crate::cli::PolicyArgs;
use crate::core::Config;
use crate::crypto::{self, Pbkdf2Hash};
use crate::generators::presets::{self, Preset};
use crate::generators::{strength, PasswordGenerator};
use crate::models::{DigestSet, PasswordPolicy, StrengthResult, StrengthTier};
use crate::utils::{format_entropy, policy_summary};

#[derive(Debug, Serialize)]
struct GeneratedPassword {
    password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hashes: Option<DigestSet>,
}

#[derive(Debug, Serialize)]
struct GenerateResponse<'a> {
    policy: &'a PasswordPolicy,
    preset: Option<&'static str>,
    strength: StrengthResult,
    passwords: Vec<GeneratedPassword>,
    warning: Option<String>,
}

#[derive(Debug, Serialize)]
struct StrengthResponse<'a> {
    policy: &'a PasswordPolicy,
    preset: Option<&'static str>,
    strength: StrengthResult,
    warning: Option<String>,
}

#[derive(Debug, Serialize)]
struct VerifyResponse {
    valid: bool,
    iterations: u32,
}

/// Turn CLI flags into a policy, enforcing the caller-side rules
/// (at least one class, length within the configured range).
pub fn resolve_policy(config: &Config, args: &PolicyArgs) -> anyhow::Result<PasswordPolicy> {
    let mut policy = match &args.preset {
        Some(id) => Preset::by_id(id)
            .ok_or_else(|| anyhow!("Unknown preset '{}'", id))?
            .policy(),
        None => config.default_policy(),
    };

    if let Some(length) = args.length {
        policy.length = length;
    }
    if args.no_uppercase {
        policy.include_uppercase = false;
    }
    if args.no_lowercase {
        policy.include_lowercase = false;
    }
    if args.no_numbers {
        policy.include_numbers = false;
    }
    if args.no_symbols {
        policy.include_symbols = false;
    }
    if let Some(symbols) = &args.symbols {
        if symbols.trim().is_empty() {
            bail!("Symbol set must contain at least one character");
        }
        policy.custom_symbols = Some(symbols.clone());
    }

    if policy.enabled_classes().is_empty() {
        bail!("At least one character type must be selected");
    }
    if policy.length == 0 || policy.length > config.max_password_length {
        bail!(
            "Password length must be between 1 and {}",
            config.max_password_length
        );
    }

    Ok(policy)
}

fn length_warning(config: &Config, policy: &PasswordPolicy) -> Option<String> {
    (policy.length < config.min_recommended_length).then(|| {
        format!(
            "Passwords shorter than {} characters are vulnerable to brute-force attacks. Consider using a longer password.",
            config.min_recommended_length
        )
    })
}

fn tier_style(tier: StrengthTier) -> Style {
    match tier {
        StrengthTier::Weak => Style::new().red().bold(),
        StrengthTier::Fair => Style::new().yellow().bold(),
        StrengthTier::Good => Style::new().green(),
        StrengthTier::Strong => Style::new().green().bold(),
        StrengthTier::Excellent => Style::new().cyan().bold(),
    }
}

fn strength_line(result: &StrengthResult) -> String {
    format!(
        "Strength: {} · {} ({}%)",
        format_entropy(result.entropy_bits),
        tier_style(result.tier).apply_to(result.tier),
        result.display_percentage
    )
}

fn print_hashes(hashes: &DigestSet) {
    println!("  SHA-256: {}", hashes.sha256);
    println!("  SHA-512: {}", hashes.sha512);
    println!("  PBKDF2:  {}", hashes.pbkdf2);
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_secret(arg: Option<String>) -> anyhow::Result<String> {
    if let Some(password) = arg {
        return Ok(password);
    }

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    let password = line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string();
    if password.is_empty() {
        bail!("No password given");
    }
    Ok(password)
}

pub async fn handle_generate(
    config: &Config,
    args: &PolicyArgs,
    count: usize,
    with_hashes: bool,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let policy = resolve_policy(config, args)?;
    if count == 0 {
        bail!("Count must be at least 1");
    }

    let mut generator = PasswordGenerator::new();
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        let password = generator.generate_password(&policy).map_err(|e| {
            log::error!("Password generation failed: {}", e);
            anyhow!("Failed to generate password")
        })?;

        let hashes = if with_hashes {
            let set = crypto::digest(&password).await.map_err(|e| {
                log::error!("Digest computation failed: {}", e);
                anyhow!("Failed to compute password hashes")
            })?;
            Some(set)
        } else {
            None
        };

        passwords.push(GeneratedPassword { password, hashes });
    }

    let response = GenerateResponse {
        policy: &policy,
        preset: presets::matching(&policy).map(|p| p.id),
        strength: strength::analyze_policy(&policy),
        passwords,
        warning: length_warning(config, &policy),
    };

    if json {
        print_json(&response)?;
        return Ok(ExitCode::SUCCESS);
    }

    for generated in &response.passwords {
        println!("{}", Style::new().bold().apply_to(&generated.password));
        if let Some(hashes) = &generated.hashes {
            print_hashes(hashes);
        }
    }
    println!("{}", strength_line(&response.strength));
    if let Some(warning) = &response.warning {
        eprintln!("{} {}", Style::new().yellow().apply_to("⚠️"), warning);
    }

    Ok(ExitCode::SUCCESS)
}

pub fn handle_strength(config: &Config, args: &PolicyArgs, json: bool) -> anyhow::Result<ExitCode> {
    let policy = resolve_policy(config, args)?;
    let response = StrengthResponse {
        policy: &policy,
        preset: presets::matching(&policy).map(|p| p.id),
        strength: strength::analyze_policy(&policy),
        warning: length_warning(config, &policy),
    };

    if json {
        print_json(&response)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", policy_summary(&policy));
    if let Some(id) = response.preset {
        println!("Preset: {}", id);
    }
    println!("{}", strength_line(&response.strength));
    if let Some(warning) = &response.warning {
        eprintln!("{} {}", Style::new().yellow().apply_to("⚠️"), warning);
    }

    Ok(ExitCode::SUCCESS)
}

pub fn handle_presets(json: bool) -> anyhow::Result<ExitCode> {
    if json {
        print_json(&Preset::all())?;
        return Ok(ExitCode::SUCCESS);
    }

    for preset in Preset::all() {
        let policy = preset.policy();
        let result = strength::analyze_policy(&policy);
        println!(
            "{:<13} {} - {}",
            Style::new().bold().apply_to(preset.id),
            preset.name,
            preset.description
        );
        println!("              {}", policy_summary(&policy));
        println!("              {}", strength_line(&result));
    }

    Ok(ExitCode::SUCCESS)
}

pub async fn handle_hash(password: Option<String>, json: bool) -> anyhow::Result<ExitCode> {
    let password = read_secret(password)?;
    let hashes = crypto::digest(&password).await.map_err(|e| {
        log::error!("Digest computation failed: {}", e);
        anyhow!("Failed to compute password hashes")
    })?;

    if json {
        print_json(&hashes)?;
    } else {
        print_hashes(&hashes);
    }

    Ok(ExitCode::SUCCESS)
}

pub async fn handle_verify(record: &str, password: Option<String>, json: bool) -> anyhow::Result<ExitCode> {
    let record: Pbkdf2Hash = record.parse().context("Invalid PBKDF2 record")?;
    let password = read_secret(password)?;

    let iterations = record.iterations();
    let valid = tokio::task::spawn_blocking(move || record.verify(&password))
        .await
        .context("Verification task failed")?
        .map_err(|e| {
            log::error!("PBKDF2 verification failed: {}", e);
            anyhow!("Failed to verify password")
        })?;

    if json {
        print_json(&VerifyResponse { valid, iterations })?;
    } else if valid {
        println!("{}", Style::new().green().bold().apply_to("✅ Password matches"));
    } else {
        println!("{}", Style::new().red().bold().apply_to("❌ Password does not match"));
    }

    Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
