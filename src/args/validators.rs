use super::types::{Args, Command, WaitMode};

/// Validates argument combinations after parsing
///
/// # Errors
///
/// Returns an error if key files are not paired, if `--dry-run` is combined
/// with connection settings, or if the demo poll settings cannot make progress.
pub fn validate(args: &Args) -> Result<(), String> {
    validate_key_files(args)?;
    validate_dry_run(args)?;
    if let Command::Demo(demo) = &args.command {
        if demo.wait == WaitMode::Poll && demo.poll_interval_ms == 0 {
            return Err("--poll-interval-ms must be greater than 0 with --wait poll".to_string());
        }
    }
    Ok(())
}

fn validate_key_files(args: &Args) -> Result<(), String> {
    match (&args.access_key_file, &args.secret_key_file) {
        (Some(_), None) | (None, Some(_)) => Err(
            "--access-key-file and --secret-key-file must be given together".to_string(),
        ),
        _ => Ok(()),
    }
}

fn validate_dry_run(args: &Args) -> Result<(), String> {
    if !args.dry_run {
        return Ok(());
    }
    if args.endpoint_url.is_some() || args.access_key_file.is_some() {
        return Err(
            "--dry-run does not connect anywhere; drop --endpoint-url and key files".to_string(),
        );
    }
    Ok(())
}
