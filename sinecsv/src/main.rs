use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sinecsv::{run, SamplerConfig, Variant};

/// Writes sin(x) sampled over one period to sine.csv.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Angle mapping: full-period (1000 samples) or centi-step (628 samples)
    #[arg(long, default_value_t = Variant::FullPeriod)]
    variant: Variant,
}

// Falls back to `warn` when RUST_LOG is unset or unparsable.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = SamplerConfig::new(args.variant);
    run(&config).with_context(|| format!("failed to write {}", config.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_env_filter_defaults_to_warn() {
        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_env_filter_honors_plain_level() {
        assert_eq!(env_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(env_filter(Some("info")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_env_filter_honors_target_level() {
        assert_eq!(
            env_filter(Some("sinecsv=debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_args_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_variant() {
        let args = Args::try_parse_from(["sinecsv"]).unwrap();
        assert_eq!(args.variant, Variant::FullPeriod);

        let args = Args::try_parse_from(["sinecsv", "--variant", "centi-step"]).unwrap();
        assert_eq!(args.variant, Variant::CentiStep);

        assert!(Args::try_parse_from(["sinecsv", "--variant", "quarter"]).is_err());
        assert!(Args::try_parse_from(["sinecsv", "extra"]).is_err());
    }
}
