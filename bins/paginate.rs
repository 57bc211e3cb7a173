use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use common::utils::logging::{init_logging, LogFormat};
use configs::AppConfig;
use dotenvy::dotenv;
use pagination::{pagination, PageSummary};
use tracing::{error, info, warn};
use uuid::Uuid;

const USAGE: &str = "usage: paginate <item_count|-> <page> [items_per_page]";

/// Parsed command line: `-` as the item count means "unknown".
#[derive(Debug, PartialEq)]
struct Args {
    item_count: Option<i64>,
    page: i64,
    items_per_page: Option<i64>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut args = args.into_iter();
    let count_arg = args.next().ok_or_else(|| anyhow!(USAGE))?;
    let page_arg = args.next().ok_or_else(|| anyhow!(USAGE))?;

    let item_count = match count_arg.as_str() {
        "-" => None,
        raw => Some(raw.parse::<i64>().with_context(|| format!("invalid item_count {raw:?}"))?),
    };
    let page = page_arg
        .parse::<i64>()
        .with_context(|| format!("invalid page {page_arg:?}"))?;
    let items_per_page = args
        .next()
        .map(|raw| raw.parse::<i64>().with_context(|| format!("invalid items_per_page {raw:?}")))
        .transpose()?;

    if let Some(extra) = args.next() {
        return Err(anyhow!("unexpected argument {extra:?}\n{USAGE}"));
    }
    Ok(Args { item_count, page, items_per_page })
}

/// Load the config file, falling back to defaults that still honour the
/// environment override. The error explains why the file was not used.
fn load_config() -> (AppConfig, Option<anyhow::Error>) {
    let load_err = match AppConfig::load_and_validate() {
        Ok(cfg) => return (cfg, None),
        Err(e) => e,
    };
    let mut cfg = AppConfig::default();
    match cfg.normalize_and_validate() {
        Ok(()) => (cfg, Some(load_err)),
        Err(env_err) => (
            AppConfig::default(),
            Some(anyhow!("{load_err:#}; defaults also rejected: {env_err:#}")),
        ),
    }
}

fn summarize(cfg: &AppConfig, args: &Args) -> PageSummary {
    let per_page = args.items_per_page.unwrap_or(cfg.pagination.items_per_page);
    let mut paginator = pagination(per_page, args.item_count);
    paginator.set_base(cfg.pagination.base).set_page(args.page);
    paginator.summary()
}

fn main() -> ExitCode {
    // .env may carry RUST_LOG, CONFIG_PATH and PAGINATE_ITEMS_PER_PAGE
    dotenv().ok();

    let (cfg, config_err) = load_config();
    let format = if config_err.is_some() { LogFormat::default() } else { cfg.logging.format };
    init_logging(format);

    let run_id = Uuid::new_v4();
    let version = env!("CARGO_PKG_VERSION");
    info!(service = "paginate", event = "start", %run_id, version, "paginate starting");

    if let Some(e) = config_err {
        warn!(service = "paginate", event = "config_fallback", error = %e, "using default configuration");
    }

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            error!(service = "paginate", event = "bad_args", error = %e, "invalid arguments");
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let summary = summarize(&cfg, &args);
    info!(
        service = "paginate",
        event = "summary",
        %run_id,
        page = summary.page,
        page_count = ?summary.page_count,
        "page computed"
    );

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "paginate", event = "encode_failed", error = %e, "failed to encode summary");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // load_config reads process-wide env vars
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn load_config_with(items_per_page: Option<&str>) -> (AppConfig, Option<anyhow::Error>) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("CONFIG_PATH", "/nonexistent/paginate-test/config.toml");
        match items_per_page {
            Some(v) => std::env::set_var(configs::ITEMS_PER_PAGE_ENV, v),
            None => std::env::remove_var(configs::ITEMS_PER_PAGE_ENV),
        }
        let loaded = load_config();
        std::env::remove_var(configs::ITEMS_PER_PAGE_ENV);
        std::env::remove_var("CONFIG_PATH");
        loaded
    }

    #[test]
    fn missing_config_still_applies_env_override() {
        let (cfg, err) = load_config_with(Some("5"));
        assert_eq!(cfg.pagination.items_per_page, 5);
        let err = err.expect("missing file is reported");
        assert!(format!("{err:#}").contains("/nonexistent/paginate-test/config.toml"));
    }

    #[test]
    fn missing_config_without_env_uses_defaults() {
        let (cfg, err) = load_config_with(None);
        assert_eq!(cfg.pagination.items_per_page, 20);
        assert!(err.is_some());
    }

    #[test]
    fn invalid_env_override_reports_both_errors() {
        let (cfg, err) = load_config_with(Some("lots"));
        assert_eq!(cfg.pagination.items_per_page, 20);
        let msg = format!("{:#}", err.expect("errors are reported"));
        assert!(msg.contains("/nonexistent/paginate-test/config.toml"), "{msg}");
        assert!(msg.contains("defaults also rejected"), "{msg}");
        assert!(msg.contains(configs::ITEMS_PER_PAGE_ENV), "{msg}");
    }

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_known_and_unknown_counts() {
        assert_eq!(
            args(&["100", "2"]).unwrap(),
            Args { item_count: Some(100), page: 2, items_per_page: None }
        );
        assert_eq!(
            args(&["-", "3", "10"]).unwrap(),
            Args { item_count: None, page: 3, items_per_page: Some(10) }
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(args(&[]).is_err());
        assert!(args(&["100"]).is_err());
        assert!(args(&["many", "1"]).is_err());
        assert!(args(&["100", "1", "10", "extra"]).is_err());
    }

    #[test]
    fn summary_uses_configured_defaults() {
        let cfg = AppConfig::default();
        let s = summarize(&cfg, &Args { item_count: Some(95), page: 99, items_per_page: None });
        assert_eq!(s.items_per_page, 20);
        assert_eq!(s.page, 5);
        assert_eq!(s.length, 15);

        let s = summarize(&cfg, &Args { item_count: Some(95), page: 10, items_per_page: Some(10) });
        assert_eq!(s.length, 5);
    }
}
