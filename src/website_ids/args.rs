use clap::Parser;

/// Format: "0.1.0" without git metadata, "0.1.0@abc1234 2026-10-16" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

/// Takes no options: configuration comes from `CONFIG_JSON`, `WEBSITES`, or
/// `<install root>/configs/nginxpulse_config.json`, in that order.
#[derive(Parser, Debug)]
#[command(name = "website-ids", bin_name = "website-ids", version = get_version())]
#[command(
    about = "Print the short identifier derived for each configured website",
    long_about = None
)]
pub struct Cli {}
