//! Admin password setup - first-run screen in a real terminal
//!
//! Set RUST_LOG (e.g. `RUST_LOG=debug`) to see engine logs on stderr.

use jumper_form_crossterm::CrosstermFormBackend;
use jumper_screens::set_admin_password;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    match set_admin_password(&CrosstermFormBackend::new(), None)? {
        Some(password) => println!("password set ({} characters)", password.chars().count()),
        None => println!("setup aborted"),
    }
    Ok(())
}
