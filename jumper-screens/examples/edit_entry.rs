//! Entry screens - create a location, then edit it

use jumper_form_crossterm::CrosstermFormBackend;
use jumper_screens::{EntryAction, create_entry, edit_entry};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let backend = CrosstermFormBackend::new();

    let Some(mut location) = create_entry(&backend)? else {
        println!("nothing created");
        return Ok(());
    };
    println!("created {} ({location})", location.name);

    match edit_entry(&backend, &mut location)? {
        EntryAction::Saved => println!("saved {} ({location})", location.name),
        EntryAction::DeleteRequested => println!("delete {}?", location.name),
        EntryAction::Unchanged => println!("{} left unchanged", location.name),
    }
    Ok(())
}
