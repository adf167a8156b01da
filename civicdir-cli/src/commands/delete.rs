use anyhow::Result;
use civicdir_core::civicdir::Civicdir;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

pub fn run(civicdir: &Civicdir, id: &str, force: bool) -> Result<()> {
    let formatter = civicdir.formatter()?;
    let store = civicdir.store();
    let stored = store.get(id)?;

    // Confirm unless --force
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete \"{}\" ({})?",
                stored.event.title,
                stored.event.formatted_date_with(&formatter)
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let removed = store.delete(id)?;
    tracing::info!(id, path = %removed.path.display(), "event deleted");

    println!("{}", format!("  Deleted: {}", removed.event.title).red());

    Ok(())
}
