use anyhow::Result;
use civicdir_core::civicdir::Civicdir;

use crate::render::EventRender;

pub fn run(civicdir: &Civicdir, id: &str) -> Result<()> {
    let formatter = civicdir.formatter()?;
    let stored = civicdir.store().get(id)?;

    for line in stored.event.render_details(&formatter) {
        println!("{}", line);
    }

    Ok(())
}
