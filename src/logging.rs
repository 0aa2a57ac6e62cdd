use std::{fs::File, path::Path};

use env_logger::{Builder, Env, Target};

use crate::error::Result;

/// Sends log output to `path`. The game owns the terminal while it runs, so
/// stderr is never used as a log target.
pub fn init_file_logger(path: &Path) -> Result<()> {
    let file = File::create(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
