use super::{Demo, DemoContext};
use crate::{
    error::{Error, Result},
    ioutils::ScopedDir,
};
use log::debug;

const EXAMPLE_FILE: &str = "example.txt";
const EXAMPLE_CONTENT: &str = "Hello from a limited FS!";
const ESCAPING_PATH: &str = "../outside.txt";

pub struct ScopedFsDemo;

impl Demo for ScopedFsDemo {
    fn name(&self) -> &'static str {
        "scoped-fs"
    }

    fn title(&self) -> &'static str {
        "Directory-limited filesystem access"
    }

    fn run(&self, _ctx: &DemoContext) -> Result<Vec<String>> {
        // Removed on drop if anything below fails
        let temp_dir = tempfile::Builder::new().prefix("demo-root").tempdir()?;
        let root_path = temp_dir.path().to_path_buf();
        debug!("Scoped demo root: {}", root_path.display());

        let scoped = ScopedDir::open(&root_path)?;
        scoped.write(EXAMPLE_FILE, EXAMPLE_CONTENT)?;

        let mut lines = vec!["Files in limited FS:".to_string()];
        lines.extend(scoped.entries()?.into_iter().map(|name| format!(" - {name}")));
        lines.push(format!("Read back: {}", scoped.read_to_string(EXAMPLE_FILE)?));

        match scoped.write(ESCAPING_PATH, EXAMPLE_CONTENT) {
            Err(Error::PathOutsideRoot { path, .. }) => {
                lines.push(format!("Rejected path outside root: {path}"))
            }
            Err(e) => return Err(e),
            Ok(()) => {
                return Err(anyhow::anyhow!("'{ESCAPING_PATH}' was written outside the root").into())
            }
        }

        temp_dir.close()?;
        lines.push(format!("Temporary root removed: {}", !root_path.exists()));
        Ok(lines)
    }
}
