//! End-to-end resolution against the real process working directory

use pathway::{PathApi, Posix, ProcessWorkingDir, StaticWorkingDir, WorkingDir, POSIX, WIN32};
use tempfile::TempDir;

// The only test in this binary that moves the process working directory.
#[test]
fn test_process_working_directory_anchors_resolution() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let temp_dir = TempDir::new()?;
    let original_dir = std::env::current_dir()?;
    std::env::set_current_dir(temp_dir.path())?;

    // Read the directory back the way the provider does, so the expected
    // values below are host-independent
    let cwd = std::env::current_dir()?
        .into_os_string()
        .into_string()
        .map_err(|_| anyhow::anyhow!("non-unicode working directory"))?;

    assert_eq!(ProcessWorkingDir.current_dir()?, cwd);

    // The POSIX engine sees the directory through its own sanitizer
    let slashed = cwd.replace('\\', "/");
    let posix_cwd = match slashed.find('/') {
        Some(i) => &slashed[i..],
        None => slashed.as_str(),
    };
    assert_eq!(POSIX.resolve(&[])?, posix_cwd);
    assert_eq!(POSIX.resolve(&["notes.txt"])?, format!("{posix_cwd}/notes.txt"));

    // The Windows engine keeps the drive when the host has one
    assert_eq!(WIN32.resolve(&[])?, cwd.replace('/', "\\"));

    // Walking between two children of the working directory never depends
    // on where that directory is
    assert_eq!(POSIX.relative("dir", "dir/sub")?, "sub");
    assert_eq!(WIN32.relative("dir", "dir\\sub")?, "sub");

    std::env::set_current_dir(original_dir)?;
    Ok(())
}

#[test]
fn test_static_working_directory_ignores_the_process() {
    let api = Posix::with_working_dir(StaticWorkingDir::new("/fixed/base"));
    assert_eq!(api.resolve(&["x"]).unwrap(), "/fixed/base/x");
    assert_eq!(api.resolve(&[]).unwrap(), "/fixed/base");
}
