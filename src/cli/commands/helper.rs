use anyhow::Result;

use super::super::args::CommonArgs;
use crate::core::{CancelFlag, KeyService, Project, cache::JsonFileStore};

/// Resolve the project and open the key cache for a command.
///
/// SIGINT is routed to the scan's cancel flag only once a full scan starts, so
/// an interrupted refresh leaves the stored cache as it was while commands that
/// never scan keep the default Ctrl-C behavior.
pub fn open_project(common: &CommonArgs) -> Result<(Project, KeyService)> {
    let project = Project::resolve(&common.path, &common.overrides())?;

    let store = match &common.cache_file {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::default(),
    };
    tracing::debug!(
        project = %project.name,
        root = %project.root.display(),
        cache = %store.path().display(),
        "opening project"
    );

    let service = KeyService::open(store).with_cancel(CancelFlag::on_interrupt());
    Ok((project, service))
}
