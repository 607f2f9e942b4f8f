mod steam;
mod uninstall;

use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, error};

pub use steam::Steam;
pub use uninstall::{UNINSTALL_LISTS, UninstallList};

use crate::{
    data::{ProgramRecord, ProgramSource, ProgramsPerSource, Sources, SupportedSources},
    registry::Registry,
};

/// Reads installed programs from every supported source. A source which fails to be read is
/// logged and skipped, so the results are always as complete as possible.
#[derive(Debug)]
pub struct ProgramScanner {
    sources: Sources,
}

impl ProgramScanner {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        ProgramScanner {
            sources: Self::get_sources(&registry),
        }
    }

    pub fn get_sources(registry: &Arc<dyn Registry>) -> Sources {
        let mut sources: Sources = UninstallList::all(registry)
            .into_iter()
            .map(|list| Arc::new(list) as Arc<dyn ProgramSource>)
            .collect();
        sources.push(Arc::new(Steam::new(Arc::clone(registry))));

        sources
    }

    pub fn get_detected_sources(&self) -> Sources {
        self.sources
            .iter()
            .filter(|s| s.is_detected())
            .map(Arc::clone)
            .collect()
    }

    pub fn get_all_programs_per_source(&self) -> ProgramsPerSource {
        self.get_detected_sources()
            .iter()
            .filter_map(|s| match s.get_detected_programs() {
                Ok(programs) => Some((s.get_source_type(), programs)),
                Err(e) => {
                    error!("Could not get programs for source {}: {e}", s.get_source_type());
                    None
                }
            })
            .collect()
    }

    /// All programs from every source, with duplicates listed by more than one source removed
    pub fn get_all_programs(&self) -> Vec<ProgramRecord> {
        merge_programs(self.get_all_programs_per_source())
    }

    pub fn get_all_programs_from_specific_source(
        &self,
        source_type: SupportedSources,
    ) -> Option<Vec<ProgramRecord>> {
        self.get_detected_sources()
            .iter()
            .find(|s| s.get_source_type() == source_type)
            .and_then(|s| {
                s.get_detected_programs()
                    .map_err(|e| {
                        error!("Source detected but there was an error with getting its programs: {source_type}: {e}")
                    })
                    .ok()
            })
    }
}

/// Flattens programs from all sources, keeping the first of any entries which share a name
/// (ignoring case), install location and publisher
pub fn merge_programs(programs_per_source: ProgramsPerSource) -> Vec<ProgramRecord> {
    let programs: Vec<ProgramRecord> = programs_per_source
        .into_iter()
        .flat_map(|(_, programs)| programs)
        .collect();
    let count = programs.len();

    let merged: Vec<ProgramRecord> = programs
        .into_iter()
        .unique_by(|p| {
            (
                p.name.to_lowercase(),
                p.install_location.clone(),
                p.publisher.clone(),
            )
        })
        .collect();

    if merged.len() != count {
        debug!("Removed {} duplicate programs", count - merged.len());
    }

    merged
}
