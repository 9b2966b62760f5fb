//! Distribute Use Case
//!
//! 1. Render every script once through the pipeline
//! 2. Expand each rendered script into its destination set
//! 3. Write all destinations in parallel, collecting failures

use std::path::PathBuf;

use rayon::prelude::*;

use crate::application::outcome::Failure;
use crate::domain::entities::ScriptFile;
use crate::domain::ports::FileSystem;
use crate::domain::services::Pipeline;
use crate::domain::value_objects::DestinationLayout;

use super::result::DistributeResult;

struct WriteUnit<'a> {
    destination: PathBuf,
    content: &'a str,
}

pub struct DistributeUseCase<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    pipeline: &'a Pipeline,
}

impl<'a, FS: FileSystem + ?Sized> DistributeUseCase<'a, FS> {
    pub fn new(fs: &'a FS, pipeline: &'a Pipeline) -> Self {
        Self { fs, pipeline }
    }

    /// Write `scripts` into `layout` for `identities`.
    ///
    /// A failed write does not stop the remaining writes. Shared scripts land
    /// in every identity directory with identical content; identity-owned
    /// scripts land only in their owner's directory.
    pub fn execute(
        &self,
        scripts: &[ScriptFile],
        layout: &DestinationLayout,
        identities: &[String],
    ) -> DistributeResult {
        let rendered: Vec<(&ScriptFile, String)> = scripts
            .par_iter()
            .map(|script| (script, self.pipeline.apply(script.content())))
            .collect();

        let units: Vec<WriteUnit<'_>> = rendered
            .iter()
            .flat_map(|(script, content)| {
                layout
                    .destinations(script.scope(), script.file_name(), identities)
                    .into_iter()
                    .map(move |destination| WriteUnit {
                        destination,
                        content: content.as_str(),
                    })
            })
            .collect();

        let results: Vec<Result<PathBuf, Failure>> = units
            .into_par_iter()
            .map(|unit| self.write(unit))
            .collect();

        let mut result = DistributeResult {
            scripts: scripts.len(),
            ..DistributeResult::default()
        };
        for r in results {
            match r {
                Ok(path) => result.written.push(path),
                Err(failure) => result.failures.push(failure),
            }
        }
        result
    }

    fn write(&self, unit: WriteUnit<'_>) -> Result<PathBuf, Failure> {
        match self.fs.write(&unit.destination, unit.content) {
            Ok(()) => {
                tracing::debug!(path = %unit.destination.display(), "wrote script");
                Ok(unit.destination)
            }
            Err(e) => {
                tracing::warn!(path = %unit.destination.display(), error = %e, "write failed");
                Err(Failure::new(unit.destination, e))
            }
        }
    }
}
