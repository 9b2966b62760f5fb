//! Property tests for fan-out distribution.

use std::collections::BTreeSet;
use std::path::PathBuf;

use proptest::prelude::*;
use tempfile::tempdir;

use mudsync::application::DistributeUseCase;
use mudsync::domain::entities::ScriptFile;
use mudsync::domain::services::Pipeline;
use mudsync::domain::value_objects::{DestinationLayout, ScriptScope};
use mudsync::infrastructure::LocalFs;

fn identities() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[a-z][a-z0-9_]{0,7}", 1..5)
        .prop_map(|set: BTreeSet<String>| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every identity receives byte-identical shared content.
    #[test]
    fn property_shared_fanout_identical(
        ids in identities(),
        content in "(?s).{0,200}",
    ) {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();
        let pipeline = Pipeline::forward(true);
        let layout = DestinationLayout::local(dir.path());
        let scripts = vec![ScriptFile::new("shared.js", ScriptScope::Shared, content)];

        let result = DistributeUseCase::new(&fs, &pipeline).execute(&scripts, &layout, &ids);

        prop_assert!(result.is_success());
        prop_assert_eq!(result.written.len(), ids.len());
        let outputs: BTreeSet<Vec<u8>> = ids
            .iter()
            .map(|id| std::fs::read(layout.identity_dir(id).join("shared.js")).unwrap())
            .collect();
        prop_assert_eq!(outputs.len(), 1);
    }

    /// PROPERTY: an owned script is written for its owner and nobody else.
    #[test]
    fn property_owned_never_leaks(
        ids in identities(),
        owner_index in any::<prop::sample::Index>(),
    ) {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();
        let pipeline = Pipeline::forward(false);
        let layout = DestinationLayout::remote(dir.path());
        let owner = owner_index.get(&ids).clone();
        let scripts = vec![ScriptFile::new(
            format!("{owner}/mine.js"),
            ScriptScope::owned(owner.clone()),
            "let x = 1;",
        )];

        let result = DistributeUseCase::new(&fs, &pipeline).execute(&scripts, &layout, &ids);

        prop_assert_eq!(result.written, vec![layout.identity_dir(&owner).join("mine.js")]);
        for id in ids.iter().filter(|id| **id != owner) {
            let leaked: PathBuf = layout.identity_dir(id).join("mine.js");
            prop_assert!(!leaked.exists());
        }
    }
}
