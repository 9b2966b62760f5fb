//! Static task graph
//!
//! Every task is either a leaf action or a composition of other tasks. The
//! graph is fixed at compile time; `TaskName::definition` is the whole of it.

use std::fmt;
use std::str::FromStr;

use crate::config::levenshtein;
use crate::error::MudError;

/// Which destination tree an action works on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// `<build_root>/<identity>/scripts`
    Local,
    /// `<remote_root>/<identity>/scripts`
    Remote,
}

/// Which scripts a distribute action picks up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// `<scripts_root>/<identity>/*`
    Users,
    /// `<scripts_root>/*`
    Shared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Distribute { target: Target, selection: Selection },
    Clean(Target),
    /// Listen for changes under the local root and run `on_change` for each
    Watch { on_change: TaskName },
    Import,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Children start together, no ordering guarantee
    Parallel(Vec<TaskName>),
    /// Each child starts after the previous one finished, failed or not
    Series(Vec<TaskName>),
    Action(Action),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskName {
    Build,
    BuildLocal,
    BuildLocalUsers,
    BuildLocalShared,
    BuildRemote,
    BuildRemoteUsers,
    BuildRemoteShared,
    Clean,
    CleanLocal,
    CleanRemote,
    Rebuild,
    Watch,
    WatchBuildLocal,
    WatchBuildRemote,
    Import,
    Default,
}

impl TaskName {
    pub const ALL: [TaskName; 16] = [
        TaskName::Build,
        TaskName::BuildLocal,
        TaskName::BuildLocalUsers,
        TaskName::BuildLocalShared,
        TaskName::BuildRemote,
        TaskName::BuildRemoteUsers,
        TaskName::BuildRemoteShared,
        TaskName::Clean,
        TaskName::CleanLocal,
        TaskName::CleanRemote,
        TaskName::Rebuild,
        TaskName::Watch,
        TaskName::WatchBuildLocal,
        TaskName::WatchBuildRemote,
        TaskName::Import,
        TaskName::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskName::Build => "build",
            TaskName::BuildLocal => "build:local",
            TaskName::BuildLocalUsers => "build:local:users",
            TaskName::BuildLocalShared => "build:local:shared",
            TaskName::BuildRemote => "build:remote",
            TaskName::BuildRemoteUsers => "build:remote:users",
            TaskName::BuildRemoteShared => "build:remote:shared",
            TaskName::Clean => "clean",
            TaskName::CleanLocal => "clean:local",
            TaskName::CleanRemote => "clean:remote",
            TaskName::Rebuild => "rebuild",
            TaskName::Watch => "watch",
            TaskName::WatchBuildLocal => "watch:build:local",
            TaskName::WatchBuildRemote => "watch:build:remote",
            TaskName::Import => "import",
            TaskName::Default => "default",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TaskName::Build => "build local and remote trees",
            TaskName::BuildLocal => "build the local tree",
            TaskName::BuildLocalUsers => "identity scripts into the local tree",
            TaskName::BuildLocalShared => "shared scripts into the local tree",
            TaskName::BuildRemote => "build the remote tree",
            TaskName::BuildRemoteUsers => "identity scripts into the remote tree",
            TaskName::BuildRemoteShared => "shared scripts into the remote tree",
            TaskName::Clean => "clean local and remote trees",
            TaskName::CleanLocal => "remove the local build tree",
            TaskName::CleanRemote => "remove every remote scripts directory",
            TaskName::Rebuild => "clean, then build",
            TaskName::Watch => "rebuild both trees on every source change",
            TaskName::WatchBuildLocal => "rebuild the local tree on every source change",
            TaskName::WatchBuildRemote => "rebuild the remote tree on every source change",
            TaskName::Import => "pull remote scripts back into identity sources",
            TaskName::Default => "same as watch:build:remote",
        }
    }

    pub fn definition(&self) -> Task {
        use TaskName::*;

        match self {
            BuildLocalUsers => Task::Action(Action::Distribute {
                target: Target::Local,
                selection: Selection::Users,
            }),
            BuildLocalShared => Task::Action(Action::Distribute {
                target: Target::Local,
                selection: Selection::Shared,
            }),
            BuildRemoteUsers => Task::Action(Action::Distribute {
                target: Target::Remote,
                selection: Selection::Users,
            }),
            BuildRemoteShared => Task::Action(Action::Distribute {
                target: Target::Remote,
                selection: Selection::Shared,
            }),
            BuildLocal => Task::Parallel(vec![BuildLocalUsers, BuildLocalShared]),
            BuildRemote => Task::Parallel(vec![BuildRemoteUsers, BuildRemoteShared]),
            Build => Task::Parallel(vec![BuildLocal, BuildRemote]),
            CleanLocal => Task::Action(Action::Clean(Target::Local)),
            CleanRemote => Task::Action(Action::Clean(Target::Remote)),
            Clean => Task::Parallel(vec![CleanLocal, CleanRemote]),
            Rebuild => Task::Series(vec![Clean, Build]),
            Watch => Task::Action(Action::Watch { on_change: Build }),
            WatchBuildLocal => Task::Action(Action::Watch {
                on_change: BuildLocal,
            }),
            WatchBuildRemote => Task::Action(Action::Watch {
                on_change: BuildRemote,
            }),
            Import => Task::Action(Action::Import),
            Default => Task::Parallel(vec![WatchBuildRemote]),
        }
    }

    /// Whether running this task blocks on a change listener
    pub fn watches(&self) -> bool {
        match self.definition() {
            Task::Action(Action::Watch { .. }) => true,
            Task::Action(_) => false,
            Task::Parallel(children) | Task::Series(children) => {
                children.iter().any(TaskName::watches)
            }
        }
    }

    /// Closest known name, if any is near enough to be a plausible typo
    pub fn suggest(input: &str) -> Option<&'static str> {
        TaskName::ALL
            .iter()
            .map(|t| (t.as_str(), levenshtein(input, t.as_str())))
            .filter(|(_, d)| *d <= 3)
            .min_by_key(|(_, d)| *d)
            .map(|(name, _)| name)
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskName {
    type Err = MudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskName::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| MudError::UnknownTask {
                name: s.to_string(),
                suggestion: TaskName::suggest(s).map(str::to_string),
            })
    }
}
