//! List command handler

use anyhow::Result;

use mudsync::application::tasks::{Task, TaskName};

fn composition(task: &Task) -> (&'static str, Vec<&'static str>) {
    match task {
        Task::Parallel(children) => ("parallel", children.iter().map(|c| c.as_str()).collect()),
        Task::Series(children) => ("series", children.iter().map(|c| c.as_str()).collect()),
        Task::Action(_) => ("action", Vec::new()),
    }
}

pub fn cmd_list(json: bool) -> Result<()> {
    if json {
        for name in TaskName::ALL {
            let (kind, children) = composition(&name.definition());
            let line = serde_json::json!({
                "event": "task",
                "name": name.as_str(),
                "kind": kind,
                "children": children,
                "description": name.description(),
            });
            println!("{}", serde_json::to_string(&line)?);
        }
        return Ok(());
    }

    for name in TaskName::ALL {
        let (kind, children) = composition(&name.definition());
        let shape = if children.is_empty() {
            String::new()
        } else {
            format!("{kind}({})", children.join(", "))
        };
        println!("{:<20} {:<42} {}", name.as_str(), shape, name.description());
    }
    Ok(())
}
