use serde::Serialize;
use site_board::{BoardSnapshot, BoardView};
use site_core::entities::{Project, Task};

use crate::cli::OutputFormat;

pub mod table;

/// Print a serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the whole board in the requested format.
pub fn print_board(snapshot: &BoardSnapshot, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(snapshot),
        OutputFormat::Table => {
            println!("{}", render_board(snapshot));
            Ok(())
        }
    }
}

pub fn print_projects(projects: &[Project], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(&projects),
        OutputFormat::Table => {
            let rows: Vec<_> = projects
                .iter()
                .map(|p| vec![p.id.clone(), p.name.clone()])
                .collect();
            println!("{}", table::render_table(&["id", "name"], &rows));
            Ok(())
        }
    }
}

fn render_board(snapshot: &BoardSnapshot) -> String {
    if let BoardView::AccessDenied { message } = &snapshot.view {
        return format!("access denied: {message}");
    }

    let mut sections = Vec::with_capacity(snapshot.columns.len());
    for state in &snapshot.columns {
        let cursor = state.cursor;
        let mut heading = format!(
            "{} ({} shown, page {}/{})",
            state.column.label(),
            state.tasks.len(),
            cursor.page,
            cursor.total_pages.max(1)
        );
        if let Some(error) = &state.error {
            heading.push_str(&format!(" [error: {error}]"));
        }

        let body = if state.tasks.is_empty() {
            "(no tasks)".to_string()
        } else {
            let rows: Vec<_> = state.tasks.iter().map(task_row).collect();
            table::render_table(&["id", "code", "title", "priority", "due", "assignee"], &rows)
        };
        sections.push(format!("{heading}\n{body}"));
    }
    sections.join("\n\n")
}

fn task_row(task: &Task) -> Vec<String> {
    let assignee = if task.is_user_in_project {
        task.assignee.full_name.clone()
    } else {
        format!("{} (left project)", task.assignee.full_name)
    };
    vec![
        task.id.clone(),
        task.task_code.clone(),
        task.title.clone(),
        task.priority.to_string(),
        task.due_date.to_string(),
        assignee,
    ]
}
