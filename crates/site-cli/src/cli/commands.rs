use chrono::NaiveDate;
use clap::{Args, Subcommand};
use site_core::enums::{Column, Priority};
use site_core::filter::TaskFilter;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load and print all three board columns.
    Board(BoardArgs),
    /// Move a task between (or within) columns.
    Move(MoveArgs),
    /// Delete a task.
    Delete(DeleteArgs),
    /// List projects available to the board filter.
    Projects,
    /// Connect the push channel and print events until interrupted.
    Watch(WatchArgs),
}

/// Filter flags shared by board-loading commands.
#[derive(Clone, Debug, Default, Args)]
pub struct FilterArgs {
    /// Only tasks of this project.
    #[arg(long)]
    pub project: Option<String>,

    /// Only tasks of this priority (high, medium, low).
    #[arg(long)]
    pub priority: Option<Priority>,

    /// Earliest due date (YYYY-MM-DD).
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Latest due date (YYYY-MM-DD).
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Free-text search over title and code.
    #[arg(long)]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> TaskFilter {
        TaskFilter {
            project_id: self.project.clone(),
            priority: self.priority,
            start_date: self.start_date,
            end_date: self.end_date,
            search: self.search.clone(),
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct BoardArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Also load every remaining page of each column.
    #[arg(long)]
    pub all_pages: bool,
}

#[derive(Clone, Debug, Args)]
pub struct MoveArgs {
    /// Task id.
    pub task_id: String,

    /// Column the task is in (todo, in-progress, done).
    pub from: Column,

    /// Column to drop it into.
    pub to: Column,

    /// Position in the target column.
    #[arg(long, default_value_t = 0)]
    pub index: usize,
}

#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    /// Task id.
    pub task_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct WatchArgs {
    /// User the channel is opened for.
    #[arg(long)]
    pub user_id: String,

    /// Role of that user.
    #[arg(long)]
    pub role: String,
}
