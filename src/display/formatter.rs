//! Line formatting for task listings

use std::io::IsTerminal;

use termimad::crossterm::style::Stylize;

use crate::models::{Task, TaskStatus};

/// How status labels are drawn in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Plain,
    Colored,
}

impl Palette {
    /// Colored only on an interactive stdout, and never when NO_COLOR is set
    pub fn detect() -> Self {
        if std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal() {
            Palette::Plain
        } else {
            Palette::Colored
        }
    }

    fn status(self, status: TaskStatus) -> String {
        let label = status.label();
        match (self, status) {
            (Palette::Plain, _) => label.to_string(),
            (Palette::Colored, TaskStatus::Done) => label.green().to_string(),
            (Palette::Colored, TaskStatus::Pending) => label.yellow().bold().to_string(),
        }
    }

    /// Render one task as a single listing line
    pub fn task_line(self, task: &Task) -> String {
        format!(
            "#{} [{}] {} ({} min) created {}",
            task.id,
            self.status(task.status()),
            task.text,
            task.est_minutes,
            task.created.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
