//! Initial mock dataset for the environment.
//!
//! Every episode starts from the same 15 task templates. Assignees and due
//! dates carry a little randomness so the board looks like a real team's:
//! some tasks are unassigned and roughly one in five is already overdue.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::task::{TaskDraft, TaskPriority, TaskStatus};

/// Number of tasks in the seed dataset.
pub const SEED_TASK_COUNT: usize = 15;

/// Team roster used for assignment. `None` leaves a task unassigned.
const TEAM: [Option<&str>; 6] = [
    Some("Alice Chen"),
    Some("Bob Smith"),
    Some("Carol Williams"),
    Some("David Brown"),
    Some("Emma Davis"),
    None,
];

struct Template {
    title: &'static str,
    description: &'static str,
    status: TaskStatus,
    priority: TaskPriority,
    tags: &'static [&'static str],
}

const TEMPLATES: [Template; SEED_TASK_COUNT] = [
    Template {
        title: "Fix login authentication bug",
        description: "Users are experiencing intermittent login failures. Investigate and fix the authentication flow.",
        status: TaskStatus::InProgress,
        priority: TaskPriority::Urgent,
        tags: &["bug", "backend", "api", "sprint-2"],
    },
    Template {
        title: "Implement dark mode toggle",
        description: "Add a dark mode toggle to the settings page with persistent user preference.",
        status: TaskStatus::Todo,
        priority: TaskPriority::High,
        tags: &["feature", "frontend", "ui", "sprint-2"],
    },
    Template {
        title: "Optimize database queries",
        description: "Several API endpoints are slow. Profile and optimize N+1 query issues.",
        status: TaskStatus::Todo,
        priority: TaskPriority::High,
        tags: &["refactor", "database", "backend", "complex"],
    },
    Template {
        title: "Write API documentation",
        description: "Document all REST API endpoints with request/response examples.",
        status: TaskStatus::Completed,
        priority: TaskPriority::Medium,
        tags: &["documentation", "api", "sprint-1"],
    },
    Template {
        title: "Add unit tests for user service",
        description: "Increase test coverage for the user service module to at least 80%.",
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        tags: &["testing", "backend", "sprint-2"],
    },
    Template {
        title: "Design new landing page",
        description: "Create mockups for the new landing page with improved conversion rate.",
        status: TaskStatus::Completed,
        priority: TaskPriority::Low,
        tags: &["feature", "frontend", "ui", "sprint-1"],
    },
    Template {
        title: "Set up CI/CD pipeline",
        description: "Configure GitHub Actions for automated testing and deployment.",
        status: TaskStatus::InProgress,
        priority: TaskPriority::High,
        tags: &["refactor", "backend", "sprint-2", "complex"],
    },
    Template {
        title: "Investigate performance regression",
        description: "Page load times have increased by 30% since last deployment. Find and fix the cause.",
        status: TaskStatus::Todo,
        priority: TaskPriority::Urgent,
        tags: &["bug", "frontend", "research"],
    },
    Template {
        title: "Update dependencies",
        description: "Update all npm packages to latest stable versions and test for breaking changes.",
        status: TaskStatus::Todo,
        priority: TaskPriority::Low,
        tags: &["refactor", "frontend", "backend", "quick-win"],
    },
    Template {
        title: "Add email notifications",
        description: "Send email notifications when tasks are assigned or updated.",
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        tags: &["feature", "backend", "api", "sprint-3"],
    },
    Template {
        title: "Refactor authentication module",
        description: "Clean up authentication code and improve error handling.",
        status: TaskStatus::Completed,
        priority: TaskPriority::Low,
        tags: &["refactor", "backend", "api", "sprint-1"],
    },
    Template {
        title: "Add task filtering by date",
        description: "Allow users to filter tasks by creation date and due date ranges.",
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        tags: &["feature", "frontend", "ui", "sprint-3"],
    },
    Template {
        title: "Fix mobile responsive issues",
        description: "Several UI components break on mobile devices. Fix responsive layouts.",
        status: TaskStatus::InProgress,
        priority: TaskPriority::High,
        tags: &["bug", "frontend", "ui", "sprint-2"],
    },
    Template {
        title: "Implement task search",
        description: "Add full-text search functionality for tasks with highlighting.",
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        tags: &["feature", "backend", "database", "sprint-3"],
    },
    Template {
        title: "Create onboarding tutorial",
        description: "Build an interactive tutorial for new users to learn the platform.",
        status: TaskStatus::Todo,
        priority: TaskPriority::Low,
        tags: &["feature", "frontend", "ui", "documentation"],
    },
];

/// Days until due, by priority. Urgent work is due tomorrow.
fn due_offset_days(priority: TaskPriority) -> i64 {
    match priority {
        TaskPriority::Urgent => 1,
        TaskPriority::High => 5,
        TaskPriority::Medium => 14,
        TaskPriority::Low => 30,
    }
}

/// Build the initial dataset as drafts; the store assigns ids and timestamps.
pub fn initial_tasks() -> Vec<TaskDraft> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    TEMPLATES
        .iter()
        .map(|template| {
            let assigned_to = TEAM[rng.gen_range(0..TEAM.len())].map(str::to_string);

            // ~20% of tasks start out overdue.
            let due_date = if rng.gen_bool(0.2) {
                now - Duration::days(rng.gen_range(1..=5))
            } else {
                now + Duration::days(rng.gen_range(1..=due_offset_days(template.priority)))
            };

            TaskDraft {
                title: template.title.to_string(),
                description: Some(template.description.to_string()),
                status: template.status,
                priority: template.priority,
                tags: template.tags.iter().map(|t| t.to_string()).collect(),
                assigned_to,
                due_date: Some(due_date),
            }
        })
        .collect()
}
