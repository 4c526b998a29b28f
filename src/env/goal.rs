//! The fixed catalog of goals an agent can be scored against.
//!
//! Goals are a closed enum rather than a string-keyed handler table: the
//! validator dispatches with an exhaustive `match`, so adding a goal without
//! wiring its predicate is a compile error. Rewards and difficulty tiers are
//! fixed at compile time; the difficulty tier is informational only and never
//! enters scoring.

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the environment.
#[derive(Debug, Clone, Error)]
pub enum EnvError {
    #[error("Unknown goal: {name}")]
    UnknownGoal { name: String },
}

/// Informational difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
}

/// A goal the agent can attempt. One variant per catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    CreateUrgentTask,
    CompleteThreeTasks,
    OrganizeByPriority,
    ClearOverdueTasks,
    AssignAllTasks,
    Achieve80Completion,
    OrganizeWithTags,
    ArchiveCompleted,
    BalanceWorkload,
    PrioritizeUrgentItems,
    CreateSprintBacklog,
    EliminateTechnicalDebt,
    AchieveZeroBugs,
    OptimizeTaskFlow,
    TeamCollaboration,
    DeadlineManagement,
    QualityAssurance,
    PerfectOrganization,
    ReduceWip,
    FeatureCompletion,
    CleanSlate,
    MilestoneAchievement,
    DocumentationComplete,
    NoLowPriorityInProgress,
}

impl Goal {
    /// The full catalog, in reference order.
    pub const ALL: [Goal; 24] = [
        Goal::CreateUrgentTask,
        Goal::CompleteThreeTasks,
        Goal::OrganizeByPriority,
        Goal::ClearOverdueTasks,
        Goal::AssignAllTasks,
        Goal::Achieve80Completion,
        Goal::OrganizeWithTags,
        Goal::ArchiveCompleted,
        Goal::BalanceWorkload,
        Goal::PrioritizeUrgentItems,
        Goal::CreateSprintBacklog,
        Goal::EliminateTechnicalDebt,
        Goal::AchieveZeroBugs,
        Goal::OptimizeTaskFlow,
        Goal::TeamCollaboration,
        Goal::DeadlineManagement,
        Goal::QualityAssurance,
        Goal::PerfectOrganization,
        Goal::ReduceWip,
        Goal::FeatureCompletion,
        Goal::CleanSlate,
        Goal::MilestoneAchievement,
        Goal::DocumentationComplete,
        Goal::NoLowPriorityInProgress,
    ];

    /// Unique registry key for the goal.
    pub fn name(&self) -> &'static str {
        match self {
            Goal::CreateUrgentTask => "create_urgent_task",
            Goal::CompleteThreeTasks => "complete_three_tasks",
            Goal::OrganizeByPriority => "organize_by_priority",
            Goal::ClearOverdueTasks => "clear_overdue_tasks",
            Goal::AssignAllTasks => "assign_all_tasks",
            Goal::Achieve80Completion => "achieve_80_completion",
            Goal::OrganizeWithTags => "organize_with_tags",
            Goal::ArchiveCompleted => "archive_completed",
            Goal::BalanceWorkload => "balance_workload",
            Goal::PrioritizeUrgentItems => "prioritize_urgent_items",
            Goal::CreateSprintBacklog => "create_sprint_backlog",
            Goal::EliminateTechnicalDebt => "eliminate_technical_debt",
            Goal::AchieveZeroBugs => "achieve_zero_bugs",
            Goal::OptimizeTaskFlow => "optimize_task_flow",
            Goal::TeamCollaboration => "team_collaboration",
            Goal::DeadlineManagement => "deadline_management",
            Goal::QualityAssurance => "quality_assurance",
            Goal::PerfectOrganization => "perfect_organization",
            Goal::ReduceWip => "reduce_wip",
            Goal::FeatureCompletion => "feature_completion",
            Goal::CleanSlate => "clean_slate",
            Goal::MilestoneAchievement => "milestone_achievement",
            Goal::DocumentationComplete => "documentation_complete",
            Goal::NoLowPriorityInProgress => "no_low_priority_in_progress",
        }
    }

    /// Human-readable objective shown to agents.
    pub fn description(&self) -> &'static str {
        match self {
            Goal::CreateUrgentTask => "Create a new task with 'urgent' priority",
            Goal::CompleteThreeTasks => "Mark at least 3 tasks as completed",
            Goal::OrganizeByPriority => {
                "Ensure no high priority task is left in the todo column"
            }
            Goal::ClearOverdueTasks => "Complete or delete all tasks with past due dates",
            Goal::AssignAllTasks => "Assign all unassigned tasks to team members",
            Goal::Achieve80Completion => "Achieve at least 80% task completion rate",
            Goal::OrganizeWithTags => "Add at least 2 tags to every task for better organization",
            Goal::ArchiveCompleted => "Archive all completed tasks to clean up the board",
            Goal::BalanceWorkload => {
                "Distribute tasks evenly across all team members (max difference of 2 tasks)"
            }
            Goal::PrioritizeUrgentItems => "Ensure all urgent tasks are in progress",
            Goal::CreateSprintBacklog => {
                "Create at least 5 new tasks with 'sprint' tags and assign them"
            }
            Goal::EliminateTechnicalDebt => {
                "Complete or archive all tasks tagged with 'refactor' or 'technical-debt'"
            }
            Goal::AchieveZeroBugs => "Complete or delete all tasks tagged with 'bug'",
            Goal::OptimizeTaskFlow => {
                "Ensure todo < in_progress < completed (pipeline optimization)"
            }
            Goal::TeamCollaboration => {
                "Ensure every team member has at least one task in each status category"
            }
            Goal::DeadlineManagement => {
                "Ensure all tasks due within 3 days are in_progress or completed"
            }
            Goal::QualityAssurance => "Add 'tested' or 'reviewed' tags to all completed tasks",
            Goal::PerfectOrganization => "All tasks must have: assignee, 2+ tags, and due date",
            Goal::ReduceWip => "Reduce work-in-progress to maximum 5 tasks",
            Goal::FeatureCompletion => "Complete all tasks tagged with 'feature'",
            Goal::CleanSlate => {
                "Archive or complete all tasks - only archived tasks should remain"
            }
            Goal::MilestoneAchievement => "Complete at least 10 tasks in a single episode",
            Goal::DocumentationComplete => "All tasks tagged 'documentation' must be completed",
            Goal::NoLowPriorityInProgress => {
                "Ensure no low priority tasks are in_progress when high priority tasks exist"
            }
        }
    }

    /// Fixed reward granted when the goal's predicate passes.
    pub fn reward(&self) -> f64 {
        match self {
            Goal::CreateUrgentTask => 10.0,
            Goal::CompleteThreeTasks => 15.0,
            Goal::OrganizeByPriority => 20.0,
            Goal::ClearOverdueTasks => 25.0,
            Goal::AssignAllTasks => 15.0,
            Goal::Achieve80Completion => 30.0,
            Goal::OrganizeWithTags => 20.0,
            Goal::ArchiveCompleted => 15.0,
            Goal::BalanceWorkload => 25.0,
            Goal::PrioritizeUrgentItems => 20.0,
            Goal::CreateSprintBacklog => 30.0,
            Goal::EliminateTechnicalDebt => 25.0,
            Goal::AchieveZeroBugs => 35.0,
            Goal::OptimizeTaskFlow => 30.0,
            Goal::TeamCollaboration => 40.0,
            Goal::DeadlineManagement => 25.0,
            Goal::QualityAssurance => 20.0,
            Goal::PerfectOrganization => 35.0,
            Goal::ReduceWip => 20.0,
            Goal::FeatureCompletion => 30.0,
            Goal::CleanSlate => 50.0,
            Goal::MilestoneAchievement => 40.0,
            Goal::DocumentationComplete => 20.0,
            Goal::NoLowPriorityInProgress => 25.0,
        }
    }

    /// Informational difficulty tier.
    pub fn difficulty(&self) -> Difficulty {
        match self {
            Goal::CreateUrgentTask
            | Goal::CompleteThreeTasks
            | Goal::AssignAllTasks
            | Goal::ArchiveCompleted
            | Goal::DocumentationComplete => Difficulty::Easy,
            Goal::OrganizeByPriority
            | Goal::ClearOverdueTasks
            | Goal::OrganizeWithTags
            | Goal::BalanceWorkload
            | Goal::PrioritizeUrgentItems
            | Goal::EliminateTechnicalDebt
            | Goal::DeadlineManagement
            | Goal::QualityAssurance
            | Goal::ReduceWip
            | Goal::NoLowPriorityInProgress => Difficulty::Medium,
            Goal::Achieve80Completion
            | Goal::CreateSprintBacklog
            | Goal::AchieveZeroBugs
            | Goal::OptimizeTaskFlow
            | Goal::PerfectOrganization
            | Goal::FeatureCompletion => Difficulty::Hard,
            Goal::TeamCollaboration | Goal::CleanSlate | Goal::MilestoneAchievement => {
                Difficulty::VeryHard
            }
        }
    }

    /// Registry lookup by wire name.
    pub fn from_name(name: &str) -> Option<Goal> {
        Goal::ALL.into_iter().find(|g| g.name() == name)
    }

    /// Catalog summary for listing. Never exposes the predicate.
    pub fn summary(&self) -> GoalSummary {
        GoalSummary {
            name: self.name(),
            description: self.description(),
            reward: self.reward(),
            difficulty: self.difficulty(),
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Listing entry for one catalog goal.
#[derive(Debug, Clone, Serialize)]
pub struct GoalSummary {
    pub name: &'static str,
    pub description: &'static str,
    pub reward: f64,
    pub difficulty: Difficulty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_24_unique_names() {
        let names: HashSet<&str> = Goal::ALL.iter().map(|g| g.name()).collect();
        assert_eq!(names.len(), 24);
    }

    #[test]
    fn from_name_round_trips_every_goal() {
        for goal in Goal::ALL {
            assert_eq!(Goal::from_name(goal.name()), Some(goal));
        }
        assert_eq!(Goal::from_name("win_the_lottery"), None);
    }

    #[test]
    fn rewards_are_positive_and_sum_to_catalog_total() {
        let total: f64 = Goal::ALL.iter().map(|g| g.reward()).sum();
        assert!(Goal::ALL.iter().all(|g| g.reward() > 0.0));
        assert_eq!(total, 620.0);
    }

    #[test]
    fn difficulty_serializes_snake_case() {
        let json = serde_json::to_string(&Difficulty::VeryHard).unwrap();
        assert_eq!(json, "\"very_hard\"");
    }
}
