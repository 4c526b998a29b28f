//! Goal validation: one pure predicate per catalog goal.
//!
//! `evaluate` is deterministic for a given (goal, snapshot, now) triple. The
//! clock is an explicit parameter so the time-windowed goals can be tested
//! without sleeping. No predicate mutates anything; reward accumulation is
//! the caller's job.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use super::goal::Goal;
use crate::task::{Task, TaskPriority, TaskStatus};

/// Result of evaluating one goal against a snapshot.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Verdict {
    /// Whether the goal's predicate passed
    pub completed: bool,

    /// The goal's fixed reward when completed, else 0
    pub reward: f64,

    /// Short explanation of success or of the unmet condition
    pub feedback: String,

    /// The quantities the predicate compared, for observability
    pub details: serde_json::Value,
}

impl Verdict {
    fn pass(goal: Goal, feedback: String, details: serde_json::Value) -> Self {
        Self {
            completed: true,
            reward: goal.reward(),
            feedback,
            details,
        }
    }

    fn fail(feedback: String, details: serde_json::Value) -> Self {
        Self {
            completed: false,
            reward: 0.0,
            feedback,
            details,
        }
    }
}

/// Evaluate `goal` against the full task snapshot at time `now`.
pub fn evaluate(goal: Goal, tasks: &[Task], now: DateTime<Utc>) -> Verdict {
    match goal {
        Goal::CreateUrgentTask => create_urgent_task(goal, tasks),
        Goal::CompleteThreeTasks => complete_three_tasks(goal, tasks),
        Goal::OrganizeByPriority => organize_by_priority(goal, tasks),
        Goal::ClearOverdueTasks => clear_overdue_tasks(goal, tasks, now),
        Goal::AssignAllTasks => assign_all_tasks(goal, tasks),
        Goal::Achieve80Completion => achieve_80_completion(goal, tasks),
        Goal::OrganizeWithTags => organize_with_tags(goal, tasks),
        Goal::ArchiveCompleted => archive_completed(goal, tasks),
        Goal::BalanceWorkload => balance_workload(goal, tasks),
        Goal::PrioritizeUrgentItems => prioritize_urgent_items(goal, tasks),
        Goal::CreateSprintBacklog => create_sprint_backlog(goal, tasks),
        Goal::EliminateTechnicalDebt => eliminate_technical_debt(goal, tasks),
        Goal::AchieveZeroBugs => achieve_zero_bugs(goal, tasks),
        Goal::OptimizeTaskFlow => optimize_task_flow(goal, tasks),
        Goal::TeamCollaboration => team_collaboration(goal, tasks),
        Goal::DeadlineManagement => deadline_management(goal, tasks, now),
        Goal::QualityAssurance => quality_assurance(goal, tasks),
        Goal::PerfectOrganization => perfect_organization(goal, tasks),
        Goal::ReduceWip => reduce_wip(goal, tasks),
        Goal::FeatureCompletion => feature_completion(goal, tasks),
        Goal::CleanSlate => clean_slate(goal, tasks),
        Goal::MilestoneAchievement => milestone_achievement(goal, tasks),
        Goal::DocumentationComplete => documentation_complete(goal, tasks),
        Goal::NoLowPriorityInProgress => no_low_priority_in_progress(goal, tasks),
    }
}

fn count_status(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|t| t.status == status).count()
}

fn create_urgent_task(goal: Goal, tasks: &[Task]) -> Verdict {
    let urgent = tasks
        .iter()
        .filter(|t| t.priority == TaskPriority::Urgent)
        .count();
    let details = json!({ "urgent_task_count": urgent });
    if urgent > 0 {
        Verdict::pass(goal, format!("Found {urgent} urgent task(s)"), details)
    } else {
        Verdict::fail(
            "No urgent tasks found. Create a task with 'urgent' priority.".to_string(),
            details,
        )
    }
}

fn complete_three_tasks(goal: Goal, tasks: &[Task]) -> Verdict {
    let count = count_status(tasks, TaskStatus::Completed);
    let details = json!({ "completed_count": count, "target": 3 });
    if count >= 3 {
        Verdict::pass(goal, format!("{count} tasks completed (target: 3)"), details)
    } else {
        Verdict::fail(
            format!("Only {count} tasks completed. Need 3 or more."),
            details,
        )
    }
}

/// Vacuously true when no high-priority tasks exist: the objective is the
/// absence of neglected high-priority work, not its presence.
fn organize_by_priority(goal: Goal, tasks: &[Task]) -> Verdict {
    let high: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.priority == TaskPriority::High)
        .collect();
    let neglected = high
        .iter()
        .filter(|t| t.status == TaskStatus::Todo)
        .count();
    let details = json!({
        "high_priority_count": high.len(),
        "still_todo": neglected,
    });
    if neglected == 0 {
        Verdict::pass(
            goal,
            format!("All {} high priority tasks are organized", high.len()),
            details,
        )
    } else {
        Verdict::fail(
            format!("{neglected} high priority task(s) still in 'todo' state"),
            details,
        )
    }
}

fn clear_overdue_tasks(goal: Goal, tasks: &[Task], now: DateTime<Utc>) -> Verdict {
    let overdue = tasks
        .iter()
        .filter(|t| t.due_date.is_some_and(|due| due < now) && t.status.is_open())
        .count();
    let details = json!({ "overdue_count": overdue });
    if overdue == 0 {
        Verdict::pass(goal, "No overdue tasks remaining".to_string(), details)
    } else {
        Verdict::fail(format!("{overdue} overdue task(s) need attention"), details)
    }
}

fn assign_all_tasks(goal: Goal, tasks: &[Task]) -> Verdict {
    let unassigned = tasks.iter().filter(|t| t.assigned_to.is_none()).count();
    let details = json!({ "unassigned_count": unassigned, "total_tasks": tasks.len() });
    if tasks.is_empty() {
        Verdict::fail("no tasks exist".to_string(), details)
    } else if unassigned == 0 {
        Verdict::pass(goal, "All tasks are assigned".to_string(), details)
    } else {
        Verdict::fail(format!("{unassigned} task(s) need assignment"), details)
    }
}

fn achieve_80_completion(goal: Goal, tasks: &[Task]) -> Verdict {
    if tasks.is_empty() {
        return Verdict::fail(
            "no tasks exist".to_string(),
            json!({ "completion_rate": 0.0 }),
        );
    }
    let completed = count_status(tasks, TaskStatus::Completed);
    let rate = completed as f64 / tasks.len() as f64 * 100.0;
    let details = json!({
        "completion_rate": rate,
        "completed_count": completed,
        "total_count": tasks.len(),
    });
    // The 80% boundary is inclusive.
    if rate >= 80.0 {
        Verdict::pass(goal, format!("Completion rate: {rate:.1}%"), details)
    } else {
        Verdict::fail(
            format!("Completion rate: {rate:.1}% (target: 80%)"),
            details,
        )
    }
}

fn organize_with_tags(goal: Goal, tasks: &[Task]) -> Verdict {
    let tagged = tasks.iter().filter(|t| t.tags.len() >= 2).count();
    let details = json!({ "tasks_with_tags": tagged, "total_tasks": tasks.len() });
    if !tasks.is_empty() && tagged == tasks.len() {
        Verdict::pass(goal, "All tasks have 2+ tags".to_string(), details)
    } else if tasks.is_empty() {
        Verdict::fail("no tasks exist".to_string(), details)
    } else {
        Verdict::fail(
            format!("{} task(s) need more tags", tasks.len() - tagged),
            details,
        )
    }
}

fn archive_completed(goal: Goal, tasks: &[Task]) -> Verdict {
    let lingering = count_status(tasks, TaskStatus::Completed);
    let details = json!({ "completed_not_archived": lingering });
    if lingering == 0 {
        Verdict::pass(goal, "All completed tasks are archived".to_string(), details)
    } else {
        Verdict::fail(
            format!("{lingering} completed task(s) need archiving"),
            details,
        )
    }
}

/// Unassigned and archived tasks are excluded from the workload grouping.
fn balance_workload(goal: Goal, tasks: &[Task]) -> Verdict {
    let mut workload: HashMap<&str, usize> = HashMap::new();
    for task in tasks {
        if task.status == TaskStatus::Archived {
            continue;
        }
        if let Some(assignee) = task.assigned_to.as_deref() {
            *workload.entry(assignee).or_insert(0) += 1;
        }
    }

    if workload.is_empty() {
        return Verdict::fail("No assigned tasks found".to_string(), json!({}));
    }
    if workload.len() < 2 {
        return Verdict::fail(
            "Need at least 2 team members with tasks".to_string(),
            json!({ "team_members": workload.len() }),
        );
    }

    let max = *workload.values().max().unwrap_or(&0);
    let min = *workload.values().min().unwrap_or(&0);
    let max_diff = max - min;
    let details = json!({ "workload": workload, "max_difference": max_diff });
    if max_diff <= 2 {
        Verdict::pass(
            goal,
            format!("Workload balanced (max difference: {max_diff})"),
            details,
        )
    } else {
        Verdict::fail(
            format!("Workload imbalanced (difference: {max_diff}, max allowed: 2)"),
            details,
        )
    }
}

fn prioritize_urgent_items(goal: Goal, tasks: &[Task]) -> Verdict {
    let urgent: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.priority == TaskPriority::Urgent)
        .collect();
    if urgent.is_empty() {
        return Verdict::pass(
            goal,
            "No urgent tasks to prioritize".to_string(),
            json!({ "urgent_count": 0 }),
        );
    }
    let in_progress = urgent
        .iter()
        .filter(|t| t.status == TaskStatus::InProgress)
        .count();
    let details = json!({ "urgent_total": urgent.len(), "urgent_in_progress": in_progress });
    if in_progress == urgent.len() {
        Verdict::pass(
            goal,
            format!("All {} urgent tasks are in progress", urgent.len()),
            details,
        )
    } else {
        Verdict::fail(
            format!("{} urgent task(s) not in progress", urgent.len() - in_progress),
            details,
        )
    }
}

fn create_sprint_backlog(goal: Goal, tasks: &[Task]) -> Verdict {
    let sprint = tasks
        .iter()
        .filter(|t| t.has_tag_containing("sprint") && t.assigned_to.is_some())
        .count();
    let details = json!({ "sprint_task_count": sprint, "target": 5 });
    if sprint >= 5 {
        Verdict::pass(
            goal,
            format!("Sprint backlog created with {sprint} tasks"),
            details,
        )
    } else {
        Verdict::fail(
            format!("Only {sprint} sprint tasks created (need 5+)"),
            details,
        )
    }
}

const DEBT_TAGS: [&str; 3] = ["refactor", "technical-debt", "debt"];

fn eliminate_technical_debt(goal: Goal, tasks: &[Task]) -> Verdict {
    let remaining = tasks
        .iter()
        .filter(|t| t.status.is_open() && DEBT_TAGS.iter().any(|tag| t.has_tag(tag)))
        .count();
    let details = json!({ "debt_tasks_remaining": remaining });
    if remaining == 0 {
        Verdict::pass(goal, "All technical debt eliminated".to_string(), details)
    } else {
        Verdict::fail(
            format!("{remaining} technical debt task(s) remaining"),
            details,
        )
    }
}

fn achieve_zero_bugs(goal: Goal, tasks: &[Task]) -> Verdict {
    let open_bugs = tasks
        .iter()
        .filter(|t| t.status.is_open() && t.has_tag("bug"))
        .count();
    let details = json!({ "bugs_remaining": open_bugs });
    if open_bugs == 0 {
        Verdict::pass(goal, "Zero bugs! All bug tasks resolved".to_string(), details)
    } else {
        Verdict::fail(format!("{open_bugs} bug(s) still open"), details)
    }
}

fn optimize_task_flow(goal: Goal, tasks: &[Task]) -> Verdict {
    let todo = count_status(tasks, TaskStatus::Todo);
    let in_progress = count_status(tasks, TaskStatus::InProgress);
    let completed = count_status(tasks, TaskStatus::Completed);
    let details = json!({ "todo": todo, "in_progress": in_progress, "completed": completed });
    if todo < in_progress && in_progress < completed {
        Verdict::pass(
            goal,
            format!("Optimal flow: todo({todo}) < in_progress({in_progress}) < completed({completed})"),
            details,
        )
    } else {
        Verdict::fail(
            format!("Flow needs optimization: todo({todo}), in_progress({in_progress}), completed({completed})"),
            details,
        )
    }
}

fn team_collaboration(goal: Goal, tasks: &[Task]) -> Verdict {
    let mut statuses_by_member: HashMap<&str, Vec<TaskStatus>> = HashMap::new();
    for task in tasks {
        if let Some(assignee) = task.assigned_to.as_deref() {
            statuses_by_member.entry(assignee).or_default().push(task.status);
        }
    }

    if statuses_by_member.len() < 2 {
        return Verdict::fail(
            "Need at least 2 team members with tasks".to_string(),
            json!({}),
        );
    }

    let collaboration: HashMap<&str, bool> = statuses_by_member
        .iter()
        .map(|(member, statuses)| {
            let has_all = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Completed]
                .iter()
                .all(|s| statuses.contains(s));
            (*member, has_all)
        })
        .collect();

    let missing = collaboration.values().filter(|v| !**v).count();
    let details = json!({ "collaboration_score": collaboration });
    if missing == 0 {
        Verdict::pass(goal, "Full team collaboration achieved".to_string(), details)
    } else {
        Verdict::fail(
            format!("{missing} team member(s) need tasks in all statuses"),
            details,
        )
    }
}

fn deadline_management(goal: Goal, tasks: &[Task], now: DateTime<Utc>) -> Verdict {
    let window_end = now + Duration::days(3);
    let upcoming: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.due_date.is_some_and(|due| now <= due && due <= window_end))
        .collect();
    if upcoming.is_empty() {
        return Verdict::pass(
            goal,
            "No upcoming deadlines".to_string(),
            json!({ "upcoming_count": 0 }),
        );
    }
    let managed = upcoming
        .iter()
        .filter(|t| matches!(t.status, TaskStatus::InProgress | TaskStatus::Completed))
        .count();
    let details = json!({ "upcoming_total": upcoming.len(), "managed": managed });
    if managed == upcoming.len() {
        Verdict::pass(
            goal,
            format!("All {} upcoming deadlines are managed", upcoming.len()),
            details,
        )
    } else {
        Verdict::fail(
            format!("{} upcoming task(s) not in progress", upcoming.len() - managed),
            details,
        )
    }
}

const QA_TAGS: [&str; 4] = ["tested", "reviewed", "qa", "approved"];

/// Requires at least one completed task: with nothing completed there is
/// nothing whose quality could have been assured.
fn quality_assurance(goal: Goal, tasks: &[Task]) -> Verdict {
    let completed: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .collect();
    if completed.is_empty() {
        return Verdict::fail("No completed tasks to validate".to_string(), json!({}));
    }
    let with_qa = completed
        .iter()
        .filter(|t| QA_TAGS.iter().any(|tag| t.has_tag(tag)))
        .count();
    let details = json!({ "completed_total": completed.len(), "with_qa": with_qa });
    if with_qa == completed.len() {
        Verdict::pass(
            goal,
            format!("All {} completed tasks have QA tags", completed.len()),
            details,
        )
    } else {
        Verdict::fail(
            format!("{} completed task(s) missing QA tags", completed.len() - with_qa),
            details,
        )
    }
}

fn perfect_organization(goal: Goal, tasks: &[Task]) -> Verdict {
    if tasks.is_empty() {
        return Verdict::fail("no tasks exist".to_string(), json!({}));
    }
    let organized = tasks
        .iter()
        .filter(|t| t.assigned_to.is_some() && t.tags.len() >= 2 && t.due_date.is_some())
        .count();
    let details = json!({ "total_tasks": tasks.len(), "organized": organized });
    if organized == tasks.len() {
        Verdict::pass(
            goal,
            format!("All {} tasks are perfectly organized", tasks.len()),
            details,
        )
    } else {
        Verdict::fail(
            format!(
                "{} task(s) need: assignee, 2+ tags, and due date",
                tasks.len() - organized
            ),
            details,
        )
    }
}

fn reduce_wip(goal: Goal, tasks: &[Task]) -> Verdict {
    let wip = count_status(tasks, TaskStatus::InProgress);
    let details = json!({ "wip_count": wip, "max_allowed": 5 });
    if wip <= 5 {
        Verdict::pass(goal, format!("WIP limited to {wip} tasks"), details)
    } else {
        Verdict::fail(format!("Too much WIP: {wip} tasks (max: 5)"), details)
    }
}

fn feature_completion(goal: Goal, tasks: &[Task]) -> Verdict {
    let features: Vec<&Task> = tasks.iter().filter(|t| t.has_tag("feature")).collect();
    if features.is_empty() {
        return Verdict::pass(goal, "No feature tasks exist".to_string(), json!({}));
    }
    let done = features
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    let details = json!({ "total_features": features.len(), "completed": done });
    if done == features.len() {
        Verdict::pass(
            goal,
            format!("All {} features completed", features.len()),
            details,
        )
    } else {
        Verdict::fail(
            format!("{} feature(s) still in progress", features.len() - done),
            details,
        )
    }
}

fn clean_slate(goal: Goal, tasks: &[Task]) -> Verdict {
    let active = tasks
        .iter()
        .filter(|t| t.status != TaskStatus::Archived)
        .count();
    let details = json!({ "non_archived_count": active, "total_tasks": tasks.len() });
    if tasks.is_empty() {
        Verdict::fail("no tasks exist".to_string(), details)
    } else if active == 0 {
        Verdict::pass(
            goal,
            "Clean slate achieved - all tasks archived".to_string(),
            details,
        )
    } else {
        Verdict::fail(
            format!("{active} task(s) still active (archive or complete them)"),
            details,
        )
    }
}

fn milestone_achievement(goal: Goal, tasks: &[Task]) -> Verdict {
    let count = count_status(tasks, TaskStatus::Completed);
    let details = json!({ "completed_count": count, "target": 10 });
    if count >= 10 {
        Verdict::pass(goal, format!("Milestone! {count} tasks completed"), details)
    } else {
        Verdict::fail(format!("{count}/10 tasks completed"), details)
    }
}

fn documentation_complete(goal: Goal, tasks: &[Task]) -> Verdict {
    let docs: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.has_tag_containing("doc"))
        .collect();
    if docs.is_empty() {
        return Verdict::pass(goal, "No documentation tasks exist".to_string(), json!({}));
    }
    let done = docs
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    let details = json!({ "total_docs": docs.len(), "completed": done });
    if done == docs.len() {
        Verdict::pass(
            goal,
            format!("All {} documentation tasks completed", docs.len()),
            details,
        )
    } else {
        Verdict::fail(
            format!("{} documentation task(s) incomplete", docs.len() - done),
            details,
        )
    }
}

fn no_low_priority_in_progress(goal: Goal, tasks: &[Task]) -> Verdict {
    let high_waiting = tasks
        .iter()
        .filter(|t| {
            matches!(t.priority, TaskPriority::High | TaskPriority::Urgent)
                && t.status == TaskStatus::Todo
        })
        .count();
    let low_in_progress = tasks
        .iter()
        .filter(|t| t.priority == TaskPriority::Low && t.status == TaskStatus::InProgress)
        .count();
    let details = json!({
        "high_priority_waiting": high_waiting,
        "low_priority_in_progress": low_in_progress,
    });
    if high_waiting == 0 || low_in_progress == 0 {
        Verdict::pass(goal, "Priority management optimal".to_string(), details)
    } else {
        Verdict::fail(
            format!(
                "{low_in_progress} low priority task(s) in progress while {high_waiting} high priority task(s) wait"
            ),
            details,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    struct TaskBuilder(Task);

    impl TaskBuilder {
        fn new(id: i64) -> Self {
            Self(Task {
                id,
                title: format!("task {id}"),
                description: None,
                status: TaskStatus::Todo,
                priority: TaskPriority::Medium,
                tags: vec![],
                assigned_to: None,
                due_date: None,
                created_at: now(),
                updated_at: now(),
            })
        }

        fn status(mut self, status: TaskStatus) -> Self {
            self.0.status = status;
            self
        }

        fn priority(mut self, priority: TaskPriority) -> Self {
            self.0.priority = priority;
            self
        }

        fn tags(mut self, tags: &[&str]) -> Self {
            self.0.tags = tags.iter().map(|t| t.to_string()).collect();
            self
        }

        fn assigned(mut self, who: &str) -> Self {
            self.0.assigned_to = Some(who.to_string());
            self
        }

        fn due_in_days(mut self, days: i64) -> Self {
            self.0.due_date = Some(now() + Duration::days(days));
            self
        }

        fn build(self) -> Task {
            self.0
        }
    }

    fn tb(id: i64) -> TaskBuilder {
        TaskBuilder::new(id)
    }

    /// Snapshot of `n` tasks with the given statuses repeated in order.
    fn board(statuses: &[TaskStatus]) -> Vec<Task> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, s)| tb(i as i64 + 1).status(*s).build())
            .collect()
    }

    #[test]
    fn scenario_a_exactly_three_completed_among_fifteen() {
        let mut statuses = vec![TaskStatus::Todo; 12];
        statuses.extend([TaskStatus::Completed; 3]);
        let tasks = board(&statuses);

        let verdict = evaluate(Goal::CompleteThreeTasks, &tasks, now());
        assert!(verdict.completed);
        assert_eq!(verdict.reward, 15.0);
        assert_eq!(verdict.details["completed_count"], 3);
    }

    #[test]
    fn scenario_b_all_low_priority_board() {
        let tasks: Vec<Task> = (1..=5)
            .map(|i| tb(i).priority(TaskPriority::Low).build())
            .collect();

        let urgent = evaluate(Goal::CreateUrgentTask, &tasks, now());
        assert!(!urgent.completed);
        assert_eq!(urgent.reward, 0.0);

        // Vacuously true: no urgent task violates the rule.
        let prioritize = evaluate(Goal::PrioritizeUrgentItems, &tasks, now());
        assert!(prioritize.completed);
        assert_eq!(prioritize.reward, 20.0);
    }

    #[test]
    fn scenario_c_eighty_percent_boundary_is_inclusive() {
        let mut statuses = vec![TaskStatus::Completed; 8];
        statuses.extend([TaskStatus::Todo; 2]);
        let tasks = board(&statuses);

        let verdict = evaluate(Goal::Achieve80Completion, &tasks, now());
        assert!(verdict.completed, "80.0 >= 80.0 must pass");
        assert_eq!(verdict.reward, 30.0);
        assert_eq!(verdict.details["completion_rate"], 80.0);
    }

    #[test]
    fn scenario_d_clean_slate() {
        let tasks = board(&[TaskStatus::Archived; 4]);
        let verdict = evaluate(Goal::CleanSlate, &tasks, now());
        assert!(verdict.completed);
        assert_eq!(verdict.reward, 50.0);

        let verdict = evaluate(Goal::CleanSlate, &[], now());
        assert!(!verdict.completed, "empty board is not a clean slate");
        assert_eq!(verdict.feedback, "no tasks exist");
    }

    #[test]
    fn existence_goals_fail_on_empty_board() {
        for goal in [
            Goal::CreateUrgentTask,
            Goal::AssignAllTasks,
            Goal::Achieve80Completion,
            Goal::CleanSlate,
            Goal::OrganizeWithTags,
            Goal::PerfectOrganization,
        ] {
            let verdict = evaluate(goal, &[], now());
            assert!(!verdict.completed, "{goal} must fail on an empty board");
            assert_eq!(verdict.reward, 0.0);
        }
    }

    #[test]
    fn absence_goals_pass_vacuously_on_empty_board() {
        for goal in [
            Goal::ClearOverdueTasks,
            Goal::ArchiveCompleted,
            Goal::PrioritizeUrgentItems,
            Goal::DeadlineManagement,
            Goal::FeatureCompletion,
            Goal::DocumentationComplete,
            Goal::OrganizeByPriority,
            Goal::ReduceWip,
            Goal::NoLowPriorityInProgress,
            Goal::EliminateTechnicalDebt,
            Goal::AchieveZeroBugs,
        ] {
            let verdict = evaluate(goal, &[], now());
            assert!(verdict.completed, "{goal} is vacuously true when empty");
            assert_eq!(verdict.reward, goal.reward());
        }
    }

    #[test]
    fn organize_by_priority_vacuous_without_high_priority_tasks() {
        // Only medium/low tasks in todo: nothing violates the rule.
        let tasks = vec![
            tb(1).priority(TaskPriority::Medium).build(),
            tb(2).priority(TaskPriority::Low).build(),
        ];
        assert!(evaluate(Goal::OrganizeByPriority, &tasks, now()).completed);

        let tasks = vec![tb(1).priority(TaskPriority::High).build()];
        let verdict = evaluate(Goal::OrganizeByPriority, &tasks, now());
        assert!(!verdict.completed, "high priority task stuck in todo");
        assert_eq!(verdict.details["still_todo"], 1);
    }

    #[test]
    fn clear_overdue_ignores_completed_and_archived() {
        let tasks = vec![
            tb(1).status(TaskStatus::Completed).due_in_days(-3).build(),
            tb(2).status(TaskStatus::Archived).due_in_days(-1).build(),
        ];
        assert!(evaluate(Goal::ClearOverdueTasks, &tasks, now()).completed);

        let tasks = vec![tb(1).due_in_days(-1).build()];
        let verdict = evaluate(Goal::ClearOverdueTasks, &tasks, now());
        assert!(!verdict.completed);
        assert_eq!(verdict.details["overdue_count"], 1);
    }

    #[test]
    fn deadline_management_window_is_three_days() {
        // Due in 2 days but still todo: unmanaged.
        let tasks = vec![tb(1).due_in_days(2).build()];
        assert!(!evaluate(Goal::DeadlineManagement, &tasks, now()).completed);

        // In progress inside the window: managed.
        let tasks = vec![tb(1).status(TaskStatus::InProgress).due_in_days(2).build()];
        assert!(evaluate(Goal::DeadlineManagement, &tasks, now()).completed);

        // Due in 10 days: outside the window, vacuously fine even as todo.
        let tasks = vec![tb(1).due_in_days(10).build()];
        assert!(evaluate(Goal::DeadlineManagement, &tasks, now()).completed);
    }

    #[test]
    fn balance_workload_needs_two_assignees_and_bounded_spread() {
        let tasks = vec![tb(1).assigned("Alice Chen").build()];
        let verdict = evaluate(Goal::BalanceWorkload, &tasks, now());
        assert!(!verdict.completed, "one member is not a balanced team");

        let mut tasks = vec![
            tb(1).assigned("Alice Chen").build(),
            tb(2).assigned("Alice Chen").build(),
            tb(3).assigned("Bob Smith").build(),
        ];
        assert!(evaluate(Goal::BalanceWorkload, &tasks, now()).completed);

        // Spread of 3 breaks the balance.
        tasks.push(tb(4).assigned("Alice Chen").build());
        tasks.push(tb(5).assigned("Alice Chen").build());
        let verdict = evaluate(Goal::BalanceWorkload, &tasks, now());
        assert!(!verdict.completed);
        assert_eq!(verdict.details["max_difference"], 3);
    }

    #[test]
    fn balance_workload_excludes_archived_and_unassigned() {
        let tasks = vec![
            tb(1).assigned("Alice Chen").build(),
            tb(2).assigned("Bob Smith").build(),
            // Archived pile on Bob must not count against him.
            tb(3).assigned("Bob Smith").status(TaskStatus::Archived).build(),
            tb(4).assigned("Bob Smith").status(TaskStatus::Archived).build(),
            tb(5).assigned("Bob Smith").status(TaskStatus::Archived).build(),
            tb(6).build(),
        ];
        assert!(evaluate(Goal::BalanceWorkload, &tasks, now()).completed);
    }

    #[test]
    fn team_collaboration_requires_full_status_coverage() {
        let full = |who: &str, base: i64| {
            vec![
                tb(base).assigned(who).status(TaskStatus::Todo).build(),
                tb(base + 1).assigned(who).status(TaskStatus::InProgress).build(),
                tb(base + 2).assigned(who).status(TaskStatus::Completed).build(),
            ]
        };

        let mut tasks = full("Alice Chen", 1);
        tasks.extend(full("Bob Smith", 4));
        assert!(evaluate(Goal::TeamCollaboration, &tasks, now()).completed);

        // Bob loses his completed task.
        tasks.remove(5);
        let verdict = evaluate(Goal::TeamCollaboration, &tasks, now());
        assert!(!verdict.completed);

        // A single member can never collaborate.
        let verdict = evaluate(Goal::TeamCollaboration, &full("Alice Chen", 1), now());
        assert!(!verdict.completed);
    }

    #[test]
    fn sprint_backlog_counts_assigned_sprint_tagged_tasks() {
        let mut tasks: Vec<Task> = (1..=5)
            .map(|i| tb(i).tags(&["Sprint-2"]).assigned("Alice Chen").build())
            .collect();
        assert!(evaluate(Goal::CreateSprintBacklog, &tasks, now()).completed);

        // Unassigned sprint tasks do not count.
        tasks[4].assigned_to = None;
        let verdict = evaluate(Goal::CreateSprintBacklog, &tasks, now());
        assert!(!verdict.completed);
        assert_eq!(verdict.details["sprint_task_count"], 4);
    }

    #[test]
    fn debt_and_bug_goals_only_look_at_open_tasks() {
        let tasks = vec![
            tb(1).tags(&["refactor"]).status(TaskStatus::Completed).build(),
            tb(2).tags(&["debt"]).status(TaskStatus::Archived).build(),
            tb(3).tags(&["bug"]).status(TaskStatus::Completed).build(),
        ];
        assert!(evaluate(Goal::EliminateTechnicalDebt, &tasks, now()).completed);
        assert!(evaluate(Goal::AchieveZeroBugs, &tasks, now()).completed);

        let tasks = vec![tb(1).tags(&["technical-debt"]).build()];
        assert!(!evaluate(Goal::EliminateTechnicalDebt, &tasks, now()).completed);

        let tasks = vec![tb(1).tags(&["bug"]).status(TaskStatus::InProgress).build()];
        assert!(!evaluate(Goal::AchieveZeroBugs, &tasks, now()).completed);
    }

    #[test]
    fn optimize_task_flow_requires_strict_ordering() {
        let mut statuses = vec![TaskStatus::Todo];
        statuses.extend([TaskStatus::InProgress; 2]);
        statuses.extend([TaskStatus::Completed; 3]);
        assert!(evaluate(Goal::OptimizeTaskFlow, &board(&statuses), now()).completed);

        // Equal counts are not strictly increasing.
        let statuses = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Completed];
        assert!(!evaluate(Goal::OptimizeTaskFlow, &board(&statuses), now()).completed);
    }

    #[test]
    fn quality_assurance_fails_without_completed_tasks() {
        let tasks = vec![tb(1).build()];
        assert!(!evaluate(Goal::QualityAssurance, &tasks, now()).completed);

        let tasks = vec![
            tb(1).status(TaskStatus::Completed).tags(&["Tested"]).build(),
            tb(2).status(TaskStatus::Completed).tags(&["qa"]).build(),
        ];
        assert!(evaluate(Goal::QualityAssurance, &tasks, now()).completed);

        let tasks = vec![tb(1).status(TaskStatus::Completed).tags(&["frontend"]).build()];
        assert!(!evaluate(Goal::QualityAssurance, &tasks, now()).completed);
    }

    #[test]
    fn documentation_matches_tag_substring() {
        // "documentation" and "docs" both contain "doc".
        let tasks = vec![
            tb(1).tags(&["documentation"]).status(TaskStatus::Completed).build(),
            tb(2).tags(&["docs"]).status(TaskStatus::Completed).build(),
        ];
        assert!(evaluate(Goal::DocumentationComplete, &tasks, now()).completed);

        let tasks = vec![tb(1).tags(&["documentation"]).build()];
        assert!(!evaluate(Goal::DocumentationComplete, &tasks, now()).completed);
    }

    #[test]
    fn feature_completion_matches_whole_tag_only() {
        // "featured" is not the "feature" tag.
        let tasks = vec![tb(1).tags(&["featured"]).build()];
        assert!(evaluate(Goal::FeatureCompletion, &tasks, now()).completed);

        let tasks = vec![tb(1).tags(&["Feature"]).build()];
        assert!(!evaluate(Goal::FeatureCompletion, &tasks, now()).completed);
    }

    #[test]
    fn priority_gating_fails_only_with_both_conditions() {
        let high_waiting = tb(1).priority(TaskPriority::Urgent).build();
        let low_running = tb(2)
            .priority(TaskPriority::Low)
            .status(TaskStatus::InProgress)
            .build();

        let verdict = evaluate(
            Goal::NoLowPriorityInProgress,
            &[high_waiting.clone(), low_running.clone()],
            now(),
        );
        assert!(!verdict.completed);

        assert!(evaluate(Goal::NoLowPriorityInProgress, &[high_waiting], now()).completed);
        assert!(evaluate(Goal::NoLowPriorityInProgress, &[low_running], now()).completed);
    }

    #[test]
    fn reduce_wip_boundary_is_five() {
        let tasks = board(&[TaskStatus::InProgress; 5]);
        assert!(evaluate(Goal::ReduceWip, &tasks, now()).completed);

        let tasks = board(&[TaskStatus::InProgress; 6]);
        let verdict = evaluate(Goal::ReduceWip, &tasks, now());
        assert!(!verdict.completed);
        assert_eq!(verdict.details["wip_count"], 6);
    }

    #[test]
    fn milestone_requires_ten_completed() {
        let tasks = board(&[TaskStatus::Completed; 9]);
        assert!(!evaluate(Goal::MilestoneAchievement, &tasks, now()).completed);

        let tasks = board(&[TaskStatus::Completed; 10]);
        let verdict = evaluate(Goal::MilestoneAchievement, &tasks, now());
        assert!(verdict.completed);
        assert_eq!(verdict.reward, 40.0);
    }

    #[test]
    fn assign_all_tasks_requires_full_coverage() {
        let tasks = vec![
            tb(1).assigned("Alice Chen").build(),
            tb(2).assigned("Bob Smith").build(),
        ];
        assert!(evaluate(Goal::AssignAllTasks, &tasks, now()).completed);

        let tasks = vec![tb(1).assigned("Alice Chen").build(), tb(2).build()];
        let verdict = evaluate(Goal::AssignAllTasks, &tasks, now());
        assert!(!verdict.completed);
        assert_eq!(verdict.details["unassigned_count"], 1);
    }

    #[test]
    fn perfect_organization_checks_all_three_attributes() {
        let good = tb(1)
            .assigned("Alice Chen")
            .tags(&["backend", "api"])
            .due_in_days(7)
            .build();
        assert!(evaluate(Goal::PerfectOrganization, &[good.clone()], now()).completed);

        let mut missing_due = good.clone();
        missing_due.due_date = None;
        assert!(!evaluate(Goal::PerfectOrganization, &[missing_due], now()).completed);

        let mut one_tag = good;
        one_tag.tags = vec!["backend".to_string()];
        assert!(!evaluate(Goal::PerfectOrganization, &[one_tag], now()).completed);
    }

    #[test]
    fn verdict_reward_matches_catalog_exactly_when_passing() {
        // A board that satisfies archive_completed vacuously.
        let tasks = board(&[TaskStatus::Archived; 2]);
        let verdict = evaluate(Goal::ArchiveCompleted, &tasks, now());
        assert!(verdict.completed);
        assert_eq!(verdict.reward, Goal::ArchiveCompleted.reward());
    }
}
