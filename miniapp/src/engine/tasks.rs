//! Task catalog and status transitions.
//!
//! Tasks move strictly `NotStarted -> InProgress -> Completed`; completion
//! credits the reward exactly once. Completion is trust-based, there is no
//! external verification of the underlying action.

/// Task grouping shown as tabs on the Earn page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskCategory {
    InGame,
    Partners,
}

impl TaskCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TaskCategory::InGame => "In Game",
            TaskCategory::Partners => "Partners",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: TaskCategory,
    pub reward: u64,
    pub status: TaskStatus,
}

/// Outcome of a board action, so the caller knows what to toast and credit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    Started,
    /// Completed now; the reward must be credited exactly once.
    Claimed { reward: u64 },
    /// Unknown id, wrong state, or already completed.
    Rejected,
}

/// The static task catalog with per-session status tracking.
#[derive(Debug, Clone)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskBoard {
    pub fn new() -> Self {
        let catalog = [
            (
                "complete_tutorial",
                "Complete Tutorial",
                "Learn game basics and earn rewards",
                TaskCategory::InGame,
                50,
            ),
            (
                "reach_level_5",
                "Reach Level 5",
                "Progress through game levels",
                TaskCategory::InGame,
                100,
            ),
            (
                "win_3_matches",
                "Win 3 Matches",
                "Prove your skills in competitive play",
                TaskCategory::InGame,
                150,
            ),
            (
                "survey_complete",
                "Complete Survey",
                "Share your feedback and earn coins",
                TaskCategory::Partners,
                75,
            ),
            (
                "download_app",
                "Download Partner App",
                "Try out a recommended app",
                TaskCategory::Partners,
                125,
            ),
        ];
        Self {
            tasks: catalog
                .into_iter()
                .map(|(id, title, description, category, reward)| Task {
                    id,
                    title,
                    description,
                    category,
                    reward,
                    status: TaskStatus::NotStarted,
                })
                .collect(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn tasks_in(&self, category: TaskCategory) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.category == category)
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// `NotStarted -> InProgress`.
    pub fn start_task(&mut self, id: &str) -> TaskAction {
        match self.task_mut(id) {
            Some(task) if task.status == TaskStatus::NotStarted => {
                task.status = TaskStatus::InProgress;
                TaskAction::Started
            }
            _ => TaskAction::Rejected,
        }
    }

    /// `InProgress -> Completed`, reporting the reward to credit. Claiming a
    /// completed task again is rejected, so the reward cannot double-credit.
    pub fn claim_task(&mut self, id: &str) -> TaskAction {
        match self.task_mut(id) {
            Some(task) if task.status == TaskStatus::InProgress => {
                task.status = TaskStatus::Completed;
                TaskAction::Claimed { reward: task.reward }
            }
            _ => TaskAction::Rejected,
        }
    }

    fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_both_categories() {
        let board = TaskBoard::new();
        assert!(board.tasks_in(TaskCategory::InGame).count() >= 3);
        assert!(board.tasks_in(TaskCategory::Partners).count() >= 2);
    }

    #[test]
    fn transitions_are_linear() {
        let mut board = TaskBoard::new();
        // Claim before start is rejected.
        assert_eq!(board.claim_task("complete_tutorial"), TaskAction::Rejected);
        assert_eq!(board.start_task("complete_tutorial"), TaskAction::Started);
        // Starting twice is rejected.
        assert_eq!(board.start_task("complete_tutorial"), TaskAction::Rejected);
        assert_eq!(
            board.claim_task("complete_tutorial"),
            TaskAction::Claimed { reward: 50 }
        );
        assert_eq!(
            board.get("complete_tutorial").map(|t| t.status),
            Some(TaskStatus::Completed)
        );
    }

    #[test]
    fn claiming_twice_never_double_credits() {
        let mut board = TaskBoard::new();
        board.start_task("survey_complete");
        assert_eq!(
            board.claim_task("survey_complete"),
            TaskAction::Claimed { reward: 75 }
        );
        assert_eq!(board.claim_task("survey_complete"), TaskAction::Rejected);
        // Status never reverses.
        assert_eq!(
            board.get("survey_complete").map(|t| t.status),
            Some(TaskStatus::Completed)
        );
        assert_eq!(board.start_task("survey_complete"), TaskAction::Rejected);
    }

    #[test]
    fn unknown_task_is_rejected() {
        let mut board = TaskBoard::new();
        assert_eq!(board.start_task("nope"), TaskAction::Rejected);
        assert_eq!(board.claim_task("nope"), TaskAction::Rejected);
    }
}
