//! Built-in seed collection
//!
//! Written to storage the first time the store opens with no `tasks` slot,
//! so a fresh installation starts with example boards instead of a blank
//! screen.

use super::model::{Task, TaskStatus};

/// The example boards and tasks a fresh store starts with
pub fn seed_tasks() -> Vec<Task> {
    vec![
        task(
            1,
            "Launch Epic Career 🚀",
            "Create a killer Resume",
            TaskStatus::Todo,
            "Launch Career",
        ),
        task(2, "Conquer React ⚛️", "", TaskStatus::Todo, "Launch Career"),
        task(
            3,
            "Understand Databases ⚙️",
            "",
            TaskStatus::Todo,
            "Launch Career",
        ),
        task(
            4,
            "Crush Frameworks 🖼️",
            "",
            TaskStatus::Todo,
            "Launch Career",
        ),
        task(
            5,
            "Master JavaScript 💛",
            "Get comfortable with the fundamentals",
            TaskStatus::Doing,
            "Launch Career",
        ),
        task(
            6,
            "Never Give Up 🏆",
            "You're almost there",
            TaskStatus::Doing,
            "Launch Career",
        ),
        task(
            7,
            "Explore ES6 Features 🚀",
            "Spread, destructuring, arrow functions",
            TaskStatus::Done,
            "Launch Career",
        ),
        task(8, "Have Fun 🥳", "", TaskStatus::Done, "Launch Career"),
        task(
            9,
            "Learn Data Structures and Algorithms 📚",
            "Study fundamental data structures and algorithms to solve coding problems efficiently",
            TaskStatus::Todo,
            "Roadmap",
        ),
        task(
            10,
            "Contribute to Open Source Projects 🌐",
            "Gain practical experience and collaborate with others in the software development community",
            TaskStatus::Doing,
            "Roadmap",
        ),
        task(
            11,
            "Build Portfolio Projects 🛠️",
            "Create a portfolio showcasing your skills and projects to potential employers",
            TaskStatus::Done,
            "Roadmap",
        ),
        task(12, "Explore Career Paths 🔍", "", TaskStatus::Todo, "Roadmap"),
    ]
}

fn task(id: u64, title: &str, description: &str, status: TaskStatus, board: &str) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: description.to_string(),
        status,
        board: board.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique_and_dense() {
        let tasks = seed_tasks();
        let mut ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), tasks.len());
        assert_eq!(ids.last(), Some(&12));
    }

    #[test]
    fn test_seed_boards() {
        let tasks = seed_tasks();
        assert!(tasks.iter().any(|t| t.board == "Launch Career"));
        assert!(tasks.iter().any(|t| t.board == "Roadmap"));
        assert!(tasks.iter().all(|t| !t.board.is_empty()));
        assert!(tasks.iter().all(|t| !t.title.trim().is_empty()));
    }
}
