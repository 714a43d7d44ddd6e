//! Fixed startup dataset.
//!
//! The directory is seeded once at process start; activities are never
//! created or deleted at runtime. Rosters below are the pre-registered
//! participants, in signup order.

use crate::state::{Activity, Directory};

fn activity(description: &str, schedule: &str, max_participants: usize, participants: &[&str]) -> Activity {
    Activity {
        description: description.to_owned(),
        schedule: schedule.to_owned(),
        max_participants,
        participants: participants.iter().map(|&p| p.to_owned()).collect(),
    }
}

/// Build the seed directory.
#[must_use]
pub fn directory() -> Directory {
    Directory::from_iter([
        (
            "Chess Club".to_owned(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_owned(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_owned(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team".to_owned(),
            activity(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Basketball Team".to_owned(),
            activity(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Club".to_owned(),
            activity(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        ),
        (
            "Drama Club".to_owned(),
            activity(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        ),
        (
            "Math Club".to_owned(),
            activity(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Debate Team".to_owned(),
            activity(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ])
}
