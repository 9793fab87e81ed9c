use crate::models::{Activity, ActivityName, StudentEmail};

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Competitive basketball league for students of all skill levels",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["alex@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Club",
        description: "Outdoor soccer practice and friendly matches",
        schedule: "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 22,
        participants: &["lucas@mergington.edu", "isabella@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Script writing, acting, and theater production",
        schedule: "Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 25,
        participants: &["amelia@mergington.edu"],
    },
    SeedActivity {
        name: "Art Studio",
        description: "Painting, drawing, and visual arts exploration",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["noah@mergington.edu", "grace@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop public speaking and critical thinking skills",
        schedule: "Mondays, 4:00 PM - 5:30 PM",
        max_participants: 16,
        participants: &["ethan@mergington.edu"],
    },
    SeedActivity {
        name: "Robotics Club",
        description: "Design, build, and program robots for competitions",
        schedule: "Thursdays, 4:00 PM - 6:00 PM",
        max_participants: 14,
        participants: &["maya@mergington.edu", "james@mergington.edu"],
    },
    SeedActivity {
        name: "Tennis Team",
        description: "Learn tennis techniques and compete in matches",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["sarah@mergington.edu"],
    },
    SeedActivity {
        name: "Swimming Club",
        description: "Water sports, swimming lessons, and synchronized swimming",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: &["lucas@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Music Band",
        description: "Learn instruments, ensemble performance, and concert preparation",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 25,
        participants: &["david@mergington.edu", "anna@mergington.edu"],
    },
    SeedActivity {
        name: "Photography Club",
        description: "Digital and film photography, photo editing, and gallery exhibitions",
        schedule: "Wednesdays, 3:30 PM - 4:30 PM",
        max_participants: 16,
        participants: &["olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Science Club",
        description: "Explore physics, chemistry, and biology through hands-on experiments",
        schedule: "Mondays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 18,
        participants: &["noah@mergington.edu", "emma@mergington.edu"],
    },
    SeedActivity {
        name: "Model United Nations",
        description: "Participate in international diplomacy simulations and debates",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 20,
        participants: &["ethan@mergington.edu", "isabella@mergington.edu"],
    },
    SeedActivity {
        name: "Volleyball Team",
        description: "Competitive volleyball league with drills and friendly matches",
        schedule: "Mondays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 14,
        participants: &["jessica@mergington.edu"],
    },
    SeedActivity {
        name: "Track and Field",
        description: "Running, jumping, and throwing events with sprint and distance training",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 25,
        participants: &["marcus@mergington.edu", "chloe@mergington.edu"],
    },
    SeedActivity {
        name: "Dance Studio",
        description: "Contemporary, hip-hop, and ballet dance classes with performances",
        schedule: "Mondays and Wednesdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["taylor@mergington.edu"],
    },
    SeedActivity {
        name: "Sculpture Workshop",
        description: "3D art techniques including clay modeling, wood carving, and stone sculpting",
        schedule: "Fridays, 2:00 PM - 4:00 PM",
        max_participants: 12,
        participants: &["jackson@mergington.edu", "lily@mergington.edu"],
    },
    SeedActivity {
        name: "Philosophy Club",
        description: "Explore ethics, logic, and existential questions through Socratic discussions",
        schedule: "Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 18,
        participants: &["thomas@mergington.edu"],
    },
    SeedActivity {
        name: "Math Olympiad",
        description: "Advanced problem-solving and mathematical competitions at regional and national levels",
        schedule: "Wednesdays and Fridays, 4:00 PM - 5:00 PM",
        max_participants: 15,
        participants: &["victoria@mergington.edu", "ryan@mergington.edu"],
    },
];

/// The school's activity list loaded at startup. Participants are trusted and
/// not checked for duplicates.
pub fn mergington_activities() -> Vec<(ActivityName, Activity)> {
    SEED.iter()
        .map(|seed| {
            let activity = Activity {
                description: seed.description.to_string(),
                schedule: seed.schedule.to_string(),
                max_participants: seed.max_participants,
                participants: seed
                    .participants
                    .iter()
                    .map(|p| StudentEmail::new(*p))
                    .collect(),
            };
            (ActivityName::new(seed.name), activity)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_names_are_unique() {
        let mut names: Vec<_> = SEED.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SEED.len());
    }

    #[test]
    fn chess_club_is_first_with_two_members() {
        let seeded = mergington_activities();
        let (name, chess) = &seeded[0];
        assert_eq!(name.as_str(), "Chess Club");
        assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec![
                StudentEmail::new("michael@mergington.edu"),
                StudentEmail::new("daniel@mergington.edu"),
            ]
        );
    }

    #[test]
    fn every_capacity_is_positive() {
        assert!(SEED.iter().all(|s| s.max_participants > 0));
    }
}
