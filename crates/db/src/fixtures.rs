//! Fixed sample dataset served whenever the store is unavailable.

use bson::DateTime;

use crate::models::{
    ActivityItem, ActivityType, FileAttachment, MemberStatus, Organization,
    OrganizationWithProjects, Plan, Project, ProjectStatus, ProjectType, TeamMember, TeamRole,
};

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

fn avatar(seed: &str) -> String {
    format!("{AVATAR_BASE}{seed}")
}

fn member(
    id: &str,
    name: &str,
    role: TeamRole,
    email: &str,
    seed: &str,
    status: MemberStatus,
) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        role,
        avatar: avatar(seed),
        email: email.to_string(),
        status,
    }
}

pub fn sample_team() -> Vec<TeamMember> {
    vec![
        member(
            "u1",
            "Alex Johnson",
            TeamRole::ProjectManager,
            "alex@kingdomkanvas.com",
            "Alex",
            MemberStatus::Active,
        ),
        member(
            "u2",
            "Sarah Chen",
            TeamRole::CreativeDirector,
            "sarah@kingdomkanvas.com",
            "Sarah",
            MemberStatus::Active,
        ),
        member(
            "u3",
            "Mike Ross",
            TeamRole::Designer,
            "mike@kingdomkanvas.com",
            "Mike",
            MemberStatus::Active,
        ),
        member(
            "u4",
            "Jessica Day",
            TeamRole::Designer,
            "jess@kingdomkanvas.com",
            "Jessica",
            MemberStatus::Invited,
        ),
        member(
            "u5",
            "Pastor Dave",
            TeamRole::Client,
            "dave@gracecommunity.com",
            "Dave",
            MemberStatus::Active,
        ),
    ]
}

fn activity(
    id: &str,
    activity_type: ActivityType,
    user: &TeamMember,
    timestamp: &str,
    content: &str,
    file: Option<FileAttachment>,
) -> ActivityItem {
    ActivityItem {
        id: id.to_string(),
        activity_type,
        user_id: user.id.clone(),
        user_name: user.name.clone(),
        user_avatar: user.avatar.clone(),
        timestamp: timestamp.to_string(),
        content: content.to_string(),
        file,
    }
}

/// "Grace Community" and "Elevation City" with their projects, in that order.
pub fn sample_organizations() -> Vec<OrganizationWithProjects> {
    let team = sample_team();
    let (alex, sarah, mike, dave) = (&team[0], &team[1], &team[2], &team[4]);

    let summer_of_hope = Project {
        id: "p1".to_string(),
        organization_id: "org1".to_string(),
        title: "Summer of Hope".to_string(),
        project_type: ProjectType::SermonSeries,
        status: ProjectStatus::InProgress,
        created_at: "May 15".to_string(),
        concept_due_date: "May 22".to_string(),
        final_due_date: "June 01".to_string(),
        description: "A 6-week visual series focusing on hope in modern times. Needs cinematic title slides and social squares.".to_string(),
        department: None,
        reference_link: None,
        thumbnail: None,
        team: team.clone(),
        activity: vec![
            activity(
                "a1",
                ActivityType::Message,
                dave,
                "2 hours ago",
                "Hey team, just saw the initial concepts. The \"Dawn\" direction is definitely our favorite. Could we see it with slightly warmer tones?",
                None,
            ),
            activity(
                "a2",
                ActivityType::Upload,
                mike,
                "4 hours ago",
                "Concept_Sketches_v2.pdf",
                Some(FileAttachment {
                    name: "Concept_Sketches_v2.pdf".to_string(),
                    size: "4.5 MB".to_string(),
                    file_type: "pdf".to_string(),
                }),
            ),
            activity(
                "a3",
                ActivityType::Status,
                alex,
                "Yesterday",
                "changed status to In Production",
                None,
            ),
            activity(
                "a4",
                ActivityType::Message,
                sarah,
                "Yesterday",
                "Thanks Dave! We will explore those warmer tones today. Mike is already on it.",
                None,
            ),
        ],
        inserted_at: DateTime::from_millis(1_715_731_200_000),
    };

    let easter = Project {
        id: "p2".to_string(),
        organization_id: "org1".to_string(),
        title: "Easter 2024".to_string(),
        project_type: ProjectType::Event,
        status: ProjectStatus::Completed,
        created_at: "Feb 20".to_string(),
        concept_due_date: "March 10".to_string(),
        final_due_date: "March 31".to_string(),
        description: "Full print and digital package for Easter services.".to_string(),
        department: None,
        reference_link: None,
        thumbnail: None,
        team: vec![alex.clone(), mike.clone(), dave.clone()],
        activity: Vec::new(),
        inserted_at: DateTime::from_millis(1_708_387_200_000),
    };

    let youth_night = Project {
        id: "p3".to_string(),
        organization_id: "org2".to_string(),
        title: "Youth Night Refresh".to_string(),
        project_type: ProjectType::Branding,
        status: ProjectStatus::Review,
        created_at: "Sep 20".to_string(),
        concept_due_date: "Oct 01".to_string(),
        final_due_date: "Oct 15".to_string(),
        description: "Rebranding the Wednesday night youth experience.".to_string(),
        department: None,
        reference_link: None,
        thumbnail: None,
        team: vec![
            sarah.clone(),
            TeamMember {
                name: "Josh Miller".to_string(),
                ..dave.clone()
            },
        ],
        activity: Vec::new(),
        inserted_at: DateTime::from_millis(1_695_168_000_000),
    };

    vec![
        OrganizationWithProjects {
            organization: Organization {
                id: "org1".to_string(),
                name: "Grace Community".to_string(),
                logo: "https://api.dicebear.com/7.x/initials/svg?seed=GC&backgroundColor=0a0a0a".to_string(),
                plan: Plan::Pro,
            },
            projects: vec![summer_of_hope, easter],
        },
        OrganizationWithProjects {
            organization: Organization {
                id: "org2".to_string(),
                name: "Elevation City".to_string(),
                logo: "https://api.dicebear.com/7.x/initials/svg?seed=EC&backgroundColor=FACC15".to_string(),
                plan: Plan::Standard,
            },
            projects: vec![youth_night],
        },
    ]
}
