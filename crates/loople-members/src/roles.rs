use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    Member,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ManageMembers,
    ManagePrograms,
    PublishPosts,
    ModerateFeed,
    ViewFeed,
}

impl Role {
    pub fn permits(self, permission: Permission) -> bool {
        match self {
            Role::Admin => true,
            Role::Staff => matches!(
                permission,
                Permission::ManagePrograms
                    | Permission::PublishPosts
                    | Permission::ModerateFeed
                    | Permission::ViewFeed
            ),
            Role::Member => matches!(permission, Permission::ViewFeed),
        }
    }

    /// Badge shown next to the member's name in the feed and member lists.
    pub fn badge(self) -> Badge {
        match self {
            Role::Admin => Badge {
                label: "Admin",
                tone: Tone::Accent,
            },
            Role::Staff => Badge {
                label: "Staff",
                tone: Tone::Info,
            },
            Role::Member => Badge {
                label: "Member",
                tone: Tone::Neutral,
            },
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Permission::ManageMembers => "manage-members",
            Permission::ManagePrograms => "manage-programs",
            Permission::PublishPosts => "publish-posts",
            Permission::ModerateFeed => "moderate-feed",
            Permission::ViewFeed => "view-feed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Info,
    Neutral,
}
