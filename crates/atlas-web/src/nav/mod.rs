/// Sidebar navigation configuration and role filtering
///
/// The navigation tree is static declarative data; the only logic here
/// is restricting admin-only entries to admin users and dropping
/// categories that end up empty.

use crate::types::Role;

/// Icon identifier resolved to an SVG by `components::icons`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Home,
    User,
    Users,
    FileText,
    BarChart,
    Settings,
}

/// A single navigation link
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: IconKind,
    pub admin_only: bool,
}

/// A labeled group of navigation links
#[derive(Debug, Clone, PartialEq)]
pub struct NavCategory {
    pub label: &'static str,
    pub entries: Vec<NavEntry>,
}

/// The full navigation tree, before role filtering
pub fn nav_categories() -> Vec<NavCategory> {
    vec![
        NavCategory {
            label: "Main",
            entries: vec![
                NavEntry {
                    path: "/dashboard",
                    label: "Dashboard",
                    icon: IconKind::Home,
                    admin_only: false,
                },
                NavEntry {
                    path: "/profile",
                    label: "Profile",
                    icon: IconKind::User,
                    admin_only: false,
                },
            ],
        },
        NavCategory {
            label: "Management",
            entries: vec![
                NavEntry {
                    path: "/reports",
                    label: "Reports",
                    icon: IconKind::FileText,
                    admin_only: false,
                },
                NavEntry {
                    path: "/users",
                    label: "Users",
                    icon: IconKind::Users,
                    admin_only: true,
                },
                NavEntry {
                    path: "/analytics",
                    label: "Analytics",
                    icon: IconKind::BarChart,
                    admin_only: true,
                },
            ],
        },
        NavCategory {
            label: "Preferences",
            entries: vec![
                NavEntry {
                    path: "/settings",
                    label: "Settings",
                    icon: IconKind::Settings,
                    admin_only: false,
                },
            ],
        },
    ]
}

/// Restrict the navigation tree to entries visible for `role`.
///
/// Admin-only entries are dropped for non-admin users, and categories
/// left without any visible entry are omitted entirely so no empty
/// section header renders. Relative order is preserved.
pub fn visible_categories(categories: &[NavCategory], role: Role) -> Vec<NavCategory> {
    categories
        .iter()
        .filter_map(|category| {
            let entries: Vec<NavEntry> = category
                .entries
                .iter()
                .filter(|entry| !entry.admin_only || role == Role::Admin)
                .cloned()
                .collect();

            if entries.is_empty() {
                None
            } else {
                Some(NavCategory {
                    label: category.label,
                    entries,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &'static str, label: &'static str, admin_only: bool) -> NavEntry {
        NavEntry {
            path,
            label,
            icon: IconKind::Home,
            admin_only,
        }
    }

    #[test]
    fn test_admin_sees_everything() {
        let categories = nav_categories();
        let filtered = visible_categories(&categories, Role::Admin);

        assert_eq!(filtered.len(), categories.len());
        for (original, visible) in categories.iter().zip(&filtered) {
            assert_eq!(original.label, visible.label);
            assert_eq!(original.entries, visible.entries);
        }
    }

    #[test]
    fn test_user_loses_exactly_the_admin_entries() {
        let filtered = visible_categories(&nav_categories(), Role::User);

        assert!(filtered
            .iter()
            .flat_map(|c| &c.entries)
            .all(|e| !e.admin_only));

        // /users and /analytics are the two admin-only entries
        let paths: Vec<&str> = filtered
            .iter()
            .flat_map(|c| &c.entries)
            .map(|e| e.path)
            .collect();
        assert_eq!(
            paths,
            vec!["/dashboard", "/profile", "/reports", "/settings"]
        );
    }

    #[test]
    fn test_all_admin_category_is_dropped_for_user() {
        let categories = vec![NavCategory {
            label: "Admin Tools",
            entries: vec![
                entry("/users", "Users", true),
                entry("/audit", "Audit", true),
            ],
        }];

        assert!(visible_categories(&categories, Role::User).is_empty());
        assert_eq!(visible_categories(&categories, Role::Admin).len(), 1);
    }

    #[test]
    fn test_partially_admin_category_is_retained() {
        let categories = vec![
            NavCategory {
                label: "Main",
                entries: vec![entry("/dashboard", "Dashboard", false)],
            },
            NavCategory {
                label: "Management",
                entries: vec![
                    entry("/users", "Users", true),
                    entry("/reports", "Reports", false),
                ],
            },
        ];

        let filtered = visible_categories(&categories, Role::User);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].label, "Main");
        assert_eq!(filtered[0].entries.len(), 1);
        assert_eq!(filtered[1].label, "Management");
        assert_eq!(filtered[1].entries.len(), 1);
        assert_eq!(filtered[1].entries[0].path, "/reports");
    }

    #[test]
    fn test_order_is_preserved() {
        let filtered = visible_categories(&nav_categories(), Role::Admin);
        let labels: Vec<&str> = filtered.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Main", "Management", "Preferences"]);

        let management: Vec<&str> = filtered[1].entries.iter().map(|e| e.label).collect();
        assert_eq!(management, vec!["Reports", "Users", "Analytics"]);
    }

    #[test]
    fn test_filtering_is_pure() {
        let categories = nav_categories();
        let before = categories.clone();
        let _ = visible_categories(&categories, Role::User);
        assert_eq!(categories, before);
    }
}
