/// Dashboard sidebar navigation
///
/// Renders the role-filtered navigation tree with the user identity
/// badge and logout control. The open/collapsed flags are owned by the
/// parent shell; this component only reads them and reports "close"
/// and "logout" through callbacks. Without an authenticated user it
/// renders nothing at all.

use leptos::*;
use leptos_router::use_location;

use crate::components::icons::*;
use crate::nav::{nav_categories, visible_categories, NavCategory};
use crate::types::User;

/// Sidebar container classes. `-translate-x-full` keeps it off-screen
/// on narrow viewports while closed; the lg: override means wide
/// viewports always show it regardless of the open flag.
pub(crate) fn container_classes(is_open: bool, is_collapsed: bool) -> String {
    let width = if is_collapsed { "w-20" } else { "w-64" };
    let translate = if is_open {
        "translate-x-0"
    } else {
        "-translate-x-full lg:translate-x-0"
    };
    format!(
        "fixed inset-y-0 left-0 z-40 bg-gradient-to-b from-gray-900 to-gray-800 \
         text-white transition-all duration-300 ease-in-out shadow-xl {} {}",
        width, translate
    )
}

/// Mobile scrim classes, present only while the sidebar is open.
/// Collapse state has no bearing on it.
pub(crate) fn overlay_class(is_open: bool) -> Option<&'static str> {
    is_open.then_some("fixed inset-0 bg-black bg-opacity-50 z-30 lg:hidden")
}

pub(crate) fn entry_classes(active: bool, collapsed: bool) -> String {
    let justify = if collapsed { "justify-center" } else { "" };
    let state = if active {
        "bg-blue-600 text-white shadow-md"
    } else {
        "text-gray-300 hover:bg-gray-700"
    };
    format!(
        "flex items-center px-3 py-2.5 rounded-lg transition-all {} {}",
        justify, state
    )
}

/// Exact path equality; `/reports` must not light up `/reports/detail`.
pub(crate) fn is_active(current_path: &str, entry_path: &str) -> bool {
    current_path == entry_path
}

#[component]
pub fn Sidebar(
    #[prop(into)] user: Signal<Option<User>>,
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] is_collapsed: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    let location = use_location();

    move || {
        let open = is_open.get();
        let collapsed = is_collapsed.get();
        let current_path = location.pathname.get();

        // No user, no sidebar. The only guard condition there is.
        user.get().map(|user| {
            let categories = visible_categories(&nav_categories(), user.role);

            view! {
                {overlay_class(open).map(|class| view! {
                    <div class=class on:click=move |_| on_close.call(())></div>
                })}

                <aside class=container_classes(open, collapsed)>
                    <div class="h-full flex flex-col">
                        <SidebarBrand collapsed=collapsed on_close=on_close/>
                        <SidebarProfile user=user.clone() collapsed=collapsed/>

                        <nav class="flex-1 px-2 py-4 overflow-y-auto">
                            {categories
                                .into_iter()
                                .map(|category| category_view(category, collapsed, &current_path, on_close))
                                .collect_view()}
                        </nav>

                        <div class="p-4 border-t border-gray-700">
                            <button
                                class=if collapsed {
                                    "flex items-center justify-center p-3 text-sm text-gray-300 hover:bg-gray-700 rounded-lg transition-colors"
                                } else {
                                    "flex items-center px-3 py-2.5 w-full text-sm text-gray-300 hover:bg-gray-700 rounded-lg transition-colors"
                                }
                                title=if collapsed { "Logout" } else { "" }
                                on:click=move |_| on_logout.call(())
                            >
                                <LogOutIcon class="w-5 h-5"/>
                                {(!collapsed).then(|| view! { <span class="ml-3">"Logout"</span> })}
                            </button>
                        </div>
                    </div>
                </aside>
            }
        })
    }
}

/// Logo row with the mobile close affordance. Collapsed, only the
/// centered logo mark survives.
#[component]
fn SidebarBrand(collapsed: bool, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-4 border-b border-gray-700">
            {if collapsed {
                view! { <AtlasLogo class="mx-auto h-8 w-8"/> }.into_view()
            } else {
                view! {
                    <div class="flex items-center">
                        <AtlasLogo class="h-8 w-8 mr-2"/>
                        <h1 class="text-xl font-bold text-white">"Atlas"</h1>
                    </div>
                    <button
                        class="lg:hidden p-1 rounded-full hover:bg-gray-700 text-gray-400 hover:text-white transition-colors"
                        on:click=move |_| on_close.call(())
                    >
                        <CloseIcon class="w-5 h-5"/>
                    </button>
                }
                .into_view()
            }}
        </div>
    }
}

/// Identity badge: avatar glyph, role label, verification pill.
/// Everything but the avatar mark is suppressed when collapsed.
#[component]
fn SidebarProfile(user: User, collapsed: bool) -> impl IntoView {
    let initial = user.initial();
    let role_label = user.role.display_name();
    let verified = user.is_verified;
    let name = user.name;

    view! {
        <div class="p-4 border-b border-gray-700">
            <div class="flex items-center justify-center mb-2">
                <div class="w-12 h-12 rounded-full bg-gradient-to-r from-blue-500 to-purple-500 flex items-center justify-center text-xl font-bold shadow-md">
                    {initial.to_string()}
                </div>
            </div>
            {(!collapsed).then(|| view! {
                <div class="text-center">
                    <h3 class="font-bold text-lg truncate">{name}</h3>
                    <div class="flex items-center justify-center mt-1 text-sm">
                        <ShieldCheckIcon class="w-4 h-4 text-green-400 mr-1"/>
                        <span class="text-gray-300">{role_label}</span>
                    </div>
                    {verified.then(|| view! {
                        <span class="inline-block mt-2 text-xs bg-green-500 text-white px-2 py-0.5 rounded-full">
                            "Verified"
                        </span>
                    })}
                </div>
            })}
        </div>
    }
}

fn category_view(
    category: NavCategory,
    collapsed: bool,
    current_path: &str,
    on_close: Callback<()>,
) -> View {
    let header = (!collapsed).then(|| {
        view! {
            <h3 class="px-4 mb-2 text-xs uppercase tracking-wider text-gray-500 font-semibold">
                {category.label}
            </h3>
        }
    });

    let entries = category
        .entries
        .into_iter()
        .map(|entry| {
            let active = is_active(current_path, entry.path);
            view! {
                // Plain anchors are still client-side: the Router
                // intercepts same-origin link clicks. Clicking both
                // closes the mobile sidebar and navigates; neither
                // blocks the other.
                <li>
                    <a
                        href=entry.path
                        class=entry_classes(active, collapsed)
                        title=if collapsed { entry.label } else { "" }
                        on:click=move |_| on_close.call(())
                    >
                        <span class=if collapsed { "" } else { "mr-3" }>{nav_icon(entry.icon)}</span>
                        {(!collapsed).then(|| view! { <span class="text-sm">{entry.label}</span> })}
                        {(!collapsed && entry.admin_only).then(|| view! {
                            <span class="ml-auto bg-gray-700 text-xs px-1.5 py-0.5 rounded">
                                "Admin"
                            </span>
                        })}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="mb-6">
            {header}
            <ul class="space-y-1">{entries}</ul>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_class_tracks_collapsed_flag() {
        for open in [true, false] {
            assert!(container_classes(open, true).contains("w-20"));
            assert!(container_classes(open, false).contains("w-64"));
            assert!(!container_classes(open, true).contains("w-64"));
        }
    }

    #[test]
    fn test_closed_sidebar_is_off_screen_only_below_breakpoint() {
        let closed = container_classes(false, false);
        assert!(closed.contains("-translate-x-full"));
        assert!(closed.contains("lg:translate-x-0"));

        let open = container_classes(true, false);
        assert!(open.contains("translate-x-0"));
        assert!(!open.contains("-translate-x-full"));
    }

    #[test]
    fn test_overlay_present_iff_open() {
        assert!(overlay_class(true).is_some());
        assert!(overlay_class(false).is_none());
        // scrim is a narrow-viewport affordance
        assert!(overlay_class(true).unwrap().contains("lg:hidden"));
    }

    #[test]
    fn test_entry_classes_reflect_active_state() {
        assert!(entry_classes(true, false).contains("bg-blue-600"));
        assert!(entry_classes(false, false).contains("hover:bg-gray-700"));
        assert!(!entry_classes(false, false).contains("bg-blue-600"));
    }

    #[test]
    fn test_entry_classes_center_icons_when_collapsed() {
        assert!(entry_classes(false, true).contains("justify-center"));
        assert!(!entry_classes(false, false).contains("justify-center"));
    }

    #[test]
    fn test_active_requires_exact_path_match() {
        assert!(is_active("/reports", "/reports"));
        assert!(!is_active("/reports/detail", "/reports"));
        assert!(!is_active("/reports", "/reports/detail"));
        assert!(!is_active("/", "/dashboard"));
    }
}
