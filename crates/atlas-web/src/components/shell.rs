/// Layout shells
///
/// `PublicShell` is the public-facing page frame: navbar, routed
/// content, footer, stacked full-width with the content slot growing
/// to fill the viewport. `DashboardShell` is the authenticated frame
/// and the sole owner of the sidebar's open/collapsed flags.

use leptos::*;

use crate::auth::use_auth;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::icons::{ChevronsLeftIcon, ChevronsRightIcon, MenuIcon};
use crate::components::sidebar::Sidebar;

#[component]
pub fn PublicShell(children: Children) -> impl IntoView {
    view! {
        <div class="flex flex-col min-h-screen bg-gray-50">
            <Header/>
            <main class="flex-1 w-full">
                {children()}
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    let auth = use_auth();

    // Sidebar view state lives here, not in the sidebar itself
    let (is_open, set_is_open) = create_signal(false);
    let (is_collapsed, set_is_collapsed) = create_signal(false);

    let session = auth.session;
    let logout = auth.logout;
    let user = Signal::derive(move || session.get().map(|s| s.user));

    let on_close = Callback::new(move |_| set_is_open.set(false));
    let on_logout = Callback::new(move |_| logout.dispatch(()));

    view! {
        <div class="min-h-screen bg-gray-100">
            <Sidebar
                user=user
                is_open=is_open
                is_collapsed=is_collapsed
                on_close=on_close
                on_logout=on_logout
            />

            <div class=move || format!(
                "flex flex-col min-h-screen transition-all duration-300 {}",
                if is_collapsed.get() { "lg:pl-20" } else { "lg:pl-64" }
            )>
                <header class="bg-white border-b border-gray-200 shadow-sm">
                    <div class="flex items-center h-14 px-4">
                        <button
                            class="lg:hidden p-2 rounded-lg text-gray-600 hover:bg-gray-100 transition-colors"
                            on:click=move |_| set_is_open.set(true)
                        >
                            <MenuIcon class="w-5 h-5"/>
                        </button>
                        <button
                            class="hidden lg:inline-flex p-2 rounded-lg text-gray-600 hover:bg-gray-100 transition-colors"
                            on:click=move |_| set_is_collapsed.update(|collapsed| *collapsed = !*collapsed)
                        >
                            {move || if is_collapsed.get() {
                                view! { <ChevronsRightIcon class="w-5 h-5"/> }.into_view()
                            } else {
                                view! { <ChevronsLeftIcon class="w-5 h-5"/> }.into_view()
                            }}
                        </button>
                    </div>
                </header>

                <main class="flex-1 p-6">
                    {children()}
                </main>
            </div>
        </div>
    }
}
