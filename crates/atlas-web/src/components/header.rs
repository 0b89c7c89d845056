/// Public navbar
///
/// Branding plus a couple of links; shows "Open dashboard" when a
/// session exists, "Sign in" otherwise.

use leptos::*;

use crate::auth::use_auth;
use crate::components::icons::AtlasLogo;

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let signed_in = move || auth.session.get().is_some();

    view! {
        <header class="bg-white border-b border-gray-200 shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <a href="/" class="flex items-center space-x-2">
                        <AtlasLogo class="h-8 w-8"/>
                        <span class="text-xl font-bold text-gray-900">"Atlas"</span>
                    </a>

                    <nav class="flex items-center space-x-4">
                        <a href="/" class="text-sm text-gray-600 hover:text-gray-900 transition-colors">
                            "Home"
                        </a>
                        <Show
                            when=signed_in
                            fallback=|| view! {
                                <a
                                    href="/login"
                                    class="inline-flex items-center px-4 py-2 text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 transition-colors"
                                >
                                    "Sign in"
                                </a>
                            }
                        >
                            <a
                                href="/dashboard"
                                class="inline-flex items-center px-4 py-2 text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 transition-colors"
                            >
                                "Open dashboard"
                            </a>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}
