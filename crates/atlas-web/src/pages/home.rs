/// Public landing page

use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-16">
            <div class="max-w-2xl mx-auto text-center">
                <h1 class="text-4xl font-extrabold text-gray-900">
                    "Run your team from one place"
                </h1>
                <p class="mt-4 text-lg text-gray-600">
                    "Atlas brings reports, analytics, and user management into a single dashboard."
                </p>
                <div class="mt-8">
                    <a
                        href="/login"
                        class="inline-flex items-center px-6 py-3 text-base font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 transition-colors"
                    >
                        "Get started"
                    </a>
                </div>
            </div>
        </div>
    }
}
