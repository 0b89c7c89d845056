/// Settings page

use leptos::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div>
            <h1 class="text-2xl font-bold text-gray-900">"Settings"</h1>
            <div class="mt-6 bg-white rounded-lg shadow-sm border border-gray-200 p-6 max-w-lg">
                <h2 class="text-lg font-semibold text-gray-900">"Preferences"</h2>
                <p class="mt-2 text-gray-600">
                    "Account and notification preferences will appear here."
                </p>
            </div>
        </div>
    }
}
