/// User management page (admin only)

use leptos::*;

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <div>
            <h1 class="text-2xl font-bold text-gray-900">"Users"</h1>
            <p class="mt-1 text-gray-600">"Manage accounts and roles."</p>
            <div class="mt-6 bg-white rounded-lg shadow-sm border border-gray-200 p-6">
                <p class="text-gray-600">"The user directory is not wired up in this build."</p>
            </div>
        </div>
    }
}
