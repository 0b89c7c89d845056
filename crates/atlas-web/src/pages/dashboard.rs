/// Dashboard overview page

use leptos::*;

use crate::auth::use_auth;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.session
            .get()
            .map(|s| format!("Welcome back, {}", s.user.name))
            .unwrap_or_default()
    };

    view! {
        <div>
            <h1 class="text-2xl font-bold text-gray-900">"Dashboard"</h1>
            <p class="mt-1 text-gray-600">{greeting}</p>

            <div class="mt-6 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                <StatCard label="Open reports" value="12"/>
                <StatCard label="Active users" value="248"/>
                <StatCard label="Events today" value="1,430"/>
            </div>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-5">
            <p class="text-sm text-gray-500">{label}</p>
            <p class="mt-1 text-3xl font-semibold text-gray-900">{value}</p>
        </div>
    }
}
