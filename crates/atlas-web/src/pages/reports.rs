/// Reports page

use leptos::*;

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <div>
            <h1 class="text-2xl font-bold text-gray-900">"Reports"</h1>
            <div class="mt-6 bg-white rounded-lg shadow-sm border border-gray-200 p-6">
                <p class="text-gray-600">"No reports generated yet."</p>
            </div>
        </div>
    }
}
