/// Analytics page (admin only)

use leptos::*;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! {
        <div>
            <h1 class="text-2xl font-bold text-gray-900">"Analytics"</h1>
            <div class="mt-6 bg-white rounded-lg shadow-sm border border-gray-200 p-6">
                <p class="text-gray-600">"Charts land here once the metrics API is connected."</p>
            </div>
        </div>
    }
}
