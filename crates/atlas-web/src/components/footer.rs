/// Application footer

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white border-t border-gray-200 py-4">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between text-sm text-gray-600">
                    <div>
                        "Atlas v0.1.0"
                    </div>
                    <div class="flex space-x-4">
                        <a href="/docs" class="hover:text-gray-900 transition-colors">
                            "Documentation"
                        </a>
                        <a href="/support" class="hover:text-gray-900 transition-colors">
                            "Support"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
