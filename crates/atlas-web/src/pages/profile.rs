/// User profile page

use leptos::*;

use crate::auth::use_auth;
use crate::types::User;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let user = Signal::derive(move || auth.session.get().map(|s| s.user));

    view! {
        <div>
            <h1 class="text-2xl font-bold text-gray-900">"Profile"</h1>
            {move || user.get().map(|user| view! { <ProfileCard user=user/> })}
        </div>
    }
}

#[component]
fn ProfileCard(user: User) -> impl IntoView {
    let initial = user.initial();
    let role_label = user.role.display_name();

    view! {
        <div class="mt-6 bg-white rounded-lg shadow-sm border border-gray-200 p-6 max-w-lg">
            <div class="flex items-center space-x-4">
                <div class="w-14 h-14 rounded-full bg-gradient-to-r from-blue-500 to-purple-500 flex items-center justify-center text-2xl font-bold text-white">
                    {initial.to_string()}
                </div>
                <div>
                    <p class="text-lg font-semibold text-gray-900">{user.name.clone()}</p>
                    <p class="text-sm text-gray-600">{role_label}</p>
                    {user.is_verified.then(|| view! {
                        <span class="inline-block mt-1 text-xs bg-green-500 text-white px-2 py-0.5 rounded-full">
                            "Verified"
                        </span>
                    })}
                </div>
            </div>
        </div>
    }
}
