/// Authentication pages (login, logout)

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_navigate;

use crate::auth::{use_auth, LoginRequest};
use crate::components::icons::AtlasLogo;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error_message, set_error_message) = create_signal::<Option<String>>(None);

    // Already signed in? Straight to the dashboard.
    let navigate = use_navigate();
    let session = auth.session;
    create_effect(move |_| {
        if session.get().is_some() {
            navigate("/dashboard", Default::default());
        }
    });

    let login = auth.login;
    let is_loading = auth.is_loading;

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        login.dispatch(LoginRequest {
            username: username.get(),
            password: password.get(),
        });
    };

    let navigate = use_navigate();
    create_effect(move |_| {
        if let Some(result) = login.value().get() {
            match result {
                Ok(_) => navigate("/dashboard", Default::default()),
                Err(error) => set_error_message.set(Some(error)),
            }
        }
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div class="text-center">
                    <div class="flex justify-center">
                        <AtlasLogo class="h-12 w-12"/>
                    </div>
                    <h2 class="mt-6 text-3xl font-extrabold text-gray-900">
                        "Sign in to Atlas"
                    </h2>
                </div>

                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div class="space-y-4">
                        <div>
                            <label for="username" class="block text-sm font-medium text-gray-700">
                                "Username"
                            </label>
                            <input
                                id="username"
                                name="username"
                                type="text"
                                required
                                autocomplete="username"
                                class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm bg-white text-gray-900 placeholder-gray-500 focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                            />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-medium text-gray-700">
                                "Password"
                            </label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required
                                autocomplete="current-password"
                                class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm bg-white text-gray-900 placeholder-gray-500 focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                            />
                        </div>
                    </div>

                    {move || error_message.get().map(|error| view! {
                        <div class="rounded-md bg-red-50 border border-red-200 p-3 text-sm text-red-700">
                            {error}
                        </div>
                    })}

                    <button
                        type="submit"
                        disabled=move || is_loading.get()
                        class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50"
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = use_auth();
    let logout = auth.logout;

    create_effect(move |_| {
        logout.dispatch(());
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <p class="text-gray-600">"Signing out..."</p>
        </div>
    }
}
