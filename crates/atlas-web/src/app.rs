/// Main application component and routing
///
/// Root App with meta tags, router, the auth provider, and the two
/// layout shells: the public frame and the auth-guarded dashboard.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::auth::{use_auth, AuthProvider};
use crate::components::shell::{DashboardShell, PublicShell};
use crate::pages::{
    analytics::AnalyticsPage,
    auth::{LoginPage, LogoutPage},
    dashboard::DashboardPage,
    home::HomePage,
    not_found::NotFoundPage,
    profile::ProfilePage,
    reports::ReportsPage,
    settings::SettingsPage,
    users::UsersPage,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/atlas-web.css"/>
        <Title text="Atlas"/>
        <Meta name="description" content="Atlas admin dashboard"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <Router>
            <AuthProvider>
                <Routes>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/logout" view=LogoutPage/>

                    <Route path="" view=PublicLayout>
                        <Route path="" view=HomePage/>
                    </Route>

                    <Route path="" view=DashboardLayout>
                        <Route path="dashboard" view=DashboardPage/>
                        <Route path="profile" view=ProfilePage/>
                        <Route path="reports" view=ReportsPage/>
                        <Route path="users" view=UsersPage/>
                        <Route path="analytics" view=AnalyticsPage/>
                        <Route path="settings" view=SettingsPage/>
                    </Route>

                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </AuthProvider>
        </Router>
    }
}

/// Public pages share the navbar/footer frame
#[component]
fn PublicLayout() -> impl IntoView {
    view! {
        <PublicShell>
            <Outlet/>
        </PublicShell>
    }
}

/// Dashboard pages require a session; without one we bounce to login
#[component]
fn DashboardLayout() -> impl IntoView {
    let auth = use_auth();
    let session = auth.session;

    let navigate = use_navigate();
    create_effect(move |_| {
        if session.get().is_none() {
            navigate("/login", Default::default());
        }
    });

    view! {
        <DashboardShell>
            <Outlet/>
        </DashboardShell>
    }
}
