//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{navbar::Navbar, toaster::Toaster};
use crate::net::http::ApiClient;
use crate::pages::{
    dashboard::DashboardPage, generate::GeneratePage, home::HomePage, login::LoginPage, register::RegisterPage,
    scan::ScanPage,
};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the single [`Session`] for this mount, starts current-user
/// resolution, and hands the session to every route through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new(ApiClient::browser());
    session.init();
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/qrcodes.css"/>
        <Title text="QR Code System"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("generate") view=GeneratePage/>
                    <Route path=StaticSegment("scan") view=ScanPage/>
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}
