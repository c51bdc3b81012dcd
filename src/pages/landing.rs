use leptos::prelude::*;

use crate::components::{AnimatedCounter, Navbar};
use crate::router::{use_navigator, Route};

const FEATURES: &[(&str, &str, &str)] = &[
    ("⚡", "Lightning Fast", "Optimized performance to keep you productive and focused on what matters."),
    ("📊", "Analytics & Insights", "Track your progress with beautiful charts and actionable insights."),
    ("👥", "Team Collaboration", "Share projects and collaborate seamlessly with your team members."),
    ("✨", "Smart Organization", "Intelligent task management to keep your workflow organized."),
];

/// Public marketing page
#[component]
pub fn LandingPage() -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <div class="page landing-page">
            <Navbar />
            <section class="hero">
                <h1>
                    "Organize Tasks "
                    <span class="gradient-text">"With Precision"</span>
                </h1>
                <p class="hero-subtitle">
                    "Plan projects, track progress and finish what matters, all in one place."
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg" on:click=move |_| navigator.navigate(Route::Signup)>
                        "Get Started"
                    </button>
                    <button class="btn btn-outlined btn-lg" on:click=move |_| navigator.navigate(Route::Login)>
                        "Sign In"
                    </button>
                </div>
                <div class="hero-stats">
                    <AnimatedCounter target=1000 label="Active Teams" suffix="+" />
                    <AnimatedCounter target=50000 label="Tasks Completed" suffix="+" />
                    <AnimatedCounter target=99 label="Uptime" suffix="%" />
                </div>
            </section>
            <section class="features">
                <h2>"Powerful Features"</h2>
                <p class="section-subtitle">"Everything you need to manage your tasks efficiently"</p>
                <div class="feature-grid">
                    {FEATURES.iter().map(|(icon, title, description)| view! {
                        <div class="feature-card">
                            <div class="feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
            <section class="cta">
                <h2>"Ready to Get Started?"</h2>
                <p>"Join thousands of teams using TaskFlow to manage their projects efficiently."</p>
                <button class="btn btn-primary btn-lg" on:click=move |_| navigator.navigate(Route::Signup)>
                    "Start Your Free Trial"
                </button>
            </section>
        </div>
    }
}
