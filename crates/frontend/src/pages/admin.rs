use contracts::shared::indicators::IndicatorStatus;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::components::StatCard;
use crate::shared::icons::icon;

#[derive(Clone, Debug)]
struct ActivityEntry {
    action: &'static str,
    user: &'static str,
    timestamp: &'static str,
    status: &'static str,
}

fn recent_activities() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            action: "User Registration",
            user: "john.doe@email.com",
            timestamp: "2 minutes ago",
            status: "success",
        },
        ActivityEntry {
            action: "Failed Login Attempt",
            user: "admin@company.com",
            timestamp: "15 minutes ago",
            status: "warning",
        },
        ActivityEntry {
            action: "Data Backup",
            user: "System",
            timestamp: "1 hour ago",
            status: "success",
        },
        ActivityEntry {
            action: "Permission Updated",
            user: "jane.smith@email.com",
            timestamp: "2 hours ago",
            status: "success",
        },
    ]
}

fn activity_badge(status: &str) -> &'static str {
    match status {
        "success" => "badge badge--success",
        "warning" => "badge badge--pending",
        "error" => "badge badge--danger",
        _ => "badge",
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let navigate = use_navigate();

    let admin_actions = [
        ("users", "User Management", "Manage user accounts and permissions"),
        ("database", "Database Administration", "Monitor and manage database operations"),
        ("lock", "Security Settings", "Configure security policies and access controls"),
        ("file-text", "System Logs", "View detailed system logs and reports"),
        ("settings", "System Configuration", "Modify system settings and preferences"),
    ];

    view! {
        <div class="backoffice">
            <header class="backoffice-header">
                <div class="backoffice-header__inner">
                    <div class="backoffice-header__brand">
                        <span class="backoffice-header__logo">{icon("shield")}</span>
                        <h1>"Admin Panel"</h1>
                    </div>
                    <div class="backoffice-header__actions">
                        <button
                            class="button button--secondary"
                            on:click=move |_| navigate("/dashboard", Default::default())
                        >
                            "Back to Dashboard"
                        </button>
                    </div>
                </div>
            </header>

            <div class="backoffice__container">
                <div class="backoffice__welcome">
                    <h2>"System Administration"</h2>
                    <p>"Monitor and manage your platform's core functionality."</p>
                </div>

                <div class="stat-grid">
                    <StatCard
                        label="Total Users"
                        icon_name="users"
                        value="2,847"
                        change="+12%"
                        caption="from last week"
                    />
                    <StatCard
                        label="Active Sessions"
                        icon_name="activity"
                        value="156"
                        change="+8%"
                        caption="from last week"
                    />
                    <StatCard
                        label="System Health"
                        icon_name="check-circle"
                        value="98.2%"
                        change="+0.3%"
                        caption="from last week"
                        status=IndicatorStatus::Good
                    />
                    <StatCard
                        label="Failed Logins"
                        icon_name="alert-triangle"
                        value="23"
                        change="-15%"
                        caption="from last week"
                        status=IndicatorStatus::Warning
                    />
                </div>

                <div class="panel-grid panel-grid--two">
                    <div class="panel">
                        <div class="panel__header">
                            <div>
                                <h2 class="panel__title">"Recent System Activities"</h2>
                                <p class="panel__subtitle">"Latest system events and user actions"</p>
                            </div>
                        </div>
                        <div class="panel__body">
                            <div class="activity-list">
                                {recent_activities().into_iter().map(|activity| view! {
                                    <div class="activity-list__row">
                                        <div class="activity-list__main">
                                            <div class="activity-list__title">{activity.action}</div>
                                            <div class="activity-list__detail">{activity.user}</div>
                                        </div>
                                        <div class="activity-list__side">
                                            <span class=activity_badge(activity.status)>
                                                {activity.status}
                                            </span>
                                            <span class="activity-list__time">{activity.timestamp}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                            <button class="button button--secondary button--block">
                                "View All Activities"
                            </button>
                        </div>
                    </div>

                    <div class="panel">
                        <div class="panel__header">
                            <div>
                                <h2 class="panel__title">"Administrative Actions"</h2>
                                <p class="panel__subtitle">"System management and configuration"</p>
                            </div>
                        </div>
                        <div class="panel__body">
                            <div class="admin-actions">
                                {admin_actions.into_iter().map(|(icon_name, title, detail)| view! {
                                    <button class="admin-actions__row">
                                        {icon(icon_name)}
                                        <span class="admin-actions__text">
                                            <span class="admin-actions__title">{title}</span>
                                            <span class="admin-actions__detail">{detail}</span>
                                        </span>
                                    </button>
                                }).collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
