//! Plain-text rendering of the dashboard

use std::fmt::Write;

use pizza_admin_core::services::{AdminDashboard, ListController, Notice, Tab};
use pizza_admin_core::traits::ListSource;
use pizza_admin_core::types::{Franchise, ListResult, NamePattern, User};

const NO_FRANCHISES: &str = "  No franchises found.\n";
const NO_USERS: &str = "  No users found.\n";

/// The whole screen for the current state.
pub fn render(dashboard: &AdminDashboard) -> String {
    if let Some(Notice::AccessDenied(reason)) = dashboard.notice() {
        return format!("Access denied. Sign in as an admin to use this console.\n  ({reason})\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "Mama Ricci's kitchen, admin: {}", dashboard.capability().viewer_name());
    out.push_str(&render_tabs(dashboard.active_tab()));
    if let Some(Notice::Banner(message)) = dashboard.notice() {
        let _ = writeln!(out, "! {message}  (type 'dismiss' to hide)");
    }

    match dashboard.active_tab() {
        Tab::Franchises => {
            let ctl = dashboard.franchises();
            out.push_str(&rows_or_empty(ctl, NO_FRANCHISES, render_franchises));
            out.push_str(&pager(ctl));
        }
        Tab::Users => {
            let ctl = dashboard.users();
            out.push_str(&rows_or_empty(ctl, NO_USERS, render_users));
            out.push_str(&pager(ctl));
        }
    }
    out
}

fn rows_or_empty<S: ListSource>(
    ctl: &ListController<S>,
    empty: &str,
    rows: fn(&ListResult<S::Item>) -> String,
) -> String {
    if ctl.shows_empty_state() {
        empty.to_string()
    } else {
        rows(ctl.result())
    }
}

fn pager<S: ListSource>(ctl: &ListController<S>) -> String {
    render_pager(
        ctl.page(),
        ctl.can_go_previous(),
        ctl.can_go_next(),
        ctl.pattern(),
    )
}

pub fn render_tabs(active: Tab) -> String {
    let labels: Vec<String> = Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.title())
            } else {
                format!(" {} ", tab.title())
            }
        })
        .collect();
    format!("{}\n", labels.join(" "))
}

pub fn render_franchises(result: &ListResult<Franchise>) -> String {
    let mut out = String::new();
    for (row, franchise) in result.items.iter().enumerate() {
        let admins = franchise.admin_names();
        let _ = writeln!(
            out,
            "{:>3}. {}{}",
            row + 1,
            franchise.name,
            if admins.is_empty() {
                String::new()
            } else {
                format!("  ({admins})")
            }
        );
        for (index, store) in franchise.stores.iter().enumerate() {
            let _ = writeln!(
                out,
                "       {}) {:<24} {} ₿",
                index + 1,
                store.name,
                format_revenue(store.total_revenue)
            );
        }
    }
    out
}

pub fn render_users(result: &ListResult<User>) -> String {
    let mut out = String::new();
    for (row, user) in result.items.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:<24} {:<28} {}",
            row + 1,
            user.name,
            user.email,
            user.role_summary().unwrap_or_else(|| "-".to_string())
        );
    }
    out
}

pub fn render_pager(page: u32, can_prev: bool, can_next: bool, pattern: &NamePattern) -> String {
    let prev = if can_prev { "« prev" } else { "      " };
    let next = if can_next { "next »" } else { "" };
    let filter = if pattern.is_wildcard() {
        String::new()
    } else {
        format!("   filter: {pattern}")
    };
    format!("{prev}  page {}  {next}{filter}\n", page + 1)
}

/// Up to three decimals, trailing zeros dropped.
pub fn format_revenue(value: f64) -> String {
    let fixed = format!("{value:.3}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
