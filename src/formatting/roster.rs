use colored::*;

use super::utils::*;
use crate::error::RosterResult;
use crate::models::Member;
use crate::store::RosterStore;

/// Print the store's current page of teams.
pub fn print_team_page(store: &RosterStore, format: &str) -> RosterResult<()> {
    let page = store.paginated_teams();

    if page.is_empty() {
        println!("{}", "No teams on this page.".dimmed());
        return Ok(());
    }

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        "table" => {
            println!("{}", "─".repeat(100).dimmed());
            println!(
                "{:<6} {:<50} {:<40}",
                "ID".bold(),
                "Title".bold(),
                "Assigned".bold()
            );
            println!("{}", "─".repeat(100).dimmed());

            for team in &page {
                let names: Vec<&str> = store
                    .assigned_members(team)
                    .map(|m| extract_first_name(&m.name))
                    .collect();
                let assigned = if names.is_empty() {
                    "-".dimmed()
                } else {
                    names.join(", ").green()
                };

                println!(
                    "{:<6} {:<50} {:<40}",
                    team.id.to_string().blue(),
                    truncate(&team.title, 50),
                    assigned
                );
            }
            println!("{}", "─".repeat(100).dimmed());
        }
        _ => {
            for team in &page {
                println!("\n{} {}", format!("#{}", team.id).blue(), team.title.bold());
                println!("  {}", truncate(&single_line(&team.body), 96).dimmed());

                let names: Vec<&str> = store.assigned_members(team).map(|m| m.name.as_str()).collect();
                if !names.is_empty() {
                    println!("  {} {}", "Assigned members:".dimmed(), names.join(", ").green());
                }
            }
            println!();
        }
    }

    println!(
        "{}",
        format!(
            "Page {} / {}  (sorted by {}, {} teams)",
            store.current_page(),
            store.total_pages(),
            store.sort_by().label(),
            store.all_teams().len()
        )
        .dimmed()
    );

    Ok(())
}

pub fn print_members(members: &[Member], format: &str) -> RosterResult<()> {
    if members.is_empty() {
        println!("{}", "No members found.".dimmed());
        return Ok(());
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(members)?);
        return Ok(());
    }

    println!("Found {} members:", members.len());
    for member in members {
        println!(
            "  {:<5} {:<30} {}",
            member.id.to_string().blue(),
            member.name,
            member.email.dimmed()
        );
    }

    Ok(())
}
