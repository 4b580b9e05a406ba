//! Command handlers for questctl.

use crate::ui;
use anyhow::{bail, Result};
use chrono::{NaiveDate, Utc};
use questlog::store::BlobStore;
use questlog::{Priority, Quest, QuestLog, SortKey, StatusFilter};
use std::io::{self, BufRead, Write};
use uuid::Uuid;

const KEY_WIDTH: usize = 12;

/// Show the gamification HUD and collection counts
pub fn status<S: BlobStore>(log: &QuestLog<S>) {
    ui::print_header("questctl", env!("CARGO_PKG_VERSION"));
    ui::print_hud(log.progression());
    println!();

    let now = Utc::now();
    let quests = log.quests();
    let active = quests.iter().filter(|q| !q.completed).count();
    let completed = quests.len() - active;
    let overdue = quests.iter().filter(|q| q.is_overdue(now)).count();

    ui::print_kv("quests", &quests.len().to_string(), KEY_WIDTH);
    ui::print_kv("active", &active.to_string(), KEY_WIDTH);
    ui::print_kv("completed", &completed.to_string(), KEY_WIDTH);
    ui::print_kv("overdue", &overdue.to_string(), KEY_WIDTH);
}

/// Print the projected quest list for the given selection
pub fn list<S: BlobStore>(
    log: &mut QuestLog<S>,
    filter: StatusFilter,
    sort: SortKey,
    search: Option<String>,
) {
    log.set_filter(filter);
    log.set_sort(sort);
    log.set_search(search.unwrap_or_default());

    let visible = log.visible();
    if visible.is_empty() {
        ui::print_empty_state();
        return;
    }

    for quest in &visible {
        ui::print_quest_line(quest);
    }
    println!(
        "{}{} of {} quests shown{}",
        ui::colors::DIM,
        visible.len(),
        log.quests().len(),
        ui::colors::RESET
    );
}

/// Create a quest. Validation failures are shown inline, like the form
/// error under the title input.
pub fn add<S: BlobStore>(
    log: &mut QuestLog<S>,
    title: &str,
    priority: Priority,
    due: Option<NaiveDate>,
) -> Result<()> {
    match log.add(title, priority, due) {
        Ok(quest) => {
            println!(
                "Added \"{}\"  [{}] +{} XP  ({})",
                quest.title,
                quest.priority.label(),
                quest.xp_reward,
                short_id(quest.id)
            );
            Ok(())
        }
        Err(err) if err.is_user_facing() => {
            ui::print_error(&err.to_string());
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Toggle completion by id prefix, reporting XP and level-ups
pub fn done<S: BlobStore>(log: &mut QuestLog<S>, id: &str) -> Result<()> {
    let id = resolve_id(log.quests(), id)?;
    let level_before = log.progression().level;

    let quest = log.toggle(id)?;
    if quest.completed {
        println!(
            "{} {}  {}+{} XP{}",
            ui::symbols::DONE,
            quest.title,
            ui::colors::ACCENT,
            quest.xp_reward,
            ui::colors::RESET
        );
        let progression = log.progression();
        if progression.level > level_before {
            println!(
                "{}Level up!{} Level {} — {}",
                ui::colors::BOLD,
                ui::colors::RESET,
                progression.level,
                progression.title()
            );
        } else {
            println!(
                "XP {} / {}",
                progression.current_xp, progression.max_xp
            );
        }
    } else {
        println!("\"{}\" is active again.", quest.title);
    }
    Ok(())
}

/// Editing is a placeholder with no mutation semantics
pub fn edit<S: BlobStore>(log: &QuestLog<S>, id: &str) -> Result<()> {
    let id = resolve_id(log.quests(), id)?;
    log.edit(id);
    println!("Editing isn't available yet.");
    Ok(())
}

/// Delete by id prefix, guarded by the confirmation dialog unless
/// `--yes` was passed
pub fn rm<S: BlobStore>(log: &mut QuestLog<S>, id: &str, yes: bool) -> Result<()> {
    let id = resolve_id(log.quests(), id)?;
    let title = log.request_delete(id)?;

    let confirmed = yes || prompt_confirm(&title)?;
    if confirmed {
        if let Some(removed) = log.confirm_delete() {
            println!("Deleted \"{}\".", removed.title);
        }
    } else {
        log.cancel_delete();
        println!("Cancelled.");
    }
    Ok(())
}

fn prompt_confirm(title: &str) -> Result<bool> {
    println!(
        "{}Delete quest?{}",
        ui::colors::BOLD,
        ui::colors::RESET
    );
    println!("Are you sure you want to delete \"{title}\"? This action cannot be undone.");
    print!("[y/N] ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn short_id(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}

/// Resolve a unique id prefix against the collection
fn resolve_id(quests: &[Quest], prefix: &str) -> Result<Uuid> {
    let needle = prefix.to_ascii_lowercase();
    let matches: Vec<Uuid> = quests
        .iter()
        .map(|q| q.id)
        .filter(|id| id.to_string().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => bail!("no quest matches id \"{prefix}\""),
        _ => bail!("id \"{prefix}\" is ambiguous ({} matches)", matches.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quests() -> Vec<Quest> {
        vec![
            Quest::new("one", Priority::Low, None),
            Quest::new("two", Priority::High, None),
        ]
    }

    #[test]
    fn test_resolve_full_id() {
        let quests = quests();
        let id = quests[0].id;
        assert_eq!(resolve_id(&quests, &id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_resolve_unique_prefix() {
        let quests = quests();
        let id = quests[1].id;
        let prefix = &id.to_string()[..8];
        assert_eq!(resolve_id(&quests, prefix).unwrap(), id);
    }

    #[test]
    fn test_resolve_unknown_prefix_fails() {
        // UUIDs are hex, so "zzz" can never match.
        assert!(resolve_id(&quests(), "zzz").is_err());
    }

    #[test]
    fn test_resolve_ambiguous_prefix_fails() {
        let quests = quests();
        // Empty prefix matches every quest.
        let err = resolve_id(&quests, "").unwrap_err();
        assert!(err.to_string().contains("ambiguous"));
    }
}
