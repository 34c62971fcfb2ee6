//! Store-subscribed terminal renderer.
//!
//! Wakes on every store revision and prints whatever appeared since the last
//! redraw: new chat messages, new progress events, mood transitions.

use std::sync::Arc;

use finverse_core::AppStore;
use finverse_core_types::{AgentEvent, AvatarMood, ChatMessage, EventKind, MessageRole};

pub async fn run(store: Arc<AppStore>) {
    let mut revision = store.subscribe();
    let mut seen_messages = 0usize;
    let mut seen_events = 0usize;
    let mut mood = store.avatar();

    // First pass renders whatever is already in the store, then each watch
    // wakeup renders the delta.
    loop {
        let messages = store.messages();
        for message in &messages[seen_messages..] {
            print_message(message);
        }
        seen_messages = messages.len();

        let events = store.events();
        if events.len() < seen_events {
            // A new session cleared the transient log.
            seen_events = 0;
        }
        for event in &events[seen_events..] {
            print_event(event);
        }
        seen_events = events.len();

        let current = store.avatar();
        if current != mood {
            mood = current;
            if mood != AvatarMood::Idle {
                println!("  ~ {}", mood.as_str());
            }
        }

        if revision.changed().await.is_err() {
            break;
        }
    }
}

fn print_message(message: &ChatMessage) {
    let who = match message.role {
        MessageRole::User => "you",
        MessageRole::Assistant => "finverse",
    };
    println!("\n[{who}] {}", message.content);
    if !message.agents.is_empty() {
        println!(
            "  agents: {} • {:.1}s",
            message.agents.join(", "),
            message.processing_time
        );
    }
    if !message.citations.is_empty() {
        println!("  sources: {}", message.citations.join(", "));
    }
}

fn print_event(event: &AgentEvent) {
    let agent = event.agent.as_deref().unwrap_or("agent");
    match &event.kind {
        EventKind::Plan { content } => {
            println!("  · [{agent}] plan");
            if let Some(content) = content {
                for step in &content.steps {
                    println!("      - {step}");
                }
            }
        }
        EventKind::Search { content } => {
            let (query, status) = content
                .as_ref()
                .map(|c| (c.query.as_str(), c.status.as_str()))
                .unwrap_or_default();
            println!("  · [{agent}] search: {query} ({status})");
        }
        EventKind::Thinking { content } => {
            let message = content
                .as_ref()
                .map(|c| c.message.as_str())
                .unwrap_or("thinking...");
            println!("  · [{agent}] {message}");
        }
        EventKind::ToolCall { content } => {
            let (tool, action) = content
                .as_ref()
                .map(|c| (c.tool.as_str(), c.action.as_str()))
                .unwrap_or_default();
            println!("  · [{agent}] {tool} -> {action}");
        }
        EventKind::Result { content } => {
            let text = content
                .as_ref()
                .and_then(|c| c.message.clone())
                .unwrap_or_else(|| format!("{agent} completed analysis"));
            println!("  · [{agent}] {text}");
        }
        EventKind::Routing { content } => {
            let message = content.as_ref().map(|c| c.message.as_str()).unwrap_or("");
            println!("  · [{agent}] routing: {message}");
        }
        EventKind::Error { content } => {
            println!("  · [{agent}] error: {content}");
        }
        // The terminal event is rendered as a chat message.
        EventKind::Final { .. } => {}
        EventKind::Unknown => {}
    }
}

pub fn print_transactions(store: &AppStore) {
    let transactions = store.transactions();
    if transactions.is_empty() {
        println!("no transactions loaded");
        return;
    }
    println!("{} transactions:", transactions.len());
    for txn in &transactions {
        let merchant = txn.get("merchant").and_then(|v| v.as_str()).unwrap_or("?");
        let amount = txn.get("amount").and_then(|v| v.as_f64()).unwrap_or(0.0);
        let category = txn.get("category").and_then(|v| v.as_str()).unwrap_or("other");
        let flagged = txn
            .get("is_flagged")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        println!(
            "  {merchant:<24} \u{20b9}{amount:>10.2}  {category}{}",
            if flagged { "  [flagged]" } else { "" }
        );
    }
}

pub fn print_summary(store: &AppStore) {
    let Some(summary) = store.summary() else {
        println!("no summary loaded");
        return;
    };
    println!(
        "spent \u{20b9}{:.2} • income \u{20b9}{:.2} • net \u{20b9}{:.2}",
        summary.total_spent, summary.total_income, summary.net
    );
    for (category, amount) in &summary.categories {
        println!("  {category:<16} \u{20b9}{amount:>10.2}");
    }
    println!(
        "  {} transactions, {} flagged",
        summary.transaction_count, summary.flagged_count
    );
}
