//! Terminal front-end for the SoftSell chat assistant.
//!
//! Reads lines from stdin, dispatches them to the widget, and renders every
//! published view change to stdout.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{info, warn};

use softsell_chat::adapters::{FileLocalStorage, InMemoryLocalStorage};
use softsell_chat::application::{ChatWidget, SubmitLeadFormResult, WidgetView};
use softsell_chat::config::{AppConfig, StorageBackend, StorageConfig};
use softsell_chat::domain::conversation::{Message, QuickAction, Sender};
use softsell_chat::domain::lead::{LeadField, LeadLicenseType};
use softsell_chat::logging;
use softsell_chat::ports::LocalStorage;

const HELP: &str = "\
Commands:
  /contact          open the contact form
  /1 .. /6          ask one of the example questions
  /clear            start over
  /help             show this help
  /quit             exit
While the contact form is open:
  name=..., email=..., company=..., license=...   fill a field
  /submit           send the form
  /cancel           close the form";

fn command_for(action: QuickAction) -> &'static str {
    match action {
        QuickAction::Valuation => "/valuation",
        QuickAction::Schedule => "/schedule",
        QuickAction::Licenses => "/licenses",
        QuickAction::Help => "/process",
    }
}

fn print_help() {
    println!("Quick actions:");
    for action in QuickAction::ALL {
        println!("  {:<17} {}", command_for(action), action.label());
    }
    println!("{}", HELP);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    logging::init(&config.logging)?;

    let storage = build_storage(&config.storage);
    let widget = ChatWidget::load(storage, config.session_options()).await;
    info!(
        backend = ?config.storage.backend,
        key = %config.storage.key,
        "Chat widget ready"
    );

    let renderer = tokio::spawn(render_loop(widget.subscribe()));
    print_help();
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if !dispatch(&widget, line.trim()).await {
            break;
        }
    }

    widget.settle().await;
    widget.shutdown();
    renderer.abort();
    Ok(())
}

fn build_storage(config: &StorageConfig) -> Arc<dyn LocalStorage> {
    match config.backend {
        StorageBackend::File => Arc::new(FileLocalStorage::new(&config.data_dir)),
        StorageBackend::Memory => Arc::new(InMemoryLocalStorage::new()),
    }
}

/// Handles one input line. Returns false when the user quits.
async fn dispatch(widget: &ChatWidget, line: &str) -> bool {
    match line {
        "" => {}
        "/quit" | "/exit" => return false,
        "/help" => print_help(),
        "/clear" => {
            widget.clear_chat().await;
        }
        "/contact" => {
            if !widget.open_lead_form().await {
                println!("(the contact form is already open)");
            }
        }
        "/submit" => match widget.submit_lead_form().await {
            Ok(SubmitLeadFormResult::Submitted(_)) => {}
            Ok(SubmitLeadFormResult::Incomplete { missing }) => {
                let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
                println!("(missing: {})", names.join(", "));
            }
            Err(e) => println!("({})", e),
        },
        "/cancel" => report(widget.cancel_lead_form().await),
        _ if line.starts_with('/') => {
            if let Some(action) = QuickAction::ALL
                .into_iter()
                .find(|action| command_for(*action) == line)
            {
                report(widget.quick_action(action).await);
            } else if let Some(question) = example_question(widget, line) {
                report(widget.send_message(question).await);
            } else {
                println!("(unknown command, try /help)");
            }
        }
        _ => {
            if widget.view().lead_form_open {
                fill_field(widget, line).await;
            } else {
                report(widget.send_message(line).await);
            }
        }
    }
    true
}

fn example_question(widget: &ChatWidget, line: &str) -> Option<&'static str> {
    let index: usize = line.trim_start_matches('/').parse().ok()?;
    let view = widget.view();
    index
        .checked_sub(1)
        .and_then(|i| view.example_questions.get(i).copied())
}

async fn fill_field(widget: &ChatWidget, line: &str) {
    let Some((name, value)) = line.split_once('=') else {
        println!("(the contact form is open: use field=value, /submit or /cancel)");
        return;
    };

    match name.parse::<LeadField>() {
        Ok(field) => report(widget.update_lead_field(field, value.trim()).await),
        Err(e) => println!("({})", e),
    }
}

fn report<T, E: std::fmt::Display>(result: Result<T, E>) {
    if let Err(e) = result {
        println!("({})", e);
    }
}

/// Prints transcript changes as the published view evolves.
async fn render_loop(mut views: watch::Receiver<WidgetView>) {
    let mut rendered: Vec<Message> = Vec::new();
    let mut was_typing = false;
    let mut form_shown = false;

    loop {
        let view = views.borrow_and_update().clone();

        // Intermediate views may be skipped, so a clear is detected by the
        // printed prefix no longer matching.
        if !view.messages.starts_with(&rendered) {
            println!("\n--- conversation cleared ---");
            rendered.clear();
        }
        for message in &view.messages[rendered.len()..] {
            print_message(message.sender(), message.lines());
        }
        rendered = view.messages.clone();

        if view.is_typing && !was_typing {
            println!("  SoftSell Assistant is typing...");
        }
        was_typing = view.is_typing;

        if view.lead_form_open && !form_shown {
            print_form_help();
        }
        form_shown = view.lead_form_open;

        if !view.example_questions.is_empty() && rendered.len() <= 1 {
            println!("Try asking:");
            for (i, question) in view.example_questions.iter().enumerate() {
                println!("  /{} {}", i + 1, question);
            }
        }

        if views.changed().await.is_err() {
            warn!("View channel closed");
            break;
        }
    }
}

fn print_message<'a>(sender: Sender, lines: impl Iterator<Item = &'a str>) {
    println!("{}:", sender.label());
    for line in lines {
        println!("  {}", line);
    }
}

fn print_form_help() {
    let options: Vec<&str> = LeadLicenseType::ALL.iter().map(|t| t.as_str()).collect();
    println!("[Contact form] name=, email=, company= are required.");
    println!("[Contact form] license= one of: {}", options.join(", "));
    println!("[Contact form] /submit to send, /cancel to close.");
}
