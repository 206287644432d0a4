#![allow(clippy::must_use_candidate)]

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;

use crate::types::Event;

/// Turns one event into a display line, or `None` when the payload lacks what
/// the line needs.
pub type EventHandler = fn(&Event) -> Option<String>;

pub static HANDLERS: Lazy<IndexMap<&'static str, EventHandler>> = Lazy::new(|| {
    let mut m: IndexMap<&'static str, EventHandler> = IndexMap::new();
    m.insert("PushEvent", push);
    m.insert("WatchEvent", watch);
    m.insert("CreateEvent", create);
    m.insert("ForkEvent", fork);
    m.insert("IssuesEvent", issues);
    m.insert("PullRequestEvent", pull_request);
    m
});

pub fn format_event(event: &Event) -> Option<String> {
    let handler = HANDLERS.get(event.kind.as_str())?;
    handler(event)
}

// Decode a payload leniently; a shape mismatch means "no line", never an error.
fn payload<'a, T: Deserialize<'a>>(event: &'a Event) -> Option<T> {
    T::deserialize(&event.payload).ok()
}

fn push(event: &Event) -> Option<String> {
    let repo = &event.repo.name;
    let commits = event
        .payload
        .get("commits")
        .and_then(Value::as_array)
        .map(Vec::len)
        .filter(|n| *n > 0);
    Some(match commits {
        Some(n) => format!("Pushed {n} commits to {repo}"),
        None => format!("Pushed commits to {repo}"),
    })
}

fn watch(event: &Event) -> Option<String> {
    Some(format!("Started watching {}", event.repo.name))
}

#[derive(Deserialize)]
struct CreatePayload {
    ref_type: String,
    #[serde(rename = "ref")]
    git_ref: String,
}

fn create(event: &Event) -> Option<String> {
    let p: CreatePayload = payload(event)?;
    Some(format!(
        "Created {} {} in {}",
        p.ref_type, p.git_ref, event.repo.name
    ))
}

fn fork(event: &Event) -> Option<String> {
    let repo = &event.repo.name;
    let forkee = event
        .payload
        .get("forkee")
        .and_then(|f| f.get("full_name"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty());
    Some(match forkee {
        Some(f) => format!("Forked {repo} to {f}"),
        None => format!("Forked {repo}"),
    })
}

/// Fields shared by issues and pull requests.
#[derive(Deserialize)]
struct Item {
    number: u64,
    title: String,
    #[serde(default)]
    merged: Option<bool>,
}

#[derive(Deserialize)]
struct IssuesPayload {
    action: String,
    issue: Item,
}

#[derive(Deserialize)]
struct PullRequestPayload {
    action: String,
    pull_request: Item,
}

fn issues(event: &Event) -> Option<String> {
    let p: IssuesPayload = payload(event)?;
    let verb = match p.action.as_str() {
        "opened" => "Opened",
        "closed" => "Closed",
        "reopened" => "Reopened",
        _ => return None,
    };
    Some(format!(
        "{verb} issue #{} \"{}\" in {}",
        p.issue.number, p.issue.title, event.repo.name
    ))
}

fn pull_request(event: &Event) -> Option<String> {
    let p: PullRequestPayload = payload(event)?;
    let pr = p.pull_request;
    let verb = match p.action.as_str() {
        "opened" => "Opened",
        "closed" if pr.merged.unwrap_or(false) => "Merged",
        "closed" => "Closed",
        "reopened" => "Reopened",
        _ => return None,
    };
    Some(format!(
        "{verb} pull request #{} \"{}\" in {}",
        pr.number, pr.title, event.repo.name
    ))
}
