//! Terminal rendering for command results
//!
//! Human mode prints titled sections of `key: value` lines, tables and status
//! lines. JSON mode prints exactly one `{"status": "success", "data": ...}`
//! document on stdout, so status lines are dropped there and warnings move to
//! stderr.

use console::{style, StyledObject};
use serde::Serialize;
use serde_json::json;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Kind of one-line status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notice {
    Success,
    Info,
    Warning,
}

impl Notice {
    fn marker(self) -> StyledObject<&'static str> {
        let marker = match self {
            Notice::Success => style("✓").green(),
            Notice::Info => style("ℹ").blue(),
            Notice::Warning => style("⚠").yellow(),
        };
        marker.bold()
    }
}

pub struct OutputWriter {
    json: bool,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn success(&self, message: impl Display) {
        self.notice(Notice::Success, message);
    }

    pub fn info(&self, message: impl Display) {
        self.notice(Notice::Info, message);
    }

    pub fn warning(&self, message: impl Display) {
        self.notice(Notice::Warning, message);
    }

    fn notice(&self, kind: Notice, message: impl Display) {
        match (self.json, kind) {
            (true, Notice::Warning) => {
                eprintln!("{}", json!({ "status": "warning", "message": message.to_string() }));
            }
            (true, _) => {}
            (false, Notice::Warning) => eprintln!("{} {}", kind.marker(), message),
            (false, _) => println!("{} {}", kind.marker(), message),
        }
    }

    /// Print the command's result document
    pub fn result<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        let document = json!({ "status": "success", "data": data });
        println!("{}", serde_json::to_string_pretty(&document)?);
        Ok(())
    }

    pub fn section(&self, title: impl Display) {
        if !self.json {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn kv(&self, key: impl Display, value: impl Display) {
        if !self.json {
            println!("{}: {}", style(key).bold(), value);
        }
    }

    pub fn table<T: Tabled>(&self, rows: Vec<T>) {
        if self.json {
            return;
        }
        if rows.is_empty() {
            println!("{}", style("(no rows)").dim());
            return;
        }
        println!("{}", Table::new(rows).with(Style::rounded()));
    }
}
