//! CLI module for the dirnote application
//!
//! This module handles the command-line interface for building note names
//! and creating note directories.

use chrono::{DateTime, Local};
use log::info;

use crate::{identifier::parse_date, parse_keywords, Commands, NoteRequest, NoteStore, Result};

/// CLI Application handler - processes CLI commands and interfaces with NoteStore
pub struct App {
    /// The note directory backend
    store: NoteStore,

    /// Whether to display verbose output
    verbose: bool,
}

impl App {
    /// Create a new CLI application with the given store
    pub fn new(store: NoteStore, verbose: bool) -> Self {
        Self { store, verbose }
    }

    /// Run the CLI application with the given command
    pub fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::New {
                title,
                keywords,
                date,
            } => self.create_note(title, keywords, date)?,

            Commands::Name {
                title,
                keywords,
                date,
            } => {
                let request = self.build_request(title, keywords, date)?;
                println!("{}", request.file_name(self.store.config()));
            }

            Commands::Keywords => {
                for keyword in self.store.known_keywords() {
                    println!("{}", keyword);
                }
            }

            Commands::Config => {
                let json = serde_json::to_string_pretty(self.store.config())?;
                println!("{}", json);
            }
        }

        Ok(())
    }

    fn create_note(
        &self,
        title: Option<String>,
        keywords: Option<String>,
        date: Option<String>,
    ) -> Result<()> {
        let request = self.build_request(title, keywords, date)?;
        let name = request.file_name(self.store.config());
        info!("Computed note name: {}", name);

        let path = self.store.create_note_directory(&name)?;
        if self.verbose {
            println!("Created note directory: {}", path.display());
        } else {
            println!("{}", path.display());
        }
        Ok(())
    }

    fn build_request(
        &self,
        title: Option<String>,
        keywords: Option<String>,
        date: Option<String>,
    ) -> Result<NoteRequest> {
        let timestamp: DateTime<Local> = match date {
            Some(text) => parse_date(&text)?,
            None => Local::now(),
        };

        Ok(NoteRequest::new(timestamp)
            .title(title.unwrap_or_default())
            .keywords(parse_keywords(keywords)))
    }
}
