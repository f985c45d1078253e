use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{info, warn};

use hymatch_core::config::Config;
use hymatch_core::i18n::{CoverageValidator, LocaleRegistry, LocaleResolver};
use hymatch_core::profile::{EditSession, ProfileField, SetCollection};
use hymatch_core::store::InMemoryProfileStore;

const HELP: &str = "\
Commands:
  set <field> <value>        replace a field (firstName, age, gender, ...)
  toggle <collection> <tok>  toggle a preferredDays / preferredJobTypes token
  show                       print the current draft as JSON
  save                       validate and commit the draft
  locale <id>                switch the display locale
  locales                    list supported locales
  t <key>                    resolve a translation key
  check                      report locale table coverage
  quit";

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hymatch_core=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let table = config.load_locale_table()?;
    let mut resolver = LocaleResolver::new(table, config.default_locale.clone());
    info!("Starting with locale '{}'", resolver.locale());

    let store = InMemoryProfileStore::new();
    let mut session = EditSession::open(&store);

    println!("{}", resolver.resolve("profile.edit"));
    println!("{}", HELP);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read command")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "set" => {
                let (name, value) = rest.split_once(' ').unwrap_or((rest, ""));
                match name.parse::<ProfileField>() {
                    Ok(field) => session.set_field_text(field, value),
                    Err(e) => warn!("{}", e),
                }
            }
            "toggle" => {
                let (name, token) = rest.split_once(' ').unwrap_or((rest, ""));
                match name.parse::<SetCollection>() {
                    Ok(_) if token.trim().is_empty() => warn!("toggle needs a token"),
                    Ok(collection) => session.toggle(collection, token.trim()),
                    Err(e) => warn!("{}", e),
                }
            }
            "show" => {
                let json = serde_json::to_string_pretty(session.draft())
                    .context("Failed to serialize draft")?;
                writeln!(stdout, "{}", json)?;
            }
            "save" => match session.save() {
                Ok(profile) => {
                    let json = serde_json::to_string_pretty(&profile)
                        .context("Failed to serialize profile")?;
                    writeln!(stdout, "{}", json)?;
                    session = EditSession::open(&store);
                }
                Err(e) => {
                    let labels: Vec<_> = e
                        .missing
                        .iter()
                        .map(|field| resolver.resolve(field.label_key()))
                        .collect();
                    writeln!(stdout, "* {}", labels.join(", "))?;
                }
            },
            "locale" => {
                resolver.set_locale(rest);
                writeln!(stdout, "{}", resolver.resolve("language.select"))?;
            }
            "locales" => {
                for locale in LocaleRegistry::get().list_all() {
                    let marker = if locale.code == resolver.locale() { "*" } else { " " };
                    writeln!(stdout, "{} {} ({})", marker, locale.code, locale.native_name)?;
                }
            }
            "t" => writeln!(stdout, "{}", resolver.resolve(rest))?,
            "check" => {
                let reference = LocaleRegistry::get().default_locale().code;
                let report = CoverageValidator::validate(resolver.table(), reference);
                for error in &report.errors {
                    writeln!(stdout, "error: {}", error)?;
                }
                for warning in &report.warnings {
                    writeln!(stdout, "warning: {}", warning)?;
                }
                if report.is_clean() {
                    writeln!(stdout, "locale table is complete")?;
                }
            }
            "help" => writeln!(stdout, "{}", HELP)?,
            "quit" | "exit" => break,
            other => warn!("Unknown command '{}'", other),
        }
        stdout.flush()?;
    }

    info!("{}", resolver.metrics().format());
    Ok(())
}
