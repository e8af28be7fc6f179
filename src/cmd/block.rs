//! Block commands: validate, save, show, list, persist, delete.

use anyhow::{Context, Result};
use std::path::PathBuf;

use checkblock::check::CheckConfiguration;
use checkblock::repository::CheckRepository;
use checkblock::ui::{self, colors};

use crate::cli::DocumentArgs;

/// Build a block from `--text` or `--file`, validating the document.
fn build_check(path: PathBuf, document: DocumentArgs) -> Result<CheckConfiguration> {
    match document.file {
        Some(file) => CheckConfiguration::from_document_file(path, &file),
        None => Ok(CheckConfiguration::new(path, document.text)?),
    }
}

fn describe(check: &CheckConfiguration) -> String {
    check.check_document_path().display().to_string()
}

/// Validate a document, optionally writing it out right away.
pub fn cmd_validate(path: PathBuf, document: DocumentArgs, persist: bool) -> Result<()> {
    let check = build_check(path, document)?;

    if check.check_document_text().is_none() {
        ui::info(&format!(
            "{} No check document given; nothing to validate",
            colors::secondary("○")
        ));
    } else {
        ui::success("Check document is valid YAML");
    }

    if persist {
        write_document(&check)?;
    }

    Ok(())
}

/// Validate a block and store it under `name`.
pub fn cmd_save(
    repo: &impl CheckRepository,
    name: &str,
    path: PathBuf,
    document: DocumentArgs,
) -> Result<()> {
    let check = build_check(path, document)?;
    repo.save(name, &check)?;

    ui::success(&format!(
        "Saved {} {}",
        colors::identifier(name),
        colors::secondary(&format!("-> {}", describe(&check)))
    ));
    Ok(())
}

/// Print a stored block.
pub fn cmd_show(repo: &impl CheckRepository, name: &str) -> Result<()> {
    let check = repo.load(name)?;

    println!(
        "{} {} {}",
        ui::document_icon(&check),
        colors::heading(name),
        colors::secondary(&format!("({})", CheckConfiguration::BLOCK_TYPE_NAME))
    );
    println!("{} {}", colors::secondary("path:"), describe(&check));
    match check.check_document_text() {
        Some(text) => {
            println!("{}", colors::secondary("document:"));
            println!("{}", text);
        }
        None => println!("{} {}", colors::secondary("document:"), colors::secondary("(none)")),
    }
    Ok(())
}

/// List stored blocks with their target paths.
pub fn cmd_list(repo: &impl CheckRepository) -> Result<()> {
    let names = repo.list_names()?;
    if names.is_empty() {
        ui::info("No check blocks stored");
        return Ok(());
    }

    for name in names {
        match repo.load(&name) {
            Ok(check) => println!(
                "{} {} {}",
                ui::document_icon(&check),
                colors::identifier(&name),
                colors::secondary(&describe(&check))
            ),
            Err(e) => ui::warn(&format!("{}: {:#}", name, e)),
        }
    }
    Ok(())
}

/// Write a stored block's document to its target path.
pub fn cmd_persist(repo: &impl CheckRepository, name: &str) -> Result<()> {
    let check = repo.load(name)?;
    write_document(&check)
}

/// Remove a stored block.
pub fn cmd_delete(repo: &impl CheckRepository, name: &str) -> Result<()> {
    repo.delete(name)?;
    ui::success(&format!("Deleted {}", colors::identifier(name)));
    Ok(())
}

fn write_document(check: &CheckConfiguration) -> Result<()> {
    if !check.has_document() {
        ui::warn("Block has no check document; nothing written");
        return Ok(());
    }

    check
        .persist()
        .with_context(|| format!("Failed to write check document to {}", describe(check)))?;

    ui::success(&format!("Wrote {}", colors::identifier(&describe(check))));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkblock::repository::InMemoryCheckRepository;
    use std::fs;
    use tempfile::TempDir;

    fn text(doc: &str) -> DocumentArgs {
        DocumentArgs {
            text: Some(doc.to_string()),
            file: None,
        }
    }

    #[test]
    fn test_save_rejects_invalid_document() {
        let repo = InMemoryCheckRepository::new();
        let err = cmd_save(&repo, "orders", "checks.yml".into(), text("a: [")).unwrap_err();

        assert!(err.to_string().contains("not valid"));
        assert!(repo.list_names().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_persist() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("checks.yml");
        let repo = InMemoryCheckRepository::new();

        cmd_save(&repo, "orders", target.clone(), text("checks for t:\n  - row_count > 0")).unwrap();
        cmd_persist(&repo, "orders").unwrap();

        let written: String = serde_yaml::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
        assert_eq!(written, "checks for t:\n  - row_count > 0");
    }

    #[test]
    fn test_persist_without_document_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("checks.yml");
        let repo = InMemoryCheckRepository::new();

        cmd_save(&repo, "empty", target.clone(), DocumentArgs::default()).unwrap();
        cmd_persist(&repo, "empty").unwrap();

        assert!(!target.exists());
    }

    #[test]
    fn test_persist_unknown_block() {
        let repo = InMemoryCheckRepository::new();
        assert!(cmd_persist(&repo, "missing").is_err());
    }

    #[test]
    fn test_build_check_from_file() {
        let tmp = TempDir::new().unwrap();
        let doc = tmp.path().join("doc.yml");
        fs::write(&doc, "a: 1\n").unwrap();

        let args = DocumentArgs {
            text: None,
            file: Some(doc),
        };
        let check = build_check("checks.yml".into(), args).unwrap();
        assert_eq!(check.check_document_text(), Some("a: 1\n"));
    }
}
