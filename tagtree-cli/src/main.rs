//! tagtree CLI
//!
//! Parses a tag-only document and prints it in bracketed form, as an
//! outline, or as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tagtree_common::warning::{clear_warnings, warn_once};
use tagtree_dom::{Node, print_tree};
use tagtree_parser::{parse_strict, parse_with_issues};

/// Parse tag-only markup into a tree
#[derive(Parser, Debug)]
#[command(name = "tagtree")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r"EXAMPLES:
    # Bracketed form of a file
    tagtree ./doc.xml

    # Parse a string directly
    tagtree --xml '<xml><hi/></xml>'

    # Indented outline
    tagtree --tree ./doc.xml

    # Fail on the first structural problem
    tagtree --strict ./doc.xml
")]
struct Cli {
    /// Path to the document
    #[arg(value_name = "FILE", conflicts_with = "xml", required_unless_present = "xml")]
    path: Option<PathBuf>,

    /// Parse this markup instead of reading a file
    #[arg(long, value_name = "TEXT")]
    xml: Option<String>,

    /// Print the tree as pretty JSON
    #[arg(long, conflicts_with = "tree")]
    json: bool,

    /// Print the tree as an indented outline
    #[arg(long)]
    tree: bool,

    /// Exit with an error on the first structural problem instead of warning
    #[arg(long)]
    strict: bool,
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(xml) = &cli.xml {
        return Ok(xml.clone());
    }
    let Some(path) = &cli.path else {
        bail!("either FILE or --xml is required");
    };
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn parse_document(text: &str, strict: bool) -> Result<Option<Node>> {
    if strict {
        let root = parse_strict(text).context("document is not well-formed")?;
        return Ok(Some(root));
    }

    let (root, issues) = parse_with_issues(text);
    clear_warnings();
    for issue in &issues {
        warn_once("Parser", &issue.summary());
    }
    Ok(root)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let text = read_input(&cli)?;
    let root = parse_document(&text, cli.strict)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&root)?);
    } else if cli.tree {
        if let Some(root) = &root {
            print_tree(root, 0);
        }
    } else {
        println!("{}", root.as_ref().map(Node::render).unwrap_or_default());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use clap::CommandFactory;
    use tagtree_parser::ParseError;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_xml_and_file_conflict() {
        let result = Cli::try_parse_from(["tagtree", "doc.xml", "--xml", "<a/>"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_required() {
        assert!(Cli::try_parse_from(["tagtree"]).is_err());
    }

    #[test]
    fn test_inline_markup_is_used() {
        let cli = Cli::try_parse_from(["tagtree", "--xml", "<a/>"]).expect("valid arguments");
        assert_eq!(read_input(&cli).expect("inline input"), "<a/>");
    }

    #[test]
    fn test_lenient_parse_keeps_partial_tree() {
        let root = parse_document("<a><b/>", false).expect("lenient parse");
        assert_eq!(root.as_ref().map(Node::render).as_deref(), Some("b()"));
    }

    #[test]
    fn test_repeated_issues_share_a_warning() {
        let (_, issues) = parse_with_issues("<a><x/></a><b><a><a>");
        let summaries: Vec<String> = issues.iter().map(ParseError::summary).collect();
        assert!(summaries.contains(&"<a> is never closed".to_string()));
        let unique: HashSet<&String> = summaries.iter().collect();
        assert!(unique.len() < summaries.len());
    }

    #[test]
    fn test_strict_parse_fails() {
        let err = parse_document("<a><b/>", true).expect_err("unclosed");
        assert_eq!(err.to_string(), "document is not well-formed");
        assert!(format!("{err:#}").contains("<a> opened at byte 0 is never closed"));
    }
}
