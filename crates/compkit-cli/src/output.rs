//! Terminal output formatting.

use colored::Colorize;
use std::path::{Path, PathBuf};

use compkit_scaffold::GeneratedFile;
use compkit_style::{DirectoryReport, ValidationIssue, WatchEvent};

/// Print the files written for a component.
pub fn print_generated(name: &str, written: &[PathBuf]) {
    println!("{} Generated component {}:", "✓".green().bold(), name.cyan().bold());
    for path in written {
        println!("  {}", path.display());
    }
}

/// Print rendered files without writing them.
pub fn print_dry_run(component_dir: &Path, files: &[GeneratedFile]) {
    for file in files {
        println!(
            "{} Would generate: {}",
            "→".dimmed(),
            component_dir.join(&file.filename).display()
        );
        println!("{}", "─".repeat(40));
        println!("{}", file.content);
    }
    println!("{}", "(dry run - no files written)".dimmed());
}

fn print_issue(issue: &ValidationIssue) {
    println!(
        "  {:>4}  {:<20} {}",
        issue.line.to_string().yellow(),
        issue.rule.as_str().red(),
        issue.message
    );
    if !issue.content.is_empty() {
        println!("        {}", issue.content.dimmed());
    }
}

/// Print the issues of a single file.
pub fn print_file_issues(path: &Path, issues: &[ValidationIssue]) {
    if issues.is_empty() {
        println!("{} {}", "✓".green().bold(), path.display());
        return;
    }

    println!(
        "{} {} ({} issue{})",
        "✗".red().bold(),
        path.display().to_string().bold(),
        issues.len(),
        if issues.len() == 1 { "" } else { "s" }
    );
    for issue in issues {
        print_issue(issue);
    }
}

/// Print a directory report with per-file counts and a total.
pub fn print_directory_report(report: &DirectoryReport) {
    if report.files.is_empty() {
        println!(
            "{}",
            format!("No CSS modules found in {}.", report.root.display()).dimmed()
        );
        return;
    }

    for file in &report.files {
        print_file_issues(&file.path, &file.issues);
    }

    println!("{}", "─".repeat(40));
    let summary = format!(
        "{} issue(s) in {} file(s)",
        report.total_issues,
        report.files.len()
    );
    if report.has_issues() {
        println!("{}", summary.red().bold());
    } else {
        println!("{}", summary.green().bold());
    }
}

/// Print one watch-mode event.
pub fn print_watch_event(event: &WatchEvent) {
    match event {
        WatchEvent::Changed { path, issues } => print_file_issues(path, issues),
        WatchEvent::Removed { path } => {
            println!("{} {} removed", "-".dimmed(), path.display());
        }
    }
}

/// Print the path a type file was written to.
pub fn print_type_written(type_name: &str, path: &Path) {
    println!(
        "{} Generated types for {}: {}",
        "✓".green().bold(),
        type_name.cyan().bold(),
        path.display()
    );
}
