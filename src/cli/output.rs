//! Output formatting and progress bars for CLI

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::puzzle::{Grid, Position};

/// Create a progress bar tracking the opponent's progress through a duel
pub fn create_duel_progress(total_words: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_words);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} words ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Create a spinner for generation and discovery passes
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a grid with row/column indices
pub fn print_grid(grid: &Grid) {
    print!("    ");
    for col in 0..grid.size() {
        print!("{col:2}");
    }
    println!();
    for (row, line) in grid.rows().iter().enumerate() {
        print!("{row:3} ");
        for letter in line.chars() {
            print!(" {letter}");
        }
        println!();
    }
}

/// Format a cell path as `(r, c) -> ... -> (r, c)`
pub fn format_path(path: &[Position]) -> String {
    path.iter()
        .map(Position::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Format a duration as `MM:SS.mmm`
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();
    let minutes = total_ms / 60_000;
    let seconds = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;
    format!("{minutes:02}:{seconds:02}.{millis:03}")
}
