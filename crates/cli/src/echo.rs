use owo_colors::OwoColorize;

use crate::VERSION;

/// Banner printed at the top of verbose runs.
pub fn print_banner() {
    eprintln!(
        "\n{} {}{}",
        "Newslens".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!(
        "{}",
        "Analyze news articles for topic, sentiment, and credibility\n".dimmed()
    );
}

/// Progress marker: dimmed `[n/total]` prefix plus a cyan message.
pub fn print_step(step: usize, total: usize, message: &str) {
    let prefix = format!("[{step}/{total}]");
    eprintln!("{} {}", prefix.dimmed(), message.bright_cyan());
}

pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Verbose-mode summary of what the analyzers concluded.
pub fn print_analysis_details(result: &newslens_core::AnalysisResult) {
    let rule = "═".repeat(60);
    eprintln!("\n{}", rule.dimmed());
    eprintln!("{}", "Analysis Details".bold().cyan());
    eprintln!("{}", rule.dimmed());
    eprintln!("  {} {}", "Topic:".dimmed(), result.topic.bright_white());
    eprintln!(
        "  {} {}",
        "Tone:".dimmed(),
        result.sentiment.tone.label().bright_white()
    );
    eprintln!(
        "  {} {}",
        "Bias score:".dimmed(),
        result.bias.score.to_string().bright_white()
    );
    eprintln!(
        "  {} {}\n",
        "Credibility:".dimmed(),
        format!("{:.2}/100", result.credibility.score).bright_white()
    );
}

/// Human-readable byte count for verbose output.
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let exact = bytes as f64;
    if exact >= MB {
        format!("{:.1} MB", exact / MB)
    } else if exact >= KB {
        format!("{:.1} KB", exact / KB)
    } else {
        format!("{bytes} B")
    }
}
