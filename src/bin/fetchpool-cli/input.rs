use std::fs;
use std::io::{self, IsTerminal, Read};

use anyhow::Context;

use crate::args::CliArgs;

/// Collects URLs from the positional arguments and `--file`, falling back to
/// stdin when neither gives any.
pub fn collect_urls(args: &CliArgs) -> anyhow::Result<Vec<String>> {
    let mut urls = args.urls.clone();
    if let Some(path) = &args.file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading URL file {}", path.display()))?;
        urls.extend(parse_url_lines(&contents));
    }
    if urls.is_empty() && !io::stdin().is_terminal() {
        let mut contents = String::new();
        io::stdin()
            .read_to_string(&mut contents)
            .context("reading URLs from stdin")?;
        urls.extend(parse_url_lines(&contents));
    }
    Ok(urls)
}

pub fn parse_url_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_lines_and_comments() {
        let text = "# mirrors\nhttps://a.example\n\n  https://b.example  \n#https://c.example\n";
        assert_eq!(
            parse_url_lines(text),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let text = "https://a\nhttps://a\nhttps://b";
        assert_eq!(parse_url_lines(text).len(), 3);
    }
}
