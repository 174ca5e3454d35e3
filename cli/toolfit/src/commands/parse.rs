//! `toolfit parse`: show how version strings are understood.

use anyhow::Result;
use toolfit_version::VersionNumber;

/// Parse `texts` and order them by version; stable for equal versions.
fn sorted(texts: &[String]) -> Vec<(&str, VersionNumber)> {
    let mut parsed: Vec<(&str, VersionNumber)> = texts
        .iter()
        .map(|text| (text.as_str(), VersionNumber::parse(text)))
        .collect();
    parsed.sort_by(|a, b| a.1.cmp(&b.1));
    parsed
}

pub fn run(texts: &[String]) -> Result<()> {
    for (text, version) in sorted(texts) {
        if version.is_empty() {
            println!("  {text:<24} (unrecognized)");
        } else {
            println!("  {text:<24} {version}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_numerically_with_unrecognized_first() {
        let texts: Vec<String> = ["4.10.0", "R 4.3", "4.9", "4.3.1 Patched", "4.9.0"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let order: Vec<&str> = sorted(&texts).into_iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["R 4.3", "4.3.1 Patched", "4.9", "4.9.0", "4.10.0"]);
    }
}
