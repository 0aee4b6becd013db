//! Inspection commands - categories, locale resolution and locale listing.

use colored::Colorize;
use plurals_core::{PluralCategory, PluralRuleType, PluralSelector, resolve as resolve_locale};
use serde::Serialize;

use super::{heading, info, print_json, warn};
use crate::error::CliResult;

#[derive(Debug, Serialize)]
struct RuleEntry {
    category: PluralCategory,
    condition: String,
}

#[derive(Debug, Serialize)]
struct CategoriesReport {
    locale: String,
    rule_type: PluralRuleType,
    source: Option<String>,
    categories: Vec<PluralCategory>,
    rules: Vec<RuleEntry>,
}

/// Display the categories a locale distinguishes and the condition of each.
pub fn categories(
    selector: &PluralSelector,
    locale: &str,
    rule_type: PluralRuleType,
    json: bool,
) -> CliResult<()> {
    let rules = selector.rules_for(locale, rule_type)?;
    let report = CategoriesReport {
        locale: rules.locale().key(),
        rule_type,
        source: rules.source().map(str::to_string),
        categories: rules.categories(),
        rules: rules
            .rules()
            .iter()
            .map(|rule| RuleEntry {
                category: rule.category(),
                condition: rule.condition().to_string(),
            })
            .collect(),
    };

    if json {
        return print_json(&report);
    }

    heading(&format!("{} ({})", report.locale, rule_type));
    match &report.source {
        Some(source) => info(&format!("Rules from {}", source.cyan())),
        None => warn(&format!("No {} rules, only \"other\" is used", rule_type)),
    }
    println!();

    for rule in &report.rules {
        println!("    {:<6} {}", rule.category.as_str().cyan().bold(), rule.condition);
    }
    println!("    {:<6} {}", "other".cyan().bold(), "everything else".dimmed());
    println!();
    Ok(())
}

#[derive(Debug, Serialize)]
struct ResolveReport {
    requested: String,
    key: String,
    tag: String,
    language: String,
    script: Option<String>,
    region: Option<String>,
    legacy_alias: Option<&'static str>,
    lookup_keys: Vec<String>,
    cardinal_source: Option<String>,
    ordinal_source: Option<String>,
}

/// Show how a locale name is normalized and where its rules come from.
pub fn resolve(selector: &PluralSelector, locale: &str, json: bool) -> CliResult<()> {
    let resolved = resolve_locale(locale)?;
    let source_of = |rule_type: PluralRuleType| -> CliResult<Option<String>> {
        Ok(selector
            .rules_for(locale, rule_type)?
            .source()
            .map(str::to_string))
    };

    let report = ResolveReport {
        requested: resolved.requested().to_string(),
        key: resolved.key(),
        tag: resolved.locale().tag(),
        language: resolved.language().to_string(),
        script: resolved.locale().script.clone(),
        region: resolved.locale().region.clone(),
        legacy_alias: resolved.legacy_alias(),
        lookup_keys: resolved.lookup_keys(),
        cardinal_source: source_of(PluralRuleType::Cardinal)?,
        ordinal_source: source_of(PluralRuleType::Ordinal)?,
    };

    if json {
        return print_json(&report);
    }

    heading(&format!("{:?}", report.requested));
    println!("  {} {}", "Key:".bright_white().bold(), report.key.cyan());
    println!("  {} {}", "Tag:".bright_white().bold(), report.tag);
    println!("  {} {}", "Language:".bright_white().bold(), report.language);
    if let Some(script) = &report.script {
        println!("  {} {}", "Script:".bright_white().bold(), script);
    }
    if let Some(region) = &report.region {
        println!("  {} {}", "Region:".bright_white().bold(), region);
    }
    if let Some(alias) = report.legacy_alias {
        println!(
            "  {} {} {} {}",
            "Alias:".bright_white().bold(),
            alias.yellow(),
            "→".dimmed(),
            report.language
        );
    }
    println!(
        "  {} {}",
        "Lookup:".bright_white().bold(),
        report.lookup_keys.join(", ")
    );
    println!();

    for (rule_type, source) in [
        (PluralRuleType::Cardinal, &report.cardinal_source),
        (PluralRuleType::Ordinal, &report.ordinal_source),
    ] {
        match source {
            Some(source) => println!("    {} {:<8} {}", "✓".green(), rule_type.as_str(), source.dimmed()),
            None => println!("    {} {:<8} {}", "○".yellow(), rule_type.as_str(), "other only".dimmed()),
        }
    }
    println!();
    Ok(())
}

#[derive(Debug, Serialize)]
struct LocalesReport<'a> {
    rule_type: PluralRuleType,
    providers: Vec<&'a str>,
    locales: Vec<String>,
}

/// List every locale some provider has rules for.
pub fn locales(selector: &PluralSelector, rule_type: PluralRuleType, json: bool) -> CliResult<()> {
    let report = LocalesReport {
        rule_type,
        providers: selector.provider_names(),
        locales: selector.supported_locales(rule_type),
    };

    if json {
        return print_json(&report);
    }

    heading(&format!("{} locales with {} rules", report.locales.len(), rule_type));
    info(&format!("Providers: {}", report.providers.join(", ")));
    println!();
    for row in report.locales.chunks(10) {
        println!("    {}", row.join(" "));
    }
    println!();
    Ok(())
}
