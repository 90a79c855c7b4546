use crate::application::dto::FormOptions;
use crate::portal::domain::{badge_for, BadgeTier, Language, Satellite, SelectionSet};
use crate::portal::i18n::dictionary;
use crate::ports::outbound::ResultFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TextResultFormatter adapter rendering results as satellite cards
///
/// Each card shows a selection marker, the satellite name, its
/// classification badge translated to the active language, and the
/// descriptive fields the catalog provided.
pub struct TextResultFormatter {
    color: bool,
}

impl TextResultFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn heading(results_selected: usize, language: Language) -> String {
        let labels = dictionary(language);
        if results_selected > 0 {
            format!(
                "{} ({} {})",
                labels.satellites, results_selected, labels.selected_suffix
            )
        } else {
            labels.satellites.to_string()
        }
    }

    fn badge(&self, satellite: &Satellite, language: Language) -> Option<String> {
        let label = satellite.classification_label()?;
        let (text, tier) = badge_for(label, language);
        let text = format!("[{}]", text);
        if !self.color {
            return Some(text);
        }
        Some(match tier {
            BadgeTier::Gold => text.yellow().bold().to_string(),
            BadgeTier::Silver => text.bright_white().bold().to_string(),
            BadgeTier::Bronze => text.truecolor(205, 127, 50).bold().to_string(),
        })
    }

    fn title(&self, out: &mut String, text: &str) {
        if self.color {
            let _ = writeln!(out, "{}", text.bold());
        } else {
            let _ = writeln!(out, "{}", text);
        }
    }

    /// One form field: label, the flag that sets it, and its hint
    fn field(&self, out: &mut String, label: &str, flag: &str, hint: &str) {
        let hint = if self.color {
            hint.dimmed().to_string()
        } else {
            hint.to_string()
        };
        let _ = writeln!(out, "{} ({}): {}", label, flag, hint);
    }

    fn choices<'a>(out: &mut String, items: impl Iterator<Item = &'a str>) {
        for item in items {
            let _ = writeln!(out, "  - {}", item);
        }
    }

    fn card(&self, out: &mut String, satellite: &Satellite, selected: bool, language: Language) {
        let marker = if selected { "[x]" } else { "[ ]" };
        let _ = write!(out, "{} {}", marker, satellite.display_name());
        if let Some(badge) = self.badge(satellite, language) {
            let _ = write!(out, "  {}", badge);
        }
        out.push('\n');
        for (label, value) in satellite.details() {
            let line = format!("{}: {}", label, value);
            if self.color {
                let _ = writeln!(out, "    {}", line.dimmed());
            } else {
                let _ = writeln!(out, "    {}", line);
            }
        }
    }
}

impl ResultFormatter for TextResultFormatter {
    fn format(
        &self,
        results: &[Satellite],
        selection: &SelectionSet,
        language: Language,
    ) -> Result<String> {
        let mut out = String::new();
        out.push_str(&Self::heading(selection.len(), language));
        out.push_str("\n\n");

        if results.is_empty() {
            out.push_str(dictionary(language).no_results);
            out.push('\n');
            return Ok(out);
        }

        for satellite in results {
            self.card(&mut out, satellite, selection.contains(satellite), language);
        }
        Ok(out)
    }

    fn format_options(&self, options: &FormOptions) -> Result<String> {
        let labels = dictionary(options.language);
        let mut out = String::new();

        self.title(&mut out, labels.hero_title);
        let _ = writeln!(out, "{}\n", labels.hero_sub);
        self.title(&mut out, labels.portal_title);
        let _ = writeln!(out, "{}\n", labels.portal_instructions);

        self.title(&mut out, labels.client_title);
        self.field(&mut out, labels.name, "--name", labels.name_hint);
        self.field(&mut out, labels.company_id, "--company-id", labels.company_id_hint);
        self.field(&mut out, labels.address, "--address", labels.address_hint);
        self.field(&mut out, labels.email, "--email", labels.email_hint);
        self.field(&mut out, labels.sector, "--sector", labels.sector_hint);
        Self::choices(&mut out, options.sectors.iter().map(String::as_str));
        self.field(&mut out, labels.country, "--country", labels.country_hint);
        Self::choices(&mut out, options.countries.iter().map(String::as_str));
        out.push('\n');

        self.title(&mut out, labels.request_title);
        self.field(&mut out, labels.purpose, "--purpose", labels.purpose_hint);
        Self::choices(&mut out, options.purposes.iter().map(String::as_str));
        let _ = writeln!(
            out,
            "  {} (--purpose-other, {}): {} [{}]",
            labels.specify_other, options.other_purpose, labels.other_hint, labels.other_placeholder
        );
        self.field(
            &mut out,
            labels.classification,
            "--classification",
            labels.classification_hint,
        );
        Self::choices(&mut out, options.classifications.iter().map(|c| c.label.as_str()));
        self.field(&mut out, labels.delivery, "--delivery", labels.delivery_hint);
        Self::choices(&mut out, options.deliveries.iter().map(String::as_str));
        self.field(&mut out, labels.description, "--description", labels.description_hint);
        out.push('\n');

        let _ = writeln!(out, "{}: orbithub-portal filter", labels.filter_btn);
        let _ = writeln!(out, "{}: orbithub-portal submit", labels.submit_btn);
        Ok(out)
    }
}
