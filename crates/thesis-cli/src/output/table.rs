use std::fmt::Write;
use thesis_core::report::AnalysisReport;

pub fn print(report: &AnalysisReport) {
    print!("{}", format_report(report));
}

/// Render a report as plain-text tables.
pub fn format_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let record = &report.record;
    let s = &record.structure;
    let r = &record.readability;

    let _ = writeln!(out, "=== Overall score: {}/100 ===\n", report.overall_score);

    let _ = writeln!(out, "Structure:");
    let _ = writeln!(out, "  {:<28} {}", "Words", s.word_count);
    let _ = writeln!(out, "  {:<28} {}", "Sentences", s.sentence_count);
    let _ = writeln!(out, "  {:<28} {}", "Paragraphs", s.paragraph_count);
    let _ = writeln!(out, "  {:<28} {}", "Avg sentence length", s.avg_sentence_length);
    let _ = writeln!(
        out,
        "  {:<28} {}",
        "Avg words per paragraph", s.avg_words_per_paragraph
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Readability:");
    let rows = [
        ("Flesch Reading Ease", r.flesch_reading_ease),
        ("Flesch-Kincaid Grade", r.flesch_kincaid_grade),
        ("Gunning Fog", r.gunning_fog),
        ("SMOG Index", r.smog_index),
        ("Automated Readability Index", r.automated_readability_index),
        ("Coleman-Liau Index", r.coleman_liau_index),
    ];
    for (name, value) in rows {
        let _ = writeln!(out, "  {:<28} {}", name, value);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Style:");
    let _ = writeln!(
        out,
        "  {:<28} {} ({}%)",
        "Passive sentences",
        record.passive_voice.passive_sentences,
        record.passive_voice.passive_percentage
    );
    let _ = writeln!(
        out,
        "  {:<28} {} ({}%)",
        "Academic transitions",
        record.academic_tone.academic_word_count,
        record.academic_tone.academic_word_ratio
    );
    let _ = writeln!(out);

    if report.recommendations.is_empty() {
        let _ = writeln!(out, "No recommendations.");
        return out;
    }

    let _ = writeln!(out, "Recommendations ({}):", report.recommendations.len());
    for rec in &report.recommendations {
        let _ = writeln!(
            out,
            "  [{:<6}] {}: {}",
            rec.severity, rec.category, rec.title
        );
        let _ = writeln!(out, "           {}", rec.description);
        let _ = writeln!(out, "           -> {}", rec.suggestion);
    }

    out
}
