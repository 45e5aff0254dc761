use crate::model::AnalysisRecord;

/// Aggregate 0-100 score: start at 100 and deduct for poor readability,
/// long sentences and heavy passive voice.
pub fn overall_score(record: &AnalysisRecord) -> u8 {
    let mut score: i32 = 100;

    let ease = record.readability.flesch_reading_ease;
    if ease < 20.0 {
        score -= 20;
    } else if ease < 30.0 {
        score -= 10;
    }

    let avg_len = record.structure.avg_sentence_length;
    if avg_len > 30.0 {
        score -= 15;
    } else if avg_len > 25.0 {
        score -= 8;
    }

    let passive = record.passive_voice.passive_percentage;
    if passive > 25.0 {
        score -= 15;
    } else if passive > 15.0 {
        score -= 8;
    }

    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ease: f64, avg_len: f64, passive: f64) -> AnalysisRecord {
        let mut r = AnalysisRecord::default();
        r.readability.flesch_reading_ease = ease;
        r.structure.avg_sentence_length = avg_len;
        r.passive_voice.passive_percentage = passive;
        r
    }

    #[test]
    fn all_heavy_deductions() {
        assert_eq!(overall_score(&record(15.0, 35.0, 30.0)), 50);
    }

    #[test]
    fn all_light_deductions() {
        assert_eq!(overall_score(&record(25.0, 28.0, 20.0)), 74);
    }

    #[test]
    fn clean_text_scores_full() {
        assert_eq!(overall_score(&record(60.0, 15.0, 5.0)), 100);
    }

    #[test]
    fn thresholds_are_exclusive() {
        // exactly at the boundaries: ease 30 is not < 30, 25 is not > 25
        assert_eq!(overall_score(&record(30.0, 25.0, 15.0)), 100);
        assert_eq!(overall_score(&record(20.0, 30.0, 25.0)), 100 - 10 - 8 - 8);
    }
}
