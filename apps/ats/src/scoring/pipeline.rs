//! Batch orchestration: persist → extract → score → aggregate → rank.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::batch::store::Batch;
use crate::errors::AppError;
use crate::scoring::aggregate::{build_result, ComponentScores, ScoreResult};
use crate::scoring::config::ScoringConfig;
use crate::scoring::extract::extract_text;
use crate::scoring::keyword::keyword_score;
use crate::scoring::similarity::similarity;
use crate::scoring::strength::strength_score;

static JD_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").expect("static keyword regex"));

/// A single uploaded resume as received from the caller.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Distinct lowercase alphabetic words of three or more letters, sorted.
pub fn extract_job_keywords(job_description: &str) -> Vec<String> {
    let lower = job_description.to_lowercase();
    JD_WORD
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Scores one resume's extracted text against the job description.
pub fn score_text(
    filename: String,
    text: &str,
    job_description: &str,
    config: &ScoringConfig,
) -> ScoreResult {
    let components = ComponentScores {
        keyword: keyword_score(text, &config.vocabulary),
        similarity: similarity(text, job_description) * 100.0,
        strength: strength_score(text, &config.bonuses, config.strength_cap),
    };
    build_result(filename, components, &config.weights, &config.thresholds)
}

/// Runs the whole pipeline over a batch of uploads.
///
/// Rejects an empty batch or a blank job description. Uploads without a usable
/// filename are skipped. Extraction failures score as empty text.
pub fn score_batch(
    resumes: Vec<ResumeUpload>,
    job_description: &str,
    config: &ScoringConfig,
    upload_dir: &Path,
) -> Result<Batch, AppError> {
    let job_description = job_description.trim();
    if resumes.is_empty() || job_description.is_empty() {
        return Err(AppError::MissingInput(
            "Missing resumes or job description".to_string(),
        ));
    }

    let mut results = Vec::with_capacity(resumes.len());
    let mut skipped = 0;

    for upload in resumes {
        let Some(name) = safe_filename(&upload.filename) else {
            debug!(filename = %upload.filename, "Skipping upload without a usable filename");
            skipped += 1;
            continue;
        };

        persist_upload(upload_dir, &name, &upload.bytes);

        let text = extract_text(&name, &upload.bytes);
        let result = score_text(name, &text, job_description, config);
        debug!(
            filename = %result.filename,
            score = result.score,
            status = result.status.label(),
            "Scored resume"
        );
        results.push(result);
    }

    rank_results(&mut results);

    info!(
        scored = results.len(),
        skipped,
        "Batch scored"
    );

    Ok(Batch {
        batch_id: Uuid::new_v4(),
        created_at: Utc::now(),
        job_keywords: extract_job_keywords(job_description),
        skipped,
        results,
    })
}

/// Orders by score, highest first. Stable: equal scores keep upload order.
pub fn rank_results(results: &mut [ScoreResult]) {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Final path component of an uploaded filename, or `None` if nothing usable remains.
fn safe_filename(raw: &str) -> Option<String> {
    let last = raw.rsplit(['/', '\\']).next().unwrap_or("");
    match last {
        "" | "." | ".." => None,
        name => Some(name.to_string()),
    }
}

fn persist_upload(upload_dir: &Path, name: &str, bytes: &[u8]) {
    if let Err(e) = std::fs::create_dir_all(upload_dir)
        .and_then(|_| std::fs::write(upload_dir.join(name), bytes))
    {
        warn!(filename = name, "Failed to save upload: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::aggregate::Status;
    use crate::scoring::test_pdf::pdf_with_text;

    fn upload(name: &str, bytes: &[u8]) -> ResumeUpload {
        ResumeUpload {
            filename: name.to_string(),
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn test_empty_batch_is_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = score_batch(vec![], "python dev", &ScoringConfig::default(), dir.path())
            .unwrap_err();
        assert!(matches!(err, AppError::MissingInput(_)));
    }

    #[test]
    fn test_blank_job_description_is_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = score_batch(
            vec![upload("a.pdf", b"x")],
            "   \n\t ",
            &ScoringConfig::default(),
            dir.path(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::MissingInput(_)));
    }

    #[test]
    fn test_corrupt_pdf_still_scored_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let batch = score_batch(
            vec![upload("broken.pdf", b"not a pdf at all")],
            "Python developer with React experience",
            &ScoringConfig::default(),
            dir.path(),
        )
        .unwrap();

        assert_eq!(batch.results.len(), 1);
        let r = &batch.results[0];
        assert_eq!(r.filename, "broken.pdf");
        assert_eq!(r.breakdown.keyword, 0.0);
        assert_eq!(r.breakdown.strength, 0.0);
        assert_eq!(r.breakdown.similarity, 0.0);
        assert_eq!(r.score, 0.0);
        assert_eq!(r.status, Status::NotSelected);
    }

    #[test]
    fn test_uploads_are_persisted_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        score_batch(
            vec![upload("cv.pdf", b"first"), upload("cv.pdf", b"second")],
            "rust",
            &ScoringConfig::default(),
            dir.path(),
        )
        .unwrap();
        assert_eq!(std::fs::read(dir.path().join("cv.pdf")).unwrap(), b"second");
    }

    #[test]
    fn test_empty_filenames_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let batch = score_batch(
            vec![upload("", b"x"), upload("ok.pdf", b"x")],
            "rust",
            &ScoringConfig::default(),
            dir.path(),
        )
        .unwrap();
        assert_eq!(batch.results.len(), 1);
        assert_eq!(batch.results[0].filename, "ok.pdf");
        assert_eq!(batch.skipped, 1);
    }

    #[test]
    fn test_path_components_stripped_from_filename() {
        let dir = tempfile::tempdir().unwrap();
        let batch = score_batch(
            vec![upload("../../etc/cv.pdf", b"x")],
            "rust",
            &ScoringConfig::default(),
            dir.path(),
        )
        .unwrap();
        assert_eq!(batch.results[0].filename, "cv.pdf");
        assert!(dir.path().join("cv.pdf").exists());
    }

    #[test]
    fn test_safe_filename() {
        assert_eq!(safe_filename("a.pdf").as_deref(), Some("a.pdf"));
        assert_eq!(safe_filename(r"C:\docs\b.pdf").as_deref(), Some("b.pdf"));
        assert_eq!(safe_filename("dir/"), None);
        assert_eq!(safe_filename(".."), None);
        assert_eq!(safe_filename(" cv.pdf ").as_deref(), Some(" cv.pdf "));
        assert_eq!(safe_filename(""), None);
    }

    #[test]
    fn test_score_text_strong_resume() {
        let config = ScoringConfig::default();
        let text = "python javascript react node express mongodb sql api html css mern \
                    project internship hackathon github coursera";
        let r = score_text("strong.pdf".into(), text, "python react developer", &config);
        assert!(r.breakdown.keyword > 50.0);
        assert_eq!(r.breakdown.strength, 100.0);
        assert_eq!(r.status, Status::Selected);
    }

    #[test]
    fn test_score_text_is_deterministic() {
        let config = ScoringConfig::default();
        let a = score_text("a".into(), "python project", "python engineer", &config);
        let b = score_text("a".into(), "python project", "python engineer", &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_components_bounded() {
        let config = ScoringConfig::default();
        let text = "python python project github internship ai ai ai";
        let r = score_text("x".into(), text, text, &config);
        for v in [r.breakdown.keyword, r.breakdown.similarity, r.breakdown.strength, r.score] {
            assert!((0.0..=100.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_ranking_descending_and_stable() {
        // Garbage bytes all score 0, so order must match upload order.
        let dir = tempfile::tempdir().unwrap();
        let batch = score_batch(
            vec![upload("a.pdf", b"x"), upload("b.pdf", b"y"), upload("c.pdf", b"z")],
            "rust",
            &ScoringConfig::default(),
            dir.path(),
        )
        .unwrap();
        let names: Vec<_> = batch.results.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_rank_results_orders_by_score() {
        let config = ScoringConfig::default();
        let mut low = score_text("low.pdf".into(), "", "rust", &config);
        low.score = 40.0;
        let mut high = score_text("high.pdf".into(), "", "rust", &config);
        high.score = 80.0;

        let mut results = vec![low, high];
        rank_results(&mut results);
        assert_eq!(results[0].filename, "high.pdf");
        assert_eq!(results[1].filename, "low.pdf");
    }

    #[test]
    fn test_real_pdfs_ranked_strongest_first() {
        let dir = tempfile::tempdir().unwrap();
        let weak = pdf_with_text("Curriculum vitae gardening");
        let strong = pdf_with_text(
            "Python JavaScript React Node SQL API HTML CSS project internship hackathon GitHub Coursera",
        );

        let batch = score_batch(
            vec![upload("weak.pdf", &weak), upload("strong.pdf", &strong)],
            "Python React developer for project work",
            &ScoringConfig::default(),
            dir.path(),
        )
        .unwrap();

        assert_eq!(batch.results.len(), 2);
        let (first, second) = (&batch.results[0], &batch.results[1]);
        assert_eq!(first.filename, "strong.pdf");
        assert_eq!(second.filename, "weak.pdf");
        assert!(first.breakdown.keyword >= 50.0, "{first:?}");
        assert_eq!(first.breakdown.strength, 100.0);
        assert!(first.breakdown.similarity > 0.0, "{first:?}");
        assert_eq!(second.breakdown.keyword, 0.0);
        assert_eq!(second.breakdown.strength, 0.0);
        assert!(first.score > second.score);
    }

    #[test]
    fn test_job_keywords_distinct_and_sorted() {
        let kws = extract_job_keywords("Python, python and an AI/ML role: React.");
        assert_eq!(kws, vec!["and", "python", "react", "role"]);
    }
}
