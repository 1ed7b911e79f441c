/*!
 * Tests for the review session controller: navigation, skip rule,
 * classification writes and pending translations
 */

use anyhow::Result;
use subvocab::session::SessionOutcome;
use subvocab::vocabulary_db::WordStatus;

use crate::common;

const SOURCE: &str = "1\n00:00:01,000 --> 00:00:02,000\nAlpha says hello to Beta\n";

/// Classifying every word in order ends with an exhausted list
#[tokio::test]
async fn test_run_withForwardClassification_shouldWriteEachWord() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let mut controller = common::scripted_controller(&dir, &["alpha", "beta"], SOURCE, "y?")?;
    let outcome = controller.run().await?;

    assert_eq!(outcome, SessionOutcome::ListExhausted);
    assert_eq!(controller.database().get("alpha").unwrap().status, WordStatus::Known);
    assert_eq!(controller.database().get("beta").unwrap().status, WordStatus::Unknown);
    Ok(())
}

/// Quit ends the session immediately without further writes
#[tokio::test]
async fn test_run_withQuitKey_shouldEndWithoutWrites() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let mut controller = common::scripted_controller(&dir, &["alpha", "beta"], SOURCE, "q")?;
    let outcome = controller.run().await?;

    assert_eq!(outcome, SessionOutcome::Quit);
    assert!(controller.database().is_empty());
    Ok(())
}

/// Already-classified words are skipped during forward navigation
#[tokio::test]
async fn test_run_withClassifiedWord_shouldSkipItForward() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::seed_database(&dir.join("db.json"), &[("beta", WordStatus::Known)])?;

    // Only alpha and gamma prompt; two keys classify them around the skip
    let mut controller =
        common::scripted_controller(&dir, &["alpha", "beta", "gamma"], SOURCE, "yn")?;
    let outcome = controller.run().await?;

    assert_eq!(outcome, SessionOutcome::ListExhausted);
    assert_eq!(controller.database().get("alpha").unwrap().status, WordStatus::Known);
    assert_eq!(controller.database().get("gamma").unwrap().status, WordStatus::Name);
    // The seeded classification was not touched
    assert_eq!(controller.database().get("beta").unwrap().source, "seed.srt");
    Ok(())
}

/// Going back re-shows the previous word even though it is already classified
#[tokio::test]
async fn test_run_withBackNavigation_shouldRevisitClassifiedWord() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    // alpha: Y; beta: B (back to alpha); alpha again: N; beta: ?
    let mut controller = common::scripted_controller(&dir, &["alpha", "beta"], SOURCE, "ybn?")?;
    let outcome = controller.run().await?;

    assert_eq!(outcome, SessionOutcome::ListExhausted);
    assert_eq!(controller.database().get("alpha").unwrap().status, WordStatus::Name);
    assert_eq!(controller.database().get("beta").unwrap().status, WordStatus::Unknown);
    Ok(())
}

/// Back from the first word clamps the cursor at zero
#[tokio::test]
async fn test_run_withBackAtStart_shouldClampAtFirstWord() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let mut controller = common::scripted_controller(&dir, &["alpha"], SOURCE, "by")?;
    let outcome = controller.run().await?;

    assert_eq!(outcome, SessionOutcome::ListExhausted);
    assert_eq!(controller.database().get("alpha").unwrap().status, WordStatus::Known);
    Ok(())
}

/// Invalid keys re-prompt without consuming a navigation step
#[tokio::test]
async fn test_run_withInvalidKey_shouldRepromptSameWord() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let mut controller = common::scripted_controller(&dir, &["alpha"], SOURCE, "zx!y")?;
    let outcome = controller.run().await?;

    assert_eq!(outcome, SessionOutcome::ListExhausted);
    assert_eq!(controller.database().get("alpha").unwrap().status, WordStatus::Known);
    Ok(())
}

/// Context lookup does not advance; the same word is prompted again
#[tokio::test]
async fn test_run_withContextCommand_shouldNotAdvance() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let mut controller = common::scripted_controller(&dir, &["alpha", "beta"], SOURCE, "cy?")?;
    let outcome = controller.run().await?;

    assert_eq!(outcome, SessionOutcome::ListExhausted);
    assert_eq!(controller.database().get("alpha").unwrap().status, WordStatus::Known);
    assert_eq!(controller.database().get("beta").unwrap().status, WordStatus::Unknown);
    Ok(())
}

/// A translation fetched during a visit is stored with the classification
#[tokio::test]
async fn test_run_withTranslateThenClassify_shouldStorePendingTranslation() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let mut controller = common::scripted_controller(&dir, &["alpha"], SOURCE, "t?")?;
    let outcome = controller.run().await?;

    assert_eq!(outcome, SessionOutcome::ListExhausted);
    let record = controller.database().get("alpha").unwrap();
    assert_eq!(record.status, WordStatus::Unknown);
    assert_eq!(record.translation.as_deref(), Some("translated"));
    Ok(())
}

/// Going back clears the pending translation
#[tokio::test]
async fn test_run_withTranslateThenBack_shouldDropPendingTranslation() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    // alpha: T then B (clamped back to alpha, pending cleared), then Y
    let mut controller = common::scripted_controller(&dir, &["alpha"], SOURCE, "tby")?;
    let outcome = controller.run().await?;

    assert_eq!(outcome, SessionOutcome::ListExhausted);
    let record = controller.database().get("alpha").unwrap();
    assert_eq!(record.status, WordStatus::Known);
    assert_eq!(record.translation, None);
    Ok(())
}

/// Classification records carry the source file name
#[tokio::test]
async fn test_run_withClassification_shouldRecordSourceFileName() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let mut controller = common::scripted_controller(&dir, &["alpha"], SOURCE, "y")?;
    controller.run().await?;

    assert_eq!(controller.database().get("alpha").unwrap().source, "episode.srt");
    Ok(())
}

/// Startup stats count total and not-yet-classified words
#[tokio::test]
async fn test_stats_withPartiallyClassifiedList_shouldCountNewWords() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::seed_database(&dir.join("db.json"), &[("alpha", WordStatus::Known)])?;

    let controller = common::scripted_controller(&dir, &["alpha", "beta", "gamma"], SOURCE, "")?;
    assert_eq!(controller.stats(), (3, 2));
    Ok(())
}

/// An empty review list ends immediately without reading any key
#[tokio::test]
async fn test_run_withEmptyList_shouldExhaustImmediately() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let mut controller = common::scripted_controller(&dir, &[], SOURCE, "")?;
    let outcome = controller.run().await?;

    assert_eq!(outcome, SessionOutcome::ListExhausted);
    Ok(())
}
